//! Error types for the command-line front end.

use std::path::PathBuf;

/// Errors that stop a run before or while reading input.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The requested dialect preset does not exist.
    #[error("Unknown dialect '{0}' (expected generic, mysql or sqlite)")]
    UnknownDialect(String),

    /// The delimiter configuration is invalid.
    #[error(transparent)]
    Core(#[from] oxide_ident_core::Error),

    /// The input file could not be read.
    #[error("Failed to read '{path}': {source}")]
    ReadInput {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// IO error on stdin or stdout.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error for JSON output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<oxide_ident_core::ConfigError> for CliError {
    fn from(err: oxide_ident_core::ConfigError) -> Self {
        Self::Core(err.into())
    }
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
