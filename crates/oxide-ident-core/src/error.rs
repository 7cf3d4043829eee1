//! Error types for grammar configuration and automaton construction.
//!
//! Matching never fails with an error: a non-match is an ordinary
//! [`MatchStatus`](crate::driver::MatchStatus). Errors only surface when a
//! configuration or a graph is built.

use thiserror::Error;

/// A rejected grammar configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The identifier delimiter and the schema separator are the same character.
    #[error("identifier delimiter and schema separator must differ, both are {0:?}")]
    SameDelimiter(char),

    /// NUL spells the "no character" sentinel and cannot be a delimiter.
    #[error("{0:?} is reserved for end of input")]
    ReservedCharacter(char),

    /// Whitespace separates tokens in the grammar and cannot be a delimiter.
    #[error("whitespace character {0:?} cannot be used as a delimiter")]
    WhitespaceDelimiter(char),
}

/// A rejected automaton graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A link or non-terminal entry points outside the node arena.
    #[error("node '{from}' links to node #{target}, which does not exist")]
    DanglingLink {
        /// Label of the node holding the link.
        from: &'static str,
        /// Arena index of the missing target.
        target: usize,
    },

    /// A builder call named a node that was never added.
    #[error("node #{0} was never added to the builder")]
    UnknownNode(usize),

    /// The graph has no entry node.
    #[error("automaton graph has no entry node")]
    MissingEntry,

    /// A non-terminal can re-enter itself through its own sub-graph.
    #[error("non-terminal '{label}' is recursive")]
    RecursiveNonTerminal {
        /// Label of the offending non-terminal.
        label: &'static str,
    },

    /// Links lead from a node back to itself without reading a character,
    /// so a walk through it would never halt.
    #[error("node '{label}' can loop without consuming input")]
    NonConsumingCycle {
        /// Label of a node on the cycle.
        label: &'static str,
    },
}

/// Any error raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid grammar configuration.
    #[error("invalid grammar configuration: {0}")]
    Config(#[from] ConfigError),

    /// Invalid automaton graph.
    #[error("invalid automaton graph: {0}")]
    Graph(#[from] GraphError),
}

/// Result type alias for fallible construction.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::SameDelimiter('.').to_string(),
            "identifier delimiter and schema separator must differ, both are '.'"
        );
        assert_eq!(
            ConfigError::ReservedCharacter('\0').to_string(),
            "'\\0' is reserved for end of input"
        );
    }

    #[test]
    fn test_error_wraps_sources() {
        let err: Error = GraphError::RecursiveNonTerminal { label: "name" }.into();
        assert_eq!(
            err.to_string(),
            "invalid automaton graph: non-terminal 'name' is recursive"
        );
        assert_eq!(
            GraphError::UnknownNode(5).to_string(),
            "node #5 was never added to the builder"
        );
        assert_eq!(
            GraphError::NonConsumingCycle { label: "idle" }.to_string(),
            "node 'idle' can loop without consuming input"
        );
        let err: Error = ConfigError::WhitespaceDelimiter(' ').into();
        assert!(matches!(err, Error::Config(ConfigError::WhitespaceDelimiter(' '))));
    }
}
