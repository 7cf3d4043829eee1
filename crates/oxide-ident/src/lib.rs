//! Command-line checker for schema-qualified SQL identifiers.
//!
//! Every input string is run through the `oxide-ident-core` automaton and
//! reported either as a line of text or as a JSON object.
//!
//! # CLI Usage
//!
//! ```bash
//! # Check identifiers given as arguments
//! oxide-ident 'public.users' '"my schema".orders'
//!
//! # One identifier per line from a file, MySQL quoting, JSON output
//! oxide-ident --dialect mysql --file names.txt --json
//!
//! # Custom delimiters
//! oxide-ident --quote '[' --separator ':' '[a b[:c'
//! ```

pub mod error;
pub mod input;
pub mod report;

use oxide_ident_core::{dialect, CharClassifier, Dialect, GrammarConfig, IdentifierParser};
use tracing::debug;

pub use error::{CliError, Result};
pub use report::{OutputFormat, Report};

/// Builds the grammar configuration from a dialect name and optional
/// per-character overrides.
///
/// # Errors
///
/// Returns [`CliError::UnknownDialect`] for an unknown preset and a
/// configuration error if the resulting characters are invalid.
pub fn resolve_config(
    dialect_name: &str,
    quote: Option<char>,
    separator: Option<char>,
) -> Result<GrammarConfig> {
    let preset = dialect::by_name(dialect_name)
        .ok_or_else(|| CliError::UnknownDialect(dialect_name.to_string()))?;
    let config = GrammarConfig::new(
        quote.unwrap_or_else(|| preset.identifier_quote()),
        separator.unwrap_or_else(|| preset.schema_separator()),
    )?;
    debug!(
        dialect = preset.name(),
        quote = %config.identifier_delimiter(),
        separator = %config.schema_separator(),
        "resolved grammar configuration"
    );
    Ok(config)
}

/// Parses every input and collects the reports, in input order.
#[must_use]
pub fn check<C: CharClassifier>(parser: &IdentifierParser<C>, inputs: &[String]) -> Vec<Report> {
    inputs
        .iter()
        .map(|input| Report::new(input, parser.parse(input)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_dialect_defaults() {
        let config = resolve_config("mysql", None, None).unwrap();
        assert_eq!(config.identifier_delimiter(), '`');
        assert_eq!(config.schema_separator(), '.');
    }

    #[test]
    fn test_resolve_overrides() {
        let config = resolve_config("generic", Some('['), Some(':')).unwrap();
        assert_eq!(config.identifier_delimiter(), '[');
        assert_eq!(config.schema_separator(), ':');
    }

    #[test]
    fn test_resolve_unknown_dialect() {
        assert!(matches!(
            resolve_config("oracle", None, None),
            Err(CliError::UnknownDialect(name)) if name == "oracle"
        ));
    }

    #[test]
    fn test_resolve_invalid_override() {
        let err = resolve_config("generic", Some('.'), None).unwrap_err();
        assert!(err.to_string().contains("must differ"), "{err}");
    }

    #[test]
    fn test_check_keeps_order() {
        let parser = IdentifierParser::new(GrammarConfig::default());
        let reports = check(&parser, &["a.b".to_string(), "x y".to_string()]);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].input, "a.b");
        assert!(reports[0].outcome.is_success());
        assert!(!reports[1].outcome.is_success());
    }
}
