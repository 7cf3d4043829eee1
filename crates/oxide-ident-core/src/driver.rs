//! Runs the qualified identifier automaton over input strings.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::automaton::{CaptureId, MatchContext, Matcher};
use crate::classify::{AsciiClassifier, CharClassifier};
use crate::config::GrammarConfig;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::grammar::{QualifiedIdentifier, FIRST_PART, SECOND_PART};

/// How a parse ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum MatchStatus {
    /// The whole input is a qualified identifier.
    Matched,
    /// The automaton rejected the input.
    NoMatch,
    /// The automaton accepted a prefix but input remains at `position`.
    TrailingInput {
        /// Byte offset of the first unconsumed character.
        position: usize,
    },
}

impl MatchStatus {
    /// Returns true only for a complete match.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Matched)
    }
}

/// Result of one parse: the status and the captured identifier text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    status: MatchStatus,
    consumed: usize,
    captures: BTreeMap<CaptureId, String>,
}

impl ParseOutcome {
    /// Returns how the parse ended.
    #[must_use]
    pub const fn status(&self) -> MatchStatus {
        self.status
    }

    /// Returns true if the whole input matched.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Byte offset where the walk halted.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.consumed
    }

    /// Returns the text captured under `id`, or `""`.
    #[must_use]
    pub fn capture(&self, id: CaptureId) -> &str {
        self.captures.get(&id).map_or("", String::as_str)
    }

    /// Returns the identifier before the separator (capture `B`).
    #[must_use]
    pub fn first_part(&self) -> &str {
        self.capture(FIRST_PART)
    }

    /// Returns the identifier after the separator (capture `C`).
    #[must_use]
    pub fn second_part(&self) -> &str {
        self.capture(SECOND_PART)
    }

    /// Interprets the captures as a schema-qualified name.
    ///
    /// Returns `None` unless the parse succeeded.
    #[must_use]
    pub fn qualified_name(&self) -> Option<QualifiedName> {
        if !self.is_success() {
            return None;
        }
        let first = self.first_part().to_string();
        let name = match self.captures.get(&SECOND_PART) {
            Some(second) => QualifiedName {
                schema: Some(first),
                name: second.clone(),
            },
            None => QualifiedName {
                schema: None,
                name: first,
            },
        };
        Some(name)
    }
}

/// A parsed `[schema.]name` with delimiters and whitespace stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QualifiedName {
    /// The schema part, if the input had a separator.
    pub schema: Option<String>,
    /// The object name.
    pub name: String,
}

impl QualifiedName {
    /// Creates a name without a schema.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }

    /// Creates a schema-qualified name.
    #[must_use]
    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            name: name.into(),
        }
    }

    /// Joins the parts with the configured separator, without quoting.
    #[must_use]
    pub fn joined(&self, config: &GrammarConfig) -> String {
        match &self.schema {
            Some(schema) => format!("{schema}{}{}", config.schema_separator(), self.name),
            None => self.name.clone(),
        }
    }

    /// Renders every part quoted with the dialect's identifier quote.
    #[must_use]
    pub fn quoted<D: Dialect + ?Sized>(&self, dialect: &D) -> String {
        let name = dialect.quote_identifier(&self.name);
        match &self.schema {
            Some(schema) => format!(
                "{}{}{name}",
                dialect.quote_identifier(schema),
                dialect.schema_separator()
            ),
            None => name,
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined(&GrammarConfig::default()))
    }
}

/// Parses qualified identifiers with a fixed configuration.
///
/// The grammar graph is built once per process and shared read-only by
/// every parser, so parsers are cheap to create and safe to use from
/// several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierParser<C = AsciiClassifier> {
    grammar: &'static QualifiedIdentifier,
    config: GrammarConfig,
    classifier: C,
}

impl IdentifierParser {
    /// Creates a parser for `config`.
    #[must_use]
    pub fn new(config: GrammarConfig) -> Self {
        Self::with_classifier(config, AsciiClassifier::new())
    }

    /// Creates a parser using a dialect's quoting rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the dialect's delimiters are invalid.
    pub fn for_dialect<D: Dialect + ?Sized>(dialect: &D) -> Result<Self> {
        Ok(Self::new(GrammarConfig::from_dialect(dialect)?))
    }
}

impl<C: CharClassifier> IdentifierParser<C> {
    /// Creates a parser with a custom whitespace classifier.
    #[must_use]
    pub fn with_classifier(config: GrammarConfig, classifier: C) -> Self {
        Self {
            grammar: QualifiedIdentifier::shared(),
            config,
            classifier,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &GrammarConfig {
        &self.config
    }

    /// Parses `input`. Never fails: a non-match is reported in the outcome.
    ///
    /// A walk that matches but leaves characters unconsumed is reported as
    /// [`MatchStatus::TrailingInput`], which is not a success.
    #[must_use]
    pub fn parse(&self, input: &str) -> ParseOutcome {
        let classifier = |ch: char| self.classifier.is_whitespace(ch);
        let matcher = Matcher::with_classifier(self.grammar.graph(), self.config, classifier);
        let mut ctx = MatchContext::new(input);
        let matched = matcher.run(&mut ctx);
        let status = if !matched {
            MatchStatus::NoMatch
        } else if ctx.at_end() {
            MatchStatus::Matched
        } else {
            MatchStatus::TrailingInput {
                position: ctx.position(),
            }
        };
        debug!(input, status = ?status, "parsed identifier");
        ParseOutcome {
            status,
            consumed: ctx.position(),
            captures: ctx.into_captures(),
        }
    }
}

/// Parses `input` with `config` using the shared grammar.
#[must_use]
pub fn parse(input: &str, config: &GrammarConfig) -> ParseOutcome {
    IdentifierParser::new(*config).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{GENERIC, MYSQL};

    fn parser() -> IdentifierParser {
        IdentifierParser::new(GrammarConfig::default())
    }

    #[test]
    fn test_single_name() {
        let out = parser().parse("abc");
        assert_eq!(out.status(), MatchStatus::Matched);
        assert_eq!(out.first_part(), "abc");
        assert_eq!(out.second_part(), "");
        assert_eq!(out.qualified_name(), Some(QualifiedName::new("abc")));
    }

    #[test]
    fn test_schema_and_table() {
        let out = parser().parse("schema.table");
        assert!(out.is_success());
        assert_eq!(
            out.qualified_name(),
            Some(QualifiedName::qualified("schema", "table"))
        );
    }

    #[test]
    fn test_trailing_input_status() {
        let out = parser().parse("abc x");
        assert_eq!(out.status(), MatchStatus::TrailingInput { position: 4 });
        assert!(!out.is_success());
        assert_eq!(out.qualified_name(), None);
    }

    #[test]
    fn test_no_match_status() {
        let out = parser().parse("   ");
        assert_eq!(out.status(), MatchStatus::NoMatch);
        assert_eq!(out.consumed(), 3);
        assert_eq!(out.first_part(), "");
    }

    #[test]
    fn test_for_dialect() {
        let parser = IdentifierParser::for_dialect(&MYSQL).unwrap();
        let out = parser.parse("`my db`.`my table`");
        assert_eq!(out.first_part(), "my db");
        assert_eq!(out.second_part(), "my table");
        // double quotes are ordinary characters here
        assert_eq!(parser.parse("\"x\"").first_part(), "\"x\"");
    }

    #[test]
    fn test_custom_classifier() {
        let parser =
            IdentifierParser::with_classifier(GrammarConfig::default(), |ch: char| ch == '_');
        let out = parser.parse("__a b__");
        assert!(out.is_success());
        assert_eq!(out.first_part(), "a b");
    }

    #[test]
    fn test_free_parse() {
        let out = parse(" x ", &GrammarConfig::default());
        assert_eq!(out.first_part(), "x");
        assert!(!parse("x y", &GrammarConfig::default()).is_success());
    }

    #[test]
    fn test_qualified_name_rendering() {
        let name = QualifiedName::qualified("my schema", "t");
        assert_eq!(name.to_string(), "my schema.t");
        assert_eq!(name.quoted(&GENERIC), "\"my schema\".\"t\"");
        assert_eq!(name.quoted(&MYSQL), "`my schema`.`t`");
        let config = GrammarConfig::new('"', ':').unwrap();
        assert_eq!(name.joined(&config), "my schema:t");
    }

    #[test]
    fn test_outcome_serializes() {
        let json = serde_json::to_value(parser().parse("a.b")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": {"kind": "matched"},
                "consumed": 3,
                "captures": {"B": "a", "C": "b"}
            })
        );
    }
}
