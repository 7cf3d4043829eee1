//! # oxide-ident-core
//!
//! A hand-wired parsing automaton for schema-qualified SQL identifiers.
//!
//! This crate provides:
//! - A small automaton engine: an arena of symbol nodes joined by success
//!   and failure links, walked one character at a time
//! - The `[schema.]name` grammar built on it, with optional quoting and
//!   surrounding whitespace
//! - Dialect presets for the identifier quote character
//!
//! ## Parsing
//!
//! ```rust
//! use oxide_ident_core::{GrammarConfig, IdentifierParser, QualifiedName};
//!
//! let parser = IdentifierParser::new(GrammarConfig::default());
//!
//! let outcome = parser.parse("  \"my schema\".users ");
//! assert!(outcome.is_success());
//! assert_eq!(outcome.first_part(), "my schema");
//! assert_eq!(outcome.second_part(), "users");
//! assert_eq!(
//!     outcome.qualified_name(),
//!     Some(QualifiedName::qualified("my schema", "users"))
//! );
//!
//! // A valid prefix followed by leftover input is not a match.
//! assert!(!parser.parse("users orders").is_success());
//! ```
//!
//! ## Custom automata
//!
//! ```rust
//! use oxide_ident_core::automaton::{GraphBuilder, MatchContext, Matcher, SymbolKind};
//! use oxide_ident_core::GrammarConfig;
//!
//! // zero or more whitespace characters
//! let mut builder = GraphBuilder::new();
//! let space = builder.add("space", SymbolKind::Whitespace);
//! let done = builder.add("done", SymbolKind::Empty);
//! builder.link(space, Some(space), Some(done));
//! let graph = builder.build(space).unwrap();
//!
//! let matcher = Matcher::new(&graph, GrammarConfig::default());
//! let mut ctx = MatchContext::new("   ");
//! assert!(matcher.run(&mut ctx));
//! assert!(ctx.at_end());
//! ```

pub mod automaton;
pub mod classify;
pub mod config;
pub mod dialect;
pub mod driver;
pub mod error;
pub mod grammar;

pub use classify::{AsciiClassifier, CharClassifier};
pub use config::GrammarConfig;
pub use dialect::{Dialect, Preset};
pub use driver::{parse, IdentifierParser, MatchStatus, ParseOutcome, QualifiedName};
pub use error::{ConfigError, Error, GraphError, Result};
pub use grammar::{QualifiedIdentifier, FIRST_PART, SECOND_PART};
