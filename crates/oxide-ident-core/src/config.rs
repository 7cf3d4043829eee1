//! Grammar configuration: the two delimiter characters the grammar is
//! parameterized over.

use serde::{Deserialize, Serialize};

use crate::classify::{AsciiClassifier, CharClassifier};
use crate::dialect::Dialect;
use crate::error::ConfigError;

/// The identifier delimiter and schema separator of a parse run.
///
/// Both characters are validated at construction: they must differ, must
/// not be NUL and must not be whitespace. A `GrammarConfig` that exists is
/// always usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrammarConfig")]
pub struct GrammarConfig {
    identifier_delimiter: char,
    schema_separator: char,
}

/// Unvalidated form of [`GrammarConfig`], used for deserialization.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawGrammarConfig {
    /// Character that opens and closes a quoted identifier.
    pub identifier_delimiter: char,
    /// Character between the schema and the object name.
    pub schema_separator: char,
}

impl GrammarConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the characters are equal, if either is
    /// NUL, or if either is whitespace.
    pub fn new(identifier_delimiter: char, schema_separator: char) -> Result<Self, ConfigError> {
        let classifier = AsciiClassifier::new();
        for ch in [identifier_delimiter, schema_separator] {
            if ch == '\0' {
                return Err(ConfigError::ReservedCharacter(ch));
            }
            if classifier.is_whitespace(ch) {
                return Err(ConfigError::WhitespaceDelimiter(ch));
            }
        }
        if identifier_delimiter == schema_separator {
            return Err(ConfigError::SameDelimiter(identifier_delimiter));
        }
        Ok(Self {
            identifier_delimiter,
            schema_separator,
        })
    }

    /// Creates a configuration from a dialect's quoting rules.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the dialect's characters are invalid.
    pub fn from_dialect<D: Dialect + ?Sized>(dialect: &D) -> Result<Self, ConfigError> {
        Self::new(dialect.identifier_quote(), dialect.schema_separator())
    }

    /// Returns the character that opens and closes a quoted identifier.
    #[must_use]
    pub const fn identifier_delimiter(&self) -> char {
        self.identifier_delimiter
    }

    /// Returns the character between schema and name.
    #[must_use]
    pub const fn schema_separator(&self) -> char {
        self.schema_separator
    }
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            identifier_delimiter: '"',
            schema_separator: '.',
        }
    }
}

impl TryFrom<RawGrammarConfig> for GrammarConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGrammarConfig) -> Result<Self, Self::Error> {
        Self::new(raw.identifier_delimiter, raw.schema_separator)
    }
}
