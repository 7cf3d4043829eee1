//! SQL dialect presets.
//!
//! Databases disagree on how identifiers are quoted. A dialect supplies the
//! two delimiter characters a [`GrammarConfig`](crate::GrammarConfig) is
//! built from. The built-in presets are plain data; implement [`Dialect`]
//! for anything that needs more.

/// Trait for dialect-specific identifier syntax.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns the character separating a schema from the object name.
    fn schema_separator(&self) -> char {
        '.'
    }

    /// Wraps an identifier in quote characters.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        format!("{quote}{name}{quote}")
    }
}

/// A named pair of delimiter characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    name: &'static str,
    identifier_quote: char,
    schema_separator: char,
}

impl Preset {
    /// Creates a preset. The characters are checked when a
    /// [`GrammarConfig`](crate::GrammarConfig) is built from it.
    #[must_use]
    pub const fn new(name: &'static str, identifier_quote: char, schema_separator: char) -> Self {
        Self {
            name,
            identifier_quote,
            schema_separator,
        }
    }
}

impl Dialect for Preset {
    fn name(&self) -> &'static str {
        self.name
    }

    fn identifier_quote(&self) -> char {
        self.identifier_quote
    }

    fn schema_separator(&self) -> char {
        self.schema_separator
    }
}

/// ANSI SQL: double-quoted identifiers.
pub const GENERIC: Preset = Preset::new("generic", '"', '.');

/// MySQL: backticks. Double quotes only with `ANSI_QUOTES` enabled.
pub const MYSQL: Preset = Preset::new("mysql", '`', '.');

/// SQLite also accepts backticks and brackets, but double quotes are standard.
pub const SQLITE: Preset = Preset::new("sqlite", '"', '.');

/// Every built-in preset.
pub const PRESETS: [Preset; 3] = [GENERIC, MYSQL, SQLITE];

/// Looks up a built-in preset by its [`Dialect::name`], ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Preset> {
    PRESETS
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("mysql"), Some(MYSQL));
        assert_eq!(by_name("SQLite").map(|d| d.name()), Some("sqlite"));
        assert!(by_name("oracle").is_none());
    }

    #[test]
    fn test_preset_delimiters() {
        let quotes: Vec<char> = PRESETS.iter().map(Dialect::identifier_quote).collect();
        assert_eq!(quotes, vec!['"', '`', '"']);
        assert!(PRESETS.iter().all(|p| p.schema_separator() == '.'));
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(GENERIC.quote_identifier("my table"), "\"my table\"");
        assert_eq!(MYSQL.quote_identifier("my table"), "`my table`");
    }

    #[test]
    fn test_custom_preset() {
        let preset = Preset::new("brackets", '[', ':');
        assert_eq!(preset.quote_identifier("a b"), "[a b[");
        assert_eq!(preset.schema_separator(), ':');
    }

    #[test]
    fn test_trait_defaults() {
        struct Ansi;
        impl Dialect for Ansi {
            fn name(&self) -> &'static str {
                "ansi"
            }
        }
        assert_eq!(Ansi.identifier_quote(), '"');
        assert_eq!(Ansi.schema_separator(), '.');
    }
}
