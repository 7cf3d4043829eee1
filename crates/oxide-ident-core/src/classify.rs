//! Character classification used by the whitespace-sensitive nodes.

/// Decides which characters count as whitespace for the grammar.
pub trait CharClassifier {
    /// Returns true if `ch` separates tokens.
    fn is_whitespace(&self, ch: char) -> bool;
}

/// The C-locale `isspace` set: space, tab, newline, vertical tab, form feed
/// and carriage return. Unicode whitespace is deliberately not recognized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AsciiClassifier;

impl AsciiClassifier {
    /// Creates a new ASCII classifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CharClassifier for AsciiClassifier {
    fn is_whitespace(&self, ch: char) -> bool {
        matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
    }
}

impl<F> CharClassifier for F
where
    F: Fn(char) -> bool,
{
    fn is_whitespace(&self, ch: char) -> bool {
        self(ch)
    }
}
