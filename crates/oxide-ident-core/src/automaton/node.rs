//! Symbol nodes: the vertices of the automaton graph.

use std::fmt;

use serde::Serialize;

/// Stable index of a node inside a [`Graph`](super::Graph) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tag naming one captured sub-part of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CaptureId(char);

impl CaptureId {
    /// Creates a capture tag.
    #[must_use]
    pub const fn new(tag: char) -> Self {
        Self(tag)
    }

    /// Returns the tag character.
    #[must_use]
    pub const fn tag(self) -> char {
        self.0
    }
}

impl fmt::Display for CaptureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of node behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// Matches one literal character, appending it to the active capture
    /// when `captures` is set.
    Terminal {
        /// The character to match.
        ch: char,
        /// Whether a match is recorded in the active capture.
        captures: bool,
    },
    /// Always matches without consuming input.
    Empty,
    /// Matches one whitespace character. Never captures.
    Whitespace,
    /// Matches one identifier character and captures it.
    ///
    /// Unquoted, anything but the identifier delimiter, the schema
    /// separator, whitespace and end of input. Quoted, anything but the
    /// identifier delimiter and end of input.
    IdentifierChar {
        /// Whether the character sits between identifier delimiters.
        quoted: bool,
    },
    /// Matches the configured identifier delimiter. Never captures.
    IdentifierDelimiter,
    /// Matches the configured schema separator. Never captures.
    SchemaSeparator,
    /// Walks a sub-graph, recording consumed identifier text under `capture`.
    NonTerminal {
        /// First node of the sub-graph.
        entry: NodeId,
        /// Capture slot reset on every entry; `None` clears the active capture.
        capture: Option<CaptureId>,
    },
}

impl SymbolKind {
    /// Returns true for kinds that read a character from the input.
    #[must_use]
    pub const fn reads_input(&self) -> bool {
        !matches!(self, Self::Empty | Self::NonTerminal { .. })
    }
}

/// One vertex of the automaton graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub(crate) label: &'static str,
    pub(crate) kind: SymbolKind,
    pub(crate) on_success: Option<NodeId>,
    pub(crate) on_failure: Option<NodeId>,
}

impl Symbol {
    pub(crate) const fn new(label: &'static str, kind: SymbolKind) -> Self {
        Self {
            label,
            kind,
            on_success: None,
            on_failure: None,
        }
    }

    /// Returns the diagnostic label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the node behavior.
    #[must_use]
    pub const fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// Returns the node visited after a match.
    #[must_use]
    pub const fn on_success(&self) -> Option<NodeId> {
        self.on_success
    }

    /// Returns the node visited after a non-match; `None` halts the walk.
    #[must_use]
    pub const fn on_failure(&self) -> Option<NodeId> {
        self.on_failure
    }

    /// Picks the successor for a match result.
    #[must_use]
    pub const fn branch(&self, matched: bool) -> Option<NodeId> {
        if matched {
            self.on_success
        } else {
            self.on_failure
        }
    }
}
