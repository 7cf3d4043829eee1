//! The qualified identifier grammar: `[schema.]name`, each part optionally
//! quoted, surrounded by optional whitespace.
//!
//! ```text
//! start --> ws* --> first --+-- separator --> second --+--> ws* --> end
//!                           |                          ^
//!                           +--------------------------+
//!
//! first / second:  delimiter quoted-char+ delimiter  |  plain-char+
//! ```
//!
//! The part before the separator is captured under [`FIRST_PART`] (`B`),
//! the part after it under [`SECOND_PART`] (`C`).

use std::sync::OnceLock;

use crate::automaton::{CaptureId, Graph, GraphBuilder, NodeId, SymbolKind};
use crate::error::GraphError;

/// Capture id of the first identifier (schema, or the only name).
pub const FIRST_PART: CaptureId = CaptureId::new('B');

/// Capture id of the identifier after the schema separator.
pub const SECOND_PART: CaptureId = CaptureId::new('C');

/// Builds `one-or-more` of `kind`: a head node followed by a self-looping
/// tail that exits through an empty node. Returns the head.
fn repeat_one_or_more(
    b: &mut GraphBuilder,
    labels: [&'static str; 3],
    kind: SymbolKind,
) -> NodeId {
    let [head_label, tail_label, done_label] = labels;
    let head = b.add(head_label, kind);
    let tail = b.add(tail_label, kind);
    let done = b.add(done_label, SymbolKind::Empty);
    b.link(head, Some(tail), None);
    b.link(tail, Some(tail), Some(done));
    head
}

/// Builds `zero-or-more` whitespace continuing at `next`. Returns the loop node.
fn whitespace_loop(
    b: &mut GraphBuilder,
    labels: [&'static str; 2],
    next: Option<NodeId>,
) -> NodeId {
    let [space_label, done_label] = labels;
    let space = b.add(space_label, SymbolKind::Whitespace);
    let done = b.add(done_label, SymbolKind::Empty);
    b.link(space, Some(space), Some(done));
    b.link(done, next, None);
    space
}

/// Builds the quoted-or-plain alternative for one identifier part,
/// continuing at `next` on success. Returns the opening delimiter node.
fn identifier_part(
    b: &mut GraphBuilder,
    labels: [&'static str; 4],
    capture: CaptureId,
    quoted_body: NodeId,
    plain_body: NodeId,
    next: NodeId,
) -> NodeId {
    let [open_label, quoted_label, close_label, plain_label] = labels;
    let open = b.add(open_label, SymbolKind::IdentifierDelimiter);
    let quoted = b.add(
        quoted_label,
        SymbolKind::NonTerminal {
            entry: quoted_body,
            capture: Some(capture),
        },
    );
    let close = b.add(close_label, SymbolKind::IdentifierDelimiter);
    let plain = b.add(
        plain_label,
        SymbolKind::NonTerminal {
            entry: plain_body,
            capture: Some(capture),
        },
    );
    b.link(open, Some(quoted), Some(plain));
    b.link(quoted, Some(close), None);
    b.link(close, Some(next), None);
    b.link(plain, Some(next), None);
    open
}

/// The assembled qualified identifier automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedIdentifier {
    graph: Graph,
}

/// Adds every grammar node to a builder and returns it with the entry node.
fn wire() -> (GraphBuilder, NodeId) {
    let mut b = GraphBuilder::new();

    // Identifier bodies, shared by both parts.
    let plain_body = repeat_one_or_more(
        &mut b,
        ["plain char", "plain char repeat", "plain end"],
        SymbolKind::IdentifierChar { quoted: false },
    );
    let quoted_body = repeat_one_or_more(
        &mut b,
        ["quoted char", "quoted char repeat", "quoted end"],
        SymbolKind::IdentifierChar { quoted: true },
    );

    let trailing = whitespace_loop(&mut b, ["trailing space", "trailing end"], None);

    let second = identifier_part(
        &mut b,
        ["second open", "second quoted", "second close", "second plain"],
        SECOND_PART,
        quoted_body,
        plain_body,
        trailing,
    );

    let separator = b.add("separator", SymbolKind::SchemaSeparator);
    b.link(separator, Some(second), Some(trailing));

    let first = identifier_part(
        &mut b,
        ["first open", "first quoted", "first close", "first plain"],
        FIRST_PART,
        quoted_body,
        plain_body,
        separator,
    );

    let leading = whitespace_loop(&mut b, ["leading space", "leading end"], Some(first));

    let start = b.add(
        "start",
        SymbolKind::NonTerminal {
            entry: leading,
            capture: None,
        },
    );

    (b, start)
}

impl QualifiedIdentifier {
    /// Wires the grammar graph and validates it.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] if the wiring is inconsistent.
    pub fn new() -> Result<Self, GraphError> {
        let (builder, start) = wire();
        Ok(Self {
            graph: builder.build(start)?,
        })
    }

    /// Returns the process-wide instance, building it on first use.
    ///
    /// The wiring is fixed and tested against [`QualifiedIdentifier::new`],
    /// so this skips validation and cannot fail.
    #[must_use]
    pub fn shared() -> &'static Self {
        static GRAMMAR: OnceLock<QualifiedIdentifier> = OnceLock::new();
        GRAMMAR.get_or_init(|| {
            let (builder, start) = wire();
            Self {
                graph: builder.build_unchecked(start),
            }
        })
    }

    /// Returns the underlying graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }
}
