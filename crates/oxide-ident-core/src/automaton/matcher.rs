//! Walking the automaton graph over a match context.

use tracing::{debug, trace};

use super::context::MatchContext;
use super::graph::Graph;
use super::node::{NodeId, Symbol, SymbolKind};
use crate::classify::{AsciiClassifier, CharClassifier};
use crate::config::GrammarConfig;

/// Binds a graph to the configuration and classifier its nodes consult.
///
/// A matcher holds no per-parse state and can be shared freely; all
/// mutation happens in the [`MatchContext`] passed to [`Matcher::run`].
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'g, C = AsciiClassifier> {
    graph: &'g Graph,
    config: GrammarConfig,
    classifier: C,
}

impl<'g> Matcher<'g> {
    /// Creates a matcher using ASCII whitespace classification.
    #[must_use]
    pub const fn new(graph: &'g Graph, config: GrammarConfig) -> Self {
        Self::with_classifier(graph, config, AsciiClassifier::new())
    }
}

impl<'g, C: CharClassifier> Matcher<'g, C> {
    /// Creates a matcher with a custom whitespace classifier.
    #[must_use]
    pub const fn with_classifier(graph: &'g Graph, config: GrammarConfig, classifier: C) -> Self {
        Self {
            graph,
            config,
            classifier,
        }
    }

    /// Returns the graph being walked.
    #[must_use]
    pub const fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Walks from the graph's entry node until no link is left to follow.
    /// The final result is left in [`MatchContext::matched`].
    pub fn run(&self, ctx: &mut MatchContext<'_>) -> bool {
        self.walk(self.graph.entry(), ctx);
        ctx.matched()
    }

    /// Walks from `entry` until a node yields no successor. An id outside
    /// the graph halts the walk like a missing link.
    fn walk(&self, entry: NodeId, ctx: &mut MatchContext<'_>) {
        let mut current = Some(entry);
        while let Some(id) = current {
            let Some(symbol) = self.graph.get(id) else {
                debug!(node = %id, "no such node, halting");
                break;
            };
            current = self.evaluate(symbol, ctx);
        }
    }

    /// Evaluates one node and returns the node to visit next.
    fn evaluate(&self, symbol: &Symbol, ctx: &mut MatchContext<'_>) -> Option<NodeId> {
        match symbol.kind {
            SymbolKind::Empty => {
                ctx.set_matched(true);
                trace!(node = symbol.label, "empty");
                symbol.on_success
            }
            SymbolKind::NonTerminal { entry, capture } => {
                debug!(node = symbol.label, capture = ?capture, pos = ctx.position(), "enter");
                ctx.begin_capture(capture);
                self.walk(entry, ctx);
                debug!(node = symbol.label, matched = ctx.matched(), pos = ctx.position(), "leave");
                symbol.branch(ctx.matched())
            }
            kind => {
                let current = ctx.current_character();
                let (matched, captures) = match current {
                    Some(ch) => (self.accepts(kind, ch), captures_text(kind)),
                    None => (false, false),
                };
                trace!(node = symbol.label, ch = ?current, matched, "evaluate");
                ctx.set_matched(matched);
                if matched {
                    if let (true, Some(ch)) = (captures, current) {
                        ctx.append_to_active_capture(ch);
                    }
                    ctx.advance();
                }
                symbol.branch(matched)
            }
        }
    }

    /// Character test for the input-reading kinds. End of input never
    /// reaches here.
    fn accepts(&self, kind: SymbolKind, ch: char) -> bool {
        let delimiter = self.config.identifier_delimiter();
        match kind {
            SymbolKind::Terminal { ch: expected, .. } => ch == expected,
            SymbolKind::Whitespace => self.classifier.is_whitespace(ch),
            SymbolKind::IdentifierChar { quoted: true } => ch != delimiter,
            SymbolKind::IdentifierChar { quoted: false } => {
                ch != delimiter
                    && ch != self.config.schema_separator()
                    && !self.classifier.is_whitespace(ch)
            }
            SymbolKind::IdentifierDelimiter => ch == delimiter,
            SymbolKind::SchemaSeparator => ch == self.config.schema_separator(),
            SymbolKind::Empty | SymbolKind::NonTerminal { .. } => false,
        }
    }
}

const fn captures_text(kind: SymbolKind) -> bool {
    match kind {
        SymbolKind::Terminal { captures, .. } => captures,
        SymbolKind::IdentifierChar { .. } => true,
        SymbolKind::Empty
        | SymbolKind::Whitespace
        | SymbolKind::IdentifierDelimiter
        | SymbolKind::SchemaSeparator
        | SymbolKind::NonTerminal { .. } => false,
    }
}
