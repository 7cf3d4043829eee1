//! The parsing automaton.
//!
//! A grammar is a directed graph of [`Symbol`] nodes stored in an arena and
//! addressed by [`NodeId`]. Every node has a success link and a failure
//! link. Evaluating a node against the current character sets the match
//! flag, possibly consumes the character, and selects the next node. A
//! [`SymbolKind::NonTerminal`] node walks its own sub-graph to completion
//! before choosing a link, recording the identifier text consumed meanwhile
//! under its capture id.
//!
//! There is no backtracking: once a node consumes a character it stays
//! consumed. Alternation is expressed purely through failure links.

mod context;
mod graph;
mod matcher;
mod node;

pub use context::MatchContext;
pub use graph::{Graph, GraphBuilder};
pub use matcher::Matcher;
pub use node::{CaptureId, NodeId, Symbol, SymbolKind};
