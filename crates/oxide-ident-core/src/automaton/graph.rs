//! Arena-backed automaton graph and its builder.
//!
//! Nodes refer to each other by [`NodeId`], so the graph may contain cycles
//! (a node whose success link points back at itself is how "zero or more"
//! is expressed) without any shared ownership.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Index;

use super::node::{CaptureId, NodeId, Symbol, SymbolKind};
use crate::error::GraphError;

/// An immutable, validated automaton graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Symbol>,
    entry: NodeId,
}

impl Graph {
    /// Returns the top-level entry node.
    #[must_use]
    pub const fn entry(&self) -> NodeId {
        self.entry
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes. A built graph never is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node with the given id, if it exists.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Symbol> {
        self.nodes.get(id.0)
    }

    /// Iterates over all nodes with their ids.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Symbol)> {
        self.nodes.iter().enumerate().map(|(i, s)| (NodeId(i), s))
    }

    /// Returns the first node carrying `label`.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.nodes().find(|(_, s)| s.label == label).map(|(id, _)| id)
    }

    /// Returns every capture id used by a non-terminal, in tag order.
    #[must_use]
    pub fn capture_ids(&self) -> BTreeSet<CaptureId> {
        self.nodes
            .iter()
            .filter_map(|s| match s.kind {
                SymbolKind::NonTerminal { capture, .. } => capture,
                _ => None,
            })
            .collect()
    }
}

impl Index<NodeId> for Graph {
    type Output = Symbol;

    fn index(&self, id: NodeId) -> &Symbol {
        &self.nodes[id.0]
    }
}

/// Allocates nodes and wires their links.
///
/// Links may point forward to nodes added later, so a graph is usually
/// built in two passes: add every node, then link them.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Symbol>,
    error: Option<GraphError>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an unlinked node and returns its id.
    pub fn add(&mut self, label: &'static str, kind: SymbolKind) -> NodeId {
        self.nodes.push(Symbol::new(label, kind));
        NodeId(self.nodes.len() - 1)
    }

    /// Sets both links of `node`.
    pub fn link(
        &mut self,
        node: NodeId,
        on_success: Option<NodeId>,
        on_failure: Option<NodeId>,
    ) -> &mut Self {
        if let Some(symbol) = self.nodes.get_mut(node.0) {
            symbol.on_success = on_success;
            symbol.on_failure = on_failure;
        } else if self.error.is_none() {
            self.error = Some(GraphError::UnknownNode(node.0));
        }
        self
    }

    /// Sets only the success link of `node`.
    pub fn then(&mut self, node: NodeId, next: NodeId) -> &mut Self {
        let on_failure = self.nodes.get(node.0).and_then(|s| s.on_failure);
        self.link(node, Some(next), on_failure)
    }

    /// Finishes the graph with `entry` as its top-level node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if an earlier `link` named a
    /// node that was never added, [`GraphError::MissingEntry`] if `entry`
    /// is not in the arena, and [`GraphError::DanglingLink`] if any link
    /// points outside it. A non-terminal that can re-enter itself gives
    /// [`GraphError::RecursiveNonTerminal`]. A cycle the walk could go
    /// round without reading a character gives
    /// [`GraphError::NonConsumingCycle`].
    pub fn build(self, entry: NodeId) -> Result<Graph, GraphError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if entry.0 >= self.nodes.len() {
            return Err(GraphError::MissingEntry);
        }
        let graph = Graph {
            nodes: self.nodes,
            entry,
        };
        check_links(&graph)?;
        check_recursion(&graph)?;
        check_progress(&graph)?;
        Ok(graph)
    }

    /// Finishes the graph without validation. Only for fixed wiring whose
    /// [`GraphBuilder::build`] result is covered by a test.
    pub(crate) fn build_unchecked(self, entry: NodeId) -> Graph {
        Graph {
            nodes: self.nodes,
            entry,
        }
    }
}

fn check_links(graph: &Graph) -> Result<(), GraphError> {
    for symbol in &graph.nodes {
        let sub_entry = match symbol.kind {
            SymbolKind::NonTerminal { entry, .. } => Some(entry),
            _ => None,
        };
        for target in [symbol.on_success, symbol.on_failure, sub_entry]
            .into_iter()
            .flatten()
        {
            if target.0 >= graph.nodes.len() {
                return Err(GraphError::DanglingLink {
                    from: symbol.label,
                    target: target.0,
                });
            }
        }
    }
    Ok(())
}

/// Non-terminals reachable from `start` by following links, without
/// descending into nested sub-graphs.
fn reachable_non_terminals(graph: &Graph, start: NodeId) -> BTreeSet<NodeId> {
    let mut seen = BTreeSet::new();
    let mut found = BTreeSet::new();
    let mut stack = vec![start];
    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        let symbol = &graph[id];
        if matches!(symbol.kind, SymbolKind::NonTerminal { .. }) {
            found.insert(id);
        }
        stack.extend(symbol.on_success);
        stack.extend(symbol.on_failure);
    }
    found
}

fn check_recursion(graph: &Graph) -> Result<(), GraphError> {
    let calls: BTreeMap<NodeId, Vec<NodeId>> = graph
        .nodes()
        .filter_map(|(id, s)| match s.kind {
            SymbolKind::NonTerminal { entry, .. } => Some((
                id,
                reachable_non_terminals(graph, entry).into_iter().collect(),
            )),
            _ => None,
        })
        .collect();
    match find_cycle(&calls) {
        Some(id) => Err(GraphError::RecursiveNonTerminal {
            label: graph[id].label,
        }),
        None => Ok(()),
    }
}

/// Links the walk can take without reading a character. A non-terminal
/// counts as idle on both links because its sub-walk may match nothing.
fn idle_links(symbol: &Symbol) -> Vec<NodeId> {
    match symbol.kind {
        // the failure link of an empty node is never taken
        SymbolKind::Empty => symbol.on_success.into_iter().collect(),
        SymbolKind::NonTerminal { .. } => {
            [symbol.on_success, symbol.on_failure].into_iter().flatten().collect()
        }
        _ => symbol.on_failure.into_iter().collect(),
    }
}

fn check_progress(graph: &Graph) -> Result<(), GraphError> {
    let idle: BTreeMap<NodeId, Vec<NodeId>> =
        graph.nodes().map(|(id, s)| (id, idle_links(s))).collect();
    match find_cycle(&idle) {
        Some(id) => Err(GraphError::NonConsumingCycle {
            label: graph[id].label,
        }),
        None => Ok(()),
    }
}

/// Depth-first search over `edges`; returns a node that lies on a cycle.
fn find_cycle(edges: &BTreeMap<NodeId, Vec<NodeId>>) -> Option<NodeId> {
    let mut done = BTreeSet::new();
    for &root in edges.keys() {
        let mut path = Vec::new();
        let mut stack = vec![(root, false)];
        while let Some((id, leaving)) = stack.pop() {
            if leaving {
                path.pop();
                done.insert(id);
                continue;
            }
            if done.contains(&id) {
                continue;
            }
            if path.contains(&id) {
                return Some(id);
            }
            path.push(id);
            stack.push((id, true));
            stack.extend(edges.get(&id).into_iter().flatten().map(|&next| (next, false)));
        }
    }
    None
}
