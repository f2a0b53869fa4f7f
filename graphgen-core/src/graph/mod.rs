//! Generic graph container filled by the generators.
//!
//! [`Graph`] stores nodes and edges in insertion order and supports the four
//! variants described by [`GraphKind`]:
//!
//! - Simple graphs ignore an edge that is already present. In undirected
//!   graphs `(u, v)` and `(v, u)` name the same edge.
//! - Multigraphs record every added edge as a separate parallel edge.
//! - Self-loops are stored in every variant. In undirected graphs a self-loop
//!   contributes two to its node's degree.
//! - Adding an edge adds missing endpoints as nodes.
//!
//! Each node may carry a `block` attribute used by the multipartite
//! generators.

use std::{collections::HashMap, fmt};

use crate::node_spec::NodeId;

/// Capability descriptor for a [`Graph`]: directed or not, multigraph or not.
///
/// # Examples
/// ```
/// use graphgen_core::GraphKind;
///
/// let kind = GraphKind::new().with_directed(true);
/// assert_eq!(kind, GraphKind::DIRECTED);
/// assert!(kind.is_directed());
/// assert!(!kind.is_multigraph());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GraphKind {
    directed: bool,
    multigraph: bool,
}

impl GraphKind {
    /// Simple undirected graph.
    pub const UNDIRECTED: Self = Self {
        directed: false,
        multigraph: false,
    };
    /// Simple directed graph.
    pub const DIRECTED: Self = Self {
        directed: true,
        multigraph: false,
    };
    /// Undirected multigraph.
    pub const MULTI: Self = Self {
        directed: false,
        multigraph: true,
    };
    /// Directed multigraph.
    pub const MULTI_DIRECTED: Self = Self {
        directed: true,
        multigraph: true,
    };

    /// Returns the default kind, a simple undirected graph.
    #[must_use]
    pub const fn new() -> Self {
        Self::UNDIRECTED
    }

    /// Sets whether edges are directed.
    #[must_use]
    pub const fn with_directed(self, directed: bool) -> Self {
        Self { directed, ..self }
    }

    /// Sets whether parallel edges are kept.
    #[must_use]
    pub const fn with_multigraph(self, multigraph: bool) -> Self {
        Self { multigraph, ..self }
    }

    /// Returns `true` for directed kinds.
    #[must_use]
    pub const fn is_directed(self) -> bool {
        self.directed
    }

    /// Returns `true` for multigraph kinds.
    #[must_use]
    pub const fn is_multigraph(self) -> bool {
        self.multigraph
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.directed {
            "directed"
        } else {
            "undirected"
        };
        let multiplicity = if self.multigraph { "multi" } else { "simple" };
        write!(f, "{direction} {multiplicity}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeEntry<N> {
    id: N,
    block: Option<usize>,
    degree: usize,
    neighbors: Vec<usize>,
}

/// Insertion-ordered graph over node identifiers of type `N`.
///
/// # Examples
/// ```
/// use graphgen_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge('a', 'b');
/// graph.add_edge('b', 'a');
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
///
/// let mut multi = Graph::multigraph();
/// multi.add_edge('a', 'b');
/// multi.add_edge('b', 'a');
/// assert_eq!(multi.edge_count(), 2);
/// assert_eq!(multi.edge_multiplicity(&'a', &'b'), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<N: NodeId> {
    kind: GraphKind,
    name: String,
    nodes: Vec<NodeEntry<N>>,
    index: HashMap<N, usize>,
    edges: Vec<(usize, usize)>,
    multiplicity: HashMap<(usize, usize), usize>,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::with_kind(GraphKind::default())
    }
}

impl<N: NodeId> Graph<N> {
    /// Creates an empty simple undirected graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty simple directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::with_kind(GraphKind::DIRECTED)
    }

    /// Creates an empty undirected multigraph.
    #[must_use]
    pub fn multigraph() -> Self {
        Self::with_kind(GraphKind::MULTI)
    }

    /// Creates an empty directed multigraph.
    #[must_use]
    pub fn multi_directed() -> Self {
        Self::with_kind(GraphKind::MULTI_DIRECTED)
    }

    /// Creates an empty graph with the given capabilities.
    #[must_use]
    pub fn with_kind(kind: GraphKind) -> Self {
        Self {
            kind,
            name: String::new(),
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            multiplicity: HashMap::new(),
        }
    }

    /// Capabilities of this graph.
    #[must_use]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Returns `true` when edges are directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    /// Returns `true` when parallel edges are kept.
    #[must_use]
    pub fn is_multigraph(&self) -> bool {
        self.kind.is_multigraph()
    }

    /// Descriptive name, e.g. `complete_graph(4)`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the descriptive name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Removes every node and edge and resets the name, keeping the kind and
    /// the allocated storage.
    pub fn clear(&mut self) {
        self.name.clear();
        self.nodes.clear();
        self.index.clear();
        self.edges.clear();
        self.multiplicity.clear();
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, counting parallel edges separately.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds `node` if absent. Returns `true` when the node is new.
    pub fn add_node(&mut self, node: N) -> bool {
        let before = self.nodes.len();
        self.ensure_node(node);
        self.nodes.len() > before
    }

    /// Adds every node yielded by `nodes`.
    pub fn add_nodes_from<I: IntoIterator<Item = N>>(&mut self, nodes: I) {
        for node in nodes {
            self.ensure_node(node);
        }
    }

    /// Adds `node` if absent and tags it with `block`.
    pub fn add_node_in_block(&mut self, node: N, block: usize) {
        let slot = self.ensure_node(node);
        if let Some(entry) = self.nodes.get_mut(slot) {
            entry.block = Some(block);
        }
    }

    /// Adds the edge `(source, target)`, inserting missing endpoints.
    ///
    /// Returns `false` when a simple graph already holds the edge and the
    /// request was ignored.
    pub fn add_edge(&mut self, source: N, target: N) -> bool {
        let from = self.ensure_node(source);
        let to = self.ensure_node(target);
        let key = self.edge_key(from, to);
        let count = self.multiplicity.entry(key).or_insert(0);
        if *count > 0 && !self.kind.is_multigraph() {
            return false;
        }
        *count += 1;
        let first = *count == 1;
        self.edges.push((from, to));
        self.record_incidence(from, to, first);
        true
    }

    /// Adds every edge yielded by `edges`.
    pub fn add_edges_from<I: IntoIterator<Item = (N, N)>>(&mut self, edges: I) {
        for (source, target) in edges {
            self.add_edge(source, target);
        }
    }

    /// Returns `true` when `node` is present.
    #[must_use]
    pub fn has_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Returns `true` when at least one edge joins `source` to `target`.
    #[must_use]
    pub fn has_edge(&self, source: &N, target: &N) -> bool {
        self.edge_multiplicity(source, target) > 0
    }

    /// Number of parallel edges joining `source` to `target`.
    #[must_use]
    pub fn edge_multiplicity(&self, source: &N, target: &N) -> usize {
        match (self.index.get(source), self.index.get(target)) {
            (Some(&from), Some(&to)) => self
                .multiplicity
                .get(&self.edge_key(from, to))
                .copied()
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter().map(|entry| &entry.id)
    }

    /// Edges in insertion order, parallel edges repeated.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.edges
            .iter()
            .filter_map(|&(from, to)| Some((self.id_at(from)?, self.id_at(to)?)))
    }

    /// Distinct neighbours of `node` (successors in a directed graph), in the
    /// order they were first connected. Empty when `node` is absent.
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = &'a N> + use<'a, N> {
        self.index
            .get(node)
            .and_then(|&slot| self.nodes.get(slot))
            .map(|entry| entry.neighbors.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|&slot| self.id_at(slot))
    }

    /// Degree of `node`: incident edge endpoints, so self-loops count twice
    /// and a directed graph reports in-degree plus out-degree.
    #[must_use]
    pub fn degree(&self, node: &N) -> Option<usize> {
        self.entry(node).map(|entry| entry.degree)
    }

    /// `block` attribute of `node`, when it has one.
    #[must_use]
    pub fn block(&self, node: &N) -> Option<usize> {
        self.entry(node).and_then(|entry| entry.block)
    }

    fn entry(&self, node: &N) -> Option<&NodeEntry<N>> {
        self.index.get(node).and_then(|&slot| self.nodes.get(slot))
    }

    fn id_at(&self, slot: usize) -> Option<&N> {
        self.nodes.get(slot).map(|entry| &entry.id)
    }

    fn ensure_node(&mut self, node: N) -> usize {
        if let Some(&slot) = self.index.get(&node) {
            return slot;
        }
        let slot = self.nodes.len();
        self.index.insert(node.clone(), slot);
        self.nodes.push(NodeEntry {
            id: node,
            block: None,
            degree: 0,
            neighbors: Vec::new(),
        });
        slot
    }

    fn edge_key(&self, from: usize, to: usize) -> (usize, usize) {
        if self.kind.is_directed() || from <= to {
            (from, to)
        } else {
            (to, from)
        }
    }

    fn record_incidence(&mut self, from: usize, to: usize, first: bool) {
        if let Some(entry) = self.nodes.get_mut(from) {
            entry.degree += 1;
            if first {
                entry.neighbors.push(to);
            }
        }
        if let Some(entry) = self.nodes.get_mut(to) {
            entry.degree += 1;
            if first && from != to && !self.kind.is_directed() {
                entry.neighbors.push(from);
            }
        }
    }
}

#[cfg(test)]
mod tests;
