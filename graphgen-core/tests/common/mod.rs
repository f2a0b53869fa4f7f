use std::collections::{HashSet, VecDeque};

use graphgen_core::{Graph, NodeId};

/// Returns `true` when every node is reachable from the first one.
#[must_use]
pub fn is_connected<N: NodeId>(graph: &Graph<N>) -> bool {
    let Some(start) = graph.nodes().next() else {
        return true;
    };
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for neighbor in graph.neighbors(node) {
            if seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    seen.len() == graph.node_count()
}

/// Degrees of every node, sorted ascending.
#[must_use]
pub fn sorted_degrees<N: NodeId>(graph: &Graph<N>) -> Vec<usize> {
    let mut degrees: Vec<usize> = graph
        .nodes()
        .filter_map(|node| graph.degree(node))
        .collect();
    degrees.sort_unstable();
    degrees
}

/// Number of nodes whose degree equals `degree`.
#[must_use]
pub fn count_with_degree<N: NodeId>(graph: &Graph<N>, degree: usize) -> usize {
    graph
        .nodes()
        .filter(|node| graph.degree(node) == Some(degree))
        .count()
}

/// Edges of a `usize` graph as plain pairs, in insertion order.
#[must_use]
pub fn edge_list(graph: &Graph<usize>) -> Vec<(usize, usize)> {
    graph.edges().map(|(u, v)| (*u, *v)).collect()
}

/// Edges as unordered pairs, for comparing undirected graphs built in
/// different orders.
#[must_use]
pub fn undirected_edge_set(graph: &Graph<usize>) -> HashSet<(usize, usize)> {
    graph
        .edges()
        .map(|(&u, &v)| if u <= v { (u, v) } else { (v, u) })
        .collect()
}
