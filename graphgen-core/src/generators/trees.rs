//! Breadth-first r-ary trees.

use std::collections::VecDeque;

use tracing::instrument;

use super::{empty_graph, finish, overflow};
use crate::{error::Result, graph::Graph};

/// Parent-child edges of the breadth-first `branching`-ary tree on
/// `0..node_count`.
fn tree_edges(branching: usize, node_count: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::with_capacity(node_count.saturating_sub(1));
    let mut children = 1..node_count;
    let mut parents = VecDeque::from([0]);
    while let Some(parent) = parents.pop_front() {
        for child in children.by_ref().take(branching) {
            edges.push((parent, child));
            parents.push_back(child);
        }
    }
    edges
}

/// Nodes in a perfect tree of the given branching factor and height.
fn balanced_node_count(branching: usize, height: usize) -> Option<usize> {
    let mut total = 1_usize;
    let mut level = 1_usize;
    for _ in 0..height {
        level = level.checked_mul(branching)?;
        total = total.checked_add(level)?;
    }
    Some(total)
}

/// Returns the full `r`-ary tree on `n` nodes.
///
/// Nodes `0..n` are filled in breadth-first order: node `0` is the root and
/// each parent receives up to `r` children before the next parent is served.
/// With `r == 0` no edges are added.
///
/// Any container kind is accepted; directed containers orient edges from
/// parent to child.
///
/// # Errors
/// Only the node errors of [`crate::empty_graph`] apply, and they cannot
/// occur for `usize` identifiers.
///
/// # Examples
/// ```
/// use graphgen_core::full_rary_tree;
///
/// let tree = full_rary_tree(2, 6, None)?;
/// assert!(tree.has_edge(&0, &1));
/// assert!(tree.has_edge(&0, &2));
/// assert!(tree.has_edge(&2, &5));
/// assert_eq!(tree.edge_count(), 5);
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
pub fn full_rary_tree(
    r: usize,
    n: usize,
    create_using: Option<Graph<usize>>,
) -> Result<Graph<usize>> {
    let mut graph = empty_graph(n, create_using)?;
    graph.add_edges_from(tree_edges(r, n));
    Ok(finish(graph, format!("full_rary_tree({r}, {n})")))
}

/// Returns the perfectly balanced `r`-ary tree of height `h`.
///
/// The tree has `1 + r + r^2 + ... + r^h` nodes (`1` when `r == 0`, `h + 1`
/// when `r == 1`).
///
/// # Errors
/// Returns [`crate::GeneratorError::NodeCountOverflow`] when the node count
/// does not fit in `usize`.
///
/// # Examples
/// ```
/// use graphgen_core::balanced_tree;
///
/// let tree = balanced_tree(2, 3, None)?;
/// assert_eq!(tree.node_count(), 15);
/// assert_eq!(tree.edge_count(), 14);
/// assert_eq!(tree.name(), "balanced_tree(2, 3)");
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
#[instrument(name = "generators.balanced_tree", err, skip(create_using))]
pub fn balanced_tree(
    r: usize,
    h: usize,
    create_using: Option<Graph<usize>>,
) -> Result<Graph<usize>> {
    let node_count = balanced_node_count(r, h).ok_or_else(|| overflow("balanced_tree"))?;
    let graph = full_rary_tree(r, node_count, create_using)?;
    Ok(finish(graph, format!("balanced_tree({r}, {h})")))
}
