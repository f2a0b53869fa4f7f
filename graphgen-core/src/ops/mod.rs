//! Graph composition operations consumed by the lattice generators.
//!
//! - [`cartesian_product`] combines two graphs of the same kind.
//! - [`relabel_nodes`] maps every node through a caller-supplied function.
//! - [`flatten_coordinates`] turns the nested labels produced by repeated
//!   products into flat coordinate vectors.

use std::collections::HashMap;

use crate::{
    error::{GeneratorError, Result},
    graph::Graph,
    node_spec::NodeId,
};

/// Returns the cartesian product of `left` and `right`.
///
/// Nodes are the pairs `(u, v)` in `left`-major order. Each edge `(u, u2)` of
/// `left` yields `((u, v), (u2, v))` for every node `v` of `right`, and each
/// edge `(v, v2)` of `right` yields `((u, v), (u, v2))` for every node `u` of
/// `left`. The result has the inputs' [`crate::GraphKind`].
///
/// # Errors
/// Returns [`GeneratorError::KindMismatch`] when the inputs differ in
/// directedness or multiplicity.
///
/// # Examples
/// ```
/// use graphgen_core::{cartesian_product, path_graph};
///
/// let left = path_graph(2, None)?;
/// let right = path_graph(3, None)?;
/// let product = cartesian_product(&left, &right)?;
/// assert_eq!(product.node_count(), 6);
/// assert_eq!(product.edge_count(), 7);
/// assert!(product.has_edge(&(0, 1), &(1, 1)));
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
pub fn cartesian_product<A, B>(left: &Graph<A>, right: &Graph<B>) -> Result<Graph<(A, B)>>
where
    A: NodeId,
    B: NodeId,
{
    if left.kind() != right.kind() {
        return Err(GeneratorError::KindMismatch {
            left: left.kind(),
            right: right.kind(),
        });
    }

    let mut product = Graph::with_kind(left.kind());
    for u in left.nodes() {
        product.add_nodes_from(right.nodes().map(|v| (u.clone(), v.clone())));
    }
    for (u, u2) in left.edges() {
        for v in right.nodes() {
            product.add_edge((u.clone(), v.clone()), (u2.clone(), v.clone()));
        }
    }
    for u in left.nodes() {
        for (v, v2) in right.edges() {
            product.add_edge((u.clone(), v.clone()), (u.clone(), v2.clone()));
        }
    }
    Ok(product)
}

/// Returns a copy of `graph` with every node mapped through `mapping`.
///
/// Node order, edges, `block` attributes, kind and name carry over. A
/// non-injective mapping merges nodes the way repeated
/// [`Graph::add_node`] calls would.
///
/// # Examples
/// ```
/// use graphgen_core::{path_graph, relabel_nodes};
///
/// let path = path_graph(3, None)?;
/// let lettered = relabel_nodes(&path, |node| char::from(b'a' + *node as u8));
/// assert!(lettered.has_edge(&'a', &'b'));
/// assert!(lettered.has_edge(&'b', &'c'));
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
pub fn relabel_nodes<N, M, F>(graph: &Graph<N>, mut mapping: F) -> Graph<M>
where
    N: NodeId,
    M: NodeId,
    F: FnMut(&N) -> M,
{
    let labels: HashMap<&N, M> = graph.nodes().map(|node| (node, mapping(node))).collect();

    let mut relabeled = Graph::with_kind(graph.kind());
    relabeled.set_name(graph.name());
    for node in graph.nodes() {
        let Some(label) = labels.get(node) else {
            continue;
        };
        match graph.block(node) {
            Some(block) => relabeled.add_node_in_block(label.clone(), block),
            None => {
                relabeled.add_node(label.clone());
            }
        }
    }
    for (source, target) in graph.edges() {
        if let (Some(from), Some(to)) = (labels.get(source), labels.get(target)) {
            relabeled.add_edge(from.clone(), to.clone());
        }
    }
    relabeled
}

/// Flattens a product label `(head, [tail...])` into `[head, tail...]`.
///
/// # Examples
/// ```
/// use graphgen_core::flatten_coordinates;
///
/// assert_eq!(flatten_coordinates(&(1, vec![2, 3])), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn flatten_coordinates<N: Clone>(label: &(N, Vec<N>)) -> Vec<N> {
    let (head, tail) = label;
    let mut coordinates = Vec::with_capacity(tail.len() + 1);
    coordinates.push(head.clone());
    coordinates.extend(tail.iter().cloned());
    coordinates
}
