//! Complete multipartite graphs and the Turán family built on them.

use std::iter;

use tracing::{Span, field, instrument};

use super::{finish, overflow};
use crate::{
    error::{GeneratorError, Result},
    graph::Graph,
    node_spec::{NodeId, NodeSpec, ResolvedNodes, ensure_unique, index_node},
    utils::{accumulate, pairwise},
};

/// Resolves block specifications into node groups.
///
/// Counts are laid out consecutively so that block `k` starts where block
/// `k - 1` ended.
fn resolve_blocks<N: NodeId>(specs: Vec<NodeSpec<N>>) -> Result<Vec<Vec<N>>> {
    let counted = specs.iter().filter(|spec| spec.is_count()).count();
    if counted == 0 {
        return specs
            .into_iter()
            .map(|spec| spec.resolve().map(ResolvedNodes::into_nodes))
            .collect();
    }
    if counted != specs.len() {
        return Err(GeneratorError::MixedBlockSpecs);
    }

    let sizes: Vec<usize> = specs.iter().map(NodeSpec::len).collect();
    sizes
        .iter()
        .try_fold(0_usize, |total, size| total.checked_add(*size))
        .ok_or_else(|| overflow("complete_multipartite_graph"))?;
    pairwise(accumulate(iter::once(0).chain(sizes)))
        .map(|(start, end)| {
            (start..end)
                .map(index_node::<N>)
                .collect::<Result<Vec<_>>>()
        })
        .collect()
}

/// Returns the complete multipartite graph over the given blocks.
///
/// Each block is either a count or an explicit node list, and all blocks must
/// use the same form. Counts are numbered consecutively across blocks, so
/// `[2, 3]` yields blocks `{0, 1}` and `{2, 3, 4}`. Every node carries its
/// block index (see [`Graph::block`]) and is joined to every node of every
/// other block. Nodes within a block are never joined.
///
/// # Errors
/// - [`GeneratorError::MixedBlockSpecs`] when counts and lists are mixed.
/// - [`GeneratorError::DuplicateNode`] when a node appears twice, within or
///   across blocks.
/// - [`GeneratorError::NoIndexIdentifiers`] when counts are given for a node
///   type without canonical identifiers.
///
/// # Examples
/// ```
/// use graphgen_core::complete_multipartite_graph;
///
/// let graph = complete_multipartite_graph([2, 3])?;
/// assert_eq!(graph.edge_count(), 6);
/// assert_eq!(graph.block(&1), Some(0));
/// assert_eq!(graph.block(&4), Some(1));
/// assert!(!graph.has_edge(&2, &3));
///
/// let lettered = complete_multipartite_graph([vec!['a'], vec!['b', 'c']])?;
/// assert_eq!(lettered.name(), "complete_multipartite_graph(['a'], ['b', 'c'])");
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
#[instrument(
    name = "generators.complete_multipartite_graph",
    err,
    skip(blocks),
    fields(blocks = field::Empty),
)]
pub fn complete_multipartite_graph<N, I>(blocks: I) -> Result<Graph<N>>
where
    N: NodeId,
    I: IntoIterator,
    I::Item: Into<NodeSpec<N>>,
{
    let specs: Vec<NodeSpec<N>> = blocks.into_iter().map(Into::into).collect();
    Span::current().record("blocks", specs.len());
    let labels: Vec<String> = specs.iter().map(ToString::to_string).collect();
    let name = format!("complete_multipartite_graph({})", labels.join(", "));

    let groups = resolve_blocks(specs)?;
    ensure_unique(groups.iter().flatten())?;

    let mut graph = Graph::new();
    for (block, members) in groups.iter().enumerate() {
        for node in members {
            graph.add_node_in_block(node.clone(), block);
        }
    }
    for (position, members) in groups.iter().enumerate() {
        for others in groups.iter().skip(position + 1) {
            for source in members {
                for target in others {
                    graph.add_edge(source.clone(), target.clone());
                }
            }
        }
    }
    Ok(finish(graph, name))
}

/// Returns the complete bipartite graph `K_{n1, n2}`.
///
/// Counts follow [`complete_multipartite_graph`], so `(2, 3)` puts nodes
/// `0, 1` in block 0 and `2, 3, 4` in block 1.
///
/// # Errors
/// Same as [`complete_multipartite_graph`].
pub fn complete_bipartite_graph<N: NodeId>(
    n1: impl Into<NodeSpec<N>>,
    n2: impl Into<NodeSpec<N>>,
) -> Result<Graph<N>> {
    let (left, right) = (n1.into(), n2.into());
    let name = format!("complete_bipartite_graph({left}, {right})");
    let graph = complete_multipartite_graph([left, right])?;
    Ok(finish(graph, name))
}

/// Returns the Turán graph `T(n, r)`: the complete `r`-partite graph on `n`
/// nodes with block sizes as equal as possible.
///
/// The first `r - n % r` blocks hold `n / r` nodes and the remaining
/// `n % r` blocks hold one more.
///
/// # Errors
/// Returns [`GeneratorError::InvalidPartitionCount`] unless `1 <= r <= n`.
///
/// # Examples
/// ```
/// use graphgen_core::turan_graph;
///
/// let turan = turan_graph(7, 3)?;
/// assert_eq!(turan.node_count(), 7);
/// assert_eq!(turan.edge_count(), 16);
/// assert_eq!(turan.name(), "turan_graph(7, 3)");
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
#[instrument(name = "generators.turan_graph", err)]
pub fn turan_graph(n: usize, r: usize) -> Result<Graph<usize>> {
    if r == 0 || r > n {
        return Err(GeneratorError::InvalidPartitionCount { n, r });
    }
    let (base, larger) = (n / r, n % r);
    let sizes = iter::repeat_n(base, r - larger).chain(iter::repeat_n(base + 1, larger));
    let graph = complete_multipartite_graph(sizes.map(NodeSpec::Count))?;
    Ok(finish(graph, format!("turan_graph({n}, {r})")))
}
