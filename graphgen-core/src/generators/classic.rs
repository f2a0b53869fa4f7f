//! Empty, complete, cyclic, path-like and clique-joined families.

use tracing::instrument;

use super::{
    add_clique, empty_from, finish, kind_of, overflow, require_simple, require_undirected,
};
use crate::{
    error::{GeneratorError, Result},
    graph::Graph,
    node_spec::{ListLabel, NodeId, NodeSpec, ensure_unique, index_node},
    utils::pairwise,
};

/// Returns a graph holding the given nodes and no edges.
///
/// This is the factory every other generator builds on. When `create_using`
/// is supplied it is cleared and reused, keeping its [`crate::GraphKind`];
/// otherwise a simple undirected graph is created.
///
/// # Errors
/// - [`GeneratorError::NoIndexIdentifiers`] when a count is given for a node
///   type without canonical identifiers.
/// - [`GeneratorError::DuplicateNode`] when an explicit list repeats a node.
///   The caller's graph is left untouched in that case.
///
/// # Examples
/// ```
/// use graphgen_core::{Graph, empty_graph};
///
/// let graph = empty_graph(4, None)?;
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 0);
/// assert_eq!(graph.name(), "empty_graph(4)");
///
/// let mut scratch = Graph::directed();
/// scratch.add_edge('x', 'y');
/// let reused = empty_graph("ab", Some(scratch))?;
/// assert!(reused.is_directed());
/// assert_eq!(reused.nodes().copied().collect::<Vec<_>>(), ['a', 'b']);
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
#[instrument(
    name = "generators.empty_graph",
    err,
    skip_all,
    fields(kind = %kind_of(create_using.as_ref())),
)]
pub fn empty_graph<N: NodeId>(
    n: impl Into<NodeSpec<N>>,
    create_using: Option<Graph<N>>,
) -> Result<Graph<N>> {
    let resolved = n.into().resolve()?;
    let graph = empty_from(resolved.nodes(), create_using)?;
    Ok(finish(graph, format!("empty_graph({})", resolved.label())))
}

/// Returns the graph with no nodes.
///
/// # Errors
/// Never fails for the default container; the `Result` mirrors the other
/// generators.
pub fn null_graph(create_using: Option<Graph<usize>>) -> Result<Graph<usize>> {
    let graph = empty_from(&[], create_using)?;
    Ok(finish(graph, "null_graph()".to_owned()))
}

/// Returns the graph with the single node `0` and no edges.
///
/// # Errors
/// Never fails for the default container; the `Result` mirrors the other
/// generators.
pub fn trivial_graph(create_using: Option<Graph<usize>>) -> Result<Graph<usize>> {
    let graph = empty_from(&[0], create_using)?;
    Ok(finish(graph, "trivial_graph()".to_owned()))
}

/// Returns the complete graph on the given nodes.
///
/// Undirected containers receive every unordered pair once; directed
/// containers receive both orientations of every pair. No self-loops.
///
/// # Errors
/// See [`empty_graph`].
///
/// # Examples
/// ```
/// use graphgen_core::{Graph, complete_graph};
///
/// assert_eq!(complete_graph(5, None)?.edge_count(), 10);
/// assert_eq!(complete_graph(5, Some(Graph::directed()))?.edge_count(), 20);
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
pub fn complete_graph<N: NodeId>(
    n: impl Into<NodeSpec<N>>,
    create_using: Option<Graph<N>>,
) -> Result<Graph<N>> {
    let resolved = n.into().resolve()?;
    let nodes = resolved.nodes();
    let mut graph = empty_from(nodes, create_using)?;
    if graph.is_directed() {
        for (position, source) in nodes.iter().enumerate() {
            for (other, target) in nodes.iter().enumerate() {
                if position != other {
                    graph.add_edge(source.clone(), target.clone());
                }
            }
        }
    } else {
        add_clique(&mut graph, nodes);
    }
    Ok(finish(graph, format!("complete_graph({})", resolved.label())))
}

/// Returns the cycle through the given nodes in order.
///
/// A single node yields a self-loop and two nodes yield one edge in a simple
/// graph (two parallel edges in a multigraph).
///
/// # Errors
/// See [`empty_graph`].
pub fn cycle_graph<N: NodeId>(
    n: impl Into<NodeSpec<N>>,
    create_using: Option<Graph<N>>,
) -> Result<Graph<N>> {
    let resolved = n.into().resolve()?;
    let nodes = resolved.nodes();
    let mut graph = empty_from(nodes, create_using)?;
    graph.add_edges_from(pairwise(nodes.iter().cloned()));
    if let (Some(first), Some(last)) = (nodes.first(), nodes.last()) {
        graph.add_edge(last.clone(), first.clone());
    }
    Ok(finish(graph, format!("cycle_graph({})", resolved.label())))
}

/// Returns the path through the given nodes in order.
///
/// # Errors
/// See [`empty_graph`].
///
/// # Examples
/// ```
/// use graphgen_core::path_graph;
///
/// let path = path_graph(vec!["a", "b", "c"], None)?;
/// assert!(path.has_edge(&"a", &"b"));
/// assert!(path.has_edge(&"b", &"c"));
/// assert_eq!(path.name(), r#"path_graph(["a", "b", "c"])"#);
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
pub fn path_graph<N: NodeId>(
    n: impl Into<NodeSpec<N>>,
    create_using: Option<Graph<N>>,
) -> Result<Graph<N>> {
    let resolved = n.into().resolve()?;
    let mut graph = empty_from(resolved.nodes(), create_using)?;
    graph.add_edges_from(pairwise(resolved.nodes().iter().cloned()));
    Ok(finish(graph, format!("path_graph({})", resolved.label())))
}

/// Returns a star: one center joined to every other node.
///
/// A count `n` yields `n + 1` nodes `0..=n` with center `0`. An explicit list
/// uses its first element as the center.
///
/// # Errors
/// - [`GeneratorError::DirectedUnsupported`] for a directed `create_using`.
/// - The node errors of [`empty_graph`].
///
/// # Examples
/// ```
/// use graphgen_core::star_graph;
///
/// let star = star_graph(3, None)?;
/// assert_eq!(star.node_count(), 4);
/// assert_eq!(star.degree(&0), Some(3));
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
pub fn star_graph<N: NodeId>(
    n: impl Into<NodeSpec<N>>,
    create_using: Option<Graph<N>>,
) -> Result<Graph<N>> {
    require_undirected(kind_of(create_using.as_ref()), "star_graph")?;
    let spec = n.into();
    let extra_leaf = spec.is_count().then(|| spec.len());
    let resolved = spec.resolve()?;
    let name = format!("star_graph({})", resolved.label());
    let mut nodes = resolved.into_nodes();
    if let Some(index) = extra_leaf {
        nodes.push(index_node(index)?);
    }

    let mut graph = empty_from(&nodes, create_using)?;
    if let Some((center, leaves)) = nodes.split_first() {
        for leaf in leaves {
            graph.add_edge(center.clone(), leaf.clone());
        }
    }
    Ok(finish(graph, name))
}

/// Returns a wheel: a hub joined to every node of a rim cycle.
///
/// The first node is the hub. With three or more nodes the remaining nodes
/// form a cycle; smaller inputs degenerate to a star.
///
/// # Errors
/// Same as [`star_graph`].
pub fn wheel_graph<N: NodeId>(
    n: impl Into<NodeSpec<N>>,
    create_using: Option<Graph<N>>,
) -> Result<Graph<N>> {
    require_undirected(kind_of(create_using.as_ref()), "wheel_graph")?;
    let resolved = n.into().resolve()?;
    let mut graph = star_graph(resolved.nodes().to_vec(), create_using)?;
    if let Some(rim) = resolved.nodes().get(1..).filter(|rim| rim.len() > 1) {
        graph.add_edges_from(pairwise(rim.iter().cloned()));
        if let (Some(first), Some(last)) = (rim.first(), rim.last()) {
            graph.add_edge(last.clone(), first.clone());
        }
    }
    Ok(finish(graph, format!("wheel_graph({})", resolved.label())))
}

/// Returns two parallel paths `0..n` and `n..2n` joined rung by rung.
///
/// # Errors
/// - [`GeneratorError::DirectedUnsupported`] for a directed `create_using`.
/// - [`GeneratorError::NodeCountOverflow`] when `2n` does not fit in `usize`.
pub fn ladder_graph(n: usize, create_using: Option<Graph<usize>>) -> Result<Graph<usize>> {
    require_undirected(kind_of(create_using.as_ref()), "ladder_graph")?;
    let total = n.checked_mul(2).ok_or_else(|| overflow("ladder_graph"))?;
    let mut graph = empty_graph(total, create_using)?;
    graph.add_edges_from(pairwise(0..n));
    graph.add_edges_from(pairwise(n..total));
    graph.add_edges_from((0..n).map(|node| (node, node + n)));
    Ok(finish(graph, format!("ladder_graph({n})")))
}

/// Returns a ladder whose two rails are closed into cycles.
///
/// # Errors
/// Same as [`ladder_graph`].
pub fn circular_ladder_graph(
    n: usize,
    create_using: Option<Graph<usize>>,
) -> Result<Graph<usize>> {
    require_undirected(kind_of(create_using.as_ref()), "circular_ladder_graph")?;
    let mut graph = ladder_graph(n, create_using)?;
    if n > 0 {
        graph.add_edge(0, n - 1);
        graph.add_edge(n, 2 * n - 1);
    }
    Ok(finish(graph, format!("circular_ladder_graph({n})")))
}

/// Returns two `m1`-cliques joined by a path of `m2` nodes.
///
/// Nodes `0..m1` form the left bell, `m1..m1 + m2` the bar and
/// `m1 + m2..2 * m1 + m2` the right bell. Edge `(m1 - 1, m1)` attaches the
/// bar (or the right bell when `m2 == 0`) and `(m1 + m2 - 1, m1 + m2)`
/// attaches the right bell to the bar.
///
/// # Errors
/// - [`GeneratorError::CliqueTooSmall`] when `m1 < 2`.
/// - [`GeneratorError::DirectedUnsupported`] for a directed `create_using`.
/// - [`GeneratorError::NodeCountOverflow`] when `2 * m1 + m2` does not fit.
///
/// # Examples
/// ```
/// use graphgen_core::barbell_graph;
///
/// let barbell = barbell_graph(3, 2, None)?;
/// assert_eq!(barbell.node_count(), 8);
/// assert_eq!(barbell.edge_count(), 3 + 3 + 1 + 2);
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
pub fn barbell_graph(
    m1: usize,
    m2: usize,
    create_using: Option<Graph<usize>>,
) -> Result<Graph<usize>> {
    if m1 < 2 {
        return Err(GeneratorError::CliqueTooSmall {
            family: "barbell_graph",
            got: m1,
        });
    }
    require_undirected(kind_of(create_using.as_ref()), "barbell_graph")?;
    let total = m1
        .checked_mul(2)
        .and_then(|bells| bells.checked_add(m2))
        .ok_or_else(|| overflow("barbell_graph"))?;

    let mut graph = empty_graph(total, create_using)?;
    let left: Vec<usize> = (0..m1).collect();
    let right: Vec<usize> = (m1 + m2..total).collect();
    add_clique(&mut graph, &left);
    graph.add_edges_from(pairwise(m1..m1 + m2));
    add_clique(&mut graph, &right);
    graph.add_edge(m1 - 1, m1);
    if m2 > 0 {
        graph.add_edge(m1 + m2 - 1, m1 + m2);
    }
    Ok(finish(graph, format!("barbell_graph({m1}, {m2})")))
}

/// Returns a clique on `m` joined to a path on `n`.
///
/// When both arguments are counts the path nodes are shifted to
/// `m..m + n`; otherwise each argument resolves on its own and the two node
/// sets must be disjoint. The last clique node is joined to the first path
/// node.
///
/// # Errors
/// - [`GeneratorError::CliqueTooSmall`] when the clique has fewer than two
///   nodes.
/// - [`GeneratorError::DirectedUnsupported`] for a directed `create_using`.
/// - [`GeneratorError::DuplicateNode`] when the clique and path overlap.
///
/// # Examples
/// ```
/// use graphgen_core::lollipop_graph;
///
/// let lollipop = lollipop_graph(3, 2, None)?;
/// assert!(lollipop.has_edge(&2, &3));
/// assert!(lollipop.has_edge(&3, &4));
/// assert_eq!(lollipop.name(), "lollipop_graph(3, 2)");
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
pub fn lollipop_graph<N: NodeId>(
    m: impl Into<NodeSpec<N>>,
    n: impl Into<NodeSpec<N>>,
    create_using: Option<Graph<N>>,
) -> Result<Graph<N>> {
    require_undirected(kind_of(create_using.as_ref()), "lollipop_graph")?;
    let (m, n) = (m.into(), n.into());
    let shift = m.is_count();
    let clique = m.resolve()?;
    if clique.len() < 2 {
        return Err(GeneratorError::CliqueTooSmall {
            family: "lollipop_graph",
            got: clique.len(),
        });
    }

    let path_label = n.to_string();
    let path = match n {
        NodeSpec::Count(count) if shift => {
            let end = clique
                .len()
                .checked_add(count)
                .ok_or_else(|| overflow("lollipop_graph"))?;
            (clique.len()..end)
                .map(index_node::<N>)
                .collect::<Result<Vec<_>>>()?
        }
        other => other.resolve()?.into_nodes(),
    };
    ensure_unique(clique.nodes().iter().chain(&path))?;

    let mut graph = empty_from(clique.nodes(), create_using)?;
    add_clique(&mut graph, clique.nodes());
    graph.add_nodes_from(path.iter().cloned());
    graph.add_edges_from(pairwise(path.iter().cloned()));
    if let (Some(last), Some(first)) = (clique.nodes().last(), path.first()) {
        graph.add_edge(last.clone(), first.clone());
    }
    Ok(finish(
        graph,
        format!("lollipop_graph({}, {path_label})", clique.label()),
    ))
}

/// Returns the circulant graph `C_n(offsets)`.
///
/// Node `i` is joined to `(i - x) mod n` and `(i + x) mod n` for every offset
/// `x`. Simple containers collapse coinciding edges; multigraphs keep every
/// generated edge, so each offset contributes `2n` edges there.
///
/// # Errors
/// See [`empty_graph`].
///
/// # Examples
/// ```
/// use graphgen_core::circulant_graph;
///
/// let graph = circulant_graph(10, &[1, 3], None)?;
/// assert_eq!(graph.edge_count(), 20);
/// assert!(graph.has_edge(&0, &7));
/// assert_eq!(graph.name(), "circulant_graph(10, [1, 3])");
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
pub fn circulant_graph(
    n: usize,
    offsets: &[usize],
    create_using: Option<Graph<usize>>,
) -> Result<Graph<usize>> {
    let mut graph = empty_graph(n, create_using)?;
    for node in 0..n {
        for offset in offsets {
            let step = offset % n;
            graph.add_edge(node, (node + n - step) % n);
            graph.add_edge(node, (node + step) % n);
        }
    }
    Ok(finish(
        graph,
        format!("circulant_graph({n}, {})", ListLabel(offsets)),
    ))
}

/// Returns the Dorogovtsev-Goltsev-Mendes graph of generation `n`.
///
/// Generation 0 is the single edge `(0, 1)`. Each later generation adds one
/// new node per existing edge, joined to both of that edge's endpoints, so
/// generation `n` has `3^n` edges and `(3^n + 3) / 2` nodes.
///
/// # Errors
/// - [`GeneratorError::DirectedUnsupported`] for a directed `create_using`.
/// - [`GeneratorError::MultigraphUnsupported`] for a multigraph
///   `create_using`.
#[instrument(
    name = "generators.dorogovtsev_goltsev_mendes_graph",
    err,
    skip(create_using),
    fields(kind = %kind_of(create_using.as_ref())),
)]
pub fn dorogovtsev_goltsev_mendes_graph(
    n: usize,
    create_using: Option<Graph<usize>>,
) -> Result<Graph<usize>> {
    const FAMILY: &str = "dorogovtsev_goltsev_mendes_graph";
    let kind = kind_of(create_using.as_ref());
    require_undirected(kind, FAMILY)?;
    require_simple(kind, FAMILY)?;

    let mut graph = empty_from(&[], create_using)?;
    graph.add_edge(0, 1);
    let mut next = 2_usize;
    for _ in 0..n {
        let generation: Vec<(usize, usize)> = graph.edges().map(|(u, v)| (*u, *v)).collect();
        for (u, v) in generation {
            graph.add_edge(next, u);
            graph.add_edge(next, v);
            next += 1;
        }
    }
    Ok(finish(graph, format!("{FAMILY}({n})")))
}
