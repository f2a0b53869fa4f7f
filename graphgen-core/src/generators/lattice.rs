//! Rectangular lattices, n-dimensional grids and hypercubes.

use tracing::{Span, field, instrument};

use super::{cycle_graph, empty_from, finish, path_graph};
use crate::{
    error::Result,
    graph::Graph,
    node_spec::{NodeId, NodeSpec},
    ops::{cartesian_product, flatten_coordinates, relabel_nodes},
    utils::pairwise,
};

/// Adds `source -> target`, plus the reverse arc when `graph` is directed.
fn add_lattice_edge<N: NodeId>(graph: &mut Graph<N>, source: N, target: N) {
    let reverse = graph
        .is_directed()
        .then(|| (target.clone(), source.clone()));
    graph.add_edge(source, target);
    if let Some((source, target)) = reverse {
        graph.add_edge(source, target);
    }
}

/// First and last entries of a dimension long enough to wrap around.
fn wrap_ends<N>(nodes: &[N]) -> Option<(&N, &N)> {
    match nodes {
        [first, _, .., last] => Some((first, last)),
        _ => None,
    }
}

/// Returns the two-dimensional grid over `m` rows and `n` columns.
///
/// Nodes are the pairs `(row, column)` in row-major order. Adjacent rows and
/// adjacent columns are joined. When `periodic` is set, each dimension with
/// more than two entries also wraps its last entry around to its first.
/// Directed containers receive both orientations of every lattice edge.
///
/// # Errors
/// See [`crate::empty_graph`].
///
/// # Examples
/// ```
/// use graphgen_core::grid_2d_graph;
///
/// let grid = grid_2d_graph(2, 3, false, None)?;
/// assert_eq!(grid.node_count(), 6);
/// assert_eq!(grid.edge_count(), 7);
/// assert!(grid.has_edge(&(1, 2), &(0, 2)));
///
/// let torus = grid_2d_graph(3, 3, true, None)?;
/// assert!(torus.nodes().all(|node| torus.degree(node) == Some(4)));
/// assert_eq!(torus.name(), "periodic_grid_2d_graph(3, 3)");
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
pub fn grid_2d_graph<R, C>(
    m: impl Into<NodeSpec<R>>,
    n: impl Into<NodeSpec<C>>,
    periodic: bool,
    create_using: Option<Graph<(R, C)>>,
) -> Result<Graph<(R, C)>>
where
    R: NodeId,
    C: NodeId,
{
    let rows = m.into().resolve()?;
    let cols = n.into().resolve()?;
    let nodes: Vec<(R, C)> = rows
        .nodes()
        .iter()
        .flat_map(|row| cols.nodes().iter().map(move |col| (row.clone(), col.clone())))
        .collect();
    let mut graph = empty_from(&nodes, create_using)?;

    for (previous, row) in pairwise(rows.nodes()) {
        for col in cols.nodes() {
            add_lattice_edge(
                &mut graph,
                (row.clone(), col.clone()),
                (previous.clone(), col.clone()),
            );
        }
    }
    for row in rows.nodes() {
        for (previous, col) in pairwise(cols.nodes()) {
            add_lattice_edge(
                &mut graph,
                (row.clone(), col.clone()),
                (row.clone(), previous.clone()),
            );
        }
    }

    if periodic {
        if let Some((first, last)) = wrap_ends(rows.nodes()) {
            for col in cols.nodes() {
                add_lattice_edge(
                    &mut graph,
                    (first.clone(), col.clone()),
                    (last.clone(), col.clone()),
                );
            }
        }
        if let Some((first, last)) = wrap_ends(cols.nodes()) {
            for row in rows.nodes() {
                add_lattice_edge(
                    &mut graph,
                    (row.clone(), first.clone()),
                    (row.clone(), last.clone()),
                );
            }
        }
    }

    let family = if periodic {
        "periodic_grid_2d_graph"
    } else {
        "grid_2d_graph"
    };
    Ok(finish(
        graph,
        format!("{family}({}, {})", rows.label(), cols.label()),
    ))
}

fn line_graph<N: NodeId>(spec: &NodeSpec<N>, periodic: bool) -> Result<Graph<N>> {
    if periodic {
        cycle_graph(spec.clone(), None)
    } else {
        path_graph(spec.clone(), None)
    }
}

/// Returns the n-dimensional grid whose sides are described by `dims`.
///
/// Each dimension is a path (a cycle when `periodic` is set) and the grid is
/// their cartesian product. Nodes are coordinate vectors with one entry per
/// dimension, first dimension first. No dimensions yield the null graph.
///
/// # Errors
/// See [`crate::empty_graph`].
///
/// # Examples
/// ```
/// use graphgen_core::grid_graph;
///
/// let grid = grid_graph([2, 3, 4], false)?;
/// assert_eq!(grid.node_count(), 24);
/// assert!(grid.has_edge(&vec![0, 0, 0], &vec![0, 0, 1]));
/// assert!(grid.has_edge(&vec![0, 2, 3], &vec![1, 2, 3]));
/// assert_eq!(grid.name(), "grid_graph([2, 3, 4])");
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
#[instrument(
    name = "generators.grid_graph",
    err,
    skip(dims),
    fields(dimensions = field::Empty),
)]
pub fn grid_graph<N, I>(dims: I, periodic: bool) -> Result<Graph<Vec<N>>>
where
    N: NodeId,
    I: IntoIterator,
    I::Item: Into<NodeSpec<N>>,
{
    let specs: Vec<NodeSpec<N>> = dims.into_iter().map(Into::into).collect();
    Span::current().record("dimensions", specs.len());
    let labels: Vec<String> = specs.iter().map(ToString::to_string).collect();
    let name = format!("grid_graph([{}])", labels.join(", "));

    let Some((innermost, outer)) = specs.split_last() else {
        return Ok(finish(Graph::new(), name));
    };
    let mut grid = relabel_nodes(&line_graph(innermost, periodic)?, |node| vec![node.clone()]);
    for spec in outer.iter().rev() {
        let product = cartesian_product(&line_graph(spec, periodic)?, &grid)?;
        grid = relabel_nodes(&product, flatten_coordinates);
    }
    Ok(finish(grid, name))
}

/// Returns the `n`-dimensional hypercube.
///
/// Nodes are the `2^n` binary coordinate vectors of length `n`; two nodes are
/// adjacent when they differ in exactly one coordinate.
///
/// # Errors
/// Only propagates failures from [`grid_graph`], which cannot occur for
/// `usize` coordinates.
///
/// # Examples
/// ```
/// use graphgen_core::hypercube_graph;
///
/// let cube = hypercube_graph(3)?;
/// assert_eq!(cube.node_count(), 8);
/// assert_eq!(cube.edge_count(), 12);
/// assert!(cube.has_edge(&vec![0, 1, 1], &vec![1, 1, 1]));
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
pub fn hypercube_graph(n: usize) -> Result<Graph<Vec<usize>>> {
    let graph = grid_graph(vec![NodeSpec::<usize>::Count(2); n], false)?;
    Ok(finish(graph, format!("hypercube_graph({n})")))
}
