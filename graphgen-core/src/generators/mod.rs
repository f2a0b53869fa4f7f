//! Generators for classic parametric graph families.
//!
//! Every generator follows the same shape: validate its parameters, resolve
//! its [`NodeSpec`](crate::NodeSpec) arguments, obtain an empty graph through
//! the shared factory (reusing the caller's `create_using` graph when one is
//! supplied), add the family's edge set and name the result.
//!
//! Validation always happens before the caller's graph is cleared, so an
//! error never leaves a half-built container behind.

mod classic;
mod lattice;
mod multipartite;
mod trees;

use tracing::debug;

use crate::{
    error::{GeneratorError, Result},
    graph::{Graph, GraphKind},
    node_spec::{NodeId, ensure_unique},
};

pub use self::{
    classic::{
        barbell_graph, circulant_graph, circular_ladder_graph, complete_graph, cycle_graph,
        dorogovtsev_goltsev_mendes_graph, empty_graph, ladder_graph, lollipop_graph, null_graph,
        path_graph, star_graph, trivial_graph, wheel_graph,
    },
    lattice::{grid_2d_graph, grid_graph, hypercube_graph},
    multipartite::{complete_bipartite_graph, complete_multipartite_graph, turan_graph},
    trees::{balanced_tree, full_rary_tree},
};

/// Capabilities of the graph a generator will fill.
fn kind_of<N: NodeId>(create_using: Option<&Graph<N>>) -> GraphKind {
    create_using.map_or_else(GraphKind::default, Graph::kind)
}

fn require_undirected(kind: GraphKind, family: &'static str) -> Result<()> {
    if kind.is_directed() {
        return Err(GeneratorError::DirectedUnsupported { family });
    }
    Ok(())
}

fn require_simple(kind: GraphKind, family: &'static str) -> Result<()> {
    if kind.is_multigraph() {
        return Err(GeneratorError::MultigraphUnsupported { family });
    }
    Ok(())
}

/// Clears `create_using` (or creates a simple undirected graph) and adds
/// `nodes` without edges.
fn empty_from<N: NodeId>(nodes: &[N], create_using: Option<Graph<N>>) -> Result<Graph<N>> {
    ensure_unique(nodes)?;
    let mut graph = match create_using {
        Some(mut graph) => {
            graph.clear();
            graph
        }
        None => Graph::new(),
    };
    graph.add_nodes_from(nodes.iter().cloned());
    Ok(graph)
}

/// Connects every unordered pair of `nodes`.
fn add_clique<N: NodeId>(graph: &mut Graph<N>, nodes: &[N]) {
    for (position, source) in nodes.iter().enumerate() {
        for target in nodes.iter().skip(position + 1) {
            graph.add_edge(source.clone(), target.clone());
        }
    }
}

fn overflow(family: &'static str) -> GeneratorError {
    GeneratorError::NodeCountOverflow { family }
}

/// Names the finished graph and reports its size.
fn finish<N: NodeId>(mut graph: Graph<N>, name: String) -> Graph<N> {
    debug!(
        graph = %name,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph generated"
    );
    graph.set_name(name);
    graph
}
