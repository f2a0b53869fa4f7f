//! Generators for classic graph families.
//!
//! Each generator builds a deterministic member of a named family (complete
//! graphs, cycles, paths, stars, wheels, ladders, lattices, trees, barbells,
//! lollipops, circulants, multipartite and Turán graphs) into a [`Graph`].
//! Node sets are given as a [`NodeSpec`]: either a count, resolved to
//! `0..n`, or an explicit ordered list of identifiers. Most generators accept
//! an optional `create_using` graph whose [`GraphKind`] selects a directed
//! or multigraph container; the graph is cleared and returned filled.
//!
//! ```
//! use graphgen_core::{Graph, cycle_graph, wheel_graph};
//!
//! let cycle = cycle_graph(5, None)?;
//! assert!(cycle.nodes().all(|node| cycle.degree(node) == Some(2)));
//!
//! let directed = cycle_graph(vec!['a', 'b', 'c'], Some(Graph::directed()))?;
//! assert!(directed.has_edge(&'c', &'a'));
//! assert!(!directed.has_edge(&'a', &'c'));
//!
//! assert!(wheel_graph(5, Some(Graph::directed())).is_err());
//! # Ok::<(), graphgen_core::GeneratorError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod generators;
mod graph;
mod node_spec;
mod ops;
mod utils;

pub use crate::{
    error::{ErrorKind, GeneratorError, GeneratorErrorCode, Result},
    generators::{
        balanced_tree, barbell_graph, circulant_graph, circular_ladder_graph,
        complete_bipartite_graph, complete_graph, complete_multipartite_graph, cycle_graph,
        dorogovtsev_goltsev_mendes_graph, empty_graph, full_rary_tree, grid_2d_graph, grid_graph,
        hypercube_graph, ladder_graph, lollipop_graph, null_graph, path_graph, star_graph,
        trivial_graph, turan_graph, wheel_graph,
    },
    graph::{Graph, GraphKind},
    node_spec::{NodeId, NodeSpec, ResolvedNodes},
    ops::{cartesian_product, flatten_coordinates, relabel_nodes},
    utils::{Pairwise, accumulate, pairwise},
};
