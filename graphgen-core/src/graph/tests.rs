//! Unit tests for the graph container's edge semantics.

use rstest::rstest;

use super::{Graph, GraphKind};

#[rstest]
#[case::undirected(GraphKind::UNDIRECTED, 1)]
#[case::directed(GraphKind::DIRECTED, 2)]
#[case::multi(GraphKind::MULTI, 2)]
#[case::multi_directed(GraphKind::MULTI_DIRECTED, 2)]
fn reversed_edge_is_stored_per_kind(#[case] kind: GraphKind, #[case] expected: usize) {
    let mut graph = Graph::with_kind(kind);
    graph.add_edge(0_usize, 1);
    graph.add_edge(1, 0);
    assert_eq!(graph.edge_count(), expected);
}

#[rstest]
#[case::undirected(GraphKind::UNDIRECTED, 1)]
#[case::directed(GraphKind::DIRECTED, 1)]
#[case::multi(GraphKind::MULTI, 3)]
#[case::multi_directed(GraphKind::MULTI_DIRECTED, 3)]
fn repeated_edge_collapses_only_in_simple_graphs(
    #[case] kind: GraphKind,
    #[case] expected: usize,
) {
    let mut graph = Graph::with_kind(kind);
    for _ in 0..3 {
        graph.add_edge('a', 'b');
    }
    assert_eq!(graph.edge_count(), expected);
    assert_eq!(graph.edge_multiplicity(&'a', &'b'), expected);
}

#[test]
fn adding_an_edge_adds_missing_endpoints() {
    let mut graph = Graph::new();
    assert!(graph.add_edge("left", "right"));
    assert!(graph.has_node(&"left"));
    assert!(graph.has_node(&"right"));
    assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), ["left", "right"]);
}

#[test]
fn self_loop_counts_twice_towards_degree() {
    let mut graph = Graph::new();
    graph.add_edge(7_usize, 7);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.degree(&7), Some(2));
    assert_eq!(graph.neighbors(&7).copied().collect::<Vec<_>>(), [7]);
}

#[test]
fn directed_neighbors_are_successors() {
    let mut graph = Graph::directed();
    graph.add_edge(0_usize, 1);
    graph.add_edge(2, 0);
    assert_eq!(graph.neighbors(&0).copied().collect::<Vec<_>>(), [1]);
    assert!(graph.has_edge(&0, &1));
    assert!(!graph.has_edge(&1, &0));
    assert_eq!(graph.degree(&0), Some(2));
}

#[test]
fn parallel_edges_list_a_neighbour_once() {
    let mut graph = Graph::multigraph();
    graph.add_edge(0_usize, 1);
    graph.add_edge(1, 0);
    assert_eq!(graph.neighbors(&0).copied().collect::<Vec<_>>(), [1]);
    assert_eq!(graph.neighbors(&1).copied().collect::<Vec<_>>(), [0]);
    assert_eq!(graph.degree(&0), Some(2));
}

#[test]
fn clear_keeps_kind_and_drops_contents() {
    let mut graph = Graph::multi_directed();
    graph.set_name("scratch");
    graph.add_edge(0_usize, 1);
    graph.add_node_in_block(2, 4);
    graph.clear();

    assert_eq!(graph.kind(), GraphKind::MULTI_DIRECTED);
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.name(), "");
    assert!(!graph.has_edge(&0, &1));
}

#[test]
fn blocks_are_attached_to_nodes() {
    let mut graph = Graph::new();
    graph.add_node_in_block('a', 0);
    graph.add_node_in_block('b', 1);
    graph.add_node('c');
    assert_eq!(graph.block(&'a'), Some(0));
    assert_eq!(graph.block(&'b'), Some(1));
    assert_eq!(graph.block(&'c'), None);
    assert_eq!(graph.block(&'z'), None);
}

#[test]
fn add_node_reports_novelty() {
    let mut graph = Graph::new();
    assert!(graph.add_node(3_u8));
    assert!(!graph.add_node(3));
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn edges_iterate_in_insertion_order() {
    let mut graph = Graph::new();
    graph.add_edges_from([(2_usize, 1), (0, 2), (1, 0)]);
    let edges: Vec<(usize, usize)> = graph.edges().map(|(u, v)| (*u, *v)).collect();
    assert_eq!(edges, [(2, 1), (0, 2), (1, 0)]);
}

#[test]
fn missing_nodes_have_no_degree_or_neighbours() {
    let graph: Graph<usize> = Graph::new();
    assert_eq!(graph.degree(&0), None);
    assert_eq!(graph.neighbors(&0).count(), 0);
}

#[rstest]
#[case(GraphKind::UNDIRECTED, "undirected simple")]
#[case(GraphKind::MULTI_DIRECTED, "directed multi")]
fn kind_renders_capabilities(#[case] kind: GraphKind, #[case] expected: &str) {
    assert_eq!(kind.to_string(), expected);
}
