//! Tests for the empty, complete, cyclic and clique-joined families.

mod common;

use common::{count_with_degree, edge_list, is_connected, sorted_degrees, undirected_edge_set};
use graphgen_core::{
    GeneratorError, Graph, GraphKind, NodeSpec, barbell_graph, circulant_graph,
    circular_ladder_graph, complete_graph, cycle_graph, dorogovtsev_goltsev_mendes_graph,
    empty_graph, ladder_graph, lollipop_graph, null_graph, path_graph, star_graph, trivial_graph,
    wheel_graph,
};
use rstest::rstest;

#[rstest]
fn empty_graph_from_count() {
    let graph = empty_graph(3, None).expect("counts resolve");
    assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), [0, 1, 2]);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.kind(), GraphKind::UNDIRECTED);
    assert_eq!(graph.name(), "empty_graph(3)");
}

#[rstest]
fn empty_graph_from_explicit_labels() {
    let graph = empty_graph(vec!["x", "y"], None).expect("labels resolve");
    assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), ["x", "y"]);
    assert_eq!(graph.name(), r#"empty_graph(["x", "y"])"#);
}

#[rstest]
#[case::directed(GraphKind::DIRECTED)]
#[case::multi(GraphKind::MULTI)]
#[case::multi_directed(GraphKind::MULTI_DIRECTED)]
fn empty_graph_reuses_the_container(#[case] kind: GraphKind) {
    let mut scratch = Graph::with_kind(kind);
    scratch.set_name("scratch");
    scratch.add_edge(10_usize, 11);

    let graph = empty_graph(2, Some(scratch)).expect("counts resolve");
    assert_eq!(graph.kind(), kind);
    assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), [0, 1]);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.name(), "empty_graph(2)");
}

#[rstest]
fn empty_graph_rejects_repeated_labels() {
    let error = empty_graph("aba", None).expect_err("a repeats");
    assert_eq!(
        error,
        GeneratorError::DuplicateNode {
            node: "'a'".to_owned()
        }
    );
}

#[rstest]
fn empty_graph_rejects_counts_for_label_types() {
    let error = empty_graph(NodeSpec::<char>::Count(2), None).expect_err("no char indices");
    assert_eq!(error, GeneratorError::NoIndexIdentifiers { index: 0 });
}

#[rstest]
fn null_and_trivial_graphs() {
    let null = null_graph(None).expect("null graph");
    assert_eq!(null.node_count(), 0);
    assert_eq!(null.name(), "null_graph()");

    let trivial = trivial_graph(Some(Graph::directed())).expect("trivial graph");
    assert_eq!(trivial.nodes().copied().collect::<Vec<_>>(), [0]);
    assert_eq!(trivial.edge_count(), 0);
    assert!(trivial.is_directed());
    assert_eq!(trivial.name(), "trivial_graph()");
}

#[rstest]
#[case(0, 0, 0)]
#[case(1, 0, 0)]
#[case(2, 1, 2)]
#[case(5, 10, 20)]
#[case(9, 36, 72)]
fn complete_graph_edge_counts(
    #[case] n: usize,
    #[case] undirected: usize,
    #[case] directed: usize,
) {
    let graph = complete_graph(n, None).expect("complete graph");
    assert_eq!(graph.node_count(), n);
    assert_eq!(graph.edge_count(), undirected);

    let arcs = complete_graph(n, Some(Graph::directed())).expect("complete digraph");
    assert_eq!(arcs.edge_count(), directed);
}

#[rstest]
fn complete_graph_over_labels_has_no_self_loops() {
    let graph = complete_graph("abcd", None).expect("labels resolve");
    assert_eq!(graph.edge_count(), 6);
    assert!(graph.nodes().all(|node| !graph.has_edge(node, node)));
    assert!(graph.nodes().all(|node| graph.degree(node) == Some(3)));
    assert_eq!(graph.name(), "complete_graph(['a', 'b', 'c', 'd'])");
}

#[rstest]
#[case(3)]
#[case(4)]
#[case(7)]
fn cycle_graph_is_two_regular_and_connected(#[case] n: usize) {
    let graph = cycle_graph(n, None).expect("cycle graph");
    assert_eq!(graph.edge_count(), n);
    assert!(is_connected(&graph));
    assert_eq!(sorted_degrees(&graph), vec![2; n]);
    assert_eq!(graph.name(), format!("cycle_graph({n})"));
}

#[rstest]
fn cycle_graph_degenerate_sizes() {
    let null = cycle_graph(0, None).expect("empty cycle");
    assert_eq!(null.node_count(), 0);
    assert_eq!(null.edge_count(), 0);

    let single = cycle_graph(1, None).expect("single node cycle");
    assert_eq!(edge_list(&single), [(0, 0)]);
}

#[rstest]
#[case::simple(GraphKind::UNDIRECTED, 1)]
#[case::multi(GraphKind::MULTI, 2)]
#[case::directed(GraphKind::DIRECTED, 2)]
fn two_node_cycle_depends_on_kind(#[case] kind: GraphKind, #[case] edges: usize) {
    let graph = cycle_graph(2, Some(Graph::with_kind(kind))).expect("two node cycle");
    assert_eq!(graph.edge_count(), edges);
}

#[rstest]
fn directed_cycle_follows_node_order() {
    let graph = cycle_graph(vec![3_usize, 1, 2], Some(Graph::directed())).expect("cycle");
    assert_eq!(edge_list(&graph), [(3, 1), (1, 2), (2, 3)]);
}

#[rstest]
#[case(1, 0)]
#[case(2, 1)]
#[case(6, 5)]
fn path_graph_edges_and_endpoints(#[case] n: usize, #[case] edges: usize) {
    let graph = path_graph(n, None).expect("path graph");
    assert_eq!(graph.edge_count(), edges);
    assert!(is_connected(&graph));
    let expected_ends = if n == 1 { 0 } else { 2 };
    assert_eq!(count_with_degree(&graph, 1), expected_ends);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(8)]
fn star_graph_has_one_hub(#[case] n: usize) {
    let graph = star_graph(n, None).expect("star graph");
    assert_eq!(graph.node_count(), n + 1);
    assert_eq!(graph.edge_count(), n);
    assert_eq!(graph.degree(&0), Some(n));
    assert!(graph.has_node(&n));
    if n > 1 {
        assert_eq!(count_with_degree(&graph, 1), n);
    }
}

#[rstest]
fn star_graph_uses_first_label_as_center() {
    let graph = star_graph(vec!['h', 'a', 'b'], None).expect("star graph");
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.degree(&'h'), Some(2));
    assert!(!graph.has_edge(&'a', &'b'));
}

#[rstest]
fn star_graph_of_no_labels_is_null() {
    let graph = star_graph(Vec::<char>::new(), None).expect("empty star");
    assert_eq!(graph.node_count(), 0);
}

#[rstest]
#[case(4)]
#[case(5)]
#[case(9)]
fn wheel_graph_hub_and_rim_degrees(#[case] n: usize) {
    let graph = wheel_graph(n, None).expect("wheel graph");
    assert_eq!(graph.node_count(), n);
    assert_eq!(graph.edge_count(), 2 * (n - 1));
    assert_eq!(graph.degree(&0), Some(n - 1));
    assert!(graph.nodes().skip(1).all(|node| graph.degree(node) == Some(3)));
}

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(2, 1)]
#[case(3, 3)]
fn small_wheels_degenerate(#[case] n: usize, #[case] edges: usize) {
    let graph = wheel_graph(n, None).expect("wheel graph");
    assert_eq!(graph.node_count(), n);
    assert_eq!(graph.edge_count(), edges);
}

#[rstest]
fn ladder_graph_rails_and_rungs() {
    let graph = ladder_graph(4, None).expect("ladder graph");
    assert_eq!(graph.node_count(), 8);
    assert_eq!(graph.edge_count(), 10);
    assert!(graph.has_edge(&0, &1));
    assert!(graph.has_edge(&6, &7));
    assert!(graph.has_edge(&2, &6));
    assert!(!graph.has_edge(&3, &4));
    assert_eq!(graph.name(), "ladder_graph(4)");
}

#[rstest]
fn circular_ladder_is_three_regular() {
    let graph = circular_ladder_graph(5, None).expect("circular ladder");
    assert_eq!(graph.node_count(), 10);
    assert_eq!(graph.edge_count(), 15);
    assert_eq!(sorted_degrees(&graph), vec![3; 10]);
    assert!(graph.has_edge(&0, &4));
    assert!(graph.has_edge(&5, &9));
}

#[rstest]
fn circular_ladder_of_zero_is_null() {
    let graph = circular_ladder_graph(0, None).expect("empty ladder");
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[rstest]
fn barbell_without_bar() {
    let graph = barbell_graph(3, 0, None).expect("barbell graph");
    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.edge_count(), 7);
    assert!(graph.has_edge(&2, &3));
    assert!(is_connected(&graph));
}

#[rstest]
fn barbell_with_bar() {
    let graph = barbell_graph(4, 3, None).expect("barbell graph");
    assert_eq!(graph.node_count(), 11);
    assert_eq!(graph.edge_count(), 6 + 6 + 2 + 2);
    assert!(graph.has_edge(&3, &4));
    assert!(graph.has_edge(&6, &7));
    assert!(is_connected(&graph));
    assert_eq!(graph.name(), "barbell_graph(4, 3)");
}

#[rstest]
fn lollipop_shifts_counted_path() {
    let graph = lollipop_graph(4, 3, None).expect("lollipop graph");
    assert_eq!(graph.node_count(), 7);
    assert_eq!(graph.edge_count(), 6 + 1 + 2);
    assert!(graph.has_edge(&3, &4));
    assert!(graph.has_edge(&5, &6));
    assert_eq!(count_with_degree(&graph, 1), 1);
}

#[rstest]
fn lollipop_keeps_explicit_path_labels() {
    let graph = lollipop_graph(3, vec![10_usize, 11], None).expect("lollipop graph");
    assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), [0, 1, 2, 10, 11]);
    assert!(graph.has_edge(&2, &10));
    assert_eq!(graph.name(), "lollipop_graph(3, [10, 11])");
}

#[rstest]
fn lollipop_does_not_shift_after_explicit_clique() {
    let graph = lollipop_graph(vec![5_usize, 6, 7], 2, None).expect("lollipop graph");
    assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), [5, 6, 7, 0, 1]);
    assert!(graph.has_edge(&7, &0));
}

#[rstest]
fn lollipop_rejects_overlapping_parts() {
    let error = lollipop_graph("ab", "bc", None).expect_err("b is shared");
    assert_eq!(
        error,
        GeneratorError::DuplicateNode {
            node: "'b'".to_owned()
        }
    );
}

#[rstest]
fn lollipop_without_path_is_a_clique() {
    let graph = lollipop_graph(3, 0, None).expect("lollipop graph");
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
}

#[rstest]
fn circulant_with_unit_offset_is_a_cycle() {
    let circulant = circulant_graph(10, &[1], None).expect("circulant graph");
    let cycle = cycle_graph(10, None).expect("cycle graph");
    assert_eq!(undirected_edge_set(&circulant), undirected_edge_set(&cycle));
    assert_eq!(circulant.edge_count(), 10);
}

#[rstest]
fn circulant_accumulates_in_multigraphs() {
    let graph = circulant_graph(10, &[1], Some(Graph::multigraph())).expect("circulant");
    assert_eq!(graph.edge_count(), 20);
    assert_eq!(graph.edge_multiplicity(&0, &1), 2);
}

#[rstest]
fn circulant_directed_has_both_orientations() {
    let graph = circulant_graph(5, &[2], Some(Graph::directed())).expect("circulant");
    assert_eq!(graph.edge_count(), 10);
    assert!(graph.has_edge(&0, &2));
    assert!(graph.has_edge(&0, &3));
}

#[rstest]
fn circulant_of_zero_nodes_is_null() {
    let graph = circulant_graph(0, &[1, 2], None).expect("empty circulant");
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.name(), "circulant_graph(0, [1, 2])");
}

#[rstest]
#[case(0, 2, 1)]
#[case(1, 3, 3)]
#[case(2, 6, 9)]
#[case(4, 42, 81)]
fn dorogovtsev_goltsev_mendes_growth(
    #[case] generation: usize,
    #[case] nodes: usize,
    #[case] edges: usize,
) {
    let graph = dorogovtsev_goltsev_mendes_graph(generation, None).expect("dgm graph");
    assert_eq!(graph.node_count(), nodes);
    assert_eq!(graph.edge_count(), edges);
    assert!(is_connected(&graph));
}

#[rstest]
fn dorogovtsev_goltsev_mendes_first_generation_is_a_triangle() {
    let graph = dorogovtsev_goltsev_mendes_graph(1, None).expect("dgm graph");
    assert_eq!(edge_list(&graph), [(0, 1), (2, 0), (2, 1)]);
}
