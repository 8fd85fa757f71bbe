use super::*;

#[test]
fn empty_graph_has_no_vertices_or_edges() {
    let graph = DirectedGraph::new();
    assert_eq!(graph.num_vertices(), 0);
    assert_eq!(graph.num_edges(), 0);
    assert!(graph.is_empty());
    assert_eq!(graph.vertices().next(), None);
    assert_eq!(graph.edges().next(), None);
    assert!(graph.validate_invariants());
}

#[test]
fn add_vertex_returns_dense_ids() {
    let mut graph = DirectedGraph::new();
    assert_eq!(graph.add_vertex(), 0);
    assert_eq!(graph.add_vertex(), 1);
    assert_eq!(graph.num_vertices(), 2);

    for _ in 2..100 {
        graph.add_vertex();
    }
    assert_eq!(graph.num_vertices(), 100);
    assert!(graph.vertices().eq(0..100));
    assert_eq!(graph.vertex(0), 0);
    assert_eq!(graph.vertex(99), 99);
}

#[test]
fn add_edge_grows_to_larger_endpoint() {
    let mut graph = DirectedGraph::new();
    let (e, inserted) = graph.add_edge(0, 5);
    assert!(inserted);
    assert_eq!(graph.num_vertices(), 6);
    assert_eq!(graph.num_edges(), 1);
    assert_eq!(e.source(), 0);
    assert_eq!(e.target(), 5);
    assert!(graph.validate_invariants());
}

#[test]
fn add_edge_grows_for_source_endpoint() {
    let mut graph = DirectedGraph::new();
    graph.add_vertex();
    let (_, inserted) = graph.add_edge(7, 0);
    assert!(inserted);
    assert_eq!(graph.num_vertices(), 8);
    assert!(graph.edge(7, 0).1);
    assert_eq!(graph.out_degree(7), 1);
    assert!(graph.validate_invariants());
}

#[test]
fn add_edge_from_single_vertex_to_far_target() {
    let mut graph = DirectedGraph::new();
    let v = graph.add_vertex();
    graph.add_edge(v, 99);
    assert_eq!(graph.num_vertices(), 100);
}

#[test]
fn duplicate_edge_is_reported_and_ignored() {
    let mut graph = DirectedGraph::new();
    graph.add_vertex();
    let first = graph.add_edge(0, 3);
    let second = graph.add_edge(0, 3);

    assert!(first.1);
    assert!(!second.1);
    assert_eq!(first.0, second.0);
    assert_eq!(graph.num_edges(), 1);
    assert_eq!(graph.edges().collect::<Vec<_>>(), vec![Edge::new(0, 3)]);
}

#[test]
fn reverse_edge_does_not_exist() {
    let mut graph = DirectedGraph::new();
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    let (ab, _) = graph.add_edge(a, b);

    let (ba, found) = graph.edge(b, a);
    assert!(!found);
    assert_ne!(ba, ab);
    assert_eq!(graph.edge(a, b), (ab, true));
}

#[test]
fn edge_lookup_on_unconnected_pair() {
    let mut graph = DirectedGraph::new();
    let v = graph.add_vertex();
    let u = graph.add_vertex();
    assert_eq!(graph.edge(v, u), (Edge::new(v, u), false));
    // Targets beyond the vertex set are not found rather than rejected.
    assert!(!graph.edge(v, 42).1);
}

#[test]
fn adjacency_is_ascending_regardless_of_insertion_order() {
    let mut graph = DirectedGraph::new();
    graph.add_edge(0, 5);
    graph.add_edge(0, 2);
    graph.add_edge(0, 8);

    assert_eq!(graph.adjacent_vertices(0).collect::<Vec<_>>(), vec![2, 5, 8]);
    // Edge order stays insertion order.
    assert_eq!(
        graph.edges().collect::<Vec<_>>(),
        vec![Edge::new(0, 5), Edge::new(0, 2), Edge::new(0, 8)]
    );
}

#[test]
fn adjacency_includes_self_loop() {
    let mut graph = DirectedGraph::new();
    let v = graph.add_vertex();
    for i in 0..10 {
        graph.add_edge(v, i);
    }
    assert!(graph.adjacent_vertices(v).eq(0..10));
    assert!(graph.edge(v, v).1);
    assert_eq!(graph.num_edges(), 10);
}

#[test]
fn shared_target_from_two_sources() {
    let mut graph = DirectedGraph::new();
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    let c = graph.add_vertex();
    graph.add_edge(a, b);
    graph.add_edge(c, b);

    assert_eq!(graph.adjacent_vertices(a).collect::<Vec<_>>(), vec![b]);
    assert_eq!(graph.adjacent_vertices(c).collect::<Vec<_>>(), vec![b]);
    assert_eq!(graph.adjacent_vertices(b).len(), 0);
}

#[test]
fn edge_count_with_overlapping_fans() {
    let mut graph = DirectedGraph::new();
    let u = graph.add_vertex();
    let v = graph.add_vertex();
    graph.add_edge(u, v);
    graph.add_edge(v, u);
    for i in 0..100 {
        graph.add_edge(u, i);
        graph.add_edge(v, i);
    }
    assert_eq!(graph.num_edges(), 200);
    assert_eq!(graph.num_vertices(), 100);
    assert!(graph.validate_invariants());
}

#[test]
fn ranges_are_restartable_and_sized() {
    let graph = DirectedGraph::from_edges([(0, 1), (0, 2), (1, 2)]);

    let vertices = graph.vertices();
    assert_eq!(vertices.len(), 3);
    assert_eq!(vertices.clone().collect::<Vec<_>>(), vertices.collect::<Vec<_>>());

    let mut edges = graph.edges();
    let restart = edges.clone();
    assert_eq!(edges.next(), Some(Edge::new(0, 1)));
    assert_eq!(edges.len(), 2);
    assert_eq!(restart.len(), 3);

    let adjacent = graph.adjacent_vertices(0);
    assert_eq!(adjacent.clone().rev().collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(adjacent.collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn counts_match_range_lengths() {
    let graph = DirectedGraph::from_edges([(3, 1), (1, 3), (2, 2), (3, 1)]);
    assert_eq!(graph.num_vertices(), graph.vertices().count());
    assert_eq!(graph.num_edges(), graph.edges().count());
    assert_eq!(graph.num_edges(), 3);
}

#[test]
fn every_edge_is_in_its_adjacency_set() {
    let graph: DirectedGraph = [(0, 4), (4, 0), (2, 3), (2, 1), (0, 1)]
        .into_iter()
        .collect();
    for e in graph.edges() {
        assert!(graph.adjacent_vertices(e.source()).any(|v| v == e.target()));
        assert!(graph.edge(e.source(), e.target()).1);
    }
    let memberships: usize = graph.vertices().map(|u| graph.out_degree(u)).sum();
    assert_eq!(memberships, graph.num_edges());
}

#[test]
fn extend_deduplicates() {
    let mut graph = DirectedGraph::with_capacity(4, 4);
    graph.extend([Edge::new(0, 1), Edge::new(1, 2)]);
    graph.extend([(0, 1), (2, 3)]);
    assert_eq!(graph.num_edges(), 3);
    assert_eq!(graph.num_vertices(), 4);
    assert!(graph.contains_vertex(3));
    assert!(!graph.contains_vertex(4));
}

#[test]
fn protocol_free_functions_delegate() {
    use crate::graph::protocol;

    let mut graph = DirectedGraph::new();
    let a = protocol::add_vertex(&mut graph);
    let (ab, inserted) = protocol::add_edge(a, 1, &mut graph);
    assert!(inserted);
    assert_eq!(protocol::num_vertices(&graph), 2);
    assert_eq!(protocol::num_edges(&graph), 1);
    assert_eq!(protocol::edge(a, 1, &graph), (ab, true));
    assert_eq!(protocol::source(ab), a);
    assert_eq!(protocol::target(ab), 1);
    assert_eq!(<DirectedGraph as GraphProtocol>::target(ab), 1);
    assert_eq!(protocol::vertex(1, &graph), 1);
    assert!(protocol::vertices(&graph).eq(0..2));
    assert!(protocol::edges(&graph).eq([ab]));
    assert!(protocol::adjacent_vertices(a, &graph).eq([1]));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "out of bounds")]
fn adjacency_of_missing_vertex_panics_in_debug() {
    let graph = DirectedGraph::from_edges([(0, 1)]);
    let _ = graph.adjacent_vertices(2);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "out of bounds")]
fn vertex_past_end_panics_in_debug() {
    let mut graph = DirectedGraph::new();
    graph.add_vertex();
    let _ = graph.vertex(1);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "Graph invariant violated")]
fn corrupted_adjacency_is_detected() {
    let mut graph = DirectedGraph::from_edges([(0, 1)]);
    graph.adjacency[1].insert(0);
    graph.validate_invariants();
}
