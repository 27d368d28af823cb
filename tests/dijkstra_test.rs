use shortest_paths::{
    search::dijkstra::shortest_path_tree, shortest_distances, shortest_path, Dijkstra, Graph,
    HashGraph, PathError, PathFinding, ShortestPathRequest,
};

fn graph_from(edges: &[(&'static str, &'static str, u32)]) -> HashGraph<&'static str, u32> {
    let mut graph = HashGraph::new();
    for &(a, b, weight) in edges {
        graph.add_edge_bidirectional(a, b, weight);
    }
    graph
}

fn six_node_graph() -> HashGraph<&'static str, u32> {
    graph_from(&[
        ("A", "B", 7),
        ("A", "C", 9),
        ("A", "F", 14),
        ("B", "C", 10),
        ("B", "D", 15),
        ("C", "D", 11),
        ("C", "F", 2),
        ("D", "E", 6),
        ("E", "F", 9),
    ])
}

fn ten_node_graph() -> HashGraph<&'static str, u32> {
    graph_from(&[
        ("A", "B", 3),
        ("A", "C", 1),
        ("B", "C", 7),
        ("B", "D", 5),
        ("C", "E", 2),
        ("D", "E", 7),
        ("D", "F", 1),
        ("E", "F", 3),
        ("E", "G", 8),
        ("F", "G", 2),
        ("G", "H", 3),
        ("H", "I", 1),
        ("I", "J", 6),
    ])
}

#[test]
fn shortest_path_in_six_node_graph() {
    let path = shortest_path(&six_node_graph(), &"A", &"E").unwrap();

    assert_eq!(path.distance, 20);
    assert_eq!(path.vertices, vec!["A", "C", "F", "E"]);
}

#[test]
fn all_distances_in_six_node_graph() {
    let distances = shortest_distances(&six_node_graph(), &"A").unwrap();

    let mut distances: Vec<_> = distances.into_iter().collect();
    distances.sort();
    assert_eq!(
        distances,
        vec![("A", 0), ("B", 7), ("C", 9), ("D", 20), ("E", 20), ("F", 11)]
    );
}

#[test]
fn no_path_in_disconnected_graph() {
    let graph = graph_from(&[("A", "B", 1), ("C", "D", 1)]);

    let path = shortest_path(&graph, &"A", &"D").unwrap();

    assert_eq!(path.distance, u32::MAX);
    assert!(path.vertices.is_empty());
    assert!(!path.is_reachable());

    let distances = shortest_distances(&graph, &"A").unwrap();
    assert_eq!(distances.len(), 2);
    assert!(!distances.contains_key(&"D"));
}

#[test]
fn shortest_path_in_ten_node_graph() {
    let path = shortest_path(&ten_node_graph(), &"A", &"J").unwrap();

    assert_eq!(path.distance, 18);
    assert_eq!(
        path.vertices,
        vec!["A", "C", "E", "F", "G", "H", "I", "J"]
    );
}

#[test]
fn single_node_path() {
    let path = shortest_path(&six_node_graph(), &"A", &"A").unwrap();

    assert_eq!(path.distance, 0);
    assert_eq!(path.vertices, vec!["A"]);
}

#[test]
fn isolated_start_node() {
    let mut graph = six_node_graph();
    graph.add_node("lonely");

    let distances = shortest_distances(&graph, &"lonely").unwrap();
    assert_eq!(distances.len(), 1);
    assert_eq!(distances[&"lonely"], 0);

    let path = shortest_path(&graph, &"lonely", &"A").unwrap();
    assert!(!path.is_reachable());
}

#[test]
fn long_chain_does_not_grow_the_stack() {
    let mut graph = HashGraph::new();
    for i in 0..999u32 {
        graph.add_edge(i.to_string(), (i + 1).to_string(), 1u32);
    }

    let path = shortest_path(&graph, &"0".to_string(), &"999".to_string()).unwrap();

    assert_eq!(path.distance, 999);
    let expected: Vec<String> = (0..1000).map(|i| i.to_string()).collect();
    assert_eq!(path.vertices, expected);
}

#[test]
fn directed_edges_are_not_symmetric() {
    let mut graph = HashGraph::new();
    graph.add_edge("a", "b", 1u32);
    graph.add_edge("b", "c", 1u32);
    graph.add_edge("c", "a", 10u32);

    assert_eq!(shortest_path(&graph, &"a", &"c").unwrap().distance, 2);
    assert_eq!(shortest_path(&graph, &"c", &"b").unwrap().distance, 11);
    assert_eq!(
        shortest_path(&graph, &"b", &"a").unwrap().vertices,
        vec!["b", "c", "a"]
    );
}

#[test]
fn float_weights() {
    let mut graph = HashGraph::new();
    graph.add_edge_bidirectional("x", "y", 0.5f64);
    graph.add_edge_bidirectional("y", "z", 0.25f64);
    graph.add_edge_bidirectional("x", "z", 1.0f64);

    let path = shortest_path(&graph, &"x", &"z").unwrap();
    assert_eq!(path.distance, 0.75);
    assert_eq!(path.vertices, vec!["x", "y", "z"]);

    let mut disconnected = graph.clone();
    disconnected.add_node("w");
    let path = shortest_path(&disconnected, &"x", &"w").unwrap();
    assert_eq!(path.distance, f64::INFINITY);
    assert!(path.vertices.is_empty());
}

#[test]
fn zero_weight_edges() {
    let mut graph = HashGraph::new();
    graph.add_edge_bidirectional(1u32, 2u32, 0u32);
    graph.add_edge_bidirectional(2u32, 3u32, 0u32);

    let path = shortest_path(&graph, &1, &3).unwrap();
    assert_eq!(path.distance, 0);
    assert_eq!(path.vertices, vec![1, 2, 3]);
}

#[test]
fn unknown_nodes_are_errors() {
    let graph = six_node_graph();

    assert!(matches!(
        shortest_path(&graph, &"X", &"A"),
        Err(PathError::InvalidNode(node)) if node == "\"X\""
    ));
    assert!(matches!(
        shortest_path(&graph, &"A", &"Y"),
        Err(PathError::InvalidNode(node)) if node == "\"Y\""
    ));
    assert!(matches!(
        shortest_distances(&graph, &"Z"),
        Err(PathError::InvalidNode(_))
    ));
}

#[test]
fn negative_weight_is_rejected() {
    let mut graph = HashGraph::new();
    graph.add_edge("a", "b", 4i32);
    graph.add_edge("b", "c", -3i32);

    assert!(matches!(
        shortest_path(&graph, &"a", &"b"),
        Err(PathError::MalformedGraph { .. })
    ));
    assert!(matches!(
        shortest_distances(&graph, &"a"),
        Err(PathError::MalformedGraph { .. })
    ));
}

#[test]
fn repeated_queries_are_identical() {
    let graph = ten_node_graph();
    let dijkstra = Dijkstra::new(&graph);

    let first = dijkstra.shortest_path(&"A", &"J").unwrap();
    for _ in 0..10 {
        assert_eq!(dijkstra.shortest_path(&"A", &"J").unwrap(), first);
    }
}

#[test]
fn distances_agree_with_single_pair_queries() {
    let graph = ten_node_graph();
    let distances = shortest_distances(&graph, &"B").unwrap();

    for node in graph.nodes() {
        let path = shortest_path(&graph, &"B", node).unwrap();
        assert_eq!(distances.get(node), Some(&path.distance));
    }
}

#[test]
fn shortest_path_tree_answers_all_targets() {
    let graph = six_node_graph();
    let tree = shortest_path_tree(&graph, &"A").unwrap();

    assert_eq!(tree.source(), &"A");
    assert_eq!(tree.distance(&"E").unwrap(), 20);
    assert_eq!(tree.path_to(&"E").unwrap().vertices, vec!["A", "C", "F", "E"]);
    assert_eq!(tree.path_to(&"A").unwrap().vertices, vec!["A"]);
    assert_eq!(tree.distances().len(), 6);
}

#[test]
fn shortest_path_tree_tells_unknown_from_unreachable() {
    let mut graph = six_node_graph();
    graph.add_node("lonely");
    let tree = shortest_path_tree(&graph, &"A").unwrap();

    let path = tree.path_to(&"lonely").unwrap();
    assert!(!path.is_reachable());
    assert_eq!(tree.distance(&"lonely").unwrap(), u32::MAX);

    assert!(matches!(
        tree.path_to(&"unknown"),
        Err(PathError::InvalidNode(node)) if node == "\"unknown\""
    ));
    assert!(matches!(
        tree.distance(&"unknown"),
        Err(PathError::InvalidNode(_))
    ));
}

#[test]
fn parallel_batch_matches_sequential_queries() {
    let graph = ten_node_graph();
    let dijkstra = Dijkstra::new(&graph);

    let mut requests: Vec<_> = graph
        .nodes()
        .flat_map(|source| {
            graph
                .nodes()
                .map(move |target| ShortestPathRequest::new(*source, *target))
        })
        .collect();
    requests.push(ShortestPathRequest::new("A", "missing"));

    let results = dijkstra.shortest_paths_par(&requests).unwrap();
    assert_eq!(results.len(), requests.len());

    for (request, result) in requests.iter().zip(&results) {
        match dijkstra.shortest_path(request.source(), request.target()) {
            Ok(path) => assert_eq!(result.as_ref().unwrap(), &path),
            Err(_) => assert!(matches!(result, Err(PathError::InvalidNode(_)))),
        }
    }
    assert!(results.last().unwrap().is_err());
}
