use dijkstra_viz::algorithm::dijkstra::Dijkstra;
use dijkstra_viz::algorithm::traits::ShortestPathFinder;
use dijkstra_viz::algorithm::{ShortestPath, ShortestPathTree};
use dijkstra_viz::graph::generators::{euclidean, generate_connected, generate_geometric, generate_random};
use dijkstra_viz::graph::reference::reference_graph;
use dijkstra_viz::graph::{Graph, UndirectedGraph};
use dijkstra_viz::Error;
use ordered_float::OrderedFloat;

type Path = ShortestPath<char, u32>;

// Test helper: two connected nodes and one isolated node
fn graph_with_isolated_node() -> UndirectedGraph<char, u32> {
    UndirectedGraph::from_edges(['A', 'B', 'Z'], [('A', 'B', 3)]).unwrap()
}

// Exhaustive minimum over all simple paths
fn brute_force_distance(graph: &UndirectedGraph<usize, u32>, start: usize, end: usize) -> Option<u32> {
    fn visit(
        graph: &UndirectedGraph<usize, u32>,
        current: usize,
        end: usize,
        visited: &mut Vec<bool>,
        acc: u32,
        best: &mut Option<u32>,
    ) {
        if current == end {
            *best = Some(best.map_or(acc, |b| b.min(acc)));
            return;
        }
        for (next, weight) in graph.neighbors(&current) {
            let next = *next;
            if !visited[next] {
                visited[next] = true;
                visit(graph, next, end, visited, acc + weight, best);
                visited[next] = false;
            }
        }
    }

    let mut visited = vec![false; graph.node_count()];
    visited[start] = true;
    let mut best = None;
    visit(graph, start, end, &mut visited, 0, &mut best);
    best
}

// Checks that the path walks over existing edges and that its weights add up
fn assert_valid_path<N>(graph: &UndirectedGraph<N, u32>, path: &ShortestPath<N, u32>, start: &N, end: &N)
where
    N: dijkstra_viz::graph::NodeId,
{
    assert_eq!(path.start(), Some(start), "Path should start at start");
    assert_eq!(path.end(), Some(end), "Path should end at end");

    let mut total = 0;
    for (from, to) in path.edges() {
        let weight = graph.edge_weight(from, to);
        assert!(weight.is_some(), "Path should only use existing edges: {} -> {}", from, to);
        total += weight.unwrap();
    }
    assert_eq!(total, path.distance, "Edge weights should sum to the distance");
}

#[test]
fn test_reference_a_to_f() {
    let graph = reference_graph().unwrap();
    let path: Path = Dijkstra::new().find(&graph, &'A', &'F').unwrap();

    assert_eq!(path.nodes, vec!['A', 'B', 'D', 'F']);
    assert_eq!(path.distance, 17);
    assert_eq!(path.to_string(), "A -> B -> D -> F with distance 17");
    assert!(path.uses_edge(&'D', &'B'));
    assert!(!path.uses_edge(&'A', &'C'));
}

#[test]
fn test_reference_paths_are_valid_and_symmetric() {
    let graph = reference_graph().unwrap();
    let dijkstra = Dijkstra::new();

    let expected = [
        ('A', 'C', 9),
        ('A', 'E', 19),
        ('B', 'E', 12),
        ('C', 'F', 12),
        ('E', 'F', 5),
        ('A', 'D', 16),
    ];

    for (start, end, distance) in expected {
        let forward: Path = dijkstra.find(&graph, &start, &end).unwrap();
        let backward: Path = dijkstra.find(&graph, &end, &start).unwrap();

        assert_eq!(forward.distance, distance, "{} -> {}", start, end);
        assert_eq!(backward.distance, distance, "{} -> {}", end, start);
        assert_valid_path(&graph, &forward, &start, &end);
        assert_valid_path(&graph, &backward, &end, &start);
    }

    let path: Path = dijkstra.find(&graph, &'A', &'E').unwrap();
    assert_eq!(path.nodes, vec!['A', 'B', 'C', 'E']);
}

#[test]
fn test_equal_cost_tie_is_reported_deterministically() {
    let graph = reference_graph().unwrap();
    let dijkstra = Dijkstra::new();

    // E-F (5) and E-D-F (4 + 1) cost the same
    let first: Path = dijkstra.find(&graph, &'E', &'F').unwrap();
    for _ in 0..10 {
        let again: Path = dijkstra.find(&graph, &'E', &'F').unwrap();
        assert_eq!(first, again, "Repeated queries should return the same path");
    }
    assert_eq!(first.distance, 5);
    assert_eq!(first.nodes, vec!['E', 'F']);
}

#[test]
fn test_identity_query() {
    let graph = reference_graph().unwrap();
    let dijkstra = Dijkstra::new();

    for node in graph.nodes().copied().collect::<Vec<_>>() {
        let path: Path = dijkstra.find(&graph, &node, &node).unwrap();
        assert_eq!(path.nodes, vec![node]);
        assert_eq!(path.distance, 0);
        assert_eq!(path.edges().count(), 0);
    }

    // Holds for isolated nodes too
    let graph = graph_with_isolated_node();
    let path: Path = dijkstra.find(&graph, &'Z', &'Z').unwrap();
    assert_eq!(path.nodes, vec!['Z']);
}

#[test]
fn test_unreachable_node_is_an_error() {
    let graph = graph_with_isolated_node();
    let dijkstra = Dijkstra::new();

    let result: Result<Path, Error> = dijkstra.find(&graph, &'A', &'Z');
    assert_eq!(
        result,
        Err(Error::Unreachable {
            start: "A".to_string(),
            end: "Z".to_string()
        })
    );

    let result: Result<Path, Error> = dijkstra.find(&graph, &'Z', &'B');
    assert!(matches!(result, Err(Error::Unreachable { .. })));
}

#[test]
fn test_invalid_node_is_an_error() {
    let graph = reference_graph().unwrap();
    let dijkstra = Dijkstra::new();

    let result: Result<Path, Error> = dijkstra.find(&graph, &'X', &'A');
    assert_eq!(result, Err(Error::InvalidNode("X".to_string())));

    let result: Result<Path, Error> = dijkstra.find(&graph, &'A', &'X');
    assert_eq!(result, Err(Error::InvalidNode("X".to_string())));
}

#[test]
fn test_string_labels() {
    let graph: UndirectedGraph<&str, u32> = UndirectedGraph::from_edges(
        ["A", "B", "C"],
        [("A", "B", 4), ("B", "C", 1), ("A", "C", 6)],
    )
    .unwrap();
    let dijkstra = Dijkstra::new();

    let path: ShortestPath<&str, u32> = dijkstra.find(&graph, &"A", &"C").unwrap();
    assert_eq!(path.nodes, vec!["A", "B", "C"]);
    assert_eq!(path.distance, 5);

    let result: Result<ShortestPath<&str, u32>, Error> = dijkstra.find(&graph, &"X", &"A");
    assert_eq!(result, Err(Error::InvalidNode("X".to_string())));
}

#[test]
fn test_float_weights() {
    let graph: UndirectedGraph<u8, OrderedFloat<f64>> = UndirectedGraph::from_edges(
        [0, 1, 2],
        [
            (0, 1, OrderedFloat(1.5)),
            (1, 2, OrderedFloat(2.25)),
            (0, 2, OrderedFloat(4.0)),
        ],
    )
    .unwrap();

    let path: ShortestPath<u8, OrderedFloat<f64>> = Dijkstra::new().find(&graph, &0, &2).unwrap();
    assert_eq!(path.nodes, vec![0, 1, 2]);
    assert_eq!(path.distance, OrderedFloat(3.75));
}

#[test]
fn test_zero_weight_edges() {
    let graph: UndirectedGraph<char, u32> =
        UndirectedGraph::from_edges(['A', 'B', 'C'], [('A', 'B', 0), ('B', 'C', 0), ('A', 'C', 1)]).unwrap();

    let path: Path = Dijkstra::new().find(&graph, &'A', &'C').unwrap();
    assert_eq!(path.distance, 0);
    assert_eq!(path.nodes, vec!['A', 'B', 'C']);
}

#[test]
fn test_shortest_path_tree() {
    let graph = reference_graph().unwrap();
    let tree: ShortestPathTree<char, u32> = Dijkstra::new().shortest_path_tree(&graph, &'A').unwrap();

    assert_eq!(tree.source, 'A');
    assert_eq!(tree.distance(&'A'), Some(0));
    assert_eq!(tree.distance(&'B'), Some(7));
    assert_eq!(tree.distance(&'C'), Some(9));
    assert_eq!(tree.distance(&'D'), Some(16));
    assert_eq!(tree.distance(&'E'), Some(19));
    assert_eq!(tree.distance(&'F'), Some(17));
    assert_eq!(tree.predecessors[&'A'], None);
    assert_eq!(tree.predecessors[&'F'], Some('D'));

    let path = tree.path_to(&'F').unwrap();
    assert_eq!(path.nodes, vec!['A', 'B', 'D', 'F']);

    assert_eq!(tree.path_to(&'X'), Err(Error::InvalidNode("X".to_string())));
}

#[test]
fn test_shortest_path_tree_reports_unreachable() {
    let graph = graph_with_isolated_node();
    let tree: ShortestPathTree<char, u32> = Dijkstra::new().shortest_path_tree(&graph, &'A').unwrap();

    assert!(tree.is_reachable(&'B'));
    assert!(!tree.is_reachable(&'Z'));
    assert!(matches!(tree.path_to(&'Z'), Err(Error::Unreachable { .. })));

    let result: Result<ShortestPathTree<char, u32>, Error> =
        Dijkstra::new().shortest_path_tree(&graph, &'Q');
    assert!(matches!(result, Err(Error::InvalidNode(_))));
}

// Dijkstra should agree with exhaustive search on small random graphs
#[test]
fn test_optimality_against_brute_force() {
    let dijkstra = Dijkstra::new();

    for seed in 0..25 {
        let graph = generate_random(7, 0.4, 20, seed).unwrap();

        for start in 0..7 {
            for end in 0..7 {
                let expected = brute_force_distance(&graph, start, end);
                let result: Result<ShortestPath<usize, u32>, Error> = dijkstra.find(&graph, &start, &end);

                match expected {
                    Some(distance) => {
                        let path = result.unwrap();
                        assert_eq!(path.distance, distance, "seed {} {} -> {}", seed, start, end);
                        assert_valid_path(&graph, &path, &start, &end);
                    }
                    None => assert!(
                        matches!(result, Err(Error::Unreachable { .. })),
                        "seed {} {} -> {} should be unreachable",
                        seed,
                        start,
                        end
                    ),
                }
            }
        }
    }
}

#[test]
fn test_paths_on_connected_graph() {
    let graph = generate_connected(40, 60, 15, 42).unwrap();
    let dijkstra = Dijkstra::new();

    for start in [0, 7, 19, 39] {
        for end in 0..40 {
            let path: ShortestPath<usize, u32> = dijkstra.find(&graph, &start, &end).unwrap();
            assert_valid_path(&graph, &path, &start, &end);

            let again: ShortestPath<usize, u32> = dijkstra.find(&graph, &start, &end).unwrap();
            assert_eq!(path, again);
        }
    }
}

// On a geometric graph no path can beat the straight line between its ends
#[test]
fn test_geometric_paths_respect_triangle_inequality() {
    let (graph, points) = generate_geometric(60, 0.3, 11).unwrap();
    let dijkstra = Dijkstra::new();

    for start in 0..10 {
        for end in 0..60 {
            let result: Result<ShortestPath<usize, OrderedFloat<f64>>, Error> =
                dijkstra.find(&graph, &start, &end);
            let path = match result {
                Ok(path) => path,
                Err(Error::Unreachable { .. }) => continue,
                Err(err) => panic!("unexpected error: {}", err),
            };

            let straight = euclidean(points[start], points[end]);
            assert!(path.distance.into_inner() >= straight - 1e-9);

            let mut total = 0.0;
            for (from, to) in path.edges() {
                let weight = graph.edge_weight(from, to).expect("path should use existing edges");
                assert!(weight.into_inner() <= 0.3);
                total += weight.into_inner();
            }
            assert!((total - path.distance.into_inner()).abs() < 1e-9);
        }
    }
}

// A sum past the weight type's range is treated as no path, never wrapped
#[test]
fn test_overflowing_distance_is_unreachable() {
    let graph: UndirectedGraph<char, u32> =
        UndirectedGraph::from_edges(['A', 'B', 'C'], [('A', 'B', u32::MAX), ('B', 'C', 2)])
            .unwrap();
    let dijkstra = Dijkstra::new();

    let path: Path = dijkstra.find(&graph, &'A', &'B').unwrap();
    assert_eq!(path.distance, u32::MAX);

    let result: Result<Path, Error> = dijkstra.find(&graph, &'A', &'C');
    assert_eq!(
        result,
        Err(Error::Unreachable {
            start: "A".to_string(),
            end: "C".to_string()
        })
    );

    // A cheaper detour that fits is still found
    let graph: UndirectedGraph<char, u32> = UndirectedGraph::from_edges(
        ['A', 'B', 'C', 'D'],
        [('A', 'B', u32::MAX), ('B', 'C', 2), ('A', 'D', 5), ('D', 'C', 5)],
    )
    .unwrap();
    let path: Path = dijkstra.find(&graph, &'A', &'C').unwrap();
    assert_eq!(path.nodes, vec!['A', 'D', 'C']);
    assert_eq!(path.distance, 10);
}

#[test]
fn test_infinite_float_distance_is_unreachable() {
    let graph: UndirectedGraph<u8, OrderedFloat<f64>> = UndirectedGraph::from_edges(
        [0, 1, 2],
        [(0, 1, OrderedFloat(f64::MAX)), (1, 2, OrderedFloat(f64::MAX))],
    )
    .unwrap();
    let dijkstra = Dijkstra::new();

    let path: ShortestPath<u8, OrderedFloat<f64>> = dijkstra.find(&graph, &0, &1).unwrap();
    assert_eq!(path.distance, OrderedFloat(f64::MAX));

    let result: Result<ShortestPath<u8, OrderedFloat<f64>>, Error> =
        dijkstra.find(&graph, &0, &2);
    assert!(matches!(result, Err(Error::Unreachable { .. })));
}
