use shortest_path::algorithm::unweighted::{bidirectional, single_source};
use shortest_path::graph::generators::{generate_grid, generate_random};
use shortest_path::graph::{Graph, GraphKind, MixedGraph};
use shortest_path::{Error, ShortestPathAlgorithm, Unweighted};
use std::collections::{HashMap, VecDeque};

const EDGES: [(u32, u32); 11] = [
    (1, 2),
    (1, 8),
    (2, 3),
    (2, 4),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (7, 9),
    (8, 9),
    (10, 11),
];

fn line(kind: GraphKind) -> MixedGraph<u32> {
    MixedGraph::from_edges(kind, [(1, 2), (2, 3), (3, 4)]).unwrap()
}

/// Checks that every consecutive pair of `path` is one outbound step
fn assert_walkable<G: Graph>(graph: &G, path: &[G::Node]) {
    for step in path.windows(2) {
        assert!(
            graph.outbound_neighbors(&step[0]).contains(&step[1]),
            "no edge from {:?} to {:?}",
            step[0],
            step[1]
        );
    }
}

/// Hop depth of every node reachable from `source`, by plain breadth-first search
fn hop_depths<G: Graph>(graph: &G, source: &G::Node) -> HashMap<G::Node, usize> {
    let mut depths = HashMap::from([(source.clone(), 0)]);
    let mut queue = VecDeque::from([source.clone()]);

    while let Some(v) = queue.pop_front() {
        let depth = depths[&v];
        for w in graph.outbound_neighbors(&v) {
            if !depths.contains_key(&w) {
                depths.insert(w.clone(), depth + 1);
                queue.push_back(w);
            }
        }
    }

    depths
}

#[test]
fn test_bidirectional_simple_line() {
    let graph = line(GraphKind::Mixed);
    assert_eq!(bidirectional(&graph, &1, &4).unwrap(), Some(vec![1, 2, 3, 4]));
}

#[test]
fn test_bidirectional_no_path() {
    let mut graph: MixedGraph<u32> = MixedGraph::mixed();
    graph.add_node(1);
    graph.add_node(2);
    graph.add_node(3);

    assert_eq!(bidirectional(&graph, &1, &3).unwrap(), None);
}

#[test]
fn test_bidirectional_same_node() {
    let graph = line(GraphKind::Undirected);
    assert_eq!(bidirectional(&graph, &3, &3).unwrap(), Some(vec![3]));
}

#[test]
fn test_bidirectional_respects_direction() {
    let graph = line(GraphKind::Directed);

    assert_eq!(bidirectional(&graph, &1, &4).unwrap(), Some(vec![1, 2, 3, 4]));
    assert_eq!(bidirectional(&graph, &4, &1).unwrap(), None);
}

#[test]
fn test_bidirectional_directed_cycle() {
    let graph: MixedGraph<u32> = MixedGraph::from_edges(GraphKind::Directed, [(0, 1), (1, 2), (2, 0)]).unwrap();

    assert_eq!(bidirectional(&graph, &0, &2).unwrap(), Some(vec![0, 1, 2]));
    assert_eq!(bidirectional(&graph, &2, &1).unwrap(), Some(vec![2, 0, 1]));
}

#[test]
fn test_bidirectional_single_undirected_edge() {
    let graph: MixedGraph<u32> = MixedGraph::from_edges(GraphKind::Undirected, [(0, 1)]).unwrap();

    assert_eq!(bidirectional(&graph, &0, &1).unwrap(), Some(vec![0, 1]));
    assert_eq!(bidirectional(&graph, &1, &0).unwrap(), Some(vec![1, 0]));
}

#[test]
fn test_bidirectional_on_reference_graph() {
    let graph: MixedGraph<u32> = MixedGraph::from_edges(GraphKind::Undirected, EDGES).unwrap();

    assert_eq!(bidirectional(&graph, &1, &9).unwrap(), Some(vec![1, 8, 9]));
    assert_eq!(bidirectional(&graph, &1, &11).unwrap(), None);
    // 1 - 8 - 7 - 6 is a hop shorter than the cheaper weighted route through 2
    assert_eq!(bidirectional(&graph, &1, &6).unwrap(), Some(vec![1, 8, 7, 6]));
}

#[test]
fn test_bidirectional_mixed_edges() {
    // a -> b is directed, b - c is undirected, d -> c is directed
    let mut graph: MixedGraph<&str> = MixedGraph::mixed();
    graph.add_directed_edge("a", "b").unwrap();
    graph.add_undirected_edge("b", "c").unwrap();
    graph.add_directed_edge("d", "c").unwrap();

    assert_eq!(bidirectional(&graph, &"a", &"c").unwrap(), Some(vec!["a", "b", "c"]));
    assert_eq!(bidirectional(&graph, &"c", &"b").unwrap(), Some(vec!["c", "b"]));
    assert_eq!(bidirectional(&graph, &"c", &"a").unwrap(), None);
    assert_eq!(bidirectional(&graph, &"a", &"d").unwrap(), None);
}

#[test]
fn test_bidirectional_missing_nodes() {
    let mut graph: MixedGraph<&str> = MixedGraph::mixed();
    graph.add_node("John");

    assert_eq!(
        bidirectional(&graph, &"Stacy", &"John").unwrap_err(),
        Error::NodeNotFound {
            role: "source",
            node: "\"Stacy\"".to_string()
        }
    );
    assert!(matches!(
        bidirectional(&graph, &"John", &"Stacy"),
        Err(Error::NodeNotFound { role: "target", .. })
    ));
}

#[test]
fn test_single_source_paths() {
    let graph = line(GraphKind::Mixed);
    let paths = single_source(&graph, &1).unwrap();

    let expected = HashMap::from([
        (1, vec![1]),
        (2, vec![1, 2]),
        (3, vec![1, 2, 3]),
        (4, vec![1, 2, 3, 4]),
    ]);
    assert_eq!(paths, expected);
}

#[test]
fn test_single_source_respects_direction() {
    let mut graph = line(GraphKind::Directed);

    assert_eq!(single_source(&graph, &4).unwrap(), HashMap::from([(4, vec![4])]));

    graph.add_edge(4, 2).unwrap();
    let expected = HashMap::from([(4, vec![4]), (2, vec![4, 2]), (3, vec![4, 2, 3])]);
    assert_eq!(single_source(&graph, &4).unwrap(), expected);
}

#[test]
fn test_single_source_missing_source() {
    let graph = line(GraphKind::Directed);
    assert!(matches!(
        single_source(&graph, &9),
        Err(Error::NodeNotFound { role: "source", .. })
    ));
}

#[test]
fn test_call_shapes_through_the_trait() {
    let graph = line(GraphKind::Undirected);
    let algorithm = Unweighted::new();

    assert_eq!(algorithm.path(&graph, &2, &4).unwrap(), Some(vec![2, 3, 4]));

    let paths = algorithm.single_source(&graph, &2).unwrap();
    assert_eq!(paths[&4], vec![2, 3, 4]);
    assert_eq!(paths[&1], vec![2, 1]);
    assert_eq!(ShortestPathAlgorithm::<MixedGraph<u32>>::name(&algorithm), "Unweighted");
}

#[test]
fn test_grid_corner_to_corner() {
    let graph = generate_grid(6, 4);
    let path = bidirectional(&graph, &0, &23).unwrap().unwrap();

    assert_eq!(path.len(), 5 + 3 + 1);
    assert_eq!(path[0], 0);
    assert_eq!(path[path.len() - 1], 23);
    assert_walkable(&graph, &path);
}

#[test]
fn test_bidirectional_agrees_with_single_source() {
    for (seed, kind) in [
        (11, GraphKind::Directed),
        (12, GraphKind::Undirected),
        (13, GraphKind::Mixed),
    ] {
        let graph = generate_random(40, 1.5, kind, seed);

        for source in 0..graph.order() {
            let paths = single_source(&graph, &source).unwrap();
            assert_eq!(paths[&source], vec![source]);

            let depths = hop_depths(&graph, &source);
            assert_eq!(paths.len(), depths.len(), "seed {}: source {}", seed, source);
            for (node, path) in &paths {
                assert_eq!(path[0], source);
                assert_eq!(path.last(), Some(node));
                assert_eq!(path.len(), depths[node] + 1, "seed {}: {} -> {}", seed, source, node);
            }

            for target in 0..graph.order() {
                let found = bidirectional(&graph, &source, &target).unwrap();
                match paths.get(&target) {
                    Some(expected) => {
                        let path = found.unwrap_or_else(|| {
                            panic!("seed {}: no path {} -> {}", seed, source, target)
                        });
                        assert_eq!(path.len(), expected.len(), "seed {}: {} -> {}", seed, source, target);
                        assert_eq!(path[0], source);
                        assert_eq!(path.last(), Some(&target));
                        assert_walkable(&graph, &path);
                        assert_walkable(&graph, expected);
                    }
                    None => assert!(found.is_none(), "seed {}: {} -> {}", seed, source, target),
                }
            }
        }
    }
}

#[test]
fn test_undirected_paths_are_symmetric_in_length() {
    let graph = generate_random(40, 1.2, GraphKind::Undirected, 99);

    for source in 0..graph.order() {
        for target in (source + 1)..graph.order() {
            let there = bidirectional(&graph, &source, &target).unwrap();
            let back = bidirectional(&graph, &target, &source).unwrap();
            assert_eq!(there.map(|p| p.len()), back.map(|p| p.len()));
        }
    }
}
