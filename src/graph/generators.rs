use crate::graph::{Graph, GraphKind, MixedGraph};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Generates a random graph with `n` nodes and roughly `edge_factor * n` edges.
/// Every edge carries a `"weight"` attribute drawn from `[1, 100)`.
/// Self-loops are skipped; the same seed always yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, kind: GraphKind, seed: u64) -> MixedGraph<usize> {
    let mut graph = MixedGraph::new(kind);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_node(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let weight = rng.gen_range(1.0..100.0);
        let directed = match kind {
            GraphKind::Directed => true,
            GraphKind::Undirected => false,
            GraphKind::Mixed => rng.gen_bool(0.5),
        };
        graph
            .add_edge_with_attributes(u, v, directed, [("weight".to_string(), weight)])
            .expect("edge orientation matches the graph kind");
    }

    graph
}

/// Generates an undirected Barabási-Albert scale-free graph with n nodes and
/// m edges per new node, weighted uniformly in `[1, 100)`.
pub fn generate_barabasi_albert(n: usize, m: usize, seed: u64) -> MixedGraph<usize> {
    assert!(m > 0, "m must be positive");
    assert!(n > m, "n must be greater than m");

    let mut graph = MixedGraph::undirected();
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..m {
        graph.add_node(v);
    }

    // Connect initial nodes (complete graph)
    for i in 0..m {
        for j in (i + 1)..m {
            let weight = rng.gen_range(1.0..100.0);
            graph
                .add_weighted_edge(i, j, weight)
                .expect("undirected edge in an undirected graph");
        }
    }

    // Degree of each node for preferential attachment; the +1 keeps the
    // single-node seed (m == 1) selectable
    let mut degrees = vec![m.saturating_sub(1) + 1; m];
    let mut total_degree: usize = degrees.iter().sum();

    for i in m..n {
        graph.add_node(i);
        let mut targets = HashSet::new();

        while targets.len() < m {
            let mut pick = rng.gen_range(0..total_degree);
            let mut target = 0;
            while target < i && pick >= degrees[target] {
                pick -= degrees[target];
                target += 1;
            }

            if target < i && targets.insert(target) {
                let weight = rng.gen_range(1.0..100.0);
                graph
                    .add_weighted_edge(i, target, weight)
                    .expect("undirected edge in an undirected graph");
                degrees[target] += 1;
                total_degree += 1;
            }
        }

        degrees.push(m);
        total_degree += m;
    }

    debug_assert_eq!(graph.order(), n);
    graph
}

/// Generates an undirected `width * height` grid with 4-connectivity and unit weights.
/// Node `(x, y)` has key `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> MixedGraph<usize> {
    let mut graph = MixedGraph::undirected();

    for v in 0..(width * height) {
        graph.add_node(v);
    }

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                graph
                    .add_weighted_edge(current, current + 1, 1.0)
                    .expect("undirected edge in an undirected graph");
            }
            if y + 1 < height {
                graph
                    .add_weighted_edge(current, current + width, 1.0)
                    .expect("undirected edge in an undirected graph");
            }
        }
    }

    graph
}
