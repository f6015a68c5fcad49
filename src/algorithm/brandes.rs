//! Ulrik Brandes' single-source step, keyed by node.
//!
//! Reference: Ulrik Brandes, "A Faster Algorithm for Betweenness Centrality",
//! Journal of Mathematical Sociology 25(2):163-177, 2001.

use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::algorithm::BrandesResult;
use crate::graph::Graph;
use crate::{Error, Result};

/// Breadth-first shortest-path DAG from `source`.
///
/// Returns the nodes in dequeue order, the predecessors of every node on its
/// shortest paths, and the number of shortest paths reaching it. Use
/// [`IndexedBrandes`](crate::IndexedBrandes) instead when running this from
/// many sources of the same graph.
pub fn brandes<G>(graph: &G, source: &G::Node) -> Result<BrandesResult<G::Node>>
where
    G: Graph,
{
    if !graph.has_node(source) {
        return Err(Error::source_not_found(source));
    }

    let mut result = BrandesResult::seeded(graph, source);
    let mut distances: HashMap<G::Node, usize> = HashMap::with_capacity(graph.order());
    let mut queue = VecDeque::new();

    distances.insert(source.clone(), 0);
    queue.push_back((source.clone(), 0usize));

    while let Some((v, dv)) = queue.pop_front() {
        result.stack.push(v.clone());

        for w in graph.outbound_neighbors(&v) {
            let dw = *distances.entry(w.clone()).or_insert_with(|| {
                queue.push_back((w.clone(), dv + 1));
                dv + 1
            });

            if dw == dv + 1 {
                result.link(&v, &w);
            }
        }
    }

    debug!(
        "brandes from {:?} reached {} of {} nodes",
        source,
        result.stack.len(),
        graph.order()
    );

    Ok(result)
}
