use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::graph::Graph;
use crate::Result;

/// Distances from a source set, and the path that realised each distance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths<K: Eq + Hash, W> {
    /// Finalized shortest cost of every reached node
    pub distances: HashMap<K, W>,

    /// Node sequence from the nearest source to each reached node
    pub paths: HashMap<K, Vec<K>>,
}

/// Single-source shortest-path DAG in the shape Brandes' accumulation expects.
///
/// `predecessors` and `sigma` cover every node of the graph; nodes the source
/// cannot reach have no predecessors and a sigma of 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandesResult<K: Eq + Hash> {
    /// Nodes in the order they were finalized, non-decreasing in distance
    pub stack: Vec<K>,

    /// Every neighbor lying on some shortest path to each node
    pub predecessors: HashMap<K, Vec<K>>,

    /// Number of distinct shortest paths from the source to each node
    pub sigma: HashMap<K, u64>,
}

impl<K> BrandesResult<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Empty predecessor lists and zero counts for every node of `graph`
    pub(crate) fn seeded<G>(graph: &G, source: &K) -> Self
    where
        G: Graph<Node = K>,
    {
        let mut predecessors = HashMap::with_capacity(graph.order());
        let mut sigma = HashMap::with_capacity(graph.order());

        for node in graph.nodes() {
            predecessors.insert(node.clone(), Vec::new());
            sigma.insert(node, 0);
        }
        sigma.insert(source.clone(), 1);

        BrandesResult {
            stack: Vec::with_capacity(graph.order()),
            predecessors,
            sigma,
        }
    }

    /// Records `predecessor` as lying on a shortest path to `node`
    pub(crate) fn link(&mut self, predecessor: &K, node: &K) {
        let inherited = self.sigma_of(predecessor);
        let count = self.sigma.entry(node.clone()).or_insert(0);
        *count = count.saturating_add(inherited);
        self.predecessors
            .entry(node.clone())
            .or_default()
            .push(predecessor.clone());
    }

    /// Shortest-path count of a node, 0 if unknown
    pub fn sigma_of(&self, node: &K) -> u64 {
        self.sigma.get(node).copied().unwrap_or(0)
    }
}

/// Shortest path queries in their two call shapes
pub trait ShortestPathAlgorithm<G: Graph> {
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Shortest path from `source` to every node it can reach, keyed by node
    fn single_source(
        &self,
        graph: &G,
        source: &G::Node,
    ) -> Result<HashMap<G::Node, Vec<G::Node>>>;

    /// Shortest path from `source` to `target`, or `None` if there is none
    fn path(&self, graph: &G, source: &G::Node, target: &G::Node)
        -> Result<Option<Vec<G::Node>>>;
}
