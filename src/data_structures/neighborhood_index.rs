use std::collections::HashMap;
use std::fmt::Debug;

use log::debug;

use crate::graph::Graph;
use crate::{Error, Result};

/// Flat outbound adjacency of a graph snapshot.
///
/// Nodes are numbered `[0, order)` following [`Graph::nodes`]. The outbound
/// neighbors of node `i` (outgoing directed plus undirected) are stored as
/// `neighborhood[starts[i] .. starts[i] + lengths[i]]`, one node block after
/// the other.
///
/// The index is immutable once built. It describes the node set it was built
/// from; if the graph gains or loses nodes, build a new one.
#[derive(Debug, Clone)]
pub struct NeighborhoodIndex<K> {
    nodes: Vec<K>,
    ids: HashMap<K, usize>,
    starts: Vec<usize>,
    lengths: Vec<usize>,
    neighborhood: Vec<usize>,
}

impl<K> NeighborhoodIndex<K>
where
    K: Clone + Eq + std::hash::Hash + Debug,
{
    /// Builds the index from a graph.
    ///
    /// Fails with [`Error::InvalidGraph`] if the graph's node enumeration
    /// disagrees with its order, lists a node twice, or reports a neighbor it
    /// never enumerated.
    pub fn new<G>(graph: &G) -> Result<Self>
    where
        G: Graph<Node = K>,
    {
        let order = graph.order();
        let nodes: Vec<K> = graph.nodes().collect();

        if nodes.len() != order {
            return Err(Error::InvalidGraph(format!(
                "graph reports order {} but enumerates {} nodes",
                order,
                nodes.len()
            )));
        }

        let mut ids = HashMap::with_capacity(order);
        for (i, node) in nodes.iter().enumerate() {
            if ids.insert(node.clone(), i).is_some() {
                return Err(Error::InvalidGraph(format!(
                    "node {:?} is enumerated more than once",
                    node
                )));
            }
        }

        let mut starts = Vec::with_capacity(order);
        let mut lengths = Vec::with_capacity(order);
        let mut neighborhood = Vec::with_capacity(graph.size());

        for node in &nodes {
            let neighbors = graph.outbound_neighbors(node);

            starts.push(neighborhood.len());
            lengths.push(neighbors.len());

            for neighbor in neighbors {
                match ids.get(&neighbor) {
                    Some(&id) => neighborhood.push(id),
                    None => {
                        return Err(Error::InvalidGraph(format!(
                            "neighbor {:?} of {:?} is not a node of the graph",
                            neighbor, node
                        )))
                    }
                }
            }
        }

        debug!(
            "built neighborhood index: {} nodes, {} neighbor entries",
            order,
            neighborhood.len()
        );

        Ok(NeighborhoodIndex {
            nodes,
            ids,
            starts,
            lengths,
            neighborhood,
        })
    }

    /// Number of indexed nodes
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Dense index of a node key
    pub fn index_of(&self, node: &K) -> Option<usize> {
        self.ids.get(node).copied()
    }

    /// Node key of a dense index
    pub fn node(&self, index: usize) -> Option<&K> {
        self.nodes.get(index)
    }

    /// All node keys, position `i` holding the key of index `i`
    pub fn nodes(&self) -> &[K] {
        &self.nodes
    }

    /// `(start, length)` of a node's block in the neighborhood buffer
    pub fn bounds(&self, node: &K) -> Option<(usize, usize)> {
        self.index_of(node)
            .map(|i| (self.starts[i], self.lengths[i]))
    }

    /// Outbound neighbor indices of the node at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.order()`.
    #[inline]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        let start = self.starts[index];
        &self.neighborhood[start..start + self.lengths[index]]
    }

    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn neighborhood(&self) -> &[usize] {
        &self.neighborhood
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MixedGraph;

    #[test]
    fn flattens_outbound_adjacency() {
        let mut graph: MixedGraph<u32> = MixedGraph::directed();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 3).unwrap();
        graph.add_edge(2, 1).unwrap();
        graph.add_edge(4, 5).unwrap();

        let index = NeighborhoodIndex::new(&graph).unwrap();

        assert_eq!(index.nodes(), &[1, 2, 3, 4, 5]);
        assert_eq!(index.starts(), &[0, 1, 3, 3, 4]);
        assert_eq!(index.lengths(), &[1, 2, 0, 1, 0]);
        assert_eq!(index.neighborhood(), &[1, 2, 0, 4]);

        assert_eq!(index.bounds(&2), Some((1, 2)));
        assert_eq!(index.neighbors(1), &[2, 0]);
        assert!(index.neighbors(2).is_empty());
        assert_eq!(index.bounds(&9), None);
    }

    #[test]
    fn key_index_mapping_is_a_bijection() {
        let graph: MixedGraph<&str> =
            MixedGraph::from_edges(crate::GraphKind::Undirected, [("x", "y"), ("y", "z")]).unwrap();
        let index = NeighborhoodIndex::new(&graph).unwrap();

        for i in 0..index.order() {
            let key = index.node(i).unwrap();
            assert_eq!(index.index_of(key), Some(i));
        }
        assert_eq!(index.neighbors(index.index_of(&"y").unwrap()), &[0, 2]);
    }
}
