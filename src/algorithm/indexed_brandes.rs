//! Brandes' single-source step over a [`NeighborhoodIndex`].
//!
//! Full betweenness centrality needs one breadth-first pass per node of the
//! graph. [`IndexedBrandes`] pays for the adjacency flattening and for every
//! per-node buffer once, then reuses them for each source.
//!
//! The finish-order stack is not cleared by [`IndexedBrandes::compute`]; the
//! caller consumes it (typically by popping it during accumulation) or calls
//! [`IndexedBrandes::clear_stack`] before the next run. Running again on a
//! non-empty stack is refused with [`Error::StaleStack`].
//!
//! The buffers are mutated in place, so one instance serves one thread. Give
//! each worker its own instance to process sources in parallel.

use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use log::trace;

use crate::algorithm::BrandesResult;
use crate::data_structures::NeighborhoodIndex;
use crate::graph::Graph;
use crate::{Error, Result};

/// Reusable indexed Brandes runner bound to one graph snapshot
#[derive(Debug, Clone)]
pub struct IndexedBrandes<K> {
    index: NeighborhoodIndex<K>,
    /// Finish-order stack, capacity `order`
    stack: Vec<usize>,
    predecessors: Vec<Vec<usize>>,
    sigma: Vec<u64>,
    /// BFS depth, `None` until reached
    distances: Vec<Option<usize>>,
    queue: VecDeque<usize>,
}

impl<K> IndexedBrandes<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Indexes `graph` and allocates every buffer
    pub fn new<G>(graph: &G) -> Result<Self>
    where
        G: Graph<Node = K>,
    {
        Ok(Self::from_index(NeighborhoodIndex::new(graph)?))
    }

    /// Allocates the buffers for an existing index
    pub fn from_index(index: NeighborhoodIndex<K>) -> Self {
        let order = index.order();

        IndexedBrandes {
            index,
            stack: Vec::with_capacity(order),
            predecessors: vec![Vec::new(); order],
            sigma: vec![0; order],
            distances: vec![None; order],
            queue: VecDeque::with_capacity(order),
        }
    }

    pub fn index(&self) -> &NeighborhoodIndex<K> {
        &self.index
    }

    pub fn order(&self) -> usize {
        self.index.order()
    }

    /// Runs the breadth-first layering from the node at `source`.
    ///
    /// Every node identifier in the returned view is a dense index; translate
    /// with [`NeighborhoodIndex::node`] or [`IndexedBrandesView::to_keyed`].
    pub fn compute(&mut self, source: usize) -> Result<IndexedBrandesView<'_, K>> {
        let IndexedBrandes {
            index,
            stack,
            predecessors,
            sigma,
            distances,
            queue,
        } = self;

        let order = index.order();
        if source >= order {
            return Err(Error::IndexOutOfBounds {
                index: source,
                order,
            });
        }
        if !stack.is_empty() {
            return Err(Error::StaleStack { len: stack.len() });
        }

        for preds in predecessors.iter_mut() {
            preds.clear();
        }
        sigma.fill(0);
        distances.fill(None);
        queue.clear();

        sigma[source] = 1;
        distances[source] = Some(0);
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            stack.push(v);

            let dv = distances[v].unwrap_or(0);
            let sigma_v = sigma[v];

            for &w in index.neighbors(v) {
                if distances[w].is_none() {
                    queue.push_back(w);
                    distances[w] = Some(dv + 1);
                }

                if distances[w] == Some(dv + 1) {
                    sigma[w] = sigma[w].saturating_add(sigma_v);
                    predecessors[w].push(v);
                }
            }
        }

        trace!("indexed brandes from {} reached {} nodes", source, stack.len());

        Ok(IndexedBrandesView {
            index,
            stack,
            predecessors,
            sigma,
        })
    }

    /// Runs [`compute`](Self::compute) from a node key
    pub fn compute_from(&mut self, source: &K) -> Result<IndexedBrandesView<'_, K>> {
        match self.index.index_of(source) {
            Some(index) => self.compute(index),
            None => Err(Error::source_not_found(source)),
        }
    }

    /// Empties the finish-order stack, making the runner ready for another source
    pub fn clear_stack(&mut self) {
        self.stack.clear();
    }

    /// Pops the last finalized node off the stack
    pub fn pop_stack(&mut self) -> Option<usize> {
        self.stack.pop()
    }

    /// The finish-order stack as left by the last run
    pub fn stack(&self) -> &[usize] {
        &self.stack
    }

    /// Predecessor lists of the last run
    pub fn predecessors(&self) -> &[Vec<usize>] {
        &self.predecessors
    }

    /// Shortest-path counts of the last run
    pub fn sigma(&self) -> &[u64] {
        &self.sigma
    }
}

/// Borrowed result of one [`IndexedBrandes::compute`] call
#[derive(Debug, Clone)]
pub struct IndexedBrandesView<'a, K> {
    index: &'a NeighborhoodIndex<K>,
    stack: &'a [usize],
    predecessors: &'a [Vec<usize>],
    sigma: &'a [u64],
}

impl<'a, K> IndexedBrandesView<'a, K>
where
    K: Clone + Eq + Hash + Debug,
{
    pub fn stack(&self) -> &'a [usize] {
        self.stack
    }

    pub fn predecessors(&self) -> &'a [Vec<usize>] {
        self.predecessors
    }

    pub fn sigma(&self) -> &'a [u64] {
        self.sigma
    }

    pub fn index(&self) -> &'a NeighborhoodIndex<K> {
        self.index
    }

    /// Translates the run back to node keys
    pub fn to_keyed(&self) -> BrandesResult<K> {
        let nodes = self.index.nodes();
        let key = |i: &usize| nodes[*i].clone();

        let predecessors: HashMap<K, Vec<K>> = self
            .predecessors
            .iter()
            .enumerate()
            .map(|(i, preds)| (nodes[i].clone(), preds.iter().map(key).collect()))
            .collect();

        let sigma: HashMap<K, u64> = self
            .sigma
            .iter()
            .enumerate()
            .map(|(i, &count)| (nodes[i].clone(), count))
            .collect();

        BrandesResult {
            stack: self.stack.iter().map(key).collect(),
            predecessors,
            sigma,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphKind, MixedGraph};

    fn diamond() -> MixedGraph<char> {
        MixedGraph::from_edges(
            GraphKind::Directed,
            [('a', 'b'), ('a', 'c'), ('b', 'd'), ('c', 'd')],
        )
        .unwrap()
    }

    #[test]
    fn counts_both_paths_through_the_diamond() {
        let graph = diamond();
        let mut runner = IndexedBrandes::new(&graph).unwrap();

        let view = runner.compute(0).unwrap();
        assert_eq!(view.stack(), &[0, 1, 2, 3]);
        assert_eq!(view.sigma(), &[1, 1, 1, 2]);
        assert_eq!(view.predecessors()[3], vec![1, 2]);
    }

    #[test]
    fn refuses_to_run_on_a_stale_stack() {
        let graph = diamond();
        let mut runner = IndexedBrandes::new(&graph).unwrap();

        runner.compute(0).unwrap();
        assert_eq!(
            runner.compute(1).unwrap_err(),
            Error::StaleStack { len: 4 }
        );

        runner.clear_stack();
        let view = runner.compute(1).unwrap();
        assert_eq!(view.stack(), &[1, 3]);
        assert_eq!(view.sigma(), &[0, 1, 0, 1]);
        assert!(view.predecessors()[0].is_empty());
    }

    #[test]
    fn rejects_out_of_range_source() {
        let graph = diamond();
        let mut runner = IndexedBrandes::new(&graph).unwrap();

        assert_eq!(
            runner.compute(4).unwrap_err(),
            Error::IndexOutOfBounds { index: 4, order: 4 }
        );
        assert!(runner.compute_from(&'z').is_err());
    }
}
