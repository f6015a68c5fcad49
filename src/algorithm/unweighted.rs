//! Hop-count shortest paths.
//!
//! [`bidirectional`] grows one breadth-first frontier from the source along
//! outbound edges and one from the target along inbound edges, always
//! advancing the smaller of the two, until they touch.

use std::collections::HashMap;
use std::mem;

use log::{debug, trace};

use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::Graph;
use crate::{Error, Result};

/// Parent links of one search tree; the anchor maps to `None`
type ParentMap<K> = HashMap<K, Option<K>>;

/// Shortest path by hop count between `source` and `target`.
///
/// Returns `Ok(None)` when the frontiers run dry without meeting, and
/// `[source]` when both endpoints are the same node.
pub fn bidirectional<G>(
    graph: &G,
    source: &G::Node,
    target: &G::Node,
) -> Result<Option<Vec<G::Node>>>
where
    G: Graph,
{
    if !graph.has_node(source) {
        return Err(Error::source_not_found(source));
    }
    if !graph.has_node(target) {
        return Err(Error::target_not_found(target));
    }

    if source == target {
        return Ok(Some(vec![source.clone()]));
    }

    let mut predecessor: ParentMap<G::Node> = HashMap::new();
    let mut successor: ParentMap<G::Node> = HashMap::new();
    predecessor.insert(source.clone(), None);
    successor.insert(target.clone(), None);

    let mut forward_fringe = vec![source.clone()];
    let mut reverse_fringe = vec![target.clone()];
    let mut meeting = None;

    while !forward_fringe.is_empty() && !reverse_fringe.is_empty() {
        meeting = if forward_fringe.len() <= reverse_fringe.len() {
            expand(
                &mut forward_fringe,
                &mut predecessor,
                &successor,
                |node| graph.outbound_neighbors(node),
            )
        } else {
            expand(
                &mut reverse_fringe,
                &mut successor,
                &predecessor,
                |node| graph.inbound_neighbors(node),
            )
        };

        if meeting.is_some() {
            break;
        }
    }

    let meeting = match meeting {
        Some(node) => node,
        None => {
            debug!("no path between {:?} and {:?}", source, target);
            return Ok(None);
        }
    };
    trace!("frontiers met at {:?}", meeting);

    // Source side, walked backwards from the meeting node
    let mut path = Vec::new();
    let mut current = Some(meeting.clone());
    while let Some(node) = current {
        current = predecessor.get(&node).cloned().flatten();
        path.push(node);
    }
    path.reverse();

    // Target side, walked forwards from the meeting node
    let mut current = successor.get(&meeting).cloned().flatten();
    while let Some(node) = current {
        current = successor.get(&node).cloned().flatten();
        path.push(node);
    }

    Ok(Some(path))
}

/// Replaces `fringe` with the unvisited neighbors of its nodes, recording
/// parents in `visited`. Stops at, and returns, the first neighbor that the
/// opposite search has already visited.
fn expand<K, F>(
    fringe: &mut Vec<K>,
    visited: &mut ParentMap<K>,
    opposite: &ParentMap<K>,
    neighbors_of: F,
) -> Option<K>
where
    K: Clone + Eq + std::hash::Hash,
    F: Fn(&K) -> Vec<K>,
{
    let current = mem::take(fringe);

    for node in &current {
        for neighbor in neighbors_of(node) {
            if !visited.contains_key(&neighbor) {
                visited.insert(neighbor.clone(), Some(node.clone()));
                fringe.push(neighbor.clone());
            }

            if opposite.contains_key(&neighbor) {
                return Some(neighbor);
            }
        }
    }

    None
}

/// Shortest path by hop count from `source` to every node it can reach.
///
/// Paths are discovered level by level; each node keeps the first path that
/// reached it.
pub fn single_source<G>(graph: &G, source: &G::Node) -> Result<HashMap<G::Node, Vec<G::Node>>>
where
    G: Graph,
{
    if !graph.has_node(source) {
        return Err(Error::source_not_found(source));
    }

    let mut paths = HashMap::new();
    paths.insert(source.clone(), vec![source.clone()]);

    let mut next_level = vec![source.clone()];
    let mut depth = 0usize;

    while !next_level.is_empty() {
        let current_level = mem::take(&mut next_level);

        for v in &current_level {
            let parent = match paths.get(v) {
                Some(path) => Vec::clone(path),
                None => continue,
            };

            for w in graph.outbound_neighbors(v) {
                if paths.contains_key(&w) {
                    continue;
                }
                let mut path = Vec::with_capacity(parent.len() + 1);
                path.extend_from_slice(&parent);
                path.push(w.clone());
                paths.insert(w.clone(), path);
                next_level.push(w);
            }
        }

        depth += 1;
    }

    debug!(
        "single source from {:?} reached {} nodes in {} levels",
        source,
        paths.len(),
        depth
    );

    Ok(paths)
}

/// Breadth-first shortest paths, ignoring weights
#[derive(Debug, Default, Clone, Copy)]
pub struct Unweighted;

impl Unweighted {
    /// Creates a new unweighted algorithm instance
    pub fn new() -> Self {
        Unweighted
    }
}

impl<G: Graph> ShortestPathAlgorithm<G> for Unweighted {
    fn name(&self) -> &'static str {
        "Unweighted"
    }

    fn single_source(&self, graph: &G, source: &G::Node) -> Result<HashMap<G::Node, Vec<G::Node>>> {
        single_source(graph, source)
    }

    fn path(&self, graph: &G, source: &G::Node, target: &G::Node) -> Result<Option<Vec<G::Node>>> {
        bidirectional(graph, source, target)
    }
}
