use std::collections::HashMap;
use std::fmt::Debug;

use log::{debug, trace};
use num_traits::Float;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::algorithm::{BrandesResult, ShortestPathAlgorithm, ShortestPaths};
use crate::data_structures::FrontierHeap;
use crate::graph::{Graph, DEFAULT_WEIGHT_ATTRIBUTE};
use crate::{Error, Result};

/// Multi-source Dijkstra over a weight attribute.
///
/// The struct only holds configuration: which edge attribute to read weights
/// from (`"weight"` by default) and an optional cutoff beyond which nodes are
/// not reached. Weights must be non-negative; a negative edge that lets a
/// finalized node be improved aborts the query with
/// [`Error::NegativeWeightContradiction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dijkstra<W = f64> {
    /// Edge attribute holding the weight
    weight_attribute: String,
    /// Maximum cost of a reached node
    cutoff: Option<W>,
}

impl<W> Default for Dijkstra<W> {
    fn default() -> Self {
        Dijkstra {
            weight_attribute: DEFAULT_WEIGHT_ATTRIBUTE.to_string(),
            cutoff: None,
        }
    }
}

impl<W> Dijkstra<W>
where
    W: Float + Debug,
{
    /// Creates a new Dijkstra instance reading the `"weight"` attribute, without cutoff
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the edge attribute weights are read from
    pub fn with_weight_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.weight_attribute = attribute.into();
        self
    }

    /// Set the maximum cost of a reached node
    pub fn with_cutoff(mut self, cutoff: W) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    pub fn weight_attribute(&self) -> &str {
        &self.weight_attribute
    }

    pub fn cutoff(&self) -> Option<W> {
        self.cutoff
    }

    /// Finalized distances from a set of sources.
    ///
    /// With a `target`, the search stops as soon as the target is finalized and
    /// nodes not yet finalized at that point are absent from the result.
    pub fn multisource<G>(
        &self,
        graph: &G,
        sources: &[G::Node],
        target: Option<&G::Node>,
    ) -> Result<HashMap<G::Node, W>>
    where
        G: Graph<Weight = W>,
    {
        self.run(graph, sources, target, None)
    }

    /// Like [`multisource`](Self::multisource), also returning the path to every reached node
    pub fn multisource_with_paths<G>(
        &self,
        graph: &G,
        sources: &[G::Node],
        target: Option<&G::Node>,
    ) -> Result<ShortestPaths<G::Node, W>>
    where
        G: Graph<Weight = W>,
    {
        let mut paths = HashMap::new();
        let distances = self.run(graph, sources, target, Some(&mut paths))?;
        Ok(ShortestPaths { distances, paths })
    }

    /// Finalized distances from a single source
    pub fn single_source_lengths<G>(&self, graph: &G, source: &G::Node) -> Result<HashMap<G::Node, W>>
    where
        G: Graph<Weight = W>,
    {
        self.run(graph, std::slice::from_ref(source), None, None)
    }

    /// Shortest path from a single source to every node it reaches
    pub fn single_source_paths<G>(
        &self,
        graph: &G,
        source: &G::Node,
    ) -> Result<HashMap<G::Node, Vec<G::Node>>>
    where
        G: Graph<Weight = W>,
    {
        let mut paths = HashMap::new();
        self.run(graph, std::slice::from_ref(source), None, Some(&mut paths))?;
        Ok(paths)
    }

    /// Cheapest path from `source` to `target`, stopping once the target is finalized
    pub fn path_between<G>(
        &self,
        graph: &G,
        source: &G::Node,
        target: &G::Node,
    ) -> Result<Option<Vec<G::Node>>>
    where
        G: Graph<Weight = W>,
    {
        let mut paths = HashMap::new();
        let distances = self.run(
            graph,
            std::slice::from_ref(source),
            Some(target),
            Some(&mut paths),
        )?;

        if !distances.contains_key(target) {
            return Ok(None);
        }
        Ok(paths.remove(target))
    }

    /// Weighted Brandes: the shortest-path DAG from `source` with path counts.
    ///
    /// Heap entries remember which node pushed them. When a node is finalized
    /// it is pushed on the stack and inherits the count of that node; other
    /// nodes relaxing it at exactly the same cost before it is finalized are
    /// added as extra predecessors.
    pub fn brandes<G>(&self, graph: &G, source: &G::Node) -> Result<BrandesResult<G::Node>>
    where
        G: Graph<Weight = W>,
    {
        self.validate()?;
        if !graph.has_node(source) {
            return Err(Error::source_not_found(source));
        }

        debug!("weighted brandes from {:?} over {} nodes", source, graph.order());

        let mut result = BrandesResult::seeded(graph, source);
        let mut distances: HashMap<G::Node, W> = HashMap::new();
        let mut seen: HashMap<G::Node, W> = HashMap::new();
        let mut fringe: FrontierHeap<(G::Node, G::Node), OrderedFloat<W>> = FrontierHeap::new();

        seen.insert(source.clone(), W::zero());
        fringe.push((source.clone(), source.clone()), OrderedFloat(W::zero()));

        while let Some(((pred, v), OrderedFloat(dist))) = fringe.pop() {
            if distances.contains_key(&v) {
                continue;
            }

            if pred != v {
                let inherited = result.sigma_of(&pred);
                let count = result.sigma.entry(v.clone()).or_insert(0);
                *count = count.saturating_add(inherited);
            }
            result.stack.push(v.clone());
            distances.insert(v.clone(), dist);

            for edge in graph.undirected_edges(&v).chain(graph.out_edges(&v)) {
                let u = graph.opposite(&v, edge);
                let cost = dist + self.weight_of(graph, edge)?;

                if self.exceeds_cutoff(cost) {
                    continue;
                }

                if let Some(&finalized) = distances.get(&u) {
                    if cost < finalized {
                        return Err(contradiction(&u));
                    }
                    continue;
                }

                match seen.get(&u).copied() {
                    Some(best) if cost == best => {
                        let already_linked = result
                            .predecessors
                            .get(&u)
                            .map_or(false, |preds| preds.contains(&v));
                        if !already_linked {
                            result.link(&v, &u);
                        }
                    }
                    Some(best) if cost > best => {}
                    _ => {
                        seen.insert(u.clone(), cost);
                        fringe.push((v.clone(), u.clone()), OrderedFloat(cost));
                        result.sigma.insert(u.clone(), 0);
                        result.predecessors.insert(u, vec![v.clone()]);
                    }
                }
            }
        }

        debug!("weighted brandes finalized {} nodes", result.stack.len());
        Ok(result)
    }

    /// The relaxation loop every query above goes through.
    ///
    /// Distances are written once, when a node is popped for the first time;
    /// later heap entries for the same node are stale and skipped.
    fn run<G>(
        &self,
        graph: &G,
        sources: &[G::Node],
        target: Option<&G::Node>,
        mut paths: Option<&mut HashMap<G::Node, Vec<G::Node>>>,
    ) -> Result<HashMap<G::Node, W>>
    where
        G: Graph<Weight = W>,
    {
        self.validate()?;
        if sources.is_empty() {
            return Err(Error::MalformedCall(
                "at least one source node is required".to_string(),
            ));
        }
        if let Some(missing) = sources.iter().find(|source| !graph.has_node(source)) {
            return Err(Error::source_not_found(missing));
        }
        if let Some(target) = target {
            if !graph.has_node(target) {
                return Err(Error::target_not_found(target));
            }
        }

        debug!(
            "dijkstra from {} source(s), attribute {:?}, cutoff {:?}, target {:?}",
            sources.len(),
            self.weight_attribute,
            self.cutoff,
            target
        );

        let mut distances: HashMap<G::Node, W> = HashMap::new();
        let mut seen: HashMap<G::Node, W> = HashMap::new();
        let mut fringe: FrontierHeap<G::Node, OrderedFloat<W>> = FrontierHeap::new();

        for source in sources {
            seen.insert(source.clone(), W::zero());
            fringe.push(source.clone(), OrderedFloat(W::zero()));

            if let Some(paths) = paths.as_deref_mut() {
                paths.insert(source.clone(), vec![source.clone()]);
            }
        }

        while let Some((v, OrderedFloat(d))) = fringe.pop() {
            if distances.contains_key(&v) {
                continue;
            }

            distances.insert(v.clone(), d);
            trace!("finalized {:?} at {:?}", v, d);

            if target == Some(&v) {
                if !fringe.is_empty() {
                    trace!("target reached with {} frontier entries left", fringe.len());
                }
                break;
            }

            let parent_path = paths.as_ref().and_then(|paths| paths.get(&v).cloned());

            for edge in graph.undirected_edges(&v).chain(graph.out_edges(&v)) {
                let u = graph.opposite(&v, edge);
                let cost = d + self.weight_of(graph, edge)?;

                if self.exceeds_cutoff(cost) {
                    continue;
                }

                if let Some(&finalized) = distances.get(&u) {
                    if cost < finalized {
                        return Err(contradiction(&u));
                    }
                    continue;
                }

                let improves = seen.get(&u).map_or(true, |&best| cost < best);
                if !improves {
                    continue;
                }

                seen.insert(u.clone(), cost);
                fringe.push(u.clone(), OrderedFloat(cost));

                if let (Some(paths), Some(parent)) = (paths.as_deref_mut(), parent_path.as_ref()) {
                    let mut path = Vec::with_capacity(parent.len() + 1);
                    path.extend_from_slice(parent);
                    path.push(u.clone());
                    paths.insert(u, path);
                }
            }
        }

        // An early stop leaves tentative paths to nodes that were never finalized
        if let Some(paths) = paths {
            paths.retain(|node, _| distances.contains_key(node));
        }

        debug!(
            "dijkstra finalized {} nodes after {} pushes",
            distances.len(),
            fringe.pushes()
        );

        Ok(distances)
    }

    fn validate(&self) -> Result<()> {
        if self.weight_attribute.is_empty() {
            return Err(Error::MalformedCall(
                "weight attribute name must not be empty".to_string(),
            ));
        }
        if let Some(cutoff) = self.cutoff {
            if cutoff.is_nan() || cutoff < W::zero() {
                return Err(Error::MalformedCall(format!(
                    "cutoff must be a non-negative number, got {:?}",
                    cutoff
                )));
            }
        }
        Ok(())
    }

    fn exceeds_cutoff(&self, cost: W) -> bool {
        self.cutoff.map_or(false, |cutoff| cost > cutoff)
    }

    fn weight_of<G>(&self, graph: &G, edge: G::Edge) -> Result<W>
    where
        G: Graph<Weight = W>,
    {
        match graph.edge_weight(edge, &self.weight_attribute) {
            Some(weight) if weight.is_nan() => Err(Error::InvalidWeight {
                attribute: self.weight_attribute.clone(),
            }),
            Some(weight) => Ok(weight),
            None => Err(Error::MissingWeight {
                attribute: self.weight_attribute.clone(),
            }),
        }
    }
}

fn contradiction<K: Debug>(node: &K) -> Error {
    Error::NegativeWeightContradiction {
        node: format!("{:?}", node),
    }
}

impl<W, G> ShortestPathAlgorithm<G> for Dijkstra<W>
where
    W: Float + Debug,
    G: Graph<Weight = W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn single_source(&self, graph: &G, source: &G::Node) -> Result<HashMap<G::Node, Vec<G::Node>>> {
        self.single_source_paths(graph, source)
    }

    fn path(&self, graph: &G, source: &G::Node, target: &G::Node) -> Result<Option<Vec<G::Node>>> {
        self.path_between(graph, source, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MixedGraph;

    #[test]
    fn rejects_negative_cutoff() {
        let graph: MixedGraph<u32> = MixedGraph::undirected();
        let result = Dijkstra::new().with_cutoff(-1.0).multisource(&graph, &[], None);
        assert!(matches!(result, Err(Error::MalformedCall(_))));
    }

    #[test]
    fn config_reads_from_json() {
        let config: Dijkstra<f64> =
            serde_json::from_str(r#"{"weight_attribute": "length"}"#).unwrap();
        assert_eq!(config.weight_attribute(), "length");
        assert_eq!(config.cutoff(), None);

        let config: Dijkstra<f64> = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Dijkstra::new());
    }
}
