use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;

use crate::graph::traits::{Graph, GraphKind};
use crate::{Error, Result};

/// Default name of the edge attribute holding weights
pub const DEFAULT_WEIGHT_ATTRIBUTE: &str = "weight";

/// Handle to an edge stored in a [`MixedGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

#[derive(Debug, Clone)]
struct EdgeEntry<K, W> {
    source: K,
    target: K,
    directed: bool,
    attributes: HashMap<String, W>,
}

/// Per-node edge lists, split by orientation
#[derive(Debug, Clone, Default)]
struct Adjacency {
    outgoing: Vec<EdgeId>,
    incoming: Vec<EdgeId>,
    undirected: Vec<EdgeId>,
}

/// An in-memory graph with directed and/or undirected edges.
///
/// Nodes keep their insertion order, which is the order reported by
/// [`Graph::nodes`]. Edges live in an arena addressed by [`EdgeId`] and carry
/// named numeric attributes. Adding an edge that already exists between the
/// same endpoints with the same orientation merges attributes into it instead
/// of creating a parallel edge.
#[derive(Debug, Clone)]
pub struct MixedGraph<K, W = f64>
where
    K: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
{
    kind: GraphKind,
    nodes: Vec<K>,
    ids: HashMap<K, usize>,
    adjacency: Vec<Adjacency>,
    edges: Vec<EdgeEntry<K, W>>,
    /// (source, target, directed) -> edge; undirected keys are stored sorted
    edge_keys: HashMap<(K, K, bool), EdgeId>,
}

impl<K, W> MixedGraph<K, W>
where
    K: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
{
    /// Creates a new empty graph of the given kind
    pub fn new(kind: GraphKind) -> Self {
        MixedGraph {
            kind,
            nodes: Vec::new(),
            ids: HashMap::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
            edge_keys: HashMap::new(),
        }
    }

    /// Creates an empty graph accepting only directed edges
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Creates an empty graph accepting only undirected edges
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Creates an empty graph accepting both edge orientations
    pub fn mixed() -> Self {
        Self::new(GraphKind::Mixed)
    }

    /// Creates a graph from `(source, target, weight)` triples, using the
    /// graph kind's default orientation for every edge.
    pub fn from_weighted_edges<I>(kind: GraphKind, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, K, W)>,
    {
        let mut graph = Self::new(kind);
        for (source, target, weight) in edges {
            graph.add_weighted_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    /// Creates a graph from `(source, target)` pairs without attributes
    pub fn from_edges<I>(kind: GraphKind, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, K)>,
    {
        let mut graph = Self::new(kind);
        for (source, target) in edges {
            graph.add_edge(source, target)?;
        }
        Ok(graph)
    }

    /// Adds a node, returning false if it was already present
    pub fn add_node(&mut self, node: K) -> bool {
        if self.ids.contains_key(&node) {
            return false;
        }
        self.ensure_node(&node);
        true
    }

    /// Adds an edge without attributes, oriented by the graph kind
    /// (mixed graphs default to directed edges).
    pub fn add_edge(&mut self, source: K, target: K) -> Result<EdgeId> {
        let directed = self.kind != GraphKind::Undirected;
        self.insert_edge(source, target, directed, Vec::new())
    }

    /// Adds an edge carrying a `"weight"` attribute, oriented by the graph kind
    pub fn add_weighted_edge(&mut self, source: K, target: K, weight: W) -> Result<EdgeId> {
        let directed = self.kind != GraphKind::Undirected;
        self.insert_edge(
            source,
            target,
            directed,
            vec![(DEFAULT_WEIGHT_ATTRIBUTE.to_string(), weight)],
        )
    }

    /// Adds a directed edge without attributes
    pub fn add_directed_edge(&mut self, source: K, target: K) -> Result<EdgeId> {
        self.insert_edge(source, target, true, Vec::new())
    }

    /// Adds an undirected edge without attributes
    pub fn add_undirected_edge(&mut self, source: K, target: K) -> Result<EdgeId> {
        self.insert_edge(source, target, false, Vec::new())
    }

    /// Adds an edge of explicit orientation with arbitrary named attributes
    pub fn add_edge_with_attributes<I>(
        &mut self,
        source: K,
        target: K,
        directed: bool,
        attributes: I,
    ) -> Result<EdgeId>
    where
        I: IntoIterator<Item = (String, W)>,
    {
        self.insert_edge(source, target, directed, attributes.into_iter().collect())
    }

    /// Sets one attribute on an existing edge, returning false if the edge is unknown
    pub fn set_edge_attribute(&mut self, edge: EdgeId, attribute: &str, value: W) -> bool {
        match self.edges.get_mut(edge.0) {
            Some(entry) => {
                entry.attributes.insert(attribute.to_string(), value);
                true
            }
            None => false,
        }
    }

    /// Returns true if `source` can step to `target` over a single edge
    pub fn has_edge(&self, source: &K, target: &K) -> bool {
        self.find_edge(source, target).is_some()
    }

    /// Finds the edge `source` would use to step to `target`, preferring directed edges
    pub fn find_edge(&self, source: &K, target: &K) -> Option<EdgeId> {
        if let Some(&edge) = self.edge_keys.get(&(source.clone(), target.clone(), true)) {
            return Some(edge);
        }
        let (a, b) = ordered_pair(source, target);
        self.edge_keys.get(&(a, b, false)).copied()
    }

    /// Returns `(source, target, directed)` for an edge
    pub fn endpoints(&self, edge: EdgeId) -> Option<(&K, &K, bool)> {
        self.edges
            .get(edge.0)
            .map(|entry| (&entry.source, &entry.target, entry.directed))
    }

    fn ensure_node(&mut self, node: &K) -> usize {
        if let Some(&id) = self.ids.get(node) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(node.clone());
        self.ids.insert(node.clone(), id);
        self.adjacency.push(Adjacency::default());
        id
    }

    fn insert_edge(
        &mut self,
        source: K,
        target: K,
        directed: bool,
        attributes: Vec<(String, W)>,
    ) -> Result<EdgeId> {
        let allowed = match self.kind {
            GraphKind::Directed => directed,
            GraphKind::Undirected => !directed,
            GraphKind::Mixed => true,
        };
        if !allowed {
            return Err(Error::EdgeKindMismatch {
                attempted: if directed { "directed" } else { "undirected" },
                kind: self.kind.name(),
            });
        }

        let key = if directed {
            (source.clone(), target.clone(), true)
        } else {
            let (a, b) = ordered_pair(&source, &target);
            (a, b, false)
        };

        // Merge into the existing edge
        if let Some(&edge) = self.edge_keys.get(&key) {
            self.edges[edge.0].attributes.extend(attributes);
            return Ok(edge);
        }

        let s = self.ensure_node(&source);
        let t = self.ensure_node(&target);
        let edge = EdgeId(self.edges.len());

        if directed {
            self.adjacency[s].outgoing.push(edge);
            self.adjacency[t].incoming.push(edge);
        } else {
            self.adjacency[s].undirected.push(edge);
            if s != t {
                self.adjacency[t].undirected.push(edge);
            }
        }

        self.edges.push(EdgeEntry {
            source,
            target,
            directed,
            attributes: attributes.into_iter().collect(),
        });
        self.edge_keys.insert(key, edge);

        Ok(edge)
    }

    fn edge_list<F>(&self, node: &K, select: F) -> Box<dyn Iterator<Item = EdgeId> + '_>
    where
        F: Fn(&Adjacency) -> &Vec<EdgeId>,
    {
        match self.ids.get(node) {
            Some(&id) => Box::new(select(&self.adjacency[id]).iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<K, W> Default for MixedGraph<K, W>
where
    K: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::mixed()
    }
}

impl<K, W> Graph for MixedGraph<K, W>
where
    K: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
{
    type Node = K;
    type Edge = EdgeId;
    type Weight = W;

    fn kind(&self) -> GraphKind {
        self.kind
    }

    fn order(&self) -> usize {
        self.nodes.len()
    }

    fn size(&self) -> usize {
        self.edges.len()
    }

    fn has_node(&self, node: &K) -> bool {
        self.ids.contains_key(node)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = K> + '_> {
        Box::new(self.nodes.iter().cloned())
    }

    fn out_edges(&self, node: &K) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        self.edge_list(node, |adjacency| &adjacency.outgoing)
    }

    fn in_edges(&self, node: &K) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        self.edge_list(node, |adjacency| &adjacency.incoming)
    }

    fn undirected_edges(&self, node: &K) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        self.edge_list(node, |adjacency| &adjacency.undirected)
    }

    fn opposite(&self, node: &K, edge: EdgeId) -> K {
        let entry = &self.edges[edge.0];
        if entry.source == *node {
            entry.target.clone()
        } else {
            entry.source.clone()
        }
    }

    fn edge_weight(&self, edge: EdgeId, attribute: &str) -> Option<W> {
        self.edges
            .get(edge.0)
            .and_then(|entry| entry.attributes.get(attribute).copied())
    }
}

fn ordered_pair<K: Clone + Ord>(a: &K, b: &K) -> (K, K) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}
