use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;

/// Edge orientation model of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    /// Only directed edges
    Directed,
    /// Only undirected edges
    Undirected,
    /// Directed and undirected edges side by side
    Mixed,
}

impl GraphKind {
    pub fn name(&self) -> &'static str {
        match self {
            GraphKind::Directed => "directed",
            GraphKind::Undirected => "undirected",
            GraphKind::Mixed => "mixed",
        }
    }
}

/// Read-only access to a graph snapshot.
///
/// This is the only surface the algorithms in this crate touch. Edge lists are
/// split by orientation so that mixed graphs can be walked correctly: outbound
/// traversal follows outgoing directed edges plus undirected ones, inbound
/// traversal follows incoming directed edges plus undirected ones.
pub trait Graph: Debug {
    /// Opaque, comparable node key
    type Node: Clone + Eq + Hash + Ord + Debug;

    /// Reference to a single edge
    type Edge: Copy + Debug;

    /// Numeric type of edge attributes
    type Weight: Float + Debug;

    /// Returns the edge orientation model of the graph
    fn kind(&self) -> GraphKind;

    /// Returns the number of nodes in the graph
    fn order(&self) -> usize;

    /// Returns the number of edges in the graph
    fn size(&self) -> usize;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: &Self::Node) -> bool;

    /// Returns an iterator over every node key, in a stable order
    fn nodes(&self) -> Box<dyn Iterator<Item = Self::Node> + '_>;

    /// Returns the outgoing directed edges of a node
    fn out_edges(&self, node: &Self::Node) -> Box<dyn Iterator<Item = Self::Edge> + '_>;

    /// Returns the incoming directed edges of a node
    fn in_edges(&self, node: &Self::Node) -> Box<dyn Iterator<Item = Self::Edge> + '_>;

    /// Returns the undirected edges incident to a node
    fn undirected_edges(&self, node: &Self::Node) -> Box<dyn Iterator<Item = Self::Edge> + '_>;

    /// Returns the endpoint of `edge` that is not `node`
    fn opposite(&self, node: &Self::Node, edge: Self::Edge) -> Self::Node;

    /// Reads a numeric attribute of an edge
    fn edge_weight(&self, edge: Self::Edge, attribute: &str) -> Option<Self::Weight>;

    /// Nodes reachable in one hop: outgoing directed plus undirected neighbors,
    /// deduplicated, in first-occurrence order.
    fn outbound_neighbors(&self, node: &Self::Node) -> Vec<Self::Node> {
        let edges = self.out_edges(node).chain(self.undirected_edges(node));
        distinct_opposites(self, node, edges)
    }

    /// Nodes reaching this one in one hop: incoming directed plus undirected
    /// neighbors, deduplicated, in first-occurrence order.
    fn inbound_neighbors(&self, node: &Self::Node) -> Vec<Self::Node> {
        let edges = self.in_edges(node).chain(self.undirected_edges(node));
        distinct_opposites(self, node, edges)
    }
}

fn distinct_opposites<G, I>(graph: &G, node: &G::Node, edges: I) -> Vec<G::Node>
where
    G: Graph + ?Sized,
    I: Iterator<Item = G::Edge>,
{
    let mut seen = HashSet::new();
    let mut neighbors = Vec::new();

    for edge in edges {
        let neighbor = graph.opposite(node, edge);
        if seen.insert(neighbor.clone()) {
            neighbors.push(neighbor);
        }
    }

    neighbors
}
