//! Shortest paths over pluggable graphs
//!
//! This library computes weighted multi-source shortest paths (Dijkstra),
//! unweighted source-to-target paths through bidirectional breadth-first search,
//! and the single-source shortest-path DAG with path counts used by Brandes'
//! betweenness centrality method.
//!
//! Algorithms read graphs through the [`Graph`] facade and never mutate them.
//! Repeated Brandes runs over the same graph snapshot should go through
//! [`IndexedBrandes`], which flattens the adjacency once and reuses its buffers.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    brandes::brandes, dijkstra::Dijkstra, indexed_brandes::IndexedBrandes,
    indexed_brandes::IndexedBrandesView, unweighted::Unweighted, BrandesResult,
    ShortestPathAlgorithm, ShortestPaths,
};
pub use data_structures::NeighborhoodIndex;
/// Re-export main types for convenient use
pub use graph::{Graph, GraphKind, MixedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("The {role} node {node} does not exist in the given graph")]
    NodeNotFound { role: &'static str, node: String },

    #[error("Node index {index} is out of bounds for a graph of order {order}")]
    IndexOutOfBounds { index: usize, order: usize },

    #[error("Malformed call: {0}")]
    MalformedCall(String),

    #[error("Edge is missing the \"{attribute}\" weight attribute")]
    MissingWeight { attribute: String },

    #[error("Edge has a non-numeric \"{attribute}\" weight attribute")]
    InvalidWeight { attribute: String },

    #[error("Contradictory paths found at node {node}. Do some of your edges have a negative weight?")]
    NegativeWeightContradiction { node: String },

    #[error("Finish-order stack still holds {len} entries from a previous run")]
    StaleStack { len: usize },

    #[error("Cannot add a {attempted} edge to a {kind} graph")]
    EdgeKindMismatch {
        attempted: &'static str,
        kind: &'static str,
    },
}

impl Error {
    pub(crate) fn source_not_found<K: std::fmt::Debug>(node: &K) -> Self {
        Error::NodeNotFound {
            role: "source",
            node: format!("{:?}", node),
        }
    }

    pub(crate) fn target_not_found<K: std::fmt::Debug>(node: &K) -> Self {
        Error::NodeNotFound {
            role: "target",
            node: format!("{:?}", node),
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
