pub mod traits;
pub mod dijkstra;
pub mod unweighted;
pub mod brandes;
pub mod indexed_brandes;

pub use traits::{BrandesResult, ShortestPathAlgorithm, ShortestPaths};
