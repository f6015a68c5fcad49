pub mod traits;
pub mod mixed;
pub mod generators;

pub use traits::{Graph, GraphKind};
pub use mixed::{EdgeId, MixedGraph, DEFAULT_WEIGHT_ATTRIBUTE};
