pub mod neighborhood_index;
pub mod priority_queue;

pub use neighborhood_index::NeighborhoodIndex;
pub use priority_queue::FrontierHeap;
