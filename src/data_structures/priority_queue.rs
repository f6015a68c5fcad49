use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-heap of `(priority, insertion_sequence, item)` triples.
///
/// Every push is stamped with a strictly increasing sequence number, so entries
/// with equal priority pop in insertion order and the item itself only breaks
/// ties that can never happen. This keeps pop order reproducible across runs
/// for identical inputs.
#[derive(Debug)]
pub struct FrontierHeap<T, P>
where
    T: Ord + Debug,
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, u64, T)>>,
    /// Sequence number handed to the next push
    counter: u64,
}

impl<T, P> FrontierHeap<T, P>
where
    T: Ord + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        FrontierHeap {
            heap: BinaryHeap::new(),
            counter: 0,
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item with the given priority
    pub fn push(&mut self, item: T, priority: P) {
        let sequence = self.counter;
        self.counter += 1;
        self.heap.push(Reverse((priority, sequence, item)));
    }

    /// Removes the entry with the lowest priority (earliest pushed on ties)
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, _, item))| (item, priority))
    }

    /// Returns the lowest priority entry without removing it
    pub fn peek(&self) -> Option<(&T, P)> {
        self.heap
            .peek()
            .map(|Reverse((priority, _, item))| (item, *priority))
    }

    /// Number of pushes performed so far
    pub fn pushes(&self) -> u64 {
        self.counter
    }
}

impl<T, P> Default for FrontierHeap<T, P>
where
    T: Ord + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
