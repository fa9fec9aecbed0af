//! Heap entry and key types.

use std::cmp::Ordering;
use thiserror::Error;

/// Errors produced by heap operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `pop` or `peek` was called on an empty heap.
    #[error("heap is empty")]
    Empty,
}

/// A (key, element) pair stored in the heap.
///
/// Key ordering defines heap order; element equality is used by
/// [`MinHeap::remove`](super::MinHeap::remove) and
/// [`MinHeap::update`](super::MinHeap::update) to locate entries.
#[derive(Debug, Clone)]
pub struct Entry<K, T> {
    pub key: K,
    pub element: T,
}

/// Total-order wrapper over `f64` for use as a heap key.
///
/// `f64` itself is only `PartialOrd`; `Cost` imposes the IEEE 754 total
/// order via [`f64::total_cmp`] so edge weights, path distances, and
/// A* priorities can key a [`MinHeap`](super::MinHeap) directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cost(pub f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
