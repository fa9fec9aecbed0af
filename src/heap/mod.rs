//! Indexed binary min-heap.
//!
//! An array-encoded complete binary tree mapping a comparable key to an
//! opaque payload element, with the minimum-key entry at the root.
//! Besides the usual insert/peek/pop operations it supports removal of
//! an arbitrary known element and in-place key updates, both of which
//! locate the element by a linear equality scan (O(n) find, O(log n)
//! re-heapify).
//!
//! Every priority-driven algorithm in this crate (Prim MST, Dijkstra,
//! A*) delegates its ordering decisions to [`MinHeap`].

mod min_heap;
mod types;

pub use min_heap::MinHeap;
pub use types::{Cost, Entry, HeapError};
