//! Min-heap storage and sift operations.

use super::types::{Entry, HeapError};
use std::cmp::Ordering;

/// An indexed binary min-heap over (key, element) pairs.
///
/// The heap is encoded as an array-backed complete binary tree: the
/// children of slot `i` live at `2i + 1` and `2i + 2`. For every
/// non-root entry, its key is >= its parent's key.
///
/// # Element lookup
///
/// [`remove`](Self::remove) and [`update`](Self::update) locate their
/// target by a linear first-match equality scan. This is an intentional
/// simplicity trade-off; an element-to-index side table would make the
/// lookup O(1) at the cost of keeping it in sync on every swap.
///
/// # Examples
///
/// ```
/// use searchkit::heap::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.insert(3, "three");
/// heap.insert(1, "one");
/// heap.insert(2, "two");
///
/// assert_eq!(heap.pop(), Ok("one"));
/// assert_eq!(heap.peek(), Ok(&"two"));
/// ```
#[derive(Debug, Clone)]
pub struct MinHeap<K, T> {
    entries: Vec<Entry<K, T>>,
}

impl<K: Ord, T> MinHeap<K, T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty heap with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the heap.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds an entry and restores heap order by sifting up from the
    /// new leaf. Always returns `true`; the heap has no capacity limit.
    pub fn insert(&mut self, key: K, element: T) -> bool {
        self.entries.push(Entry { key, element });
        self.sift_up(self.entries.len() - 1);
        true
    }

    /// Returns the minimum-key element without removing it.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.entries
            .first()
            .map(|entry| &entry.element)
            .ok_or(HeapError::Empty)
    }

    /// Removes and returns the minimum-key element.
    ///
    /// On a single-entry heap the entry is simply truncated; otherwise
    /// the last entry moves into the root slot and sifts down.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        let last = self.entries.pop().ok_or(HeapError::Empty)?;
        if self.entries.is_empty() {
            return Ok(last.element);
        }

        let top = std::mem::replace(&mut self.entries[0], last);
        self.sift_down(0);
        Ok(top.element)
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[parent].key > self.entries[idx].key {
                self.entries.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let first_child = 2 * idx + 1;
            if first_child >= self.entries.len() {
                break;
            }

            // Pick the strictly smaller child; on a tie the current
            // entry stays put.
            let mut smallest = first_child;
            let second_child = first_child + 1;
            if second_child < self.entries.len()
                && self.entries[second_child].key < self.entries[smallest].key
            {
                smallest = second_child;
            }

            if self.entries[smallest].key < self.entries[idx].key {
                self.entries.swap(idx, smallest);
                idx = smallest;
            } else {
                break;
            }
        }
    }
}

impl<K: Ord, T: PartialEq> MinHeap<K, T> {
    /// Removes the first entry whose element equals `element`.
    ///
    /// A last-slot match is truncated directly; otherwise the last
    /// entry overwrites the vacated slot and sifts up or down depending
    /// on how its key compares to the evicted one. Returns `false` when
    /// no entry matches.
    pub fn remove(&mut self, element: &T) -> bool {
        let Some(idx) = self.find(element) else {
            return false;
        };

        if idx == self.entries.len() - 1 {
            self.entries.pop();
            return true;
        }

        let last = match self.entries.pop() {
            Some(entry) => entry,
            None => return false,
        };
        let direction = last.key.cmp(&self.entries[idx].key);
        self.entries[idx] = last;
        match direction {
            Ordering::Less => self.sift_up(idx),
            Ordering::Greater => self.sift_down(idx),
            Ordering::Equal => {}
        }
        true
    }

    /// Rewrites the key of the first entry whose element equals
    /// `element`, then sifts in the direction of the change. Returns
    /// `false` when no entry matches.
    pub fn update(&mut self, element: &T, key: K) -> bool {
        let Some(idx) = self.find(element) else {
            return false;
        };

        let direction = key.cmp(&self.entries[idx].key);
        self.entries[idx].key = key;
        match direction {
            Ordering::Less => self.sift_up(idx),
            Ordering::Greater => self.sift_down(idx),
            Ordering::Equal => {}
        }
        true
    }

    fn find(&self, element: &T) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.element == *element)
    }
}

impl<K: Ord, T> Default for MinHeap<K, T> {
    fn default() -> Self {
        Self::new()
    }
}
