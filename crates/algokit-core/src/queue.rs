//! Binary min-heap priority queue
//!
//! Ties between equal priorities pop in insertion order (FIFO), which keeps
//! every algorithm built on it deterministic. Duplicate payloads are allowed;
//! callers that want decrease-key semantics re-insert and discard stale
//! entries when they surface (lazy deletion).

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{AlgoError, Result};

/// Heap entry ordered by `(priority, seq)`; the payload never takes part in
/// comparisons
#[derive(Debug, Clone)]
struct HeapEntry<P, T> {
    priority: P,
    seq: u64,
    payload: T,
}

impl<P: Ord, T> PartialEq for HeapEntry<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: Ord, T> Eq for HeapEntry<P, T> {}

impl<P: Ord, T> PartialOrd for HeapEntry<P, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord, T> Ord for HeapEntry<P, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-ordered priority queue with FIFO tie-breaking
#[derive(Debug, Clone)]
pub struct MinQueue<P, T> {
    heap: BinaryHeap<Reverse<HeapEntry<P, T>>>,
    next_seq: u64,
}

impl<P: Ord, T> MinQueue<P, T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Insert `payload` with `priority`. O(log n).
    pub fn push(&mut self, priority: P, payload: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(HeapEntry {
            priority,
            seq,
            payload,
        }));
    }

    /// Remove and return the entry with the smallest priority. O(log n).
    ///
    /// Among equal priorities the earliest pushed entry wins.
    pub fn pop_min(&mut self) -> Result<(P, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.priority, entry.payload))
            .ok_or(AlgoError::EmptyQueue)
    }

    /// The entry `pop_min` would return, without removing it
    pub fn peek_min(&self) -> Option<(&P, &T)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.priority, &entry.payload))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<P: Ord, T> Default for MinQueue<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord, T> Extend<(P, T)> for MinQueue<P, T> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (priority, payload) in iter {
            self.push(priority, payload);
        }
    }
}
