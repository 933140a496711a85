//! Priority frontier for best-first searches.
//!
//! Entries are stored in a min-heap keyed by `(cost, insertion_order)`.
//! Lower costs are popped first; ties are broken by insertion order
//! (FIFO), which keeps every search run reproducible.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::traits::Cost;

#[derive(Debug)]
struct Entry<E> {
    item: E,
    cost: Cost,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A min-cost priority queue with FIFO tie-breaking.
pub struct Frontier<E> {
    heap: BinaryHeap<Reverse<Entry<E>>>,
    seq: u64,
}

impl<E> Frontier<E> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Push an item at the given cost.
    pub fn push(&mut self, item: E, cost: Cost) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { item, cost, seq }));
    }

    /// Pop the item with the lowest cost (ties broken FIFO), together with
    /// its cost.
    pub fn pop(&mut self) -> Option<(E, Cost)> {
        self.heap.pop().map(|Reverse(entry)| (entry.item, entry.cost))
    }

    /// Total number of pushes since creation.
    pub fn pushed(&self) -> u64 {
        self.seq
    }
}

impl<E> Default for Frontier<E> {
    fn default() -> Self {
        Self::new()
    }
}
