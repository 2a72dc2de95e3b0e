//! Min-priority frontier of candidate cells.
//!
//! A plain binary heap without decrease-key. The same cell may be pushed more
//! than once; callers discard stale entries when they pop them.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::Cell;
use crate::error::FrontierError;

/// A frontier entry: a cell and its estimated total cost through it.
#[derive(Clone, Copy, Debug)]
pub struct FrontierEntry {
    /// Candidate cell
    pub cell: Cell,
    /// Accumulated cost plus heuristic estimate
    pub estimated_total_cost: f32,
    /// Insertion sequence number, breaks cost ties first-in first-out
    seq: u64,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior
        other
            .estimated_total_cost
            .total_cmp(&self.estimated_total_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue yielding cells in ascending estimated total cost.
///
/// Equal costs pop in insertion order.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Insert a candidate. O(log n).
    pub fn push(&mut self, cell: Cell, estimated_total_cost: f32) {
        self.heap.push(FrontierEntry {
            cell,
            estimated_total_cost,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    /// Remove and return the cheapest entry.
    pub fn pop_min(&mut self) -> Result<(Cell, f32), FrontierError> {
        self.heap
            .pop()
            .map(|entry| (entry.cell, entry.estimated_total_cost))
            .ok_or(FrontierError::EmptyFrontier)
    }

    /// Cheapest entry without removing it
    pub fn peek(&self) -> Option<&FrontierEntry> {
        self.heap.peek()
    }

    /// No entries remain
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale ones included
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
