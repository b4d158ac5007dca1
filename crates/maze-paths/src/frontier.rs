//! Frontier disciplines.
//!
//! A [`Frontier`] holds the cells waiting to be expanded. Its removal order
//! is the only thing that distinguishes one search strategy from another.

use std::collections::{BinaryHeap, VecDeque};

use maze_core::Cell;

/// Pending-exploration collection with a fixed removal policy.
pub trait Frontier {
    /// What gets pushed: a bare cell, or a cell with a priority.
    type Entry;

    /// Add an entry.
    fn push(&mut self, entry: Self::Entry);

    /// Remove the next cell according to the frontier's policy.
    fn pop(&mut self) -> Option<Cell>;

    /// Number of pending entries.
    fn len(&self) -> usize;

    /// Whether nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in, first-out queue: level-order expansion.
#[derive(Debug, Clone, Default)]
pub struct Fifo(VecDeque<Cell>);

impl Frontier for Fifo {
    type Entry = Cell;

    fn push(&mut self, cell: Cell) {
        self.0.push_back(cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Last-in, first-out stack: depth-first expansion.
#[derive(Debug, Clone, Default)]
pub struct Lifo(Vec<Cell>);

impl Frontier for Lifo {
    type Entry = Cell;

    fn push(&mut self, cell: Cell) {
        self.0.push(cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// A cell keyed by its `f = g + h` score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prioritized {
    pub f: u32,
    pub cell: Cell,
}

impl Prioritized {
    #[inline]
    pub const fn new(f: u32, cell: Cell) -> Self {
        Self { f, cell }
    }
}

impl Ord for Prioritized {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, then the
        // smallest cell id among equal f.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for Prioritized {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue ordered by `(f, cell)`.
///
/// The same cell may be queued several times with different priorities;
/// callers skip the stale copies.
#[derive(Debug, Clone, Default)]
pub struct MinPriority(BinaryHeap<Prioritized>);

impl Frontier for MinPriority {
    type Entry = Prioritized;

    fn push(&mut self, entry: Prioritized) {
        self.0.push(entry);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.0.pop().map(|e| e.cell)
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}
