use std::collections::HashMap;

use maze_core::Cell;

/// Records, per reached cell, the cell it was first reached from.
///
/// The start cell maps to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredecessorMap {
    links: HashMap<Cell, Option<Cell>>,
}

impl PredecessorMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding only `start`, with no predecessor.
    pub fn rooted_at(start: Cell) -> Self {
        let mut m = Self::new();
        m.links.insert(start, None);
        m
    }

    /// Record that `cell` was reached from `from`, replacing any earlier link.
    #[inline]
    pub fn link(&mut self, cell: Cell, from: Cell) {
        self.links.insert(cell, Some(from));
    }

    /// Whether `cell` has an entry.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.links.contains_key(&cell)
    }

    /// The predecessor of `cell`: `None` if absent, `Some(None)` for the root.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Option<Cell>> {
        self.links.get(&cell).copied()
    }

    /// Number of cells with an entry.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Walk `predecessors` back from `end` and return the path start..=end.
///
/// Returns an empty path when `end` was never reached.
pub fn reconstruct_path(predecessors: &PredecessorMap, end: Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut current = Some(end);
    while let Some(cell) = current {
        let Some(from) = predecessors.get(cell) else {
            break;
        };
        path.push(cell);
        current = from;
    }
    path.reverse();
    path
}
