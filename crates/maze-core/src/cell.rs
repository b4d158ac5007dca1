//! Flat integer cell identifiers.

use std::fmt;

/// A grid cell, identified by its row-major index.
///
/// There is no separate cell object: identity is the integer. Use
/// [`GridShape::coord`](crate::GridShape::coord) to recover the row and
/// column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Cell(pub u32);

impl Cell {
    /// Create a new cell with the given id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying id.
    pub const fn id(self) -> u32 {
        self.0
    }

    /// The id as an index into flat per-cell storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Cell {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<Cell> for u32 {
    fn from(c: Cell) -> Self {
        c.0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&Cell(379)).unwrap(), "379");
        let back: Cell = serde_json::from_str("20").unwrap();
        assert_eq!(back, Cell(20));
    }
}
