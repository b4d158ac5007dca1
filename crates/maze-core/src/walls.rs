//! Impassable cell sets.

use std::collections::HashSet;

use crate::cell::Cell;

/// The set of impassable cells for one search.
///
/// Immutable once built. Membership is only consulted when enumerating
/// neighbours, so a start cell inside the set is still explored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WallSet {
    cells: HashSet<Cell>,
}

impl WallSet {
    /// An empty wall set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `cell` is a wall.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of distinct walls.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether there are no walls.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the walls in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Walls sorted by id.
    pub fn sorted(&self) -> Vec<Cell> {
        let mut v: Vec<Cell> = self.iter().collect();
        v.sort_unstable();
        v
    }
}

impl FromIterator<Cell> for WallSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl From<&[u32]> for WallSet {
    fn from(ids: &[u32]) -> Self {
        ids.iter().copied().map(Cell).collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WallSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.sorted().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WallSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cells = Vec::<Cell>::deserialize(deserializer)?;
        Ok(cells.into_iter().collect())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn wall_set_round_trip() {
        let w = WallSet::from(&[9, 4, 4, 1][..]);
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, "[1,4,9]");
        let back: WallSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }
}
