use maze_core::{Cell, GridShape, WallSet};

use crate::distance;
use crate::traits::{AstarPather, Pather};

/// Candidate moves in enumeration order: up, down, left, right.
///
/// Expansion order of every search, and therefore its visited order,
/// follows this table.
const MOVES: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A rectangular maze: a grid shape plus the walls blocking it.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    shape: GridShape,
    walls: WallSet,
}

impl Maze {
    /// Create a maze of `shape` with the given walls.
    pub fn new(shape: GridShape, walls: WallSet) -> Self {
        Self { shape, walls }
    }

    /// A maze of `shape` with no walls.
    pub fn open(shape: GridShape) -> Self {
        Self::new(shape, WallSet::new())
    }

    /// The grid dimensions.
    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// The impassable cells.
    #[inline]
    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    /// Whether `cell` is on the grid and not a wall.
    #[inline]
    pub fn passable(&self, cell: Cell) -> bool {
        self.shape.contains(cell) && !self.walls.contains(cell)
    }

    /// Orthogonal, in-bounds, non-wall neighbors of `cell` in
    /// up/down/left/right order.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut buf = Vec::with_capacity(4);
        Pather::neighbors(self, cell, &mut buf);
        buf
    }
}

impl Pather for Maze {
    fn neighbors(&self, cell: Cell, buf: &mut Vec<Cell>) {
        let c = self.shape.coord(cell);
        for (drow, dcol) in MOVES {
            let Some(n) = self.shape.cell_at(c.shift(drow, dcol)) else {
                continue;
            };
            if !self.walls.contains(n) {
                buf.push(n);
            }
        }
    }
}

impl AstarPather for Maze {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> u32 {
        distance::manhattan(self.shape, from, to)
    }
}
