//! Geometry primitives: [`Coord`] and [`GridShape`].
//!
//! A [`GridShape`] maps flat [`Cell`] ids to row/column coordinates:
//! `row = id / cols`, `col = id % cols`.

use std::fmt;
use std::ops::{Add, Sub};

use crate::cell::Cell;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A row/column position. Rows grow down, columns grow right.
///
/// Components are signed so that a step off the grid edge is representable
/// and can be rejected by [`GridShape::cell_at`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// GridShape
// ---------------------------------------------------------------------------

/// Rows used by [`GridShape::default`].
pub const DEFAULT_ROWS: u32 = 20;
/// Columns used by [`GridShape::default`].
pub const DEFAULT_COLS: u32 = 20;

/// The dimensions of a rectangular maze, `rows × cols`.
///
/// Grid size is a value passed to whatever needs it, never a process-wide
/// constant, so mazes of different sizes can coexist.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridShape {
    rows: u32,
    cols: u32,
}

impl Default for GridShape {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl GridShape {
    /// Create a new shape with the given number of rows and columns.
    #[inline]
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub const fn cols(self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Whether the shape has no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `cell` is a valid id for this shape.
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        cell.index() < self.len()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub const fn in_bounds(self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as u32) < self.rows && (c.col as u32) < self.cols
    }

    /// Row/column decomposition of `cell`.
    ///
    /// Ids beyond [`len`](Self::len) decompose to rows past the last one;
    /// the mapping itself never fails.
    #[inline]
    pub fn coord(self, cell: Cell) -> Coord {
        if self.cols == 0 {
            return Coord::default();
        }
        Coord::new((cell.0 / self.cols) as i32, (cell.0 % self.cols) as i32)
    }

    /// The cell at `c`, or `None` if `c` is off the grid.
    #[inline]
    pub fn cell_at(self, c: Coord) -> Option<Cell> {
        if !self.in_bounds(c) {
            return None;
        }
        Some(Cell(c.row as u32 * self.cols + c.col as u32))
    }

    /// Iterator over every cell id in row-major order.
    pub fn cells(self) -> impl ExactSizeIterator<Item = Cell> {
        (0..self.len() as u32).map(Cell)
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_twenty_by_twenty() {
        let s = GridShape::default();
        assert_eq!(s.rows(), 20);
        assert_eq!(s.cols(), 20);
        assert_eq!(s.len(), 400);
        assert_eq!(s.to_string(), "20x20");
    }

    #[test]
    fn coord_round_trip_row_major() {
        let s = GridShape::new(4, 5);
        assert_eq!(s.coord(Cell(0)), Coord::new(0, 0));
        assert_eq!(s.coord(Cell(7)), Coord::new(1, 2));
        assert_eq!(s.coord(Cell(19)), Coord::new(3, 4));
        for c in s.cells() {
            assert_eq!(s.cell_at(s.coord(c)), Some(c));
        }
    }

    #[test]
    fn cell_at_rejects_off_grid() {
        let s = GridShape::new(3, 3);
        assert_eq!(s.cell_at(Coord::new(-1, 0)), None);
        assert_eq!(s.cell_at(Coord::new(0, -1)), None);
        assert_eq!(s.cell_at(Coord::new(3, 0)), None);
        assert_eq!(s.cell_at(Coord::new(0, 3)), None);
        assert_eq!(s.cell_at(Coord::new(2, 2)), Some(Cell(8)));
    }

    #[test]
    fn contains_checks_id_range() {
        let s = GridShape::new(2, 3);
        assert!(s.contains(Cell(5)));
        assert!(!s.contains(Cell(6)));
    }

    #[test]
    fn non_square_shapes() {
        let wide = GridShape::new(2, 10);
        let tall = GridShape::new(10, 2);
        assert_eq!(wide.coord(Cell(13)), Coord::new(1, 3));
        assert_eq!(tall.coord(Cell(13)), Coord::new(6, 1));
    }

    #[test]
    fn empty_shape() {
        let s = GridShape::new(0, 5);
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.cells().len(), 0);
        assert!(!s.contains(Cell(0)));
    }

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(b - a, Coord::new(2, 2));
        assert_eq!(a.shift(-1, 0), Coord::new(0, 2));
    }
}
