use maze_core::{Cell, GridShape};

/// Manhattan (L1) distance between two cells of `shape`.
///
/// Admissible and consistent for 4-directional unit-cost movement.
#[inline]
pub fn manhattan(shape: GridShape, a: Cell, b: Cell) -> u32 {
    let (a, b) = (shape.coord(a), shape.coord(b));
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
