use maze_core::Cell;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the passable neighbors of `cell` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, cell: Cell, buf: &mut Vec<Cell>);
}

/// Pather with an admissible heuristic, for A*.
///
/// Every step costs 1.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the number of steps from `from` to `to`.
    /// Must never overestimate the true distance (admissible).
    fn estimate(&self, from: Cell, to: Cell) -> u32;
}
