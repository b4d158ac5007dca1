use maze_core::Cell;

use crate::frontier::Lifo;
use crate::search::{SearchResult, unvisited_first};
use crate::traits::Pather;

/// Depth-first search from `start` to `end`.
///
/// Same discipline as [`bfs`](crate::bfs) but with a stack, so the last
/// discovered neighbor is expanded first. The path is valid but not
/// necessarily shortest.
pub fn dfs<P: Pather>(pather: &P, start: Cell, end: Cell) -> SearchResult {
    unvisited_first(pather, start, end, Lifo::default()).into_result("dfs", start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Maze, bfs};
    use maze_core::{GridShape, WallSet};

    fn cells(ids: &[u32]) -> Vec<Cell> {
        ids.iter().copied().map(Cell).collect()
    }

    #[test]
    fn open_three_by_three_trace() {
        let m = Maze::open(GridShape::new(3, 3));
        let r = dfs(&m, Cell(0), Cell(8));
        assert_eq!(r.visited, cells(&[0, 1, 2, 5, 8]));
        assert_eq!(r.path, cells(&[0, 1, 2, 5, 8]));
    }

    #[test]
    fn path_can_be_longer_than_bfs() {
        let m = Maze::open(GridShape::new(3, 3));
        let d = dfs(&m, Cell(0), Cell(6));
        assert_eq!(d.path, cells(&[0, 1, 2, 5, 8, 7, 6]));
        assert_eq!(d.steps(), Some(6));
        assert_eq!(bfs(&m, Cell(0), Cell(6)).steps(), Some(2));
    }

    #[test]
    fn walled_end_is_not_found() {
        let m = Maze::new(GridShape::new(3, 3), WallSet::from(&[1][..]));
        let r = dfs(&m, Cell(0), Cell(1));
        assert!(!r.is_found());
        assert!(r.path.is_empty());
        assert_eq!(r.visited, cells(&[0, 3, 4, 5, 8, 2, 7, 6]));
    }

    #[test]
    fn start_equals_end() {
        let m = Maze::open(GridShape::new(4, 4));
        let r = dfs(&m, Cell(5), Cell(5));
        assert_eq!(r.visited, cells(&[5]));
        assert_eq!(r.path, cells(&[5]));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let m = Maze::new(GridShape::new(6, 6), WallSet::from(&[7, 8, 9, 20, 26, 27][..]));
        assert_eq!(dfs(&m, Cell(0), Cell(35)), dfs(&m, Cell(0), Cell(35)));
    }
}
