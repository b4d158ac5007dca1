use maze_core::Cell;

use crate::frontier::Fifo;
use crate::search::{SearchResult, unvisited_first};
use crate::traits::Pather;

/// Breadth-first search from `start` to `end`.
///
/// Expands cells level by level, so the returned path has the fewest
/// possible steps. `visited` lists cells in dequeue order, ending with `end`
/// when found.
pub fn bfs<P: Pather>(pather: &P, start: Cell, end: Cell) -> SearchResult {
    unvisited_first(pather, start, end, Fifo::default()).into_result("bfs", start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Maze;
    use crate::predecessors::reconstruct_path;
    use maze_core::{GridShape, WallSet};

    fn cells(ids: &[u32]) -> Vec<Cell> {
        ids.iter().copied().map(Cell).collect()
    }

    #[test]
    fn open_three_by_three_trace() {
        let m = Maze::open(GridShape::new(3, 3));
        let r = bfs(&m, Cell(0), Cell(8));
        assert!(r.is_found());
        assert_eq!(r.visited, cells(&[0, 3, 1, 6, 4, 2, 7, 5, 8]));
        assert_eq!(r.path, cells(&[0, 3, 6, 7, 8]));
    }

    #[test]
    fn open_five_by_five_is_manhattan() {
        let m = Maze::open(GridShape::new(5, 5));
        let r = bfs(&m, Cell(0), Cell(24));
        assert_eq!(r.steps(), Some(8));
        assert_eq!(r.path, cells(&[0, 5, 10, 15, 20, 21, 22, 23, 24]));
    }

    #[test]
    fn start_equals_end() {
        let m = Maze::open(GridShape::new(5, 5));
        let r = bfs(&m, Cell(12), Cell(12));
        assert_eq!(r.visited, cells(&[12]));
        assert_eq!(r.path, cells(&[12]));
        assert!(r.is_found());
    }

    #[test]
    fn walled_end_is_not_found() {
        let m = Maze::new(GridShape::new(3, 3), WallSet::from(&[1][..]));
        let r = bfs(&m, Cell(0), Cell(1));
        assert!(!r.is_found());
        assert!(r.path.is_empty());
        // Every reachable cell gets expanded exactly once.
        assert_eq!(r.visited.len(), 8);
    }

    #[test]
    fn walled_start_is_still_explored() {
        let m = Maze::new(GridShape::new(3, 3), WallSet::from(&[0][..]));
        let r = bfs(&m, Cell(0), Cell(2));
        assert!(r.is_found());
        assert_eq!(r.path, cells(&[0, 1, 2]));
    }

    #[test]
    fn predecessors_round_trip_along_path() {
        let m = Maze::new(GridShape::new(5, 5), WallSet::from(&[6, 7, 8, 16, 17, 18][..]));
        let trace = unvisited_first(&m, Cell(0), Cell(12), Fifo::default());
        assert!(trace.found);
        let path = reconstruct_path(&trace.predecessors, Cell(12));
        assert_eq!(trace.predecessors.get(path[0]), Some(None));
        for w in path.windows(2) {
            assert_eq!(trace.predecessors.get(w[1]), Some(Some(w[0])));
        }
        assert_eq!(path, bfs(&m, Cell(0), Cell(12)).path);
    }
}
