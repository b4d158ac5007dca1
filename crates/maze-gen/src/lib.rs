//! Random wall maps for grid mazes.
//!
//! [`WallGen`] scatters walls independently over a [`GridShape`], keeping a
//! chosen start and end open. Use a seeded RNG for reproducible maps.

use maze_core::{Cell, GridShape, WallSet};
use maze_paths::{Maze, Pather};
use rand::{Rng, RngExt};

/// Default start cell of the demo maze (row 1, column 0 of a 20×20 grid).
pub const DEFAULT_START: Cell = Cell(20);
/// Default end cell of the demo maze (row 18, column 19 of a 20×20 grid).
pub const DEFAULT_END: Cell = Cell(379);
/// Default probability that a cell becomes a wall.
pub const DEFAULT_WALL_PCT: f64 = 0.25;

/// Map generator producing a [`Maze`] for a given shape.
pub struct WallGen<R: Rng> {
    pub rng: R,
    pub shape: GridShape,
}

impl<R: Rng> WallGen<R> {
    /// Create a new generator for `shape`.
    pub fn new(shape: GridShape, rng: R) -> Self {
        Self { rng, shape }
    }

    /// Scatter walls: every cell other than `keep_open` becomes a wall with
    /// probability `wall_pct` (clamped to 0.0–1.0).
    pub fn scatter(&mut self, wall_pct: f64, keep_open: &[Cell]) -> WallSet {
        let pct = wall_pct.clamp(0.0, 1.0);
        let walls: WallSet = self
            .shape
            .cells()
            .filter(|c| !keep_open.contains(c))
            .filter(|_| self.rng.random::<f64>() < pct)
            .collect();
        log::debug!(
            "scattered {} walls over {} grid ({:.0}%)",
            walls.len(),
            self.shape,
            pct * 100.0
        );
        walls
    }

    /// A maze with walls scattered around `start` and `end`.
    pub fn maze(&mut self, wall_pct: f64, start: Cell, end: Cell) -> Maze {
        let walls = self.scatter(wall_pct, &[start, end]);
        Maze::new(self.shape, walls)
    }

    /// Keep generating until `end` is reachable from `start`, giving up after
    /// `attempts` tries.
    pub fn solvable_maze(
        &mut self,
        wall_pct: f64,
        start: Cell,
        end: Cell,
        attempts: usize,
    ) -> Option<Maze> {
        for attempt in 1..=attempts {
            let maze = self.maze(wall_pct, start, end);
            if connected(&maze, start, end) {
                log::debug!("solvable maze after {attempt} attempt(s)");
                return Some(maze);
            }
        }
        None
    }
}

/// Whether `end` can be reached from `start`, by iterative flood fill.
pub fn connected<P: Pather>(pather: &P, start: Cell, end: Cell) -> bool {
    let mut seen = std::collections::HashSet::from([start]);
    let mut stack = vec![start];
    let mut nbuf = Vec::with_capacity(4);
    while let Some(c) = stack.pop() {
        if c == end {
            return true;
        }
        nbuf.clear();
        pather.neighbors(c, &mut nbuf);
        for &n in nbuf.iter() {
            if seen.insert(n) {
                stack.push(n);
            }
        }
    }
    false
}
