//! Pathfinding over grid mazes.
//!
//! Three independent search strategies share one exploration skeleton and
//! differ only in their frontier discipline:
//!
//! - **Breadth-first** search with a FIFO frontier ([`bfs`])
//! - **Depth-first** search with a LIFO frontier ([`dfs`])
//! - **A\*** search with a min-priority frontier keyed by `g + h` ([`astar`])
//!
//! Each search returns a [`SearchResult`]: the order in which cells were
//! expanded, the reconstructed path, and a [`Status`]. All working state is
//! created per call and dropped on return, so concurrent searches never
//! share anything but the read-only maze.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS |
//! | [`AstarPather`] : [`Pather`] | A* |
//!
//! [`Maze`] implements both for a [`GridShape`](maze_core::GridShape) and a
//! [`WallSet`](maze_core::WallSet).

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod distance;
mod frontier;
mod maze;
mod predecessors;
mod search;
mod traits;

pub use algorithm::{Algorithm, ParseAlgorithmError, solve};
pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use distance::manhattan;
pub use frontier::{Fifo, Frontier, Lifo, MinPriority, Prioritized};
pub use maze::Maze;
pub use predecessors::{PredecessorMap, reconstruct_path};
pub use search::{SearchResult, Status};
pub use traits::{AstarPather, Pather};
