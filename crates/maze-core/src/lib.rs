//! **maze-core** — core types for the grid maze pathfinding engine.
//!
//! A maze is a rectangular [`GridShape`] of cells. Every cell is identified
//! by a flat integer id ([`Cell`]), mapped row-major to a [`Coord`]. A
//! [`WallSet`] marks the impassable cells for one search.

pub mod cell;
pub mod geom;
pub mod walls;

pub use cell::Cell;
pub use geom::{Coord, GridShape};
pub use walls::WallSet;
