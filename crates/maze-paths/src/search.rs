//! Search results and the exploration loop shared by BFS and DFS.

use std::collections::HashSet;
use std::fmt;

use maze_core::Cell;

use crate::frontier::Frontier;
use crate::predecessors::{PredecessorMap, reconstruct_path};
use crate::traits::Pather;

/// Terminal state of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The goal was dequeued.
    Found,
    /// The frontier emptied first.
    #[cfg_attr(feature = "serde", serde(rename = "Not Found"))]
    NotFound,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found => f.write_str("Found"),
            Self::NotFound => f.write_str("Not Found"),
        }
    }
}

/// Outcome of one search: the exploration trace, the path, and the status.
///
/// `path` runs from start to end inclusive, and is empty unless the status
/// is [`Status::Found`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub visited: Vec<Cell>,
    pub path: Vec<Cell>,
    pub status: Status,
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.status == Status::Found
    }

    /// Number of steps along the path, or `None` if not found.
    pub fn steps(&self) -> Option<usize> {
        if self.is_found() {
            Some(self.path.len().saturating_sub(1))
        } else {
            None
        }
    }
}

/// Raw state left behind by a finished search.
#[derive(Debug)]
pub(crate) struct Trace {
    pub(crate) visited: Vec<Cell>,
    pub(crate) predecessors: PredecessorMap,
    pub(crate) found: bool,
}

impl Trace {
    pub(crate) fn into_result(self, strategy: &str, start: Cell, end: Cell) -> SearchResult {
        let (path, status) = if self.found {
            (reconstruct_path(&self.predecessors, end), Status::Found)
        } else {
            (Vec::new(), Status::NotFound)
        };
        log::debug!(
            "{strategy} {start} -> {end}: {status} after {} expansions, path of {} cells",
            self.visited.len(),
            path.len()
        );
        SearchResult {
            visited: self.visited,
            path,
            status,
        }
    }
}

/// Expand cells in `frontier` order until `end` is dequeued.
///
/// A cell is marked seen when first pushed and is never pushed again, so
/// every cell is expanded at most once and its predecessor is the cell that
/// discovered it.
pub(crate) fn unvisited_first<P, F>(pather: &P, start: Cell, end: Cell, mut frontier: F) -> Trace
where
    P: Pather,
    F: Frontier<Entry = Cell>,
{
    let mut seen = HashSet::from([start]);
    let mut predecessors = PredecessorMap::rooted_at(start);
    let mut visited = Vec::new();
    let mut nbuf = Vec::with_capacity(4);

    frontier.push(start);

    let found = loop {
        let Some(current) = frontier.pop() else {
            break false;
        };
        visited.push(current);

        if current == end {
            break true;
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &n in nbuf.iter() {
            if seen.insert(n) {
                predecessors.link(n, current);
                frontier.push(n);
            }
        }
    };

    Trace {
        visited,
        predecessors,
        found,
    }
}
