//! Strategy selection.

use std::fmt;
use std::str::FromStr;

use maze_core::Cell;

use crate::search::SearchResult;
use crate::traits::AstarPather;
use crate::{astar, bfs, dfs};

/// One of the three search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Astar,
}

impl Algorithm {
    /// All strategies, in routing order.
    pub const ALL: [Algorithm; 3] = [Self::Bfs, Self::Dfs, Self::Astar];

    /// Lowercase name used in routes and requests.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Astar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "astar" | "a*" => Ok(Self::Astar),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

/// Run `algorithm` from `start` to `end`.
pub fn solve<P: AstarPather>(algorithm: Algorithm, pather: &P, start: Cell, end: Cell) -> SearchResult {
    match algorithm {
        Algorithm::Bfs => bfs(pather, start, end),
        Algorithm::Dfs => dfs(pather, start, end),
        Algorithm::Astar => astar(pather, start, end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Maze;
    use maze_core::{GridShape, WallSet};

    #[test]
    fn parse_names() {
        assert_eq!("bfs".parse(), Ok(Algorithm::Bfs));
        assert_eq!("DFS".parse(), Ok(Algorithm::Dfs));
        assert_eq!(" astar ".parse(), Ok(Algorithm::Astar));
        assert_eq!("a*".parse(), Ok(Algorithm::Astar));
        assert_eq!(
            "dijkstra".parse::<Algorithm>(),
            Err(ParseAlgorithmError("dijkstra".into()))
        );
    }

    #[test]
    fn name_round_trips_through_parse() {
        for a in Algorithm::ALL {
            assert_eq!(a.to_string().parse(), Ok(a));
        }
    }

    #[test]
    fn solve_dispatches() {
        let m = Maze::open(GridShape::new(3, 3));
        assert_eq!(solve(Algorithm::Bfs, &m, Cell(0), Cell(6)), bfs(&m, Cell(0), Cell(6)));
        assert_eq!(solve(Algorithm::Dfs, &m, Cell(0), Cell(6)), dfs(&m, Cell(0), Cell(6)));
        assert_eq!(
            solve(Algorithm::Astar, &m, Cell(0), Cell(6)),
            astar(&m, Cell(0), Cell(6))
        );
    }

    #[test]
    fn all_report_not_found_for_walled_neighbor() {
        let m = Maze::new(GridShape::new(5, 5), WallSet::from(&[1][..]));
        for a in Algorithm::ALL {
            let r = solve(a, &m, Cell(0), Cell(1));
            assert!(!r.is_found(), "{a}");
            assert!(r.path.is_empty(), "{a}");
        }
    }

    #[test]
    fn fixed_twenty_by_twenty_maze() {
        let walls: &[u32] = &[
            1, 2, 3, 4, 5, 25, 45, 65, 85, 10, 11, 12, 13, 14, 15, 55, 75, 95, 115, 135, 200, 201,
            202, 203, 204, 224, 244, 300, 301, 302, 322, 342, 362, 150, 151, 152, 172, 192,
        ];
        let m = Maze::new(GridShape::default(), WallSet::from(walls));
        let (start, end) = (Cell(20), Cell(379));

        let b = solve(Algorithm::Bfs, &m, start, end);
        assert_eq!(b.visited.len(), 361);
        assert_eq!(b.path.len(), 37);
        assert_eq!(b.visited[..4], [Cell(20), Cell(0), Cell(40), Cell(21)]);

        let d = solve(Algorithm::Dfs, &m, start, end);
        assert_eq!(d.visited.len(), 119);
        assert_eq!(d.path.len(), 105);

        let a = solve(Algorithm::Astar, &m, start, end);
        assert_eq!(a.visited.len(), 240);
        assert_eq!(a.path.len(), 37);
        assert_eq!(a.path[..6], [Cell(20), Cell(21), Cell(22), Cell(23), Cell(24), Cell(44)]);
    }
}
