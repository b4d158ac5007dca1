use std::collections::{HashMap, HashSet};

use maze_core::Cell;

use crate::frontier::{Frontier, MinPriority, Prioritized};
use crate::predecessors::PredecessorMap;
use crate::search::{SearchResult, Trace};
use crate::traits::AstarPather;

/// Compute a shortest path from `start` to `end` using A*.
///
/// The frontier is keyed by `f = g + h`, with ties going to the smaller cell
/// id. A cell is closed when dequeued, so it can sit in the frontier several
/// times; later copies are recorded in `visited` but not expanded again.
pub fn astar<P: AstarPather>(pather: &P, start: Cell, end: Cell) -> SearchResult {
    search(pather, start, end).into_result("astar", start, end)
}

fn search<P: AstarPather>(pather: &P, start: Cell, end: Cell) -> Trace {
    let mut open = MinPriority::default();
    let mut closed: HashSet<Cell> = HashSet::new();
    let mut g_score: HashMap<Cell, u32> = HashMap::from([(start, 0)]);
    let mut predecessors = PredecessorMap::rooted_at(start);
    let mut visited = Vec::new();
    let mut nbuf = Vec::with_capacity(4);

    open.push(Prioritized::new(0, start));

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };
        visited.push(current);

        if current == end {
            break 'search true;
        }

        // Stale entry: already expanded with its best score.
        if !closed.insert(current) {
            continue;
        }
        let current_g = g_score.get(&current).copied().unwrap_or(u32::MAX);

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &n in nbuf.iter() {
            if closed.contains(&n) {
                continue;
            }
            let tentative_g = current_g.saturating_add(1);
            if tentative_g >= g_score.get(&n).copied().unwrap_or(u32::MAX) {
                continue;
            }
            predecessors.link(n, current);
            g_score.insert(n, tentative_g);
            open.push(Prioritized::new(tentative_g + pather.estimate(n, end), n));
        }
    };

    Trace {
        visited,
        predecessors,
        found,
    }
}
