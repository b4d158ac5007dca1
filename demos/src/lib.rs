//! Shared rendering for the maze demos.
//!
//! Draws a maze and a search result as a static terminal frame: walls,
//! explored cells, the path, and the two endpoints.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use maze_core::Cell;
use maze_paths::{Maze, SearchResult};

/// How one cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Start,
    End,
    Wall,
    Path,
    Visited,
    Open,
}

impl Tile {
    fn glyph(self) -> (&'static str, Color) {
        match self {
            Self::Start => ("S ", Color::Green),
            Self::End => ("E ", Color::Red),
            Self::Wall => ("██", Color::DarkGrey),
            Self::Path => ("● ", Color::Yellow),
            Self::Visited => ("· ", Color::Blue),
            Self::Open => ("  ", Color::Reset),
        }
    }
}

/// Classify every cell of `maze` for drawing, row by row.
pub fn tiles(maze: &Maze, start: Cell, end: Cell, result: &SearchResult) -> Vec<Vec<Tile>> {
    let path: HashSet<Cell> = result.path.iter().copied().collect();
    let visited: HashSet<Cell> = result.visited.iter().copied().collect();
    let shape = maze.shape();
    let cols = shape.cols() as usize;
    let cells: Vec<Cell> = shape.cells().collect();
    cells
        .chunks(cols.max(1))
        .map(|row| {
            row.iter()
                .map(|&c| match c {
                    c if c == start => Tile::Start,
                    c if c == end => Tile::End,
                    c if maze.walls().contains(c) => Tile::Wall,
                    c if path.contains(&c) => Tile::Path,
                    c if visited.contains(&c) => Tile::Visited,
                    _ => Tile::Open,
                })
                .collect()
        })
        .collect()
}

/// Write a coloured frame for `tiles` to `out`.
pub fn render(out: &mut impl Write, tiles: &[Vec<Tile>]) -> io::Result<()> {
    for row in tiles {
        for &t in row {
            let (glyph, color) = t.glyph();
            if matches!(t, Tile::Start | Tile::End) {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(out, SetForegroundColor(color), Print(glyph), ResetColor)?;
            queue!(out, SetAttribute(Attribute::Reset))?;
        }
        queue!(out, Print("\r\n"))?;
    }
    out.flush()
}

/// One-line summary of a search.
pub fn summary(name: &str, result: &SearchResult) -> String {
    let steps = match result.steps() {
        Some(n) => n.to_string(),
        None => "-".to_owned(),
    };
    format!(
        "{name:>5}: {:<9} visited {:>3}  path steps {steps}",
        result.status.to_string(),
        result.visited.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{GridShape, WallSet};

    #[test]
    fn tiles_classify_cells() {
        let maze = Maze::new(GridShape::new(2, 3), WallSet::from(&[1][..]));
        let result = maze_paths::bfs(&maze, Cell(0), Cell(2));
        let t = tiles(&maze, Cell(0), Cell(2), &result);
        assert_eq!(
            t,
            vec![
                vec![Tile::Start, Tile::Wall, Tile::End],
                vec![Tile::Path, Tile::Path, Tile::Path],
            ]
        );
    }

    #[test]
    fn render_emits_one_line_per_row() {
        let t = vec![vec![Tile::Open, Tile::Wall]; 3];
        let mut buf = Vec::new();
        render(&mut buf, &t).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches("\r\n").count(), 3);
        assert_eq!(text.matches("██").count(), 3);
    }

    #[test]
    fn summary_line() {
        let maze = Maze::open(GridShape::new(3, 3));
        let r = maze_paths::bfs(&maze, Cell(0), Cell(8));
        assert_eq!(summary("bfs", &r), "  bfs: Found     visited   9  path steps 4");
    }
}
