//! Generate a random 20×20 maze, run all three strategies on it, and print
//! each exploration as a coloured terminal frame.
//!
//! ```text
//! maze-demo [seed] [wall-percent]
//! ```

use std::io;

use rand::{RngExt, SeedableRng};
use rand::rngs::StdRng;

use maze_core::GridShape;
use maze_demos::{render, summary, tiles};
use maze_gen::{DEFAULT_END, DEFAULT_START, DEFAULT_WALL_PCT, WallGen};
use maze_paths::{Algorithm, solve};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse::<u64>()?,
        None => rand::rng().random::<u64>(),
    };
    let wall_pct = match args.next() {
        Some(p) => p.parse::<f64>()? / 100.0,
        None => DEFAULT_WALL_PCT,
    };

    let mut wall_gen = WallGen::new(GridShape::default(), StdRng::seed_from_u64(seed));
    let maze = wall_gen.maze(wall_pct, DEFAULT_START, DEFAULT_END);
    println!("seed {seed}, {} walls", maze.walls().len());

    let mut out = io::stdout();
    for algorithm in Algorithm::ALL {
        let result = solve(algorithm, &maze, DEFAULT_START, DEFAULT_END);
        println!("\n{}", summary(algorithm.name(), &result));
        render(&mut out, &tiles(&maze, DEFAULT_START, DEFAULT_END, &result))?;
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
