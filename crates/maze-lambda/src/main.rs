//! Host binary: reads one event from stdin, writes one response to stdout.
//!
//! ```text
//! echo '{"startNode": 20, "endNode": 379, "walls": []}' | maze-lambda /solve/astar
//! ```
//!
//! Without a route argument the strategy comes from the event's
//! `algorithm` field.

use std::io::{self, Read};

use maze_lambda::{Handler, HandlerConfig, LambdaResponse};
use maze_paths::Algorithm;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let event: serde_json::Value = serde_json::from_str(&input)?;

    let handler = Handler::new(HandlerConfig::from_env());
    let response = match std::env::args().nth(1) {
        Some(route) if route.starts_with('/') => handler.handle_route(&route, &event),
        Some(name) => match name.parse::<Algorithm>() {
            Ok(algorithm) => handler.handle(algorithm, &event),
            Err(e) => LambdaResponse::bad_request(e.to_string()),
        },
        None => handler.handle_event(&event),
    };

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
