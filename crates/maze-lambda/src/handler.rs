//! Routing and dispatch of decoded requests to a search strategy.

use serde_json::Value;

use maze_core::GridShape;
use maze_paths::{Algorithm, SearchResult, solve};

use crate::error::RequestError;
use crate::request::decode_event;
use crate::response::LambdaResponse;

/// Route prefix; the last path segment names the strategy.
const ROUTE_PREFIX: &str = "/solve/";

/// Adapter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerConfig {
    /// Grid every request is searched on.
    pub shape: GridShape,
    /// Reject cell ids outside `shape` instead of passing them through.
    pub strict: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            shape: GridShape::default(),
            strict: true,
        }
    }
}

impl HandlerConfig {
    /// Read `MAZE_ROWS`, `MAZE_COLS` and `MAZE_LENIENT` through `lookup`,
    /// falling back to the defaults for anything unset or unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        let dim = |key: &str, fallback: u32| -> u32 {
            match lookup(key).map(|v| v.trim().parse::<u32>()) {
                Some(Ok(n)) if n > 0 => n,
                Some(_) => {
                    log::warn!("ignoring invalid {key}, using {fallback}");
                    fallback
                }
                None => fallback,
            }
        };
        let rows = dim("MAZE_ROWS", d.shape.rows());
        let cols = dim("MAZE_COLS", d.shape.cols());
        let lenient = lookup("MAZE_LENIENT").is_some_and(|v| matches!(v.trim(), "1" | "true"));
        Self {
            shape: GridShape::new(rows, cols),
            strict: !lenient,
        }
    }

    /// Configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }
}

/// Resolve `/solve/<algorithm>` to its strategy. A trailing slash is allowed.
pub fn parse_route(route: &str) -> Result<Algorithm, RequestError> {
    let name = route
        .trim_end_matches('/')
        .strip_prefix(ROUTE_PREFIX)
        .filter(|n| !n.is_empty() && !n.contains('/'))
        .ok_or_else(|| RequestError::UnknownRoute(route.to_owned()))?;
    Ok(name.parse::<Algorithm>()?)
}

/// Stateless request handler: one event in, one response out.
///
/// Holds only read-only configuration, so a single handler can serve any
/// number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Handler {
    config: HandlerConfig,
}

impl Handler {
    /// Create a handler with the given configuration.
    pub fn new(config: HandlerConfig) -> Self {
        Self { config }
    }

    /// The handler's configuration.
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Serve an event with a fixed strategy.
    pub fn handle(&self, algorithm: Algorithm, event: &Value) -> LambdaResponse {
        self.respond(self.solve(Some(algorithm), event))
    }

    /// Serve an event posted to `route` (`/solve/bfs`, `/solve/dfs`, `/solve/astar`).
    pub fn handle_route(&self, route: &str, event: &Value) -> LambdaResponse {
        let result = parse_route(route).and_then(|a| self.solve(Some(a), event));
        self.respond(result)
    }

    /// Serve an event whose `algorithm` field selects the strategy.
    pub fn handle_event(&self, event: &Value) -> LambdaResponse {
        self.respond(self.solve(None, event))
    }

    /// Decode, validate and run one search. A strategy given by the caller
    /// takes precedence over the request's `algorithm` field.
    pub fn solve(&self, algorithm: Option<Algorithm>, event: &Value) -> Result<SearchResult, RequestError> {
        let shape = self.config.shape;
        let req = decode_event(event)?.validate(shape, self.config.strict)?;
        let algorithm = algorithm
            .or(req.algorithm)
            .ok_or(RequestError::MissingField("algorithm"))?;
        log::debug!(
            "{algorithm} on {shape} grid: {} -> {}, {} walls",
            req.start,
            req.end,
            req.walls.len()
        );
        Ok(solve(algorithm, &req.maze(shape), req.start, req.end))
    }

    fn respond(&self, result: Result<SearchResult, RequestError>) -> LambdaResponse {
        match result {
            Ok(r) => LambdaResponse::json(200, &r),
            Err(e) => {
                log::warn!("rejecting request: {e}");
                LambdaResponse::bad_request(e.to_string())
            }
        }
    }
}
