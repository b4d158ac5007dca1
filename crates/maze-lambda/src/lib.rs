//! Request adapter for the maze search strategies.
//!
//! Decodes an inbound event (`{startNode, endNode, walls}`, optionally
//! wrapped in a string-encoded `"body"`), validates it against the grid,
//! runs exactly one strategy, and encodes the result as an HTTP-shaped JSON
//! response.
//!
//! ```
//! use maze_lambda::Handler;
//! use serde_json::json;
//!
//! let handler = Handler::default();
//! let resp = handler.handle_route("/solve/bfs", &json!({"startNode": 0, "endNode": 1}));
//! assert_eq!(resp.status_code, 200);
//! ```

pub mod error;
pub mod handler;
pub mod request;
pub mod response;

pub use error::RequestError;
pub use handler::{Handler, HandlerConfig, parse_route};
pub use request::{RawRequest, SolveRequest, decode_event};
pub use response::{ErrorBody, LambdaResponse};
