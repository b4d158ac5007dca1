//! Inbound request decoding and validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use maze_core::{Cell, GridShape, WallSet};
use maze_paths::{Algorithm, Maze};

use crate::error::RequestError;

/// The request as it arrives on the wire, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequest {
    #[serde(default)]
    pub start_node: Option<i64>,
    #[serde(default)]
    pub end_node: Option<i64>,
    #[serde(default)]
    pub walls: Vec<i64>,
    /// Strategy name, sent by clients that post to a single endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
}

/// A decoded, strongly-typed request ready for the search core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    pub start: Cell,
    pub end: Cell,
    pub walls: WallSet,
    pub algorithm: Option<Algorithm>,
}

impl SolveRequest {
    /// The maze this request searches.
    pub fn maze(&self, shape: GridShape) -> Maze {
        Maze::new(shape, self.walls.clone())
    }
}

/// Decode an event into a [`RawRequest`].
///
/// The event is either the request object itself, or an object whose
/// `"body"` field is a JSON string holding the request. A `"body"` that is
/// not a string is ignored and the outer object is decoded.
pub fn decode_event(event: &Value) -> Result<RawRequest, RequestError> {
    let raw = match event.get("body") {
        Some(Value::String(body)) => serde_json::from_str(body)?,
        _ => RawRequest::deserialize(event)?,
    };
    Ok(raw)
}

impl RawRequest {
    /// Validate against `shape` and convert to a [`SolveRequest`].
    ///
    /// Ids that cannot be cell ids at all (negative, too large) are always
    /// rejected. With `strict`, ids outside `shape` are rejected too;
    /// without it, out-of-grid walls are dropped and out-of-grid endpoints
    /// are passed through to the search.
    pub fn validate(self, shape: GridShape, strict: bool) -> Result<SolveRequest, RequestError> {
        let start = self.start_node.ok_or(RequestError::MissingField("startNode"))?;
        let end = self.end_node.ok_or(RequestError::MissingField("endNode"))?;
        let start = to_cell("startNode", start, shape, strict)?;
        let end = to_cell("endNode", end, shape, strict)?;

        let mut walls = Vec::with_capacity(self.walls.len());
        for w in self.walls {
            match to_cell("walls", w, shape, strict) {
                Ok(c) if shape.contains(c) => walls.push(c),
                Ok(c) => log::debug!("dropping out-of-grid wall {c}"),
                Err(e) if strict => return Err(e),
                Err(_) => log::debug!("dropping invalid wall id {w}"),
            }
        }

        let algorithm = self
            .algorithm
            .as_deref()
            .map(str::parse::<Algorithm>)
            .transpose()?;

        Ok(SolveRequest {
            start,
            end,
            walls: walls.into_iter().collect(),
            algorithm,
        })
    }
}

fn to_cell(field: &'static str, value: i64, shape: GridShape, strict: bool) -> Result<Cell, RequestError> {
    let out_of_range = RequestError::CellOutOfRange {
        field,
        value,
        len: shape.len(),
    };
    let Ok(id) = u32::try_from(value) else {
        return Err(out_of_range);
    };
    let cell = Cell(id);
    if strict && !shape.contains(cell) {
        return Err(out_of_range);
    }
    Ok(cell)
}
