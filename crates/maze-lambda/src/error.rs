use std::fmt;

/// Why an inbound request was rejected.
///
/// Every variant is a client error and maps to status code 400.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The event or its string-encoded body is not a valid request object.
    MalformedJson(String),
    /// A required field is absent.
    MissingField(&'static str),
    /// A cell id does not name a cell of the grid.
    CellOutOfRange {
        field: &'static str,
        value: i64,
        len: usize,
    },
    /// The route is not `/solve/<algorithm>`.
    UnknownRoute(String),
    /// The algorithm name is not one of `bfs`, `dfs`, `astar`.
    UnknownAlgorithm(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedJson(s) => write!(f, "malformed request: {s}"),
            Self::MissingField(name) => write!(f, "missing field `{name}`"),
            Self::CellOutOfRange { field, value, len } => {
                write!(f, "`{field}` cell {value} is outside the grid [0, {len})")
            }
            Self::UnknownRoute(r) => write!(f, "unknown route \u{201c}{r}\u{201d}"),
            Self::UnknownAlgorithm(a) => write!(f, "unknown algorithm \u{201c}{a}\u{201d}"),
        }
    }
}

impl std::error::Error for RequestError {}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedJson(e.to_string())
    }
}

impl From<maze_paths::ParseAlgorithmError> for RequestError {
    fn from(e: maze_paths::ParseAlgorithmError) -> Self {
        Self::UnknownAlgorithm(e.0)
    }
}
