//! Errors raised while building or loading graphs.
//!
//! Traversals themselves cannot fail: absent inputs produce empty results.
//! Only the outer surface (graph files, construction, the CLI) reports errors.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    /// The graph file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The graph file is not a valid graph description.
    #[error("Malformed graph file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Vertex `{0}` is referenced but never declared")]
    UnknownVertex(String),

    #[error("Vertex `{0}` is declared more than once")]
    DuplicateVertex(String),

    #[error("Airport `{0}` is referenced but never declared")]
    UnknownAirport(String),

    #[error("Airport code `{0}` is already in use")]
    DuplicateCode(String),

    /// The requested query does not apply to the kind of graph that was loaded.
    #[error("`{command}` cannot run on {kind} graphs")]
    UnsupportedCommand {
        command: &'static str,
        kind: &'static str,
    },
}
