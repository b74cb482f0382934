//! Error types for the route matching engine.

use crate::graph::NodeId;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Route matching error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Symbol has too few points or zero total length
    #[error("degenerate shape: {0}")]
    DegenerateShape(String),

    /// Invalid request parameter
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No graph node could be resolved for a query point
    #[error("no graph node found near ({lat:.5}, {lon:.5})")]
    NoNodeFound {
        /// Query latitude
        lat: f64,
        /// Query longitude
        lon: f64,
    },

    /// Two nodes are disconnected in the street graph
    #[error("no path between nodes {from} and {to}")]
    NoPath {
        /// Path origin node
        from: NodeId,
        /// Path destination node
        to: NodeId,
    },

    /// Node id is not present in the graph
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// SVG content could not be parsed into a sampled polyline
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    /// Symbol id has no stored entry
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
