//! Error types for graph storage and traversal.

use thiserror::Error;
use waypoint_core::{EdgeId, VertexId};

/// Errors that can occur in graph operations.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex was not found.
    #[error("vertex not found: {0}")]
    VertexNotFound(VertexId),

    /// An edge was not found.
    #[error("edge not found: {0}")]
    EdgeNotFound(EdgeId),

    /// Referenced vertex does not exist when creating an edge.
    #[error("referenced vertex does not exist: {0}")]
    InvalidVertexReference(VertexId),

    /// A vertex with the given ID already exists.
    #[error("vertex already exists: {0}")]
    VertexAlreadyExists(VertexId),

    /// An edge with the given ID already exists.
    #[error("edge already exists: {0}")]
    EdgeAlreadyExists(EdgeId),

    /// Traversal options are inconsistent.
    #[error("invalid traversal options: {0}")]
    InvalidOptions(String),

    /// An edge cursor failed while reading.
    #[error("edge cursor error: {0}")]
    Cursor(String),

    /// Traversal options could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
