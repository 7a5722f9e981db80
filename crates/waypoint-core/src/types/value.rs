//! Values handed out by the query layer.
//!
//! This module provides the [`Value`] enum: property values stored on vertices
//! and edges, and the materialized form of vertices, edges, and whole paths
//! produced by graph traversals.
//!
//! # Example
//!
//! ```
//! use waypoint_core::Value;
//!
//! let name: Value = "Alice".into();
//! let age: Value = 30i64.into();
//! let active: Value = true.into();
//!
//! assert_eq!(name.as_str(), Some("Alice"));
//! assert_eq!(age.as_int(), Some(30));
//! assert_eq!(active.as_bool(), Some(true));
//! assert!(Value::Null.is_null());
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Edge, EdgeId, Vertex, VertexId};
use crate::CoreError;

/// A property value or a materialized graph element.
///
/// # Supported Types
///
/// | Variant | Use Case |
/// |---------|----------|
/// | `Null` | Missing values, the last edge of a zero-length path |
/// | `Bool`, `Int`, `Float`, `String`, `Bytes` | Scalar properties |
/// | `Array` | Lists of values |
/// | `Vertex` | A vertex with its labels and properties |
/// | `Edge` | An edge with its endpoints, type, and properties |
/// | `Path` | A traversal path as parallel vertex and edge lists |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Null/missing value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Array of values
    Array(Vec<Value>),
    /// A vertex with its full data.
    Vertex {
        /// The vertex ID
        id: VertexId,
        /// Vertex labels
        labels: Vec<String>,
        /// Vertex properties
        properties: HashMap<String, Value>,
    },
    /// An edge with its full data.
    Edge {
        /// The edge ID
        id: EdgeId,
        /// The relationship type
        edge_type: String,
        /// Source vertex ID
        source: VertexId,
        /// Target vertex ID
        target: VertexId,
        /// Edge properties
        properties: HashMap<String, Value>,
    },
    /// A path from a start vertex.
    ///
    /// `vertices` always holds one more element than `edges`; the i-th edge
    /// connects the i-th and (i+1)-th vertex.
    Path {
        /// Vertex values, start vertex first
        vertices: Vec<Value>,
        /// Edge values in traversal order
        edges: Vec<Value>,
    },
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the value as a boolean if it is one.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an integer if it is one.
    #[inline]
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a float if it is one.
    #[inline]
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the value as a string slice if it is one.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` if this value is a materialized vertex.
    #[inline]
    #[must_use]
    pub const fn is_vertex(&self) -> bool {
        matches!(self, Self::Vertex { .. })
    }

    /// Returns the vertex ID if this value is a materialized vertex.
    #[inline]
    #[must_use]
    pub const fn as_vertex_id(&self) -> Option<VertexId> {
        match self {
            Self::Vertex { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Returns `true` if this value is a materialized edge.
    #[inline]
    #[must_use]
    pub const fn is_edge(&self) -> bool {
        matches!(self, Self::Edge { .. })
    }

    /// Returns the edge ID if this value is a materialized edge.
    #[inline]
    #[must_use]
    pub const fn as_edge_id(&self) -> Option<EdgeId> {
        match self {
            Self::Edge { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Returns the name of this value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Array(_) => "array",
            Self::Vertex { .. } => "vertex",
            Self::Edge { .. } => "edge",
            Self::Path { .. } => "path",
        }
    }

    /// Extracts the vertex IDs of a materialized path, start vertex first.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TypeMismatch`] if this is not a path or if one of
    /// its vertex slots does not hold a vertex.
    pub fn path_vertex_ids(&self) -> Result<Vec<VertexId>, CoreError> {
        let (vertices, _) =
            self.as_path().ok_or_else(|| CoreError::type_mismatch("path", self.type_name()))?;
        vertices
            .iter()
            .map(|v| {
                v.as_vertex_id().ok_or_else(|| CoreError::type_mismatch("vertex", v.type_name()))
            })
            .collect()
    }

    /// Extracts the edge IDs of a materialized path in traversal order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TypeMismatch`] if this is not a path or if one of
    /// its edge slots does not hold an edge.
    pub fn path_edge_ids(&self) -> Result<Vec<EdgeId>, CoreError> {
        let (_, edges) =
            self.as_path().ok_or_else(|| CoreError::type_mismatch("path", self.type_name()))?;
        edges
            .iter()
            .map(|e| e.as_edge_id().ok_or_else(|| CoreError::type_mismatch("edge", e.type_name())))
            .collect()
    }

    /// Returns the vertex and edge lists if this value is a path.
    #[must_use]
    pub fn as_path(&self) -> Option<(&[Value], &[Value])> {
        match self {
            Self::Path { vertices, edges } => Some((vertices, edges)),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(values: Vec<Value>) -> Self {
        Self::Array(values)
    }
}

impl From<&Vertex> for Value {
    fn from(vertex: &Vertex) -> Self {
        Self::Vertex {
            id: vertex.id,
            labels: vertex.labels.iter().map(|l| l.as_str().to_owned()).collect(),
            properties: vertex.properties.clone(),
        }
    }
}

impl From<&Edge> for Value {
    fn from(edge: &Edge) -> Self {
        Self::Edge {
            id: edge.id,
            edge_type: edge.edge_type.as_str().to_owned(),
            source: edge.source,
            target: edge.target,
            properties: edge.properties.clone(),
        }
    }
}
