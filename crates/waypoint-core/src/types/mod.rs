//! Core data types for Waypoint.
//!
//! This module defines the vertices, edges, and identifiers of the graph model,
//! plus the [`Value`] type used to hand traversal results to callers.

mod edge;
mod id;
mod value;
mod vertex;

pub use edge::{Edge, EdgeType};
pub use id::{EdgeId, VertexId};
pub use value::Value;
pub use vertex::{Label, Vertex};
