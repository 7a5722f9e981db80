//! Waypoint Core
//!
//! This crate provides the fundamental types shared by the Waypoint graph and
//! query layers.
//!
//! # Overview
//!
//! - **Identifiers**: [`VertexId`] and [`EdgeId`] for referencing graph elements
//! - **Graph primitives**: [`Vertex`] and [`Edge`] (with its [`EdgeType`])
//! - **Values**: [`Value`], the materialized form of vertices, edges, and paths
//!
//! # Example
//!
//! ```
//! use waypoint_core::{Edge, EdgeId, Value, Vertex, VertexId};
//!
//! let alice = Vertex::new(VertexId::new(1))
//!     .with_label("Person")
//!     .with_property("name", "Alice");
//! let bob = Vertex::new(VertexId::new(2)).with_label("Person");
//!
//! let knows = Edge::new(EdgeId::new(1), alice.id, bob.id, "KNOWS");
//!
//! assert!(alice.has_label("Person"));
//! assert!(Value::from(&knows).is_edge());
//! ```
//!
//! # Modules
//!
//! - [`types`] - Core data types ([`Vertex`], [`Edge`], [`Value`], IDs)
//! - [`error`] - Error types ([`CoreError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::{Edge, EdgeId, EdgeType, Label, Value, Vertex, VertexId};
