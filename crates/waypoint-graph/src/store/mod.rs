//! Vertex and edge storage.
//!
//! - [`MemoryGraph`] - In-memory property graph with adjacency lists
//! - [`IdGenerator`] - Monotonic ID generation for vertices and edges
//! - [`GraphError`] - Errors shared by storage and traversal

mod error;
mod id_gen;
mod memory;

pub use error::{GraphError, GraphResult};
pub use id_gen::IdGenerator;
pub use memory::MemoryGraph;
