//! Waypoint Graph
//!
//! This crate provides graph storage and the path enumeration engine used by
//! the Waypoint query layer.
//!
//! # Modules
//!
//! - [`store`] - In-memory vertex and edge storage
//! - [`traversal`] - Depth-first and breadth-first path enumeration

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod store;
pub mod traversal;
