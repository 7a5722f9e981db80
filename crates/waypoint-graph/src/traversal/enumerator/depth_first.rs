//! Depth-first path enumeration.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace};
use waypoint_core::{EdgeId, Value, VertexId};

use super::{last_edge_value, last_vertex_value, path_value, EnumeratedPath, PathEnumerator};
use crate::store::{GraphError, GraphResult};
use crate::traversal::{EdgeCursor, Traverser, TraverserOptions, UniquenessLevel};

/// Enumerates paths in depth-first pre-order.
///
/// The path is extended and trimmed in place. One edge cursor is kept open
/// per depth, so memory is bounded by `max_depth` plus the set of returned
/// edges when edge uniqueness is [`UniquenessLevel::Global`].
///
/// Global vertex uniqueness is not defined for depth-first order; a
/// directly constructed enumerator applies it per path instead.
pub struct DepthFirstEnumerator<'a, T: Traverser> {
    traverser: &'a mut T,
    options: TraverserOptions,
    path: EnumeratedPath,
    /// Open cursors; the top one expands the last vertex of the path.
    edge_cursors: Vec<T::Cursor>,
    returned_edges: HashSet<EdgeId>,
    is_first: bool,
    prune_next: bool,
    positioned: bool,
}

impl<'a, T: Traverser> DepthFirstEnumerator<'a, T> {
    /// Create an enumerator starting at `start`.
    ///
    /// The options are used as given; see [`TraverserOptions::validate`].
    pub fn new(start: VertexId, options: TraverserOptions, traverser: &'a mut T) -> Self {
        debug!(
            %start,
            min_depth = options.min_depth,
            max_depth = options.max_depth,
            unique_vertices = ?options.unique_vertices,
            unique_edges = ?options.unique_edges,
            "depth-first enumerator created"
        );
        Self {
            traverser,
            options,
            path: EnumeratedPath::new(start),
            edge_cursors: Vec::new(),
            returned_edges: HashSet::new(),
            is_first: true,
            prune_next: false,
            positioned: false,
        }
    }

    /// The traverser this enumerator pulls from.
    pub fn traverser(&self) -> &T {
        &*self.traverser
    }

    fn last_vertex(&self) -> GraphResult<VertexId> {
        self.path
            .last_vertex()
            .ok_or_else(|| GraphError::Internal("depth-first path has no vertices".to_owned()))
    }

    fn filtered(&mut self) {
        self.traverser.stats_mut().filtered_paths += 1;
    }

    /// Try to extend the path by `edge`. On `false` the path is unchanged.
    fn try_extend(&mut self, edge: EdgeId, cursor_idx: usize) -> GraphResult<bool> {
        let depth = self.path.depth();
        let source = self.last_vertex()?;

        if self.options.unique_edges == UniquenessLevel::Global
            && !self.returned_edges.insert(edge)
        {
            trace!(%edge, depth, "edge already returned");
            self.filtered();
            return Ok(false);
        }

        if !self.traverser.edge_matches_conditions(edge, source, depth, cursor_idx)? {
            return Ok(false);
        }

        if self.options.unique_edges == UniquenessLevel::Path && self.path.edges.contains(&edge) {
            trace!(%edge, depth, "edge already on path");
            self.filtered();
            return Ok(false);
        }

        if !self.traverser.get_vertex(edge, &mut self.path.vertices, depth, cursor_idx)? {
            return Ok(false);
        }

        if self.options.unique_vertices != UniquenessLevel::None {
            if let Some((last, rest)) = self.path.vertices.split_last() {
                if rest.contains(last) {
                    trace!(%edge, vertex = %last, depth, "vertex already on path");
                    self.path.vertices.pop();
                    self.filtered();
                    return Ok(false);
                }
            }
        }

        self.path.edges.push(edge);
        Ok(true)
    }
}

impl<T: Traverser> PathEnumerator for DepthFirstEnumerator<'_, T> {
    fn next(&mut self) -> GraphResult<bool> {
        self.positioned = false;

        if self.is_first {
            self.is_first = false;
            let start = self.last_vertex()?;
            if !self.traverser.has_vertex(start)? {
                debug!(%start, "start vertex not found");
                self.path.clear();
                return Ok(false);
            }
            if self.options.min_depth == 0 {
                self.positioned = true;
                return Ok(true);
            }
        }

        if self.path.is_empty() {
            return Ok(false);
        }

        loop {
            let depth = self.path.depth();
            if depth < self.options.max_depth && !self.prune_next {
                let vertex = self.last_vertex()?;
                match self.traverser.next_cursor(vertex, depth)? {
                    Some(cursor) => self.edge_cursors.push(cursor),
                    // Nothing to expand: backtrack as if the cursor were empty.
                    None => self.path.pop_step(),
                }
            } else {
                self.path.pop_step();
            }
            self.prune_next = false;

            let mut too_shallow = false;
            while let Some(cursor) = self.edge_cursors.last_mut() {
                match cursor.next()? {
                    None => {
                        self.edge_cursors.pop();
                        self.path.pop_step();
                    }
                    Some((edge, cursor_idx)) => {
                        if !self.try_extend(edge, cursor_idx)? {
                            continue;
                        }
                        if self.path.depth() < self.options.min_depth {
                            too_shallow = true;
                            break;
                        }
                        self.positioned = true;
                        return Ok(true);
                    }
                }
            }

            if !too_shallow {
                debug!(
                    returned_edges = self.returned_edges.len(),
                    "depth-first enumerator exhausted"
                );
                self.path.clear();
                return Ok(false);
            }
        }
    }

    fn prune(&mut self) {
        debug_assert!(self.positioned, "prune() requires a preceding successful next()");
        self.prune_next = true;
    }

    fn path(&self) -> &EnumeratedPath {
        &self.path
    }

    fn last_vertex_to_value(&self) -> GraphResult<Value> {
        last_vertex_value(&*self.traverser, &self.path)
    }

    fn last_edge_to_value(&self) -> GraphResult<Value> {
        last_edge_value(&*self.traverser, &self.path)
    }

    fn path_to_value(&self) -> GraphResult<Value> {
        path_value(&*self.traverser, &self.path)
    }
}

impl<T: Traverser> fmt::Debug for DepthFirstEnumerator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepthFirstEnumerator")
            .field("options", &self.options)
            .field("path", &self.path)
            .field("open_cursors", &self.edge_cursors.len())
            .field("returned_edges", &self.returned_edges.len())
            .finish_non_exhaustive()
    }
}
