//! Breadth-first path enumeration over a schreier vector.
//!
//! Every discovered step is appended to one flat vector and points back to
//! the step it was reached from, so a path is a chain of indices ending at
//! the root (index 0). Paths are rebuilt from that chain when returned.

use std::collections::HashSet;
use std::fmt;
use std::mem;

use tracing::{debug, trace};
use waypoint_core::{EdgeId, Value, VertexId};

use super::{last_edge_value, last_vertex_value, path_value, EnumeratedPath, PathEnumerator};
use crate::store::GraphResult;
use crate::traversal::{EdgeCursor, Traverser, TraverserOptions, UniquenessLevel};

/// Index of the root step holding the start vertex.
const ROOT: usize = 0;

/// One entry of the schreier vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PathStep {
    /// Index of the step this one was reached from.
    source_idx: usize,
    /// Edge taken to get here; `None` only for the root.
    edge: Option<EdgeId>,
    vertex: VertexId,
}

/// Enumerates paths in order of non-decreasing length.
///
/// Path uniqueness is not checked during breadth-first expansion, so
/// [`UniquenessLevel::Path`] behaves like [`UniquenessLevel::None`] here.
/// Global vertex and edge uniqueness are honored.
pub struct BreadthFirstEnumerator<'a, T: Traverser> {
    traverser: &'a mut T,
    options: TraverserOptions,
    path: EnumeratedPath,
    schreier: Vec<PathStep>,
    /// Steps of the current depth still to expand.
    to_search: Vec<usize>,
    /// Steps discovered for the next depth.
    next_depth: Vec<usize>,
    to_search_pos: usize,
    current_depth: usize,
    /// Next schreier index to hand out as a path.
    last_returned: usize,
    returned_edges: HashSet<EdgeId>,
    returned_vertices: HashSet<VertexId>,
    /// Steps whose extensions must not be expanded.
    pruned: HashSet<usize>,
    is_first: bool,
    positioned: bool,
}

impl<'a, T: Traverser> BreadthFirstEnumerator<'a, T> {
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
            "breadth-first enumerator created"
        );
        let mut returned_vertices = HashSet::new();
        if options.unique_vertices == UniquenessLevel::Global {
            returned_vertices.insert(start);
        }
        Self {
            traverser,
            options,
            path: EnumeratedPath::new(start),
            schreier: vec![PathStep { source_idx: ROOT, edge: None, vertex: start }],
            to_search: vec![ROOT],
            next_depth: Vec::new(),
            to_search_pos: 0,
            current_depth: 0,
            last_returned: ROOT,
            returned_edges: HashSet::new(),
            returned_vertices,
            pruned: HashSet::new(),
            is_first: true,
            positioned: false,
        }
    }

    /// The traverser this enumerator pulls from.
    pub fn traverser(&self) -> &T {
        &*self.traverser
    }

    /// Position on the step at `last_returned` and advance past it.
    fn return_next_step(&mut self) -> bool {
        let index = self.last_returned;
        self.last_returned += 1;
        self.compute_enumerated_path(index);
        self.positioned = true;
        true
    }

    /// Rebuild `path` from the back-link chain ending at `index`.
    fn compute_enumerated_path(&mut self, index: usize) {
        let mut depth = 0;
        let mut cursor = index;
        while cursor != ROOT {
            depth += 1;
            cursor = self.schreier[cursor].source_idx;
        }

        let root = self.schreier[ROOT].vertex;
        self.path.vertices.clear();
        self.path.vertices.resize(depth + 1, root);
        self.path.edges.clear();
        self.path.edges.resize(depth, EdgeId::new(0));

        let mut cursor = index;
        for slot in (0..depth).rev() {
            let step = self.schreier[cursor];
            self.path.vertices[slot + 1] = step.vertex;
            if let Some(edge) = step.edge {
                self.path.edges[slot] = edge;
            }
            cursor = step.source_idx;
        }
    }

    /// Expand one frontier step. Returns true if a returnable step was added.
    fn expand(&mut self, source_idx: usize) -> GraphResult<bool> {
        let source = self.schreier[source_idx].vertex;
        let depth = self.current_depth;
        let Some(mut cursor) = self.traverser.next_cursor(source, depth)? else {
            return Ok(false);
        };

        let mut did_insert = false;
        for (edge, cursor_idx) in cursor.read_all()? {
            if self.options.unique_edges == UniquenessLevel::Global
                && !self.returned_edges.insert(edge)
            {
                trace!(%edge, depth, "edge already returned");
                self.traverser.stats_mut().filtered_paths += 1;
                continue;
            }
            if !self.traverser.edge_matches_conditions(edge, source, depth, cursor_idx)? {
                continue;
            }
            let Some(vertex) = self.traverser.get_single_vertex(edge, source, depth, cursor_idx)?
            else {
                continue;
            };
            if self.options.unique_vertices == UniquenessLevel::Global
                && !self.returned_vertices.insert(vertex)
            {
                trace!(%edge, %vertex, depth, "vertex already returned");
                self.traverser.stats_mut().filtered_paths += 1;
                continue;
            }

            if depth + 1 < self.options.max_depth {
                self.next_depth.push(self.schreier.len());
            }
            self.schreier.push(PathStep { source_idx, edge: Some(edge), vertex });
            did_insert = true;
        }
        Ok(did_insert)
    }
}

impl<T: Traverser> PathEnumerator for BreadthFirstEnumerator<'_, T> {
    fn next(&mut self) -> GraphResult<bool> {
        self.positioned = false;

        if self.is_first {
            self.is_first = false;
            let start = self.schreier[ROOT].vertex;
            if !self.traverser.has_vertex(start)? {
                debug!(%start, "start vertex not found");
                self.path.clear();
                return Ok(false);
            }
            if self.options.min_depth == 0 {
                return Ok(self.return_next_step());
            }
            self.last_returned = ROOT + 1;
        }

        // Only an exhausted enumerator holds an empty path.
        if self.path.is_empty() {
            return Ok(false);
        }

        if self.last_returned < self.schreier.len() {
            return Ok(self.return_next_step());
        }

        if self.options.max_depth == 0 {
            self.path.clear();
            return Ok(false);
        }

        loop {
            if self.to_search_pos >= self.to_search.len() {
                if self.next_depth.is_empty() {
                    debug!(steps = self.schreier.len(), "breadth-first enumerator exhausted");
                    self.path.clear();
                    return Ok(false);
                }
                self.to_search.clear();
                mem::swap(&mut self.to_search, &mut self.next_depth);
                self.to_search_pos = 0;
                self.current_depth += 1;
                trace!(depth = self.current_depth, frontier = self.to_search.len(), "next depth");
            }

            let source_idx = self.to_search[self.to_search_pos];
            self.to_search_pos += 1;
            if self.pruned.remove(&source_idx) {
                trace!(step = source_idx, "skipping pruned step");
                continue;
            }

            let mut did_insert = self.expand(source_idx)?;
            if self.current_depth + 1 < self.options.min_depth {
                // Too shallow to return; keep them only as frontier.
                self.last_returned = self.schreier.len();
                did_insert = false;
            }
            if did_insert {
                break;
            }
        }

        Ok(self.return_next_step())
    }

    fn prune(&mut self) {
        debug_assert!(self.positioned, "prune() requires a preceding successful next()");
        // Steps at max_depth are never expanded, so there is nothing to skip.
        if self.path.depth() >= self.options.max_depth {
            return;
        }
        if let Some(step) = self.last_returned.checked_sub(1) {
            self.pruned.insert(step);
        }
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

impl<T: Traverser> fmt::Debug for BreadthFirstEnumerator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreadthFirstEnumerator")
            .field("options", &self.options)
            .field("path", &self.path)
            .field("steps", &self.schreier.len())
            .field("current_depth", &self.current_depth)
            .field("last_returned", &self.last_returned)
            .finish_non_exhaustive()
    }
}
