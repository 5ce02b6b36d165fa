//! RotationSystem: per-vertex cyclic edge orders with stable position handles.
//!
//! A rotation system fixes, for every vertex, the cyclic order of its incident
//! edges. Together with the graph it determines an embedding on an orientable
//! surface: the faces are recovered by [`traverse_faces`](crate::algs::face_traversal::traverse_faces),
//! and the genus follows from Euler's formula.
//!
//! # Storage
//! All rotation entries of all vertices live in one node arena. Each vertex
//! owns a doubly-linked list threaded through that arena, so
//! - inserting before a known entry is O(1),
//! - a [`Position`] is an arena index and is never moved, reused or
//!   invalidated by later insertions or by [`RotationSystem::reverse`].
//!
//! The second point is what lets a caller hold handles into several vertices'
//! rotations at once and splice edges at each of them in turn.
//!
//! # Orientation
//! The linear list order is the cyclic order read from the list head; the
//! entry after the tail is the head again ([`RotationSystem::next_cyclic`]).

use std::fmt;

use itertools::Itertools;

use crate::debug_invariants::DebugInvariants;
use crate::embedding_error::EmbeddingError;
use crate::topology::ids::{EdgeId, Position, VertexId};

#[derive(Clone, Debug)]
struct RotationNode {
    vertex: VertexId,
    edge: EdgeId,
    prev: Option<Position>,
    next: Option<Position>,
}

#[derive(Clone, Debug, Default)]
struct RotationList {
    head: Option<Position>,
    tail: Option<Position>,
    len: usize,
}

#[derive(Clone, Debug)]
struct EdgeRecord {
    ends: [VertexId; 2],
    positions: [Position; 2],
}

/// Cyclic order of incident edges around every vertex.
///
/// Edge ids are issued by [`insert_edge`](Self::insert_edge) in increasing
/// order starting from 0. The structure does not check for parallel edges;
/// deduplication is the job of [`EmbeddedGraph`](crate::topology::graph::EmbeddedGraph).
#[derive(Clone, Debug, Default)]
pub struct RotationSystem {
    lists: Vec<RotationList>,
    nodes: Vec<RotationNode>,
    edges: Vec<EdgeRecord>,
}

impl RotationSystem {
    /// Empty rotation system with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotation system with `n` isolated vertices `0..n`.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            lists: vec![RotationList::default(); n],
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Reserve room for `vertices` more vertices and `edges` more edges.
    pub fn reserve(&mut self, vertices: usize, edges: usize) {
        self.lists.reserve(vertices);
        self.nodes.reserve(2 * edges);
        self.edges.reserve(edges);
    }

    /// Append a new isolated vertex and return its id.
    pub fn add_vertex(&mut self) -> VertexId {
        let v = VertexId::from_index(self.lists.len());
        self.lists.push(RotationList::default());
        v
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.lists.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Total number of rotation entries; always `2 * num_edges()`.
    #[inline]
    pub fn num_positions(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v.index() < self.lists.len()
    }

    /// Number of rotation entries at `v`.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex of this rotation system.
    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.lists[v.index()].len
    }

    /// Insert a new edge `u -- v` and return its fresh id.
    ///
    /// At `u` the edge is placed immediately before `pos_u`, or appended after
    /// the last entry when `pos_u` is `None` (which also covers a vertex with
    /// no incident edges yet); symmetrically at `v`. Runs in O(1) and leaves
    /// every previously issued [`Position`] valid.
    ///
    /// Returns a precondition error, without mutating anything, if a vertex is
    /// unknown or a position is not a live entry of the matching vertex.
    pub fn insert_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        pos_u: Option<Position>,
        pos_v: Option<Position>,
    ) -> Result<EdgeId, EmbeddingError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if let Some(p) = pos_u {
            self.check_position(u, p)?;
        }
        if let Some(p) = pos_v {
            self.check_position(v, p)?;
        }

        let edge = EdgeId::from_index(self.edges.len());
        let at_u = self.link_before(u, edge, pos_u);
        let at_v = self.link_before(v, edge, pos_v);
        self.edges.push(EdgeRecord {
            ends: [u, v],
            positions: [at_u, at_v],
        });
        Ok(edge)
    }

    /// Reverse the rotation at `v` in place, flipping its local orientation.
    ///
    /// Incidence is unchanged and every position keeps referring to the same
    /// edge; only the cyclic order around `v` is mirrored.
    pub fn reverse(&mut self, v: VertexId) -> Result<(), EmbeddingError> {
        self.check_vertex(v)?;
        let list = &mut self.lists[v.index()];
        let mut cursor = list.head;
        while let Some(p) = cursor {
            let node = &mut self.nodes[p.index()];
            std::mem::swap(&mut node.prev, &mut node.next);
            // the old `next` now sits in `prev`
            cursor = node.prev;
        }
        std::mem::swap(&mut list.head, &mut list.tail);
        Ok(())
    }

    /// Edge ids around `v` in rotation order, starting from the list head.
    pub fn rotation(&self, v: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.positions(v).map(move |p| self.nodes[p.index()].edge)
    }

    /// Positions around `v` in rotation order, starting from the list head.
    pub fn positions(&self, v: VertexId) -> Positions<'_> {
        Positions {
            rotation: self,
            cursor: self.lists.get(v.index()).and_then(|l| l.head),
        }
    }

    /// First entry of `v`'s rotation.
    pub fn first(&self, v: VertexId) -> Option<Position> {
        self.lists.get(v.index()).and_then(|l| l.head)
    }

    /// Last entry of `v`'s rotation.
    pub fn last(&self, v: VertexId) -> Option<Position> {
        self.lists.get(v.index()).and_then(|l| l.tail)
    }

    /// Linear successor of `p`; `None` at the tail.
    #[inline]
    pub fn next(&self, p: Position) -> Option<Position> {
        self.nodes[p.index()].next
    }

    /// Linear predecessor of `p`; `None` at the head.
    #[inline]
    pub fn prev(&self, p: Position) -> Option<Position> {
        self.nodes[p.index()].prev
    }

    /// Cyclic successor of `p` around its vertex.
    pub fn next_cyclic(&self, p: Position) -> Position {
        let node = &self.nodes[p.index()];
        match node.next {
            Some(n) => n,
            // a non-empty list always has a head
            None => self.lists[node.vertex.index()].head.unwrap_or(p),
        }
    }

    /// Cyclic predecessor of `p` around its vertex.
    pub fn prev_cyclic(&self, p: Position) -> Position {
        let node = &self.nodes[p.index()];
        match node.prev {
            Some(n) => n,
            None => self.lists[node.vertex.index()].tail.unwrap_or(p),
        }
    }

    /// Edge stored at `p`.
    #[inline]
    pub fn edge_at(&self, p: Position) -> EdgeId {
        self.nodes[p.index()].edge
    }

    /// Vertex whose rotation contains `p`.
    #[inline]
    pub fn vertex_at(&self, p: Position) -> VertexId {
        self.nodes[p.index()].vertex
    }

    /// The entry for the same edge at its other endpoint.
    pub fn twin(&self, p: Position) -> Position {
        let [a, b] = self.edges[self.edge_at(p).index()].positions;
        if a == p { b } else { a }
    }

    /// Endpoints of `e` in insertion order.
    pub fn endpoints(&self, e: EdgeId) -> (VertexId, VertexId) {
        let [u, v] = self.edges[e.index()].ends;
        (u, v)
    }

    /// Rotation entries of `e`, aligned with [`endpoints`](Self::endpoints).
    pub fn incidences(&self, e: EdgeId) -> [Position; 2] {
        self.edges[e.index()].positions
    }

    /// Rotation entry of `e` at endpoint `v`, if `v` is an endpoint.
    pub fn position_of(&self, e: EdgeId, v: VertexId) -> Option<Position> {
        let record = self.edges.get(e.index())?;
        record
            .ends
            .iter()
            .position(|&end| end == v)
            .map(|i| record.positions[i])
    }

    /// Reject vertices outside `0..num_vertices()`.
    pub fn check_vertex(&self, v: VertexId) -> Result<(), EmbeddingError> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(EmbeddingError::UnknownVertex(v))
        }
    }

    /// Reject positions that are not live entries of `v`'s rotation.
    pub fn check_position(&self, v: VertexId, p: Position) -> Result<(), EmbeddingError> {
        let node = self
            .nodes
            .get(p.index())
            .ok_or(EmbeddingError::InvalidPosition { position: p })?;
        if node.vertex != v {
            return Err(EmbeddingError::ForeignPosition {
                position: p,
                vertex: v,
                owner: node.vertex,
            });
        }
        Ok(())
    }

    fn link_before(&mut self, v: VertexId, edge: EdgeId, before: Option<Position>) -> Position {
        let new = Position::from_index(self.nodes.len());
        let list = &mut self.lists[v.index()];
        let prev = match before {
            Some(b) => self.nodes[b.index()].prev,
            None => list.tail,
        };
        self.nodes.push(RotationNode {
            vertex: v,
            edge,
            prev,
            next: before,
        });
        match before {
            Some(b) => self.nodes[b.index()].prev = Some(new),
            None => list.tail = Some(new),
        }
        match prev {
            Some(p) => self.nodes[p.index()].next = Some(new),
            None => list.head = Some(new),
        }
        list.len += 1;
        new
    }
}

/// Iterator over the positions of one vertex, in rotation order.
#[derive(Clone)]
pub struct Positions<'a> {
    rotation: &'a RotationSystem,
    cursor: Option<Position>,
}

impl Iterator for Positions<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let p = self.cursor?;
        self.cursor = self.rotation.nodes[p.index()].next;
        Some(p)
    }
}

/// One line per vertex: `v: a--b c--d ...`, edges as `source--target`.
impl fmt::Display for RotationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.num_vertices() {
            let v = VertexId::from_index(i);
            let edges = self.rotation(v).map(|e| {
                let (a, b) = self.endpoints(e);
                format!("{a}--{b}")
            });
            writeln!(f, "{v}: {}", edges.format(" "))?;
        }
        Ok(())
    }
}

impl DebugInvariants for RotationSystem {
    fn validate_invariants(&self) -> Result<(), EmbeddingError> {
        let corrupted = |msg: String| Err(EmbeddingError::RotationCorrupted(msg));

        if self.nodes.len() != 2 * self.edges.len() {
            return corrupted(format!(
                "{} rotation entries for {} edges",
                self.nodes.len(),
                self.edges.len()
            ));
        }

        let mut total = 0usize;
        for (i, list) in self.lists.iter().enumerate() {
            let v = VertexId::from_index(i);
            let mut expected_prev = None;
            let mut cursor = list.head;
            let mut walked = 0usize;
            while let Some(p) = cursor {
                let node = match self.nodes.get(p.index()) {
                    Some(node) => node,
                    None => return corrupted(format!("vertex {v} links to dangling {p:?}")),
                };
                if node.vertex != v {
                    return corrupted(format!("{p:?} in rotation of {v} is owned by {}", node.vertex));
                }
                if node.prev != expected_prev {
                    return corrupted(format!("{p:?} at vertex {v} has a broken back link"));
                }
                walked += 1;
                if walked > self.nodes.len() {
                    return corrupted(format!("rotation of {v} does not terminate"));
                }
                expected_prev = Some(p);
                cursor = node.next;
            }
            if list.tail != expected_prev {
                return corrupted(format!("tail of {v} does not match its last entry"));
            }
            if walked != list.len {
                return corrupted(format!(
                    "vertex {v} records degree {} but links {walked} entries",
                    list.len
                ));
            }
            total += walked;
        }
        if total != self.nodes.len() {
            return corrupted(format!(
                "rotations link {total} of {} entries",
                self.nodes.len()
            ));
        }

        for (i, record) in self.edges.iter().enumerate() {
            let e = EdgeId::from_index(i);
            for (end, p) in record.ends.iter().zip(record.positions.iter()) {
                let node = &self.nodes[p.index()];
                if node.edge != e || node.vertex != *end {
                    return corrupted(format!("edge {e} entry {p:?} does not point back"));
                }
            }
        }
        Ok(())
    }
}
