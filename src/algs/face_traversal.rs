//! Face traversal over a rotation system.
//!
//! Faces are the orbits of the "turn at the far end" permutation on darts.
//! A dart is a rotation entry [`Position`]: the entry for edge `e` at vertex
//! `v` stands for leaving `v` along `e`. From dart `p` the walk moves to the
//! twin entry at the other endpoint `w` and continues with the entry that
//! follows `e` in `w`'s rotation ([`RotationSystem::next_cyclic`]). That
//! "next" convention is used everywhere in this crate.
//!
//! Every dart lies on exactly one face, so a full traversal visits each of the
//! `2E` rotation entries exactly once and runs in O(V + E).
//!
//! Events are reported through the [`FaceVisitor`] capability trait. Shipped
//! visitors: [`FaceCounter`] (face count), [`FaceCollector`] (enumeration) and
//! [`FaceLogger`] (trace logging). Tuples of visitors run side by side.

use crate::topology::ids::{EdgeId, Position, VertexId};
use crate::topology::rotation::RotationSystem;

/// Receiver of face traversal events. All methods default to no-ops.
pub trait FaceVisitor {
    fn begin_traversal(&mut self) {}
    fn begin_face(&mut self) {}
    /// Called once per step, with the vertex the step leaves from.
    fn visit_vertex(&mut self, _v: VertexId) {}
    /// Called once per step, after `visit_vertex`, with the edge traversed.
    fn visit_edge(&mut self, _e: EdgeId) {}
    fn end_face(&mut self) {}
    fn end_traversal(&mut self) {}
}

impl<V: FaceVisitor + ?Sized> FaceVisitor for &mut V {
    fn begin_traversal(&mut self) {
        (**self).begin_traversal()
    }
    fn begin_face(&mut self) {
        (**self).begin_face()
    }
    fn visit_vertex(&mut self, v: VertexId) {
        (**self).visit_vertex(v)
    }
    fn visit_edge(&mut self, e: EdgeId) {
        (**self).visit_edge(e)
    }
    fn end_face(&mut self) {
        (**self).end_face()
    }
    fn end_traversal(&mut self) {
        (**self).end_traversal()
    }
}

impl<A: FaceVisitor, B: FaceVisitor> FaceVisitor for (A, B) {
    fn begin_traversal(&mut self) {
        self.0.begin_traversal();
        self.1.begin_traversal();
    }
    fn begin_face(&mut self) {
        self.0.begin_face();
        self.1.begin_face();
    }
    fn visit_vertex(&mut self, v: VertexId) {
        self.0.visit_vertex(v);
        self.1.visit_vertex(v);
    }
    fn visit_edge(&mut self, e: EdgeId) {
        self.0.visit_edge(e);
        self.1.visit_edge(e);
    }
    fn end_face(&mut self) {
        self.0.end_face();
        self.1.end_face();
    }
    fn end_traversal(&mut self) {
        self.0.end_traversal();
        self.1.end_traversal();
    }
}

/// Walk every face of `rotation`, reporting events to `visitor`.
///
/// Faces are discovered vertex by vertex in id order, and within a vertex in
/// rotation order, so the event sequence is deterministic. A vertex with no
/// incident edges is reported as a degenerate face consisting of that single
/// vertex and no edges; it is the one face of its own sphere component.
pub fn traverse_faces<V: FaceVisitor + ?Sized>(rotation: &RotationSystem, visitor: &mut V) {
    let mut visited = vec![false; rotation.num_positions()];
    visitor.begin_traversal();
    for i in 0..rotation.num_vertices() {
        let v = VertexId::new(i as u32);
        if rotation.degree(v) == 0 {
            visitor.begin_face();
            visitor.visit_vertex(v);
            visitor.end_face();
            continue;
        }
        for start in rotation.positions(v) {
            if visited[start.index()] {
                continue;
            }
            visitor.begin_face();
            walk_face(rotation, start, &mut visited, visitor);
            visitor.end_face();
        }
    }
    visitor.end_traversal();
}

/// Dart that follows `p` on its face.
#[inline]
pub fn face_successor(rotation: &RotationSystem, p: Position) -> Position {
    rotation.next_cyclic(rotation.twin(p))
}

fn walk_face<V: FaceVisitor + ?Sized>(
    rotation: &RotationSystem,
    start: Position,
    visited: &mut [bool],
    visitor: &mut V,
) {
    let mut p = start;
    // orbits of a permutation: the first revisited dart is `start`
    while !visited[p.index()] {
        visited[p.index()] = true;
        visitor.visit_vertex(rotation.vertex_at(p));
        visitor.visit_edge(rotation.edge_at(p));
        p = face_successor(rotation, p);
    }
}

/// Counts `begin_face` events. The count lives in the visitor, one per
/// traversal, never in shared state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceCounter {
    pub faces: usize,
}

impl FaceVisitor for FaceCounter {
    fn begin_face(&mut self) {
        self.faces += 1;
    }
}

/// Boundary of one face as met by the traversal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceBoundary {
    /// Vertex left by each step; a vertex repeats if the face touches it twice.
    pub vertices: Vec<VertexId>,
    /// Edge traversed by each step; empty for an isolated vertex.
    pub edges: Vec<EdgeId>,
}

impl FaceBoundary {
    /// Number of steps around the face (its degree).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Collects every face boundary in discovery order.
#[derive(Clone, Debug, Default)]
pub struct FaceCollector {
    pub faces: Vec<FaceBoundary>,
}

impl FaceVisitor for FaceCollector {
    fn begin_face(&mut self) {
        self.faces.push(FaceBoundary::default());
    }
    fn visit_vertex(&mut self, v: VertexId) {
        if let Some(face) = self.faces.last_mut() {
            face.vertices.push(v);
        }
    }
    fn visit_edge(&mut self, e: EdgeId) {
        if let Some(face) = self.faces.last_mut() {
            face.edges.push(e);
        }
    }
}

/// Emits each face's vertex cycle at `trace` level.
#[derive(Clone, Debug, Default)]
pub struct FaceLogger {
    face: usize,
    cycle: Vec<VertexId>,
}

impl FaceVisitor for FaceLogger {
    fn begin_face(&mut self) {
        self.cycle.clear();
    }
    fn visit_vertex(&mut self, v: VertexId) {
        self.cycle.push(v);
    }
    fn end_face(&mut self) {
        log::trace!("face {}: {:?}", self.face, self.cycle);
        self.face += 1;
    }
    fn end_traversal(&mut self) {
        log::trace!("traversal found {} faces", self.face);
    }
}

/// Number of faces of the embedding described by `rotation`.
pub fn count_faces(rotation: &RotationSystem) -> usize {
    let mut counter = FaceCounter::default();
    traverse_faces(rotation, &mut counter);
    counter.faces
}

/// Every face boundary of the embedding described by `rotation`.
pub fn collect_faces(rotation: &RotationSystem) -> Vec<FaceBoundary> {
    let mut collector = FaceCollector::default();
    traverse_faces(rotation, &mut collector);
    collector.faces
}
