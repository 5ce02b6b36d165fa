//! EmbeddedGraph: a simple undirected graph stored together with its rotation
//! system.
//!
//! The graph store owns vertex and edge identity, rejects parallel edges and
//! self-loops, and keeps the connected-component count current as edges are
//! added. Every accepted edge is spliced into the rotation system at the
//! requested positions, so graph and embedding can never drift apart.

use std::fmt;

use hashbrown::HashMap;

use crate::debug_invariants::DebugInvariants;
use crate::embedding_error::EmbeddingError;
use crate::topology::components::ComponentSets;
use crate::topology::ids::{EdgeId, Position, VertexId};
use crate::topology::rotation::RotationSystem;

/// Simple graph plus rotation system.
#[derive(Clone, Debug, Default)]
pub struct EmbeddedGraph {
    rotation: RotationSystem,
    edge_index: HashMap<(VertexId, VertexId), EdgeId>,
    components: ComponentSets,
}

#[inline]
fn edge_key(u: VertexId, v: VertexId) -> (VertexId, VertexId) {
    if u <= v { (u, v) } else { (v, u) }
}

impl EmbeddedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with `n` isolated vertices `0..n`.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            rotation: RotationSystem::with_vertices(n),
            edge_index: HashMap::new(),
            components: ComponentSets::new(n),
        }
    }

    /// Reserve room for `vertices` more vertices and `edges` more edges.
    pub fn reserve(&mut self, vertices: usize, edges: usize) {
        self.rotation.reserve(vertices, edges);
        self.edge_index.reserve(edges);
    }

    pub fn add_vertex(&mut self) -> VertexId {
        self.components.push();
        self.rotation.add_vertex()
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.rotation.num_vertices()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.rotation.num_edges()
    }

    /// Number of connected components; isolated vertices count as one each.
    #[inline]
    pub fn connected_components(&self) -> usize {
        self.components.count()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.num_vertices() as u32).map(VertexId::new)
    }

    /// All edges in id order as `(id, u, v)`.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, VertexId, VertexId)> + '_ {
        (0..self.num_edges() as u32).map(move |raw| {
            let e = EdgeId::new(raw);
            let (u, v) = self.rotation.endpoints(e);
            (e, u, v)
        })
    }

    /// Id of the edge joining `u` and `v`, in either direction.
    pub fn find_edge(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        self.edge_index.get(&edge_key(u, v)).copied()
    }

    /// Add `u -- v`, appending it at the end of both rotations.
    ///
    /// Returns the edge id and whether it was newly created. An existing edge
    /// is returned unchanged and the rotation is left untouched.
    pub fn add_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
    ) -> Result<(EdgeId, bool), EmbeddingError> {
        self.add_edge_at(u, v, None, None)
    }

    /// Add `u -- v`, placing it before `pos_u` at `u` and before `pos_v` at
    /// `v` (`None` appends). See [`RotationSystem::insert_edge`].
    pub fn add_edge_at(
        &mut self,
        u: VertexId,
        v: VertexId,
        pos_u: Option<Position>,
        pos_v: Option<Position>,
    ) -> Result<(EdgeId, bool), EmbeddingError> {
        self.rotation.check_vertex(u)?;
        self.rotation.check_vertex(v)?;
        if u == v {
            return Err(EmbeddingError::SelfLoop(u));
        }
        if let Some(&existing) = self.edge_index.get(&edge_key(u, v)) {
            log::trace!("edge {u}--{v} already present as {existing}");
            return Ok((existing, false));
        }

        let e = self.rotation.insert_edge(u, v, pos_u, pos_v)?;
        self.edge_index.insert(edge_key(u, v), e);
        self.components.union(u.index(), v.index());
        log::trace!("added edge {e}: {u}--{v}");
        Ok((e, true))
    }

    /// Reverse the rotation at `v`. See [`RotationSystem::reverse`].
    pub fn reverse_rotation(&mut self, v: VertexId) -> Result<(), EmbeddingError> {
        self.rotation.reverse(v)
    }

    #[inline]
    pub fn rotation(&self) -> &RotationSystem {
        &self.rotation
    }

    pub fn into_rotation(self) -> RotationSystem {
        self.rotation
    }
}

impl fmt::Display for EmbeddedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rotation, f)
    }
}

impl DebugInvariants for EmbeddedGraph {
    fn validate_invariants(&self) -> Result<(), EmbeddingError> {
        self.rotation.validate_invariants()?;
        if self.edge_index.len() != self.num_edges() {
            return Err(EmbeddingError::RotationCorrupted(format!(
                "edge index holds {} pairs for {} edges",
                self.edge_index.len(),
                self.num_edges()
            )));
        }
        if self.components.len() != self.num_vertices() {
            return Err(EmbeddingError::RotationCorrupted(format!(
                "component sets cover {} of {} vertices",
                self.components.len(),
                self.num_vertices()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: u32) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn duplicate_edges_are_reported_not_inserted() {
        let mut g = EmbeddedGraph::with_vertices(3);
        let (e, created) = g.add_edge(v(0), v(1)).unwrap();
        assert!(created);
        let (again, created) = g.add_edge(v(1), v(0)).unwrap();
        assert!(!created);
        assert_eq!(again, e);
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.rotation().degree(v(0)), 1);
        assert_eq!(g.find_edge(v(1), v(0)), Some(e));
        g.validate_invariants().unwrap();
    }

    #[test]
    fn self_loops_and_unknown_vertices_are_rejected() {
        let mut g = EmbeddedGraph::with_vertices(2);
        assert_eq!(g.add_edge(v(1), v(1)), Err(EmbeddingError::SelfLoop(v(1))));
        assert_eq!(
            g.add_edge(v(0), v(5)),
            Err(EmbeddingError::UnknownVertex(v(5)))
        );
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn components_follow_edge_insertions() {
        let mut g = EmbeddedGraph::with_vertices(4);
        assert_eq!(g.connected_components(), 4);
        g.add_edge(v(0), v(1)).unwrap();
        g.add_edge(v(2), v(3)).unwrap();
        assert_eq!(g.connected_components(), 2);
        g.add_edge(v(1), v(2)).unwrap();
        assert_eq!(g.connected_components(), 1);
        let w = g.add_vertex();
        assert_eq!(w, v(4));
        assert_eq!(g.connected_components(), 2);
        g.validate_invariants().unwrap();
    }

    #[test]
    fn positioned_insert_goes_through_rotation() {
        let mut g = EmbeddedGraph::with_vertices(3);
        g.add_edge(v(0), v(1)).unwrap();
        let head = g.rotation().first(v(0));
        g.add_edge_at(v(0), v(2), head, None).unwrap();
        let order: Vec<_> = g.rotation().rotation(v(0)).map(EdgeId::get).collect();
        assert_eq!(order, vec![1, 0]);
        let listed: Vec<_> = g.edges().map(|(e, a, b)| (e.get(), a.get(), b.get())).collect();
        assert_eq!(listed, vec![(0, 0, 1), (1, 0, 2)]);
    }
}
