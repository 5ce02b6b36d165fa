//! Random maximal planar graphs with their embedding.
//!
//! Grows a triangle into an `n`-vertex triangulation by repeatedly placing a
//! new vertex inside a uniformly chosen triangular face and joining it to the
//! face's three corners (the "type 3" step of the linear-time maximal planar
//! embedding construction). The rotation system is built alongside, so the
//! result needs no separate embedding pass.
//!
//! The generator keeps a [`FaceRegistry`] of the current triangular faces.
//! Each registered face stores, for each corner, the rotation [`Position`] of
//! the face's outgoing edge at that corner. Splicing the new edge immediately
//! before that position puts it between the face's two boundary edges at that
//! corner and touches nothing else. The registry and the rotation system must
//! agree at every step: a mismatch does not fail here, it surfaces much later
//! as a wrong genus.
//!
//! ```text
//!        c0                     c0
//!      +--#--+                +--#--+
//!      |     |                |  |  |
//!      |     |      ==>       |  i  |
//!      |     |                | / \ |
//!      #-----#                #-----#
//!    c1       c2            c1       c2
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::algs::face_traversal::face_successor;
use crate::debug_invariants::DebugInvariants;
use crate::embedding_error::EmbeddingError;
use crate::topology::graph::EmbeddedGraph;
use crate::topology::ids::{EdgeId, Position, VertexId};
use crate::topology::rotation::RotationSystem;

/// Generator configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaximalPlanarOptions {
    /// Number of vertices of the result; at least 3.
    pub vertices: usize,
    /// Seed for the face-selection RNG.
    pub seed: u64,
}

impl Default for MaximalPlanarOptions {
    fn default() -> Self {
        Self {
            vertices: 3,
            seed: 42,
        }
    }
}

/// One corner of a registered face: a vertex and the rotation entry of the
/// face's outgoing boundary edge there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Corner {
    pub vertex: VertexId,
    pub position: Position,
}

/// Corners of a triangular face in boundary order: the face traversal goes
/// `corners[0] -> corners[1] -> corners[2] -> corners[0]`.
pub type TriangularFace = [Corner; 3];

/// Currently open triangular faces of a growing triangulation.
#[derive(Clone, Debug, Default)]
pub struct FaceRegistry {
    faces: Vec<TriangularFace>,
}

impl FaceRegistry {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            faces: Vec::with_capacity(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&TriangularFace> {
        self.faces.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TriangularFace> {
        self.faces.iter()
    }

    pub fn push(&mut self, face: TriangularFace) {
        self.faces.push(face);
    }

    /// Overwrite face `idx`, returning the face it replaced.
    pub fn replace(&mut self, idx: usize, face: TriangularFace) -> TriangularFace {
        std::mem::replace(&mut self.faces[idx], face)
    }

    /// Check one face against the rotation system: every corner position
    /// belongs to its vertex, and the traversal steps corner to corner.
    pub fn check_face(
        rotation: &RotationSystem,
        face: &TriangularFace,
    ) -> Result<(), EmbeddingError> {
        for (k, corner) in face.iter().enumerate() {
            rotation.check_position(corner.vertex, corner.position)?;
            let next = face[(k + 1) % 3].position;
            if face_successor(rotation, corner.position) != next {
                return Err(EmbeddingError::RotationCorrupted(format!(
                    "registered face {:?} is not a face of the rotation at corner {k}",
                    (*face).map(|c| c.vertex)
                )));
            }
        }
        Ok(())
    }

    /// Check that the registered faces are faces of `rotation` and cover every
    /// rotation entry exactly once.
    pub fn validate_against(&self, rotation: &RotationSystem) -> Result<(), EmbeddingError> {
        let mut covered = vec![false; rotation.num_positions()];
        for face in &self.faces {
            Self::check_face(rotation, face)?;
            for corner in face {
                let seen = &mut covered[corner.position.index()];
                if *seen {
                    return Err(EmbeddingError::RotationCorrupted(format!(
                        "rotation entry {:?} registered in two faces",
                        corner.position
                    )));
                }
                *seen = true;
            }
        }
        if let Some(missing) = covered.iter().position(|&c| !c) {
            return Err(EmbeddingError::RotationCorrupted(format!(
                "rotation entry {missing} lies on no registered face"
            )));
        }
        Ok(())
    }
}

/// One edge insertion performed by the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Splice {
    /// Registry index of the face being subdivided.
    pub face: usize,
    /// Corner the new edge attaches to.
    pub corner: VertexId,
    /// Rotation entry at `corner` the edge was inserted before.
    pub before: Position,
    /// Vertex placed inside the face.
    pub apex: VertexId,
    pub edge: EdgeId,
}

/// A generated triangulation with its final face registry and the log of
/// every edge insertion after the initial triangle.
#[derive(Clone, Debug)]
pub struct MaximalPlanarEmbedding {
    pub graph: EmbeddedGraph,
    pub faces: FaceRegistry,
    pub splices: Vec<Splice>,
}

/// Generate a random maximal planar graph and its embedding from `opts`.
pub fn maximal_planar_random_embedding(
    opts: &MaximalPlanarOptions,
) -> Result<MaximalPlanarEmbedding, EmbeddingError> {
    let mut rng = SmallRng::seed_from_u64(opts.seed);
    maximal_planar_random_embedding_with_rng(opts.vertices, &mut rng)
}

/// Generate a random maximal planar graph on `n` vertices using `rng` for
/// face selection.
///
/// Returns [`EmbeddingError::TooFewVertices`] for `n < 3`. The result has
/// `3n - 6` edges (3 for `n = 3`) and `2n - 4` faces.
pub fn maximal_planar_random_embedding_with_rng<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
) -> Result<MaximalPlanarEmbedding, EmbeddingError> {
    if n < 3 {
        return Err(EmbeddingError::TooFewVertices { requested: n });
    }
    log::debug!("generating maximal planar graph on {n} vertices");

    let mut builder = Builder::triangle(n)?;
    for _ in 3..n {
        let t = rng.gen_range(0..builder.faces.len());
        builder.subdivide(t)?;
    }

    let Builder {
        graph,
        faces,
        splices,
    } = builder;
    crate::debug_invariants!(graph.validate_invariants(), "maximal planar graph");
    crate::debug_invariants!(
        faces.validate_against(graph.rotation()),
        "maximal planar face registry"
    );
    log::debug!(
        "generated {} vertices, {} edges, {} faces",
        graph.num_vertices(),
        graph.num_edges(),
        faces.len()
    );
    Ok(MaximalPlanarEmbedding {
        graph,
        faces,
        splices,
    })
}

struct Builder {
    graph: EmbeddedGraph,
    faces: FaceRegistry,
    splices: Vec<Splice>,
}

impl Builder {
    /// Triangle `0 1 2` with its inner and outer face registered.
    fn triangle(n: usize) -> Result<Self, EmbeddingError> {
        let mut graph = EmbeddedGraph::new();
        let edges = if n == 3 { 3 } else { 3 * n - 6 };
        graph.reserve(n, edges);
        let faces = FaceRegistry::with_capacity(2 * n - 4);
        let splices = Vec::with_capacity(edges - 3);

        let v0 = graph.add_vertex();
        let v1 = graph.add_vertex();
        let v2 = graph.add_vertex();
        let mut builder = Builder {
            graph,
            faces,
            splices,
        };
        let (a0, a1) = builder.append_edge(v0, v1)?;
        let (b1, b2) = builder.append_edge(v1, v2)?;
        let (c2, c0) = builder.append_edge(v2, v0)?;

        builder.faces.push([a0, b1, c2]);
        builder.faces.push([b2, a1, c0]);
        Ok(builder)
    }

    fn append_edge(&mut self, u: VertexId, v: VertexId) -> Result<(Corner, Corner), EmbeddingError> {
        let e = self.fresh_edge(u, v, None)?;
        Ok((self.corner(e, u)?, self.corner(e, v)?))
    }

    /// Place a new vertex inside registered face `t` and replace that face by
    /// the three faces around the new vertex.
    fn subdivide(&mut self, t: usize) -> Result<(), EmbeddingError> {
        let face = self.faces.faces[t];
        let apex = self.graph.add_vertex();

        let (a2, b2) = self.splice(t, face[2], apex)?;
        let (a1, b1) = self.splice(t, face[1], apex)?;
        let (a0, b0) = self.splice(t, face[0], apex)?;

        let first = [b1, face[1], a2];
        let second = [a0, b2, face[2]];
        let third = [face[0], a1, b0];
        for new_face in [&first, &second, &third] {
            crate::debug_invariants!(
                FaceRegistry::check_face(self.graph.rotation(), new_face),
                "subdivided face"
            );
        }
        self.faces.push(second);
        self.faces.push(third);
        self.faces.replace(t, first);
        log::trace!(
            "face {t} {:?} split around vertex {apex}",
            face.map(|c| c.vertex.get())
        );
        Ok(())
    }

    /// Join `apex` to `corner`, inserting before the corner's stored position
    /// and appending at `apex`. Returns the new corners at both ends.
    fn splice(
        &mut self,
        t: usize,
        corner: Corner,
        apex: VertexId,
    ) -> Result<(Corner, Corner), EmbeddingError> {
        let e = self.fresh_edge(corner.vertex, apex, Some(corner.position))?;
        self.splices.push(Splice {
            face: t,
            corner: corner.vertex,
            before: corner.position,
            apex,
            edge: e,
        });
        Ok((self.corner(e, corner.vertex)?, self.corner(e, apex)?))
    }

    fn fresh_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        before_u: Option<Position>,
    ) -> Result<EdgeId, EmbeddingError> {
        let (e, created) = self.graph.add_edge_at(u, v, before_u, None)?;
        if !created {
            return Err(EmbeddingError::RotationCorrupted(format!(
                "edge {u}--{v} generated twice"
            )));
        }
        Ok(e)
    }

    fn corner(&self, e: EdgeId, v: VertexId) -> Result<Corner, EmbeddingError> {
        let position = self.graph.rotation().position_of(e, v).ok_or_else(|| {
            EmbeddingError::RotationCorrupted(format!("edge {e} has no entry at {v}"))
        })?;
        Ok(Corner {
            vertex: v,
            position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::euler::{Classification, face_count, summarize};

    fn generate(n: usize, seed: u64) -> MaximalPlanarEmbedding {
        maximal_planar_random_embedding(&MaximalPlanarOptions { vertices: n, seed }).unwrap()
    }

    #[test]
    fn rejects_fewer_than_three_vertices() {
        for n in 0..3 {
            let err = maximal_planar_random_embedding(&MaximalPlanarOptions {
                vertices: n,
                seed: 1,
            })
            .unwrap_err();
            assert_eq!(err, EmbeddingError::TooFewVertices { requested: n });
        }
    }

    #[test]
    fn triangle_has_two_registered_faces() {
        let out = generate(3, 0);
        assert_eq!(out.graph.num_edges(), 3);
        assert_eq!(out.faces.len(), 2);
        assert!(out.splices.is_empty());
        assert_eq!(face_count(out.graph.rotation()), 2);
        out.faces.validate_against(out.graph.rotation()).unwrap();
    }

    #[test]
    fn counts_match_maximal_planar_identities() {
        for n in [4usize, 5, 10, 57] {
            let out = generate(n, 7);
            assert_eq!(out.graph.num_vertices(), n);
            assert_eq!(out.graph.num_edges(), 3 * n - 6);
            assert_eq!(out.faces.len(), 2 * n - 4);
            assert_eq!(out.splices.len(), 3 * (n - 3));
            let summary = summarize(&out.graph).unwrap();
            assert_eq!(summary.faces, 2 * n - 4);
            assert_eq!(summary.classification, Classification::Planar);
        }
    }

    #[test]
    fn registry_partitions_the_traversal_faces() {
        let out = generate(40, 99);
        out.faces.validate_against(out.graph.rotation()).unwrap();
        out.graph.validate_invariants().unwrap();
    }

    #[test]
    fn first_step_splits_a_triangle_into_k4() {
        let out = generate(4, 3);
        let degrees: Vec<_> = out
            .graph
            .vertices()
            .map(|v| out.graph.rotation().degree(v))
            .collect();
        assert_eq!(degrees, vec![3, 3, 3, 3]);
        // corners are visited in order 2, 1, 0
        let corners: Vec<u32> = out.splices.iter().map(|s| s.corner.get()).collect();
        let face = out.splices[0].face;
        assert!(face < 2);
        let mut registered = [[0u32, 1, 2], [2, 1, 0]][face].to_vec();
        registered.reverse();
        assert_eq!(corners, registered);
    }

    #[test]
    fn same_seed_same_splices() {
        let a = generate(60, 2024);
        let b = generate(60, 2024);
        assert_eq!(a.splices, b.splices);
        assert_eq!(a.graph.to_string(), b.graph.to_string());
    }

    #[test]
    fn external_rng_is_honoured() {
        let mut r1 = SmallRng::seed_from_u64(5);
        let mut r2 = SmallRng::seed_from_u64(5);
        let a = maximal_planar_random_embedding_with_rng(20, &mut r1).unwrap();
        let b = maximal_planar_random_embedding_with_rng(20, &mut r2).unwrap();
        assert_eq!(a.splices, b.splices);
    }

    #[test]
    fn check_face_detects_a_stale_registry_entry() {
        let out = generate(6, 11);
        let mut face = *out.faces.get(0).unwrap();
        face.swap(1, 2);
        assert!(FaceRegistry::check_face(out.graph.rotation(), &face).is_err());
    }
}
