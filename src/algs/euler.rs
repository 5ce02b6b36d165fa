//! Genus and classification of an embedding via Euler's formula.
//!
//! For an embedding of a graph with `C` connected components on an orientable
//! surface of genus `g`:
//!
//! ```text
//! F + V - E = 1 + C - 2g
//! ```
//!
//! For a connected graph this is the familiar `F + V - E = 2 - 2g`. Genus is
//! therefore fully determined by the four counts. Everything here is pure: no
//! state, no side effects beyond `debug` logging, and identical inputs give
//! identical outputs.
//!
//! A numerator `E + 1 + C - F - V` that is odd or negative cannot come from a
//! valid rotation system. It is reported as an invariant violation and never
//! rounded or clamped.

use std::fmt;

use crate::algs::face_traversal::count_faces;
use crate::embedding_error::EmbeddingError;
use crate::topology::graph::EmbeddedGraph;
use crate::topology::rotation::RotationSystem;

/// Surface class of an embedding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Classification {
    /// Genus 0: the sphere.
    Planar,
    /// Genus 1: the torus.
    Toroidal,
    /// Any genus of 2 or more.
    GenusG(usize),
}

impl Classification {
    pub fn from_genus(genus: usize) -> Self {
        match genus {
            0 => Classification::Planar,
            1 => Classification::Toroidal,
            g => Classification::GenusG(g),
        }
    }

    pub fn genus(self) -> usize {
        match self {
            Classification::Planar => 0,
            Classification::Toroidal => 1,
            Classification::GenusG(g) => g,
        }
    }

    pub fn is_planar(self) -> bool {
        self == Classification::Planar
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Planar => f.write_str("planar"),
            Classification::Toroidal => f.write_str("toroidal"),
            Classification::GenusG(g) => write!(f, "genus {g}"),
        }
    }
}

/// Number of faces of the embedding, from one traversal. O(V + E).
pub fn face_count(rotation: &RotationSystem) -> usize {
    count_faces(rotation)
}

/// Genus `(E + 1 + C - F - V) / 2` of an embedding with the given counts.
///
/// # Errors
/// - [`EmbeddingError::EmptyEmbedding`] if `vertices == 0`.
/// - [`EmbeddingError::NegativeGenusNumerator`] or
///   [`EmbeddingError::OddGenusNumerator`] if the counts cannot describe a
///   valid embedding.
pub fn genus(
    faces: usize,
    vertices: usize,
    edges: usize,
    components: usize,
) -> Result<usize, EmbeddingError> {
    if vertices == 0 {
        return Err(EmbeddingError::EmptyEmbedding);
    }
    let numerator = edges as i64 + 1 + components as i64 - faces as i64 - vertices as i64;
    if numerator < 0 {
        return Err(EmbeddingError::NegativeGenusNumerator {
            numerator,
            faces,
            vertices,
            edges,
            components,
        });
    }
    if numerator % 2 != 0 {
        return Err(EmbeddingError::OddGenusNumerator {
            numerator,
            faces,
            vertices,
            edges,
            components,
        });
    }
    Ok((numerator / 2) as usize)
}

/// Classify an embedding with the given counts. Fails exactly when
/// [`genus`] fails.
pub fn classify(
    faces: usize,
    vertices: usize,
    edges: usize,
    components: usize,
) -> Result<Classification, EmbeddingError> {
    genus(faces, vertices, edges, components).map(Classification::from_genus)
}

/// True if the counts satisfy Euler's formula for genus `g`.
pub fn is_embedding(faces: usize, vertices: usize, edges: usize, components: usize, g: usize) -> bool {
    faces as i64 + vertices as i64 - edges as i64 == 1 + components as i64 - 2 * g as i64
}

pub fn is_planar_embedding(faces: usize, vertices: usize, edges: usize, components: usize) -> bool {
    is_embedding(faces, vertices, edges, components, 0)
}

pub fn is_toroidal_embedding(
    faces: usize,
    vertices: usize,
    edges: usize,
    components: usize,
) -> bool {
    is_embedding(faces, vertices, edges, components, 1)
}

/// Faces of an embedding whose `components` pieces share a single outer face.
///
/// A traversal finds one outer face per connected component. Drawing all
/// components on one surface identifies those outer faces, which is the face
/// count the `1 + C - 2g` form of Euler's formula expects. For a connected
/// graph this is `traversal_faces` unchanged.
#[inline]
pub fn surface_faces(traversal_faces: usize, components: usize) -> usize {
    traversal_faces.saturating_sub(components.saturating_sub(1))
}

/// All counts of an embedding together with its genus and class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmbeddingSummary {
    /// Faces found by the traversal, one outer face per component.
    pub faces: usize,
    pub vertices: usize,
    pub edges: usize,
    pub components: usize,
    pub genus: usize,
    pub classification: Classification,
}

/// Count faces of `graph`'s embedding and classify it.
///
/// Vertex, edge and component counts come from the graph store; faces from a
/// single traversal of its rotation system. Genus is computed from
/// [`surface_faces`], so disconnected graphs and isolated vertices satisfy the
/// identity exactly.
pub fn summarize(graph: &EmbeddedGraph) -> Result<EmbeddingSummary, EmbeddingError> {
    let vertices = graph.num_vertices();
    if vertices == 0 {
        return Err(EmbeddingError::EmptyEmbedding);
    }
    let edges = graph.num_edges();
    let components = graph.connected_components();
    let faces = face_count(graph.rotation());
    let genus = genus(surface_faces(faces, components), vertices, edges, components)?;
    let classification = Classification::from_genus(genus);
    log::debug!(
        "embedding F={faces} V={vertices} E={edges} C={components}: {classification}"
    );
    Ok(EmbeddingSummary {
        faces,
        vertices,
        edges,
        components,
        genus,
        classification,
    })
}

/// Summarize many independent, completed embeddings in parallel.
#[cfg(feature = "rayon")]
pub fn classify_many(graphs: &[EmbeddedGraph]) -> Vec<Result<EmbeddingSummary, EmbeddingError>> {
    use rayon::prelude::*;
    graphs.par_iter().map(summarize).collect()
}
