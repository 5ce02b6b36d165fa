#![cfg_attr(docsrs, feature(doc_cfg))]
//! # surface-embed
//!
//! surface-embed analyzes and synthesizes combinatorial embeddings of graphs on
//! orientable surfaces. A graph together with a rotation system (the cyclic
//! order of edges around each vertex) determines an embedding; from it the
//! crate derives the face count and, through Euler's formula, the genus.
//!
//! ## Features
//! - [`RotationSystem`](topology::RotationSystem): per-vertex edge orders with
//!   stable position handles and O(1) splicing
//! - [`EmbeddedGraph`](topology::EmbeddedGraph): simple graph store with edge
//!   deduplication and connected components
//! - Face traversal through the [`FaceVisitor`](algs::FaceVisitor) trait
//! - Genus and planar / toroidal / higher-genus classification
//! - Random maximal planar graphs generated together with their embedding
//!
//! ## Determinism
//!
//! Random decisions use `SmallRng` seeded from
//! [`MaximalPlanarOptions`](algs::MaximalPlanarOptions), so a seed and a vertex
//! count always reproduce the same sequence of edge insertions.
//!
//! ## Example
//!
//! ```rust
//! use surface_embed::prelude::*;
//!
//! let mut g = EmbeddedGraph::with_vertices(4);
//! for (u, v) in [(0, 1), (0, 2), (0, 3), (1, 3), (1, 2), (2, 3)] {
//!     g.add_edge(VertexId::new(u), VertexId::new(v)).unwrap();
//! }
//! let k4 = summarize(&g).unwrap();
//! assert_eq!(k4.classification, Classification::Toroidal);
//!
//! g.reverse_rotation(VertexId::new(3)).unwrap();
//! assert_eq!(summarize(&g).unwrap().classification, Classification::Planar);
//! ```
//!
//! ## Invariant checking
//! Debug builds, or release builds with the `check-invariants` feature, verify
//! rotation systems and generator state through [`DebugInvariants`].

pub mod algs;
pub mod debug_invariants;
pub mod embedding_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;
pub use embedding_error::EmbeddingError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    #[cfg(feature = "rayon")]
    pub use crate::algs::euler::classify_many;
    pub use crate::algs::euler::{
        Classification, EmbeddingSummary, classify, face_count, genus, summarize,
    };
    pub use crate::algs::face_traversal::{
        FaceCollector, FaceCounter, FaceVisitor, traverse_faces,
    };
    pub use crate::algs::maximal_planar::{
        MaximalPlanarEmbedding, MaximalPlanarOptions, maximal_planar_random_embedding,
    };
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::embedding_error::EmbeddingError;
    pub use crate::topology::{EdgeId, EmbeddedGraph, Position, RotationSystem, VertexId};
}
