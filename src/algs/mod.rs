//! Re-export public algorithms.

pub mod euler;
pub mod face_traversal;
pub mod maximal_planar;

pub use euler::{Classification, EmbeddingSummary, classify, face_count, genus, summarize};
pub use face_traversal::{FaceVisitor, traverse_faces};
pub use maximal_planar::{MaximalPlanarOptions, maximal_planar_random_embedding};
