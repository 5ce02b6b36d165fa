//! EmbeddingError: unified error type for surface-embed public APIs
//!
//! Two families of failure exist. Precondition violations reject bad input
//! before any mutation becomes visible. Invariant violations report a
//! corrupted embedding detected after the fact; they indicate a bug upstream
//! and are never recoverable by retrying.

use thiserror::Error;

use crate::topology::ids::{Position, VertexId};

/// Unified error type for embedding construction and classification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmbeddingError {
    /// A maximal planar graph needs at least a triangle.
    #[error("precondition violated: a maximal planar graph needs at least 3 vertices, got {requested}")]
    TooFewVertices { requested: usize },
    /// Classification was requested on an embedding with no vertices.
    #[error("precondition violated: cannot classify an empty embedding")]
    EmptyEmbedding,
    /// A vertex index beyond the current vertex count.
    #[error("precondition violated: vertex `{0}` does not exist")]
    UnknownVertex(VertexId),
    /// A position handle that was never issued by this rotation system.
    #[error("precondition violated: position `{position}` is not a live rotation handle")]
    InvalidPosition { position: Position },
    /// A position handle that belongs to another vertex's rotation.
    #[error(
        "precondition violated: position `{position}` belongs to vertex `{owner}`, not `{vertex}`"
    )]
    ForeignPosition {
        position: Position,
        vertex: VertexId,
        owner: VertexId,
    },
    /// The graph store only holds simple graphs.
    #[error("precondition violated: self-loop at vertex `{0}`")]
    SelfLoop(VertexId),
    /// `E + 1 + C - F - V` is odd, so no integral genus exists.
    #[error(
        "invariant violated: odd genus numerator {numerator} (F={faces}, V={vertices}, E={edges}, C={components})"
    )]
    OddGenusNumerator {
        numerator: i64,
        faces: usize,
        vertices: usize,
        edges: usize,
        components: usize,
    },
    /// `E + 1 + C - F - V` is negative, so no genus exists.
    #[error(
        "invariant violated: negative genus numerator {numerator} (F={faces}, V={vertices}, E={edges}, C={components})"
    )]
    NegativeGenusNumerator {
        numerator: i64,
        faces: usize,
        vertices: usize,
        edges: usize,
        components: usize,
    },
    /// Internal linkage of a rotation system is inconsistent.
    #[error("invariant violated: rotation system corrupted: {0}")]
    RotationCorrupted(String),
}

impl EmbeddingError {
    /// True for errors raised before any mutation, caused by caller input.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            EmbeddingError::TooFewVertices { .. }
                | EmbeddingError::EmptyEmbedding
                | EmbeddingError::UnknownVertex(_)
                | EmbeddingError::InvalidPosition { .. }
                | EmbeddingError::ForeignPosition { .. }
                | EmbeddingError::SelfLoop(_)
        )
    }

    /// True for errors that signal a corrupted embedding.
    pub fn is_invariant(&self) -> bool {
        !self.is_precondition()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_are_disjoint() {
        let pre = EmbeddingError::TooFewVertices { requested: 2 };
        assert!(pre.is_precondition());
        assert!(!pre.is_invariant());

        let inv = EmbeddingError::OddGenusNumerator {
            numerator: 3,
            faces: 1,
            vertices: 1,
            edges: 2,
            components: 1,
        };
        assert!(inv.is_invariant());
        assert!(!inv.is_precondition());
    }

    #[test]
    fn messages_name_the_offender() {
        let err = EmbeddingError::ForeignPosition {
            position: Position::new(4),
            vertex: VertexId::new(1),
            owner: VertexId::new(2),
        };
        assert_eq!(
            err.to_string(),
            "precondition violated: position `4` belongs to vertex `2`, not `1`"
        );
    }
}
