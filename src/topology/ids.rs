//! Strong, zero-cost handles for embedding entities.
//!
//! Every vertex, edge and rotation entry of an embedding is addressed by a
//! dense `u32` index wrapped in its own newtype, so a vertex index can never be
//! passed where an edge id or a rotation position is expected.
//!
//! - [`VertexId`]: index of a vertex, assigned in creation order from 0.
//! - [`EdgeId`]: identity of an edge, assigned monotonically from 0 and never
//!   reused.
//! - [`Position`]: stable handle to one entry of one vertex's rotation. A
//!   position stays valid for the lifetime of the rotation system; inserting
//!   edges or reversing rotations never invalidates it.

use std::fmt;

macro_rules! index_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[repr(transparent)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw index.
            #[inline]
            pub const fn new(raw: u32) -> Self {
                $name(raw)
            }

            /// Returns the raw index.
            #[inline]
            pub const fn get(self) -> u32 {
                self.0
            }

            /// Returns the raw index as a `usize`, for slice indexing.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub(crate) fn from_index(index: usize) -> Self {
                debug_assert!(index <= u32::MAX as usize, "index overflows u32");
                $name(index as u32)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            #[inline]
            fn from(raw: u32) -> Self {
                $name(raw)
            }
        }
    };
}

index_id!(
    /// Index of a vertex in an embedding.
    VertexId
);

index_id!(
    /// Identity of an edge. Ids grow monotonically and are never reused.
    EdgeId
);

index_id!(
    /// Stable handle to one rotation entry: a single (vertex, incident edge)
    /// corner of the embedding, also used as the dart leaving that vertex along
    /// that edge during face traversal.
    Position
);

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(VertexId, u32);
    assert_eq_size!(EdgeId, u32);
    assert_eq_size!(Position, u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        let v = VertexId::new(42);
        assert_eq!(v.get(), 42);
        assert_eq!(v.index(), 42);
    }

    #[test]
    fn debug_and_display() {
        let e = EdgeId::new(7);
        assert_eq!(format!("{:?}", e), "EdgeId(7)");
        assert_eq!(format!("{}", e), "7");
        assert_eq!(format!("{:?}", Position::new(3)), "Position(3)");
    }

    #[test]
    fn ordering_and_hash() {
        let a = VertexId::new(1);
        let b = VertexId::new(2);
        assert!(a < b);
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        set.insert(VertexId::from(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&EdgeId::new(5)).unwrap();
        assert_eq!(json, "5");
        let back: EdgeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EdgeId::new(5));
    }
}
