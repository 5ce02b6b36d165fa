//! Embedding topology: identifiers, rotation systems, and the graph store.
//!
//! - [`ids`]: strong handles for vertices, edges and rotation positions
//! - [`rotation`]: per-vertex cyclic edge orders with O(1) positional splicing
//! - [`graph`]: simple graph store that keeps its rotation system in sync
//! - [`components`]: incremental connected-component tracking
//!
//! Most users build an [`EmbeddedGraph`] and hand it to
//! [`summarize`](crate::algs::euler::summarize).

pub mod components;
pub mod graph;
pub mod ids;
pub mod rotation;

pub use graph::EmbeddedGraph;
pub use ids::{EdgeId, Position, VertexId};
pub use rotation::RotationSystem;
