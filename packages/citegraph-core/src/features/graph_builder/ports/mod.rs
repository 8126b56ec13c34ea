//! Output graph port

use std::fmt::Debug;
use std::hash::Hash;

use crate::shared::models::Vertex;

/// Sink for vertices and edges produced while loading a dataset
///
/// The loader calls `add_vertex` once per entity occurrence and never
/// deduplicates; whether equal vertices are merged, and whether edges are
/// directed, is up to the implementation.
pub trait GraphSink {
    /// Handle returned for an added vertex
    type VertexId: Copy + Eq + Hash + Debug;

    fn add_vertex(&mut self, vertex: Vertex) -> Self::VertexId;

    /// Connect two previously added vertices
    fn add_edge(&mut self, source: Self::VertexId, target: Self::VertexId);
}
