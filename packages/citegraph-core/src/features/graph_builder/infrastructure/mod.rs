pub mod typed_graph;

pub use typed_graph::TypedGraph;
