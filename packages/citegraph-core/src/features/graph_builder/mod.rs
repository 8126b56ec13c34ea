//! Graph Builder
//!
//! - ports/: `GraphSink`, the output-graph interface the loader writes to
//! - infrastructure/: `TypedGraph`, a petgraph-backed sink

pub mod infrastructure;
pub mod ports;

pub use infrastructure::TypedGraph;
pub use ports::GraphSink;
