//! Bibliographic entity models
//!
//! - `entities`: Paper / Author / Venue / Year value objects
//! - `kinds`: vertex and edge kind tags for the typed graph

pub mod entities;
pub mod kinds;

pub use entities::{Author, Paper, Venue, Vertex, Year};
pub use kinds::{EdgeKind, VertexKind};
