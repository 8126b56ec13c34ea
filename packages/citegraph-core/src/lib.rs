/*
 * Citegraph Core - Citation Dataset Ingestion
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Entity models (Paper, Author, Venue, Year) and kinds
 * - features/    : alphabet → graph_builder → dblp (parser + resolver)
 * - config/      : Loader configuration (YAML)
 *
 * Loading is single-threaded: one pass over the input lines, then one
 * pass over the deferred citation references.
 */

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{LoaderConfig, MalformedPolicy};
pub use errors::{CitegraphError, Result};
pub use features::alphabet::{Alphabet, AlphabetEntry, AlphabetError, EntryId, EntryType, Value};
pub use features::dblp::{DblpLoader, IngestError, LoadReport};
pub use features::graph_builder::{GraphSink, TypedGraph};
pub use shared::models::{Author, EdgeKind, Paper, Venue, Vertex, VertexKind, Year};
