//! Feature modules
//!
//! Each feature follows the same layout where it applies:
//! - domain/         - Pure models
//! - ports/          - Interface definitions (traits)
//! - application/    - Use cases
//! - infrastructure/ - Implementations

/// Dense identity assignment (value ↔ id)
pub mod alphabet;

/// Output graph port and petgraph adapter
pub mod graph_builder;

/// Citation dataset loader: record state machine + reference resolver
pub mod dblp;
