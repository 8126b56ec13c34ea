//! Citation dataset loader
//!
//! Reads the Arnetminer-style line format and writes a typed graph:
//!
//! ```text
//! #*<title>
//! #@<author1>,<author2>,...
//! #year<year>
//! #conf<venue>
//! #citation<count>
//! #index<identity-key>
//! #%<referenced-identity-key>     (zero or more)
//! <blank line>                     (record separator)
//! ```
//!
//! - domain/: line classification, deferred references, resolution table
//! - infrastructure/: record state machine and reference resolver
//! - application/: `DblpLoader`, the load use case

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::{DblpLoader, LoadReport};
pub use domain::{
    classify, DeferredReference, FieldTag, MalformedReason, MalformedRecord, RecordLine,
    ResolutionTable,
};
pub use error::{IngestError, IngestResult};
pub use infrastructure::{
    LineOutcome, ParseOutput, ParseStats, ParserState, RecordParser, ReferenceResolver,
    ResolutionSummary,
};
