pub mod record_parser;
pub mod reference_resolver;

pub use record_parser::{LineOutcome, OpenRecord, ParseOutput, ParseStats, ParserState, RecordParser};
pub use reference_resolver::{ReferenceResolver, ResolutionSummary};
