//! Load use case
//!
//! One pass over the input lines through the record parser, then one pass
//! over the deferred references through the resolver.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::{LoaderConfig, MalformedPolicy};
use crate::features::dblp::domain::{classify, MalformedRecord, RecordLine};
use crate::features::dblp::error::{IngestError, IngestResult};
use crate::features::dblp::infrastructure::{
    LineOutcome, ParseStats, RecordParser, ReferenceResolver, ResolutionSummary,
};
use crate::features::graph_builder::GraphSink;

/// Outcome of a completed load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub lines_read: usize,
    pub parse: ParseStats,
    pub distinct_keys: usize,
    pub resolution: ResolutionSummary,
    /// Skipped continuation lines (`MalformedPolicy::Skip`)
    pub malformed: Vec<MalformedRecord>,
    /// Reading stopped at `max_records`
    pub truncated: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DblpLoader {
    config: LoaderConfig,
}

impl DblpLoader {
    pub fn new(config: LoaderConfig) -> IngestResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Open `path` and load it. The file is closed on every exit path.
    pub fn load_from_path<S: GraphSink>(
        &self,
        path: impl AsRef<Path>,
        sink: &mut S,
    ) -> IngestResult<LoadReport> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading citation dataset");
        let file = File::open(path)?;
        self.load(BufReader::new(file), sink)
    }

    /// Load every record from `reader` into `sink`
    ///
    /// On error nothing is rolled back: vertices and edges of records
    /// sealed before the failure stay in the sink, and no citation edges
    /// are resolved.
    pub fn load<R: BufRead, S: GraphSink>(&self, reader: R, sink: &mut S) -> IngestResult<LoadReport> {
        let mut parser: RecordParser<S::VertexId> = RecordParser::new();
        let mut report = LoadReport::default();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = i + 1;

            if let RecordLine::Title(_) = classify(&line) {
                let started = parser.stats().records_started;
                if self.config.max_records.is_some_and(|max| started >= max) {
                    info!(records = started, "record limit reached, stopping");
                    report.truncated = true;
                    break;
                }
                if is_progress_tick(started + 1, self.config.progress_interval) {
                    info!(records = started + 1, line = line_number, "load progress");
                }
            }

            let outcome = parser.feed_line(line_number, &line, sink)?;
            report.lines_read = line_number;

            if let LineOutcome::Malformed(malformed) = outcome {
                match self.config.on_malformed {
                    MalformedPolicy::Skip => {
                        warn!(%malformed, "skipping malformed line");
                        report.malformed.push(malformed);
                    }
                    MalformedPolicy::Abort => return Err(IngestError::Malformed(malformed)),
                }
            }
        }

        let output = parser.finish();
        debug!(
            sealed = output.stats.records_sealed,
            deferred = output.deferred.len(),
            "stream exhausted, resolving references"
        );
        report.resolution = ReferenceResolver::resolve(&output.table, &output.deferred, sink);
        report.parse = output.stats;
        report.distinct_keys = output.distinct_keys;

        info!(
            records = report.parse.records_sealed,
            citations = report.resolution.resolved,
            malformed = report.malformed.len(),
            "citation dataset loaded"
        );
        Ok(report)
    }
}

/// Whether starting record number `record` (1-based) emits a progress
/// event. An interval of 0 disables progress events.
fn is_progress_tick(record: usize, interval: usize) -> bool {
    interval > 0 && record % interval == 0
}
