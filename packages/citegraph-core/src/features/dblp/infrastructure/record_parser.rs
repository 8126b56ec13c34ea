//! Record state machine
//!
//! `Idle` → (`#*`) → `Accumulating` → (blank line) → `Idle`.
//!
//! A record is sealed the moment its `#index` line is read: the paper, its
//! buffered authors / year / venue and the paper → satellite edges are
//! written to the sink right away. `#%` lines after sealing still attach
//! to the sealed record until the next blank line or `#*`. Records that
//! never reach `#index` write nothing.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::features::alphabet::Alphabet;
use crate::features::dblp::domain::{
    classify, DeferredReference, FieldTag, MalformedReason, MalformedRecord, RecordLine,
    ResolutionTable,
};
use crate::features::dblp::error::IngestResult;
use crate::features::graph_builder::GraphSink;
use crate::shared::models::{Author, Paper, Venue, Vertex, Year};

// ============================================================
// State
// ============================================================

#[derive(Debug, Clone)]
pub enum ParserState<V> {
    Idle,
    Accumulating(OpenRecord<V>),
}

/// The record currently being read
#[derive(Debug, Clone)]
pub struct OpenRecord<V> {
    paper: Paper,
    authors: Vec<Author>,
    year: Option<Year>,
    venue: Option<Venue>,
    /// Identity key and paper vertex, set at sealing
    sealed: Option<(Arc<str>, V)>,
    /// `#%` targets read before `#index`
    pending: Vec<Arc<str>>,
}

impl<V: Copy> OpenRecord<V> {
    fn new(title: &str) -> Self {
        Self {
            paper: Paper::new(title),
            authors: Vec::new(),
            year: None,
            venue: None,
            sealed: None,
            pending: Vec::new(),
        }
    }

    pub fn paper(&self) -> &Paper {
        &self.paper
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn year(&self) -> Option<&Year> {
        self.year.as_ref()
    }

    pub fn venue(&self) -> Option<&Venue> {
        self.venue.as_ref()
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.is_some()
    }

    pub fn vertex(&self) -> Option<V> {
        self.sealed.as_ref().map(|(_, v)| *v)
    }
}

/// What a single line did to the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Ignored,
    /// Blank line; any open record was closed
    Reset,
    Started,
    /// Satellite or citation count collected on the open record
    Buffered,
    Sealed,
    /// Reference queued for resolution (or held until `#index`)
    Deferred,
    SelfReference,
    Malformed(MalformedRecord),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub records_started: usize,
    pub records_sealed: usize,
    /// Started but closed before `#index`
    pub records_dropped: usize,
    pub references_deferred: usize,
    pub self_references: usize,
}

/// Everything the resolver needs once the stream is exhausted
#[derive(Debug, Clone)]
pub struct ParseOutput<V> {
    pub table: ResolutionTable<V>,
    pub deferred: Vec<DeferredReference>,
    pub stats: ParseStats,
    /// Distinct identity keys seen in `#index` and `#%` lines
    pub distinct_keys: usize,
}

// ============================================================
// Parser
// ============================================================

pub struct RecordParser<V> {
    state: ParserState<V>,
    /// Interns identity keys so repeated citations share one allocation
    keys: Alphabet<Arc<str>>,
    table: ResolutionTable<V>,
    deferred: Vec<DeferredReference>,
    stats: ParseStats,
}

impl<V> RecordParser<V>
where
    V: Copy + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self {
            state: ParserState::Idle,
            keys: Alphabet::new(),
            table: ResolutionTable::new(),
            deferred: Vec::new(),
            stats: ParseStats::default(),
        }
    }

    pub fn state(&self) -> &ParserState<V> {
        &self.state
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    pub fn deferred(&self) -> &[DeferredReference] {
        &self.deferred
    }

    pub fn table(&self) -> &ResolutionTable<V> {
        &self.table
    }

    /// Apply one input line. `line_number` is 1-based and only used for
    /// diagnostics.
    pub fn feed_line<S>(
        &mut self,
        line_number: usize,
        line: &str,
        sink: &mut S,
    ) -> IngestResult<LineOutcome>
    where
        S: GraphSink<VertexId = V>,
    {
        let malformed = |field, reason| {
            LineOutcome::Malformed(MalformedRecord {
                line_number,
                field,
                reason,
            })
        };

        let outcome = match classify(line) {
            RecordLine::Blank => {
                self.close_record();
                LineOutcome::Reset
            }
            RecordLine::Title(title) => {
                self.close_record();
                self.state = ParserState::Accumulating(OpenRecord::new(title));
                self.stats.records_started += 1;
                LineOutcome::Started
            }
            RecordLine::Authors(raw) => match self.unsealed_mut() {
                Some(record) => {
                    record.authors.extend(
                        raw.split(',')
                            .map(str::trim)
                            .filter(|name| !name.is_empty())
                            .map(Author::new),
                    );
                    LineOutcome::Buffered
                }
                None => LineOutcome::Ignored,
            },
            RecordLine::Year(raw) => match self.unsealed_mut() {
                Some(record) => {
                    record.year = Some(Year::new(raw));
                    LineOutcome::Buffered
                }
                None => LineOutcome::Ignored,
            },
            RecordLine::Venue(raw) => match self.unsealed_mut() {
                Some(record) => {
                    record.venue = Some(Venue::new(raw));
                    LineOutcome::Buffered
                }
                None => LineOutcome::Ignored,
            },
            RecordLine::Citations(raw) => match &mut self.state {
                ParserState::Idle => malformed(FieldTag::Citation, MalformedReason::NoActiveRecord),
                ParserState::Accumulating(record) if record.is_sealed() => {
                    debug!(line_number, "citation count after #index ignored");
                    LineOutcome::Ignored
                }
                ParserState::Accumulating(record) => {
                    record.paper.citation_count = parse_citation_count(raw);
                    if record.paper.citation_count.is_none() {
                        debug!(line_number, value = raw, "unparsable citation count");
                    }
                    LineOutcome::Buffered
                }
            },
            RecordLine::Index(raw) => match self.open_status() {
                None => malformed(FieldTag::Index, MalformedReason::NoActiveRecord),
                Some(true) => malformed(FieldTag::Index, MalformedReason::AlreadySealed),
                Some(false) => {
                    self.seal(raw, sink)?;
                    LineOutcome::Sealed
                }
            },
            RecordLine::Reference(raw) => match self.open_status() {
                None => malformed(FieldTag::Reference, MalformedReason::NoActiveRecord),
                Some(_) => {
                    let target = self.intern(raw)?;
                    self.reference(target)
                }
            },
            RecordLine::Other => LineOutcome::Ignored,
        };

        trace!(line_number, ?outcome, "line processed");
        Ok(outcome)
    }

    /// End of stream: drop any unsealed record and hand over the
    /// resolution inputs
    pub fn finish(mut self) -> ParseOutput<V> {
        self.close_record();
        ParseOutput {
            table: self.table,
            deferred: self.deferred,
            stats: self.stats,
            distinct_keys: self.keys.len(),
        }
    }

    /// `None` when idle, otherwise whether the open record is sealed
    fn open_status(&self) -> Option<bool> {
        match &self.state {
            ParserState::Idle => None,
            ParserState::Accumulating(record) => Some(record.is_sealed()),
        }
    }

    fn unsealed_mut(&mut self) -> Option<&mut OpenRecord<V>> {
        match &mut self.state {
            ParserState::Accumulating(record) if !record.is_sealed() => Some(record),
            _ => None,
        }
    }

    fn close_record(&mut self) {
        if let ParserState::Accumulating(record) = std::mem::replace(&mut self.state, ParserState::Idle) {
            if !record.is_sealed() {
                self.stats.records_dropped += 1;
                debug!(title = %record.paper.title, "record closed before #index, dropped");
            }
        }
    }

    fn intern(&mut self, raw: &str) -> IngestResult<Arc<str>> {
        let raw = raw.trim();
        if let Some(id) = self.keys.get(raw) {
            return Ok(Arc::clone(self.keys.resolve(id)?));
        }
        let key: Arc<str> = Arc::from(raw);
        self.keys.lookup_or_assign(Arc::clone(&key))?;
        Ok(key)
    }

    fn seal<S>(&mut self, raw: &str, sink: &mut S) -> IngestResult<()>
    where
        S: GraphSink<VertexId = V>,
    {
        let key = self.intern(raw)?;
        let ParserState::Accumulating(record) = &mut self.state else {
            return Ok(());
        };

        record.paper.index_key = Some(Arc::clone(&key));
        let paper = sink.add_vertex(Vertex::Paper(record.paper.clone()));
        for author in record.authors.drain(..) {
            let v = sink.add_vertex(author.into());
            sink.add_edge(paper, v);
        }
        if let Some(year) = record.year.take() {
            let v = sink.add_vertex(year.into());
            sink.add_edge(paper, v);
        }
        if let Some(venue) = record.venue.take() {
            let v = sink.add_vertex(venue.into());
            sink.add_edge(paper, v);
        }

        if let Some(previous) = self.table.insert(Arc::clone(&key), paper) {
            debug!(key = %key, ?previous, "duplicate index key, later record wins");
        }
        record.sealed = Some((Arc::clone(&key), paper));
        let pending = std::mem::take(&mut record.pending);
        self.stats.records_sealed += 1;

        for target in pending {
            self.defer(&key, target);
        }
        Ok(())
    }

    fn reference(&mut self, target: Arc<str>) -> LineOutcome {
        let ParserState::Accumulating(record) = &mut self.state else {
            return LineOutcome::Ignored;
        };
        let source = record.sealed.as_ref().map(|(key, _)| Arc::clone(key));
        match source {
            Some(source) => self.defer(&source, target),
            None => {
                record.pending.push(target);
                LineOutcome::Deferred
            }
        }
    }

    fn defer(&mut self, source: &Arc<str>, target: Arc<str>) -> LineOutcome {
        if **source == *target {
            self.stats.self_references += 1;
            trace!(key = %source, "self reference discarded");
            return LineOutcome::SelfReference;
        }
        self.deferred.push(DeferredReference {
            source: Arc::clone(source),
            target,
        });
        self.stats.references_deferred += 1;
        LineOutcome::Deferred
    }
}

impl<V> Default for RecordParser<V>
where
    V: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

fn parse_citation_count(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}
