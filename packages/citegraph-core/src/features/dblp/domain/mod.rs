//! Dataset domain models

mod line;

pub use line::{classify, RecordLine};

use ahash::AHashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

// ============================================================
// Malformed input
// ============================================================

/// Continuation fields that require an open record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTag {
    Citation,
    Index,
    Reference,
}

impl FieldTag {
    pub fn marker(&self) -> &'static str {
        match self {
            FieldTag::Citation => "#citation",
            FieldTag::Index => "#index",
            FieldTag::Reference => "#%",
        }
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// No `#*` line opened a record
    NoActiveRecord,
    /// `#index` on a record that is already sealed
    AlreadySealed,
}

/// A continuation line that could not be applied to any record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// 1-based line number in the input
    pub line_number: usize,
    pub field: FieldTag,
    pub reason: MalformedReason,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.reason {
            MalformedReason::NoActiveRecord => "with no active record",
            MalformedReason::AlreadySealed => "on an already sealed record",
        };
        write!(f, "line {}: {} {}", self.line_number, self.field, reason)
    }
}

// ============================================================
// Deferred references
// ============================================================

/// Citation edge waiting for the end of the stream: `source` cites `target`
///
/// Both sides are identity keys from `#index` fields, compared by exact
/// string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeferredReference {
    pub source: Arc<str>,
    pub target: Arc<str>,
}

impl DeferredReference {
    pub fn new(source: impl Into<Arc<str>>, target: impl Into<Arc<str>>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    #[inline]
    pub fn is_self_reference(&self) -> bool {
        self.source == self.target
    }
}

// ============================================================
// Resolution table
// ============================================================

/// Identity key → vertex of the sealed record with that key
#[derive(Debug, Clone)]
pub struct ResolutionTable<V> {
    records: AHashMap<Arc<str>, V>,
}

impl<V: Copy + Eq + Hash> ResolutionTable<V> {
    pub fn new() -> Self {
        Self {
            records: AHashMap::new(),
        }
    }

    /// Register a sealed record. A later record with the same key replaces
    /// the earlier one; the replaced vertex is returned. References are
    /// resolved by key, so citations read under the earlier record resolve
    /// from the replacement.
    pub fn insert(&mut self, key: Arc<str>, vertex: V) -> Option<V> {
        self.records.insert(key, vertex)
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.records.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<V: Copy + Eq + Hash> Default for ResolutionTable<V> {
    fn default() -> Self {
        Self::new()
    }
}
