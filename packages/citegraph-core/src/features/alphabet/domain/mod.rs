//! Alphabet domain model
//!
//! Invariant: for every entry `v` at position `i`, `lookup(v) == i` and
//! `resolve(i) == v`. The index map and the entry list are only ever
//! mutated together inside [`Alphabet::lookup_with`].

mod entry;

pub use entry::{AlphabetEntry, EntryId, EntryType, Value};

use ahash::AHashMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::io;

use super::error::{AlphabetError, AlphabetResult};

/// Append-only mapping between values and dense ids
#[derive(Debug, Clone)]
pub struct Alphabet<T: AlphabetEntry> {
    index: AHashMap<T, EntryId>,
    entries: Vec<T>,
    entry_type: Option<EntryType>,
    growth_locked: bool,
}

impl<T: AlphabetEntry> Alphabet<T> {
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: AHashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
            entry_type: None,
            growth_locked: false,
        }
    }

    /// Create an alphabet whose entry type is fixed up front
    pub fn with_entry_type(entry_type: EntryType) -> Self {
        let mut alphabet = Self::new();
        alphabet.entry_type = Some(entry_type);
        alphabet
    }

    /// Build an alphabet by assigning ids to `entries` in order
    pub fn from_entries(entries: impl IntoIterator<Item = T>) -> AlphabetResult<Self> {
        let iter = entries.into_iter();
        let mut alphabet = Self::with_capacity(iter.size_hint().0.max(8));
        for entry in iter {
            alphabet.lookup_or_assign(entry)?;
        }
        Ok(alphabet)
    }

    /// Return the id of `value`, assigning the next id if it is new
    ///
    /// Fails with [`AlphabetError::GrowthLocked`] when `value` is unknown
    /// and growth is locked.
    pub fn lookup_or_assign(&mut self, value: T) -> AlphabetResult<EntryId> {
        self.lookup_with(value, true)?
            .ok_or(AlphabetError::GrowthLocked)
    }

    /// Return the id of `value` without ever assigning one
    pub fn lookup(&self, value: &T) -> AlphabetResult<Option<EntryId>> {
        self.check_entry(value)?;
        Ok(self.index.get(value).copied())
    }

    /// Combined lookup. `Ok(None)` is the not-found sentinel, returned when
    /// the value is absent and either `add_if_absent` is false or growth
    /// is locked.
    pub fn lookup_with(&mut self, value: T, add_if_absent: bool) -> AlphabetResult<Option<EntryId>> {
        self.check_entry(&value)?;

        if let Some(&id) = self.index.get(&value) {
            return Ok(Some(id));
        }
        if !add_if_absent || self.growth_locked {
            return Ok(None);
        }

        let size = self.entries.len();
        let raw = u32::try_from(size).map_err(|_| AlphabetError::CapacityExceeded { size })?;
        let id = EntryId(raw);

        if self.entry_type.is_none() {
            self.entry_type = Some(value.entry_type());
        }
        self.index.insert(value.clone(), id);
        self.entries.push(value);
        Ok(Some(id))
    }

    /// Look up by a borrowed form of the entry (e.g. `&str` for `Arc<str>`)
    ///
    /// The borrowed form has a single static type, so no type guard applies.
    pub fn get<Q>(&self, key: &Q) -> Option<EntryId>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    pub fn resolve(&self, id: EntryId) -> AlphabetResult<&T> {
        self.entries
            .get(id.index())
            .ok_or(AlphabetError::IndexOutOfRange {
                id,
                size: self.entries.len(),
            })
    }

    pub fn resolve_many(&self, ids: &[EntryId]) -> AlphabetResult<Vec<&T>> {
        ids.iter().map(|&id| self.resolve(id)).collect()
    }

    /// Look up each value in order. Stops at the first failing value;
    /// values before it keep any ids they were assigned.
    pub fn lookup_many(
        &mut self,
        values: impl IntoIterator<Item = T>,
        add_if_absent: bool,
    ) -> AlphabetResult<Vec<Option<EntryId>>> {
        values
            .into_iter()
            .map(|v| self.lookup_with(v, add_if_absent))
            .collect()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in id order
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &T)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, v)| (EntryId(i as u32), v))
    }

    pub fn entry_type(&self) -> Option<EntryType> {
        self.entry_type
    }

    pub fn lock_growth(&mut self) {
        self.growth_locked = true;
    }

    pub fn unlock_growth(&mut self) {
        self.growth_locked = false;
    }

    pub fn growth_locked(&self) -> bool {
        self.growth_locked
    }

    fn check_entry(&self, value: &T) -> AlphabetResult<()> {
        if value.is_null() {
            return Err(AlphabetError::NullEntry);
        }
        match self.entry_type {
            Some(expected) if value.entry_type() != expected => Err(AlphabetError::InvalidEntry {
                expected,
                found: value.entry_type(),
            }),
            _ => Ok(()),
        }
    }
}

impl<T: AlphabetEntry> Default for Alphabet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AlphabetEntry + fmt::Display> Alphabet<T> {
    /// Write `"<id> => <entry>"` lines
    pub fn dump<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        for (id, entry) in self.iter() {
            writeln!(out, "{} => {}", id, entry)?;
        }
        Ok(())
    }
}

/// One entry per line, in id order
impl<T: AlphabetEntry + fmt::Display> fmt::Display for Alphabet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl<'a, T: AlphabetEntry> IntoIterator for &'a Alphabet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
