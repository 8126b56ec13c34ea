//! Identity Alphabet
//!
//! Bidirectional, append-only mapping between values and dense integer ids.
//! Ids are assigned consecutively from zero in insertion order and are
//! never reused.

pub mod domain;
pub mod error;

pub use domain::{Alphabet, AlphabetEntry, EntryId, EntryType, Value};
pub use error::{AlphabetError, AlphabetResult};
