//! Alphabet error types

use thiserror::Error;

use super::domain::{EntryId, EntryType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// Value type differs from the type established by the first entry
    #[error("Non-matching entry type '{found}', alphabet holds '{expected}'")]
    InvalidEntry {
        expected: EntryType,
        found: EntryType,
    },

    /// Null sentinel passed where a value is required
    #[error("Can't look up a null entry in an alphabet")]
    NullEntry,

    #[error("Entry id {id} out of range (size {size})")]
    IndexOutOfRange { id: EntryId, size: usize },

    /// Unknown value while growth is locked
    #[error("Alphabet growth is locked; unknown entry not assigned")]
    GrowthLocked,

    /// Ids are u32; refusing to wrap
    #[error("Alphabet capacity exceeded ({size} entries)")]
    CapacityExceeded { size: usize },
}

pub type AlphabetResult<T> = std::result::Result<T, AlphabetError>;
