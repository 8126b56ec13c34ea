//! Entry ids, entry types, and the values an alphabet can hold

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Dense alphabet id
///
/// u32 supports ~4 billion distinct entries, well beyond any dataset dump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u32);

impl EntryId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Runtime type tag of an alphabet entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntryType(&'static str);

impl EntryType {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Type tag named after a Rust type
    pub fn of<T: ?Sized>() -> Self {
        Self(std::any::type_name::<T>())
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A value that can be stored in an [`Alphabet`](super::Alphabet)
pub trait AlphabetEntry: Clone + Eq + Hash + fmt::Debug {
    fn entry_type(&self) -> EntryType;

    /// Null sentinel check; null values are never stored
    fn is_null(&self) -> bool {
        false
    }
}

impl AlphabetEntry for String {
    fn entry_type(&self) -> EntryType {
        EntryType::of::<String>()
    }
}

impl AlphabetEntry for Arc<str> {
    fn entry_type(&self) -> EntryType {
        EntryType::of::<Arc<str>>()
    }
}

impl AlphabetEntry for i64 {
    fn entry_type(&self) -> EntryType {
        EntryType::of::<i64>()
    }
}

impl AlphabetEntry for u32 {
    fn entry_type(&self) -> EntryType {
        EntryType::of::<u32>()
    }
}

/// Dynamically typed entry for alphabets whose element type is only
/// known at runtime. `Null` is the null sentinel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Str(Arc<str>),
}

impl Value {
    pub fn str(s: impl AsRef<str>) -> Self {
        Value::Str(Arc::from(s.as_ref()))
    }
}

impl AlphabetEntry for Value {
    fn entry_type(&self) -> EntryType {
        match self {
            Value::Null => EntryType::new("null"),
            Value::Bool(_) => EntryType::new("bool"),
            Value::Int(_) => EntryType::new("int"),
            Value::Str(_) => EntryType::new("str"),
        }
    }

    fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
