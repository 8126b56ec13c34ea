//! Entity value objects
//!
//! Each entity is built from a single text field of a dataset record.
//! Satellites (author, venue, year) are plain values keyed by their text;
//! the loader never deduplicates them, so equal text in two records still
//! produces two vertices unless the graph sink merges them itself.

use std::fmt;
use std::sync::Arc;

use super::kinds::VertexKind;

/// A publication record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paper {
    pub title: String,
    /// Identity key from the `#index` field. `None` until the record is sealed.
    pub index_key: Option<Arc<str>>,
    pub citation_count: Option<u32>,
}

impl Paper {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            index_key: None,
            citation_count: None,
        }
    }

    #[inline]
    pub fn index_key(&self) -> Option<&str> {
        self.index_key.as_deref()
    }
}

macro_rules! text_entity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(text: impl Into<String>) -> Self {
                Self(text.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_entity!(
    /// Author name from a `#@` field
    Author
);
text_entity!(
    /// Publication venue from a `#conf` field
    Venue
);
text_entity!(
    /// Publication year from a `#year` field, kept as written
    Year
);

/// A vertex payload in the typed graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vertex {
    Paper(Paper),
    Author(Author),
    Venue(Venue),
    Year(Year),
}

impl Vertex {
    pub fn kind(&self) -> VertexKind {
        match self {
            Vertex::Paper(_) => VertexKind::Paper,
            Vertex::Author(_) => VertexKind::Author,
            Vertex::Venue(_) => VertexKind::Venue,
            Vertex::Year(_) => VertexKind::Year,
        }
    }

    pub fn as_paper(&self) -> Option<&Paper> {
        match self {
            Vertex::Paper(p) => Some(p),
            _ => None,
        }
    }

    /// Display label: the title for papers, the text for satellites
    pub fn label(&self) -> &str {
        match self {
            Vertex::Paper(p) => &p.title,
            Vertex::Author(a) => a.as_str(),
            Vertex::Venue(v) => v.as_str(),
            Vertex::Year(y) => y.as_str(),
        }
    }
}

impl From<Paper> for Vertex {
    fn from(p: Paper) -> Self {
        Vertex::Paper(p)
    }
}

impl From<Author> for Vertex {
    fn from(a: Author) -> Self {
        Vertex::Author(a)
    }
}

impl From<Venue> for Vertex {
    fn from(v: Venue) -> Self {
        Vertex::Venue(v)
    }
}

impl From<Year> for Vertex {
    fn from(y: Year) -> Self {
        Vertex::Year(y)
    }
}
