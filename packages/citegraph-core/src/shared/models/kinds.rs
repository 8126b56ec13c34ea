//! Vertex and edge kinds for the typed bibliographic graph

use std::fmt;

/// Kind of a graph vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VertexKind {
    Paper,
    Author,
    Venue,
    Year,
}

impl VertexKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VertexKind::Paper => "paper",
            VertexKind::Author => "author",
            VertexKind::Venue => "venue",
            VertexKind::Year => "year",
        }
    }
}

impl fmt::Display for VertexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a graph edge, derived from the kinds of its endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeKind {
    /// Paper → Author
    Authored,
    /// Paper → Venue
    PublishedIn,
    /// Paper → Year
    PublishedYear,
    /// Paper → Paper (citing → cited)
    Cites,
    /// Any other pairing; the loader never produces these
    Related,
}

impl EdgeKind {
    /// Classify an edge by its endpoint kinds
    pub fn between(source: VertexKind, target: VertexKind) -> Self {
        match (source, target) {
            (VertexKind::Paper, VertexKind::Author) => EdgeKind::Authored,
            (VertexKind::Paper, VertexKind::Venue) => EdgeKind::PublishedIn,
            (VertexKind::Paper, VertexKind::Year) => EdgeKind::PublishedYear,
            (VertexKind::Paper, VertexKind::Paper) => EdgeKind::Cites,
            _ => EdgeKind::Related,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Authored => "authored",
            EdgeKind::PublishedIn => "published_in",
            EdgeKind::PublishedYear => "published_year",
            EdgeKind::Cites => "cites",
            EdgeKind::Related => "related",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
