//! Line classification

/// One input line, tagged by its field marker. Payloads borrow the
/// remainder of the line after the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLine<'a> {
    Blank,
    Title(&'a str),
    Authors(&'a str),
    Year(&'a str),
    Venue(&'a str),
    Citations(&'a str),
    Index(&'a str),
    Reference(&'a str),
    Other,
}

/// Classify a line by its marker. A line of only whitespace is blank.
pub fn classify(line: &str) -> RecordLine<'_> {
    if line.trim().is_empty() {
        return RecordLine::Blank;
    }
    if let Some(rest) = line.strip_prefix("#*") {
        RecordLine::Title(rest)
    } else if let Some(rest) = line.strip_prefix("#@") {
        RecordLine::Authors(rest)
    } else if let Some(rest) = line.strip_prefix("#year") {
        RecordLine::Year(rest)
    } else if let Some(rest) = line.strip_prefix("#conf") {
        RecordLine::Venue(rest)
    } else if let Some(rest) = line.strip_prefix("#citation") {
        RecordLine::Citations(rest)
    } else if let Some(rest) = line.strip_prefix("#index") {
        RecordLine::Index(rest)
    } else if let Some(rest) = line.strip_prefix("#%") {
        RecordLine::Reference(rest)
    } else {
        RecordLine::Other
    }
}
