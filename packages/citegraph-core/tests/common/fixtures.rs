//! Dataset fixtures

/// Builder for one record in the line format
#[derive(Default)]
pub struct RecordBuilder {
    lines: Vec<String>,
}

impl RecordBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            lines: vec![format!("#*{}", title)],
        }
    }

    pub fn authors(mut self, authors: &[&str]) -> Self {
        self.lines.push(format!("#@{}", authors.join(",")));
        self
    }

    pub fn year(mut self, year: &str) -> Self {
        self.lines.push(format!("#year{}", year));
        self
    }

    pub fn venue(mut self, venue: &str) -> Self {
        self.lines.push(format!("#conf{}", venue));
        self
    }

    pub fn citations(mut self, count: u32) -> Self {
        self.lines.push(format!("#citation{}", count));
        self
    }

    pub fn index(mut self, key: &str) -> Self {
        self.lines.push(format!("#index{}", key));
        self
    }

    pub fn cites(mut self, key: &str) -> Self {
        self.lines.push(format!("#%{}", key));
        self
    }

    pub fn build(self) -> String {
        let mut s = self.lines.join("\n");
        s.push('\n');
        s
    }
}

/// Join records with blank-line separators
pub fn dataset(records: &[String]) -> String {
    records.join("\n")
}

/// Three records in the shape of the public dump: `c` cites `a` and `b`,
/// `b` cites `a` and a paper outside the slice
pub fn sample_dump() -> String {
    dataset(&[
        RecordBuilder::new("Relational Model of Data")
            .authors(&["E. F. Codd"])
            .year("1970")
            .venue("CACM")
            .citations(5000)
            .index("a")
            .build(),
        RecordBuilder::new("System R")
            .authors(&["Astrahan", "Blasgen"])
            .year("1976")
            .venue("TODS")
            .index("b")
            .cites("a")
            .cites("outside")
            .build(),
        RecordBuilder::new("Query Optimization")
            .authors(&["Selinger"])
            .year("1979")
            .venue("SIGMOD")
            .index("c")
            .cites("a")
            .cites("b")
            .cites("c")
            .build(),
    ])
}
