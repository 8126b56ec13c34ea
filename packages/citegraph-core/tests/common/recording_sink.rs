//! GraphSink that records every call in order

use citegraph_core::{GraphSink, Vertex, VertexKind};

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<(usize, usize)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kinds(&self) -> Vec<VertexKind> {
        self.vertices.iter().map(Vertex::kind).collect()
    }

    pub fn count(&self, kind: VertexKind) -> usize {
        self.vertices.iter().filter(|v| v.kind() == kind).count()
    }

    /// Paper → paper edges as `(citing title, cited title)`, in call order
    pub fn paper_edges(&self) -> Vec<(String, String)> {
        self.edges
            .iter()
            .filter(|&&(s, t)| {
                self.vertices[s].kind() == VertexKind::Paper
                    && self.vertices[t].kind() == VertexKind::Paper
            })
            .map(|&(s, t)| {
                (
                    self.vertices[s].label().to_string(),
                    self.vertices[t].label().to_string(),
                )
            })
            .collect()
    }
}

impl GraphSink for RecordingSink {
    type VertexId = usize;

    fn add_vertex(&mut self, vertex: Vertex) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    fn add_edge(&mut self, source: usize, target: usize) {
        self.edges.push((source, target));
    }
}
