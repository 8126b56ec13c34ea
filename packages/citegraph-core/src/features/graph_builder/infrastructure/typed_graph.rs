//! Typed bibliographic graph backed by petgraph
//!
//! Directed: paper → satellite, citing paper → cited paper.
//! Simple: self-loops and parallel edges are ignored. Vertices are never merged.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use tracing::trace;

use crate::features::graph_builder::ports::GraphSink;
use crate::shared::models::{EdgeKind, Paper, Vertex, VertexKind};

#[derive(Debug, Clone, Default)]
pub struct TypedGraph {
    graph: DiGraph<Vertex, EdgeKind>,
}

impl TypedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn vertex(&self, id: NodeIndex) -> Option<&Vertex> {
        self.graph.node_weight(id)
    }

    pub fn vertices(&self) -> impl Iterator<Item = (NodeIndex, &Vertex)> {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    pub fn vertices_of_kind(&self, kind: VertexKind) -> Vec<(NodeIndex, &Vertex)> {
        self.vertices().filter(|(_, v)| v.kind() == kind).collect()
    }

    pub fn count_of_kind(&self, kind: VertexKind) -> usize {
        self.vertices().filter(|(_, v)| v.kind() == kind).count()
    }

    /// `(source, target)` pairs of every edge with the given kind, in insertion order
    pub fn edges_of_kind(&self, kind: EdgeKind) -> Vec<(NodeIndex, NodeIndex)> {
        self.graph
            .edge_references()
            .filter(|e| *e.weight() == kind)
            .map(|e| (e.source(), e.target()))
            .collect()
    }

    pub fn has_edge(&self, source: NodeIndex, target: NodeIndex) -> bool {
        self.graph.find_edge(source, target).is_some()
    }

    pub fn edge_kind(&self, source: NodeIndex, target: NodeIndex) -> Option<EdgeKind> {
        self.graph
            .find_edge(source, target)
            .and_then(|e| self.graph.edge_weight(e).copied())
    }

    /// Outgoing neighbors
    pub fn neighbors(&self, id: NodeIndex) -> Vec<NodeIndex> {
        self.graph.neighbors_directed(id, Direction::Outgoing).collect()
    }

    /// Paper vertex with the given index key (O(V) scan)
    pub fn find_paper(&self, index_key: &str) -> Option<(NodeIndex, &Paper)> {
        self.vertices().find_map(|(idx, v)| match v.as_paper() {
            Some(p) if p.index_key() == Some(index_key) => Some((idx, p)),
            _ => None,
        })
    }

    /// Index keys of the papers cited by `index_key`, sorted
    pub fn cited_keys(&self, index_key: &str) -> Vec<String> {
        let Some((idx, _)) = self.find_paper(index_key) else {
            return Vec::new();
        };
        let mut keys: Vec<String> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .filter(|e| *e.weight() == EdgeKind::Cites)
            .filter_map(|e| self.graph[e.target()].as_paper())
            .filter_map(|p| p.index_key().map(str::to_string))
            .collect();
        keys.sort();
        keys
    }

    pub fn inner(&self) -> &DiGraph<Vertex, EdgeKind> {
        &self.graph
    }
}

impl GraphSink for TypedGraph {
    type VertexId = NodeIndex;

    fn add_vertex(&mut self, vertex: Vertex) -> NodeIndex {
        self.graph.add_node(vertex)
    }

    fn add_edge(&mut self, source: NodeIndex, target: NodeIndex) {
        if source == target || self.graph.find_edge(source, target).is_some() {
            trace!(?source, ?target, "skipping loop or parallel edge");
            return;
        }
        let (Some(s), Some(t)) = (self.graph.node_weight(source), self.graph.node_weight(target))
        else {
            trace!(?source, ?target, "skipping edge to unknown vertex");
            return;
        };
        let kind = EdgeKind::between(s.kind(), t.kind());
        self.graph.add_edge(source, target, kind);
    }
}
