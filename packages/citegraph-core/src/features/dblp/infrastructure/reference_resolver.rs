//! Deferred citation resolution
//!
//! Runs once after the whole stream is read. Each deferred pair becomes a
//! citing → cited edge when both keys name sealed records and the two
//! records differ. Dangling targets (papers outside the loaded slice) are
//! expected and dropped silently.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::features::dblp::domain::{DeferredReference, ResolutionTable};
use crate::features::graph_builder::GraphSink;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionSummary {
    /// Edges handed to the sink
    pub resolved: usize,
    /// Target key never sealed
    pub dangling: usize,
    pub missing_source: usize,
    /// Source and target resolved to the same vertex
    pub self_references: usize,
}

impl ResolutionSummary {
    pub fn total(&self) -> usize {
        self.resolved + self.dangling + self.missing_source + self.self_references
    }
}

pub struct ReferenceResolver;

impl ReferenceResolver {
    /// Add an edge for every resolvable pair, in the order given
    pub fn resolve<S, V>(
        table: &ResolutionTable<V>,
        references: &[DeferredReference],
        sink: &mut S,
    ) -> ResolutionSummary
    where
        S: GraphSink<VertexId = V>,
        V: Copy + Eq + Hash + Debug,
    {
        let mut summary = ResolutionSummary::default();

        for reference in references {
            let Some(target) = table.get(&reference.target) else {
                trace!(key = %reference.target, "dangling reference");
                summary.dangling += 1;
                continue;
            };
            let Some(source) = table.get(&reference.source) else {
                summary.missing_source += 1;
                continue;
            };
            if source == target {
                summary.self_references += 1;
                continue;
            }
            sink.add_edge(source, target);
            summary.resolved += 1;
        }

        debug!(
            resolved = summary.resolved,
            dangling = summary.dangling,
            missing_source = summary.missing_source,
            "citation references resolved"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::graph_builder::TypedGraph;
    use crate::shared::models::{EdgeKind, Paper, Vertex};
    use petgraph::graph::NodeIndex;
    use std::sync::Arc;

    fn sealed(graph: &mut TypedGraph, table: &mut ResolutionTable<NodeIndex>, key: &str) -> NodeIndex {
        let mut paper = Paper::new(format!("paper {}", key));
        paper.index_key = Some(Arc::from(key));
        let v = graph.add_vertex(Vertex::Paper(paper));
        table.insert(Arc::from(key), v);
        v
    }

    #[test]
    fn test_resolves_known_pairs_in_order() {
        let mut graph = TypedGraph::new();
        let mut table = ResolutionTable::new();
        let a = sealed(&mut graph, &mut table, "a");
        let b = sealed(&mut graph, &mut table, "b");
        let c = sealed(&mut graph, &mut table, "c");

        let refs = vec![
            DeferredReference::new("a", "c"),
            DeferredReference::new("a", "b"),
            DeferredReference::new("c", "b"),
        ];
        let summary = ReferenceResolver::resolve(&table, &refs, &mut graph);

        assert_eq!(summary.resolved, 3);
        assert_eq!(graph.edges_of_kind(EdgeKind::Cites), vec![(a, c), (a, b), (c, b)]);
    }

    #[test]
    fn test_dangling_and_missing_source_dropped() {
        let mut graph = TypedGraph::new();
        let mut table = ResolutionTable::new();
        sealed(&mut graph, &mut table, "a");

        let refs = vec![
            DeferredReference::new("a", "nowhere"),
            DeferredReference::new("ghost", "a"),
        ];
        let summary = ReferenceResolver::resolve(&table, &refs, &mut graph);

        assert_eq!(
            summary,
            ResolutionSummary {
                resolved: 0,
                dangling: 1,
                missing_source: 1,
                self_references: 0,
            }
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_same_vertex_rechecked() {
        let mut graph = TypedGraph::new();
        let mut table = ResolutionTable::new();
        let a = sealed(&mut graph, &mut table, "a");
        // Two keys pointing at one record
        table.insert(Arc::from("alias"), a);

        let refs = vec![DeferredReference::new("alias", "a")];
        let summary = ReferenceResolver::resolve(&table, &refs, &mut graph);

        assert_eq!(summary.self_references, 1);
        assert_eq!(summary.total(), 1);
        assert_eq!(graph.edge_count(), 0);
    }
}
