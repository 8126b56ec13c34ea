// Citation dataset loader - end-to-end tests
//
// Test Categories:
// 1. Record sealing
// 2. Record boundaries
// 3. Citation resolution
// 4. Malformed input
// 5. File loading

mod common;

use citegraph_core::{
    DblpLoader, EdgeKind, IngestError, LoadReport, LoaderConfig, MalformedPolicy, TypedGraph,
    VertexKind,
};
use common::{dataset, sample_dump, RecordBuilder, RecordingSink};
use pretty_assertions::assert_eq;
use std::io::{Cursor, Write};

fn load_recording(input: &str) -> (RecordingSink, LoadReport) {
    let mut sink = RecordingSink::new();
    let report = DblpLoader::default()
        .load(Cursor::new(input.to_string()), &mut sink)
        .unwrap();
    (sink, report)
}

fn load_typed(input: &str) -> (TypedGraph, LoadReport) {
    let mut graph = TypedGraph::new();
    let report = DblpLoader::default()
        .load(Cursor::new(input.to_string()), &mut graph)
        .unwrap();
    (graph, report)
}

// ============================================================
// 1. Record sealing
// ============================================================

#[test]
fn test_sealing_writes_record_and_satellites_once() {
    let (sink, report) = load_recording("#*T\n#@A1,A2\n#year Y\n#conf V\n#index I\n");

    assert_eq!(
        sink.kinds(),
        vec![
            VertexKind::Paper,
            VertexKind::Author,
            VertexKind::Author,
            VertexKind::Year,
            VertexKind::Venue,
        ]
    );
    assert_eq!(sink.edges, vec![(0, 1), (0, 2), (0, 3), (0, 4)]);
    assert_eq!(report.parse.records_sealed, 1);

    let paper = sink.vertices[0].as_paper().unwrap();
    assert_eq!(paper.title, "T");
    assert_eq!(paper.index_key(), Some("I"));
}

#[test]
fn test_satellites_never_deduplicated() {
    let input = dataset(&[
        RecordBuilder::new("P1").authors(&["Shared"]).venue("VLDB").index("1").build(),
        RecordBuilder::new("P2").authors(&["Shared"]).venue("VLDB").index("2").build(),
    ]);
    let (sink, _) = load_recording(&input);

    assert_eq!(sink.count(VertexKind::Author), 2);
    assert_eq!(sink.count(VertexKind::Venue), 2);
}

#[test]
fn test_citation_count_carried_on_paper() {
    let input = RecordBuilder::new("T").citations(42).index("1").build();
    let (graph, _) = load_typed(&input);

    let (_, paper) = graph.find_paper("1").unwrap();
    assert_eq!(paper.citation_count, Some(42));
}

// ============================================================
// 2. Record boundaries
// ============================================================

#[test]
fn test_blank_line_reset_contributes_nothing() {
    let (sink, report) = load_recording("#*T\n#@A\n#year2000\n\n");

    assert!(sink.vertices.is_empty());
    assert!(sink.edges.is_empty());
    assert_eq!(report.parse.records_dropped, 1);
}

#[test]
fn test_unsealed_record_at_end_of_stream_dropped() {
    let (sink, report) = load_recording("#*Done\n#index 1\n\n#*Unfinished\n#@A\n#%1");

    assert_eq!(sink.count(VertexKind::Paper), 1);
    assert_eq!(report.parse.records_dropped, 1);
    assert_eq!(report.resolution.resolved, 0);
}

#[test]
fn test_crlf_line_endings() {
    let (graph, _) = load_typed("#*A\r\n#index a\r\n\r\n#*B\r\n#index b\r\n#%a\r\n");

    assert_eq!(graph.cited_keys("b"), vec!["a".to_string()]);
}

// ============================================================
// 3. Citation resolution
// ============================================================

#[test]
fn test_self_reference_suppressed() {
    let (sink, report) = load_recording("#*T\n#index I\n#%I\n");

    assert_eq!(report.parse.self_references, 1);
    assert_eq!(report.parse.references_deferred, 0);
    assert_eq!(sink.edges.len(), 0);
}

#[test]
fn test_forward_reference_resolved() {
    let input = dataset(&[
        RecordBuilder::new("A").index("a").cites("b").build(),
        RecordBuilder::new("B").index("b").build(),
    ]);
    let (graph, report) = load_typed(&input);

    assert_eq!(report.resolution.resolved, 1);
    assert_eq!(graph.cited_keys("a"), vec!["b".to_string()]);
    let (a, _) = graph.find_paper("a").unwrap();
    let (b, _) = graph.find_paper("b").unwrap();
    assert_eq!(graph.edge_kind(a, b), Some(EdgeKind::Cites));
}

#[test]
fn test_dangling_reference_tolerated() {
    let (sink, report) = load_recording("#*A\n#index a\n#%missing\n");

    assert_eq!(report.resolution.dangling, 1);
    assert!(report.malformed.is_empty());
    assert!(sink.edges.is_empty());
}

#[test]
fn test_keys_compared_exactly() {
    let input = dataset(&[
        RecordBuilder::new("A").index("007").cites("7").build(),
        RecordBuilder::new("B").index("7").build(),
    ]);
    let (graph, _) = load_typed(&input);

    assert_eq!(graph.cited_keys("007"), vec!["7".to_string()]);
    assert!(graph.cited_keys("7").is_empty());
}

#[test]
fn test_duplicate_index_key_later_record_wins() {
    let input = dataset(&[
        RecordBuilder::new("X").index("k").cites("y").build(),
        RecordBuilder::new("Y").index("y").build(),
        RecordBuilder::new("Z").index("k").build(),
    ]);
    let (sink, report) = load_recording(&input);

    // Both records with key "k" stay in the graph, but citations made
    // under "k" attach to the record that claimed it last
    assert_eq!(sink.count(VertexKind::Paper), 3);
    assert_eq!(
        sink.paper_edges(),
        vec![("Z".to_string(), "Y".to_string())]
    );
    assert_eq!(report.resolution.resolved, 1);
}

#[test]
fn test_two_records_end_to_end() {
    let first = RecordBuilder::new("First")
        .authors(&["Ann"])
        .year("2001")
        .venue("KDD")
        .index("1")
        .build();
    let second = RecordBuilder::new("Second")
        .authors(&["Bob"])
        .year("2002")
        .venue("ICDE")
        .index("2")
        .cites("1")
        .build();

    let (graph, _) = load_typed(&dataset(&[first.clone(), second.clone()]));
    assert_eq!(graph.count_of_kind(VertexKind::Paper), 2);
    assert_eq!(graph.count_of_kind(VertexKind::Author), 2);
    assert_eq!(graph.count_of_kind(VertexKind::Venue), 2);
    assert_eq!(graph.count_of_kind(VertexKind::Year), 2);
    assert_eq!(graph.edges_of_kind(EdgeKind::Cites).len(), 1);
    assert_eq!(graph.cited_keys("2"), vec!["1".to_string()]);

    // Reversed record order yields the same citation edge set
    let (swapped, _) = load_typed(&dataset(&[second, first]));
    assert_eq!(swapped.cited_keys("2"), vec!["1".to_string()]);
    assert_eq!(swapped.edges_of_kind(EdgeKind::Cites).len(), 1);
}

#[test]
fn test_sample_dump() {
    let (sink, report) = load_recording(&sample_dump());

    let citations = sink.paper_edges();
    assert_eq!(
        citations,
        vec![
            ("System R".to_string(), "Relational Model of Data".to_string()),
            ("Query Optimization".to_string(), "Relational Model of Data".to_string()),
            ("Query Optimization".to_string(), "System R".to_string()),
        ]
    );
    assert_eq!(report.parse.records_sealed, 3);
    assert_eq!(report.parse.self_references, 1);
    assert_eq!(report.resolution.resolved, 3);
    assert_eq!(report.resolution.dangling, 1);
    assert_eq!(report.distinct_keys, 4);
}

// ============================================================
// 4. Malformed input
// ============================================================

#[test]
fn test_malformed_lines_skipped_by_default() {
    let input = "#citation 3\n#index x\n#%y\n#*Real\n#index r\n";
    let (graph, report) = load_typed(input);

    let lines: Vec<usize> = report.malformed.iter().map(|m| m.line_number).collect();
    assert_eq!(lines, vec![1, 2, 3]);
    assert_eq!(graph.count_of_kind(VertexKind::Paper), 1);
    assert!(graph.find_paper("x").is_none());
}

#[test]
fn test_malformed_abort_policy() {
    let loader =
        DblpLoader::new(LoaderConfig::default().on_malformed(MalformedPolicy::Abort)).unwrap();
    let mut graph = TypedGraph::new();
    let err = loader
        .load(Cursor::new("#*Ok\n#index 1\n\n#%2\n"), &mut graph)
        .unwrap_err();

    assert!(matches!(err, IngestError::Malformed(ref m) if m.line_number == 4));
    assert_eq!(graph.count_of_kind(VertexKind::Paper), 1);
}

// ============================================================
// 5. File loading
// ============================================================

#[test]
fn test_load_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(sample_dump().as_bytes()).unwrap();

    let mut graph = TypedGraph::new();
    let report = DblpLoader::default()
        .load_from_path(file.path(), &mut graph)
        .unwrap();

    assert_eq!(report.parse.records_sealed, 3);
    assert_eq!(graph.cited_keys("c"), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_load_from_missing_path() {
    let mut graph = TypedGraph::new();
    let err = DblpLoader::default()
        .load_from_path("/nonexistent/dblp.txt", &mut graph)
        .unwrap_err();

    assert!(matches!(err, IngestError::Io(_)));
    assert_eq!(graph.vertex_count(), 0);
}

#[test]
fn test_record_limit_from_yaml() {
    let config = LoaderConfig::from_yaml_str("max_records: 2\nprogress_interval: 1\n").unwrap();
    let loader = DblpLoader::new(config).unwrap();
    let mut graph = TypedGraph::new();
    let report = loader
        .load(Cursor::new(sample_dump()), &mut graph)
        .unwrap();

    assert!(report.truncated);
    assert_eq!(report.parse.records_sealed, 2);
    // "b" → "a" resolves; "c" was never read
    assert_eq!(report.resolution.resolved, 1);
    assert!(graph.find_paper("c").is_none());
}
