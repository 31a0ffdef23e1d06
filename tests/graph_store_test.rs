//! Tests for the graph store's CSV persistence

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use coactor_graph::error::CoactorError;
use coactor_graph::graph::{CoactorGraph, Edge};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Write a nodes file and an edges file into `dir`
fn write_graph_files(dir: &Path, nodes: &str, edges: &str) -> (PathBuf, PathBuf) {
    let nodes_path = dir.join("nodes.csv");
    let edges_path = dir.join("edges.csv");
    fs::write(&nodes_path, nodes).unwrap();
    fs::write(&edges_path, edges).unwrap();
    (nodes_path, edges_path)
}

fn sample_graph() -> CoactorGraph {
    let mut graph = CoactorGraph::new();
    graph.add_node("2975", "Laurence Fishburne");
    graph.add_node("6384", "Keanu Reeves");
    graph.add_node("530", "Carrie-Anne Moss");
    graph.add_node("1331", "Hugo Weaving");
    graph.add_node("3", "Downey, Jr., Robert");

    graph.add_edge("2975", "6384");
    graph.add_edge("530", "2975");
    graph.add_edge("6384", "530");
    graph.add_edge("1331", "6384");
    graph.add_edge("6384", "1331");
    graph.add_edge("3", "3");
    graph
}

fn node_set(graph: &CoactorGraph) -> HashSet<(String, String)> {
    graph
        .nodes()
        .iter()
        .map(|node| (node.id().to_string(), node.name().to_string()))
        .collect()
}

fn edge_set(graph: &CoactorGraph) -> HashSet<Edge> {
    graph.edges().iter().map(Edge::canonicalized).collect()
}

#[test]
fn test_round_trip_preserves_nodes_and_edges() {
    let temp_dir = TempDir::new().unwrap();
    let nodes_path = temp_dir.path().join("nodes.csv");
    let edges_path = temp_dir.path().join("edges.csv");

    let graph = sample_graph();
    graph.write_nodes_file(&nodes_path).unwrap();
    graph.write_edges_file(&edges_path).unwrap();

    let loaded = CoactorGraph::from_csv_files(&nodes_path, &edges_path).unwrap();

    assert_eq!(loaded.total_nodes(), 5);
    assert_eq!(loaded.total_edges(), 4);
    assert_eq!(node_set(&loaded), node_set(&graph));
    assert_eq!(edge_set(&loaded), edge_set(&graph));
    assert_eq!(loaded.max_degree_nodes(), graph.max_degree_nodes());
}

#[test]
fn test_written_files_have_headers_and_no_commas_in_names() {
    let temp_dir = TempDir::new().unwrap();
    let nodes_path = temp_dir.path().join("nodes.csv");
    let edges_path = temp_dir.path().join("edges.csv");

    let graph = sample_graph();
    graph.write_nodes_file(&nodes_path).unwrap();
    graph.write_edges_file(&edges_path).unwrap();

    let nodes = fs::read_to_string(&nodes_path).unwrap();
    let edges = fs::read_to_string(&edges_path).unwrap();

    assert!(nodes.starts_with("id,name\n"));
    assert!(edges.starts_with("source,target\n"));
    assert!(nodes.lines().all(|line| line.matches(',').count() == 1));
    assert!(nodes.contains("3,Downey Jr. Robert\n"));
}

#[test]
fn test_loaded_graph_keeps_deduplicating() {
    let temp_dir = TempDir::new().unwrap();
    let (nodes_path, edges_path) = write_graph_files(
        temp_dir.path(),
        "id,name\n1,Alice\n2,Bob\n",
        "source,target\n2,1\n",
    );

    let mut graph = CoactorGraph::from_csv_files(&nodes_path, &edges_path).unwrap();

    // Rows are loaded verbatim
    assert_eq!(graph.edges()[0], Edge::new("2", "1"));

    assert!(!graph.add_node("1", "Someone Else"));
    assert!(!graph.add_edge("1", "2"));
    assert!(graph.add_edge("1", "3"));
    assert_eq!(graph.total_nodes(), 2);
    assert_eq!(graph.total_edges(), 2);
}

#[test]
fn test_load_accepts_crlf() {
    let temp_dir = TempDir::new().unwrap();
    let (nodes_path, edges_path) = write_graph_files(
        temp_dir.path(),
        "id,name\r\n1,Alice\r\n2,Bob\r\n",
        "source,target\r\n1,2\r\n",
    );

    let graph = CoactorGraph::from_csv_files(&nodes_path, &edges_path).unwrap();

    assert_eq!(graph.nodes()[0].name(), "Alice");
    assert_eq!(graph.nodes()[1].id(), "2");
    assert!(graph.contains_edge("2", "1"));
}

#[test]
fn test_round_trip_keeps_names_with_quotes() {
    let temp_dir = TempDir::new().unwrap();
    let nodes_path = temp_dir.path().join("nodes.csv");
    let edges_path = temp_dir.path().join("edges.csv");

    let mut graph = CoactorGraph::new();
    graph.add_node("1", "\"Weird Al\" Yankovic");
    graph.add_node("2", "Dwayne \"The Rock\" Johnson");
    graph.add_node("3", "\"");
    graph.add_edge("1", "2");
    graph.write_nodes_file(&nodes_path).unwrap();
    graph.write_edges_file(&edges_path).unwrap();

    let written = fs::read_to_string(&nodes_path).unwrap();
    assert!(written.contains("1,\"Weird Al\" Yankovic\n"));

    let loaded = CoactorGraph::from_csv_files(&nodes_path, &edges_path).unwrap();
    assert_eq!(node_set(&loaded), node_set(&graph));
    assert_eq!(loaded.nodes()[0].name(), "\"Weird Al\" Yankovic");
    assert_eq!(edge_set(&loaded), edge_set(&graph));
}

#[test]
fn test_load_rejects_short_rows() {
    let temp_dir = TempDir::new().unwrap();
    let (nodes_path, edges_path) = write_graph_files(
        temp_dir.path(),
        "id,name\n1,Alice\n",
        "source,target\n1,2\nlonely\n",
    );

    let err = CoactorGraph::from_csv_files(&nodes_path, &edges_path).unwrap_err();

    match err {
        CoactorError::CsvRowError { path, line, .. } => {
            assert_eq!(path, edges_path);
            assert_eq!(line, 3);
        }
        other => panic!("Expected CsvRowError, got {other:?}"),
    }
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.csv");

    let err = CoactorGraph::from_csv_files(&missing, &missing).unwrap_err();
    assert!(matches!(err, CoactorError::FileReadError { .. }));
}

#[test]
fn test_write_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no-such-dir").join("nodes.csv");

    let err = sample_graph().write_nodes_file(&path).unwrap_err();
    assert!(matches!(err, CoactorError::FileWriteError { .. }));
}

#[test]
fn test_total_edges_counts_distinct_canonical_pairs() {
    let pairs = [
        ("a", "b"),
        ("b", "a"),
        ("a", "c"),
        ("c", "c"),
        ("c", "a"),
        ("b", "c"),
        ("b", "c"),
    ];

    let mut graph = CoactorGraph::new();
    let mut distinct = HashSet::new();
    for (a, b) in pairs {
        graph.add_edge(a, b);
        if a != b {
            distinct.insert(if a < b { (a, b) } else { (b, a) });
        }
    }

    assert_eq!(graph.total_edges(), distinct.len());
    assert_eq!(graph.total_edges(), 3);
}
