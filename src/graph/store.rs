use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use petgraph::graph::{NodeIndex, UnGraph};
use tracing::info;

use super::types::{DegreeEntry, Edge, GraphSummary, Node};
use crate::constants::output::{EDGES_HEADER, NODES_HEADER};
use crate::csv_parser::read_records_from_file;
use crate::error::CoactorError;
use crate::utils::string::strip_commas;

/// In-memory undirected co-actor graph
///
/// Nodes and edges are kept in insertion order alongside companion sets
/// used for deduplication. Graphs mutated only through [`add_node`] and
/// [`add_edge`] never hold duplicate nodes, duplicate undirected edges, or
/// self-loops.
///
/// [`add_node`]: CoactorGraph::add_node
/// [`add_edge`]: CoactorGraph::add_edge
#[derive(Debug, Clone, Default)]
pub struct CoactorGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_ids: HashSet<String>,
    edge_set: HashSet<Edge>,
}

impl CoactorGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a graph from a nodes file (`id,name`) and an edges file
    /// (`source,target`)
    ///
    /// Rows are taken verbatim; only the uniqueness sets are rebuilt, with
    /// edges re-canonicalized.
    pub fn from_csv_files(nodes_path: &Path, edges_path: &Path) -> Result<Self, CoactorError> {
        let mut graph = Self::new();

        for record in read_records_from_file(nodes_path)? {
            let (id, name) = record.pair(nodes_path)?;
            graph.node_ids.insert(id.clone());
            graph.nodes.push(Node::new(id, name));
        }

        for record in read_records_from_file(edges_path)? {
            let (source, target) = record.pair(edges_path)?;
            let edge = Edge::new(source, target);
            graph.edge_set.insert(edge.canonicalized());
            graph.edges.push(edge);
        }

        Ok(graph)
    }

    /// Insert a node unless its id is already present
    ///
    /// Commas are stripped from the name. Returns `true` if the node was
    /// inserted; a duplicate id keeps the first-seen name.
    pub fn add_node(&mut self, id: &str, name: &str) -> bool {
        if self.node_ids.contains(id) {
            return false;
        }

        self.node_ids.insert(id.to_string());
        self.nodes.push(Node::new(id, strip_commas(name)));
        true
    }

    /// Insert an undirected edge unless it is a self-loop or already present
    ///
    /// Returns `true` if the edge was inserted.
    pub fn add_edge(&mut self, source: &str, target: &str) -> bool {
        let Some(edge) = Edge::canonical(source, target) else {
            return false;
        };

        if self.edge_set.contains(&edge) {
            return false;
        }

        self.edge_set.insert(edge.clone());
        self.edges.push(edge);
        true
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_ids.contains(id)
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        Edge::canonical(a, b).is_some_and(|edge| self.edge_set.contains(&edge))
    }

    pub fn total_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn total_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Undirected degree of every node that appears in an edge
    pub fn degrees(&self) -> HashMap<&str, usize> {
        let mut degrees: HashMap<&str, usize> = HashMap::new();
        for edge in &self.edges {
            *degrees.entry(edge.source()).or_default() += 1;
            *degrees.entry(edge.target()).or_default() += 1;
        }
        degrees
    }

    /// All node ids sharing the highest degree
    ///
    /// Empty when the graph has no edges.
    pub fn max_degree_nodes(&self) -> BTreeMap<String, usize> {
        let degrees = self.degrees();
        let Some(&max) = degrees.values().max() else {
            return BTreeMap::new();
        };

        degrees
            .into_iter()
            .filter(|&(_, degree)| degree == max)
            .map(|(id, degree)| (id.to_string(), degree))
            .collect()
    }

    /// Convert to a petgraph undirected graph
    ///
    /// Edge endpoints missing from the node list get a node with an empty
    /// name.
    pub fn to_petgraph(&self) -> UnGraph<Node, ()> {
        let mut graph = UnGraph::with_capacity(self.nodes.len(), self.edges.len());
        let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

        for node in &self.nodes {
            indices
                .entry(node.id())
                .or_insert_with(|| graph.add_node(node.clone()));
        }

        for edge in &self.edges {
            let a = *indices
                .entry(edge.source())
                .or_insert_with(|| graph.add_node(Node::new(edge.source(), "")));
            let b = *indices
                .entry(edge.target())
                .or_insert_with(|| graph.add_node(Node::new(edge.target(), "")));
            graph.add_edge(a, b, ());
        }

        graph
    }

    pub fn connected_components(&self) -> usize {
        petgraph::algo::connected_components(&self.to_petgraph())
    }

    pub fn summary(&self) -> GraphSummary {
        let names: HashMap<&str, &str> = self
            .nodes
            .iter()
            .map(|node| (node.id(), node.name()))
            .collect();

        let max_degree_nodes = self
            .max_degree_nodes()
            .into_iter()
            .map(|(id, degree)| DegreeEntry {
                name: names.get(id.as_str()).map(|name| name.to_string()),
                id,
                degree,
            })
            .collect();

        GraphSummary {
            total_nodes: self.total_nodes(),
            total_edges: self.total_edges(),
            connected_components: self.connected_components(),
            max_degree_nodes,
        }
    }

    pub fn write_nodes<W: Write>(&self, out: &mut W) -> Result<(), CoactorError> {
        let mut writer = csv_writer(out);
        writer.write_record(NODES_HEADER)?;
        for node in &self.nodes {
            writer.write_record([node.id(), node.name()])?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_edges<W: Write>(&self, out: &mut W) -> Result<(), CoactorError> {
        let mut writer = csv_writer(out);
        writer.write_record(EDGES_HEADER)?;
        for edge in &self.edges {
            writer.write_record([edge.source(), edge.target()])?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_nodes_file(&self, path: &Path) -> Result<(), CoactorError> {
        write_file(path, |out| self.write_nodes(out))?;
        info!(path = %path.display(), nodes = self.total_nodes(), "finished writing nodes");
        Ok(())
    }

    pub fn write_edges_file(&self, path: &Path) -> Result<(), CoactorError> {
        write_file(path, |out| self.write_edges(out))?;
        info!(path = %path.display(), edges = self.total_edges(), "finished writing edges");
        Ok(())
    }
}

/// Fields are written as-is; names never contain commas
fn csv_writer<W: Write>(out: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out)
}

fn write_file<F>(path: &Path, write: F) -> Result<(), CoactorError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), CoactorError>,
{
    let to_write_error = |source: std::io::Error| CoactorError::FileWriteError {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut out = BufWriter::new(file);
    write(&mut out).map_err(|err| match err {
        CoactorError::Io(source) => to_write_error(source),
        CoactorError::Csv(err) => match err.into_kind() {
            csv::ErrorKind::Io(source) => to_write_error(source),
            kind => to_write_error(std::io::Error::other(format!("{kind:?}"))),
        },
        other => other,
    })?;
    out.flush().map_err(to_write_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = CoactorGraph::new();

        assert!(graph.add_node("1", "Keanu Reeves"));
        assert!(!graph.add_node("1", "Someone Else"));

        assert_eq!(graph.total_nodes(), 1);
        assert_eq!(graph.nodes()[0].name(), "Keanu Reeves");
    }

    #[test]
    fn test_add_node_strips_commas() {
        let mut graph = CoactorGraph::new();
        graph.add_node("3", "Robert Downey, Jr.");

        assert_eq!(graph.nodes()[0].name(), "Robert Downey Jr.");
    }

    #[test]
    fn test_add_edge_is_order_insensitive() {
        let mut graph = CoactorGraph::new();

        assert!(graph.add_edge("a", "b"));
        assert!(!graph.add_edge("b", "a"));
        assert!(!graph.add_edge("a", "a"));

        assert_eq!(graph.total_edges(), 1);
        assert!(graph.contains_edge("b", "a"));
        assert!(!graph.contains_edge("a", "a"));
    }

    #[test]
    fn test_max_degree_nodes() {
        let mut graph = CoactorGraph::new();
        assert!(graph.max_degree_nodes().is_empty());

        graph.add_edge("a", "b");
        graph.add_edge("a", "c");

        let expected: BTreeMap<String, usize> = [("a".to_string(), 2)].into_iter().collect();
        assert_eq!(graph.max_degree_nodes(), expected);
    }

    #[test]
    fn test_max_degree_nodes_includes_ties() {
        let mut graph = CoactorGraph::new();
        graph.add_edge("a", "b");
        graph.add_edge("c", "d");

        let max = graph.max_degree_nodes();
        assert_eq!(max.len(), 4);
        assert!(max.values().all(|&degree| degree == 1));
    }

    #[test]
    fn test_write_nodes_and_edges() {
        let mut graph = CoactorGraph::new();
        graph.add_node("2975", "Laurence Fishburne");
        graph.add_node("6384", "Keanu Reeves");
        graph.add_edge("6384", "2975");

        let mut nodes = Vec::new();
        graph.write_nodes(&mut nodes).unwrap();
        assert_eq!(
            String::from_utf8(nodes).unwrap(),
            "id,name\n2975,Laurence Fishburne\n6384,Keanu Reeves\n"
        );

        let mut edges = Vec::new();
        graph.write_edges(&mut edges).unwrap();
        assert_eq!(String::from_utf8(edges).unwrap(), "source,target\n2975,6384\n");
    }

    #[test]
    fn test_connected_components() {
        let mut graph = CoactorGraph::new();
        graph.add_node("a", "A");
        graph.add_node("b", "B");
        graph.add_node("c", "C");
        graph.add_node("lonely", "L");
        graph.add_edge("a", "b");
        graph.add_edge("c", "d");

        // {a,b}, {c,d}, {lonely}; "d" has no node row
        assert_eq!(graph.connected_components(), 3);
        assert_eq!(graph.to_petgraph().node_count(), 5);
    }

    #[test]
    fn test_summary_attaches_names() {
        let mut graph = CoactorGraph::new();
        graph.add_node("a", "Alice");
        graph.add_edge("a", "b");
        graph.add_edge("a", "c");

        let summary = graph.summary();
        assert_eq!(summary.total_nodes, 1);
        assert_eq!(summary.total_edges, 2);
        assert_eq!(summary.max_degree_nodes, vec![DegreeEntry {
            id: "a".to_string(),
            name: Some("Alice".to_string()),
            degree: 2,
        }]);
    }
}
