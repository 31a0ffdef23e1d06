//! Core graph types
//!
//! This module contains the fundamental data structures used in the co-actor
//! graph.

use serde::Serialize;

/// An actor in the co-actor graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Node {
    id: String,
    name: String,
}

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An undirected edge between two actors who share a credit
///
/// Edges created through the graph store are canonical: `source < target`.
/// Edges loaded from a file keep the row order they were written in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    source: String,
    target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Canonical edge for an unordered pair, or `None` for a self-loop
    pub fn canonical(a: &str, b: &str) -> Option<Self> {
        match a.cmp(b) {
            std::cmp::Ordering::Less => Some(Self::new(a, b)),
            std::cmp::Ordering::Greater => Some(Self::new(b, a)),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Same pair with endpoints in sorted order
    pub fn canonicalized(&self) -> Self {
        if self.source <= self.target {
            self.clone()
        } else {
            Self::new(self.target.clone(), self.source.clone())
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// A node with its degree, as listed in summaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeEntry {
    pub id: String,
    pub name: Option<String>,
    pub degree: usize,
}

/// Aggregate statistics for a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub connected_components: usize,
    pub max_degree_nodes: Vec<DegreeEntry>,
}
