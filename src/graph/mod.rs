//! # Co-actor Graph Module
//!
//! This module provides the graph store, the API-driven builder that fills
//! it, and checks for files the store has written.
//!
//! ## Components
//!
//! ### Graph Store
//! - **CoactorGraph**: undirected graph with deduplicated nodes and edges,
//!   loaded from and written to `nodes.csv` / `edges.csv`
//! - **Node** / **Edge**: an actor and an unordered actor pair
//!
//! ### Graph Building
//! - **CoactorGraphBuilder**: breadth-first expansion over a [`MovieApi`]
//! - **CrawlPlan**: seed actor, release window, cast limit and round count
//!
//! ### Validation
//! - **validate_files**: reports comma-bearing names, duplicates,
//!   self-loops and dangling edges in persisted files
//!
//! ## Example
//!
//! ```
//! use coactor_graph::graph::CoactorGraph;
//!
//! let mut graph = CoactorGraph::new();
//! graph.add_node("2975", "Laurence Fishburne");
//! graph.add_node("6384", "Keanu Reeves");
//! graph.add_node("530", "Carrie-Anne Moss");
//!
//! graph.add_edge("2975", "6384");
//! graph.add_edge("6384", "2975"); // same undirected edge
//! graph.add_edge("2975", "530");
//! graph.add_edge("530", "530"); // self-loops are dropped
//!
//! assert_eq!(graph.total_nodes(), 3);
//! assert_eq!(graph.total_edges(), 2);
//! assert_eq!(graph.max_degree_nodes().get("2975"), Some(&2));
//! ```
//!
//! [`MovieApi`]: crate::api::MovieApi

mod builder;
mod store;
mod types;
mod validate;

pub use builder::{BuildSummary, CoactorGraphBuilder, CrawlPlan};
pub use store::CoactorGraph;
pub use types::{DegreeEntry, Edge, GraphSummary, Node};
pub use validate::{Problem, ValidationReport, validate_files};
