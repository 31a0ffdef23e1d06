//! # Co-actor Graph - Build Actor Networks from TMDb
//!
//! coactor-graph crawls The Movie Database (TMDb) to build an undirected
//! co-actor network: every node is an actor, and an edge joins two actors
//! who were among the top-billed cast of the same movie released inside a
//! date window.
//!
//! ## Main Components
//!
//! - **Graph**: the deduplicating graph store, the breadth-first builder,
//!   and validation of persisted files
//! - **Api**: a blocking TMDb client with a fixed linear retry policy
//! - **Reports**: human-readable and JSON summaries
//!
//! ## Usage
//!
//! ### Crawling TMDb
//!
//! ```no_run
//! use std::path::Path;
//!
//! use coactor_graph::api::{ApiConfig, TmdbClient};
//! use coactor_graph::graph::{CoactorGraphBuilder, CrawlPlan};
//!
//! # fn main() -> miette::Result<()> {
//! let client = TmdbClient::new(ApiConfig::new("your-tmdb-api-key"))?;
//!
//! // Laurence Fishburne, movies released in 1999, top 5 cast, 2 rounds
//! let mut builder = CoactorGraphBuilder::new(&client, CrawlPlan::default());
//! let summary = builder.build(None);
//! println!("{} API calls", summary.api_calls);
//!
//! let graph = builder.into_graph();
//! graph.write_nodes_file(Path::new("nodes.csv"))?;
//! graph.write_edges_file(Path::new("edges.csv"))?;
//!
//! println!("nodes: {} edges: {}", graph.total_nodes(), graph.total_edges());
//! println!("max-degree: {:?}", graph.max_degree_nodes());
//! # Ok(())
//! # }
//! ```
//!
//! ### Driving the Builder Without the Network
//!
//! ```
//! use coactor_graph::api::{CastMember, MovieApi, MovieCredit};
//! use coactor_graph::graph::{CoactorGraphBuilder, CrawlPlan};
//!
//! struct OneMovie;
//!
//! impl MovieApi for OneMovie {
//!     fn get_movie_cast(&self, _movie: &str, _limit: usize, exclude: &[String]) -> Vec<CastMember> {
//!         ["1", "2", "3"]
//!             .iter()
//!             .filter(|id| !exclude.iter().any(|e| e == *id))
//!             .enumerate()
//!             .map(|(order, id)| CastMember {
//!                 id: Some(id.to_string()),
//!                 name: Some(format!("Actor {id}")),
//!                 order: Some(order as i64),
//!                 ..Default::default()
//!             })
//!             .collect()
//!     }
//!
//!     fn get_movie_credits_for_person(
//!         &self,
//!         _person: &str,
//!         _start: Option<&str>,
//!         _end: Option<&str>,
//!     ) -> Vec<MovieCredit> {
//!         vec![MovieCredit { id: Some("603".into()), ..Default::default() }]
//!     }
//! }
//!
//! let plan = CrawlPlan { seed_id: "1".into(), seed_name: "Actor 1".into(), ..CrawlPlan::default() };
//! let mut builder = CoactorGraphBuilder::new(&OneMovie, plan);
//! builder.build(None);
//!
//! // Everyone shares the one movie: a triangle
//! assert_eq!(builder.graph().total_nodes(), 3);
//! assert_eq!(builder.graph().total_edges(), 3);
//! ```
//!
//! ### Checking Persisted Files
//!
//! ```no_run
//! use std::path::Path;
//!
//! use coactor_graph::graph::validate_files;
//!
//! # fn main() -> miette::Result<()> {
//! let report = validate_files(Path::new("nodes.csv"), Path::new("edges.csv"))?;
//! for problem in &report.problems {
//!     println!("{problem}");
//! }
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod csv_parser;
mod utils;

// Public modules
pub mod api;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod progress;
pub mod reports;

/// Install the `tracing` subscriber, filtered by `RUST_LOG`
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(constants::logging::DEFAULT_FILTER));

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    init_logging();

    let cli = Cli::parse();
    execute_command(cli.into_command())
}
