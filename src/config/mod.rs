//! # Configuration Module
//!
//! This module provides configuration structures for all coactor-graph
//! commands. Each command has its own config module with a builder that
//! rejects missing or invalid values.
//!
//! ## Command Configurations
//!
//! - **BuildConfig**: Configuration for the `build` command that crawls TMDb
//! - **StatsConfig**: Configuration for the `stats` command
//! - **CheckConfig**: Configuration for the `check` command that validates
//!   graph files
//!
//! ## Example
//!
//! ```
//! use coactor_graph::cli::OutputFormat;
//! use coactor_graph::common::ConfigBuilder;
//! use coactor_graph::config::CheckConfig;
//!
//! let config = CheckConfig::builder()
//!     .with_files("nodes.csv".into(), "edges.csv".into())
//!     .with_format(OutputFormat::Human)
//!     .with_max_entries(None)
//!     .with_error_on_problems(true)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.error_on_problems);
//! ```

pub mod build;
pub mod check;
pub mod stats;

pub use build::BuildConfig;
pub use check::CheckConfig;
pub use stats::StatsConfig;
