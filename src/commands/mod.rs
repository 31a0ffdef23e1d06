//! Command implementations for the coactor-graph CLI
//!
//! This module contains the implementations for each CLI command:
//! - build: Crawl TMDb and write the co-actor graph
//! - stats: Summarize an existing graph
//! - check: Validate graph files

pub mod build;
pub mod check;
pub mod stats;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Build(..) => build::execute_build_command(command),
        Commands::Stats { .. } => stats::execute_stats_command(command),
        Commands::Check { .. } => check::execute_check_command(command),
    }
}
