//! Stats command executor

use miette::{IntoDiagnostic, Result, WrapErr};

use super::render_report;
use crate::config::StatsConfig;
use crate::executors::CommandExecutor;
use crate::graph::CoactorGraph;

pub struct StatsExecutor;

impl CommandExecutor for StatsExecutor {
    type Config = StatsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let graph = CoactorGraph::from_csv_files(&config.nodes, &config.edges)
            .wrap_err("Failed to load the graph")?;

        let report = render_report(&graph.summary(), config.format, config.max_entries)
            .into_diagnostic()
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        Ok(())
    }
}
