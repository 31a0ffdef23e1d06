//! Check command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::render_report;
use crate::config::CheckConfig;
use crate::executors::CommandExecutor;
use crate::graph::validate_files;

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking {} and {}...",
            style("🔍").cyan(),
            style(config.nodes.display()).bold(),
            style(config.edges.display()).bold()
        );

        let report = validate_files(&config.nodes, &config.edges)
            .wrap_err("Failed to validate graph files")?;

        let output = render_report(&report, config.format, config.max_entries)
            .into_diagnostic()
            .wrap_err("Failed to generate report")?;
        print!("{output}");

        // Exit with error code if problems found and requested
        if config.error_on_problems && !report.is_clean() {
            std::process::exit(1);
        }

        Ok(())
    }
}
