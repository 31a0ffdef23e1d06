//! Build command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::render_report;
use crate::api::{ApiConfig, TmdbClient};
use crate::config::BuildConfig;
use crate::executors::CommandExecutor;
use crate::graph::CoactorGraphBuilder;
use crate::progress::ProgressReporter;

pub struct BuildExecutor;

impl CommandExecutor for BuildExecutor {
    type Config = BuildConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let plan = &config.plan;
        eprintln!(
            "{} Building co-actor graph for {} ({}), movies released {} to {}\n",
            style("🎬").cyan(),
            style(&plan.seed_name).bold(),
            plan.seed_id,
            plan.start_date.as_deref().unwrap_or("any time"),
            plan.end_date.as_deref().unwrap_or("any time")
        );
        eprintln!(
            "  {} Cast members per movie: {}",
            style("→").dim(),
            style(plan.cast_limit).yellow()
        );
        eprintln!(
            "  {} Expansion rounds: {}\n",
            style("→").dim(),
            style(plan.expansion_rounds).yellow()
        );

        let client = TmdbClient::new(ApiConfig::new(config.api_key.clone()))
            .wrap_err("Failed to create the TMDb client")?;

        // Create progress reporter if we're in an interactive terminal
        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        let mut builder = CoactorGraphBuilder::new(&client, plan.clone());
        let summary = builder.build(progress.as_mut());
        let graph = builder.into_graph();

        eprintln!(
            "\n{} Crawl finished after {} API calls",
            style("✓").green(),
            style(summary.api_calls).yellow()
        );

        graph
            .write_nodes_file(&config.nodes_out)
            .wrap_err("Failed to write the nodes file")?;
        graph
            .write_edges_file(&config.edges_out)
            .wrap_err("Failed to write the edges file")?;
        eprintln!(
            "{} Wrote {} and {}",
            style("💾").blue(),
            style(config.nodes_out.display()).bold(),
            style(config.edges_out.display()).bold()
        );

        let report = render_report(&graph.summary(), config.format, None)
            .into_diagnostic()
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        Ok(())
    }
}
