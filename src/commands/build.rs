//! Build command implementation

use console::style;
use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::BuildConfig;
use crate::constants::api::API_KEY_ENV;
use crate::error::CoactorError;

impl FromCommand for BuildConfig {
    fn from_command(command: Commands) -> Result<Self, CoactorError> {
        match command {
            Commands::Build(args) => {
                let mut builder = BuildConfig::builder()
                    .with_nodes_out(args.nodes_out)
                    .with_edges_out(args.edges_out)
                    .with_seed(args.seed_id, args.seed_name)
                    .with_window(args.start_date, args.end_date)
                    .with_cast_limit(args.cast_limit)
                    .with_rounds(args.rounds)
                    .with_format(args.format.format);

                if let Some(api_key) = args.api_key {
                    builder = builder.with_api_key(api_key);
                }
                builder.build()
            }
            _ => Err(CoactorError::ConfigurationError {
                message: "Invalid command type for BuildConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(BuildConfig);

/// The API key of a build command, if one was given and is non-empty
fn api_key_of(command: &Commands) -> Option<&str> {
    match command {
        Commands::Build(args) => args.api_key.as_deref().filter(|key| !key.trim().is_empty()),
        _ => None,
    }
}

/// Execute the build command that crawls TMDb for the co-actor graph
///
/// Without an API key this prints usage and returns without writing files.
pub fn execute_build_command(command: Commands) -> Result<()> {
    if api_key_of(&command).is_none() {
        eprintln!(
            "{} Set {} in your environment (or pass --api-key) to build the graph.",
            style("ℹ").blue(),
            style(API_KEY_ENV).bold()
        );
        eprintln!(
            "  {} The graph is written to nodes.csv and edges.csv in the current directory.",
            style("→").dim()
        );
        return Ok(());
    }

    let config = BuildConfig::from_command(command)
        .wrap_err("Failed to parse build command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::build::BuildExecutor;
    BuildExecutor::execute(config)
}
