//! Stats command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::StatsConfig;
use crate::error::CoactorError;

impl FromCommand for StatsConfig {
    fn from_command(command: Commands) -> Result<Self, CoactorError> {
        match command {
            Commands::Stats {
                files,
                format,
                max_entries,
            } => StatsConfig::builder()
                .with_files(files.nodes, files.edges)
                .with_format(format.format)
                .with_max_entries(max_entries)
                .build(),
            _ => Err(CoactorError::ConfigurationError {
                message: "Invalid command type for StatsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(StatsConfig);

/// Execute the stats command for summarizing a persisted graph
pub fn execute_stats_command(command: Commands) -> Result<()> {
    let config = StatsConfig::from_command(command)
        .wrap_err("Failed to parse stats command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::stats::StatsExecutor;
    StatsExecutor::execute(config)
}
