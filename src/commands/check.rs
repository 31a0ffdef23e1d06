//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckConfig;
use crate::error::CoactorError;

impl FromCommand for CheckConfig {
    fn from_command(command: Commands) -> Result<Self, CoactorError> {
        match command {
            Commands::Check {
                files,
                format,
                max_entries,
                error_on_problems,
            } => CheckConfig::builder()
                .with_files(files.nodes, files.edges)
                .with_format(format.format)
                .with_max_entries(max_entries)
                .with_error_on_problems(error_on_problems)
                .build(),
            _ => Err(CoactorError::ConfigurationError {
                message: "Invalid command type for CheckConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckConfig);

/// Execute the check command for validating graph files
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckConfig::from_command(command)
        .wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
