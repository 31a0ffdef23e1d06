//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::constants::output::{EDGES_FILE, NODES_FILE};

/// Paths of an existing graph's nodes and edges files
#[derive(Args, Debug, Clone)]
pub struct GraphFileArgs {
    /// Nodes file (`id,name`)
    #[arg(long, value_name = "PATH", default_value = NODES_FILE, env = "COACTOR_GRAPH_NODES")]
    pub nodes: PathBuf,

    /// Edges file (`source,target`)
    #[arg(long, value_name = "PATH", default_value = EDGES_FILE, env = "COACTOR_GRAPH_EDGES")]
    pub edges: PathBuf,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "COACTOR_GRAPH_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::CoactorError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::CoactorError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::CoactorError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Shorthand for a missing builder field
pub(crate) fn missing_field(field: &str) -> crate::error::CoactorError {
    crate::error::CoactorError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            missing_field("paths").to_string(),
            "Configuration error: Missing required field: paths"
        );
    }
}
