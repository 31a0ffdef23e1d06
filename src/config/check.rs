//! Check command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;

/// Configuration for the check command
///
/// This struct contains all options for validating a persisted graph.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Nodes file to validate
    pub nodes: PathBuf,
    /// Edges file to validate
    pub edges: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Maximum number of problems to report (None = all)
    pub max_entries: Option<usize>,
    /// Whether to exit with error code if problems are found
    pub error_on_problems: bool,
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckConfigBuilder {
    nodes: Option<PathBuf>,
    edges: Option<PathBuf>,
    format: Option<OutputFormat>,
    max_entries: Option<Option<usize>>,
    error_on_problems: Option<bool>,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files(mut self, nodes: PathBuf, edges: PathBuf) -> Self {
        self.nodes = Some(nodes);
        self.edges = Some(edges);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_entries(mut self, max_entries: Option<usize>) -> Self {
        self.max_entries = Some(max_entries);
        self
    }

    pub fn with_error_on_problems(mut self, error_on_problems: bool) -> Self {
        self.error_on_problems = Some(error_on_problems);
        self
    }
}

impl crate::common::ConfigBuilder for CheckConfigBuilder {
    type Config = CheckConfig;

    fn build(self) -> Result<Self::Config, crate::error::CoactorError> {
        Ok(CheckConfig {
            nodes: self.nodes.ok_or_else(|| missing_field("nodes"))?,
            edges: self.edges.ok_or_else(|| missing_field("edges"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            max_entries: self.max_entries.ok_or_else(|| missing_field("max_entries"))?,
            error_on_problems: self
                .error_on_problems
                .ok_or_else(|| missing_field("error_on_problems"))?,
        })
    }
}
