//! Stats command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;

#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub nodes: PathBuf,
    pub edges: PathBuf,
    pub format: OutputFormat,
    /// Maximum number of max-degree nodes to list (None = all)
    pub max_entries: Option<usize>,
}

impl StatsConfig {
    pub fn builder() -> StatsConfigBuilder {
        StatsConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct StatsConfigBuilder {
    nodes: Option<PathBuf>,
    edges: Option<PathBuf>,
    format: Option<OutputFormat>,
    max_entries: Option<usize>,
}

impl StatsConfigBuilder {
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
        self.max_entries = max_entries;
        self
    }
}

impl crate::common::ConfigBuilder for StatsConfigBuilder {
    type Config = StatsConfig;

    fn build(self) -> Result<Self::Config, crate::error::CoactorError> {
        Ok(StatsConfig {
            nodes: self.nodes.ok_or_else(|| missing_field("nodes"))?,
            edges: self.edges.ok_or_else(|| missing_field("edges"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            max_entries: self.max_entries,
        })
    }
}
