//! Build command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::error::CoactorError;
use crate::graph::CrawlPlan;

/// Configuration for the build command
///
/// Holds the API credential, the crawl parameters and where to write the
/// resulting graph.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// TMDb v3 API key
    pub api_key: String,
    /// Destination of the nodes file
    pub nodes_out: PathBuf,
    /// Destination of the edges file
    pub edges_out: PathBuf,
    /// Seed actor, release window, cast limit and round count
    pub plan: CrawlPlan,
    /// Output format for the summary
    pub format: OutputFormat,
}

impl BuildConfig {
    pub fn builder() -> BuildConfigBuilder {
        BuildConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct BuildConfigBuilder {
    api_key: Option<String>,
    nodes_out: Option<PathBuf>,
    edges_out: Option<PathBuf>,
    seed_id: Option<String>,
    seed_name: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    cast_limit: Option<usize>,
    rounds: Option<usize>,
    format: Option<OutputFormat>,
}

impl BuildConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_nodes_out(mut self, nodes_out: PathBuf) -> Self {
        self.nodes_out = Some(nodes_out);
        self
    }

    pub fn with_edges_out(mut self, edges_out: PathBuf) -> Self {
        self.edges_out = Some(edges_out);
        self
    }

    pub fn with_seed(mut self, seed_id: impl Into<String>, seed_name: impl Into<String>) -> Self {
        self.seed_id = Some(seed_id.into());
        self.seed_name = Some(seed_name.into());
        self
    }

    pub fn with_window(mut self, start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self.end_date = Some(end_date.into());
        self
    }

    pub fn with_cast_limit(mut self, cast_limit: usize) -> Self {
        self.cast_limit = Some(cast_limit);
        self
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = Some(rounds);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// `YYYY-MM-DD` shape check; the crawl compares dates as strings
fn is_iso_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn invalid(message: impl Into<String>) -> CoactorError {
    CoactorError::ConfigurationError {
        message: message.into(),
    }
}

impl crate::common::ConfigBuilder for BuildConfigBuilder {
    type Config = BuildConfig;

    fn build(self) -> Result<Self::Config, CoactorError> {
        let api_key = self.api_key.ok_or_else(|| missing_field("api_key"))?;
        if api_key.trim().is_empty() {
            return Err(invalid("API key must not be empty"));
        }

        let seed_id = self.seed_id.ok_or_else(|| missing_field("seed_id"))?;
        if seed_id.is_empty() {
            return Err(invalid("seed id must not be empty"));
        }

        let start_date = self.start_date.ok_or_else(|| missing_field("start_date"))?;
        let end_date = self.end_date.ok_or_else(|| missing_field("end_date"))?;
        for date in [&start_date, &end_date] {
            if !is_iso_date(date) {
                return Err(invalid(format!("'{date}' is not a YYYY-MM-DD date")));
            }
        }
        if start_date > end_date {
            return Err(invalid(format!(
                "start date {start_date} is after end date {end_date}"
            )));
        }

        let cast_limit = self.cast_limit.ok_or_else(|| missing_field("cast_limit"))?;
        if cast_limit == 0 {
            return Err(invalid("cast limit must be greater than zero"));
        }

        Ok(BuildConfig {
            api_key,
            nodes_out: self.nodes_out.ok_or_else(|| missing_field("nodes_out"))?,
            edges_out: self.edges_out.ok_or_else(|| missing_field("edges_out"))?,
            plan: CrawlPlan {
                seed_id,
                seed_name: self.seed_name.ok_or_else(|| missing_field("seed_name"))?,
                start_date: Some(start_date),
                end_date: Some(end_date),
                cast_limit,
                expansion_rounds: self.rounds.ok_or_else(|| missing_field("rounds"))?,
            },
            format: self.format.ok_or_else(|| missing_field("format"))?,
        })
    }
}
