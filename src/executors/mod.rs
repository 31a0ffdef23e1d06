//! Command executors that handle the actual logic for each command

pub mod build;
pub mod check;
pub mod stats;

use miette::Result;

use crate::cli::OutputFormat;
use crate::error::CoactorError;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Render `subject` with the generator matching `format`
pub(crate) fn render_report<T>(
    subject: &T,
    format: OutputFormat,
    max_entries: Option<usize>,
) -> Result<String, CoactorError>
where
    HumanReportGenerator: ReportGenerator<T>,
    JsonReportGenerator: ReportGenerator<T>,
{
    match format {
        OutputFormat::Human => HumanReportGenerator::new(max_entries).generate_report(subject),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(subject),
    }
}
