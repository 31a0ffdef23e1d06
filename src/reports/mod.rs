//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//!
//! Both render a [`GraphSummary`] and a [`ValidationReport`].
//!
//! [`GraphSummary`]: crate::graph::GraphSummary
//! [`ValidationReport`]: crate::graph::ValidationReport

pub mod human;
pub mod json;

use crate::error::CoactorError;

/// Common trait for all report generators
pub trait ReportGenerator<T: ?Sized> {
    /// Render `subject` as a report
    fn generate_report(&self, subject: &T) -> Result<String, CoactorError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
