//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::CoactorError;
use crate::graph::{GraphSummary, ValidationReport};
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_entries: Option<usize>,
}

impl HumanReportGenerator {
    /// `max_entries` caps the listed max-degree nodes or problems
    pub fn new(max_entries: Option<usize>) -> Self {
        Self { max_entries }
    }

    fn write_truncation_note(
        &self,
        output: &mut String,
        shown: usize,
        total: usize,
        what: &str,
    ) -> Result<(), CoactorError> {
        if shown < total {
            writeln!(
                output,
                "\n{} Showing {} of {} {}.",
                style("ℹ️").blue(),
                style(shown).yellow(),
                style(total).yellow(),
                what
            )?;
        }
        Ok(())
    }
}

impl ReportGenerator<GraphSummary> for HumanReportGenerator {
    fn generate_report(&self, summary: &GraphSummary) -> Result<String, CoactorError> {
        let mut output = String::new();

        writeln!(output, "\n{} Co-actor graph\n", style("🎬").cyan())?;
        writeln!(
            output,
            "  {} {} {}",
            style("•").dim(),
            style(summary.total_nodes).yellow().bold(),
            pluralize("node", summary.total_nodes)
        )?;
        writeln!(
            output,
            "  {} {} {}",
            style("•").dim(),
            style(summary.total_edges).yellow().bold(),
            pluralize("edge", summary.total_edges)
        )?;
        writeln!(
            output,
            "  {} {} connected {}",
            style("•").dim(),
            style(summary.connected_components).yellow().bold(),
            pluralize("component", summary.connected_components)
        )?;

        let total = summary.max_degree_nodes.len();
        if total == 0 {
            writeln!(output, "\n{} No edges, so no max-degree nodes", style("ℹ").blue())?;
            return Ok(output);
        }

        writeln!(output, "\n  {} Max-degree {}:", style("⭐").yellow(), pluralize("node", total))?;
        let shown = self.max_entries.map_or(total, |limit| limit.min(total));
        for entry in summary.max_degree_nodes.iter().take(shown) {
            let name = entry.name.as_deref().unwrap_or("(unnamed)");
            writeln!(
                output,
                "    {} {} {} (degree {})",
                style("•").dim(),
                style(&entry.id).bold(),
                name,
                style(entry.degree).yellow()
            )?;
        }
        self.write_truncation_note(&mut output, shown, total, "max-degree nodes")?;

        Ok(output)
    }
}

impl ReportGenerator<ValidationReport> for HumanReportGenerator {
    fn generate_report(&self, report: &ValidationReport) -> Result<String, CoactorError> {
        let mut output = String::new();

        if report.is_clean() {
            writeln!(
                output,
                "\n{} Checked {} {} and {} {}: no problems found.",
                style("✅").green().bold(),
                report.nodes_checked,
                pluralize("node", report.nodes_checked),
                report.edges_checked,
                pluralize("edge", report.edges_checked)
            )?;
            return Ok(output);
        }

        let total = report.problems.len();
        writeln!(
            output,
            "\n{} Found {} {}:\n",
            style("❌").red().bold(),
            style(total).red().bold(),
            pluralize("problem", total)
        )?;

        let shown = self.max_entries.map_or(total, |limit| limit.min(total));
        for problem in report.problems.iter().take(shown) {
            writeln!(output, "  {} {}", style("•").dim(), problem)?;
        }
        self.write_truncation_note(&mut output, shown, total, "problems")?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DegreeEntry, Problem};

    fn summary() -> GraphSummary {
        GraphSummary {
            total_nodes: 3,
            total_edges: 2,
            connected_components: 1,
            max_degree_nodes: vec![DegreeEntry {
                id: "2975".to_string(),
                name: Some("Laurence Fishburne".to_string()),
                degree: 2,
            }],
        }
    }

    #[test]
    fn test_graph_summary_report() {
        let report = HumanReportGenerator::new(None)
            .generate_report(&summary())
            .unwrap();

        assert!(report.contains("Co-actor graph"));
        assert!(report.contains("Laurence Fishburne"));
        assert!(report.contains("degree"));
    }

    #[test]
    fn test_empty_graph_report() {
        let empty = GraphSummary {
            total_nodes: 0,
            total_edges: 0,
            connected_components: 0,
            max_degree_nodes: vec![],
        };
        let report = HumanReportGenerator::new(None).generate_report(&empty).unwrap();

        assert!(report.contains("no max-degree nodes"));
    }

    #[test]
    fn test_validation_report_truncates() {
        let report = ValidationReport {
            nodes_checked: 2,
            edges_checked: 3,
            problems: (0..4)
                .map(|line| Problem::SelfLoop {
                    line,
                    id: "x".to_string(),
                })
                .collect(),
        };

        let output = HumanReportGenerator::new(Some(2))
            .generate_report(&report)
            .unwrap();

        assert!(output.contains("problems"));
        assert_eq!(output.matches("self-loop").count(), 2);
        assert!(output.contains("Showing"));
    }

    #[test]
    fn test_clean_validation_report() {
        let report = ValidationReport {
            nodes_checked: 1,
            edges_checked: 0,
            problems: vec![],
        };
        let output = HumanReportGenerator::new(None).generate_report(&report).unwrap();

        assert!(output.contains("no problems found"));
    }
}
