//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::error::CoactorError;
use crate::graph::{GraphSummary, ValidationReport};

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator<GraphSummary> for JsonReportGenerator {
    fn generate_report(&self, summary: &GraphSummary) -> Result<String, CoactorError> {
        let max_degree: serde_json::Map<String, serde_json::Value> = summary
            .max_degree_nodes
            .iter()
            .map(|entry| (entry.id.clone(), json!(entry.degree)))
            .collect();

        let report = json!({
            "total_nodes": summary.total_nodes,
            "total_edges": summary.total_edges,
            "connected_components": summary.connected_components,
            "max_degree": max_degree,
            "max_degree_nodes": summary.max_degree_nodes,
        });

        Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
    }
}

impl ReportGenerator<ValidationReport> for JsonReportGenerator {
    fn generate_report(&self, report: &ValidationReport) -> Result<String, CoactorError> {
        let report = json!({
            "clean": report.is_clean(),
            "nodes_checked": report.nodes_checked,
            "edges_checked": report.edges_checked,
            "problems": report.problems,
        });

        Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DegreeEntry, Problem};

    #[test]
    fn test_graph_summary_json() {
        let summary = GraphSummary {
            total_nodes: 4,
            total_edges: 2,
            connected_components: 2,
            max_degree_nodes: vec![
                DegreeEntry {
                    id: "a".to_string(),
                    name: Some("Alice".to_string()),
                    degree: 1,
                },
                DegreeEntry {
                    id: "b".to_string(),
                    name: None,
                    degree: 1,
                },
            ],
        };

        let output = JsonReportGenerator::new().generate_report(&summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["total_nodes"], 4);
        assert_eq!(value["max_degree"]["a"], 1);
        assert_eq!(value["max_degree"]["b"], 1);
        assert_eq!(value["max_degree_nodes"][1]["name"], serde_json::Value::Null);
    }

    #[test]
    fn test_validation_json() {
        let report = ValidationReport {
            nodes_checked: 2,
            edges_checked: 1,
            problems: vec![Problem::DanglingEdge {
                line: 2,
                source: "1".to_string(),
                target: "9".to_string(),
                missing: "9".to_string(),
            }],
        };

        let output = JsonReportGenerator::new().generate_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["clean"], false);
        assert_eq!(value["problems"][0]["kind"], "dangling_edge");
        assert_eq!(value["problems"][0]["missing"], "9");
    }
}
