//! Consistency checks for persisted node and edge files

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use super::types::Edge;
use crate::csv_parser::read_records_from_file;
use crate::error::CoactorError;

/// A single violation found in the files, with its line number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    CommaInName {
        line: usize,
        id: String,
        name: String,
    },
    DuplicateNode {
        line: usize,
        id: String,
    },
    SelfLoop {
        line: usize,
        id: String,
    },
    DuplicateEdge {
        line: usize,
        source: String,
        target: String,
    },
    DanglingEdge {
        line: usize,
        source: String,
        target: String,
        missing: String,
    },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::CommaInName { line, id, name } => {
                write!(f, "nodes line {line}: name of {id} contains a comma: {name:?}")
            }
            Problem::DuplicateNode { line, id } => {
                write!(f, "nodes line {line}: duplicate node {id}")
            }
            Problem::SelfLoop { line, id } => write!(f, "edges line {line}: self-loop on {id}"),
            Problem::DuplicateEdge {
                line,
                source,
                target,
            } => write!(f, "edges line {line}: duplicate edge {source} - {target}"),
            Problem::DanglingEdge {
                line,
                source,
                target,
                missing,
            } => write!(
                f,
                "edges line {line}: edge {source} - {target} references unknown node {missing}"
            ),
        }
    }
}

/// Result of validating a pair of graph files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub nodes_checked: usize,
    pub edges_checked: usize,
    pub problems: Vec<Problem>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Check the files for comma-bearing names, duplicate nodes, self-loops,
/// duplicate undirected edges and edges to unknown nodes
pub fn validate_files(nodes_path: &Path, edges_path: &Path) -> Result<ValidationReport, CoactorError> {
    let mut report = ValidationReport::default();
    let mut node_ids = HashSet::new();

    for record in read_records_from_file(nodes_path)? {
        let (id, _) = record.pair(nodes_path)?;
        report.nodes_checked += 1;

        // Fields are never quoted, so a comma in a name splits it
        if record.fields.len() > 2 {
            report.problems.push(Problem::CommaInName {
                line: record.line,
                id: id.clone(),
                name: record.fields[1..].join(","),
            });
        }
        if !node_ids.insert(id.clone()) {
            report.problems.push(Problem::DuplicateNode {
                line: record.line,
                id,
            });
        }
    }

    let mut seen_edges = HashSet::new();
    for record in read_records_from_file(edges_path)? {
        let (source, target) = record.pair(edges_path)?;
        report.edges_checked += 1;
        let edge = Edge::new(source.clone(), target.clone());

        if edge.is_self_loop() {
            report.problems.push(Problem::SelfLoop {
                line: record.line,
                id: source.clone(),
            });
        }
        if !seen_edges.insert(edge.canonicalized()) {
            report.problems.push(Problem::DuplicateEdge {
                line: record.line,
                source: source.clone(),
                target: target.clone(),
            });
        }

        let mut endpoints = vec![source.as_str()];
        if target != source {
            endpoints.push(target.as_str());
        }
        for endpoint in endpoints {
            if !node_ids.contains(endpoint) {
                report.problems.push(Problem::DanglingEdge {
                    line: record.line,
                    source: source.clone(),
                    target: target.clone(),
                    missing: endpoint.to_string(),
                });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_display() {
        let problem = Problem::DuplicateEdge {
            line: 4,
            source: "1".to_string(),
            target: "2".to_string(),
        };
        assert_eq!(problem.to_string(), "edges line 4: duplicate edge 1 - 2");
    }

    #[test]
    fn test_problem_serializes_with_kind_tag() {
        let problem = Problem::SelfLoop {
            line: 2,
            id: "7".to_string(),
        };
        let json = serde_json::to_value(&problem).unwrap();

        assert_eq!(json["kind"], "self_loop");
        assert_eq!(json["id"], "7");
    }
}
