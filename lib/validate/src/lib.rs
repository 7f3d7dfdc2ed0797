//! Structural validation of a measurement graph.
//!
//! The graph is loaded from Turtle and three checks are run against it: every class of the
//! pattern has instances, at least one complete pattern exists, and every measurement record is
//! linked to a typed condition and a typed unit. The outcome maps onto a process [`ExitStatus`].

mod checks;
mod error;
mod report;

pub use checks::{check_completeness, check_pattern, check_types, is_instance_of};
pub use error::ValidateError;
pub use report::{CheckResult, ExitStatus, ValidationReport};

use oxttl::TurtleParser;
use sensor_graph_model::Graph;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Parses a Turtle document into a graph.
pub fn parse_graph(reader: impl Read) -> Result<Graph, ValidateError> {
    let mut graph = Graph::new();
    for triple in TurtleParser::new().for_reader(reader) {
        graph.insert(&triple?);
    }
    Ok(graph)
}

/// Loads the Turtle file at `path`.
pub fn load_graph(path: &Path) -> Result<Graph, ValidateError> {
    if !path.exists() {
        return Err(ValidateError::Missing(path.to_path_buf()));
    }
    let graph = parse_graph(BufReader::new(File::open(path)?))?;
    info!(path = %path.display(), triples = graph.len(), "Loaded graph");
    Ok(graph)
}

/// Runs every check, in order.
pub fn validate(graph: &Graph) -> ValidationReport {
    ValidationReport {
        triples: graph.len(),
        results: vec![
            check_types(graph),
            check_pattern(graph),
            check_completeness(graph),
        ],
    }
}

/// Loads and validates the Turtle file at `path`.
pub fn validate_file(path: &Path) -> Result<ValidationReport, ValidateError> {
    Ok(validate(&load_graph(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    const VALID: &str = r#"
@prefix bfo: <http://purl.obolibrary.org/obo/BFO_> .
@prefix cco: <https://www.commoncoreontologies.org/ont> .
@prefix ex: <http://example.org/measurement/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

ex:Artifact_1 a cco:00000995 ; bfo:0000196 ex:SDC_1 .
ex:SDC_1 a bfo:0000020 .
ex:MU_1 a cco:00000120 .
ex:MICE_1 a cco:00001163 ;
    cco:00001966 ex:SDC_1 ;
    cco:00001863 ex:MU_1 ;
    cco:00001865 "98.6"^^xsd:decimal .
"#;

    #[test]
    fn valid_document_passes() {
        let report = validate(&parse_graph(VALID.as_bytes()).unwrap());
        assert_eq!(report.triples, 8);
        assert!(report.all_passed());
        assert_eq!(report.exit_status(), ExitStatus::Passed);
    }

    #[test]
    fn document_without_records_fails() {
        let document = "@prefix cco: <https://www.commoncoreontologies.org/ont> .\n\
                        <http://example.org/measurement/a> a cco:00000995 .\n";
        let report = validate(&parse_graph(document.as_bytes()).unwrap());
        assert_eq!(report.failure_count(), 2);
        assert_eq!(report.exit_status(), ExitStatus::AssertionFailed);
    }

    #[test]
    fn missing_file() {
        let dir = TempDir::new().unwrap();
        let error = validate_file(dir.child("measure_cco.ttl").path()).unwrap_err();
        assert!(matches!(error, ValidateError::Missing(_)));
        assert_eq!(error.exit_status().code(), 2);
    }

    #[test]
    fn syntax_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.child("broken.ttl");
        file.write_str("<http://example.org/a> <http://example.org/b> .")
            .unwrap();
        let error = validate_file(file.path()).unwrap_err();
        assert!(matches!(error, ValidateError::Parse(_)));
        assert_eq!(error.exit_status(), ExitStatus::UnexpectedError);
    }
}
