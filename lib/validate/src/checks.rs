//! The three structural checks of the measurement pattern.
//!
//! Only the exact class and property IRIs of [`vocab`](sensor_graph_model::vocab) are accepted.

use crate::CheckResult;
use sensor_graph_model::vocab::{bfo, cco, rdf};
use sensor_graph_model::{Graph, NamedNodeRef, SubjectRef, TermRef, TripleRef};

/// The maximum number of offending nodes listed in a failed completeness check.
const MAX_DETAILS: usize = 10;

/// Returns whether `node` is a resource typed `class`. Literals are never instances.
pub fn is_instance_of<'a>(
    graph: &Graph,
    node: impl Into<TermRef<'a>>,
    class: NamedNodeRef<'_>,
) -> bool {
    let subject = match node.into() {
        TermRef::NamedNode(node) => SubjectRef::from(node),
        TermRef::BlankNode(node) => SubjectRef::from(node),
        _ => return false,
    };
    graph.contains(TripleRef::new(subject, rdf::TYPE, class))
}

fn instances<'a>(
    graph: &'a Graph,
    class: NamedNodeRef<'a>,
) -> impl Iterator<Item = SubjectRef<'a>> + 'a {
    graph.subjects_for_predicate_object(rdf::TYPE, class)
}

/// Checks that each of the four classes has at least one instance.
pub fn check_types(graph: &Graph) -> CheckResult {
    let artifacts = instances(graph, cco::ARTIFACT).count();
    let conditions = instances(graph, bfo::STATE_OF_CONDITION).count();
    let records = instances(graph, cco::MEASUREMENT_INFORMATION_CONTENT_ENTITY).count();
    let units = instances(graph, cco::MEASUREMENT_UNIT).count();
    let counts = format!("Artifact={artifacts}, SDC={conditions}, MICE={records}, MU={units}");
    if [artifacts, conditions, records, units].contains(&0) {
        CheckResult::fail("types", format!("Missing required typed nodes: {counts}"))
    } else {
        CheckResult::pass("types", format!("Types present: {counts}"))
    }
}

/// Checks that at least one artifact, condition, record and unit are linked as the pattern requires.
pub fn check_pattern(graph: &Graph) -> CheckResult {
    let found = instances(graph, cco::ARTIFACT).any(|artifact| {
        graph
            .objects_for_subject_predicate(artifact, bfo::BEARER_OF)
            .filter(|condition| is_instance_of(graph, *condition, bfo::STATE_OF_CONDITION))
            .any(|condition| {
                graph
                    .subjects_for_predicate_object(cco::IS_MEASURE_OF, condition)
                    .filter(|record| {
                        is_instance_of(graph, *record, cco::MEASUREMENT_INFORMATION_CONTENT_ENTITY)
                    })
                    .any(|record| {
                        has_typed_object(
                            graph,
                            record,
                            cco::USES_MEASUREMENT_UNIT,
                            cco::MEASUREMENT_UNIT,
                        )
                    })
            })
    });
    if found {
        CheckResult::pass("pattern", "Complete measurement pattern found")
    } else {
        CheckResult::fail("pattern", "No complete measurement pattern found")
    }
}

/// Checks that every measurement record measures a typed condition and uses a typed unit.
pub fn check_completeness(graph: &Graph) -> CheckResult {
    let mut incomplete = instances(graph, cco::MEASUREMENT_INFORMATION_CONTENT_ENTITY)
        .filter(|record| {
            !has_typed_object(graph, *record, cco::IS_MEASURE_OF, bfo::STATE_OF_CONDITION)
                || !has_typed_object(
                    graph,
                    *record,
                    cco::USES_MEASUREMENT_UNIT,
                    cco::MEASUREMENT_UNIT,
                )
        })
        .map(|record| record.to_string())
        .collect::<Vec<_>>();
    if incomplete.is_empty() {
        return CheckResult::pass(
            "completeness",
            "Every measurement record links a condition and a unit",
        );
    }
    incomplete.sort();
    let count = incomplete.len();
    incomplete.truncate(MAX_DETAILS);
    CheckResult::fail(
        "completeness",
        format!("{count} measurement records lack a typed condition or unit"),
    )
    .with_details(incomplete)
}

fn has_typed_object(
    graph: &Graph,
    subject: SubjectRef<'_>,
    predicate: NamedNodeRef<'_>,
    class: NamedNodeRef<'_>,
) -> bool {
    graph
        .objects_for_subject_predicate(subject, predicate)
        .any(|object| is_instance_of(graph, object, class))
}
