use crate::ids::EntityIds;
use sensor_graph_model::vocab::{bfo, cco, measurement, owl, rdf, rdfs, xsd};
use sensor_graph_model::{Graph, Literal, NamedNode, NamedNodeRef, Reading, Term, Triple};
use std::collections::HashSet;

/// How many distinct entities of each kind a context has emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityCounts {
    pub artifacts: usize,
    pub conditions: usize,
    pub units: usize,
    pub records: usize,
}

/// Accumulates the triples of one build.
///
/// Artifacts, conditions and units are described once, the first time a reading mentions them.
/// Every reading adds one measurement record. Triples are kept in emission order so that the
/// serialized output only depends on the input rows.
#[derive(Debug, Default)]
pub struct BuildContext {
    triples: Vec<Triple>,
    artifacts: HashSet<NamedNode>,
    conditions: HashSet<NamedNode>,
    units: HashSet<NamedNode>,
    records: usize,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, subject: &NamedNode, predicate: NamedNodeRef<'_>, object: impl Into<Term>) {
        self.triples
            .push(Triple::new(subject.clone(), predicate, object.into()));
    }

    fn push_type(&mut self, subject: NamedNodeRef<'_>, class: NamedNodeRef<'_>) {
        self.triples
            .push(Triple::new(subject.into_owned(), rdf::TYPE, class.into_owned()));
    }

    /// Declares the classes and properties of the measurement pattern.
    pub fn declare_schema(&mut self) {
        for class in [
            cco::ARTIFACT,
            bfo::STATE_OF_CONDITION,
            cco::MEASUREMENT_INFORMATION_CONTENT_ENTITY,
            cco::MEASUREMENT_UNIT,
        ] {
            self.push_type(class, owl::CLASS);
        }
        for property in [
            bfo::BEARER_OF,
            cco::IS_MEASURE_OF,
            cco::USES_MEASUREMENT_UNIT,
        ] {
            self.push_type(property, owl::OBJECT_PROPERTY);
        }
        for property in [cco::HAS_VALUE, measurement::HAS_TIMESTAMP] {
            self.push_type(property, owl::DATATYPE_PROPERTY);
        }
    }

    /// Adds the triples of one reading and returns the IRIs it was given.
    pub fn add_reading(&mut self, reading: &Reading) -> EntityIds {
        let ids = EntityIds::for_reading(reading, self.records);
        self.records += 1;

        if self.artifacts.insert(ids.artifact.clone()) {
            self.push_type(ids.artifact.as_ref(), cco::ARTIFACT);
            self.push(
                &ids.artifact,
                rdfs::LABEL,
                Literal::new_simple_literal(&reading.artifact_id),
            );
        }
        if self.conditions.insert(ids.sdc.clone()) {
            self.push_type(ids.sdc.as_ref(), bfo::STATE_OF_CONDITION);
            self.push(
                &ids.sdc,
                rdfs::LABEL,
                Literal::new_simple_literal(format!(
                    "{} {}",
                    reading.artifact_id, reading.sdc_kind
                )),
            );
            self.push(&ids.artifact, bfo::BEARER_OF, ids.sdc.clone());
        }
        if self.units.insert(ids.unit.clone()) {
            self.push_type(ids.unit.as_ref(), cco::MEASUREMENT_UNIT);
            self.push(
                &ids.unit,
                rdfs::LABEL,
                Literal::new_simple_literal(&reading.unit_label),
            );
        }

        self.push_type(ids.mice.as_ref(), cco::MEASUREMENT_INFORMATION_CONTENT_ENTITY);
        self.push(&ids.mice, cco::IS_MEASURE_OF, ids.sdc.clone());
        self.push(&ids.mice, cco::USES_MEASUREMENT_UNIT, ids.unit.clone());
        self.push(
            &ids.mice,
            cco::HAS_VALUE,
            Literal::new_typed_literal(reading.value.to_string(), xsd::DECIMAL),
        );
        self.push(
            &ids.mice,
            measurement::HAS_TIMESTAMP,
            Literal::new_typed_literal(reading.timestamp.to_string(), xsd::DATE_TIME),
        );
        ids
    }

    pub fn add_readings<'a>(&mut self, readings: impl IntoIterator<Item = &'a Reading>) {
        for reading in readings {
            self.add_reading(reading);
        }
    }

    /// The triples in emission order.
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    pub fn triple_count(&self) -> usize {
        self.triples.len()
    }

    pub fn counts(&self) -> EntityCounts {
        EntityCounts {
            artifacts: self.artifacts.len(),
            conditions: self.conditions.len(),
            units: self.units.len(),
            records: self.records,
        }
    }

    pub fn into_graph(self) -> Graph {
        let mut graph = Graph::new();
        for triple in &self.triples {
            graph.insert(triple);
        }
        graph
    }
}
