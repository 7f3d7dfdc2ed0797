//! Provides ready to use [`NamedNodeRef`]s for the measurement pattern.
//!
//! The class and property IRIs are part of the output contract: the validator checks for these
//! exact strings and does not accept equivalent terms spelled differently.

pub use oxrdf::vocab::{rdf, rdfs, xsd};

/// [Basic Formal Ontology](https://basic-formal-ontology.org/) terms.
pub mod bfo {
    use oxrdf::NamedNodeRef;

    /// The class of specifically dependent continuants used for the measured condition ("SDC").
    pub const STATE_OF_CONDITION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.obolibrary.org/obo/BFO_0000020");
    /// Relates an artifact to the condition it bears.
    pub const BEARER_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.obolibrary.org/obo/BFO_0000196");
}

/// [Common Core Ontologies](https://www.commoncoreontologies.org/) terms.
pub mod cco {
    use oxrdf::NamedNodeRef;

    /// The class of physical devices carrying a sensor.
    pub const ARTIFACT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://www.commoncoreontologies.org/ont00000995");
    /// The class of measurement records ("MICE").
    pub const MEASUREMENT_INFORMATION_CONTENT_ENTITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://www.commoncoreontologies.org/ont00001163");
    /// The class of units of measure.
    pub const MEASUREMENT_UNIT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://www.commoncoreontologies.org/ont00000120");
    /// Relates a measurement record to the measured condition.
    pub const IS_MEASURE_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://www.commoncoreontologies.org/ont00001966");
    /// Relates a measurement record to its unit.
    pub const USES_MEASUREMENT_UNIT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://www.commoncoreontologies.org/ont00001863");
    /// Relates a measurement record to its numeric value.
    pub const HAS_VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://www.commoncoreontologies.org/ont00001865");
}

/// Terms of the instance namespace.
pub mod measurement {
    use oxrdf::NamedNodeRef;

    /// Base IRI of every generated instance.
    pub const NAMESPACE: &str = "http://example.org/measurement/";
    /// Relates a measurement record to the instant it was taken.
    pub const HAS_TIMESTAMP: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/measurement/has_timestamp");
}

/// [OWL](https://www.w3.org/TR/owl2-overview/) terms used for the schema declarations.
pub mod owl {
    use oxrdf::NamedNodeRef;

    pub const CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
    pub const OBJECT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
    pub const DATATYPE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DatatypeProperty");
}

/// Prefixes bound when writing Turtle. They only affect readability of the output.
pub const PREFIXES: &[(&str, &str)] = &[
    ("bfo", "http://purl.obolibrary.org/obo/BFO_"),
    ("cco", "https://www.commoncoreontologies.org/ont"),
    ("ex", measurement::NAMESPACE),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_terms_live_in_the_instance_namespace() {
        assert!(measurement::HAS_TIMESTAMP
            .as_str()
            .starts_with(measurement::NAMESPACE));
    }

    #[test]
    fn prefixes_cover_contract_iris() {
        for term in [
            bfo::STATE_OF_CONDITION,
            bfo::BEARER_OF,
            cco::ARTIFACT,
            cco::MEASUREMENT_INFORMATION_CONTENT_ENTITY,
            cco::MEASUREMENT_UNIT,
            cco::IS_MEASURE_OF,
            cco::USES_MEASUREMENT_UNIT,
            cco::HAS_VALUE,
        ] {
            assert!(
                PREFIXES
                    .iter()
                    .any(|(_, iri)| term.as_str().starts_with(iri)),
                "no prefix for {term}"
            );
        }
    }
}
