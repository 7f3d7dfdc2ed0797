use sensor_graph_model::vocab::measurement;
use sensor_graph_model::{NamedNode, Reading};
use sha1::{Digest, Sha1};

/// Separates the parts of a hashed key so that `("ab", "c")` and `("a", "bc")` differ.
const UNIT_SEPARATOR: &[u8] = b"\x1f";

/// The number of hex digits kept from the digest.
const HASH_LENGTH: usize = 16;

/// Hashes an entity tag and its key parts into a short hex string.
///
/// The result only depends on the inputs, so the same entity gets the same identifier in every run.
pub fn content_hash(tag: &str, parts: &[&str]) -> String {
    let mut hasher = Sha1::new().chain_update(tag);
    for part in parts {
        hasher.update(UNIT_SEPARATOR);
        hasher.update(part);
    }
    let mut hash = hex::encode(hasher.finalize());
    hash.truncate(HASH_LENGTH);
    hash
}

fn instance(tag: &str, parts: &[&str]) -> NamedNode {
    // The namespace is a valid IRI and the suffix is made of ASCII letters, `_` and hex digits.
    NamedNode::new_unchecked(format!(
        "{}{tag}_{}",
        measurement::NAMESPACE,
        content_hash(tag, parts)
    ))
}

/// The IRIs of the four entities a reading mentions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityIds {
    /// Keyed by artifact id.
    pub artifact: NamedNode,
    /// Keyed by artifact id and condition kind.
    pub sdc: NamedNode,
    /// Keyed by unit label.
    pub unit: NamedNode,
    /// Keyed by every field and the row index, so repeated identical rows stay distinct.
    pub mice: NamedNode,
}

impl EntityIds {
    pub fn for_reading(reading: &Reading, row_index: usize) -> Self {
        let [artifact_id, sdc_kind, unit_label, value, timestamp] = reading.to_record();
        let row_index = row_index.to_string();
        let (artifact_id, sdc_kind, unit_label) = (&*artifact_id, &*sdc_kind, &*unit_label);
        Self {
            artifact: instance("Artifact", &[artifact_id]),
            sdc: instance("SDC", &[artifact_id, sdc_kind]),
            unit: instance("MU", &[unit_label]),
            mice: instance(
                "MICE",
                &[
                    artifact_id,
                    sdc_kind,
                    unit_label,
                    value.as_str(),
                    timestamp.as_str(),
                    row_index.as_str(),
                ],
            ),
        }
    }
}
