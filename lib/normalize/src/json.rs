use crate::aliases::COLUMN_MAP;
use crate::raw::RawReading;
use crate::NormalizeError;
use sensor_graph_model::Field;
use serde_json::{Map, Value};
use std::io::Read;
use tracing::warn;

/// Keys under which a record may carry a nested list of readings.
const NESTED_KEYS: &[&str] = &["readings", "measurements", "records"];

/// Extra keys naming the device of a record that groups nested readings.
const PARENT_ID_KEYS: &[&str] = &["id", "device_id", "device"];

/// Fields a nested reading takes from its parent when it does not carry its own.
const INHERITED: &[Field] = &[Field::ArtifactId, Field::SdcKind, Field::UnitLabel];

/// Reads JSON records.
///
/// The input is first parsed as a single document: an object with a `records` list, a list of
/// records, an object grouping records by artifact id, or a single record. If that fails, every
/// non-blank line is parsed as one record (newline delimited JSON).
///
/// In a grouping object, each artifact id maps either to a list of readings or to an object
/// holding one. Members that are neither are skipped.
pub fn read_json(mut reader: impl Read) -> Result<Vec<RawReading>, NormalizeError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let text = text.trim();

    let records = match serde_json::from_str::<Value>(text) {
        Ok(document) => select_records(document),
        Err(_) => text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(serde_json::from_str)
            .collect::<Result<Vec<Value>, _>>()?,
    };

    let mut readings = Vec::new();
    for record in &records {
        flatten(record, &RawReading::default(), &mut readings);
    }
    if !readings.is_empty() && readings.iter().all(RawReading::is_empty) {
        warn!(
            records = readings.len(),
            "No field of the JSON records maps onto a reading"
        );
    }
    Ok(readings)
}

fn select_records(document: Value) -> Vec<Value> {
    match document {
        Value::Array(records) => records,
        Value::Object(object) if is_grouping(&object) => object
            .into_iter()
            .filter_map(|(key, group)| match group {
                Value::Object(mut group) if nested_list(&group).is_some() => {
                    group.entry("id").or_insert(Value::String(key));
                    Some(Value::Object(group))
                }
                Value::Array(readings) if is_reading_list(&readings) => {
                    let mut group = Map::new();
                    group.insert("id".to_owned(), Value::String(key));
                    group.insert("readings".to_owned(), Value::Array(readings));
                    Some(Value::Object(group))
                }
                _ => {
                    warn!(key = %key, "Skipping a member that holds no readings");
                    None
                }
            })
            .collect(),
        // A `records` list is flattened like any other nested list.
        other => vec![other],
    }
}

/// An object keyed by artifact id, where members hold readings directly or in a nested list.
///
/// An object carrying a reading field or a nested list itself is a record, not a grouping.
fn is_grouping(object: &Map<String, Value>) -> bool {
    let is_record = nested_list(object).is_some()
        || object
            .keys()
            .any(|key| COLUMN_MAP.canonical_field(key).is_some());
    !is_record && object.values().any(is_group)
}

fn is_group(member: &Value) -> bool {
    match member {
        Value::Object(group) => nested_list(group).is_some(),
        Value::Array(readings) => is_reading_list(readings),
        _ => false,
    }
}

fn is_reading_list(readings: &[Value]) -> bool {
    !readings.is_empty() && readings.iter().all(Value::is_object)
}

fn nested_list(record: &Map<String, Value>) -> Option<&Vec<Value>> {
    NESTED_KEYS
        .iter()
        .find_map(|key| record.get(*key).and_then(Value::as_array))
}

fn flatten(record: &Value, parent: &RawReading, output: &mut Vec<RawReading>) {
    let Value::Object(record) = record else {
        // Not a record at all. Kept so that it is counted, and dropped during coercion.
        output.push(RawReading::default());
        return;
    };

    let mut reading = RawReading::default();
    for field in Field::ALL {
        for alias in COLUMN_MAP.aliases(field) {
            if let Some(text) = record.get(alias).and_then(scalar_text) {
                reading.offer(field, text);
            }
        }
    }

    match nested_list(record) {
        Some(children) => {
            for key in PARENT_ID_KEYS {
                if let Some(text) = record.get(*key).and_then(scalar_text) {
                    reading.offer(Field::ArtifactId, text);
                }
            }
            reading.inherit(parent, INHERITED);
            for child in children {
                flatten(child, &reading, output);
            }
        }
        None => {
            reading.inherit(parent, INHERITED);
            output.push(reading);
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Vec<RawReading> {
        read_json(text.as_bytes()).unwrap()
    }

    #[test]
    fn reads_records_key() {
        let readings = read(
            r#"{"records": [
                {"artifact": "Pump-1", "sdc": "press", "uom": "kpa", "val": 101.3, "ts": "2024-01-01T00:00:00Z"},
                {"asset": "Pump-2", "measure_type": "press", "unit": "kPa", "reading": "99", "time": "2024-01-01"}
            ]}"#,
        );
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].artifact_id.as_deref(), Some("Pump-1"));
        assert_eq!(readings[0].value.as_deref(), Some("101.3"));
        assert_eq!(readings[1].artifact_id.as_deref(), Some("Pump-2"));
        assert_eq!(readings[1].value.as_deref(), Some("99"));
    }

    #[test]
    fn reads_array_and_single_object() {
        assert_eq!(read(r#"[{"artifact_id": "A"}, {"artifact_id": "B"}]"#).len(), 2);
        let readings = read(r#"{"artifact_id": "A", "value": 0}"#);
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].value.as_deref(), Some("0"));
    }

    #[test]
    fn falls_back_to_ndjson() {
        let readings = read(
            "{\"artifact\": \"A\", \"val\": 1}\n\n{\"artifact\": \"B\", \"val\": null}\n",
        );
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[1].artifact_id.as_deref(), Some("B"));
        assert_eq!(readings[1].value, None);
    }

    #[test]
    fn malformed_ndjson_is_an_error() {
        let result = read_json("{\"artifact\": \"A\"}\n{not json".as_bytes());
        assert!(matches!(result, Err(NormalizeError::Json(_))));
    }

    #[test]
    fn empty_document_has_no_records() {
        assert!(read("  \n").is_empty());
    }

    #[test]
    fn flattens_nested_readings() {
        let readings = read(
            r#"[{"device_id": "Boiler-07", "sdc": "temp", "readings": [
                {"uom": "celsius", "val": 98.6, "ts": "2024-01-01T00:00:00Z"},
                {"sdc": "press", "uom": "kpa", "val": 3, "ts": "2024-01-01T00:00:00Z"}
            ]}]"#,
        );
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].artifact_id.as_deref(), Some("Boiler-07"));
        assert_eq!(readings[0].sdc_kind.as_deref(), Some("temp"));
        assert_eq!(readings[1].artifact_id.as_deref(), Some("Boiler-07"));
        assert_eq!(readings[1].sdc_kind.as_deref(), Some("press"));
    }

    #[test]
    fn reads_grouping_object() {
        let readings = read(
            r#"{
                "Boiler-07": {"unit": "C", "measurements": [{"sdc_kind": "temperature", "value": 1, "ts": "2024-01-01"}]},
                "Pump-1": {"readings": [{"sdc_kind": "pressure", "unit": "kPa", "value": 2, "ts": "2024-01-01"}]}
            }"#,
        );
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].artifact_id.as_deref(), Some("Boiler-07"));
        assert_eq!(readings[0].unit_label.as_deref(), Some("C"));
        assert_eq!(readings[1].artifact_id.as_deref(), Some("Pump-1"));
    }

    #[test]
    fn reads_grouping_object_of_lists() {
        let readings = read(
            r#"{
                "meta": {"exported": "2024-01-02"},
                "Boiler-07": [{"sdc_kind": "temperature", "unit": "C", "value": 1, "ts": "2024-01-01"}],
                "Pump-1": [
                    {"sdc_kind": "pressure", "unit": "kPa", "value": 2, "ts": "2024-01-01"},
                    {"sdc_kind": "pressure", "unit": "kPa", "value": 3, "ts": "2024-01-02"}
                ]
            }"#,
        );
        assert_eq!(readings.len(), 3);
        assert_eq!(readings[0].artifact_id.as_deref(), Some("Boiler-07"));
        assert_eq!(readings[0].unit_label.as_deref(), Some("C"));
        assert_eq!(readings[2].artifact_id.as_deref(), Some("Pump-1"));
        assert_eq!(readings[2].value.as_deref(), Some("3"));
    }

    #[test]
    fn record_with_a_list_member_is_not_a_grouping() {
        let readings = read(
            r#"{"artifact": "Boiler-07", "tags": [{"name": "hot"}], "sdc": "temp", "val": 1}"#,
        );
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].artifact_id.as_deref(), Some("Boiler-07"));
    }

    #[test]
    fn non_object_records_yield_empty_readings() {
        let readings = read("[1, {\"artifact\": \"A\"}]");
        assert_eq!(readings[0], RawReading::default());
        assert_eq!(readings[1].artifact_id.as_deref(), Some("A"));
    }
}
