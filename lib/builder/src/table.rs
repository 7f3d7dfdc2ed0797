use crate::BuildError;
use sensor_graph_model::Reading;
use serde::Deserialize;
use std::io::Read;
use tracing::debug;

/// A row of the canonical readings table, before validation.
#[derive(Debug, Deserialize)]
struct CanonicalRow {
    artifact_id: String,
    sdc_kind: String,
    unit_label: String,
    value: String,
    timestamp: String,
}

/// Reads the canonical readings table.
///
/// Rows are validated again. Rows that do not hold five valid fields are dropped and counted.
/// Returns the readings in file order and the number of dropped rows.
pub fn read_canonical(reader: impl Read) -> Result<(Vec<Reading>, usize), BuildError> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut readings = Vec::new();
    let mut dropped = 0;
    for (index, row) in reader.deserialize::<CanonicalRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(error) if error.is_io_error() => return Err(error.into()),
            Err(error) => {
                debug!(row = index, %error, "Dropping malformed row");
                dropped += 1;
                continue;
            }
        };
        match Reading::from_lexical(
            &row.artifact_id,
            &row.sdc_kind,
            &row.unit_label,
            &row.value,
            &row.timestamp,
        ) {
            Ok(reading) => readings.push(reading),
            Err(error) => {
                debug!(row = index, %error, "Dropping invalid row");
                dropped += 1;
            }
        }
    }
    Ok((readings, dropped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_and_revalidates_rows() {
        let data = "artifact_id,sdc_kind,unit_label,value,timestamp\n\
                    Boiler-07,temperature,C,98.6,2024-01-01T00:00:00Z\n\
                    Boiler-07,temperature,C,not-a-number,2024-01-01T00:00:00Z\n\
                    Boiler-07,temperature,C,1\n\
                    Boiler-07,temperature,,1,2024-01-01T00:00:00Z\n";
        let (readings, dropped) = read_canonical(data.as_bytes()).unwrap();
        assert_eq!(dropped, 3);
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].artifact_id, "Boiler-07");
    }

    #[test]
    fn header_only_table_is_empty() {
        let data = "artifact_id,sdc_kind,unit_label,value,timestamp\n";
        let (readings, dropped) = read_canonical(data.as_bytes()).unwrap();
        assert!(readings.is_empty());
        assert_eq!(dropped, 0);
    }

    #[test]
    fn column_order_does_not_matter() {
        let data = "timestamp,value,unit_label,sdc_kind,artifact_id\n\
                    2024-01-01T00:00:00Z,5,V,voltage,Cell-1\n";
        let (readings, _) = read_canonical(data.as_bytes()).unwrap();
        assert_eq!(readings[0].to_record()[3], "5");
    }
}
