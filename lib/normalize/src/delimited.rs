use crate::aliases::COLUMN_MAP;
use crate::raw::RawReading;
use crate::NormalizeError;
use sensor_graph_model::Field;
use std::borrow::Cow;
use std::io::Read;
use std::str;
use tracing::debug;

/// Cell contents read as "no value".
const MISSING_TOKENS: &[&str] = &["NA", "N/A", "#N/A", "NaN", "nan", "null", "NULL", "None"];

/// Reads a delimited table with a header row.
///
/// Columns whose header is not in [`COLUMN_MAP`] are ignored. If several columns map onto the same
/// field, the first non-missing cell in alias precedence order is used.
///
/// Cells that are not valid UTF-8 are read as Latin-1. A row that cannot be read at all yields an
/// empty reading, which is dropped during coercion.
pub fn read_delimited(reader: impl Read, delimiter: u8) -> Result<Vec<RawReading>, NormalizeError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);
    let headers = reader
        .byte_headers()?
        .iter()
        .map(|header| decode(header).into_owned())
        .collect::<Vec<_>>();
    let layout = ColumnLayout::new(&headers);

    let mut readings = Vec::new();
    for (index, record) in reader.byte_records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(error) if error.is_io_error() => return Err(error.into()),
            Err(error) => {
                debug!(row = index, %error, "Unreadable row");
                readings.push(RawReading::default());
                continue;
            }
        };
        let mut reading = RawReading::default();
        for (field, columns) in &layout.columns {
            let cell = columns
                .iter()
                .filter_map(|column| record.get(*column))
                .map(decode)
                .find(|cell| !is_missing(cell));
            if let Some(cell) = cell {
                reading.offer(*field, cell);
            }
        }
        readings.push(reading);
    }
    Ok(readings)
}

fn decode(cell: &[u8]) -> Cow<'_, str> {
    match str::from_utf8(cell) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(cell.iter().copied().map(char::from).collect()),
    }
}

fn is_missing(cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty() || MISSING_TOKENS.contains(&cell)
}

/// For every canonical field, the indices of the columns carrying it, in precedence order.
struct ColumnLayout {
    columns: Vec<(Field, Vec<usize>)>,
}

impl ColumnLayout {
    fn new(headers: &[String]) -> Self {
        let columns = Field::ALL
            .into_iter()
            .map(|field| {
                let indices = COLUMN_MAP
                    .aliases(field)
                    .flat_map(|alias| {
                        headers
                            .iter()
                            .enumerate()
                            .filter(move |(_, header)| header.trim() == alias)
                            .map(|(index, _)| index)
                    })
                    .collect();
                (field, indices)
            })
            .collect();
        Self { columns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_aliased_headers() {
        let data = "asset_id,measure_type,unit,reading,time,operator\n\
                    Boiler-07,temp,celsius,98.6,2024-01-01 00:00:00,alice\n";
        let readings = read_delimited(data.as_bytes(), b',').unwrap();
        assert_eq!(
            readings,
            [RawReading {
                artifact_id: Some("Boiler-07".into()),
                sdc_kind: Some("temp".into()),
                unit_label: Some("celsius".into()),
                value: Some("98.6".into()),
                timestamp: Some("2024-01-01 00:00:00".into()),
            }]
        );
    }

    #[test]
    fn missing_tokens_are_not_values() {
        let data = "artifact_id\tsdc_kind\tunit_label\tvalue\ttimestamp\n\
                    Pump-1\tpressure\tkPa\tNaN\t2024-01-01\n\
                    Pump-1\tpressure\tNA\t1\t2024-01-01\n";
        let readings = read_delimited(data.as_bytes(), b'\t').unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].value, None);
        assert_eq!(readings[1].unit_label, None);
    }

    #[test]
    fn earlier_alias_wins_when_both_columns_are_present() {
        let data = "artifact_id,artifact,sdc,uom,val,ts\n\
                    late,early,voltage,V,1,2024-01-01\n\
                    late,,voltage,V,1,2024-01-01\n";
        let readings = read_delimited(data.as_bytes(), b',').unwrap();
        assert_eq!(readings[0].artifact_id.as_deref(), Some("early"));
        assert_eq!(readings[1].artifact_id.as_deref(), Some("late"));
    }

    #[test]
    fn latin1_cells_are_decoded() {
        let data = b"artifact_id,sdc_kind,unit_label,value,timestamp\n\
                     Boiler-07,temperature,C,98.6,2024-01-01T00:00:00Z\n\
                     Boiler-07,temperature,\xB0C,99.1,2024-01-01T01:00:00Z\n";
        let readings = read_delimited(&data[..], b',').unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].unit_label.as_deref(), Some("C"));
        assert_eq!(readings[1].unit_label.as_deref(), Some("\u{b0}C"));
        assert_eq!(readings[1].coerce().unwrap().unit_label, "C");
    }

    #[test]
    fn short_rows_are_read() {
        let data = "artifact_id,sdc_kind,unit_label,value,timestamp\nA,temperature\n";
        let readings = read_delimited(data.as_bytes(), b',').unwrap();
        assert_eq!(readings[0].sdc_kind.as_deref(), Some("temperature"));
        assert_eq!(readings[0].value, None);
    }
}
