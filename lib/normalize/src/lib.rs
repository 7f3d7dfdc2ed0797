//! Maps heterogeneous sensor sources onto the canonical readings table.
//!
//! Sources are CSV/TSV tables or JSON documents using any of the column spellings in
//! [`COLUMN_MAP`]. Every row is coerced into a [`Reading`]; rows that cannot be coerced are dropped.
//! The surviving readings are sorted by artifact and time and written as a CSV file with the
//! header `artifact_id,sdc_kind,unit_label,value,timestamp`.

mod aliases;
mod delimited;
mod error;
mod json;
mod raw;
mod source;

pub use aliases::{AliasTable, ColumnMap, COLUMN_MAP, KIND_ALIASES, UNIT_ALIASES};
pub use delimited::read_delimited;
pub use error::NormalizeError;
pub use json::read_json;
pub use raw::RawReading;
pub use source::{Source, SourceFormat};

use sensor_graph_model::{Field, Reading};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What a source contributed to a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    pub path: PathBuf,
    /// The number of raw rows read, before coercion.
    pub rows: usize,
    /// The file did not exist and contributed nothing.
    pub missing: bool,
}

/// The outcome of a normalization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub sources: Vec<SourceSummary>,
    /// Rows dropped because a field was missing or could not be parsed.
    pub dropped: usize,
    /// Rows written to the canonical table.
    pub written: usize,
}

/// Reads a fixed list of sources into one canonical table.
#[derive(Debug, Clone)]
pub struct Normalizer {
    sources: Vec<Source>,
}

impl Normalizer {
    pub fn new(sources: Vec<Source>) -> Self {
        Self { sources }
    }

    /// Creates a normalizer guessing each source format from its file extension.
    pub fn from_paths<P: Into<PathBuf>>(
        paths: impl IntoIterator<Item = P>,
    ) -> Result<Self, NormalizeError> {
        let sources = paths
            .into_iter()
            .map(Source::from_path)
            .collect::<Result<_, _>>()?;
        Ok(Self::new(sources))
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Reads every source in order. A missing source is logged and contributes no rows.
    pub fn read(&self) -> Result<(Vec<RawReading>, Vec<SourceSummary>), NormalizeError> {
        let mut readings = Vec::new();
        let mut summaries = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            let path = source.path().to_path_buf();
            if !source.path().exists() {
                warn!(path = %path.display(), "Source not found, skipping");
                summaries.push(SourceSummary {
                    path,
                    rows: 0,
                    missing: true,
                });
                continue;
            }
            let rows = source.read()?;
            info!(path = %path.display(), format = %source.format(), rows = rows.len(), "Read source");
            summaries.push(SourceSummary {
                path,
                rows: rows.len(),
                missing: false,
            });
            readings.extend(rows);
        }
        Ok((readings, summaries))
    }

    /// Reads, normalizes and writes the canonical table to `output`, creating its directory.
    pub fn run(&self, output: &Path) -> Result<NormalizeSummary, NormalizeError> {
        let (raw, sources) = self.read()?;
        let (readings, dropped) = normalize(&raw);

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(output)?);
        write_canonical(&readings, &mut writer)?;
        writer.flush()?;
        info!(path = %output.display(), rows = readings.len(), dropped, "Wrote canonical table");

        Ok(NormalizeSummary {
            sources,
            dropped,
            written: readings.len(),
        })
    }
}

/// Coerces raw rows, drops the invalid ones and sorts the rest by artifact, then time.
///
/// The sort is stable: readings of the same artifact at the same instant keep their input order.
/// Returns the readings and the number of dropped rows.
pub fn normalize(raw: &[RawReading]) -> (Vec<Reading>, usize) {
    let mut readings = Vec::with_capacity(raw.len());
    let mut dropped = 0;
    for (index, row) in raw.iter().enumerate() {
        match row.coerce() {
            Ok(reading) => readings.push(reading),
            Err(error) => {
                debug!(row = index, %error, "Dropping row");
                dropped += 1;
            }
        }
    }
    readings.sort_by(Reading::table_order);
    (readings, dropped)
}

/// Writes the canonical table, header included.
pub fn write_canonical(readings: &[Reading], writer: impl io::Write) -> Result<(), NormalizeError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(Field::ALL.map(Field::name))?;
    for reading in readings {
        writer.write_record(reading.to_record())?;
    }
    writer.flush()?;
    Ok(())
}
