use crate::raw::RawReading;
use crate::{delimited, json, NormalizeError};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// The layouts a sensor source can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Comma separated values with a header row.
    Csv,
    /// Tab separated values with a header row.
    Tsv,
    /// A JSON document or newline delimited JSON records.
    Json,
}

impl SourceFormat {
    /// Looks up a format from a file extension, ignoring case.
    ///
    /// ```
    /// use sensor_graph_normalize::SourceFormat;
    ///
    /// assert_eq!(SourceFormat::from_extension("CSV"), Some(SourceFormat::Csv));
    /// assert_eq!(SourceFormat::from_extension("jsonl"), Some(SourceFormat::Json));
    /// assert_eq!(SourceFormat::from_extension("xlsx"), None);
    /// ```
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "tsv" | "tab" => Some(Self::Tsv),
            "json" | "ndjson" | "jsonl" => Some(Self::Json),
            _ => None,
        }
    }

    /// The field delimiter of the delimited formats.
    pub fn delimiter(self) -> Option<u8> {
        match self {
            Self::Csv => Some(b','),
            Self::Tsv => Some(b'\t'),
            Self::Json => None,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csv => "CSV",
            Self::Tsv => "TSV",
            Self::Json => "JSON",
        })
    }
}

/// A sensor source file together with its format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    path: PathBuf,
    format: SourceFormat,
}

impl Source {
    pub fn new(path: impl Into<PathBuf>, format: SourceFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Guesses the format from the file extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, NormalizeError> {
        let path = path.into();
        let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
            return Err(NormalizeError::NoExtension(path));
        };
        let Some(format) = SourceFormat::from_extension(extension) else {
            let extension = extension.to_owned();
            return Err(NormalizeError::UnsupportedFormat { path, extension });
        };
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Reads every raw reading of the source. Opening a missing file is an I/O error.
    pub fn read(&self) -> Result<Vec<RawReading>, NormalizeError> {
        let file = BufReader::new(File::open(&self.path)?);
        match self.format.delimiter() {
            Some(delimiter) => delimited::read_delimited(file, delimiter),
            None => json::read_json(file),
        }
    }
}
