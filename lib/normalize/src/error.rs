use std::io;
use std::path::PathBuf;

/// An error raised while reading a source or writing the canonical table.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum NormalizeError {
    /// Error from the OS I/O layer.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The delimited text could not be read or written.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// Neither the whole document nor every line of it is valid JSON.
    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    /// The source format cannot be guessed from the file name.
    #[error("The path {} has no extension to guess a source format from", .0.display())]
    NoExtension(PathBuf),
    /// The file extension does not name a supported source format.
    #[error("The file extension '{extension}' of {} is not a supported source format", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },
}
