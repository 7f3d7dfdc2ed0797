use sensor_graph_model::IriParseError;
use std::io;

/// An error raised while reading the canonical table or writing the graph.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// Error from the OS I/O layer.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The canonical table could not be read.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// A prefix IRI given to the Turtle serializer is invalid.
    #[error("Invalid prefix IRI: {0}")]
    Prefix(#[from] IriParseError),
}
