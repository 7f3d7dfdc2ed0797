use crate::ExitStatus;
use oxttl::TurtleParseError;
use std::io;
use std::path::PathBuf;

/// An error preventing the checks from running at all.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ValidateError {
    /// The Turtle file does not exist.
    #[error("{} not found", .0.display())]
    Missing(PathBuf),
    /// Error from the OS I/O layer.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The file is not valid Turtle.
    #[error("Error loading Turtle: {0}")]
    Parse(#[from] TurtleParseError),
}

impl ValidateError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Self::Missing(_) => ExitStatus::FileMissing,
            Self::Io(_) | Self::Parse(_) => ExitStatus::UnexpectedError,
        }
    }
}
