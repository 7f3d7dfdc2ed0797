use crate::Field;
use thiserror::Error;

/// The reason why a row could not be turned into a [`Reading`](crate::Reading).
///
/// Rows failing with one of these errors are dropped from the canonical table.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReadingError {
    /// A required field is absent or blank after trimming.
    #[error("The field '{0}' is missing or empty")]
    Missing(Field),
    /// The value could not be read as a finite decimal number.
    #[error(transparent)]
    Value(#[from] ParseDecimalError),
    /// The timestamp could not be read as a date/time.
    #[error(transparent)]
    Timestamp(#[from] ParseTimestampError),
}

/// An error when parsing a measured value.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a finite decimal number")]
pub struct ParseDecimalError(pub(crate) String);

/// An error when parsing a timestamp.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a recognized date/time")]
pub struct ParseTimestampError(pub(crate) String);
