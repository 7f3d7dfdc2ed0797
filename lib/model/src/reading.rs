use crate::{Decimal, ReadingError, Timestamp};
use std::cmp::Ordering;
use std::fmt;

/// A column of the canonical readings table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    ArtifactId,
    SdcKind,
    UnitLabel,
    Value,
    Timestamp,
}

impl Field {
    /// All fields, in column order.
    pub const ALL: [Self; 5] = [
        Self::ArtifactId,
        Self::SdcKind,
        Self::UnitLabel,
        Self::Value,
        Self::Timestamp,
    ];

    /// The column header used in the canonical table.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ArtifactId => "artifact_id",
            Self::SdcKind => "sdc_kind",
            Self::UnitLabel => "unit_label",
            Self::Value => "value",
            Self::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for Field {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single canonical sensor reading.
///
/// All string fields are trimmed and non-empty. `sdc_kind` and `unit_label` are expected to be
/// canonicalized already, this type does not apply any alias table.
#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    pub artifact_id: String,
    pub sdc_kind: String,
    pub unit_label: String,
    pub value: Decimal,
    pub timestamp: Timestamp,
}

impl Reading {
    /// Builds a reading from the lexical forms of its five fields.
    pub fn from_lexical(
        artifact_id: &str,
        sdc_kind: &str,
        unit_label: &str,
        value: &str,
        timestamp: &str,
    ) -> Result<Self, ReadingError> {
        Ok(Self {
            artifact_id: required(artifact_id, Field::ArtifactId)?.to_owned(),
            sdc_kind: required(sdc_kind, Field::SdcKind)?.to_owned(),
            unit_label: required(unit_label, Field::UnitLabel)?.to_owned(),
            value: required(value, Field::Value)?.parse()?,
            timestamp: required(timestamp, Field::Timestamp)?.parse()?,
        })
    }

    /// The row of the canonical table, in [`Field::ALL`] order.
    pub fn to_record(&self) -> [String; 5] {
        [
            self.artifact_id.clone(),
            self.sdc_kind.clone(),
            self.unit_label.clone(),
            self.value.to_string(),
            self.timestamp.to_string(),
        ]
    }

    /// Orders readings by artifact, then chronologically.
    #[inline]
    pub fn table_order(&self, other: &Self) -> Ordering {
        self.artifact_id
            .cmp(&other.artifact_id)
            .then_with(|| self.timestamp.cmp(&other.timestamp))
    }
}

/// Returns the trimmed value, or an error if nothing is left.
#[inline]
pub fn required(value: &str, field: Field) -> Result<&str, ReadingError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ReadingError::Missing(field));
    }
    Ok(value)
}
