use crate::aliases::{KIND_ALIASES, UNIT_ALIASES};
use sensor_graph_model::{required, Field, Reading, ReadingError};

/// A reading as found in a source, before any coercion.
///
/// Each field holds the first non-empty text found for it, or `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawReading {
    pub artifact_id: Option<String>,
    pub sdc_kind: Option<String>,
    pub unit_label: Option<String>,
    pub value: Option<String>,
    pub timestamp: Option<String>,
}

impl RawReading {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::ArtifactId => self.artifact_id.as_deref(),
            Field::SdcKind => self.sdc_kind.as_deref(),
            Field::UnitLabel => self.unit_label.as_deref(),
            Field::Value => self.value.as_deref(),
            Field::Timestamp => self.timestamp.as_deref(),
        }
    }

    /// Whether no field was found at all.
    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field).is_none())
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::ArtifactId => &mut self.artifact_id,
            Field::SdcKind => &mut self.sdc_kind,
            Field::UnitLabel => &mut self.unit_label,
            Field::Value => &mut self.value,
            Field::Timestamp => &mut self.timestamp,
        }
    }

    /// Sets `field` unless it already holds a value. Blank text is ignored.
    pub fn offer(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let slot = self.slot(field);
        if slot.is_none() && !value.trim().is_empty() {
            *slot = Some(value);
        }
    }

    /// Fills the fields still missing from `fallback`.
    pub fn inherit(&mut self, fallback: &Self, fields: &[Field]) {
        for field in fields {
            if let Some(value) = fallback.get(*field) {
                self.offer(*field, value);
            }
        }
    }

    /// Trims, canonicalizes and parses every field.
    pub fn coerce(&self) -> Result<Reading, ReadingError> {
        let text = |field| self.get(field).ok_or(ReadingError::Missing(field));
        let sdc_kind = required(text(Field::SdcKind)?, Field::SdcKind)?;
        let unit_label = required(text(Field::UnitLabel)?, Field::UnitLabel)?;
        Reading::from_lexical(
            text(Field::ArtifactId)?,
            &KIND_ALIASES.canonicalize(sdc_kind),
            &UNIT_ALIASES.canonicalize(unit_label),
            text(Field::Value)?,
            text(Field::Timestamp)?,
        )
    }
}
