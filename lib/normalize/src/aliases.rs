//! Lookup tables mapping source spellings onto canonical tokens.
//!
//! Every table falls back to passing the input through unchanged when there is no entry for it.

use sensor_graph_model::Field;

/// A case-insensitive table of alias → canonical token.
///
/// Keys are stored lower-cased. Lookups lower-case the input first, so every canonical token must
/// also be reachable from its own lower-cased spelling to keep [`canonicalize`](Self::canonicalize)
/// idempotent.
#[derive(Debug, Clone, Copy)]
pub struct AliasTable {
    entries: &'static [(&'static str, &'static str)],
}

impl AliasTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Returns the canonical token if `token` is a known alias.
    pub fn lookup(&self, token: &str) -> Option<&'static str> {
        let key = token.to_lowercase();
        self.entries
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, canonical)| *canonical)
    }

    /// Returns the canonical token, or `token` unchanged if it is not a known alias.
    pub fn canonicalize(&self, token: &str) -> String {
        self.lookup(token).unwrap_or(token).to_owned()
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

/// One canonical token per physical unit.
pub const UNIT_ALIASES: AliasTable = AliasTable::new(&[
    ("celsius", "C"),
    ("°c", "C"),
    ("c", "C"),
    ("degc", "C"),
    ("deg c", "C"),
    ("fahrenheit", "F"),
    ("°f", "F"),
    ("f", "F"),
    ("degf", "F"),
    ("kilopascal", "kPa"),
    ("kpa", "kPa"),
    ("volt", "V"),
    ("volts", "V"),
    ("voltage", "V"),
    ("v", "V"),
    ("ohm", "Ω"),
    ("ohms", "Ω"),
    ("omega", "Ω"),
    ("ω", "Ω"),
    ("kilogram", "kg"),
    ("kg", "kg"),
    ("meter", "m"),
    ("metre", "m"),
    ("m", "m"),
]);

/// One canonical name per measured quality.
pub const KIND_ALIASES: AliasTable = AliasTable::new(&[
    ("temp", "temperature"),
    ("temperature", "temperature"),
    ("press", "pressure"),
    ("pressure", "pressure"),
    ("volt", "voltage"),
    ("voltage", "voltage"),
    ("resistance", "resistance"),
    ("ohmic resistance", "resistance"),
    ("mass", "mass"),
    ("weight", "mass"),
    ("length", "length"),
    ("distance", "length"),
]);

/// Maps source column headers and JSON keys onto canonical fields.
///
/// Several spellings may map onto the same field. When a source carries more than one of them,
/// the first non-empty one in table order wins.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    entries: &'static [(&'static str, Field)],
}

impl ColumnMap {
    /// Returns the field a header maps to, or `None` for columns that are discarded.
    pub fn canonical_field(&self, header: &str) -> Option<Field> {
        let header = header.trim();
        self.entries
            .iter()
            .find(|(alias, _)| *alias == header)
            .map(|(_, field)| *field)
    }

    /// Returns the spellings of `field`, in precedence order.
    pub fn aliases(&self, field: Field) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .filter(move |(_, f)| *f == field)
            .map(|(alias, _)| *alias)
    }
}

pub const COLUMN_MAP: ColumnMap = ColumnMap {
    entries: &[
        ("artifact", Field::ArtifactId),
        ("asset", Field::ArtifactId),
        ("artifact_id", Field::ArtifactId),
        ("asset_id", Field::ArtifactId),
        ("sdc", Field::SdcKind),
        ("measure_type", Field::SdcKind),
        ("sdc_kind", Field::SdcKind),
        ("uom", Field::UnitLabel),
        ("unit", Field::UnitLabel),
        ("unit_label", Field::UnitLabel),
        ("val", Field::Value),
        ("reading", Field::Value),
        ("value", Field::Value),
        ("ts", Field::Timestamp),
        ("time", Field::Timestamp),
        ("timestamp", Field::Timestamp),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_aliases() {
        assert_eq!(UNIT_ALIASES.canonicalize("celsius"), "C");
        assert_eq!(UNIT_ALIASES.canonicalize("°C"), "C");
        assert_eq!(UNIT_ALIASES.canonicalize("Fahrenheit"), "F");
        assert_eq!(UNIT_ALIASES.canonicalize("KPA"), "kPa");
        assert_eq!(UNIT_ALIASES.canonicalize("volt"), "V");
        assert_eq!(UNIT_ALIASES.canonicalize("omega"), "Ω");
    }

    #[test]
    fn unit_aliases_pass_through_unknown_tokens() {
        assert_eq!(UNIT_ALIASES.canonicalize("lux"), "lux");
        assert_eq!(UNIT_ALIASES.canonicalize("RPM"), "RPM");
    }

    #[test]
    fn unit_aliases_are_idempotent() {
        for (_, canonical) in UNIT_ALIASES.entries() {
            assert_eq!(
                UNIT_ALIASES.canonicalize(canonical),
                *canonical,
                "{canonical} is not a fixed point"
            );
        }
    }

    #[test]
    fn kind_aliases() {
        assert_eq!(KIND_ALIASES.canonicalize("Temp"), "temperature");
        assert_eq!(KIND_ALIASES.canonicalize("weight"), "mass");
        assert_eq!(KIND_ALIASES.canonicalize("humidity"), "humidity");
        for (_, canonical) in KIND_ALIASES.entries() {
            assert_eq!(KIND_ALIASES.canonicalize(canonical), *canonical);
        }
    }

    #[test]
    fn column_map() {
        assert_eq!(COLUMN_MAP.canonical_field("asset_id"), Some(Field::ArtifactId));
        assert_eq!(COLUMN_MAP.canonical_field(" reading "), Some(Field::Value));
        assert_eq!(COLUMN_MAP.canonical_field("uom"), Some(Field::UnitLabel));
        assert_eq!(COLUMN_MAP.canonical_field("operator"), None);
        assert_eq!(
            COLUMN_MAP.aliases(Field::Timestamp).collect::<Vec<_>>(),
            ["ts", "time", "timestamp"]
        );
    }

    #[test]
    fn every_field_has_its_canonical_name_as_alias() {
        for field in Field::ALL {
            assert_eq!(COLUMN_MAP.canonical_field(field.name()), Some(field));
        }
    }
}
