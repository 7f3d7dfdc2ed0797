use crate::ParseTimestampError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Date/time layouts that carry a UTC offset.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Date/time layouts without an offset. These are taken to already be in UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%d %b %Y %H:%M:%S",
    "%b %d %Y %H:%M:%S",
    "%b %d, %Y %H:%M:%S",
    "%b %d, %Y %H:%M",
    "%b %d, %Y %I:%M:%S %p",
    "%b %d, %Y %I:%M %p",
    "%Y%m%dT%H%M%S",
    "%Y%m%dT%H%M",
];

/// Date-only layouts, read as midnight UTC.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %b %Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%Y%m%d",
];

/// Suffixes naming UTC, removed before a value is parsed as naive.
const UTC_DESIGNATORS: &[&str] = &["Z", "z", "UTC", "utc", "GMT", "gmt"];

/// The years an `xsd:dateTime` can be written with four digits.
const YEARS: RangeInclusive<i32> = 0..=9999;

/// An instant in UTC, written as an [XML Schema `dateTime`](https://www.w3.org/TR/xmlschema11-2/#dateTime)
/// ending in `Z`.
///
/// Parsing is permissive: ISO-8601/RFC 3339 with or without an offset, a few common date and
/// date/time layouts, RFC 2822 and integer Unix epoch seconds are accepted. Values without an
/// offset, or with a `Z`, `UTC` or `GMT` suffix, are assumed to be UTC. Years outside `0..=9999`
/// are rejected. Precision is truncated to microseconds.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Timestamp {
    value: DateTime<Utc>,
}

impl Timestamp {
    #[inline]
    #[must_use]
    pub fn new(value: DateTime<Utc>) -> Self {
        let micros = value.nanosecond() / 1_000 * 1_000;
        Self {
            value: value.with_nanosecond(micros).unwrap_or(value),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_date_time(self) -> DateTime<Utc> {
        self.value
    }
}

impl From<DateTime<Utc>> for Timestamp {
    #[inline]
    fn from(value: DateTime<Utc>) -> Self {
        Self::new(value)
    }
}

impl FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_permissive(input.trim())
            .filter(|value| YEARS.contains(&value.year()))
            .map(Self::new)
            .ok_or_else(|| ParseTimestampError(input.to_owned()))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.nanosecond() == 0 {
            write!(f, "{}", self.value.format("%Y-%m-%dT%H:%M:%SZ"))
        } else {
            write!(f, "{}", self.value.format("%Y-%m-%dT%H:%M:%S%.6fZ"))
        }
    }
}

fn parse_permissive(input: &str) -> Option<DateTime<Utc>> {
    if input.is_empty() {
        return None;
    }
    if let Ok(value) = DateTime::parse_from_rfc3339(input) {
        return Some(value.with_timezone(&Utc));
    }
    if let Some(value) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(input, format).ok())
    {
        return Some(value.with_timezone(&Utc));
    }
    // A trailing designator means UTC, the remainder is parsed like a naive value.
    let naive_input = UTC_DESIGNATORS
        .iter()
        .find_map(|designator| input.strip_suffix(designator))
        .unwrap_or(input)
        .trim_end();
    if let Some(value) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive_input, format).ok())
    {
        return Some(value.and_utc());
    }
    if let Ok(value) = DateTime::parse_from_rfc2822(input) {
        return Some(value.with_timezone(&Utc));
    }
    if let Some(value) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(naive_input, format).ok())
    {
        return value.and_hms_opt(0, 0, 0).map(|value| value.and_utc());
    }
    // Plain integers of Unix epoch seconds, from 1973 to 2286. Other digit runs are ambiguous.
    if (9..=10).contains(&input.len()) && input.bytes().all(|b| b.is_ascii_digit()) {
        return DateTime::from_timestamp(input.parse().ok()?, 0);
    }
    None
}
