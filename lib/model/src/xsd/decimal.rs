use crate::ParseDecimalError;
use std::fmt;
use std::str::FromStr;

/// A measured magnitude, written as an [XML Schema `decimal`](https://www.w3.org/TR/xmlschema11-2/#decimal).
///
/// Uses internally a finite [`f64`]. The lexical form is the shortest decimal that reads back to
/// the same number and never uses exponent notation.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Decimal {
    value: f64,
}

impl Decimal {
    /// Returns `None` for NaN and infinities.
    #[inline]
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self { value })
    }

    #[inline]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.value
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    /// Accepts anything [`f64`] accepts (including exponents like `1e3`) as long as it is finite.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        input
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParseDecimalError(input.to_owned()))
    }
}

impl fmt::Display for Decimal {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display is the shortest round-trip form and is never in scientific notation.
        fmt::Display::fmt(&self.value, f)
    }
}
