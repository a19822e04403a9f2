//! Dimension strings such as `"16px"` or `"1.5rem"` and arithmetic on them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

/// A numeric magnitude with a unit suffix.
///
/// The unit may be empty for unitless values (`"10"`, line heights).
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub magnitude: f64,
    pub unit: String,
}

impl Dimension {
    /// Creates a dimension from parts.
    pub fn new(magnitude: f64, unit: impl Into<String>) -> Self {
        Self {
            magnitude,
            unit: unit.into(),
        }
    }

    /// Shorthand for a pixel dimension.
    pub fn px(magnitude: f64) -> Self {
        Self::new(magnitude, "px")
    }

    /// Parses `"<number><unit>"`.
    ///
    /// The number may carry a sign and a decimal part. The unit must be
    /// alphabetic or `%`, and may be absent.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let (number, unit) = separate_unit(input)?;
        let magnitude = number
            .parse::<f64>()
            .map_err(|_| ParseError::dimension(input))?;
        Ok(Self::new(magnitude, unit))
    }

    /// Applies `f` to the magnitude, keeping the unit.
    pub fn map(&self, f: impl FnOnce(f64) -> f64) -> Self {
        Self::new(f(self.magnitude), self.unit.clone())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}

impl FromStr for Dimension {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::parse(s)
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;
        let value = String::deserialize(deserializer)?;
        Dimension::parse(&value).map_err(Error::custom)
    }
}

/// Splits a dimension string into its numeric prefix and unit suffix.
///
/// # Example
///
/// ```rust
/// use crane_theme::separate_unit;
///
/// assert_eq!(separate_unit("16px").unwrap(), ("16", "px"));
/// assert_eq!(separate_unit("-0.5em").unwrap(), ("-0.5", "em"));
/// assert_eq!(separate_unit("10").unwrap(), ("10", ""));
/// assert!(separate_unit("px").is_err());
/// ```
pub fn separate_unit(input: &str) -> Result<(&str, &str), ParseError> {
    let trimmed = input.trim();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return Err(ParseError::dimension(input));
    }

    let (number, unit) = trimmed.split_at(end);
    if !unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%') {
        return Err(ParseError::dimension(input));
    }
    Ok((number, unit))
}

/// Applies a numeric transform to a dimension string, keeping its unit.
///
/// # Example
///
/// ```rust
/// use crane_theme::calc;
///
/// assert_eq!(calc("16px", |v| v * 2.0).unwrap(), "32px");
/// assert_eq!(calc("10", |v| v / 2.0).unwrap(), "5");
/// assert!(calc("auto", |v| v).is_err());
/// assert!(calc("10px", |v| v / 0.0).is_err());
/// ```
pub fn calc(input: &str, f: impl FnOnce(f64) -> f64) -> Result<String, ParseError> {
    let result = Dimension::parse(input)?.map(f);
    if !result.magnitude.is_finite() {
        return Err(ParseError::dimension(input));
    }
    Ok(result.to_string())
}
