//! Raw override values and resolved token values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::dimension::Dimension;
use crate::error::{ThemeError, ThemeResult};

/// A value as written by a theme author, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Number(f64),
    String(String),
}

impl RawValue {
    fn describe(&self) -> String {
        match self {
            RawValue::Bool(b) => format!("boolean {}", b),
            RawValue::Number(n) => format!("number {}", n),
            RawValue::String(s) => format!("string {:?}", s),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::String(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

/// The type of value a token holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Color,
    Dimension,
    Number,
    Flag,
    Keyword,
    Text,
}

impl Kind {
    /// Returns a human-readable name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Color => "color",
            Kind::Dimension => "dimension",
            Kind::Number => "number",
            Kind::Flag => "flag",
            Kind::Keyword => "keyword",
            Kind::Text => "text",
        }
    }

    /// Whether a variable name denotes a color by naming convention.
    ///
    /// Names ending in `Color` or `ColorDark` are colors, whether or not the
    /// registry knows them.
    pub fn is_color_name(name: &str) -> bool {
        name.ends_with("Color") || name.ends_with("ColorDark")
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized token value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Color(Color),
    Dimension(Dimension),
    Number(f64),
    Flag(bool),
    Keyword(String),
    Text(String),
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Color(_) => Kind::Color,
            Value::Dimension(_) => Kind::Dimension,
            Value::Number(_) => Kind::Number,
            Value::Flag(_) => Kind::Flag,
            Value::Keyword(_) => Kind::Keyword,
            Value::Text(_) => Kind::Text,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_dimension(&self) -> Option<&Dimension> {
        match self {
            Value::Dimension(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// The string payload of keyword and text values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Keyword(s) | Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Normalizes a raw value into the given kind.
    ///
    /// `name` is only used for error messages.
    pub fn coerce(name: &str, raw: &RawValue, kind: Kind) -> ThemeResult<Value> {
        let mismatch = || ThemeError::KindMismatch {
            token: name.to_string(),
            expected: kind,
            found: raw.describe(),
        };

        let value = match (kind, raw) {
            (Kind::Color, raw) => Value::Color(Color::from_raw(raw)?),
            (Kind::Dimension, RawValue::String(s)) => Value::Dimension(Dimension::parse(s)?),
            (Kind::Dimension, RawValue::Number(n)) if n.is_finite() => {
                Value::Dimension(Dimension::new(*n, ""))
            }
            (Kind::Number, RawValue::Number(n)) if n.is_finite() => Value::Number(*n),
            (Kind::Number, RawValue::String(s)) => {
                let n = s.trim().parse::<f64>().map_err(|_| mismatch())?;
                if !n.is_finite() {
                    return Err(mismatch());
                }
                Value::Number(n)
            }
            (Kind::Flag, RawValue::Bool(b)) => Value::Flag(*b),
            (Kind::Keyword, RawValue::String(s)) => Value::Keyword(s.clone()),
            (Kind::Text, RawValue::String(s)) => Value::Text(s.clone()),
            (Kind::Text, RawValue::Number(n)) => Value::Text(n.to_string()),
            _ => return Err(mismatch()),
        };
        Ok(value)
    }

    /// Converts a raw value for a name the registry does not know.
    ///
    /// Color-suffixed names are still normalized to colors; everything else
    /// passes through with its natural type.
    pub fn from_unknown(name: &str, raw: &RawValue) -> ThemeResult<Value> {
        if Kind::is_color_name(name) {
            return Value::coerce(name, raw, Kind::Color);
        }
        Ok(match raw {
            RawValue::Bool(b) => Value::Flag(*b),
            RawValue::Number(n) => Value::Number(*n),
            RawValue::String(s) => Value::Text(s.clone()),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Color(c) => write!(f, "{}", c),
            Value::Dimension(d) => write!(f, "{}", d),
            Value::Number(n) => write!(f, "{}", n),
            Value::Flag(b) => write!(f, "{}", b),
            Value::Keyword(s) | Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::Color(color)
    }
}

impl From<Dimension> for Value {
    fn from(dimension: Dimension) -> Self {
        Value::Dimension(dimension)
    }
}
