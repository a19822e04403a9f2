//! Error types for theme construction and token helpers.

use thiserror::Error;

use crate::value::Kind;

/// Error returned when a raw value cannot be read as a color or dimension.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The value is not a recognizable color.
    #[error("invalid color value '{value}'")]
    InvalidColor { value: String },
    /// The value does not start with a number.
    #[error("invalid dimension '{value}': expected a number followed by an optional unit")]
    InvalidDimension { value: String },
}

impl ParseError {
    pub(crate) fn color(value: impl Into<String>) -> Self {
        ParseError::InvalidColor {
            value: value.into(),
        }
    }

    pub(crate) fn dimension(value: impl Into<String>) -> Self {
        ParseError::InvalidDimension {
            value: value.into(),
        }
    }
}

/// Errors produced while building a theme or validating the token registry.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A color or dimension failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An override has the wrong type for the token it targets.
    #[error("token '{token}' expects a {expected} value, got {found}")]
    KindMismatch {
        token: String,
        expected: Kind,
        found: String,
    },

    /// A fallback rule produces a value of the wrong kind for its token.
    #[error("rule for token '{token}' produces {produced} values, token is declared {declared}")]
    RuleKind {
        token: String,
        declared: Kind,
        produced: Kind,
    },

    /// The fallback graph contains a cycle.
    #[error("cycle detected in token fallbacks: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    /// Reading an override file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An override file is not valid YAML.
    #[error("invalid YAML overrides: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An override file is not valid JSON.
    #[error("invalid JSON overrides: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_display() {
        let err = ParseError::color("not-a-color");
        assert_eq!(err.to_string(), "invalid color value 'not-a-color'");
    }

    #[test]
    fn test_invalid_dimension_display() {
        let msg = ParseError::dimension("px").to_string();
        assert!(msg.contains("'px'"));
    }

    #[test]
    fn test_cycle_detected_display() {
        let err = ThemeError::CycleDetected {
            path: vec![
                "linkColor".to_string(),
                "primaryColor".to_string(),
                "linkColor".to_string(),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("cycle"));
        assert!(msg.contains("linkColor -> primaryColor -> linkColor"));
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err: ThemeError = ParseError::color("#zz").into();
        assert_eq!(err.to_string(), "invalid color value '#zz'");
    }

    #[test]
    fn test_kind_mismatch_display() {
        let err = ThemeError::KindMismatch {
            token: "uppercaseTitles".to_string(),
            expected: Kind::Flag,
            found: "string \"yes\"".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "token 'uppercaseTitles' expects a flag value, got string \"yes\""
        );
    }
}
