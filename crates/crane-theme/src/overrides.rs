//! Caller-supplied theme overrides and the loaders that read them.
//!
//! Overrides are a flat mapping from variable name to [`RawValue`]. They can
//! be built in code, or read from YAML or JSON:
//!
//! ```yaml
//! primaryColor: "#112233"
//! mediumSpacing: 20px
//! uppercaseTitles: true
//! ```
//!
//! Deprecated names are rewritten to their current names when a theme is
//! built, see [`DEPRECATED_ALIASES`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ThemeResult;
use crate::value::RawValue;

/// Deprecated variable names and the names that replaced them.
///
/// The replacement wins when both are given.
pub const DEPRECATED_ALIASES: &[(&str, &str)] = &[
    ("shareButtonIconColor", "shareButtonTextColor"),
    ("shareButtonIconHoverColor", "shareButtonTextHoverColor"),
    ("extralargeSpacing", "extraLargeSpacing"),
];

/// A set of raw variable overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overrides {
    values: BTreeMap<String, RawValue>,
}

impl Overrides {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an override, returning the updated set for chaining.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crane_theme::Overrides;
    ///
    /// let overrides = Overrides::new()
    ///     .set("primaryColor", "#112233")
    ///     .set("uppercaseTitles", true);
    /// assert_eq!(overrides.len(), 2);
    /// ```
    pub fn set(mut self, name: &str, value: impl Into<RawValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces an override in place.
    pub fn insert(&mut self, name: &str, value: impl Into<RawValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates overrides in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parses overrides from a YAML mapping. Empty input is an empty set.
    pub fn from_yaml_str(input: &str) -> ThemeResult<Self> {
        if input.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_yaml::from_str(input)?)
    }

    /// Parses overrides from a JSON object.
    pub fn from_json_str(input: &str) -> ThemeResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Reads overrides from a file.
    ///
    /// Files ending in `.json` are read as JSON, everything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let overrides = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        log::debug!(
            "loaded {} theme overrides from {}",
            overrides.len(),
            path.display()
        );
        Ok(overrides)
    }

    /// Returns the overrides with deprecated names rewritten.
    pub(crate) fn migrated(&self) -> BTreeMap<String, RawValue> {
        let mut values = self.values.clone();
        for (old, new) in DEPRECATED_ALIASES {
            let Some(value) = values.remove(*old) else {
                continue;
            };
            if values.contains_key(*new) {
                log::warn!("theme variable '{old}' is deprecated and ignored because '{new}' is set");
            } else {
                log::warn!("theme variable '{old}' is deprecated, use '{new}'");
                values.insert(new.to_string(), value);
            }
        }
        values
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
