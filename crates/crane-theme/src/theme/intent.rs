//! Semantic intents and their color tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ThemeResolver;
use crate::color::Color;
use crate::token::Token;

/// The semantic role of a UI element, mapped to one of the base colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    None,
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
}

impl Intent {
    pub const ALL: [Intent; 6] = [
        Intent::None,
        Intent::Primary,
        Intent::Secondary,
        Intent::Success,
        Intent::Warning,
        Intent::Danger,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::None => "none",
            Intent::Primary => "primary",
            Intent::Secondary => "secondary",
            Intent::Success => "success",
            Intent::Warning => "warning",
            Intent::Danger => "danger",
        }
    }

    /// Looks up an intent by its lowercase name.
    pub fn from_name(name: &str) -> Option<Intent> {
        Intent::ALL.into_iter().find(|i| i.as_str() == name)
    }

    /// The color token this intent reads.
    pub fn token(self) -> Token {
        match self {
            Intent::None => Token::NoneColor,
            Intent::Primary => Token::PrimaryColor,
            Intent::Secondary => Token::SecondaryColor,
            Intent::Success => Token::SuccessColor,
            Intent::Warning => Token::WarningColor,
            Intent::Danger => Token::DangerColor,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::from_name(s).ok_or_else(|| format!("unknown intent '{s}'"))
    }
}

impl ThemeResolver {
    /// The color for `intent`. A missing intent uses `noneColor`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crane_theme::{Intent, ThemeResolver};
    ///
    /// let theme = ThemeResolver::new();
    /// assert_eq!(theme.intent_color(Intent::Danger), theme.danger_color());
    /// assert_eq!(theme.intent_color(None), theme.none_color());
    /// ```
    pub fn intent_color(&self, intent: impl Into<Option<Intent>>) -> Color {
        let token = intent.into().unwrap_or(Intent::None).token();
        self.color_of(token)
    }

    /// The color for an intent given by name. Unknown names use `noneColor`.
    pub fn intent_color_by_name(&self, name: &str) -> Color {
        let intent = Intent::from_name(name);
        if intent.is_none() {
            log::warn!("unknown intent '{name}', using noneColor");
        }
        self.intent_color(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::Overrides;

    #[test]
    fn test_intent_names_round_trip() {
        for intent in Intent::ALL {
            assert_eq!(intent.as_str().parse::<Intent>().unwrap(), intent);
        }
        assert!("Primary".parse::<Intent>().is_err());
    }

    #[test]
    fn test_intent_colors_follow_base_colors() {
        let theme = ThemeResolver::new();
        assert_eq!(theme.intent_color(Intent::Success), theme.success_color());
        assert_eq!(theme.intent_color(Intent::Warning), theme.warning_color());
        assert_eq!(theme.intent_color(Intent::Secondary), theme.secondary_color());
        assert_eq!(theme.intent_color(Intent::Primary), theme.primary_color());
    }

    #[test]
    fn test_unknown_intent_uses_none_color() {
        let overrides = Overrides::new().set("noneColor", "#010203");
        let theme = ThemeResolver::with_overrides(&overrides).unwrap();
        assert_eq!(theme.intent_color_by_name("urgent"), Color::rgb(1, 2, 3));
        assert_eq!(theme.intent_color_by_name("danger"), theme.danger_color());
    }

    #[test]
    fn test_intent_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Intent::Warning).unwrap(), "\"warning\"");
        let intent: Intent = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(intent, Intent::Success);
    }
}
