//! The built-in default variable set.

use std::collections::BTreeMap;

use crate::color::Color;
use crate::dimension::Dimension;
use crate::value::Value;

const SYSTEM_FONT_STACK: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif";

/// Default values for every stored token.
///
/// `textColor` appears here as the raw light-background text candidate even
/// though the `textColor` token itself is computed.
pub fn default_variables() -> BTreeMap<String, Value> {
    let colors = [
        ("primaryColor", Color::from_u32(0x1f5aa6)),
        ("secondaryColor", Color::from_u32(0xe0663a)),
        ("successColor", Color::from_u32(0x2e7d32)),
        ("warningColor", Color::from_u32(0xf2a900)),
        ("dangerColor", Color::from_u32(0xc62828)),
        ("noneColor", Color::from_u32(0x9e9e9e)),
        ("backgroundColor", Color::WHITE),
        ("appBackgroundColor", Color::from_u32(0xf5f5f5)),
        ("surfaceBackgroundColor", Color::WHITE),
        ("textColor", Color::from_u32(0x222222)),
        ("textColorDark", Color::WHITE),
        ("buttonTextColor", Color::from_u32(0x222222)),
        ("buttonTextColorDark", Color::WHITE),
        ("iconColor", Color::from_u32(0x222222)),
        ("iconColorDark", Color::WHITE),
        ("navigationLanguagePickerColor", Color::WHITE),
    ];

    let mut variables: BTreeMap<String, Value> = colors
        .into_iter()
        .map(|(name, color)| (name.to_string(), Value::Color(color)))
        .collect();

    let others = [
        ("contrastLuminanceThreshold", Value::Number(55.0)),
        ("mobileBreakpoint", Value::Number(800.0)),
        ("tabletBreakpoint", Value::Number(1024.0)),
        ("desktopBreakpoint", Value::Number(1280.0)),
        ("mediumSpacing", Value::Dimension(Dimension::px(24.0))),
        ("baseFontSize", Value::Dimension(Dimension::px(18.0))),
        ("surfaceBorderRadius", Value::Dimension(Dimension::px(4.0))),
        ("uppercaseTitles", Value::Flag(false)),
        ("fontFamily", Value::Text(SYSTEM_FONT_STACK.to_string())),
        ("headerFontFamily", Value::Text(SYSTEM_FONT_STACK.to_string())),
    ];
    variables.extend(
        others
            .into_iter()
            .map(|(name, value)| (name.to_string(), value)),
    );

    variables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Rule, Token};

    #[test]
    fn test_every_stored_token_has_a_default_of_its_kind() {
        let defaults = default_variables();
        for token in Token::ALL.iter().filter(|t| t.rule() == Rule::Stored) {
            let value = defaults
                .get(token.name())
                .unwrap_or_else(|| panic!("{} has no default", token));
            assert_eq!(value.kind(), token.kind(), "{} default has wrong kind", token);
        }
    }

    #[test]
    fn test_derived_tokens_have_no_default() {
        let defaults = default_variables();
        for token in Token::ALL.iter().filter(|t| t.is_derived()) {
            // textColor doubles as the raw text candidate.
            if *token == Token::TextColor {
                continue;
            }
            assert!(
                !defaults.contains_key(token.name()),
                "{} is derived but has a default",
                token
            );
        }
    }

    #[test]
    fn test_raw_text_candidate_present() {
        assert!(matches!(
            default_variables().get("textColor"),
            Some(Value::Color(_))
        ));
    }
}
