//! Formatting of command results.

use anyhow::Result;
use console::Style;
use crane_theme::{Color, ResolvedTheme, Value};
use serde::Serialize;

use crate::cli::OutputMode;

/// Serializes `data` for structured modes, or renders it with `text`.
pub fn render_or_serialize<T: Serialize>(
    data: &T,
    mode: OutputMode,
    text: impl FnOnce(&T, bool) -> String,
) -> Result<String> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(data)? + "\n"),
        OutputMode::Yaml => Ok(serde_yaml::to_string(data)?),
        OutputMode::Auto | OutputMode::Term | OutputMode::Text => {
            Ok(text(data, mode.should_use_color()))
        }
    }
}

/// A two-cell block painted in `color`, or nothing without color support.
pub fn swatch(color: Color, use_color: bool) -> String {
    if !use_color {
        return String::new();
    }
    let style = Style::new()
        .color256(color.ansi256())
        .force_styling(true);
    format!("{} ", style.apply_to("██"))
}

/// One `name  value` line per token, names padded to a common width.
pub fn resolved_text(resolved: &ResolvedTheme, use_color: bool) -> String {
    let width = resolved
        .iter()
        .map(|(token, _)| token.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (token, value) in resolved.iter() {
        let rendered = match value {
            Some(Value::Color(color)) => format!("{}{}", swatch(*color, use_color), color),
            Some(other) => other.to_string(),
            None => dim("(unset)", use_color),
        };
        out.push_str(&format!("{:width$}  {}\n", token.name(), rendered, width = width));
    }
    out
}

pub fn dim(text: &str, use_color: bool) -> String {
    if use_color {
        Style::new().dim().force_styling(true).apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn warn(text: &str, use_color: bool) -> String {
    if use_color {
        Style::new().yellow().force_styling(true).apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crane_theme::{ThemeResolver, Token};

    fn sample() -> ResolvedTheme {
        ThemeResolver::new().resolve_all().select(&[
            Token::LinkColor,
            Token::LargeSpacing,
            Token::CallToActionButtonTextColor,
        ])
    }

    #[test]
    fn test_plain_text_rendering() {
        let text = resolved_text(&sample(), false);
        assert_eq!(
            text,
            "linkColor                    #1f5aa6\n\
             largeSpacing                 48px\n\
             callToActionButtonTextColor  (unset)\n"
        );
    }

    #[test]
    fn test_swatch_only_with_color() {
        assert_eq!(swatch(Color::WHITE, false), "");
        let painted = swatch(Color::WHITE, true);
        assert!(painted.contains("██"));
        assert!(painted.contains("\u{1b}["));
    }

    #[test]
    fn test_json_mode() {
        let out = render_or_serialize(&sample(), OutputMode::Json, |_, _| unreachable!()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["largeSpacing"], "48px");
        assert!(parsed["callToActionButtonTextColor"].is_null());
    }

    #[test]
    fn test_yaml_mode() {
        let out = render_or_serialize(&sample(), OutputMode::Yaml, |_, _| unreachable!()).unwrap();
        assert!(out.contains("linkColor: "));
        assert!(out.contains("#1f5aa6"));
        assert!(out.contains("largeSpacing: 48px"));
    }

    #[test]
    fn test_text_mode_uses_renderer() {
        let out = render_or_serialize(&sample(), OutputMode::Text, |_, color| {
            format!("color={color}")
        })
        .unwrap();
        assert_eq!(out, "color=false");
    }
}
