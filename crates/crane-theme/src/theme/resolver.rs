//! The theme resolver: merged variables plus fallback evaluation.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::contrast::{contrast_color, ContrastOptions};
use super::DEFAULT_DARKEN_AMOUNT;
use crate::color::Color;
use crate::defaults::default_variables;
use crate::dimension::{self, Dimension};
use crate::error::{ParseError, ThemeResult};
use crate::overrides::Overrides;
use crate::token::{Candidates, Rule, Token};
use crate::value::{RawValue, Value};

/// Resolves design tokens against the defaults and a set of overrides.
///
/// A resolver is built once and read many times. Construction merges the
/// overrides over [`default_variables`] and normalizes every value; token
/// reads afterwards never fail. Derived tokens are computed on each read
/// from their [`Rule`] unless an override of the same name exists.
///
/// # Example
///
/// ```rust
/// use crane_theme::{Color, Overrides, ThemeResolver};
///
/// let overrides = Overrides::new()
///     .set("primaryColor", "#112233")
///     .set("mediumSpacing", "10px");
/// let theme = ThemeResolver::with_overrides(&overrides).unwrap();
///
/// assert_eq!(theme.link_color(), Color::from_u32(0x112233));
/// assert_eq!(theme.large_spacing().to_string(), "20px");
/// ```
#[derive(Debug, Clone)]
pub struct ThemeResolver {
    variables: BTreeMap<String, Value>,
}

impl ThemeResolver {
    /// Creates a resolver over the default variables.
    pub fn new() -> Self {
        Self {
            variables: default_variables(),
        }
    }

    /// Creates a resolver with `overrides` merged over the defaults.
    ///
    /// Deprecated names are migrated first. Registered tokens are normalized
    /// to their kind; unknown names keep their natural type except that
    /// color-suffixed names are still parsed as colors.
    pub fn with_overrides(overrides: &Overrides) -> ThemeResult<Self> {
        let mut variables = default_variables();
        let mut unknown = Vec::new();

        for (name, raw) in overrides.migrated() {
            let value = match Token::from_name(&name) {
                Some(token) => Value::coerce(&name, &raw, token.kind())?,
                None => {
                    unknown.push(name.clone());
                    Value::from_unknown(&name, &raw)?
                }
            };
            variables.insert(name, value);
        }

        log::debug!(
            "built theme from {} overrides ({} unknown{}{})",
            overrides.len(),
            unknown.len(),
            if unknown.is_empty() { "" } else { ": " },
            unknown.join(", ")
        );

        Ok(Self { variables })
    }

    /// The merged and normalized variable mapping.
    pub fn variables(&self) -> &BTreeMap<String, Value> {
        &self.variables
    }

    /// The merged value stored under `name`, without evaluating any rule.
    pub fn raw(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Variable names that are not registered tokens.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.variables
            .keys()
            .map(String::as_str)
            .filter(|name| Token::from_name(name).is_none())
            .collect()
    }

    /// Generic lookup by name.
    ///
    /// Registered names are resolved like [`resolve`](Self::resolve);
    /// anything else returns the stored variable, if any.
    pub fn get(&self, name: &str) -> Option<Value> {
        match Token::from_name(name) {
            Some(token) => self.resolve(token),
            None => self.variables.get(name).cloned(),
        }
    }

    /// Resolves a token: its own override if present, else its rule.
    ///
    /// Returns `None` only for tokens whose rule is [`Rule::Unset`] and that
    /// have no override.
    pub fn resolve(&self, token: Token) -> Option<Value> {
        if token.honors_override() {
            if let Some(value) = self.variables.get(token.name()) {
                return Some(value.clone());
            }
        }

        match token.rule() {
            Rule::Stored => self.variables.get(token.name()).cloned(),
            Rule::Alias(target) => self.resolve(target),
            Rule::Contrast {
                background,
                candidates,
            } => {
                let (light, dark) = match candidates {
                    Candidates::Text => (self.raw_text_color(), self.color_of(Token::TextColorDark)),
                    Candidates::Pair(light, dark) => (self.color_of(light), self.color_of(dark)),
                };
                Some(Value::Color(contrast_color(
                    self.color_of(background),
                    light,
                    dark,
                    self.threshold(),
                )))
            }
            Rule::Scale { base, scale } => Some(Value::Dimension(
                self.dimension_of(base).map(|v| scale.apply(v)),
            )),
            Rule::Darken { base, amount } => Some(Value::Color(self.color_of(base).darken(amount))),
            Rule::Literal(literal) => Some(literal.to_value()),
            Rule::Unset => None,
            Rule::Switch { flag, on, off } => {
                let keyword = if self.flag_of(flag) { on } else { off };
                Some(Value::Keyword(keyword.to_string()))
            }
        }
    }

    /// Resolves every registered token, in registry order.
    pub fn resolve_all(&self) -> ResolvedTheme {
        ResolvedTheme {
            entries: Token::ALL.iter().map(|&t| (t, self.resolve(t))).collect(),
        }
    }

    /// Parses any raw value into a color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crane_theme::{Color, ThemeResolver};
    ///
    /// let theme = ThemeResolver::new();
    /// assert_eq!(theme.color("#ff0000").unwrap(), Color::rgb(255, 0, 0));
    /// assert_eq!(theme.color(0x00ff00).unwrap(), Color::rgb(0, 255, 0));
    /// ```
    pub fn color(&self, value: impl Into<RawValue>) -> Result<Color, ParseError> {
        Color::from_raw(&value.into())
    }

    /// Darkens `color` by `amount`, or by [`DEFAULT_DARKEN_AMOUNT`] when `None`.
    pub fn darken(&self, color: Color, amount: impl Into<Option<f32>>) -> Color {
        color.darken(amount.into().unwrap_or(DEFAULT_DARKEN_AMOUNT))
    }

    /// Chooses a foreground color for `options.background`.
    ///
    /// Unset candidates fall back to the raw `textColor` / `textColorDark`
    /// variables and an unset threshold to `contrastLuminanceThreshold`.
    pub fn contrast_color(&self, options: &ContrastOptions) -> Color {
        contrast_color(
            options.background,
            options.light.unwrap_or_else(|| self.raw_text_color()),
            options.dark.unwrap_or_else(|| self.color_of(Token::TextColorDark)),
            options.threshold.unwrap_or_else(|| self.threshold()),
        )
    }

    /// Applies `f` to the numeric part of a dimension string, keeping its unit.
    ///
    /// ```rust
    /// use crane_theme::ThemeResolver;
    ///
    /// let theme = ThemeResolver::new();
    /// assert_eq!(theme.calc("16px", |v| v * 2.0).unwrap(), "32px");
    /// ```
    pub fn calc(&self, value: &str, f: impl FnOnce(f64) -> f64) -> Result<String, ParseError> {
        dimension::calc(value, f)
    }

    pub(super) fn color_of(&self, token: Token) -> Color {
        match self.resolve(token) {
            Some(Value::Color(color)) => color,
            other => kind_fallback(token, other, Color::BLACK),
        }
    }

    pub(super) fn optional_color_of(&self, token: Token) -> Option<Color> {
        self.resolve(token).and_then(|v| v.as_color())
    }

    pub(super) fn dimension_of(&self, token: Token) -> Dimension {
        match self.resolve(token) {
            Some(Value::Dimension(dimension)) => dimension,
            other => kind_fallback(token, other, Dimension::new(0.0, "")),
        }
    }

    pub(super) fn number_of(&self, token: Token) -> f64 {
        match self.resolve(token) {
            Some(Value::Number(n)) => n,
            other => kind_fallback(token, other, 0.0),
        }
    }

    pub(super) fn flag_of(&self, token: Token) -> bool {
        self.resolve(token).and_then(|v| v.as_flag()).unwrap_or(false)
    }

    pub(super) fn string_of(&self, token: Token) -> String {
        self.resolve(token)
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default()
    }

    /// The raw `textColor` variable, used as the light-background candidate.
    fn raw_text_color(&self) -> Color {
        self.variables
            .get(Token::TextColor.name())
            .and_then(Value::as_color)
            .unwrap_or(Color::BLACK)
    }

    fn threshold(&self) -> f32 {
        self.number_of(Token::ContrastLuminanceThreshold) as f32
    }
}

/// Stored values are coerced to their token's kind at construction and
/// `validate_registry` checks every rule's output kind, so reaching this
/// means the registry table itself is wrong.
fn kind_fallback<T: std::fmt::Debug>(token: Token, found: Option<Value>, fallback: T) -> T {
    debug_assert!(
        false,
        "token '{token}' resolved to {found:?}, expected a {}",
        token.kind()
    );
    log::warn!(
        "token '{token}' resolved to {found:?}, expected a {}; using {fallback:?}",
        token.kind()
    );
    fallback
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Every registered token with its resolved value.
///
/// Serializes as a map in registry order; unset tokens serialize as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    entries: Vec<(Token, Option<Value>)>,
}

impl ResolvedTheme {
    pub fn get(&self, token: Token) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Token, Option<&Value>)> {
        self.entries.iter().map(|(t, v)| (*t, v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps only the given tokens, in the given order.
    pub fn select(self, tokens: &[Token]) -> Self {
        let entries = tokens
            .iter()
            .map(|&token| {
                let value = self
                    .entries
                    .iter()
                    .find(|(t, _)| *t == token)
                    .and_then(|(_, v)| v.clone());
                (token, value)
            })
            .collect();
        Self { entries }
    }
}

impl Serialize for ResolvedTheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (token, value) in &self.entries {
            map.serialize_entry(token.name(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use crate::value::Kind;

    fn theme(overrides: Overrides) -> ThemeResolver {
        ThemeResolver::with_overrides(&overrides).unwrap()
    }

    #[test]
    fn test_stored_tokens_resolve_to_defaults() {
        let theme = ThemeResolver::new();
        assert_eq!(
            theme.resolve(Token::PrimaryColor),
            Some(Value::Color(Color::from_u32(0x1f5aa6)))
        );
        assert_eq!(
            theme.resolve(Token::MediumSpacing),
            Some(Value::Dimension(Dimension::px(24.0)))
        );
    }

    #[test]
    fn test_every_token_resolves_to_its_kind() {
        let overrides = Overrides::new()
            .set("mediumSpacing", "1.5rem")
            .set("mobileBreakpoint", "640")
            .set("backgroundColor", "#101820")
            .set("uppercaseTitles", true);
        for theme in [ThemeResolver::new(), ThemeResolver::with_overrides(&overrides).unwrap()] {
            for &token in Token::ALL {
                match theme.resolve(token) {
                    Some(value) => assert_eq!(value.kind(), token.kind(), "{token}"),
                    None => assert_eq!(token.kind(), Kind::Color, "{token} has no value"),
                }
            }
        }
    }

    #[test]
    fn test_alias_follows_target() {
        let theme = ThemeResolver::new();
        assert_eq!(theme.resolve(Token::LinkColor), theme.resolve(Token::PrimaryColor));
        assert_eq!(
            theme.resolve(Token::AppBarBackgroundColor),
            theme.resolve(Token::SurfaceBackgroundColor)
        );
    }

    #[test]
    fn test_same_name_override_wins_over_rule() {
        let theme = theme(Overrides::new().set("linkColor", "#00ff00"));
        assert_eq!(
            theme.resolve(Token::LinkColor),
            Some(Value::Color(Color::rgb(0, 255, 0)))
        );
        assert_ne!(theme.resolve(Token::LinkColor), theme.resolve(Token::PrimaryColor));
    }

    #[test]
    fn test_text_color_override_is_a_candidate_not_a_result() {
        let theme = theme(
            Overrides::new()
                .set("textColor", "#333333")
                .set("backgroundColor", "#000000"),
        );
        // Dark background: the raw textColor is not chosen.
        assert_eq!(
            theme.resolve(Token::TextColor),
            Some(Value::Color(Color::WHITE))
        );
        assert_eq!(theme.raw("textColor"), Some(&Value::Color(Color::from_u32(0x333333))));
    }

    #[test]
    fn test_title_transform_ignores_override() {
        let theme = theme(Overrides::new().set("titleTransform", "capitalize"));
        assert_eq!(
            theme.resolve(Token::TitleTransform),
            Some(Value::Keyword("none".to_string()))
        );
    }

    #[test]
    fn test_unset_tokens_resolve_to_none() {
        let theme = ThemeResolver::new();
        assert_eq!(theme.resolve(Token::CallToActionButtonBackgroundColor), None);
        assert_eq!(theme.resolve(Token::LandingSectionTitleBackgroundColor), None);
    }

    #[test]
    fn test_darken_rule() {
        let theme = theme(Overrides::new().set("primaryColor", "#ff0000"));
        let base = Color::rgb(255, 0, 0);
        assert_eq!(
            theme.resolve(Token::ShareButtonBackgroundHoverColor),
            Some(Value::Color(base.darken(DEFAULT_DARKEN_AMOUNT)))
        );
    }

    #[test]
    fn test_invalid_override_fails_construction() {
        let err = ThemeResolver::with_overrides(&Overrides::new().set("mediumSpacing", "wide"))
            .unwrap_err();
        assert!(matches!(err, ThemeError::Parse(ParseError::InvalidDimension { .. })));

        let err = ThemeResolver::with_overrides(&Overrides::new().set("uppercaseTitles", 1))
            .unwrap_err();
        assert!(matches!(err, ThemeError::KindMismatch { .. }));
    }

    #[test]
    fn test_non_finite_threshold_fails_construction() {
        let overrides = Overrides::new().set("contrastLuminanceThreshold", "NaN");
        let err = ThemeResolver::with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, ThemeError::KindMismatch { .. }));
        assert!(err.to_string().contains("contrastLuminanceThreshold"));
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let theme = theme(
            Overrides::new()
                .set("brandName", "Crane")
                .set("mastheadColor", "red"),
        );
        assert_eq!(theme.get("brandName"), Some(Value::Text("Crane".to_string())));
        assert_eq!(theme.get("mastheadColor"), Some(Value::Color(Color::rgb(255, 0, 0))));
        assert_eq!(theme.unknown_keys(), vec!["brandName", "mastheadColor"]);
        assert_eq!(theme.get("nothingHere"), None);
    }

    #[test]
    fn test_contrast_color_defaults() {
        let theme = ThemeResolver::new();
        assert_eq!(
            theme.contrast_color(&ContrastOptions::new(Color::WHITE)),
            Color::from_u32(0x222222)
        );
        assert_eq!(
            theme.contrast_color(&ContrastOptions::new(Color::BLACK)),
            Color::WHITE
        );
    }

    #[test]
    fn test_darken_helper_default_amount() {
        let theme = ThemeResolver::new();
        let color = Color::rgb(0x80, 0x40, 0x20);
        assert_eq!(theme.darken(color, None), color.darken(0.2));
        assert_eq!(theme.darken(color, 0.5), color.darken(0.5));
    }

    #[test]
    fn test_resolve_all_in_registry_order() {
        let all = ThemeResolver::new().resolve_all();
        assert_eq!(all.len(), Token::ALL.len());
        let tokens: Vec<Token> = all.iter().map(|(t, _)| t).collect();
        assert_eq!(tokens, Token::ALL);
        assert!(all.get(Token::CallToActionButtonTextColor).is_none());
    }

    #[test]
    fn test_resolved_theme_serializes_as_ordered_map() {
        let selected = ThemeResolver::new()
            .resolve_all()
            .select(&[Token::LinkColor, Token::LargeSpacing, Token::LandingSectionTitleBackgroundColor]);
        let json = serde_json::to_string(&selected).unwrap();
        assert_eq!(
            json,
            r##"{"linkColor":"#1f5aa6","largeSpacing":"48px","landingSectionTitleBackgroundColor":null}"##
        );
    }

    #[test]
    fn test_resolver_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ThemeResolver>();
    }
}
