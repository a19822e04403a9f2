//! Fallback rules for derived tokens and registry validation.

use std::collections::HashMap;

use super::Token;
use crate::error::{ThemeError, ThemeResult};
use crate::value::{Kind, Value};

/// How a token obtains its value when no override is given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// A plain variable; its value comes from the defaults or an override.
    Stored,
    /// Same value as another token.
    Alias(Token),
    /// Light or dark candidate, chosen by the lightness of a background.
    Contrast {
        background: Token,
        candidates: Candidates,
    },
    /// Arithmetic on a dimension token, keeping its unit.
    Scale { base: Token, scale: Scale },
    /// Another color token, darkened by `amount`.
    Darken { base: Token, amount: f32 },
    /// A constant.
    Literal(Literal),
    /// Resolves to nothing unless overridden.
    Unset,
    /// One of two keywords depending on a flag token.
    Switch {
        flag: Token,
        on: &'static str,
        off: &'static str,
    },
}

/// The light/dark pair a contrast rule chooses from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidates {
    /// The raw `textColor` / `textColorDark` variables.
    Text,
    /// Light candidate, dark candidate.
    Pair(Token, Token),
}

/// A numeric transform applied by [`Rule::Scale`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    Times(f64),
    DividedBy(f64),
}

impl Scale {
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Scale::Times(k) => v * k,
            Scale::DividedBy(k) => v / k,
        }
    }
}

/// Constant values a rule can produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Flag(bool),
    Number(f64),
    Keyword(&'static str),
}

impl Literal {
    pub fn to_value(self) -> Value {
        match self {
            Literal::Flag(b) => Value::Flag(b),
            Literal::Number(n) => Value::Number(n),
            Literal::Keyword(k) => Value::Keyword(k.to_string()),
        }
    }

    fn kind(self) -> Kind {
        match self {
            Literal::Flag(_) => Kind::Flag,
            Literal::Number(_) => Kind::Number,
            Literal::Keyword(_) => Kind::Keyword,
        }
    }
}

impl Rule {
    /// Tokens this rule reads. Raw variables (the `textColor` candidate) are
    /// not tokens and do not appear.
    pub fn dependencies(&self) -> Vec<Token> {
        match *self {
            Rule::Stored | Rule::Literal(_) | Rule::Unset => vec![],
            Rule::Alias(token) => vec![token],
            Rule::Contrast {
                background,
                candidates,
            } => {
                let mut deps = vec![background, Token::ContrastLuminanceThreshold];
                match candidates {
                    Candidates::Text => deps.push(Token::TextColorDark),
                    Candidates::Pair(light, dark) => {
                        deps.push(light);
                        deps.push(dark);
                    }
                }
                deps
            }
            Rule::Scale { base, .. } | Rule::Darken { base, .. } => vec![base],
            Rule::Switch { flag, .. } => vec![flag],
        }
    }

    /// The kind of value the rule yields for `token`, and the kinds it
    /// requires of each dependency.
    fn kinds(&self, token: Token) -> (Kind, Vec<(Token, Kind)>) {
        match *self {
            Rule::Stored | Rule::Unset => (token.kind(), vec![]),
            Rule::Alias(target) => (target.kind(), vec![]),
            Rule::Contrast { .. } => (
                Kind::Color,
                self.dependencies()
                    .into_iter()
                    .map(|t| {
                        let kind = if t == Token::ContrastLuminanceThreshold {
                            Kind::Number
                        } else {
                            Kind::Color
                        };
                        (t, kind)
                    })
                    .collect(),
            ),
            Rule::Scale { base, .. } => (Kind::Dimension, vec![(base, Kind::Dimension)]),
            Rule::Darken { base, .. } => (Kind::Color, vec![(base, Kind::Color)]),
            Rule::Literal(lit) => (lit.kind(), vec![]),
            Rule::Switch { flag, .. } => (Kind::Keyword, vec![(flag, Kind::Flag)]),
        }
    }
}

impl Token {
    /// The fallback rule of this token.
    pub fn rule(self) -> Rule {
        use Token::*;

        let contrast = |background: Token| Rule::Contrast {
            background,
            candidates: Candidates::Text,
        };
        let button_contrast = |background: Token| Rule::Contrast {
            background,
            candidates: Candidates::Pair(ButtonTextColor, ButtonTextColorDark),
        };

        match self {
            PrimaryColor | SecondaryColor | SuccessColor | WarningColor | DangerColor
            | NoneColor | BackgroundColor | AppBackgroundColor | SurfaceBackgroundColor
            | TextColorDark | ButtonTextColor | ButtonTextColorDark | IconColor
            | IconColorDark | NavigationLanguagePickerColor | ContrastLuminanceThreshold
            | MobileBreakpoint | TabletBreakpoint | DesktopBreakpoint | MediumSpacing
            | BaseFontSize | SurfaceBorderRadius | UppercaseTitles | FontFamily
            | HeaderFontFamily => Rule::Stored,

            TextColor => contrast(BackgroundColor),
            TitleTransform => Rule::Switch {
                flag: UppercaseTitles,
                on: "uppercase",
                off: "none",
            },

            AppBarBackgroundColor => Rule::Alias(SurfaceBackgroundColor),
            AppBarHeight => Rule::Alias(LargeSpacing),
            BaseTabletFontSize => Rule::Alias(BaseFontSize),
            BlockquoteBackgroundColor => Rule::Alias(SurfaceBackgroundColor),
            BlockquoteIconColor => Rule::Alias(PrimaryColor),
            BlockquoteTextColor => contrast(BlockquoteBackgroundColor),
            BurgerColor => Rule::Alias(IconColor),
            BurgerHoverColor => Rule::Alias(IconHoverColor),
            BurgerColorDark => Rule::Alias(IconColorDark),
            ButtonBorderRadius => Rule::Alias(SurfaceBorderRadius),
            CallToActionBackgroundColor => Rule::Alias(PrimaryColor),
            CallToActionTextColor => contrast(CallToActionBackgroundColor),
            CallToActionButtonBackgroundColor
            | CallToActionButtonBackgroundHoverColor
            | CallToActionButtonTextColor
            | CallToActionButtonTextHoverColor => Rule::Unset,
            CounterBarColor => Rule::Alias(PrimaryColor),
            CounterBackgroundColor => Rule::Alias(SurfaceBackgroundColor),
            CounterTextColor => contrast(CounterBackgroundColor),
            DialogBackgroundColor => Rule::Alias(SurfaceBackgroundColor),
            DialogTextColor => contrast(DialogBackgroundColor),
            DialogCloseColor => Rule::Contrast {
                background: DialogBackgroundColor,
                candidates: Candidates::Pair(IconColor, IconColorDark),
            },
            DisableElevation => Rule::Literal(Literal::Flag(false)),
            DrawerBackgroundColor => Rule::Alias(SurfaceBackgroundColor),
            ExpandableBackgroundColor => Rule::Alias(SurfaceBackgroundColor),
            ExtraLargeSpacing => Rule::Scale {
                base: MediumSpacing,
                scale: Scale::Times(4.0),
            },
            LargeSpacing => Rule::Scale {
                base: MediumSpacing,
                scale: Scale::Times(2.0),
            },
            SmallSpacing => Rule::Scale {
                base: MediumSpacing,
                scale: Scale::DividedBy(2.0),
            },
            ExtraSmallSpacing => Rule::Scale {
                base: MediumSpacing,
                scale: Scale::DividedBy(4.0),
            },
            FooterBackgroundColor => Rule::Alias(PrimaryColor),
            FooterTextColor => contrast(FooterBackgroundColor),
            FooterHeadingColor => Rule::Alias(FooterTextColor),
            FormBackgroundColor => Rule::Alias(PrimaryColor),
            FormLinkTextColor => contrast(FormBackgroundColor),
            FormTextColor => contrast(FormBackgroundColor),
            HeadingColor => Rule::Alias(TextColor),
            HeadingColorDark => Rule::Alias(TextColorDark),
            IconHoverColor => Rule::Alias(PrimaryColor),
            InsightBackgroundColor => Rule::Alias(PrimaryColor),
            InsightTextColor => contrast(InsightBackgroundColor),
            LandingSectionArrowColor => Rule::Alias(LandingSectionTitleColor),
            LandingSectionBackgroundColor => Rule::Alias(PrimaryColor),
            LandingSectionTitleColor => Rule::Alias(TextColor),
            LandingSectionTitleBackgroundColor => Rule::Unset,
            LinkColor => Rule::Alias(PrimaryColor),
            LinkSecondaryColor => Rule::Alias(SecondaryColor),
            LinkStyle => Rule::Literal(Literal::Keyword("lineGrow")),
            ListMarkerColor => Rule::Alias(PrimaryColor),
            ListTextColor => Rule::Alias(TextColor),
            NavigationIconColor => Rule::Alias(IconColor),
            NavigationIconColorDark => Rule::Alias(IconColorDark),
            NavigationLanguagePickerHoverColor => Rule::Alias(PrimaryColor),
            NavigationLanguagePickerIconColor => Rule::Contrast {
                background: NavigationLanguagePickerColor,
                candidates: Candidates::Pair(NavigationIconColor, NavigationIconColorDark),
            },
            NavigationMenuBackgroundColor => Rule::Alias(BackgroundColor),
            OrderedListMarkerColor => Rule::Alias(ListMarkerColor),
            OrderedListTextColor => Rule::Alias(ListTextColor),
            PullquoteBackgroundColor => Rule::Alias(BackgroundColor),
            PullquoteTextColor => Rule::Alias(PrimaryColor),
            ScrollBarColor => Rule::Alias(PrimaryColor),
            ScrollBarBackgroundColor => Rule::Alias(SurfaceBackgroundColor),
            SectionMarkerBackgroundColor => Rule::Alias(PrimaryColor),
            SectionMarkerNumberColor => contrast(SectionMarkerBackgroundColor),
            SectionMarkerNumberOpacity => Rule::Literal(Literal::Number(0.3)),
            SectionMarkerTextColor => contrast(SectionMarkerBackgroundColor),
            SectionMarkerTitleColor => contrast(SectionMarkerBackgroundColor),
            ShareButtonBackgroundColor => Rule::Alias(PrimaryColor),
            ShareButtonBackgroundHoverColor => Rule::Darken {
                base: ShareButtonBackgroundColor,
                amount: crate::theme::DEFAULT_DARKEN_AMOUNT,
            },
            ShareButtonTextColor => button_contrast(ShareButtonBackgroundColor),
            ShareButtonTextHoverColor => button_contrast(ShareButtonBackgroundHoverColor),
            UnorderedListMarkerColor => Rule::Alias(ListMarkerColor),
            UnorderedListTextColor => Rule::Alias(ListTextColor),
        }
    }
}

/// Validates the built-in registry.
///
/// Checks that every rule yields its token's declared kind, that rule inputs
/// have the kinds the rule needs, and that no fallback chain loops back on
/// itself. Resolution does not guard against cycles, so this is the only
/// place one would be caught.
pub fn validate_registry() -> ThemeResult<()> {
    validate_rules(Token::ALL, Token::rule)
}

/// Validates an arbitrary rule assignment over `tokens`.
pub fn validate_rules(tokens: &[Token], rule_of: impl Fn(Token) -> Rule) -> ThemeResult<()> {
    for &token in tokens {
        let (produced, inputs) = rule_of(token).kinds(token);
        if produced != token.kind() {
            return Err(ThemeError::RuleKind {
                token: token.name().to_string(),
                declared: token.kind(),
                produced,
            });
        }
        for (input, required) in inputs {
            if input.kind() != required {
                return Err(ThemeError::RuleKind {
                    token: input.name().to_string(),
                    declared: input.kind(),
                    produced: required,
                });
            }
        }
    }

    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Visiting,
        Done,
    }

    fn visit(
        token: Token,
        rule_of: &dyn Fn(Token) -> Rule,
        marks: &mut HashMap<Token, Mark>,
        stack: &mut Vec<Token>,
    ) -> ThemeResult<()> {
        match marks.get(&token) {
            Some(Mark::Done) => return Ok(()),
            Some(Mark::Visiting) => {
                let start = stack.iter().position(|t| *t == token).unwrap_or(0);
                let mut path: Vec<String> =
                    stack[start..].iter().map(|t| t.name().to_string()).collect();
                path.push(token.name().to_string());
                return Err(ThemeError::CycleDetected { path });
            }
            None => {}
        }

        marks.insert(token, Mark::Visiting);
        stack.push(token);
        for dep in rule_of(token).dependencies() {
            visit(dep, rule_of, marks, stack)?;
        }
        stack.pop();
        marks.insert(token, Mark::Done);
        Ok(())
    }

    let mut marks = HashMap::new();
    let mut stack = Vec::new();
    for &token in tokens {
        visit(token, &rule_of, &mut marks, &mut stack)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_is_valid() {
        validate_registry().unwrap();
    }

    #[test]
    fn test_alias_cycle_detected() {
        let rules = |token: Token| match token {
            Token::LinkColor => Rule::Alias(Token::PrimaryColor),
            Token::PrimaryColor => Rule::Alias(Token::LinkColor),
            other => other.rule(),
        };
        let err = validate_rules(&[Token::LinkColor, Token::PrimaryColor], rules).unwrap_err();
        match err {
            ThemeError::CycleDetected { path } => {
                assert_eq!(path, vec!["linkColor", "primaryColor", "linkColor"]);
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_self_reference_detected() {
        let rules = |token: Token| match token {
            Token::FooterTextColor => contrast_on(Token::FooterTextColor),
            other => other.rule(),
        };
        let err = validate_rules(&[Token::FooterTextColor], rules).unwrap_err();
        assert!(matches!(err, ThemeError::CycleDetected { .. }));
    }

    fn contrast_on(background: Token) -> Rule {
        Rule::Contrast {
            background,
            candidates: Candidates::Text,
        }
    }

    #[test]
    fn test_indirect_cycle_through_contrast_detected() {
        // primaryColor -> footerTextColor -> footerBackgroundColor -> primaryColor
        let rules = |token: Token| match token {
            Token::PrimaryColor => Rule::Alias(Token::FooterTextColor),
            other => other.rule(),
        };
        let err = validate_rules(&[Token::PrimaryColor], rules).unwrap_err();
        assert!(err.to_string().contains("primaryColor"));
    }

    #[test]
    fn test_kind_mismatch_detected() {
        let rules = |token: Token| match token {
            Token::LargeSpacing => Rule::Alias(Token::PrimaryColor),
            other => other.rule(),
        };
        let err = validate_rules(&[Token::LargeSpacing], rules).unwrap_err();
        assert!(matches!(
            err,
            ThemeError::RuleKind {
                declared: Kind::Dimension,
                produced: Kind::Color,
                ..
            }
        ));
    }

    #[test]
    fn test_scale_requires_dimension_input() {
        let rules = |token: Token| match token {
            Token::LargeSpacing => Rule::Scale {
                base: Token::ContrastLuminanceThreshold,
                scale: Scale::Times(2.0),
            },
            other => other.rule(),
        };
        assert!(validate_rules(&[Token::LargeSpacing], rules).is_err());
    }

    #[test]
    fn test_contrast_dependencies_include_threshold_and_pair() {
        let deps = Token::DialogCloseColor.rule().dependencies();
        assert_eq!(
            deps,
            vec![
                Token::DialogBackgroundColor,
                Token::ContrastLuminanceThreshold,
                Token::IconColor,
                Token::IconColorDark
            ]
        );
    }

    #[test]
    fn test_scale_apply() {
        assert_eq!(Scale::Times(4.0).apply(6.0), 24.0);
        assert_eq!(Scale::DividedBy(4.0).apply(24.0), 6.0);
    }
}
