//! The static token registry.
//!
//! Every design token a theme knows about is a [`Token`] variant with a
//! canonical camelCase name, a [`Kind`] and a [`Rule`]. Stored tokens are
//! plain variables with a default; derived tokens compute their value from
//! other tokens when no override is given.
//!
//! The registry is fixed at compile time. Use [`validate_registry`] to check
//! that fallback chains terminate and produce the declared kinds.

mod rule;

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::value::Kind;

pub use rule::{validate_registry, validate_rules, Candidates, Literal, Rule, Scale};

macro_rules! tokens {
    ($( $variant:ident = $name:literal : $kind:ident ),* $(,)?) => {
        /// A registered design token.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Token {
            $( $variant, )*
        }

        impl Token {
            /// All registered tokens, in registry order.
            pub const ALL: &'static [Token] = &[ $( Token::$variant, )* ];

            /// The canonical variable name, e.g. `"appBarBackgroundColor"`.
            pub fn name(self) -> &'static str {
                match self {
                    $( Token::$variant => $name, )*
                }
            }

            /// The kind of value this token resolves to.
            pub fn kind(self) -> Kind {
                match self {
                    $( Token::$variant => Kind::$kind, )*
                }
            }
        }
    };
}

tokens! {
    // Stored base variables.
    PrimaryColor = "primaryColor": Color,
    SecondaryColor = "secondaryColor": Color,
    SuccessColor = "successColor": Color,
    WarningColor = "warningColor": Color,
    DangerColor = "dangerColor": Color,
    NoneColor = "noneColor": Color,
    BackgroundColor = "backgroundColor": Color,
    AppBackgroundColor = "appBackgroundColor": Color,
    SurfaceBackgroundColor = "surfaceBackgroundColor": Color,
    TextColorDark = "textColorDark": Color,
    ButtonTextColor = "buttonTextColor": Color,
    ButtonTextColorDark = "buttonTextColorDark": Color,
    IconColor = "iconColor": Color,
    IconColorDark = "iconColorDark": Color,
    NavigationLanguagePickerColor = "navigationLanguagePickerColor": Color,
    ContrastLuminanceThreshold = "contrastLuminanceThreshold": Number,
    MobileBreakpoint = "mobileBreakpoint": Number,
    TabletBreakpoint = "tabletBreakpoint": Number,
    DesktopBreakpoint = "desktopBreakpoint": Number,
    MediumSpacing = "mediumSpacing": Dimension,
    BaseFontSize = "baseFontSize": Dimension,
    SurfaceBorderRadius = "surfaceBorderRadius": Dimension,
    UppercaseTitles = "uppercaseTitles": Flag,
    FontFamily = "fontFamily": Text,
    HeaderFontFamily = "headerFontFamily": Text,

    // Derived tokens.
    TextColor = "textColor": Color,
    TitleTransform = "titleTransform": Keyword,
    AppBarBackgroundColor = "appBarBackgroundColor": Color,
    AppBarHeight = "appBarHeight": Dimension,
    BaseTabletFontSize = "baseTabletFontSize": Dimension,
    BlockquoteBackgroundColor = "blockquoteBackgroundColor": Color,
    BlockquoteIconColor = "blockquoteIconColor": Color,
    BlockquoteTextColor = "blockquoteTextColor": Color,
    BurgerColor = "burgerColor": Color,
    BurgerHoverColor = "burgerHoverColor": Color,
    BurgerColorDark = "burgerColorDark": Color,
    ButtonBorderRadius = "buttonBorderRadius": Dimension,
    CallToActionBackgroundColor = "callToActionBackgroundColor": Color,
    CallToActionTextColor = "callToActionTextColor": Color,
    CallToActionButtonBackgroundColor = "callToActionButtonBackgroundColor": Color,
    CallToActionButtonBackgroundHoverColor = "callToActionButtonBackgroundHoverColor": Color,
    CallToActionButtonTextColor = "callToActionButtonTextColor": Color,
    CallToActionButtonTextHoverColor = "callToActionButtonTextHoverColor": Color,
    CounterBarColor = "counterBarColor": Color,
    CounterBackgroundColor = "counterBackgroundColor": Color,
    CounterTextColor = "counterTextColor": Color,
    DialogBackgroundColor = "dialogBackgroundColor": Color,
    DialogTextColor = "dialogTextColor": Color,
    DialogCloseColor = "dialogCloseColor": Color,
    DisableElevation = "disableElevation": Flag,
    DrawerBackgroundColor = "drawerBackgroundColor": Color,
    ExpandableBackgroundColor = "expandableBackgroundColor": Color,
    ExtraLargeSpacing = "extraLargeSpacing": Dimension,
    LargeSpacing = "largeSpacing": Dimension,
    SmallSpacing = "smallSpacing": Dimension,
    ExtraSmallSpacing = "extraSmallSpacing": Dimension,
    FooterBackgroundColor = "footerBackgroundColor": Color,
    FooterTextColor = "footerTextColor": Color,
    FooterHeadingColor = "footerHeadingColor": Color,
    FormBackgroundColor = "formBackgroundColor": Color,
    FormLinkTextColor = "formLinkTextColor": Color,
    FormTextColor = "formTextColor": Color,
    HeadingColor = "headingColor": Color,
    HeadingColorDark = "headingColorDark": Color,
    IconHoverColor = "iconHoverColor": Color,
    InsightBackgroundColor = "insightBackgroundColor": Color,
    InsightTextColor = "insightTextColor": Color,
    LandingSectionArrowColor = "landingSectionArrowColor": Color,
    LandingSectionBackgroundColor = "landingSectionBackgroundColor": Color,
    LandingSectionTitleColor = "landingSectionTitleColor": Color,
    LandingSectionTitleBackgroundColor = "landingSectionTitleBackgroundColor": Color,
    LinkColor = "linkColor": Color,
    LinkSecondaryColor = "linkSecondaryColor": Color,
    LinkStyle = "linkStyle": Keyword,
    ListMarkerColor = "listMarkerColor": Color,
    ListTextColor = "listTextColor": Color,
    NavigationIconColor = "navigationIconColor": Color,
    NavigationIconColorDark = "navigationIconColorDark": Color,
    NavigationLanguagePickerHoverColor = "navigationLanguagePickerHoverColor": Color,
    NavigationLanguagePickerIconColor = "navigationLanguagePickerIconColor": Color,
    NavigationMenuBackgroundColor = "navigationMenuBackgroundColor": Color,
    OrderedListMarkerColor = "orderedListMarkerColor": Color,
    OrderedListTextColor = "orderedListTextColor": Color,
    PullquoteBackgroundColor = "pullquoteBackgroundColor": Color,
    PullquoteTextColor = "pullquoteTextColor": Color,
    ScrollBarColor = "scrollBarColor": Color,
    ScrollBarBackgroundColor = "scrollBarBackgroundColor": Color,
    SectionMarkerBackgroundColor = "sectionMarkerBackgroundColor": Color,
    SectionMarkerNumberColor = "sectionMarkerNumberColor": Color,
    SectionMarkerNumberOpacity = "sectionMarkerNumberOpacity": Number,
    SectionMarkerTextColor = "sectionMarkerTextColor": Color,
    SectionMarkerTitleColor = "sectionMarkerTitleColor": Color,
    ShareButtonBackgroundColor = "shareButtonBackgroundColor": Color,
    ShareButtonBackgroundHoverColor = "shareButtonBackgroundHoverColor": Color,
    ShareButtonTextColor = "shareButtonTextColor": Color,
    ShareButtonTextHoverColor = "shareButtonTextHoverColor": Color,
    UnorderedListMarkerColor = "unorderedListMarkerColor": Color,
    UnorderedListTextColor = "unorderedListTextColor": Color,
}

static BY_NAME: Lazy<HashMap<&'static str, Token>> =
    Lazy::new(|| Token::ALL.iter().map(|t| (t.name(), *t)).collect());

impl Token {
    /// Looks up a token by its canonical name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crane_theme::Token;
    ///
    /// assert_eq!(Token::from_name("linkColor"), Some(Token::LinkColor));
    /// assert_eq!(Token::from_name("link_color"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Token> {
        BY_NAME.get(name).copied()
    }

    /// Whether the token is computed by a fallback rule.
    pub fn is_derived(self) -> bool {
        !matches!(self.rule(), Rule::Stored)
    }

    /// Whether an override under this token's own name short-circuits its rule.
    ///
    /// `textColor` names the raw light-background text candidate, and
    /// `titleTransform` is always computed from `uppercaseTitles`.
    pub fn honors_override(self) -> bool {
        !matches!(self, Token::TextColor | Token::TitleTransform)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
