//! Media-query helpers keyed on the breakpoint tokens.

use std::fmt;

use super::ThemeResolver;
use crate::token::Token;

/// A named viewport breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn token(self) -> Token {
        match self {
            Breakpoint::Mobile => Token::MobileBreakpoint,
            Breakpoint::Tablet => Token::TabletBreakpoint,
            Breakpoint::Desktop => Token::DesktopBreakpoint,
        }
    }
}

#[derive(Clone, Copy)]
enum Bound {
    Max,
    Min,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Bound::Max => "max-width",
            Bound::Min => "min-width",
        })
    }
}

impl ThemeResolver {
    /// Wraps `css` in a `max-width` query at `breakpoint`.
    ///
    /// ```rust
    /// use crane_theme::{Breakpoint, ThemeResolver};
    ///
    /// let theme = ThemeResolver::new();
    /// assert_eq!(
    ///     theme.media_query(Breakpoint::Mobile, "a { color: red; }"),
    ///     "@media screen and (max-width: 800px) { a { color: red; } }"
    /// );
    /// ```
    pub fn media_query(&self, breakpoint: Breakpoint, css: &str) -> String {
        self.query(breakpoint, Bound::Max, css)
    }

    /// Wraps `css` in a `min-width` query at `breakpoint`.
    pub fn min_media_query(&self, breakpoint: Breakpoint, css: &str) -> String {
        self.query(breakpoint, Bound::Min, css)
    }

    pub fn mobile_query(&self, css: &str) -> String {
        self.media_query(Breakpoint::Mobile, css)
    }

    pub fn tablet_query(&self, css: &str) -> String {
        self.media_query(Breakpoint::Tablet, css)
    }

    pub fn desktop_query(&self, css: &str) -> String {
        self.media_query(Breakpoint::Desktop, css)
    }

    pub fn mobile_min_query(&self, css: &str) -> String {
        self.min_media_query(Breakpoint::Mobile, css)
    }

    pub fn tablet_min_query(&self, css: &str) -> String {
        self.min_media_query(Breakpoint::Tablet, css)
    }

    pub fn desktop_min_query(&self, css: &str) -> String {
        self.min_media_query(Breakpoint::Desktop, css)
    }

    fn query(&self, breakpoint: Breakpoint, bound: Bound, css: &str) -> String {
        let width = self.number_of(breakpoint.token());
        format!("@media screen and ({bound}: {width}px) {{ {css} }}")
    }
}
