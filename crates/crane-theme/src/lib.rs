//! # crane-theme - design tokens with fallback chains
//!
//! A theme is a set of named design tokens (colors, spacings, font settings,
//! breakpoints) that downstream renderers read. Only a small set of base
//! variables needs a value; every other token falls back to another token,
//! to arithmetic on one, or to a contrast decision against a background.
//!
//! ## Layers
//!
//! 1. **Defaults**: [`default_variables`] gives every stored token a value.
//! 2. **Overrides**: an [`Overrides`] set, built in code or loaded from YAML
//!    or JSON, is merged over the defaults and normalized once.
//! 3. **Rules**: each derived [`Token`] has a [`Rule`] that computes its value
//!    when the token itself is not overridden.
//!
//! ## Quick start
//!
//! ```rust
//! use crane_theme::{Color, Intent, Overrides, ThemeResolver};
//!
//! let overrides = Overrides::from_yaml_str(
//!     "primaryColor: '#0b3d91'\nmediumSpacing: 16px\n",
//! ).unwrap();
//! let theme = ThemeResolver::with_overrides(&overrides).unwrap();
//!
//! // Derived from primaryColor.
//! assert_eq!(theme.link_color(), Color::from_u32(0x0b3d91));
//! // Derived from mediumSpacing.
//! assert_eq!(theme.large_spacing().to_string(), "32px");
//! // Dark footer background, so the footer text is the dark-background candidate.
//! assert_eq!(theme.footer_text_color(), theme.text_color_dark());
//! assert_eq!(theme.intent_color(Intent::Primary), theme.primary_color());
//! ```
//!
//! ## Validation
//!
//! Token resolution does not guard against cyclic rules. [`validate_registry`]
//! walks the rule graph and reports cycles and kind mismatches; the test
//! suite runs it against the built-in registry.

pub mod color;
pub mod defaults;
pub mod dimension;
pub mod error;
pub mod overrides;
pub mod theme;
pub mod token;
pub mod value;

pub use color::{Color, Hsl};
pub use defaults::default_variables;
pub use dimension::{calc, separate_unit, Dimension};
pub use error::{ParseError, ThemeError, ThemeResult};
pub use overrides::{Overrides, DEPRECATED_ALIASES};
pub use theme::{
    contrast_color, Breakpoint, ContrastOptions, Intent, ResolvedTheme, ThemeResolver,
    DEFAULT_DARKEN_AMOUNT,
};
pub use token::{validate_registry, validate_rules, Candidates, Literal, Rule, Scale, Token};
pub use value::{Kind, RawValue, Value};
