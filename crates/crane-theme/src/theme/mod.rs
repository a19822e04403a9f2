//! Theme resolution.
//!
//! This module provides:
//!
//! - [`ThemeResolver`]: merged variables plus lazy resolution of derived tokens
//! - [`ContrastOptions`]: inputs to the light/dark contrast decision
//! - [`Intent`]: semantic intents mapped to concrete color tokens
//!
//! Typed per-token accessors (`link_color()`, `large_spacing()`, ...) and the
//! media-query helpers are inherent methods on [`ThemeResolver`].

mod accessors;
mod contrast;
mod intent;
mod media;
mod resolver;

pub use contrast::{contrast_color, ContrastOptions};
pub use intent::Intent;
pub use media::Breakpoint;
pub use resolver::{ResolvedTheme, ThemeResolver};

/// Lightness fraction removed by [`ThemeResolver::darken`] when no amount is
/// given, and by the `shareButtonBackgroundHoverColor` rule.
pub const DEFAULT_DARKEN_AMOUNT: f32 = 0.2;
