//! The light/dark contrast decision.

use crate::color::Color;

/// Inputs to [`ThemeResolver::contrast_color`](super::ThemeResolver::contrast_color).
///
/// Only the background is required. Candidates default to the theme's raw
/// `textColor` / `textColorDark` pair and the threshold defaults to
/// `contrastLuminanceThreshold`.
///
/// # Example
///
/// ```rust
/// use crane_theme::{Color, ContrastOptions, ThemeResolver};
///
/// let theme = ThemeResolver::new();
/// let options = ContrastOptions::new(Color::BLACK)
///     .candidates(Color::BLACK, Color::WHITE)
///     .threshold(50.0);
/// assert_eq!(theme.contrast_color(&options), Color::WHITE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastOptions {
    pub background: Color,
    /// Color to use on light backgrounds.
    pub light: Option<Color>,
    /// Color to use on dark backgrounds.
    pub dark: Option<Color>,
    /// Lightness (0–100) below which a background counts as dark.
    pub threshold: Option<f32>,
}

impl ContrastOptions {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            light: None,
            dark: None,
            threshold: None,
        }
    }

    /// Sets both candidates.
    pub fn candidates(mut self, light: Color, dark: Color) -> Self {
        self.light = Some(light);
        self.dark = Some(dark);
        self
    }

    pub fn light(mut self, light: Color) -> Self {
        self.light = Some(light);
        self
    }

    pub fn dark(mut self, dark: Color) -> Self {
        self.dark = Some(dark);
        self
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

/// Picks `dark` when the background's lightness is below `threshold`,
/// `light` otherwise.
pub fn contrast_color(background: Color, light: Color, dark: Color, threshold: f32) -> Color {
    if background.lightness() < threshold {
        dark
    } else {
        light
    }
}
