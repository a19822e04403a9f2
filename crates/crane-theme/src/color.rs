//! Color values and the arithmetic themes perform on them.
//!
//! Colors are stored as 8-bit RGB channels plus a floating alpha. Parsing
//! accepts the CSS forms a theme author is likely to write: hex notation,
//! named colors, and the `rgb()`/`rgba()`/`hsl()`/`hsla()` functions.
//!
//! Lightness comparisons go through [`Hsl`], whose lightness is on a 0–100
//! scale so thresholds read like CSS percentages.

use std::fmt;
use std::str::FromStr;

use cssparser::{hsl_to_rgb, Color as CssColor, Parser, ParserInput};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;
use crate::value::RawValue;

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`.
    pub alpha: f32,
}

/// Hue/saturation/lightness view of a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, `0.0..360.0`.
    pub hue: f32,
    /// Saturation, `0.0..=100.0`.
    pub saturation: f32,
    /// Lightness, `0.0..=100.0`.
    pub lightness: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Creates a color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// Creates an opaque color from a packed `0xRRGGBB` integer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crane_theme::Color;
    ///
    /// assert_eq!(Color::from_u32(0x112233), Color::rgb(0x11, 0x22, 0x33));
    /// ```
    pub const fn from_u32(packed: u32) -> Self {
        Self::rgb(
            ((packed >> 16) & 0xff) as u8,
            ((packed >> 8) & 0xff) as u8,
            (packed & 0xff) as u8,
        )
    }

    /// Parses a CSS color string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crane_theme::Color;
    ///
    /// assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
    /// assert_eq!(Color::parse("rgb(17, 34, 51)").unwrap(), Color::rgb(17, 34, 51));
    /// assert_eq!(Color::parse("Black").unwrap(), Color::BLACK);
    /// assert!(Color::parse("not a color").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut css = ParserInput::new(input.trim());
        let mut parser = Parser::new(&mut css);
        CssColor::parse(&mut parser)
            .ok()
            .filter(|_| parser.is_exhausted())
            .and_then(from_css)
            .ok_or_else(|| ParseError::color(input))
    }

    /// Normalizes any raw theme value into a color.
    ///
    /// Strings are parsed as CSS colors and whole numbers are read as packed
    /// `0xRRGGBB` integers.
    pub fn from_raw(raw: &RawValue) -> Result<Self, ParseError> {
        match raw {
            RawValue::String(s) => Color::parse(s),
            RawValue::Number(n) if n.fract() == 0.0 && (0.0..=f64::from(0xff_ffff)).contains(n) => {
                Ok(Color::from_u32(*n as u32))
            }
            RawValue::Number(n) => Err(ParseError::color(n.to_string())),
            RawValue::Bool(b) => Err(ParseError::color(b.to_string())),
        }
    }

    /// Returns the HSL representation of this color.
    pub fn hsl(&self) -> Hsl {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Hsl {
                hue: 0.0,
                saturation: 0.0,
                lightness: lightness * 100.0,
            };
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl {
            hue: hue * 60.0,
            saturation: saturation * 100.0,
            lightness: lightness * 100.0,
        }
    }

    /// Builds a color from HSL components and an alpha value.
    pub fn from_hsl(hsl: Hsl, alpha: f32) -> Self {
        let (r, g, b) = hsl_to_rgb(
            hsl.hue.rem_euclid(360.0) / 360.0,
            (hsl.saturation / 100.0).clamp(0.0, 1.0),
            (hsl.lightness / 100.0).clamp(0.0, 1.0),
        );
        Self::rgba(unit_to_channel(r), unit_to_channel(g), unit_to_channel(b), alpha)
    }

    /// Perceptual lightness on a 0–100 scale.
    pub fn lightness(&self) -> f32 {
        self.hsl().lightness
    }

    /// Reduces lightness by `amount` times the current lightness.
    ///
    /// `darken(0.2)` on a color with lightness 50 yields lightness 40.
    pub fn darken(&self, amount: f32) -> Self {
        let mut hsl = self.hsl();
        hsl.lightness = (hsl.lightness - hsl.lightness * amount).clamp(0.0, 100.0);
        Self::from_hsl(hsl, self.alpha)
    }

    /// Increases lightness by `amount` times the current lightness.
    pub fn lighten(&self, amount: f32) -> Self {
        let mut hsl = self.hsl();
        hsl.lightness = (hsl.lightness + hsl.lightness * amount).clamp(0.0, 100.0);
        Self::from_hsl(hsl, self.alpha)
    }

    /// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.alpha >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let a = unit_to_channel(self.alpha);
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, a)
        }
    }

    /// Nearest ANSI 256-color palette index, for terminal previews.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crane_theme::Color;
    ///
    /// assert_eq!(Color::rgb(255, 0, 0).ansi256(), 196);
    /// assert_eq!(Color::WHITE.ansi256(), 231);
    /// ```
    pub fn ansi256(&self) -> u8 {
        let (r, g, b) = (self.r, self.g, self.b);
        if r == g && g == b {
            return match r {
                0..=7 => 16,
                249..=255 => 231,
                _ => 232 + ((u16::from(r) - 8) * 24 / 247) as u8,
            };
        }
        let scale = |c: u8| (u16::from(c) * 5 / 255) as u8;
        16 + 36 * scale(r) + 6 * scale(g) + scale(b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;
        let value = String::deserialize(deserializer)?;
        Color::parse(&value).map_err(Error::custom)
    }
}

fn unit_to_channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Converts a parsed CSS color, accepting the sRGB forms only.
fn from_css(color: CssColor) -> Option<Color> {
    match color {
        CssColor::Rgba(rgba) => Some(Color::rgba(
            rgba.red.unwrap_or(0),
            rgba.green.unwrap_or(0),
            rgba.blue.unwrap_or(0),
            rgba.alpha.unwrap_or(0.0),
        )),
        CssColor::Hsl(hsl) => {
            let (r, g, b) = hsl_to_rgb(
                hsl.hue.unwrap_or(0.0) / 360.0,
                hsl.saturation.unwrap_or(0.0),
                hsl.lightness.unwrap_or(0.0),
            );
            Some(Color::rgba(
                unit_to_channel(r),
                unit_to_channel(g),
                unit_to_channel(b),
                hsl.alpha.unwrap_or(0.0),
            ))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Color::parse("#112233").unwrap(), Color::rgb(0x11, 0x22, 0x33));
        assert_eq!(Color::parse("#123").unwrap(), Color::rgb(0x11, 0x22, 0x33));
        let translucent = Color::parse("#11223380").unwrap();
        assert_eq!((translucent.r, translucent.g, translucent.b), (0x11, 0x22, 0x33));
        assert!((translucent.alpha - 128.0 / 255.0).abs() < 0.01);
    }

    #[test]
    fn test_parse_named_and_transparent() {
        assert_eq!(Color::parse("white").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("rebeccapurple").unwrap(), Color::rgb(102, 51, 153));
        assert_eq!(Color::parse("transparent").unwrap().alpha, 0.0);
    }

    #[test]
    fn test_parse_functions() {
        assert_eq!(
            Color::parse("rgba(255, 0, 0, 0.5)").unwrap(),
            Color::rgba(255, 0, 0, 0.5)
        );
        assert_eq!(Color::parse("rgb(100%, 0%, 0%)").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse("hsl(0, 100%, 50%)").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse("hsl(120deg 100% 25%)").unwrap(), Color::rgb(0, 128, 0));
        assert_eq!(Color::parse("rgb(0 0 255 / 50%)").unwrap(), Color::rgba(0, 0, 255, 0.5));
        assert_eq!(Color::parse("HSLA(240, 100%, 50%, 0.25)").unwrap(), Color::rgba(0, 0, 255, 0.25));
    }

    #[test]
    fn test_from_hsl_matches_parsed_hsl() {
        let hsl = Hsl {
            hue: 210.0,
            saturation: 50.0,
            lightness: 40.0,
        };
        assert_eq!(
            Color::from_hsl(hsl, 1.0),
            Color::parse("hsl(210, 50%, 40%)").unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Color::parse("").is_err());
        assert!(Color::parse("#12").is_err());
        assert!(Color::parse("rgb(1, 2)").is_err());
        assert!(Color::parse("notacolor").is_err());
        assert!(Color::parse("#fff extra").is_err());
        assert!(Color::parse("16px").is_err());
        assert!(Color::parse("currentcolor").is_err());
        assert!(Color::parse("lab(50% 20 30)").is_err());
    }

    #[test]
    fn test_parse_error_keeps_input() {
        let err = Color::parse("blurple").unwrap_err();
        assert_eq!(err, ParseError::color("blurple"));
    }

    #[test]
    fn test_hsl_lightness() {
        assert_eq!(Color::WHITE.lightness(), 100.0);
        assert_eq!(Color::BLACK.lightness(), 0.0);
        let red = Color::rgb(255, 0, 0).hsl();
        assert_eq!(red.hue, 0.0);
        assert_eq!(red.saturation, 100.0);
        assert_eq!(red.lightness, 50.0);
    }

    #[test]
    fn test_darken_reduces_lightness_proportionally() {
        let gray = Color::rgb(128, 128, 128);
        let darker = gray.darken(0.5);
        assert!((darker.lightness() - gray.lightness() / 2.0).abs() < 0.5);
        assert_eq!(Color::BLACK.darken(0.2), Color::BLACK);
    }

    #[test]
    fn test_darken_keeps_alpha() {
        let c = Color::rgba(200, 100, 50, 0.25);
        assert_eq!(c.darken(0.2).alpha, 0.25);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb(0x11, 0x22, 0x33).to_hex(), "#112233");
        assert_eq!(Color::rgba(0, 0, 0, 0.0).to_hex(), "#00000000");
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(Color::from_raw(&"red".into()).unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_raw(&RawValue::Number(0x00ff00 as f64)).unwrap(), Color::rgb(0, 255, 0));
        assert!(Color::from_raw(&RawValue::Number(1.5)).is_err());
        assert!(Color::from_raw(&RawValue::Number(-1.0)).is_err());
        assert!(Color::from_raw(&true.into()).is_err());
    }

    #[test]
    fn test_from_u32() {
        assert_eq!(Color::from_u32(0xff8000), Color::rgb(255, 128, 0));
    }

    #[test]
    fn test_ansi256_grayscale_and_cube() {
        assert_eq!(Color::BLACK.ansi256(), 16);
        assert_eq!(Color::rgb(0, 255, 0).ansi256(), 46);
        assert_eq!(Color::rgb(0, 0, 255).ansi256(), 21);
        assert!((232..=255).contains(&Color::rgb(128, 128, 128).ansi256()));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
        let back: Color = serde_json::from_str("\"navy\"").unwrap();
        assert_eq!(back, Color::rgb(0, 0, 128));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
