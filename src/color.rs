//! Color literal parsing for design-token values
//!
//! Supports the following formats:
//! - Hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - Functional: `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hwb()`, `oklch()`
//! - Named: `red`, `rebeccapurple`, `transparent`, etc.
//! - Framework keywords: `inherit`, `current`, `currentColor`

use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use serde::Serialize;
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// CSS parsing error from lightningcss
    #[error("not a CSS color: {0}")]
    CssParse(String),
}

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// A successfully parsed color literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLiteral {
    /// A concrete color
    Rgba(Rgba),
    /// `inherit`: takes the parent's value at render time
    Inherit,
    /// `current` / `currentColor`: resolves to the element's text color
    Current,
}

/// Keywords accepted by the framework that are not CSS `<color>` values on their own.
const KEYWORDS: &[(&str, ColorLiteral)] = &[
    ("inherit", ColorLiteral::Inherit),
    ("current", ColorLiteral::Current),
    ("currentcolor", ColorLiteral::Current),
];

/// Parse a color literal as it may appear in a theme's `colors` mapping.
///
/// # Examples
///
/// ```
/// use windcfg::color::{parse_color, ColorLiteral, Rgba};
///
/// let accent = parse_color("#FF6B6B").unwrap();
/// assert_eq!(accent, ColorLiteral::Rgba(Rgba::new(255, 107, 107, 255)));
///
/// let green = parse_color("rgb(0, 255, 0)").unwrap();
/// assert_eq!(green, ColorLiteral::Rgba(Rgba::new(0, 255, 0, 255)));
///
/// assert_eq!(parse_color("currentColor").unwrap(), ColorLiteral::Current);
/// assert!(parse_color("notacolor").is_err());
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is empty or not a recognized literal.
pub fn parse_color(s: &str) -> Result<ColorLiteral, ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    if let Some((_, literal)) = KEYWORDS.iter().find(|(k, _)| k.eq_ignore_ascii_case(s)) {
        return Ok(*literal);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex).map(ColorLiteral::Rgba);
    }

    parse_css_color(s).map(ColorLiteral::Rgba)
}

/// Returns true when `s` is accepted by [`parse_color`].
pub fn is_valid_color(s: &str) -> bool {
    parse_color(s).is_ok()
}

/// Parse the digits of a hex color (without the leading `#`)
fn parse_hex_color(hex: &str) -> Result<Rgba, ColorError> {
    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(c));
    }

    let digits: Vec<u8> = hex.bytes().map(hex_value).collect();
    match digits.as_slice() {
        // Short forms double each digit
        [r, g, b] => Ok(Rgba::new(r * 17, g * 17, b * 17, 255)),
        [r, g, b, a] => Ok(Rgba::new(r * 17, g * 17, b * 17, a * 17)),
        [r1, r2, g1, g2, b1, b2] => Ok(Rgba::new(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2, 255)),
        [r1, r2, g1, g2, b1, b2, a1, a2] => {
            Ok(Rgba::new(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2, a1 * 16 + a2))
        }
        _ => Err(ColorError::InvalidLength(digits.len())),
    }
}

/// Value of an ASCII hex digit; callers have already checked the byte.
fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

/// Parse a CSS color using lightningcss (rgb, hsl, hwb, oklch, named colors)
fn parse_css_color(s: &str) -> Result<Rgba, ColorError> {
    let css_color = CssColor::parse_string(s).map_err(|e| ColorError::CssParse(e.to_string()))?;
    css_color_to_rgba(css_color)
}

/// Convert a lightningcss CssColor to RGBA
fn css_color_to_rgba(color: CssColor) -> Result<Rgba, ColorError> {
    use lightningcss::values::color::FloatColor;

    let rgb_color = color
        .to_rgb()
        .map_err(|_| ColorError::CssParse("cannot convert color to RGB".to_string()))?;

    match rgb_color {
        CssColor::RGBA(rgba) => Ok(Rgba::new(rgba.red, rgba.green, rgba.blue, rgba.alpha)),
        CssColor::Float(float_color) => match float_color.as_ref() {
            FloatColor::RGB(rgb) => Ok(Rgba::new(
                (rgb.r * 255.0).round() as u8,
                (rgb.g * 255.0).round() as u8,
                (rgb.b * 255.0).round() as u8,
                (rgb.alpha * 255.0).round() as u8,
            )),
            _ => Err(ColorError::CssParse("unexpected float color format".to_string())),
        },
        _ => Err(ColorError::CssParse("color conversion did not produce RGB".to_string())),
    }
}
