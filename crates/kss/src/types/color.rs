//! RGBA color type with parsing and color-space conversion.
//!
//! This module provides the [`Color`] type used throughout KSS. Colors can
//! be parsed from every format a rendering environment is likely to hand
//! back for a resolved style:
//!
//! - **Hex**: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - **RGB**: `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! - **HSL**: `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`
//! - **Named**: CSS color names like `red`, `coral`, `rebeccapurple`
//! - **Special**: `transparent`
//!
//! Beyond parsing, a color converts into the two display spaces the
//! documentation components format for readers: cylindrical HSL
//! ([`Color::to_hsl`]) and the perceptual OKLCH space
//! ([`Color::to_oklch`]).

use std::fmt;

use crate::types::named::NAMED_COLORS;

/// Error returned when color parsing fails.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorParseError {
    /// Human-readable description of the parsing error.
    pub message: String,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ColorParseError {}

/// A color in cylindrical HSL coordinates.
///
/// Hue is in degrees (`0..360`); saturation and lightness are fractions
/// (`0.0..=1.0`). Achromatic colors report a hue of `0.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// A color in the perceptual OKLCH space.
///
/// Lightness and chroma are fractions; hue is in degrees and `None` when
/// chroma vanishes (the hue angle is undefined for achromatic colors).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oklch {
    pub l: f32,
    pub c: f32,
    pub h: Option<f32>,
}

/// An RGBA color.
///
/// # Examples
///
/// ```
/// use kss::types::Color;
///
/// let red = Color::rgb(255, 0, 0);
/// let blue = Color::parse("#0000ff").unwrap();
/// let named = Color::parse("coral").unwrap();
///
/// assert_eq!(blue.hex(), "#0000ff");
/// assert_eq!(named, Color::rgb(255, 127, 80));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 1.0,
        }
    }
}

impl Color {
    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Returns a fully transparent color.
    pub fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0.0)
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns true if the color is fully transparent.
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Formats the color as a standard 6-digit lowercase hex string.
    ///
    /// Alpha is not encoded; `#000000` is returned for black regardless
    /// of the alpha channel.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a color string in various formats.
    ///
    /// Supported formats:
    /// - Hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
    /// - RGB: `rgb(r,g,b)`, `rgba(r,g,b,a)`
    /// - HSL: `hsl(h,s%,l%)`, `hsla(h,s%,l%,a)`
    /// - Named: CSS color names like `red`, `blue`, `aliceblue`
    /// - Special: `transparent`
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorParseError {
                message: "empty color string".to_string(),
            });
        }

        let lower = input.to_lowercase();

        if lower == "transparent" {
            return Ok(Self::transparent());
        }

        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if lower.starts_with("rgb") {
            return Self::parse_rgb_func(&lower);
        }

        if lower.starts_with("hsl") {
            return Self::parse_hsl_func(&lower);
        }

        match NAMED_COLORS.get(lower.as_str()) {
            Some([r, g, b]) => Ok(Self::rgb(*r, *g, *b)),
            None => Err(ColorParseError {
                message: format!("unknown color name: {}", lower),
            }),
        }
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let chars: Vec<char> = hex.to_lowercase().chars().collect();

        match chars.len() {
            3 => {
                let r = Self::parse_hex_digit(chars[0])? * 17;
                let g = Self::parse_hex_digit(chars[1])? * 17;
                let b = Self::parse_hex_digit(chars[2])? * 17;
                Ok(Self::rgb(r, g, b))
            }
            4 => {
                let r = Self::parse_hex_digit(chars[0])? * 17;
                let g = Self::parse_hex_digit(chars[1])? * 17;
                let b = Self::parse_hex_digit(chars[2])? * 17;
                let a = Self::parse_hex_digit(chars[3])? * 17;
                Ok(Self::rgba(r, g, b, a as f32 / 255.0))
            }
            6 => {
                let r = Self::parse_hex_pair(chars[0], chars[1])?;
                let g = Self::parse_hex_pair(chars[2], chars[3])?;
                let b = Self::parse_hex_pair(chars[4], chars[5])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let r = Self::parse_hex_pair(chars[0], chars[1])?;
                let g = Self::parse_hex_pair(chars[2], chars[3])?;
                let b = Self::parse_hex_pair(chars[4], chars[5])?;
                let a = Self::parse_hex_pair(chars[6], chars[7])?;
                Ok(Self::rgba(r, g, b, a as f32 / 255.0))
            }
            _ => Err(ColorParseError {
                message: format!("invalid hex color length: {}", chars.len()),
            }),
        }
    }

    fn parse_hex_digit(c: char) -> Result<u8, ColorParseError> {
        match c {
            '0'..='9' => Ok(c as u8 - b'0'),
            'a'..='f' => Ok(c as u8 - b'a' + 10),
            _ => Err(ColorParseError {
                message: format!("invalid hex digit: {}", c),
            }),
        }
    }

    fn parse_hex_pair(c1: char, c2: char) -> Result<u8, ColorParseError> {
        let high = Self::parse_hex_digit(c1)?;
        let low = Self::parse_hex_digit(c2)?;
        Ok(high * 16 + low)
    }

    fn func_args(input: &str, name: &str) -> Result<Vec<String>, ColorParseError> {
        let start = input.find('(').ok_or_else(|| ColorParseError {
            message: format!("missing '(' in {} function", name),
        })?;
        let end = input.find(')').ok_or_else(|| ColorParseError {
            message: format!("missing ')' in {} function", name),
        })?;

        Ok(input[start + 1..end]
            .split(',')
            .map(|s| s.trim().to_string())
            .collect())
    }

    fn parse_rgb_func(input: &str) -> Result<Self, ColorParseError> {
        let parts = Self::func_args(input, "rgb")?;
        if parts.len() < 3 {
            return Err(ColorParseError {
                message: "rgb requires at least 3 components".to_string(),
            });
        }

        let r = Self::parse_u8(&parts[0])?;
        let g = Self::parse_u8(&parts[1])?;
        let b = Self::parse_u8(&parts[2])?;
        let a = match parts.get(3) {
            Some(p) => Self::parse_f32(p)?,
            None => 1.0,
        };

        Ok(Self::rgba(r, g, b, a))
    }

    fn parse_hsl_func(input: &str) -> Result<Self, ColorParseError> {
        let parts = Self::func_args(input, "hsl")?;
        if parts.len() < 3 {
            return Err(ColorParseError {
                message: "hsl requires at least 3 components".to_string(),
            });
        }

        let h: f32 = parts[0].parse().map_err(|_| ColorParseError {
            message: format!("invalid hue: {}", parts[0]),
        })?;
        let s = Self::parse_percentage(&parts[1])?;
        let l = Self::parse_percentage(&parts[2])?;
        let a = match parts.get(3) {
            Some(p) => Self::parse_f32(p)?,
            None => 1.0,
        };

        Ok(Self::from_hsl(h, s, l, a))
    }

    fn parse_u8(s: &str) -> Result<u8, ColorParseError> {
        let val: i32 = s.parse().map_err(|_| ColorParseError {
            message: format!("invalid number: {}", s),
        })?;
        if !(0..=255).contains(&val) {
            return Err(ColorParseError {
                message: format!("value out of range (0-255): {}", val),
            });
        }
        Ok(val as u8)
    }

    fn parse_f32(s: &str) -> Result<f32, ColorParseError> {
        s.parse().map_err(|_| ColorParseError {
            message: format!("invalid float: {}", s),
        })
    }

    fn parse_percentage(s: &str) -> Result<f32, ColorParseError> {
        let s = s.trim_end_matches('%');
        let val: f32 = s.parse().map_err(|_| ColorParseError {
            message: format!("invalid percentage: {}", s),
        })?;
        Ok(val / 100.0)
    }

    /// Converts the color into HSL coordinates.
    pub fn to_hsl(&self) -> Hsl {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let mut h;
        let s;
        let l = (max + min) / 2.0;

        if max == min {
            h = 0.0;
            s = 0.0;
        } else {
            let d = max - min;
            s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            h = if max == r {
                (g - b) / d + (if g < b { 6.0 } else { 0.0 })
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            h /= 6.0;
        }

        Hsl {
            h: h * 360.0,
            s,
            l,
        }
    }

    /// Creates a color from HSL values.
    ///
    /// Hue is in degrees; saturation and lightness are fractions.
    pub fn from_hsl(h: f32, s: f32, l: f32, a: f32) -> Self {
        if s == 0.0 {
            let gray = (l * 255.0).round() as u8;
            return Self::rgba(gray, gray, gray, a);
        }

        let h = h / 360.0;
        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        let r = Self::hue_to_rgb(p, q, h + 1.0 / 3.0);
        let g = Self::hue_to_rgb(p, q, h);
        let b = Self::hue_to_rgb(p, q, h - 1.0 / 3.0);

        Self::rgba(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            a,
        )
    }

    fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }

        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    /// Converts the color into the perceptual OKLCH space.
    ///
    /// The conversion goes sRGB → linear RGB → OKLab → LCh. Hue is
    /// reported in degrees normalized to `0..360`, and is `None` when
    /// chroma is effectively zero.
    pub fn to_oklch(&self) -> Oklch {
        let r = Self::srgb_to_linear(self.r as f32 / 255.0);
        let g = Self::srgb_to_linear(self.g as f32 / 255.0);
        let b = Self::srgb_to_linear(self.b as f32 / 255.0);

        let l = 0.412_221_46 * r + 0.536_332_55 * g + 0.051_445_995 * b;
        let m = 0.211_903_5 * r + 0.680_699_5 * g + 0.107_396_96 * b;
        let s = 0.088_302_46 * r + 0.281_718_85 * g + 0.629_978_7 * b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        let lightness = 0.210_454_26 * l_ + 0.793_617_8 * m_ - 0.004_072_047 * s_;
        let a = 1.977_998_5 * l_ - 2.428_592_2 * m_ + 0.450_593_7 * s_;
        let b2 = 0.025_904_037 * l_ + 0.782_771_77 * m_ - 0.808_675_77 * s_;

        let chroma = (a * a + b2 * b2).sqrt();
        let hue = if chroma < 1e-4 {
            None
        } else {
            let degrees = b2.atan2(a).to_degrees();
            Some(if degrees < 0.0 {
                degrees + 360.0
            } else {
                degrees
            })
        };

        Oklch {
            l: lightness,
            c: chroma,
            h: hue,
        }
    }

    /// Converts an sRGB component to linear RGB.
    fn srgb_to_linear(c: f32) -> f32 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== HEX FORMAT TESTS ====================

    #[test]
    fn test_hex_3_digit() {
        // #rgb expands to #rrggbb
        assert_eq!(Color::parse("#f00").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse("#0f0").unwrap(), Color::rgb(0, 255, 0));
        assert_eq!(Color::parse("#abc").unwrap(), Color::rgb(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_hex_6_digit() {
        assert_eq!(Color::parse("#ff0000").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse("#3b82f6").unwrap(), Color::rgb(0x3b, 0x82, 0xf6));
    }

    #[test]
    fn test_hex_8_digit() {
        let color = Color::parse("#ff000080").unwrap();
        assert_eq!(
            color,
            Color::rgba(255, 0, 0, 0x80 as f32 / 255.0)
        );
    }

    #[test]
    fn test_hex_case_insensitive() {
        assert_eq!(
            Color::parse("#AABBCC").unwrap(),
            Color::parse("#aabbcc").unwrap()
        );
    }

    #[test]
    fn test_hex_formatting_roundtrip() {
        for input in ["#000000", "#ffffff", "#3b82f6", "#e5e7eb"] {
            assert_eq!(Color::parse(input).unwrap().hex(), input);
        }
    }

    // ==================== RGB / HSL FUNCTION TESTS ====================

    #[test]
    fn test_rgb_basic() {
        assert_eq!(
            Color::parse("rgb(255, 128, 64)").unwrap(),
            Color::rgb(255, 128, 64)
        );
        assert_eq!(
            Color::parse("rgb(255,128,64)").unwrap(),
            Color::rgb(255, 128, 64)
        );
    }

    #[test]
    fn test_rgba_alpha() {
        let color = Color::parse("rgba(255, 0, 0, 0.5)").unwrap();
        assert_eq!(color, Color::rgba(255, 0, 0, 0.5));
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(
            Color::parse("hsl(0, 100%, 50%)").unwrap(),
            Color::rgb(255, 0, 0)
        );
        assert_eq!(
            Color::parse("hsl(120, 100%, 50%)").unwrap(),
            Color::rgb(0, 255, 0)
        );
        assert_eq!(
            Color::parse("hsl(240, 100%, 50%)").unwrap(),
            Color::rgb(0, 0, 255)
        );
    }

    #[test]
    fn test_hsl_grayscale() {
        assert_eq!(Color::parse("hsl(0, 0%, 0%)").unwrap(), Color::black());
        assert_eq!(Color::parse("hsl(0, 0%, 100%)").unwrap(), Color::white());
    }

    // ==================== NAMED COLORS TESTS ====================

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::parse("red").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse("coral").unwrap(), Color::rgb(255, 127, 80));
        assert_eq!(
            Color::parse("rebeccapurple").unwrap(),
            Color::rgb(102, 51, 153)
        );
    }

    #[test]
    fn test_named_case_insensitive() {
        assert_eq!(
            Color::parse("AliceBlue").unwrap(),
            Color::parse("aliceblue").unwrap()
        );
    }

    #[test]
    fn test_transparent() {
        let color = Color::parse("transparent").unwrap();
        assert!(color.is_transparent());
    }

    #[test]
    fn test_whitespace_trimming() {
        assert_eq!(Color::parse("  red  ").unwrap(), Color::rgb(255, 0, 0));
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_invalid_input() {
        assert!(Color::parse("").is_err());
        assert!(Color::parse("   ").is_err());
        assert!(Color::parse("#gg0000").is_err());
        assert!(Color::parse("#ff00f").is_err());
        assert!(Color::parse("rgb(256, 0, 0)").is_err());
        assert!(Color::parse("rgb(255, 0)").is_err());
        assert!(Color::parse("notacolor").is_err());
    }

    // ==================== CONVERSION TESTS ====================

    #[test]
    fn test_hsl_roundtrip() {
        let original = Color::rgb(100, 150, 200);
        let hsl = original.to_hsl();
        let roundtrip = Color::from_hsl(hsl.h, hsl.s, hsl.l, 1.0);

        assert_eq!(original.r, roundtrip.r);
        assert_eq!(original.g, roundtrip.g);
        assert_eq!(original.b, roundtrip.b);
    }

    #[test]
    fn test_hsl_of_black() {
        let hsl = Color::black().to_hsl();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.l, 0.0);
    }

    #[test]
    fn test_hsl_of_red() {
        let hsl = Color::rgb(255, 0, 0).to_hsl();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 1.0);
        assert_eq!(hsl.l, 0.5);
    }

    #[test]
    fn test_oklch_of_black() {
        let oklch = Color::black().to_oklch();
        assert_eq!(oklch.l, 0.0);
        assert_eq!(oklch.c, 0.0);
        assert_eq!(oklch.h, None);
    }

    #[test]
    fn test_oklch_of_white() {
        let oklch = Color::white().to_oklch();
        assert!((oklch.l - 1.0).abs() < 1e-3);
        assert!(oklch.c < 1e-4);
        assert_eq!(oklch.h, None);
    }

    #[test]
    fn test_oklch_hue_defined_for_chromatic() {
        let oklch = Color::rgb(59, 130, 246).to_oklch();
        assert!(oklch.c > 0.05);
        let h = oklch.h.expect("chromatic color has a hue");
        assert!((0.0..360.0).contains(&h));
    }
}
