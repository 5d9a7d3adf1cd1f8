//! Computed style values.

use crate::types::color::Color;
use crate::types::length::Length;

/// The root font size every relative unit resolves against, in pixels.
pub const ROOT_FONT_SIZE: f32 = 16.0;

/// The final resolved style of an element, computed from its class list.
///
/// Font metrics are always populated: the root defaults (16px, weight
/// 400) stand in when no rule sets them, mirroring how a rendering
/// environment always reports concrete typography values. Colors stay
/// `None` unless some matched rule provides them; that distinction lets
/// a caller tell "no background declared" apart from any real color.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    /// Resolved background color, if any matched rule declared one.
    pub background_color: Option<Color>,
    /// Resolved foreground color, if any matched rule declared one.
    pub color: Option<Color>,
    /// Resolved font size in pixels.
    pub font_size: f32,
    /// Resolved line height in pixels; `None` means `normal`.
    pub line_height: Option<f32>,
    /// Resolved font weight (100-900 scale).
    pub font_weight: u16,
    /// Declared font family list, verbatim.
    pub font_family: Option<String>,
    /// Declared max-width, left unresolved (no containing block exists
    /// at computation time).
    pub max_width: Option<Length>,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            background_color: None,
            color: None,
            font_size: ROOT_FONT_SIZE,
            line_height: None,
            font_weight: 400,
            font_family: None,
            max_width: None,
        }
    }
}
