//! Length values and units.
//!
//! KSS keeps the handful of units a documentation stylesheet actually
//! uses. Every length resolves to pixels against a fixed 16px root, the
//! same way a browser computes font-relative units before reporting them
//! back from a resolved style.

/// Units supported for length values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Pixels (also the meaning of a bare number outside line-height).
    #[default]
    Px,
    /// Relative to the root font size.
    Rem,
    /// Relative to the element's own font size.
    Em,
    /// Percentage of the reference value.
    Percent,
    /// No unit written. Only meaningful for line-height multipliers.
    None,
}

/// A parsed length value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub value: f32,
    pub unit: Unit,
}

impl Length {
    pub fn px(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    pub fn rem(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Rem,
        }
    }

    /// Resolves the length to pixels.
    ///
    /// `root` is the root font size, `base` the reference for `em` and
    /// percentage values (the element's own font size for typography
    /// properties).
    pub fn resolve(&self, root: f32, base: f32) -> f32 {
        match self.unit {
            Unit::Px | Unit::None => self.value,
            Unit::Rem => self.value * root,
            Unit::Em => self.value * base,
            Unit::Percent => self.value / 100.0 * base,
        }
    }
}

/// A line-height value.
///
/// CSS allows either a length or a bare multiplier; the multiplier scales
/// the element's resolved font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineHeight {
    Length(Length),
    Multiple(f32),
}

impl LineHeight {
    /// Resolves the line height to pixels against the element's resolved
    /// font size.
    pub fn resolve(&self, root: f32, font_size: f32) -> f32 {
        match self {
            LineHeight::Length(length) => length.resolve(root, font_size),
            LineHeight::Multiple(factor) => factor * font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_resolution() {
        assert_eq!(Length::px(20.0).resolve(16.0, 16.0), 20.0);
    }

    #[test]
    fn test_rem_resolution() {
        assert_eq!(Length::rem(1.25).resolve(16.0, 16.0), 20.0);
        assert_eq!(Length::rem(0.875).resolve(16.0, 16.0), 14.0);
    }

    #[test]
    fn test_em_resolution() {
        let length = Length {
            value: 1.5,
            unit: Unit::Em,
        };
        assert_eq!(length.resolve(16.0, 20.0), 30.0);
    }

    #[test]
    fn test_percent_resolution() {
        let length = Length {
            value: 150.0,
            unit: Unit::Percent,
        };
        assert_eq!(length.resolve(16.0, 16.0), 24.0);
    }

    #[test]
    fn test_line_height_multiple() {
        assert_eq!(LineHeight::Multiple(1.5).resolve(16.0, 20.0), 30.0);
    }

    #[test]
    fn test_line_height_length() {
        assert_eq!(
            LineHeight::Length(Length::rem(1.75)).resolve(16.0, 20.0),
            28.0
        );
    }
}
