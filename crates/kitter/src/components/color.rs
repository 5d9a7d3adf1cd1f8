//! Color swatch display.
//!
//! A [`ColorSwatch`] shows a styled sample element next to a
//! human-readable decoding of what its background token actually
//! resolves to in the rendering environment: a hex form, a perceptual
//! OKLCH form, and an HSL form, each individually switchable.

use bitflags::bitflags;

use crate::component::Component;
use crate::components::documentation::section_node;
use crate::context::RenderContext;
use crate::html::{Element, Node};
use crate::readout::StyleReadout;
use crate::resolve::{FieldRule, join_classes};

bitflags! {
    /// Which display forms a swatch shows.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ColorFormats: u8 {
        /// 6-digit hex, e.g. `#1d4ed8`.
        const HEX = 1 << 0;
        /// Perceptual lightness/chroma/hue, e.g. `oklch(62% 0.16 245deg)`.
        const OKLCH = 1 << 1;
        /// Hue/saturation/lightness, e.g. `hsl(220 60% 50%)`.
        const HSL = 1 << 2;
    }
}

impl Default for ColorFormats {
    fn default() -> Self {
        Self::all()
    }
}

/// The decoded display strings for one swatch instance.
///
/// A field is `None` either because its form was not requested or
/// because the background token resolved to no decodable color. In both
/// cases the corresponding display stays blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorReadout {
    pub hex: Option<String>,
    pub oklch: Option<String>,
    pub hsl: Option<String>,
}

/// A grid of swatches under a section title.
pub struct ColorGroup {
    title: String,
    children: Vec<Box<dyn Component>>,
}

const COLOR_GRID_CLASS: &str = "w-full grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-8";

impl ColorGroup {
    pub fn new(title: impl Into<String>, children: Vec<Box<dyn Component>>) -> Self {
        Self {
            title: title.into(),
            children,
        }
    }
}

impl Component for ColorGroup {
    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let grid = Element::new("div")
            .class(COLOR_GRID_CLASS)
            .children(self.children.iter().map(|child| child.render(ctx)));
        section_node(ctx, &self.title, None, grid.into_node())
    }
}

const SWATCH_SIZE: FieldRule = FieldRule::overriding("w-16 h-16");
const SWATCH_RADIUS: FieldRule = FieldRule::overriding("rounded-lg");
const SWATCH_SHADOW: FieldRule = FieldRule::overriding("shadow-md");
const SWATCH_LABEL_STYLE: FieldRule = FieldRule::overriding("font-mono");
const SWATCH_CODE_STYLE: FieldRule = FieldRule::overriding("font-mono text-sm text-fg-light");

/// A color swatch built from a background utility token.
///
/// The token (e.g. `bg-blue-500`) is applied to the sample element; once
/// the document renders, the element's effective background color is
/// read back from the stylesheet engine, decoded, and formatted into the
/// requested display forms. A token that resolves to no background
/// leaves every display blank; that is a soft condition, not a failure.
pub struct ColorSwatch {
    color: String,
    label: String,
    formats: ColorFormats,
    readout: StyleReadout<ColorReadout>,
}

impl ColorSwatch {
    /// `color` is the background token, `label` the text shown next to
    /// the sample. All display forms are on by default.
    pub fn new(color: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            label: label.into(),
            formats: ColorFormats::default(),
            readout: StyleReadout::pending(),
        }
    }

    /// Selects which display forms to show.
    pub fn with_formats(mut self, formats: ColorFormats) -> Self {
        self.formats = formats;
        self
    }

    /// The decoded display strings; `None` until the first render.
    pub fn readout(&self) -> Option<&ColorReadout> {
        self.readout.get()
    }
}

impl Component for ColorSwatch {
    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let cfg = &ctx.config().styles.color_swatch;
        let size = SWATCH_SIZE.resolve(cfg.size.as_deref(), None);
        let radius = SWATCH_RADIUS.resolve(cfg.radius.as_deref(), None);
        let shadow = SWATCH_SHADOW.resolve(cfg.shadow.as_deref(), None);
        let label_style = SWATCH_LABEL_STYLE.resolve(cfg.label_style.as_deref(), None);
        let code_style = SWATCH_CODE_STYLE.resolve(cfg.color_code_style.as_deref(), None);

        let sample_class = join_classes(&[
            size.as_str(),
            self.color.as_str(),
            radius.as_str(),
            shadow.as_str(),
        ]);

        let computed = ctx.computed_for(&sample_class);
        let readout = self.readout.resolve_with(|| match computed.background_color {
            Some(color) => decode(color, self.formats),
            None => ColorReadout::default(),
        });

        let mut details = Element::new("div").class("flex flex-col").child(
            Element::new("span")
                .class(&label_style)
                .text(&self.label)
                .into_node(),
        );
        if self.formats.contains(ColorFormats::HEX) {
            details = details.child(code_span(&code_style, readout.hex.as_deref()));
        }
        if self.formats.contains(ColorFormats::OKLCH) {
            details = details.child(code_span(&code_style, readout.oklch.as_deref()));
        }
        if self.formats.contains(ColorFormats::HSL) {
            details = details.child(code_span(&code_style, readout.hsl.as_deref()));
        }

        Element::new("div")
            .class("flex flex-row gap-4 items-center")
            .child(Element::new("div").class(&sample_class).into_node())
            .child(details.into_node())
            .into_node()
    }
}

fn code_span(class: &str, value: Option<&str>) -> Node {
    Element::new("span")
        .class(class)
        .text(value.unwrap_or(""))
        .into_node()
}

fn decode(color: kss::Color, formats: ColorFormats) -> ColorReadout {
    let mut readout = ColorReadout::default();

    if formats.contains(ColorFormats::HEX) {
        readout.hex = Some(color.hex());
    }

    if formats.contains(ColorFormats::OKLCH) {
        let oklch = color.to_oklch();
        readout.oklch = Some(format!(
            "oklch({}% {} {}deg)",
            fmt_rounded((oklch.l as f64) * 100.0, 2),
            fmt_rounded(oklch.c as f64, 4),
            fmt_rounded(oklch.h.unwrap_or(0.0) as f64, 2),
        ));
    }

    if formats.contains(ColorFormats::HSL) {
        let hsl = color.to_hsl();
        readout.hsl = Some(format!(
            "hsl({} {}% {}%)",
            fmt_rounded(hsl.h as f64, 0),
            fmt_rounded((hsl.s as f64) * 100.0, 0),
            fmt_rounded((hsl.l as f64) * 100.0, 0),
        ));
    }

    readout
}

/// Rounds to `decimals` places and trims trailing zeros, so `0.00`
/// prints as `0` and `62.50` as `62.5`.
fn fmt_rounded(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kss::Color;

    #[test]
    fn test_fmt_rounded_trims_zeros() {
        assert_eq!(fmt_rounded(0.0, 2), "0");
        assert_eq!(fmt_rounded(62.5, 2), "62.5");
        assert_eq!(fmt_rounded(100.0, 2), "100");
        assert_eq!(fmt_rounded(0.1634, 4), "0.1634");
        assert_eq!(fmt_rounded(240.0, 0), "240");
    }

    #[test]
    fn test_decode_black() {
        let readout = decode(Color::black(), ColorFormats::all());
        assert_eq!(readout.hex.as_deref(), Some("#000000"));
        assert_eq!(readout.oklch.as_deref(), Some("oklch(0% 0 0deg)"));
        assert_eq!(readout.hsl.as_deref(), Some("hsl(0 0% 0%)"));
    }

    #[test]
    fn test_decode_white_hsl() {
        let readout = decode(Color::white(), ColorFormats::HSL);
        assert_eq!(readout.hsl.as_deref(), Some("hsl(0 0% 100%)"));
        assert_eq!(readout.hex, None);
        assert_eq!(readout.oklch, None);
    }

    #[test]
    fn test_decode_red_hsl() {
        let readout = decode(Color::rgb(255, 0, 0), ColorFormats::HSL);
        assert_eq!(readout.hsl.as_deref(), Some("hsl(0 100% 50%)"));
    }

    #[test]
    fn test_decode_respects_format_flags() {
        let readout = decode(Color::black(), ColorFormats::HEX | ColorFormats::HSL);
        assert!(readout.hex.is_some());
        assert!(readout.oklch.is_none());
        assert!(readout.hsl.is_some());
    }
}
