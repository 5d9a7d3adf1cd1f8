//! Typography sample display.
//!
//! A [`TypographySample`] renders a line of sample text in a given
//! utility class and shows what that class actually resolves to:
//! `"<size> / <line-height>, <weight>, <family>"`, read back from the
//! stylesheet engine once the document renders.

use kss::types::ComputedStyle;

use crate::component::Component;
use crate::components::documentation::section_node;
use crate::context::RenderContext;
use crate::html::{Element, Node};
use crate::readout::StyleReadout;
use crate::resolve::FieldRule;

const TYPOGRAPHY_GROUP_CLASS: FieldRule = FieldRule::overriding("w-full");

/// A list of typography samples under a section title.
pub struct TypographyGroup {
    title: String,
    children: Vec<Box<dyn Component>>,
}

impl TypographyGroup {
    pub fn new(title: impl Into<String>, children: Vec<Box<dyn Component>>) -> Self {
        Self {
            title: title.into(),
            children,
        }
    }
}

impl Component for TypographyGroup {
    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let cfg = &ctx.config().styles.typography;
        let class = TYPOGRAPHY_GROUP_CLASS.resolve(cfg.group_class_name.as_deref(), None);

        let body = Element::new("div")
            .class(&class)
            .children(self.children.iter().map(|child| child.render(ctx)));
        section_node(ctx, &self.title, None, body.into_node())
    }
}

const SAMPLE_TITLE_CLASS: FieldRule = FieldRule::overriding("font-mono text-sm");
const SAMPLE_METRICS_CLASS: FieldRule = FieldRule::overriding("font-mono text-sm text-fg-light");
const DEFAULT_SAMPLE_TEXT: &str = "Typography";

/// A text sample for one utility class, with its resolved font metrics.
///
/// The metrics read happens once, at the first document render, and the
/// result is frozen for the life of the instance. Later stylesheet
/// changes are not tracked.
pub struct TypographySample {
    class_name: String,
    sample_text: Option<String>,
    readout: StyleReadout<String>,
}

impl TypographySample {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            sample_text: None,
            readout: StyleReadout::pending(),
        }
    }

    /// Replaces the default sample text (`Typography`).
    pub fn with_sample_text(mut self, text: impl Into<String>) -> Self {
        self.sample_text = Some(text.into());
        self
    }

    /// The formatted metrics line; `None` until the first render.
    pub fn readout(&self) -> Option<&str> {
        self.readout.get().map(String::as_str)
    }
}

impl Component for TypographySample {
    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let cfg = &ctx.config().styles.typography;
        let title_class = SAMPLE_TITLE_CLASS.resolve(cfg.sample_title.as_deref(), None);
        let metrics_class = SAMPLE_METRICS_CLASS.resolve(cfg.sample_computed_styles.as_deref(), None);
        let sample_text = self
            .sample_text
            .as_deref()
            .unwrap_or(DEFAULT_SAMPLE_TEXT);

        let computed = ctx.computed_for(&self.class_name);
        let metrics = self.readout.resolve_with(|| format_metrics(&computed));

        Element::new("div")
            .class("flex flex-col gap-1 mb-8 mt-2")
            .child(
                Element::new("div")
                    .class(&title_class)
                    .child(
                        Element::new("span")
                            .text(format!(".{}", self.class_name))
                            .into_node(),
                    )
                    .into_node(),
            )
            .child(
                Element::new("div")
                    .class(&self.class_name)
                    .text(sample_text)
                    .into_node(),
            )
            .child(
                Element::new("div")
                    .class(&metrics_class)
                    .child(Element::new("span").text(metrics).into_node())
                    .into_node(),
            )
            .into_node()
    }
}

/// Formats resolved font metrics the way a reader expects to see them:
/// `"20px / 28px, 400, ui-monospace, monospace"`.
fn format_metrics(style: &ComputedStyle) -> String {
    let size = fmt_px(style.font_size);
    let line_height = match style.line_height {
        Some(px) => fmt_px(px),
        None => "normal".to_string(),
    };
    let family = style.font_family.as_deref().unwrap_or("sans-serif");

    format!("{} / {}, {}, {}", size, line_height, style.font_weight, family)
}

fn fmt_px(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{}px", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_metrics_full() {
        let style = ComputedStyle {
            font_size: 20.0,
            line_height: Some(28.0),
            font_weight: 300,
            font_family: Some("ui-monospace, monospace".to_string()),
            ..ComputedStyle::default()
        };
        assert_eq!(
            format_metrics(&style),
            "20px / 28px, 300, ui-monospace, monospace"
        );
    }

    #[test]
    fn test_format_metrics_defaults() {
        let style = ComputedStyle::default();
        assert_eq!(format_metrics(&style), "16px / normal, 400, sans-serif");
    }

    #[test]
    fn test_fmt_px_fractions() {
        assert_eq!(fmt_px(14.0), "14px");
        assert_eq!(fmt_px(17.5), "17.5px");
    }
}
