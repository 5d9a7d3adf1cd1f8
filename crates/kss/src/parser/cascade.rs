//! Style computation from a class list.
//!
//! Utility stylesheets have no selector hierarchy, so the cascade
//! collapses to the source-order tiebreak: every rule whose selector list
//! intersects the element's classes applies, in stylesheet order, and
//! later declarations win. Lengths resolve to pixels only after all
//! declarations have applied, so an `em` value never depends on the
//! order properties were written in.

use crate::parser::stylesheet::{Declaration, StyleSheet};
use crate::types::{Color, ComputedStyle, Length, LineHeight, ROOT_FONT_SIZE};

/// Computes the resolved style for an element with the given class list.
///
/// Unknown classes match nothing and unknown properties are skipped;
/// both are soft conditions. The result always carries usable font
/// metrics (see [`ComputedStyle`]).
pub fn compute_style(classes: &[&str], stylesheet: &StyleSheet) -> ComputedStyle {
    let mut background_color: Option<Color> = None;
    let mut color: Option<Color> = None;
    let mut font_size: Option<Length> = None;
    let mut line_height: Option<LineHeight> = None;
    let mut font_weight: Option<u16> = None;
    let mut font_family: Option<String> = None;
    let mut max_width: Option<Length> = None;

    for rule in &stylesheet.rules {
        if !rule
            .selectors
            .iter()
            .any(|sel| classes.contains(&sel.as_str()))
        {
            continue;
        }

        log::trace!("COMPUTE: classes={:?} matched {:?}", classes, rule.selectors);

        for decl in &rule.declarations {
            match decl {
                Declaration::Color(c) => color = Some(*c),
                Declaration::BackgroundColor(c) => background_color = Some(*c),
                Declaration::FontSize(l) => font_size = Some(*l),
                Declaration::LineHeight(lh) => line_height = Some(*lh),
                Declaration::FontWeight(w) => font_weight = Some(*w),
                Declaration::FontFamily(f) => font_family = Some(f.clone()),
                Declaration::MaxWidth(l) => max_width = Some(*l),
                Declaration::Unknown(name) => {
                    log::debug!("skipping unknown property '{}'", name);
                }
            }
        }
    }

    let font_size_px = font_size
        .map(|l| l.resolve(ROOT_FONT_SIZE, ROOT_FONT_SIZE))
        .unwrap_or(ROOT_FONT_SIZE);
    let line_height_px = line_height.map(|lh| lh.resolve(ROOT_FONT_SIZE, font_size_px));

    ComputedStyle {
        background_color,
        color,
        font_size: font_size_px,
        line_height: line_height_px,
        font_weight: font_weight.unwrap_or(400),
        font_family,
        max_width,
    }
}
