//! The built-in utility stylesheet.
//!
//! This is the rendering environment the components resolve against by
//! default. Only utilities with computed meaning appear here: colors
//! and typography. Layout-only utilities (flex, grid, spacing) are
//! matched by no rule, which is fine, since unknown classes are a soft
//! condition.

use kss::{StyleSheet, parse_stylesheet};
use once_cell::sync::Lazy;

/// Source of the built-in utility stylesheet.
pub const BASE_CSS: &str = r#"
/* typography */
.font-mono { font-family: ui-monospace, SFMono-Regular, Menlo, monospace; }
.font-sans { font-family: ui-sans-serif, system-ui, sans-serif; }
.font-light { font-weight: 300; }
.font-normal { font-weight: 400; }
.font-bold { font-weight: 700; }
.text-sm { font-size: 0.875rem; line-height: 1.25rem; }
.text-md { font-size: 1rem; line-height: 1.5rem; }
.text-xl { font-size: 1.25rem; line-height: 1.75rem; }
.text-2xl { font-size: 1.5rem; line-height: 2rem; }
.text-4xl { font-size: 2.25rem; line-height: 2.5rem; }

/* foreground */
.text-fg { color: #111827; }
.text-fg-light { color: #6b7280; }

/* background palette */
.bg-black { background-color: #000000; }
.bg-white { background-color: #ffffff; }
.bg-gray-200 { background-color: #e5e7eb; }
.bg-gray-500 { background-color: #6b7280; }
.bg-red-500 { background-color: #ef4444; }
.bg-orange-500 { background-color: #f97316; }
.bg-emerald-500 { background-color: #10b981; }
.bg-blue-500 { background-color: #3b82f6; }
.bg-indigo-500 { background-color: #6366f1; }
.bg-violet-500 { background-color: #8b5cf6; }
"#;

/// The parsed built-in stylesheet.
pub fn base_stylesheet() -> &'static StyleSheet {
    static SHEET: Lazy<StyleSheet> =
        Lazy::new(|| parse_stylesheet(BASE_CSS).expect("built-in stylesheet must parse"));
    &SHEET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_stylesheet_parses() {
        assert!(!base_stylesheet().rules.is_empty());
    }

    #[test]
    fn test_base_palette_resolves() {
        let style = base_stylesheet().computed(&["bg-black"]);
        assert_eq!(style.background_color.unwrap().hex(), "#000000");
    }
}
