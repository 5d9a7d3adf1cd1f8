//! # KSS - Kitter Style Sheets
//!
//! A small utility-class stylesheet engine for documentation pages.
//!
//! KSS models the subset of CSS that the kitter component library needs to
//! answer one question: given an element's utility class list, what do those
//! classes actually resolve to? This crate provides:
//!
//! - **Parsing**: Convert stylesheet source text into a structured
//!   [`StyleSheet`](parser::StyleSheet)
//! - **Computation**: Resolve an element's class list into a
//!   [`ComputedStyle`](types::ComputedStyle) with concrete pixel values
//! - **Types**: Colors (with HSL and OKLCH conversion), lengths, and
//!   font metrics
//!
//! ## Quick Start
//!
//! ```rust
//! use kss::parser::parse_stylesheet;
//!
//! let source = r#"
//!     .bg-black { background-color: #000000; }
//!     .text-xl { font-size: 1.25rem; line-height: 1.75rem; }
//! "#;
//!
//! let stylesheet = parse_stylesheet(source).expect("valid kss");
//! let style = stylesheet.computed(&["bg-black", "text-xl"]);
//!
//! assert_eq!(style.background_color.unwrap().hex(), "#000000");
//! assert_eq!(style.font_size, 20.0);
//! ```
//!
//! ## Supported Features
//!
//! ### Selectors
//! - Class selectors: `.font-mono`, `.bg-blue-500`
//! - Comma-separated selector lists: `.text-fg, .text-fg-light`
//!
//! ### Properties
//! - Colors: `color`, `background-color`
//! - Typography: `font-size`, `line-height`, `font-weight`, `font-family`
//! - Dimensions: `max-width`
//!
//! Unknown properties are retained during parsing and skipped at
//! computation time; unknown classes are silently ignored. Both are soft
//! conditions, never errors.
//!
//! ### Units
//! - Pixels: `16px`
//! - Root-relative: `1.25rem` (16px root)
//! - Element-relative: `1.2em`
//! - Percentage: `80%`
//! - Unitless: `1.5` (line-height multiplier)
//!
//! ## Modules
//!
//! - [`parser`]: Stylesheet parsing and computation
//! - [`types`]: Colors, lengths, and computed styles
//! - [`error`]: Error types for parsing failures

pub mod error;
pub mod parser;
pub mod types;

pub use error::KssError;
pub use parser::{StyleSheet, parse_stylesheet};
pub use types::{Color, ComputedStyle};
