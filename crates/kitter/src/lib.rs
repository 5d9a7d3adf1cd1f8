//! # kitter
//!
//! Presentational components for documentation-style pages: layout
//! wrappers, a scroll-to-top affordance, a table-of-contents renderer,
//! and color/typography display helpers, plus the configuration layer
//! that lets a consuming project override each component's default
//! utility classes.
//!
//! ## Quick Start
//!
//! ```rust
//! use kitter::{
//!     Component, ContentsItem, Documentation, DocumentContents, KitterConfig, Page,
//!     RenderContext, ScrollToTop, base_stylesheet,
//! };
//!
//! let page = Documentation::new(vec![
//!     ScrollToTop::new().boxed(),
//!     Page::new(vec![
//!         DocumentContents::new(vec![ContentsItem::new("Overview", "overview")]).boxed(),
//!     ])
//!     .center(true)
//!     .with_id("overview")
//!     .boxed(),
//! ]);
//!
//! let ctx = RenderContext::new(KitterConfig::default(), base_stylesheet());
//! let html = page.render(&ctx).to_html();
//! assert!(html.contains("#overview"));
//! ```
//!
//! ## Configuration
//!
//! Styling resolves per field through three layers (built-in default,
//! the active [`KitterConfig`], and call-site props) with a fixed,
//! per-field merge discipline (see [`resolve`]). The configuration is a
//! single value installed once at startup ([`set_config`]) or supplied
//! through a scoped provider ([`with_config`]); a consuming project
//! typically loads it from the `kitter.toml` the scaffolder wrote
//! (see [`scaffold`]).
//!
//! ## Modules
//!
//! - [`components`]: the component set
//! - [`config`]: configuration tree, global store, scoped provider
//! - [`resolve`]: per-field three-tier style resolution
//! - [`context`]: the render context handed to components
//! - [`html`]: element tree and writer
//! - [`readout`]: pending→resolved handles for environment reads
//! - [`scaffold`]: starter-file scaffolding
//! - [`base`]: the built-in utility stylesheet

pub mod base;
pub mod component;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod html;
pub mod readout;
pub mod resolve;
pub mod scaffold;

pub use base::{BASE_CSS, base_stylesheet};
pub use component::{Component, Text};
pub use components::color::{ColorFormats, ColorGroup, ColorReadout, ColorSwatch};
pub use components::documentation::{
    ContentsItem, DocumentContents, Documentation, Page, PageDescription, PageSection, PageTitle,
    SCROLL_ANCHOR_ID, ScrollToTop,
};
pub use components::typography::{TypographyGroup, TypographySample};
pub use config::{
    CssDimension, KitterConfig, global_config, scoped_config, set_config, with_config,
};
pub use context::RenderContext;
pub use error::KitterError;
pub use html::{Element, Node};
pub use readout::StyleReadout;
pub use scaffold::{CONFIG_FILE_NAME, STARTER_CONFIG, ScaffoldOutcome, scaffold_config};

// Re-export the stylesheet engine and the log facade so consumers need
// only one dependency.
pub use kss;
pub use kss::{StyleSheet, parse_stylesheet};
pub use log;
