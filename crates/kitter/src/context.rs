//! The render context handed to every component.
//!
//! A [`RenderContext`] bundles the two inputs a component needs beyond
//! its own props: the active configuration snapshot and the stylesheet
//! standing in for the rendering environment. Passing it explicitly,
//! instead of components reaching for ambient state, is what keeps a
//! render pure: same context, same props, same output.

use std::sync::Arc;

use kss::types::ComputedStyle;
use kss::StyleSheet;

use crate::config::{self, KitterConfig};
use crate::error::KitterError;

/// Everything a component reads at render time.
#[derive(Debug)]
pub struct RenderContext<'a> {
    config: Arc<KitterConfig>,
    stylesheet: &'a StyleSheet,
}

impl<'a> RenderContext<'a> {
    /// Builds a context from an explicit configuration.
    pub fn new(config: impl Into<Arc<KitterConfig>>, stylesheet: &'a StyleSheet) -> Self {
        Self {
            config: config.into(),
            stylesheet,
        }
    }

    /// Builds a context from the global store (or the empty default if
    /// nothing was installed).
    pub fn from_global(stylesheet: &'a StyleSheet) -> Self {
        Self {
            config: config::global_config(),
            stylesheet,
        }
    }

    /// Builds a context from the scoped provider.
    ///
    /// Fails with [`KitterError::OutsideProvider`] outside a
    /// [`with_config`](crate::config::with_config) scope.
    pub fn from_scope(stylesheet: &'a StyleSheet) -> Result<Self, KitterError> {
        Ok(Self {
            config: config::scoped_config()?,
            stylesheet,
        })
    }

    /// The active configuration snapshot.
    pub fn config(&self) -> &KitterConfig {
        &self.config
    }

    /// The stylesheet standing in for the rendering environment.
    pub fn stylesheet(&self) -> &StyleSheet {
        self.stylesheet
    }

    /// Computes the resolved style for a space-separated class string.
    pub fn computed_for(&self, class_string: &str) -> ComputedStyle {
        let classes: Vec<&str> = class_string.split_whitespace().collect();
        self.stylesheet.computed(&classes)
    }
}
