//! The configuration model and its two access paths.
//!
//! A [`KitterConfig`] is a tree of optional style-override records, one
//! subtree per component kind. Consumers build one (typically by loading
//! the scaffolded `kitter.toml`) and install it exactly once at
//! application start; components read it at render time through a
//! [`RenderContext`](crate::RenderContext).
//!
//! Two access paths exist:
//!
//! - the **global store**: [`set_config`] installs the value process-wide
//!   into a set-once cell, [`global_config`] reads it (or the empty
//!   default when nothing was installed);
//! - the **scoped provider**: [`with_config`] supplies a configuration to
//!   everything that runs inside the closure, and [`scoped_config`] fails
//!   with [`KitterError::OutsideProvider`] when called outside such a
//!   scope, the stricter alternative for catching wiring mistakes at
//!   integration time.
//!
//! Absence is meaningful: a field left `None` falls through to the
//! component's built-in default, while an explicit empty string means
//! "use no class names". Subtrees never fall back to one another.

use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};

use crate::error::KitterError;

/// A CSS dimension: either a bare number of pixels or a literal CSS
/// string such as `"1000px"` or `"60ch"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssDimension {
    Pixels(f64),
    Value(String),
}

impl fmt::Display for CssDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssDimension::Pixels(px) => {
                if px.fract() == 0.0 {
                    write!(f, "{}px", *px as i64)
                } else {
                    write!(f, "{}px", px)
                }
            }
            CssDimension::Value(value) => f.write_str(value),
        }
    }
}

impl From<&str> for CssDimension {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for CssDimension {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<f64> for CssDimension {
    fn from(value: f64) -> Self {
        Self::Pixels(value)
    }
}

impl From<i32> for CssDimension {
    fn from(value: i32) -> Self {
        Self::Pixels(value as f64)
    }
}

/// Root configuration tree.
///
/// Loaded from `kitter.toml`; every field is optional and every subtree
/// is independent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitterConfig {
    pub styles: Styles,
}

/// Per-component-kind style overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Styles {
    pub documentation: DocumentationStyle,
    pub scroll_to_top: ScrollToTopStyle,
    pub page: PageStyle,
    pub page_title: PageTitleStyle,
    pub page_description: PageDescriptionStyle,
    pub page_section: PageSectionStyle,
    pub document_contents: DocumentContentsStyle,
    pub color_swatch: ColorSwatchStyle,
    pub typography: TypographyStyle,
}

/// Overrides for the outer documentation wrapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentationStyle {
    /// Classes appended after the wrapper's built-in classes.
    pub class_name: Option<String>,
    /// Maximum width of the page column.
    pub max_width: Option<CssDimension>,
}

/// Overrides for the scroll-to-top link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollToTopStyle {
    /// Classes appended to the label span.
    pub text_class_name: Option<String>,
    /// Classes appended to the icon.
    pub icon_class_name: Option<String>,
    /// Stroke color for the default chevron icon.
    pub icon_color: Option<String>,
    /// Replacement label text.
    pub text_override: Option<String>,
}

/// Overrides for pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageStyle {
    /// Classes appended after the page's built-in classes.
    pub class_name: Option<String>,
    /// Vertically center page content.
    pub center: Option<bool>,
}

/// Overrides for page titles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageTitleStyle {
    pub class_name: Option<String>,
}

/// Overrides for page descriptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageDescriptionStyle {
    pub class_name: Option<String>,
}

/// Overrides for page sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSectionStyle {
    /// Classes appended to the section title.
    pub title_class_name: Option<String>,
}

/// Overrides for the table of contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentContentsStyle {
    /// Classes appended after the list's built-in classes.
    pub class_name: Option<String>,
}

/// Overrides for color swatches. These replace the built-in defaults
/// wholesale rather than appending to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSwatchStyle {
    pub size: Option<String>,
    pub radius: Option<String>,
    pub shadow: Option<String>,
    pub label_style: Option<String>,
    pub color_code_style: Option<String>,
}

/// Overrides for typography samples. These replace the built-in defaults
/// wholesale rather than appending to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyStyle {
    pub group_class_name: Option<String>,
    pub sample_title: Option<String>,
    pub sample_computed_styles: Option<String>,
}

impl KitterConfig {
    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KitterError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// The fully-populated default configuration, the value the
    /// scaffolded starter file describes.
    ///
    /// Append-style class fields are present as empty strings (no extra
    /// classes); replace-style fields carry the built-in defaults.
    pub fn starter() -> Self {
        Self {
            styles: Styles {
                documentation: DocumentationStyle {
                    class_name: Some(String::new()),
                    max_width: Some(CssDimension::from("1000px")),
                },
                scroll_to_top: ScrollToTopStyle {
                    text_class_name: Some(String::new()),
                    icon_class_name: Some(String::new()),
                    icon_color: Some("black".to_string()),
                    text_override: Some("table of contents".to_string()),
                },
                page: PageStyle {
                    class_name: Some(String::new()),
                    center: Some(false),
                },
                page_title: PageTitleStyle {
                    class_name: Some(String::new()),
                },
                page_description: PageDescriptionStyle {
                    class_name: Some(String::new()),
                },
                page_section: PageSectionStyle {
                    title_class_name: Some(String::new()),
                },
                document_contents: DocumentContentsStyle {
                    class_name: Some(String::new()),
                },
                color_swatch: ColorSwatchStyle {
                    size: Some("w-16 h-16".to_string()),
                    radius: Some("rounded-lg".to_string()),
                    shadow: Some("shadow-md".to_string()),
                    label_style: Some("font-mono".to_string()),
                    color_code_style: Some("font-mono text-sm text-fg-light".to_string()),
                },
                typography: TypographyStyle {
                    group_class_name: Some("w-full".to_string()),
                    sample_title: Some("font-mono text-sm".to_string()),
                    sample_computed_styles: Some("font-mono text-sm text-fg-light".to_string()),
                },
            },
        }
    }
}

static CONFIG: OnceCell<Arc<KitterConfig>> = OnceCell::new();

static EMPTY: Lazy<Arc<KitterConfig>> = Lazy::new(|| Arc::new(KitterConfig::default()));

/// Installs the process-wide configuration.
///
/// The store is a set-once cell: the first call wins and every later
/// call fails with [`KitterError::ConfigAlreadySet`]. Install at
/// application start, before anything renders.
pub fn set_config(config: KitterConfig) -> Result<(), KitterError> {
    CONFIG
        .set(Arc::new(config))
        .map_err(|_| KitterError::ConfigAlreadySet)
}

/// Returns the installed configuration, or the empty default if none was
/// installed. Never fails.
pub fn global_config() -> Arc<KitterConfig> {
    CONFIG.get().cloned().unwrap_or_else(|| EMPTY.clone())
}

thread_local! {
    static SCOPE: RefCell<Vec<Arc<KitterConfig>>> = RefCell::new(Vec::new());
}

struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        SCOPE.with(|scope| {
            scope.borrow_mut().pop();
        });
    }
}

/// Runs `f` with `config` as the scoped configuration.
///
/// Scopes nest; the innermost provider wins. If a global configuration
/// is also installed and differs from the provided one, the disagreement
/// is logged; the two paths must not silently diverge within one
/// rendered tree.
pub fn with_config<R>(config: KitterConfig, f: impl FnOnce() -> R) -> R {
    let config = Arc::new(config);

    if let Some(installed) = CONFIG.get() {
        if **installed != *config {
            log::warn!(
                "scoped configuration differs from the installed global configuration"
            );
        }
    }

    SCOPE.with(|scope| scope.borrow_mut().push(config));
    let _guard = ScopeGuard;
    f()
}

/// Returns the innermost scoped configuration.
///
/// Fails with [`KitterError::OutsideProvider`] when no [`with_config`]
/// scope is active on this thread.
pub fn scoped_config() -> Result<Arc<KitterConfig>, KitterError> {
    SCOPE
        .with(|scope| scope.borrow().last().cloned())
        .ok_or(KitterError::OutsideProvider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_read_outside_provider_fails() {
        let err = scoped_config().unwrap_err();
        assert!(matches!(err, KitterError::OutsideProvider));
    }

    #[test]
    fn test_scoped_read_inside_provider() {
        let mut config = KitterConfig::default();
        config.styles.page.center = Some(true);

        let center = with_config(config, || {
            scoped_config().unwrap().styles.page.center
        });
        assert_eq!(center, Some(true));
    }

    #[test]
    fn test_scopes_nest_innermost_wins() {
        let mut outer = KitterConfig::default();
        outer.styles.page.class_name = Some("outer".to_string());
        let mut inner = KitterConfig::default();
        inner.styles.page.class_name = Some("inner".to_string());

        with_config(outer, || {
            let observed = with_config(inner, || {
                scoped_config().unwrap().styles.page.class_name.clone()
            });
            assert_eq!(observed.as_deref(), Some("inner"));

            let restored = scoped_config().unwrap().styles.page.class_name.clone();
            assert_eq!(restored.as_deref(), Some("outer"));
        });
    }

    #[test]
    fn test_scope_pops_on_exit() {
        with_config(KitterConfig::default(), || {});
        assert!(scoped_config().is_err());
    }

    #[test]
    fn test_missing_subtrees_deserialize_as_absent() {
        let config: KitterConfig =
            toml::from_str("[styles.page]\ncenter = true\n").unwrap();
        assert_eq!(config.styles.page.center, Some(true));
        assert_eq!(config.styles.page.class_name, None);
        assert_eq!(config.styles.documentation.max_width, None);
    }

    #[test]
    fn test_max_width_accepts_string_or_number() {
        let from_string: KitterConfig =
            toml::from_str("[styles.documentation]\nmax_width = \"60ch\"\n").unwrap();
        assert_eq!(
            from_string.styles.documentation.max_width,
            Some(CssDimension::Value("60ch".to_string()))
        );

        let from_number: KitterConfig =
            toml::from_str("[styles.documentation]\nmax_width = 800\n").unwrap();
        assert_eq!(
            from_number.styles.documentation.max_width,
            Some(CssDimension::Pixels(800.0))
        );
    }

    #[test]
    fn test_dimension_display() {
        assert_eq!(CssDimension::from(1000).to_string(), "1000px");
        assert_eq!(CssDimension::Pixels(250.5).to_string(), "250.5px");
        assert_eq!(CssDimension::from("60ch").to_string(), "60ch");
    }

    #[test]
    fn test_empty_string_is_distinct_from_absent() {
        let config: KitterConfig =
            toml::from_str("[styles.page]\nclass_name = \"\"\n").unwrap();
        assert_eq!(config.styles.page.class_name.as_deref(), Some(""));
    }
}
