//! Starter-configuration scaffolding.
//!
//! Consuming projects get a `kitter.toml` written into their root on
//! setup. The write is strictly create-only: an existing file is never
//! touched, and both outcomes are success. The caller just reports
//! which one happened.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::KitterError;

/// Name of the scaffolded configuration file.
pub const CONFIG_FILE_NAME: &str = "kitter.toml";

/// The literal starter file: the fully-populated default configuration.
///
/// Keeping the template in sync with [`KitterConfig::starter`]
/// (`crate::config::KitterConfig::starter`) is covered by a test.
pub const STARTER_CONFIG: &str = r#"# kitter.toml - style overrides for the kitter component library.
#
# Every field is optional; delete anything you do not want to override.
# Class-name fields on layout components are appended after the
# component's built-in classes, so an empty string means "no extra
# classes". The swatch and typography fields replace their built-in
# defaults, shown below.

[styles.documentation]
class_name = ""
max_width = "1000px"

[styles.scroll_to_top]
text_class_name = ""
icon_class_name = ""
icon_color = "black"
text_override = "table of contents"

[styles.page]
class_name = ""
center = false

[styles.page_title]
class_name = ""

[styles.page_description]
class_name = ""

[styles.page_section]
title_class_name = ""

[styles.document_contents]
class_name = ""

[styles.color_swatch]
size = "w-16 h-16"
radius = "rounded-lg"
shadow = "shadow-md"
label_style = "font-mono"
color_code_style = "font-mono text-sm text-fg-light"

[styles.typography]
group_class_name = "w-full"
sample_title = "font-mono text-sm"
sample_computed_styles = "font-mono text-sm text-fg-light"
"#;

/// What a scaffolding run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// The starter file was written.
    Created,
    /// A configuration file was already present; nothing was touched.
    AlreadyExists,
}

/// Writes the starter `kitter.toml` into `dir` unless one exists.
///
/// Returns which of the two outcomes happened; only an I/O failure is an
/// error.
pub fn scaffold_config(dir: impl AsRef<Path>) -> Result<ScaffoldOutcome, KitterError> {
    let target = config_path(dir.as_ref());

    if target.exists() {
        log::debug!("{} already exists, leaving it untouched", target.display());
        return Ok(ScaffoldOutcome::AlreadyExists);
    }

    fs::write(&target, STARTER_CONFIG)?;
    log::debug!("wrote starter configuration to {}", target.display());
    Ok(ScaffoldOutcome::Created)
}

/// The configuration file path for a project root.
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}
