//! Per-field style resolution.
//!
//! Every component field resolves through three layers: the built-in
//! default, the active configuration, and the call-site value. How the
//! layers combine is decided once per field and encoded as data, a
//! [`FieldRule`] const next to the component, rather than ad hoc at
//! each call site:
//!
//! - [`Discipline::Override`]: first present layer wins, call-site
//!   first. An explicit empty string wins like any other value.
//! - [`Discipline::Concat`]: all present layers are joined in fixed
//!   order (built-in base, configured, call-site); empty layers
//!   contribute no tokens.
//!
//! Resolution never fails and always yields a usable (possibly empty)
//! value; identical inputs always yield identical output.

/// How the three layers of a field combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// First present layer wins: call-site, then configured, then the
    /// built-in default.
    Override,
    /// All present layers join, space-separated, in fixed order:
    /// built-in base, configured, call-site.
    Concat,
}

/// A component field's built-in default and merge discipline.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub base: &'static str,
    pub discipline: Discipline,
}

impl FieldRule {
    /// A field whose layers replace one another.
    pub const fn overriding(base: &'static str) -> Self {
        Self {
            base,
            discipline: Discipline::Override,
        }
    }

    /// A field whose layers concatenate.
    pub const fn concat(base: &'static str) -> Self {
        Self {
            base,
            discipline: Discipline::Concat,
        }
    }

    /// Resolves the field from its configured and call-site layers.
    pub fn resolve(&self, configured: Option<&str>, explicit: Option<&str>) -> String {
        let resolved = match self.discipline {
            Discipline::Override => explicit.or(configured).unwrap_or(self.base).to_string(),
            Discipline::Concat => join_classes(&[
                self.base,
                configured.unwrap_or(""),
                explicit.unwrap_or(""),
            ]),
        };
        log::trace!(
            "RESOLVE: {:?} base={:?} configured={:?} explicit={:?} -> {:?}",
            self.discipline,
            self.base,
            configured,
            explicit,
            resolved
        );
        resolved
    }
}

/// Resolves a literal (non-class) field: call-site, then configured,
/// then the default.
pub fn resolve_value<T: Clone>(explicit: Option<&T>, configured: Option<&T>, default: T) -> T {
    explicit.or(configured).cloned().unwrap_or(default)
}

/// Joins class strings with single spaces, skipping empty parts.
pub fn join_classes(parts: &[&str]) -> String {
    let mut out = String::new();
    for part in parts {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}
