//! The pending→resolved handle for environment-derived values.
//!
//! A derived-value component (color swatch, typography sample) reads
//! what its style token resolves to in the rendering environment. The
//! read has a two-state lifecycle: pending from construction until the
//! first document render, resolved with frozen values afterwards. The
//! handle resolves at most once: later renders reuse the frozen values
//! and never re-read, and a read that produced nothing stays blank for
//! the life of the instance. There are no retries.

use once_cell::sync::OnceCell;

/// An observable handle to a value read from the rendering environment.
#[derive(Debug, Default)]
pub struct StyleReadout<T> {
    cell: OnceCell<T>,
}

impl<T> StyleReadout<T> {
    /// A handle in the pending state.
    pub fn pending() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// True until the first resolution.
    pub fn is_pending(&self) -> bool {
        self.cell.get().is_none()
    }

    /// The resolved value, or `None` while pending.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Resolves the handle, freezing the first value it is given.
    pub(crate) fn resolve_with(&self, f: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_pending() {
        let readout: StyleReadout<String> = StyleReadout::pending();
        assert!(readout.is_pending());
        assert_eq!(readout.get(), None);
    }

    #[test]
    fn test_first_resolution_freezes() {
        let readout = StyleReadout::pending();
        readout.resolve_with(|| "first".to_string());
        readout.resolve_with(|| "second".to_string());

        assert!(!readout.is_pending());
        assert_eq!(readout.get().map(String::as_str), Some("first"));
    }
}
