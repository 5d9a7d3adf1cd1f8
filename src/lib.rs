//! Facade crate for the kitter workspace.
//!
//! Re-exports the component library ([`kitter`]) and the stylesheet
//! engine ([`kss`]) so a consuming project can depend on one crate. The
//! runnable demos under `demos/` build against this facade.

pub use kitter::*;

pub use kss;
