//! Error types for the component library.
//!
//! Only two situations are fatal to a call: misusing the scoped
//! configuration provider, and re-installing the set-once global
//! configuration. Everything style-related degrades softly instead
//! (missing config subtrees fall through to defaults, undecodable colors
//! leave display fields blank).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitterError {
    /// The global configuration store was already set.
    ///
    /// The store is a set-once cell: install the configuration exactly
    /// once at application start.
    #[error("configuration already installed; the global store is set once at startup")]
    ConfigAlreadySet,

    /// The scoped configuration was read outside of a provider scope.
    #[error("configuration read outside of a provider scope; wrap the call in with_config")]
    OutsideProvider,

    /// The configuration file could not be parsed.
    #[error("invalid configuration file: {0}")]
    Config(#[from] toml::de::Error),

    /// An I/O error occurred reading or writing a file.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// A consumer-supplied stylesheet could not be parsed.
    #[error(transparent)]
    Stylesheet(#[from] kss::KssError),
}
