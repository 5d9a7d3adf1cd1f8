//! Error types for KSS parsing and processing.

use thiserror::Error;

/// Errors that can occur during KSS parsing.
///
/// # Examples
///
/// ```rust
/// use kss::parser::parse_stylesheet;
///
/// // Syntax error example - missing value after colon
/// let result = parse_stylesheet(".swatch { background-color: }");
/// assert!(result.is_err());
/// ```
#[derive(Error, Debug)]
pub enum KssError {
    /// Invalid stylesheet syntax was encountered during parsing.
    ///
    /// The string contains details about what was unexpected and where.
    #[error("stylesheet syntax error: {0}")]
    InvalidSyntax(String),

    /// An I/O error occurred while reading a stylesheet file.
    #[error("I/O error reading stylesheet")]
    Io(#[from] std::io::Error),
}
