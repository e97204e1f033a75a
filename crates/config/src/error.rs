//! Configuration Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction, in the same shape as every other crate in the workspace.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A configuration error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The configuration file does not exist.
    #[display("configuration file not found: {}", _0.display())]
    NotFound(#[error(not(source))] PathBuf),
    /// The file extension does not map to a known configuration format.
    #[display("unsupported configuration format: {}", _0.display())]
    UnsupportedFormat(#[error(not(source))] PathBuf),
    /// The configuration could not be deserialized (wrong types, bad syntax).
    #[display("invalid configuration: {_0}")]
    Invalid(#[error(not(source))] String),
    /// The configuration deserialized, but a value breaks a mapping rule.
    #[display("malformed configuration value '{field}': {reason}")]
    Malformed {
        /// Dotted path of the offending value.
        field: String,
        /// What is wrong with it.
        reason: &'static str,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Everything else needs the configuration edited.
        matches!(self, Self::NotFound(_))
    }
}
