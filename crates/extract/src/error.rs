//! Extraction Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.
//!
//! Only failures that should abort a call live here. Missing attributes and
//! rejected tag sets are ordinary outcomes; see [`Omission`](crate::Omission)
//! and [`Rejection`](crate::Rejection).

use derive_more::{Display, Error};
use ogmeta_config::error::{Error as ConfigError, ErrorKind as ConfigErrorKind};

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The tag mapping could not be loaded; fix the configuration.
    #[display("configuration error: {_0}")]
    Configuration(ConfigErrorKind),
    /// The content store failed to answer a lookup.
    #[display("content lookup failed: {_0}")]
    Lookup(#[error(not(source))] String),
}
impl ErrorKind {
    /// Convert a configuration error into an extraction error, preserving the
    /// config crate's `Exn` frame (error tree) as a child in its own
    /// error tree.
    #[track_caller]
    pub fn configuration(err: ConfigError) -> Error {
        let inner = (*err).clone();
        err.raise(ErrorKind::Configuration(inner))
    }
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Configuration(kind) => kind.is_retryable(),
            Self::Lookup(_) => true,
        }
    }
}
