//! Error types

use thiserror::Error;

/// Errors raised when building n-gram sets or finders
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A construction parameter is out of range
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for strdist operations
pub type Result<T> = std::result::Result<T, Error>;
