//! Error types for the strdist command line.

use thiserror::Error;

/// Errors surfaced by the command line.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Rejected finder parameters
    #[error(transparent)]
    Strdist(#[from] strdist_core::Error),

    /// Unreadable population entry
    #[error("population {origin}, line {line}: {message}")]
    Population {
        origin: String,
        line: usize,
        message: String,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using the command line Error.
pub type Result<T> = std::result::Result<T, Error>;
