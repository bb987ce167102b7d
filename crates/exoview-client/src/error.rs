//! Error types for exoview-client

use thiserror::Error;

/// Result type alias for exoview-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading from the archive
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from exoview-core (decode or session misuse)
    #[error(transparent)]
    Core(#[from] exoview_core::Error),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The archive answered with a non-success status
    #[error("HTTP error: status {status}")]
    Status {
        /// Status code returned by the archive
        status: reqwest::StatusCode,
    },

    /// The configured query cannot be built
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl Error {
    /// Status code for [`Error::Status`] errors.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::Status { status } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }
}
