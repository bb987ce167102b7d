//! Error types for exoview-cli

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for exoview-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in exoview-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from exoview-core
    #[error("Core error: {0}")]
    Core(#[from] exoview_core::Error),

    /// Error from exoview-client
    #[error("Client error: {0}")]
    Client(#[from] exoview_client::Error),

    /// Configuration problem
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
    },

    /// File I/O failure with the path involved
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File or directory being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Terminal or stdout failure
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// JSON output failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Logging could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it concerns.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
