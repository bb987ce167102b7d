//! Error types for exoview-core.

/// Errors raised by the session and controller.
///
/// Missing record fields are never errors; every display path has a
/// fallback. These variants cover misuse of the session contract.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The session was already populated by an earlier load.
    #[error("Session already loaded with {count} records")]
    AlreadyLoaded {
        /// Number of records held by the session
        count: usize,
    },

    /// The session's one load already failed; it stays empty.
    #[error("Session load already failed: {reason}")]
    LoadFailed {
        /// Reason recorded by the failed load
        reason: String,
    },

    /// A card referenced a record index outside the session.
    #[error("No record at index {index} (session holds {len})")]
    UnknownRecord {
        /// Requested index
        index: usize,
        /// Number of records in the session
        len: usize,
    },

    /// The archive payload could not be decoded into records.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for exoview-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an unknown-record error.
    pub fn unknown_record(index: usize, len: usize) -> Self {
        Error::UnknownRecord { index, len }
    }
}
