//! Session state and load lifecycle.
//!
//! [`SessionState`] holds the record list for the lifetime of the viewer.
//! It starts empty, is populated at most once by the loader, and is read by
//! every filter pass afterwards.
//!
//! # Usage
//!
//! ```rust
//! use exoview_core::{LoadStatus, PlanetRecord, SessionState};
//!
//! let mut session = SessionState::new();
//! assert_eq!(session.status(), &LoadStatus::Pending);
//! assert!(session.records().is_empty());
//!
//! session.populate(vec![PlanetRecord::named("Kepler-10 b")]).unwrap();
//! assert_eq!(session.status(), &LoadStatus::Loaded(1));
//! assert!(session.populate(Vec::new()).is_err());
//! ```

use std::fmt;

use crate::{Error, PlanetRecord, Result};

// ============================================================================
// LoadStatus
// ============================================================================

/// Where the session is in its one-shot load.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    /// The archive request has not completed.
    #[default]
    Pending,
    /// Records were loaded; carries the record count.
    Loaded(usize),
    /// The load failed; carries the user-facing reason.
    Failed(String),
}

impl LoadStatus {
    /// Returns `true` if no further load will happen this session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Failed(_))
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "loading"),
            Self::Loaded(count) => write!(f, "loaded {count} planets"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

// ============================================================================
// SessionState
// ============================================================================

/// The write-once record list for one viewer session.
#[derive(Debug, Default)]
pub struct SessionState {
    records: Vec<PlanetRecord>,
    status: LoadStatus,
}

impl SessionState {
    /// Create an empty, pending session.
    pub fn new() -> Self {
        Self::default()
    }

    /// All loaded records in archive order. Empty until a successful load.
    pub fn records(&self) -> &[PlanetRecord] {
        &self.records
    }

    /// Look up one record by its position in the session.
    pub fn get(&self, index: usize) -> Result<&PlanetRecord> {
        self.records
            .get(index)
            .ok_or_else(|| Error::unknown_record(index, self.records.len()))
    }

    /// Current load status.
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Store the loaded records.
    ///
    /// Only the first completed load is accepted; the list is never
    /// replaced afterwards.
    pub fn populate(&mut self, records: Vec<PlanetRecord>) -> Result<usize> {
        match &self.status {
            LoadStatus::Pending => {
                let count = records.len();
                self.records = records;
                self.status = LoadStatus::Loaded(count);
                log::info!("Session → {}", self.status);
                Ok(count)
            }
            LoadStatus::Loaded(count) => Err(Error::AlreadyLoaded { count: *count }),
            LoadStatus::Failed(reason) => Err(Error::LoadFailed {
                reason: reason.clone(),
            }),
        }
    }

    /// Record a failed load. The record list stays empty.
    ///
    /// Ignored when the session has already reached a terminal status.
    pub fn fail(&mut self, reason: impl Into<String>) {
        if self.status.is_terminal() {
            log::warn!("Ignoring load failure; session already {}", self.status);
            return;
        }
        self.status = LoadStatus::Failed(reason.into());
        log::error!("Session → {}", self.status);
    }
}

// ============================================================================
// Tests
// ============================================================================
