#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Exoview Core
//!
//! The fetch-independent half of the viewer pipeline: records, filtering,
//! view-models, and the interaction controller.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`record`]: The archive row model
//! - [`session`]: Write-once session state and load status
//! - [`filter`]: Name and discovery-method filtering
//! - [`format`]: Display formatting with fallbacks
//! - [`view`]: Card, list, and detail view-models
//! - [`modal`]: Detail overlay state machine
//! - [`controller`]: Interaction dispatch and the `Surface` boundary

pub mod controller;
pub mod error;
pub mod filter;
pub mod format;
pub mod modal;
mod proptests;
pub mod record;
pub mod session;
pub mod view;

// Re-exports for convenience
pub use controller::{Controller, Interaction, Surface};
pub use error::{Error, Result};
pub use filter::{FilterCriteria, MethodFilter, filter_records, matching_indices};
pub use modal::ModalState;
pub use record::{ARCHIVE_COLUMNS, PlanetRecord, parse_records};
pub use session::{LoadStatus, SessionState};
pub use view::{CardView, DetailView, Field, ListView};
