//! # exoview-client
//!
//! Data loader for Exoview.
//!
//! This crate talks to the NASA Exoplanet Archive TAP service:
//! - ADQL query construction from [`ArchiveConfig`]
//! - One-shot fetch of the default-flagged planet table as JSON
//! - Decoding into [`exoview_core::PlanetRecord`]s in archive order
//! - Populating a [`exoview_core::SessionState`] on success only

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod query;

pub use client::{ArchiveClient, load_session};
pub use config::ArchiveConfig;
pub use error::{Error, Result};
pub use query::ArchiveQuery;
