//! # exoview-cli
//!
//! Terminal front end for Exoview.
//!
//! This crate provides the `exoview` binary and its building blocks:
//! - TOML configuration with platform-default location
//! - Logging setup that keeps the terminal clean while the UI runs
//! - A ratatui [`Surface`](exoview_core::Surface) with keyboard and mouse input
//! - One-shot `list` output and `config` management subcommands

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use error::{Error, Result};
