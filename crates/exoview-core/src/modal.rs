//! Detail overlay state machine.
//!
//! ```text
//!            card click                      card click
//!   Hidden ─────────────▶ Visible{index} ──────────────▶ Visible{other}
//!     ▲                        │
//!     └────────────────────────┘
//!       close / outside click
//! ```
//!
//! At most one detail is visible at a time. Close and outside-click are
//! no-ops while hidden.

use std::fmt;

/// Visibility of the detail overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    /// No detail is shown.
    #[default]
    Hidden,
    /// The detail for the record at `index` is shown.
    Visible {
        /// Session index of the displayed record
        index: usize,
    },
}

impl ModalState {
    /// Returns `true` if the overlay is shown.
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }

    /// Session index of the displayed record, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Visible { index } => Some(*index),
            Self::Hidden => None,
        }
    }

    /// Show the detail for `index`, replacing any visible detail.
    pub fn open(&mut self, index: usize) {
        *self = Self::Visible { index };
    }

    /// Hide the overlay. Returns `true` if it was visible.
    pub fn close(&mut self) -> bool {
        let was_visible = self.is_visible();
        *self = Self::Hidden;
        was_visible
    }
}

impl fmt::Display for ModalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => write!(f, "hidden"),
            Self::Visible { index } => write!(f, "visible({index})"),
        }
    }
}
