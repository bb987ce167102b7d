//! Interaction dispatch and the rendering boundary.
//!
//! The [`Controller`] owns the session, the current filter criteria, and the
//! detail overlay state. Each [`Interaction`] runs one handler synchronously
//! and pushes the derived view to a [`Surface`]. Handlers never perform I/O;
//! the only asynchronous step, the archive load, reports back through
//! [`Controller::on_load_complete`].

use std::fmt;

use crate::filter::{FilterCriteria, MethodFilter, matching_indices};
use crate::modal::ModalState;
use crate::session::{LoadStatus, SessionState};
use crate::view::{DetailView, ListView};
use crate::{PlanetRecord, Result};

/// The rendering boundary.
///
/// Implementations own whatever widgets or markup display the views. They
/// receive complete views and replace what they showed before.
pub trait Surface {
    /// Replace the list region.
    fn render_list(&mut self, view: &ListView);

    /// Populate the detail overlay and make it visible.
    fn show_detail(&mut self, view: &DetailView);

    /// Hide the detail overlay.
    fn hide_detail(&mut self);
}

/// A user interaction the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// The search text changed.
    SearchInput(String),
    /// The discovery-method selector changed; `""` or `"all"` clears it.
    MethodChange(String),
    /// A card was activated; carries the card's session index.
    CardClick(usize),
    /// The overlay's close control was activated.
    CloseClick,
    /// A click landed outside the overlay.
    OutsideClick,
}

impl Interaction {
    /// Event name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SearchInput(_) => "search-input",
            Self::MethodChange(_) => "method-change",
            Self::CardClick(_) => "card-click",
            Self::CloseClick => "close-click",
            Self::OutsideClick => "outside-click",
        }
    }
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SearchInput(term) => write!(f, "{} {term:?}", self.name()),
            Self::MethodChange(method) => write!(f, "{} {method:?}", self.name()),
            Self::CardClick(index) => write!(f, "{} #{index}", self.name()),
            Self::CloseClick | Self::OutsideClick => write!(f, "{}", self.name()),
        }
    }
}

/// Wires interactions to filtering and rendering.
pub struct Controller<S: Surface> {
    session: SessionState,
    criteria: FilterCriteria,
    modal: ModalState,
    list: ListView,
    surface: S,
}

impl<S: Surface> Controller<S> {
    /// Create a controller over an empty session and show the loading view.
    pub fn new(surface: S) -> Self {
        let mut controller = Self {
            session: SessionState::new(),
            criteria: FilterCriteria::new(),
            modal: ModalState::Hidden,
            list: ListView::Loading,
            surface,
        };
        controller.surface.render_list(&controller.list);
        controller
    }

    /// Read access to the session records and status.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Current filter criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Current overlay state.
    pub fn modal(&self) -> ModalState {
        self.modal
    }

    /// The list view most recently pushed to the surface.
    pub fn list_view(&self) -> &ListView {
        &self.list
    }

    /// The rendering surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Handle the outcome of the one archive load.
    ///
    /// On success the session is populated and the list rendered through the
    /// current criteria. On failure the session stays empty and the list
    /// region shows the load error.
    pub fn on_load_complete<E: fmt::Display>(
        &mut self,
        outcome: std::result::Result<Vec<PlanetRecord>, E>,
    ) -> Result<()> {
        match outcome {
            Ok(records) => {
                self.session.populate(records)?;
            }
            Err(cause) => {
                log::error!("Archive load failed: {cause}");
                self.session.fail(cause.to_string());
            }
        }
        self.refresh_list();
        Ok(())
    }

    /// Run the handler for one interaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRecord`](crate::Error::UnknownRecord) for a
    /// card click that does not resolve to a session record. State is left
    /// unchanged in that case.
    pub fn dispatch(&mut self, interaction: Interaction) -> Result<()> {
        log::debug!("Dispatch {interaction}");
        match interaction {
            Interaction::SearchInput(term) => {
                self.criteria.set_search(term);
                self.refresh_list();
            }
            Interaction::MethodChange(method) => {
                self.criteria.set_method(MethodFilter::from_selector(&method));
                self.refresh_list();
            }
            Interaction::CardClick(index) => {
                let detail = DetailView::from_record(index, self.session.get(index)?);
                self.modal.open(index);
                self.surface.show_detail(&detail);
            }
            Interaction::CloseClick | Interaction::OutsideClick => {
                if self.modal.close() {
                    self.surface.hide_detail();
                }
            }
        }
        Ok(())
    }

    fn refresh_list(&mut self) {
        let records = self.session.records();
        let matches = matching_indices(records, &self.criteria)
            .into_iter()
            .filter_map(|i| records.get(i).map(|r| (i, r)));

        self.list = match self.session.status() {
            LoadStatus::Pending => ListView::Loading,
            LoadStatus::Failed(reason) => ListView::load_error(reason),
            LoadStatus::Loaded(_) => ListView::from_matches(matches),
        };
        log::debug!(
            "Rendered {} cards for search {:?} / {}",
            self.list.cards().len(),
            self.criteria.search(),
            self.criteria.method().label()
        );
        self.surface.render_list(&self.list);
    }
}

impl<S: Surface + fmt::Debug> fmt::Debug for Controller<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("status", self.session.status())
            .field("criteria", &self.criteria)
            .field("modal", &self.modal)
            .field("surface", &self.surface)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
