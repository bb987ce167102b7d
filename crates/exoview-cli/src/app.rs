//! Terminal application state.
//!
//! [`TuiSurface`] is the [`Surface`] the controller renders into; [`App`]
//! turns key and mouse events into [`Interaction`]s and keeps the purely
//! presentational state (search buffer, selection, scroll offset, and the
//! screen areas from the last draw used for mouse hit-testing).

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use exoview_core::{
    Controller, DetailView, Interaction, ListView, ModalState, PlanetRecord, Surface,
};
use ratatui::layout::Rect;

/// Rows taken by one card in the list, borders included.
pub const CARD_HEIGHT: u16 = 4;

// ============================================================================
// Surface
// ============================================================================

/// Latest views pushed by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiSurface {
    list: ListView,
    detail: Option<DetailView>,
}

impl Default for TuiSurface {
    fn default() -> Self {
        Self {
            list: ListView::Loading,
            detail: None,
        }
    }
}

impl TuiSurface {
    /// Current list region content.
    pub fn list(&self) -> &ListView {
        &self.list
    }

    /// Detail overlay content, if the overlay is shown.
    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }
}

impl Surface for TuiSurface {
    fn render_list(&mut self, view: &ListView) {
        self.list = view.clone();
    }

    fn show_detail(&mut self, view: &DetailView) {
        self.detail = Some(view.clone());
    }

    fn hide_detail(&mut self) {
        self.detail = None;
    }
}

// ============================================================================
// App
// ============================================================================

/// Input mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Keys navigate and trigger actions.
    #[default]
    Browse,
    /// Keys edit the search term.
    Search,
}

/// Screen regions from the last draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Areas {
    /// Search input box.
    pub search: Rect,
    /// Method selector box.
    pub method: Rect,
    /// Region the cards are drawn in, borders excluded.
    pub cards: Rect,
    /// Detail overlay, when shown.
    pub modal: Option<Rect>,
    /// Close control inside the overlay.
    pub close: Option<Rect>,
}

/// Interactive viewer state.
pub struct App {
    controller: Controller<TuiSurface>,
    /// Selector options; index 0 is "all methods".
    methods: Vec<String>,
    method_idx: usize,
    search: String,
    mode: Mode,
    selected: usize,
    offset: usize,
    /// Regions recorded by the renderer.
    pub areas: Areas,
    should_quit: bool,
}

impl App {
    /// Create the app in its loading state.
    ///
    /// `methods` are the selector options after the implicit "all methods".
    pub fn new(methods: Vec<String>) -> Self {
        let mut options = Vec::with_capacity(methods.len() + 1);
        options.push(String::new());
        options.extend(methods);
        Self {
            controller: Controller::new(TuiSurface::default()),
            methods: options,
            method_idx: 0,
            search: String::new(),
            mode: Mode::Browse,
            selected: 0,
            offset: 0,
            areas: Areas::default(),
            should_quit: false,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// The controller driving the views.
    pub fn controller(&self) -> &Controller<TuiSurface> {
        &self.controller
    }

    /// Current list region content.
    pub fn list(&self) -> &ListView {
        self.controller.surface().list()
    }

    /// Detail overlay content, if shown.
    pub fn detail(&self) -> Option<&DetailView> {
        self.controller.surface().detail()
    }

    /// Overlay state.
    pub fn modal(&self) -> ModalState {
        self.controller.modal()
    }

    /// Search buffer as typed.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Label of the selected method option.
    pub fn method_label(&self) -> &str {
        self.controller.criteria().method().label()
    }

    /// Input mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Position of the highlighted card among the visible cards.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the first card drawn.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Adjust the scroll offset so the selection fits in `rows` card slots.
    pub fn scroll_to_selection(&mut self, rows: usize) {
        let rows = rows.max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + rows {
            self.offset = self.selected + 1 - rows;
        }
    }

    // ------------------------------------------------------------------------
    // Loader
    // ------------------------------------------------------------------------

    /// Apply the loader's outcome.
    pub fn on_load<E: fmt::Display>(&mut self, result: Result<Vec<PlanetRecord>, E>) {
        if let Err(e) = self.controller.on_load_complete(result) {
            log::warn!("Ignoring load outcome: {e}");
        }
        self.clamp_selection();
    }

    // ------------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------------

    /// Handle a key press.
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            Mode::Search => self.on_search_key(key),
            Mode::Browse => self.on_browse_key(key),
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.mode = Mode::Browse,
            KeyCode::Backspace => {
                if self.search.pop().is_some() {
                    self.search_changed();
                }
            }
            KeyCode::Char(c) => {
                self.search.push(c);
                self.search_changed();
            }
            _ => {}
        }
    }

    fn on_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Tab => self.cycle_method(1),
            KeyCode::BackTab => self.cycle_method(self.methods.len().saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Esc | KeyCode::Char('x') => self.dispatch(Interaction::CloseClick),
            _ => {}
        }
    }

    // ------------------------------------------------------------------------
    // Mouse
    // ------------------------------------------------------------------------

    /// Handle a mouse event against the areas of the last draw.
    pub fn on_mouse(&mut self, event: MouseEvent) {
        let hit = |rect: Rect| {
            event.column >= rect.x
                && event.column < rect.x.saturating_add(rect.width)
                && event.row >= rect.y
                && event.row < rect.y.saturating_add(rect.height)
        };

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let card = if hit(self.areas.cards) {
                    self.card_at_row(event.row)
                } else {
                    None
                };

                if self.modal().is_visible() {
                    if self.areas.close.is_some_and(hit) {
                        self.dispatch(Interaction::CloseClick);
                    } else if !self.areas.modal.is_some_and(hit) {
                        match card {
                            Some(position) => {
                                self.selected = position;
                                self.open_selected();
                            }
                            None => self.dispatch(Interaction::OutsideClick),
                        }
                    }
                    return;
                }

                if hit(self.areas.search) {
                    self.mode = Mode::Search;
                } else if hit(self.areas.method) {
                    self.mode = Mode::Browse;
                    self.cycle_method(1);
                } else if let Some(position) = card {
                    self.mode = Mode::Browse;
                    self.selected = position;
                    self.open_selected();
                }
            }
            MouseEventKind::ScrollDown if !self.modal().is_visible() => self.move_selection(1),
            MouseEventKind::ScrollUp if !self.modal().is_visible() => self.move_selection(-1),
            _ => {}
        }
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    /// Position of the card drawn at screen `row`, if any.
    fn card_at_row(&self, row: u16) -> Option<usize> {
        let slot = usize::from(row.checked_sub(self.areas.cards.y)? / CARD_HEIGHT);
        let position = self.offset + slot;
        (position < self.list().cards().len()).then_some(position)
    }

    fn dispatch(&mut self, interaction: Interaction) {
        log::debug!("Dispatching {interaction}");
        if let Err(e) = self.controller.dispatch(interaction) {
            log::warn!("Interaction ignored: {e}");
        }
    }

    fn search_changed(&mut self) {
        self.dispatch(Interaction::SearchInput(self.search.clone()));
        self.reset_selection();
    }

    fn cycle_method(&mut self, step: usize) {
        if self.methods.is_empty() {
            return;
        }
        self.method_idx = (self.method_idx + step) % self.methods.len();
        let selector = self.methods[self.method_idx].clone();
        self.dispatch(Interaction::MethodChange(selector));
        self.reset_selection();
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.list().cards().len();
        if len == 0 {
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    fn open_selected(&mut self) {
        let index = self.list().cards().get(self.selected).map(|c| c.index);
        if let Some(index) = index {
            self.dispatch(Interaction::CardClick(index));
        }
    }

    fn reset_selection(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    fn clamp_selection(&mut self) {
        let len = self.list().cards().len();
        self.selected = self.selected.min(len.saturating_sub(1));
        self.offset = self.offset.min(self.selected);
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("status", self.controller.session().status())
            .field("modal", &self.modal())
            .field("search", &self.search)
            .field("method", &self.method_label())
            .field("mode", &self.mode)
            .field("selected", &self.selected)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
