//! Shared fixtures for exoview-core integration tests.

use exoview_core::{Controller, DetailView, ListView, PlanetRecord, Surface};

/// A surface that records every view it is handed.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Every list view rendered, oldest first.
    pub lists: Vec<ListView>,
    /// The detail currently shown, if any.
    pub detail: Option<DetailView>,
    /// Number of `show_detail` calls.
    pub shows: usize,
    /// Number of `hide_detail` calls.
    pub hides: usize,
}

impl RecordingSurface {
    /// Titles of the cards in the latest list view.
    pub fn titles(&self) -> Vec<String> {
        self.lists
            .last()
            .map(|view| view.cards().iter().map(|c| c.title.clone()).collect())
            .unwrap_or_default()
    }
}

impl Surface for RecordingSurface {
    fn render_list(&mut self, view: &ListView) {
        self.lists.push(view.clone());
    }

    fn show_detail(&mut self, view: &DetailView) {
        self.detail = Some(view.clone());
        self.shows += 1;
    }

    fn hide_detail(&mut self) {
        self.detail = None;
        self.hides += 1;
    }
}

/// The two-planet fixture used across scenarios.
pub fn two_planets() -> Vec<PlanetRecord> {
    vec![
        PlanetRecord {
            name: Some("Kepler-10b".to_string()),
            discovery_method: Some("Transit".to_string()),
            discovery_year: Some(2011),
            mass_earth: Some(3.26),
            radius_earth: Some(1.47),
            orbital_period_days: Some(0.837495),
            host_star_name: Some("Kepler-10".to_string()),
            planets_in_system: Some(2),
            ..Default::default()
        },
        PlanetRecord {
            name: Some("51 Peg b".to_string()),
            discovery_method: Some("Radial Velocity".to_string()),
            discovery_year: Some(1995),
            orbital_period_days: Some(4.230785),
            host_star_name: Some("51 Peg".to_string()),
            ..Default::default()
        },
    ]
}

/// A controller whose session holds [`two_planets`].
pub fn loaded_controller() -> Controller<RecordingSurface> {
    let mut controller = Controller::new(RecordingSurface::default());
    controller
        .on_load_complete::<String>(Ok(two_planets()))
        .expect("first load is accepted");
    controller
}
