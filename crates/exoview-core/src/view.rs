//! Card, list, and detail view-models.
//!
//! Records are projected into labelled string fields here so that a
//! [`Surface`](crate::Surface) only lays text out; it never inspects a
//! [`PlanetRecord`] or decides on a fallback.

use serde::Serialize;

use crate::PlanetRecord;
use crate::format::{or_na, text_or_na, title, two_decimals, with_unit};

/// Message shown when a filter pass keeps no records.
pub const EMPTY_MESSAGE: &str = "No exoplanets found matching your criteria.";

/// Message shown while the archive request is in flight.
pub const LOADING_MESSAGE: &str = "Loading exoplanet data...";

/// One label/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Field label, e.g. "Discovery Method".
    pub label: &'static str,
    /// Display value, never empty.
    pub value: String,
}

impl Field {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// Summary card for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// Position of the source record in the session.
    pub index: usize,
    /// Planet name or "Unnamed Exoplanet".
    pub title: String,
    /// Discovery method, year, mass, radius, and orbital period.
    pub fields: Vec<Field>,
}

impl CardView {
    /// Project a record into its summary card.
    pub fn from_record(index: usize, record: &PlanetRecord) -> Self {
        Self {
            index,
            title: title(record.name.as_deref()),
            fields: vec![
                Field::new(
                    "Discovery Method",
                    text_or_na(record.discovery_method.as_deref()),
                ),
                Field::new("Discovery Year", or_na(record.discovery_year)),
                Field::new("Mass", with_unit(record.mass_earth, "Earth masses")),
                Field::new("Radius", with_unit(record.radius_earth, "Earth radii")),
                Field::new(
                    "Orbital Period",
                    with_unit(record.orbital_period_days, "days"),
                ),
            ],
        }
    }

    /// Value of the field with `label`, if the card has one.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

/// What the list region shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "snake_case")]
pub enum ListView {
    /// The archive request is still in flight.
    Loading,
    /// The archive request failed; the message includes the cause.
    LoadError(String),
    /// The current filter kept nothing.
    Empty(String),
    /// One card per matching record, in session order.
    Cards(Vec<CardView>),
}

impl ListView {
    /// Build the list view for the given `(index, record)` pairs.
    pub fn from_matches<'a, I>(matches: I) -> Self
    where
        I: IntoIterator<Item = (usize, &'a PlanetRecord)>,
    {
        let cards: Vec<CardView> = matches
            .into_iter()
            .map(|(i, r)| CardView::from_record(i, r))
            .collect();
        if cards.is_empty() {
            Self::Empty(EMPTY_MESSAGE.to_string())
        } else {
            Self::Cards(cards)
        }
    }

    /// The view shown when loading fails.
    pub fn load_error(cause: impl std::fmt::Display) -> Self {
        Self::LoadError(format!("Error loading data: {cause}"))
    }

    /// Cards in this view; empty for every non-card state.
    pub fn cards(&self) -> &[CardView] {
        match self {
            Self::Cards(cards) => cards,
            _ => &[],
        }
    }

    /// The message shown instead of cards, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE),
            Self::LoadError(msg) | Self::Empty(msg) => Some(msg),
            Self::Cards(_) => None,
        }
    }
}

/// Extended fields for the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    /// Position of the source record in the session.
    pub index: usize,
    /// Planet name or "Unnamed Exoplanet".
    pub title: String,
    /// Every extended field, in display order.
    pub fields: Vec<Field>,
}

impl DetailView {
    /// Project a record into its detail view.
    pub fn from_record(index: usize, record: &PlanetRecord) -> Self {
        Self {
            index,
            title: title(record.name.as_deref()),
            fields: vec![
                Field::new("Name", title(record.name.as_deref())),
                Field::new(
                    "Discovery Method",
                    text_or_na(record.discovery_method.as_deref()),
                ),
                Field::new("Discovery Year", or_na(record.discovery_year)),
                Field::new(
                    "Host Star Name",
                    text_or_na(record.host_star_name.as_deref()),
                ),
                Field::new(
                    "Number of Planets in System",
                    or_na(record.planets_in_system),
                ),
                Field::new(
                    "Orbital Period (days)",
                    two_decimals(record.orbital_period_days),
                ),
                Field::new("Planet Mass (Earth masses)", two_decimals(record.mass_earth)),
                Field::new(
                    "Planet Radius (Earth radii)",
                    two_decimals(record.radius_earth),
                ),
                Field::new(
                    "Equilibrium Temperature (K)",
                    two_decimals(record.equilibrium_temperature_k),
                ),
                Field::new(
                    "Discovery Site",
                    text_or_na(record.discovery_site.as_deref()),
                ),
                Field::new(
                    "Discovery Facility",
                    text_or_na(record.discovery_facility.as_deref()),
                ),
            ],
        }
    }

    /// Value of the field with `label`, if present.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
