//! The archive row model.
//!
//! [`PlanetRecord`] mirrors one row of the Planetary Systems table. Field
//! names are Rust-side; serde renames map them onto archive column names.
//! Every field is optional because the archive leaves many cells `null`.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Archive columns read into a [`PlanetRecord`], in display order.
pub const ARCHIVE_COLUMNS: &[&str] = &[
    "pl_name",
    "discoverymethod",
    "disc_year",
    "pl_bmasse",
    "pl_rade",
    "pl_orbper",
    "hostname",
    "sy_pnum",
    "pl_eqt",
    "disc_locale",
    "disc_facility",
];

/// One exoplanet entry from the archive.
///
/// Records are never mutated after load. Columns the archive returns but
/// this model does not name are ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    /// Planet designation, e.g. "Kepler-10 b".
    #[serde(rename = "pl_name", default)]
    pub name: Option<String>,

    /// Discovery method, e.g. "Transit".
    #[serde(rename = "discoverymethod", default)]
    pub discovery_method: Option<String>,

    /// Year of discovery.
    #[serde(rename = "disc_year", default)]
    pub discovery_year: Option<i32>,

    /// Best mass estimate in Earth masses.
    #[serde(rename = "pl_bmasse", default)]
    pub mass_earth: Option<f64>,

    /// Radius in Earth radii.
    #[serde(rename = "pl_rade", default)]
    pub radius_earth: Option<f64>,

    /// Orbital period in days.
    #[serde(rename = "pl_orbper", default)]
    pub orbital_period_days: Option<f64>,

    /// Host star designation.
    #[serde(rename = "hostname", default)]
    pub host_star_name: Option<String>,

    /// Number of planets known in the system.
    #[serde(rename = "sy_pnum", default)]
    pub planets_in_system: Option<u32>,

    /// Equilibrium temperature in Kelvin.
    #[serde(rename = "pl_eqt", default)]
    pub equilibrium_temperature_k: Option<f64>,

    /// Where the discovery was made (ground, space, ...).
    #[serde(rename = "disc_locale", alias = "pl_discsite", default)]
    pub discovery_site: Option<String>,

    /// Facility credited with the discovery.
    #[serde(rename = "disc_facility", alias = "pl_facility", default)]
    pub discovery_facility: Option<String>,
}

impl PlanetRecord {
    /// Create a record carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the discovery method.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.discovery_method = Some(method.into());
        self
    }

    /// Name used for matching; a missing name matches as the empty string.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Decode an archive JSON array into records, preserving source order.
pub fn parse_records(json: &str) -> Result<Vec<PlanetRecord>> {
    Ok(serde_json::from_str(json)?)
}
