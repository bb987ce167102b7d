//! Exoview configuration file.
//!
//! Resolution order for the file path: an explicit `--config` value, then
//! `<config_dir>/exoview/config.toml`. A missing file yields defaults.

use std::path::{Path, PathBuf};

use exoview_client::ArchiveConfig;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Project name, used for the config directory.
pub const PROJECT_NAME: &str = "exoview";

/// Config file name inside the project config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Discovery methods offered by the selector, in the archive's vocabulary.
pub const DEFAULT_METHODS: &[&str] = &[
    "Transit",
    "Radial Velocity",
    "Imaging",
    "Microlensing",
    "Transit Timing Variations",
    "Eclipse Timing Variations",
    "Orbital Brightness Modulation",
    "Pulsar Timing",
    "Astrometry",
    "Pulsation Timing Variations",
    "Disk Kinematics",
];

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Options for the discovery-method selector, after "All methods".
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,
}

fn default_methods() -> Vec<String> {
    DEFAULT_METHODS.iter().map(|m| m.to_string()).collect()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            methods: default_methods(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExoviewConfig {
    /// Archive connection settings.
    #[serde(default)]
    pub archive: ArchiveConfig,

    /// Terminal UI settings.
    #[serde(default)]
    pub ui: UiConfig,
}

impl ExoviewConfig {
    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join(CONFIG_FILE))
    }

    /// The explicit path if given, otherwise the platform default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        explicit
            .map(PathBuf::from)
            .or_else(Self::default_config_path)
    }

    /// Load configuration, falling back to defaults when no file exists.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Override the archive endpoint.
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.archive.endpoint = endpoint;
        }
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
