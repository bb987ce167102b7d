//! Archive connection settings.

use serde::{Deserialize, Serialize};

/// Default TAP synchronous query endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";

/// Default table: Planetary Systems, which carries `default_flag`.
pub const DEFAULT_TABLE: &str = "ps";

/// Where and what to query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// TAP sync endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Table to select from.
    #[serde(default = "default_table")]
    pub table: String,

    /// Column projection. Empty selects every column.
    #[serde(default = "default_columns")]
    pub columns: Vec<String>,

    /// Restrict to one canonical row per planet (`default_flag = 1`).
    #[serde(default = "default_true")]
    pub default_only: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn default_columns() -> Vec<String> {
    exoview_core::ARCHIVE_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            table: default_table(),
            columns: default_columns(),
            default_only: default_true(),
        }
    }
}

impl ArchiveConfig {
    /// Same settings against a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_config_default() {
        let config = ArchiveConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.table, "ps");
        assert!(config.default_only);
        assert!(config.columns.contains(&"pl_name".to_string()));
        assert_eq!(config.columns.len(), exoview_core::ARCHIVE_COLUMNS.len());
    }

    #[test]
    fn test_archive_config_deserialization_with_defaults() {
        let json = r#"{"table": "pscomppars", "columns": []}"#;
        let config: ArchiveConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.table, "pscomppars");
        assert!(config.columns.is_empty());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.default_only);
    }

    #[test]
    fn test_with_endpoint() {
        let config = ArchiveConfig::default().with_endpoint("http://127.0.0.1:9/TAP/sync");
        assert_eq!(config.endpoint, "http://127.0.0.1:9/TAP/sync");
        assert_eq!(config.table, "ps");
    }
}
