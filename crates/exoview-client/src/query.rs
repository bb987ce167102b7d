//! ADQL query construction.
//!
//! The archive takes the query as a `query` parameter and the response
//! format as `format`. Table and column names come from configuration, so
//! they are checked to be plain identifiers before being spliced into ADQL.

use crate::{ArchiveConfig, Error, Result};

/// Response format requested from the archive.
pub const FORMAT_JSON: &str = "json";

/// A validated archive query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveQuery {
    table: String,
    columns: Vec<String>,
    default_only: bool,
}

impl ArchiveQuery {
    /// Build a query from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuery`] if the table or any column is not a
    /// plain identifier.
    pub fn from_config(config: &ArchiveConfig) -> Result<Self> {
        check_identifier("table", &config.table)?;
        for column in &config.columns {
            check_identifier("column", column)?;
        }
        Ok(Self {
            table: config.table.clone(),
            columns: config.columns.clone(),
            default_only: config.default_only,
        })
    }

    /// The ADQL statement.
    pub fn adql(&self) -> String {
        let projection = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(",")
        };
        let mut adql = format!("select {projection} from {}", self.table);
        if self.default_only {
            adql.push_str(" where default_flag = 1");
        }
        adql
    }

    /// Query-string pairs for the TAP sync endpoint.
    pub fn params(&self) -> [(&'static str, String); 2] {
        [("query", self.adql()), ("format", FORMAT_JSON.to_string())]
    }
}

fn check_identifier(kind: &str, name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.starts_with(|c: char| c.is_ascii_digit());
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidQuery(format!("bad {kind} '{name}'")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = ArchiveQuery::from_config(&ArchiveConfig::default()).unwrap();
        let adql = query.adql();
        assert!(adql.starts_with("select pl_name,discoverymethod,disc_year,"));
        assert!(adql.ends_with(" from ps where default_flag = 1"));
    }

    #[test]
    fn test_star_projection_without_flag() {
        let config = ArchiveConfig {
            table: "ps".to_string(),
            columns: Vec::new(),
            default_only: false,
            ..Default::default()
        };
        let query = ArchiveQuery::from_config(&config).unwrap();
        assert_eq!(query.adql(), "select * from ps");
    }

    #[test]
    fn test_params() {
        let config = ArchiveConfig {
            columns: vec!["pl_name".to_string()],
            ..Default::default()
        };
        let [query, format] = ArchiveQuery::from_config(&config).unwrap().params();
        assert_eq!(query.0, "query");
        assert_eq!(query.1, "select pl_name from ps where default_flag = 1");
        assert_eq!(format, ("format", "json".to_string()));
    }

    #[test]
    fn test_rejects_injection() {
        let config = ArchiveConfig {
            table: "ps; drop".to_string(),
            ..Default::default()
        };
        let err = ArchiveQuery::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("bad table"));

        let config = ArchiveConfig {
            columns: vec!["pl_name".to_string(), "1=1".to_string()],
            ..Default::default()
        };
        assert!(ArchiveQuery::from_config(&config).is_err());
    }

    #[test]
    fn test_rejects_empty_and_leading_digit() {
        assert!(check_identifier("table", "").is_err());
        assert!(check_identifier("column", "9col").is_err());
        assert!(check_identifier("column", "sy_pnum").is_ok());
    }
}
