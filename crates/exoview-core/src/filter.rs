//! Name and discovery-method filtering.
//!
//! A linear, order-preserving scan over the session records. Two predicates
//! must both hold for a record to be kept:
//!
//! - the search term is a case-insensitive substring of the planet name
//!   (a missing name matches as `""`)
//! - the method filter is [`MethodFilter::All`], or the record's discovery
//!   method equals the selected method exactly

use crate::PlanetRecord;

/// Selector value that stands for "every method".
pub const ALL_METHODS: &str = "all";

/// Discovery-method selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MethodFilter {
    /// No restriction.
    #[default]
    All,
    /// Only records whose method equals this value (case-sensitive).
    Exact(String),
}

impl MethodFilter {
    /// Build a filter from a raw selector value.
    ///
    /// The empty string and `"all"` (any case) select every method.
    pub fn from_selector(value: &str) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_METHODS) {
            Self::All
        } else {
            Self::Exact(value.to_string())
        }
    }

    /// Whether a record passes this filter.
    pub fn matches(&self, record: &PlanetRecord) -> bool {
        match self {
            Self::All => true,
            Self::Exact(method) => record.discovery_method.as_deref() == Some(method.as_str()),
        }
    }

    /// Label for display in a selector.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All methods",
            Self::Exact(method) => method,
        }
    }
}

impl From<&str> for MethodFilter {
    fn from(value: &str) -> Self {
        Self::from_selector(value)
    }
}

/// The current search term and method selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    search: String,
    needle: String,
    method: MethodFilter,
}

impl FilterCriteria {
    /// Criteria that keep every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.set_search(term);
        self
    }

    /// Replace the method selection.
    pub fn with_method(mut self, method: impl Into<MethodFilter>) -> Self {
        self.method = method.into();
        self
    }

    /// Replace the search term in place.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.needle = self.search.to_lowercase();
    }

    /// Replace the method selection in place.
    pub fn set_method(&mut self, method: MethodFilter) {
        self.method = method;
    }

    /// The search term as typed.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The current method selection.
    pub fn method(&self) -> &MethodFilter {
        &self.method
    }

    /// Whether a record passes both predicates.
    pub fn matches(&self, record: &PlanetRecord) -> bool {
        self.name_matches(record) && self.method.matches(record)
    }

    fn name_matches(&self, record: &PlanetRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        record.name_or_empty().to_lowercase().contains(&self.needle)
    }
}

/// Records matching `criteria`, in their original order.
pub fn filter_records<'a>(
    records: &'a [PlanetRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a PlanetRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}

/// Positions of the records matching `criteria`, ascending.
pub fn matching_indices(records: &[PlanetRecord], criteria: &FilterCriteria) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| criteria.matches(r))
        .map(|(i, _)| i)
        .collect()
}
