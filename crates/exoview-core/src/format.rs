//! Display formatting with fallbacks.
//!
//! Absent values never reach a numeric formatter: every helper checks for
//! presence first and yields [`NOT_AVAILABLE`] otherwise. Non-finite floats
//! count as absent.

/// Fallback for any absent field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Fallback title for a record without a name.
pub const UNNAMED: &str = "Unnamed Exoplanet";

/// A measurement to two decimal places, or "N/A".
pub fn two_decimals(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{v:.2}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// A measurement to two decimal places followed by a unit, or "N/A".
pub fn with_unit(value: Option<f64>, unit: &str) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{v:.2} {unit}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Any displayable value, or "N/A".
pub fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// A text value, or "N/A" when absent or empty.
pub fn text_or_na(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// The record title: its name, or "Unnamed Exoplanet".
pub fn title(name: Option<&str>) -> String {
    match name {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => UNNAMED.to_string(),
    }
}
