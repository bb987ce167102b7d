//! Property-based tests for filtering and formatting.
