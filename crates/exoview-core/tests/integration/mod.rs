//! Integration scenarios.

mod detail_modal;
mod filtering;
mod load_failure;
