//! Filtering scenarios through the controller.

use exoview_core::Interaction;
use exoview_core::view::EMPTY_MESSAGE;

use crate::common::loaded_controller;

#[test]
fn test_initial_render_shows_every_record_in_order() {
    let controller = loaded_controller();
    assert_eq!(
        controller.surface().titles(),
        vec!["Kepler-10b", "51 Peg b"]
    );
}

#[test]
fn test_search_kepler_all_methods() {
    let mut controller = loaded_controller();
    controller
        .dispatch(Interaction::SearchInput("kepler".into()))
        .unwrap();
    controller
        .dispatch(Interaction::MethodChange(String::new()))
        .unwrap();
    assert_eq!(controller.surface().titles(), vec!["Kepler-10b"]);
}

#[test]
fn test_method_transit_only() {
    let mut controller = loaded_controller();
    controller
        .dispatch(Interaction::MethodChange("Transit".into()))
        .unwrap();
    assert_eq!(controller.surface().titles(), vec!["Kepler-10b"]);
}

#[test]
fn test_search_case_insensitive() {
    let mut upper = loaded_controller();
    let mut lower = loaded_controller();
    upper
        .dispatch(Interaction::SearchInput("Kepler".into()))
        .unwrap();
    lower
        .dispatch(Interaction::SearchInput("kepler".into()))
        .unwrap();
    assert_eq!(upper.list_view(), lower.list_view());
}

#[test]
fn test_no_match_shows_empty_state_not_error() {
    let mut controller = loaded_controller();
    controller
        .dispatch(Interaction::SearchInput("xyz".into()))
        .unwrap();
    let view = controller.list_view();
    assert!(view.cards().is_empty());
    assert_eq!(view.message(), Some(EMPTY_MESSAGE));
    assert!(!view.message().unwrap().contains("Error"));
}

#[test]
fn test_clearing_filters_restores_full_list() {
    let mut controller = loaded_controller();
    controller
        .dispatch(Interaction::SearchInput("peg".into()))
        .unwrap();
    controller
        .dispatch(Interaction::MethodChange("Radial Velocity".into()))
        .unwrap();
    assert_eq!(controller.surface().titles(), vec!["51 Peg b"]);

    controller
        .dispatch(Interaction::SearchInput(String::new()))
        .unwrap();
    controller
        .dispatch(Interaction::MethodChange("all".into()))
        .unwrap();
    assert_eq!(
        controller.surface().titles(),
        vec!["Kepler-10b", "51 Peg b"]
    );
}

#[test]
fn test_every_event_replaces_the_list() {
    let mut controller = loaded_controller();
    let before = controller.surface().lists.len();
    controller
        .dispatch(Interaction::SearchInput("k".into()))
        .unwrap();
    controller
        .dispatch(Interaction::SearchInput("ke".into()))
        .unwrap();
    assert_eq!(controller.surface().lists.len(), before + 2);
}

#[test]
fn test_cards_carry_source_index() {
    let mut controller = loaded_controller();
    controller
        .dispatch(Interaction::SearchInput("peg".into()))
        .unwrap();
    let cards = controller.list_view().cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].index, 1);
}
