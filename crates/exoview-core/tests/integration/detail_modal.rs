//! Detail overlay scenarios.

use exoview_core::{Interaction, ModalState};

use crate::common::loaded_controller;

#[test]
fn test_card_click_opens_detail() {
    let mut controller = loaded_controller();
    controller.dispatch(Interaction::CardClick(0)).unwrap();

    assert_eq!(controller.modal(), ModalState::Visible { index: 0 });
    let detail = controller.surface().detail.as_ref().unwrap();
    assert_eq!(detail.title, "Kepler-10b");
    assert_eq!(detail.field("Host Star Name"), Some("Kepler-10"));
    assert_eq!(detail.field("Number of Planets in System"), Some("2"));
    assert_eq!(detail.field("Equilibrium Temperature (K)"), Some("N/A"));
    assert_eq!(detail.field("Discovery Facility"), Some("N/A"));
}

#[test]
fn test_close_control_hides_detail() {
    let mut controller = loaded_controller();
    controller.dispatch(Interaction::CardClick(0)).unwrap();
    controller.dispatch(Interaction::CloseClick).unwrap();

    assert_eq!(controller.modal(), ModalState::Hidden);
    assert!(controller.surface().detail.is_none());
    assert_eq!(controller.surface().hides, 1);
}

#[test]
fn test_outside_click_hides_detail() {
    let mut controller = loaded_controller();
    controller.dispatch(Interaction::CardClick(1)).unwrap();
    controller.dispatch(Interaction::OutsideClick).unwrap();

    assert_eq!(controller.modal(), ModalState::Hidden);
    assert!(controller.surface().detail.is_none());
}

#[test]
fn test_clicking_another_card_switches_in_one_click() {
    let mut controller = loaded_controller();
    controller.dispatch(Interaction::CardClick(0)).unwrap();
    controller.dispatch(Interaction::CardClick(1)).unwrap();

    assert_eq!(controller.modal(), ModalState::Visible { index: 1 });
    let surface = controller.surface();
    assert_eq!(surface.detail.as_ref().unwrap().title, "51 Peg b");
    assert_eq!(surface.shows, 2);
    assert_eq!(surface.hides, 0);
}

#[test]
fn test_detail_independent_of_filter_state() {
    let mut controller = loaded_controller();
    controller
        .dispatch(Interaction::SearchInput("kepler".into()))
        .unwrap();
    // The hidden card's record is still resolvable by its session index.
    controller.dispatch(Interaction::CardClick(1)).unwrap();
    assert_eq!(
        controller.surface().detail.as_ref().unwrap().title,
        "51 Peg b"
    );
}
