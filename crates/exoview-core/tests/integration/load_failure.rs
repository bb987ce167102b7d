//! Load failure scenarios.

use exoview_core::{Controller, Interaction, ListView, LoadStatus};

use crate::common::{RecordingSurface, two_planets};

fn failed_controller() -> Controller<RecordingSurface> {
    let mut controller = Controller::new(RecordingSurface::default());
    controller
        .on_load_complete::<String>(Err(
            "HTTP error: status 500 Internal Server Error".to_string()
        ))
        .unwrap();
    controller
}

#[test]
fn test_http_500_shows_load_error_with_status() {
    let controller = failed_controller();
    let ListView::LoadError(message) = controller.list_view() else {
        unreachable!("Expected LoadError view");
    };
    assert!(message.starts_with("Error loading data:"));
    assert!(message.contains("500"));
    assert!(controller.session().records().is_empty());
    assert!(matches!(controller.session().status(), LoadStatus::Failed(_)));
}

#[test]
fn test_filter_events_after_failure_do_not_fail() {
    let mut controller = failed_controller();
    controller
        .dispatch(Interaction::SearchInput("kepler".into()))
        .unwrap();
    controller
        .dispatch(Interaction::MethodChange("Transit".into()))
        .unwrap();
    assert!(controller.list_view().cards().is_empty());
    assert!(matches!(controller.list_view(), ListView::LoadError(_)));
}

#[test]
fn test_card_click_after_failure_is_rejected() {
    let mut controller = failed_controller();
    assert!(controller.dispatch(Interaction::CardClick(0)).is_err());
    assert!(controller.surface().detail.is_none());
}

#[test]
fn test_failed_session_never_populates() {
    let mut controller = failed_controller();
    assert!(controller.on_load_complete::<String>(Ok(two_planets())).is_err());
    assert!(controller.session().records().is_empty());
}
