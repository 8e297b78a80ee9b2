use leptos::prelude::*;

use super::*;
use crate::state::ui::UiState;

fn field_with(value: &str) -> FieldBinding {
    let field = FieldBinding::new();
    field.value.set(value.to_owned());
    field
}

#[test]
fn validate_marks_exactly_the_empty_fields() {
    let filled = field_with("Rajesh Kumar");
    let empty = field_with("");
    assert!(!validate(&[filled, empty]));
    assert!(!filled.invalid.get_untracked());
    assert!(empty.invalid.get_untracked());
}

#[test]
fn validate_treats_whitespace_as_empty() {
    let blank = field_with("   ");
    assert!(!validate(&[blank]));
    assert!(blank.invalid.get_untracked());
}

#[test]
fn validate_clears_stale_markers_on_reattempt() {
    let field = field_with("");
    assert!(!validate(&[field]));
    assert!(field.invalid.get_untracked());

    field.value.set("now filled".to_owned());
    assert!(validate(&[field]));
    assert!(!field.invalid.get_untracked());
}

#[test]
fn valid_submission_proceeds_without_a_banner() {
    let ui = RwSignal::new(UiState::default());
    let fields = [field_with("a"), field_with("b")];
    let decision = guard_submission(ui, &fields, false);
    assert_eq!(decision, SubmitDecision::Proceed);
    assert!(ui.with_untracked(|state| state.alerts.is_empty()));
    assert!(!ui.with_untracked(UiState::loading_visible));
}

#[test]
fn valid_prediction_submission_leaves_the_overlay_open() {
    let ui = RwSignal::new(UiState::default());
    let fields = [field_with("patient-1")];
    assert_eq!(guard_submission(ui, &fields, true), SubmitDecision::Proceed);
    // The browser navigates away with the post; the overlay stays up.
    assert!(ui.with_untracked(UiState::loading_visible));
}

#[test]
fn invalid_submission_cancels_and_shows_one_banner() {
    let ui = RwSignal::new(UiState::default());
    let fields = [field_with("ok"), field_with("")];
    assert_eq!(guard_submission(ui, &fields, true), SubmitDecision::Cancel);
    assert!(!ui.with_untracked(UiState::loading_visible));
    ui.with_untracked(|state| {
        assert_eq!(state.alerts.len(), 1);
        assert_eq!(state.alerts[0].message, REQUIRED_FIELDS_MESSAGE);
        assert_eq!(state.alerts[0].kind, crate::state::ui::AlertKind::Error);
    });
}

#[test]
fn invalid_plain_form_never_opens_the_overlay() {
    let ui = RwSignal::new(UiState::default());
    let fields = [field_with("")];
    assert_eq!(guard_submission(ui, &fields, false), SubmitDecision::Cancel);
    assert!(!ui.with_untracked(UiState::loading_visible));
    assert_eq!(ui.with_untracked(|state| state.alerts.len()), 1);
}
