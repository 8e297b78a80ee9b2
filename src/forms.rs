//! Required-field validation and the shared submit guard.
//!
//! DESIGN
//! ======
//! Every form funnels its submit event through [`submit_guard`]. Validation
//! is shallow: a required field fails only when its trimmed value is empty,
//! and deeper checks belong to the backend. Invalid markers are recomputed
//! from scratch on every attempt, so a field corrected since the last
//! attempt loses its marker.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use leptos::prelude::*;

use crate::state::ui::{AlertKind, UiState, show_alert};

/// Banner text shown when a submission has empty required fields.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// A required form field: its live value and its invalid marker.
#[derive(Clone, Copy)]
pub struct FieldBinding {
    pub value: RwSignal<String>,
    pub invalid: RwSignal<bool>,
}

impl FieldBinding {
    pub fn new() -> Self {
        Self {
            value: RwSignal::new(String::new()),
            invalid: RwSignal::new(false),
        }
    }
}

impl Default for FieldBinding {
    fn default() -> Self {
        Self::new()
    }
}

/// Recompute every field's invalid marker from its current value.
///
/// Returns `true` when every field is non-empty after trimming.
pub fn validate(fields: &[FieldBinding]) -> bool {
    let mut all_valid = true;
    for field in fields {
        let empty = field.value.with_untracked(|value| value.trim().is_empty());
        field.invalid.set(empty);
        if empty {
            all_valid = false;
        }
    }
    all_valid
}

/// What a guarded submission attempt decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// All required fields present; the native form post proceeds.
    Proceed,
    /// At least one field empty; the post is cancelled.
    Cancel,
}

/// Run the guard body for one submission attempt.
///
/// Prediction forms open the loading overlay before validation and leave it
/// open on success; the browser navigates away with the post. On failure
/// the overlay (if any) closes again and one error banner appears.
pub fn guard_submission(
    ui: RwSignal<UiState>,
    fields: &[FieldBinding],
    prediction_form: bool,
) -> SubmitDecision {
    if prediction_form {
        ui.update(UiState::show_loading);
    }
    if validate(fields) {
        SubmitDecision::Proceed
    } else {
        ui.update(UiState::hide_loading);
        show_alert(ui, REQUIRED_FIELDS_MESSAGE, AlertKind::Error);
        SubmitDecision::Cancel
    }
}

/// Build the `on:submit` handler for a form from its required fields.
pub fn submit_guard(
    ui: RwSignal<UiState>,
    fields: Vec<FieldBinding>,
    prediction_form: bool,
) -> impl Fn(leptos::ev::SubmitEvent) + Clone {
    move |ev: leptos::ev::SubmitEvent| {
        if guard_submission(ui, &fields, prediction_form) == SubmitDecision::Cancel {
            ev.prevent_default();
        }
    }
}
