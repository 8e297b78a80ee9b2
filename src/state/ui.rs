//! Shared UI chrome state (language, alerts, loading overlay).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`patients`,
//! `predictions`) so chrome behavior can evolve independently of records.
//!
//! The loading overlay is a depth counter rather than a flag: every show
//! increments, every hide decrements (saturating at zero), and the overlay is
//! visible whenever the depth is positive. Overlapping submissions therefore
//! keep the overlay up until the last hide.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;
use uuid::Uuid;

use crate::i18n::Language;

/// Seconds an alert stays on screen before auto-dismissing.
pub const ALERT_DISMISS_SECS: u64 = 5;

/// Visual style of a dismissible alert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    #[default]
    Info,
    Error,
}

impl AlertKind {
    /// CSS class suffix for the alert banner.
    pub fn css_class(self) -> &'static str {
        match self {
            AlertKind::Info => "alert-info",
            AlertKind::Error => "alert-danger",
        }
    }
}

/// A dismissible alert banner shown at the top of the main content area.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: Uuid,
    pub message: String,
    pub kind: AlertKind,
}

/// UI state for the language selection, alert stack, and loading overlay.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub language: Language,
    pub alerts: Vec<Alert>,
    pub overlay_depth: u32,
}

impl UiState {
    /// Append an alert and return its id.
    pub fn push_alert(&mut self, message: impl Into<String>, kind: AlertKind) -> Uuid {
        let id = Uuid::new_v4();
        self.alerts.push(Alert {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove an alert by id. Returns `false` if it was already gone, so an
    /// expired timer and a manual dismiss never remove two alerts.
    pub fn dismiss_alert(&mut self, id: Uuid) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.id != id);
        self.alerts.len() != before
    }

    /// Open one more layer of the loading overlay.
    pub fn show_loading(&mut self) {
        self.overlay_depth += 1;
    }

    /// Close one layer of the loading overlay. Saturates at zero.
    pub fn hide_loading(&mut self) {
        self.overlay_depth = self.overlay_depth.saturating_sub(1);
    }

    /// Whether any overlay layer is open.
    pub fn loading_visible(&self) -> bool {
        self.overlay_depth > 0
    }
}

/// Show an alert that auto-dismisses after [`ALERT_DISMISS_SECS`].
///
/// The timer holds only the alert id; if the user dismisses the alert first,
/// the expired timer finds nothing to remove.
pub fn show_alert(ui: RwSignal<UiState>, message: impl Into<String>, kind: AlertKind) {
    let id = ui.try_update(|state| state.push_alert(message, kind));
    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = id {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(ALERT_DISMISS_SECS))
                    .await;
                ui.update(|state| {
                    state.dismiss_alert(id);
                });
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
