//! Animated confidence indicator for prediction results.
//!
//! The indicator's target percentage travels on its `data-confidence`
//! attribute. After a fixed delay the bar's width animates from zero to the
//! target over an eased transition; until then the transition is disabled so
//! the bar starts flat at zero.

#[cfg(test)]
#[path = "confidence_bar_test.rs"]
mod confidence_bar_test;

use leptos::prelude::*;

/// Delay before the width animation starts.
pub const ANIMATION_DELAY_MS: u64 = 500;

/// Parse a `data-confidence` attribute value into a percentage.
///
/// Unparsable or non-finite input is 0; everything is clamped to `0..=100`.
pub fn parse_confidence(raw: &str) -> f64 {
    let value = raw.trim().parse::<f64>().unwrap_or(0.0);
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[component]
pub fn ConfidenceBar(#[prop(into)] confidence: String) -> impl IntoView {
    let target = parse_confidence(&confidence);
    let width = RwSignal::new(0.0_f64);
    let eased = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(ANIMATION_DELAY_MS)).await;
        eased.set(true);
        width.set(target);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = target;

    view! {
        <div class="confidence-bar">
            <div
                class="confidence-indicator"
                attr:data-confidence=confidence
                style:width=move || format!("{}%", width.get())
                style:transition=move || {
                    if eased.get() { "width 2s ease-in-out" } else { "none" }
                }
            ></div>
        </div>
    }
}
