//! Full-page loading overlay for in-flight prediction submissions.
//!
//! Renders one overlay node per open layer of `UiState::overlay_depth`: a
//! double show stacks two nodes and a single hide peels off exactly one.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        {move || {
            (0..ui.with(|state| state.overlay_depth))
                .map(|_| {
                    view! {
                        <div class="loading-overlay">
                            <div class="loading-spinner"></div>
                        </div>
                    }
                })
                .collect_view()
        }}
    }
}
