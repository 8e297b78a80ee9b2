//! Dismissible alert banners, rendered as the first child of the main
//! content container.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn AlertStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="alert-stack">
            <For
                each=move || ui.with(|state| state.alerts.clone())
                key=|alert| alert.id
                children=move |alert| {
                    let id = alert.id;
                    let class = format!("alert {} alert-dismissible fade show", alert.kind.css_class());
                    view! {
                        <div class=class role="alert">
                            {alert.message}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| {
                                    ui.update(|state| {
                                        state.dismiss_alert(id);
                                    });
                                }
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
