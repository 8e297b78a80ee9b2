//! Top navigation bar with the language switcher menu.

use leptos::prelude::*;

use crate::i18n::{self, Language};
use crate::state::ui::UiState;

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = RwSignal::new(false);
    let current = move || ui.with(|state| state.language);

    view! {
        <nav class="navbar navbar-expand-lg navbar-dark">
            <div class="container">
                <a class="navbar-brand" href="/">"MediScan AI"</a>
                <ul class="navbar-nav">
                    <li class="nav-item">
                        <a class="nav-link" href="/">"Home"</a>
                    </li>
                    <li class="nav-item">
                        <a class="nav-link" href="/dashboard">"Dashboard"</a>
                    </li>
                    <li class="nav-item">
                        <a class="nav-link" href="/patients">"Patients"</a>
                    </li>
                    <li class="nav-item">
                        <a class="nav-link" href="/patient_form">"New Patient"</a>
                    </li>
                    <li class="nav-item">
                        <a class="nav-link" href="/upload_predict">"Analyze"</a>
                    </li>
                    <li class="nav-item">
                        <a class="nav-link" href="/login">"Login"</a>
                    </li>
                </ul>
                <div class="nav-item dropdown" class:show=move || menu_open.get()>
                    <button
                        class="btn btn-outline-light dropdown-toggle"
                        type="button"
                        aria-label="Select language"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        <span id="currentLanguage">{move || current().display_name()}</span>
                    </button>
                    <ul class="dropdown-menu dropdown-menu-end" class:show=move || menu_open.get()>
                        {Language::ALL
                            .into_iter()
                            .map(|language| {
                                view! {
                                    <li>
                                        <button
                                            class="dropdown-item"
                                            class:active=move || current() == language
                                            on:click=move |_| {
                                                i18n::change_language(ui, language.code());
                                                menu_open.set(false);
                                            }
                                        >
                                            {language.display_name()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </nav>
    }
}
