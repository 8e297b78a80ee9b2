//! Login page. The form posts natively to the backend; the submit guard only
//! blocks posts with empty required fields.

use leptos::prelude::*;

use crate::forms::{FieldBinding, submit_guard};
use crate::i18n::translated;
use crate::state::ui::UiState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let email = FieldBinding::new();
    let password = FieldBinding::new();
    let on_submit = submit_guard(ui, vec![email, password], false);

    view! {
        <div class="auth-card card mx-auto">
            <div class="card-body">
                <h2 class="card-title text-center" attr:data-translate="login-title">
                    {translated(ui, "login-title", "Welcome Back")}
                </h2>
                <form method="post" action="/login" novalidate=true on:submit=on_submit>
                    <div class="mb-3">
                        <label class="form-label" for="email">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            class="form-control"
                            class:is-invalid=move || email.invalid.get()
                            required=true
                            prop:value=move || email.value.get()
                            on:input=move |ev| email.value.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="mb-3">
                        <label class="form-label" for="password">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            class="form-control"
                            class:is-invalid=move || password.invalid.get()
                            required=true
                            prop:value=move || password.value.get()
                            on:input=move |ev| password.value.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary w-100">"Login"</button>
                </form>
                <p class="mt-3 text-center">
                    "Don't have an account? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
