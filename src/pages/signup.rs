//! Account sign-up page. All five fields are required; deeper checks (email
//! shape, password strength, matching confirmation) belong to the backend.

use leptos::prelude::*;

use crate::forms::{FieldBinding, submit_guard};
use crate::i18n::translated;
use crate::state::ui::UiState;

#[component]
pub fn SignupPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let name = FieldBinding::new();
    let email = FieldBinding::new();
    let phone = FieldBinding::new();
    let password = FieldBinding::new();
    let confirm_password = FieldBinding::new();
    let on_submit = submit_guard(
        ui,
        vec![name, email, phone, password, confirm_password],
        false,
    );

    view! {
        <div class="auth-card card mx-auto">
            <div class="card-body">
                <h2 class="card-title text-center" attr:data-translate="signup-title">
                    {translated(ui, "signup-title", "Create Account")}
                </h2>
                <form method="post" action="/signup" novalidate=true on:submit=on_submit>
                    <div class="mb-3">
                        <label class="form-label" for="name">"Full Name"</label>
                        <input
                            id="name"
                            name="name"
                            type="text"
                            class="form-control"
                            class:is-invalid=move || name.invalid.get()
                            required=true
                            prop:value=move || name.value.get()
                            on:input=move |ev| name.value.set(event_target_value(&ev))
                        />
                    </div>
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
                        <label class="form-label" for="phone">"Phone"</label>
                        <input
                            id="phone"
                            name="phone"
                            type="tel"
                            class="form-control"
                            class:is-invalid=move || phone.invalid.get()
                            required=true
                            prop:value=move || phone.value.get()
                            on:input=move |ev| phone.value.set(event_target_value(&ev))
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
                    <div class="mb-3">
                        <label class="form-label" for="confirm_password">"Confirm Password"</label>
                        <input
                            id="confirm_password"
                            name="confirm_password"
                            type="password"
                            class="form-control"
                            class:is-invalid=move || confirm_password.invalid.get()
                            required=true
                            prop:value=move || confirm_password.value.get()
                            on:input=move |ev| confirm_password.value.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary w-100">"Sign Up"</button>
                </form>
                <p class="mt-3 text-center">
                    "Already have an account? " <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
