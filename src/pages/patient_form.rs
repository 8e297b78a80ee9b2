//! Patient intake form. Name, age, gender, and contact are required; the
//! remaining fields post through untouched for the backend to keep.

use leptos::prelude::*;

use crate::forms::{FieldBinding, submit_guard};
use crate::state::patients::Gender;
use crate::state::ui::UiState;

const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

#[component]
pub fn PatientFormPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let name = FieldBinding::new();
    let age = FieldBinding::new();
    let gender = FieldBinding::new();
    let contact = FieldBinding::new();
    let on_submit = submit_guard(ui, vec![name, age, gender, contact], false);

    view! {
        <h2 class="mb-4">"New Patient"</h2>
        <form
            class="patient-form"
            method="post"
            action="/patient_form"
            novalidate=true
            on:submit=on_submit
        >
            <div class="row">
                <div class="col-md-6 mb-3">
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
                <div class="col-md-2 mb-3">
                    <label class="form-label" for="age">"Age"</label>
                    <input
                        id="age"
                        name="age"
                        type="number"
                        min="0"
                        max="150"
                        class="form-control"
                        class:is-invalid=move || age.invalid.get()
                        required=true
                        prop:value=move || age.value.get()
                        on:input=move |ev| age.value.set(event_target_value(&ev))
                    />
                </div>
                <div class="col-md-4 mb-3">
                    <label class="form-label" for="gender">"Gender"</label>
                    <select
                        id="gender"
                        name="gender"
                        class="form-select"
                        class:is-invalid=move || gender.invalid.get()
                        required=true
                        prop:value=move || gender.value.get()
                        on:change=move |ev| gender.value.set(event_target_value(&ev))
                    >
                        <option value="">"Select gender"</option>
                        {Gender::ALL
                            .into_iter()
                            .map(|g| view! { <option value=g.value()>{g.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="row">
                <div class="col-md-6 mb-3">
                    <label class="form-label" for="contact">"Contact Number"</label>
                    <input
                        id="contact"
                        name="contact"
                        type="tel"
                        class="form-control"
                        class:is-invalid=move || contact.invalid.get()
                        required=true
                        prop:value=move || contact.value.get()
                        on:input=move |ev| contact.value.set(event_target_value(&ev))
                    />
                </div>
                <div class="col-md-6 mb-3">
                    <label class="form-label" for="emergency_contact">"Emergency Contact"</label>
                    <input
                        id="emergency_contact"
                        name="emergency_contact"
                        type="tel"
                        class="form-control"
                    />
                </div>
            </div>

            <div class="mb-3">
                <label class="form-label" for="address">"Address"</label>
                <textarea id="address" name="address" class="form-control" rows="2"></textarea>
            </div>

            <div class="row">
                <div class="col-md-4 mb-3">
                    <label class="form-label" for="blood_group">"Blood Group"</label>
                    <select id="blood_group" name="blood_group" class="form-select">
                        <option value="">"Unknown"</option>
                        {BLOOD_GROUPS
                            .into_iter()
                            .map(|group| view! { <option value=group>{group}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="col-md-8 mb-3">
                    <label class="form-label" for="allergies">"Allergies"</label>
                    <input id="allergies" name="allergies" type="text" class="form-control" />
                </div>
            </div>

            <div class="mb-3">
                <label class="form-label" for="medical_history">"Medical History"</label>
                <textarea
                    id="medical_history"
                    name="medical_history"
                    class="form-control"
                    rows="3"
                ></textarea>
            </div>

            <button type="submit" class="btn btn-primary">"Save Patient"</button>
        </form>
    }
}
