//! X-ray analysis form: patient, body part, and the upload zone.
//!
//! The form carries the `prediction-form` class, so its submit guard opens
//! the full-page loading overlay before validating. On a valid post the
//! overlay stays up while the browser navigates away with the upload.

use leptos::prelude::*;

use crate::components::upload_area::UploadArea;
use crate::forms::{FieldBinding, submit_guard};
use crate::state::patients::PatientsState;
use crate::state::predictions::BodyPart;
use crate::state::ui::UiState;

#[component]
pub fn PredictPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let patients = expect_context::<RwSignal<PatientsState>>();
    let patient_id = FieldBinding::new();
    let body_part = FieldBinding::new();
    let on_submit = submit_guard(ui, vec![patient_id, body_part], true);

    view! {
        <h2 class="mb-4">"Analyze X-ray"</h2>
        <form
            class="prediction-form"
            method="post"
            action="/upload_predict"
            enctype="multipart/form-data"
            novalidate=true
            on:submit=on_submit
        >
            <div class="row">
                <div class="col-md-6 mb-3">
                    <label class="form-label" for="patient_id">"Patient"</label>
                    <select
                        id="patient_id"
                        name="patient_id"
                        class="form-select"
                        class:is-invalid=move || patient_id.invalid.get()
                        required=true
                        prop:value=move || patient_id.value.get()
                        on:change=move |ev| patient_id.value.set(event_target_value(&ev))
                    >
                        <option value="">"Select patient"</option>
                        {move || {
                            patients
                                .with(|state| state.patients.clone())
                                .into_iter()
                                .map(|patient| {
                                    view! {
                                        <option value=patient.id.to_string()>{patient.name}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
                <div class="col-md-6 mb-3">
                    <label class="form-label" for="body_part">"Body Part"</label>
                    <select
                        id="body_part"
                        name="body_part"
                        class="form-select"
                        class:is-invalid=move || body_part.invalid.get()
                        required=true
                        prop:value=move || body_part.value.get()
                        on:change=move |ev| body_part.value.set(event_target_value(&ev))
                    >
                        <option value="">"Select body part"</option>
                        {BodyPart::ALL
                            .into_iter()
                            .map(|part| view! { <option value=part.value()>{part.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="mb-3">
                <label class="form-label">"X-ray Image"</label>
                <UploadArea />
            </div>

            <button type="submit" class="btn btn-primary">"Analyze"</button>
        </form>
    }
}
