//! Patient directory page with the live search filter.
//!
//! Filtering is per-keystroke: the query signal feeds every card, and each
//! card toggles its own visibility. Cards are never unmounted by a search.

use leptos::prelude::*;

use crate::components::patient_card::PatientCard;
use crate::state::patients::PatientsState;

#[component]
pub fn PatientsPage() -> impl IntoView {
    let patients = expect_context::<RwSignal<PatientsState>>();
    let query = RwSignal::new(String::new());

    view! {
        <div class="d-flex justify-content-between align-items-center mb-4">
            <h2 class="mb-0">"Patients"</h2>
            <a class="btn btn-primary" href="/patient_form">"Add Patient"</a>
        </div>

        <div class="mb-4">
            <input
                id="patientSearch"
                type="search"
                class="form-control"
                placeholder="Search patients..."
                aria-label="Search patients"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>

        <div class="patient-grid">
            <For
                each=move || patients.with(|state| state.patients.clone())
                key=|patient| patient.id
                children=move |patient| {
                    view! { <PatientCard patient=patient query=query /> }
                }
            />
        </div>
    }
}
