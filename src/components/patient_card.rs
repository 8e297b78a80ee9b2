//! Patient summary card for the searchable directory.
//!
//! Cards stay mounted while a search runs; matching only toggles their
//! display style. The rendered lines must stay aligned with
//! `PatientSummary::search_text`, which is what queries are matched against.

use leptos::prelude::*;

use crate::state::patients::PatientSummary;

#[component]
pub fn PatientCard(patient: PatientSummary, #[prop(into)] query: Signal<String>) -> impl IntoView {
    let matches = {
        let patient = patient.clone();
        move || query.with(|q| patient.matches_search(q))
    };

    view! {
        <div
            class="card patient-card"
            style:display=move || if matches() { "block" } else { "none" }
        >
            <div class="card-body">
                <h5 class="card-title patient-name">{patient.name.clone()}</h5>
                <h6 class="card-subtitle mb-2 text-muted">
                    {format!("Age {} · {}", patient.age, patient.gender.label())}
                </h6>
                <p class="card-text mb-1">{format!("Contact: {}", patient.contact)}</p>
                {patient
                    .blood_group
                    .clone()
                    .map(|blood_group| {
                        view! { <p class="card-text mb-1">{format!("Blood group: {blood_group}")}</p> }
                    })}
                {patient
                    .medical_history
                    .clone()
                    .map(|history| {
                        view! { <p class="card-text mb-1">{format!("History: {history}")}</p> }
                    })}
                {patient
                    .allergies
                    .clone()
                    .map(|allergies| {
                        view! { <p class="card-text mb-1">{format!("Allergies: {allergies}")}</p> }
                    })}
            </div>
        </div>
    }
}
