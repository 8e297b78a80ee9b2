//! Dashboard page: directory counts, quick actions, recent analyses.

use leptos::prelude::*;

use crate::state::patients::PatientsState;
use crate::state::predictions::PredictionsState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let patients = expect_context::<RwSignal<PatientsState>>();
    let predictions = expect_context::<RwSignal<PredictionsState>>();

    view! {
        <h2 class="mb-4">"Dashboard"</h2>

        <div class="row mb-4">
            <div class="col-md-4">
                <div class="card stat-card">
                    <div class="card-body text-center">
                        <p class="stat-card__value display-6">
                            {move || patients.with(|state| state.patients.len())}
                        </p>
                        <p class="stat-card__label text-muted mb-0">"Patients"</p>
                    </div>
                </div>
            </div>
            <div class="col-md-4">
                <div class="card stat-card">
                    <div class="card-body text-center">
                        <p class="stat-card__value display-6">
                            {move || predictions.with(|state| state.recent.len())}
                        </p>
                        <p class="stat-card__label text-muted mb-0">"Analyses"</p>
                    </div>
                </div>
            </div>
            <div class="col-md-4">
                <div class="card stat-card">
                    <div class="card-body">
                        <a class="btn btn-primary w-100 mb-2" href="/upload_predict">
                            "Analyze X-ray"
                        </a>
                        <a class="btn btn-outline-primary w-100" href="/patient_form">
                            "Add Patient"
                        </a>
                    </div>
                </div>
            </div>
        </div>

        <h4 class="mb-3">"Recent Analyses"</h4>
        <Show
            when=move || predictions.with(|state| !state.recent.is_empty())
            fallback=|| view! { <p class="text-muted">"No analyses yet."</p> }
        >
            <ul class="list-group recent-analyses">
                {move || {
                    predictions
                        .with(|state| state.recent.clone())
                        .into_iter()
                        .map(|prediction| {
                            view! {
                                <li class="list-group-item d-flex justify-content-between">
                                    <span>
                                        {format!(
                                            "{} · {}: {}",
                                            prediction.patient_name,
                                            prediction.body_part.label(),
                                            prediction.condition,
                                        )}
                                    </span>
                                    <span class="badge bg-primary">
                                        {format!("{}%", prediction.confidence)}
                                    </span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </Show>
        <p class="mt-3">
            <a href="/prediction">"View latest result"</a>
        </p>
    }
}
