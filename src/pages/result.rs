//! Prediction result page: the latest analysis with its animated
//! confidence bar.

use leptos::prelude::*;

use crate::components::confidence_bar::ConfidenceBar;
use crate::state::predictions::PredictionsState;

#[component]
pub fn ResultPage() -> impl IntoView {
    let predictions = expect_context::<RwSignal<PredictionsState>>();

    view! {
        <h2 class="mb-4">"Analysis Result"</h2>
        {move || {
            predictions
                .with(|state| state.latest().cloned())
                .map(|prediction| {
                    view! {
                        <div class="card prediction-card slide-up mx-auto">
                            <div class="card-body">
                                <h5 class="card-title">{prediction.condition.clone()}</h5>
                                <h6 class="card-subtitle mb-3 text-muted">
                                    {format!(
                                        "{} · {} X-ray",
                                        prediction.patient_name,
                                        prediction.body_part.label(),
                                    )}
                                </h6>
                                <ConfidenceBar confidence=prediction.confidence.to_string() />
                                <p class="card-text mt-2">
                                    {format!("Confidence: {}%", prediction.confidence)}
                                </p>
                                <a class="btn btn-outline-primary" href="/upload_predict">
                                    "Analyze Another"
                                </a>
                            </div>
                        </div>
                    }
                        .into_any()
                })
                .unwrap_or_else(|| {
                    view! {
                        <p class="text-muted">
                            "No analyses yet. " <a href="/upload_predict">"Analyze an X-ray"</a>
                            " to see a result here."
                        </p>
                    }
                        .into_any()
                })
        }}
    }
}
