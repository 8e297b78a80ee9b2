//! Landing page: hero banner and feature highlights.
//!
//! The hero and feature headings carry `data-translate` keys; their text is
//! resolved through the translation table so a language change re-renders
//! them in place.

use leptos::prelude::*;

use crate::i18n::translated;
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section class="hero text-center">
            <h1 class="hero-title display-4" attr:data-translate="hero-title">
                {translated(ui, "hero-title", "AI for Smarter Disease Detection")}
            </h1>
            <p class="hero-subtitle lead" attr:data-translate="hero-subtitle">
                {translated(
                    ui,
                    "hero-subtitle",
                    "Advanced X-ray analysis powered by artificial intelligence to help healthcare professionals make faster, more accurate diagnoses.",
                )}
            </p>
            <div class="hero-actions mt-4">
                <a class="btn btn-primary btn-lg me-2" href="/signup">"Get Started"</a>
                <a class="btn btn-outline-primary btn-lg" href="/login">"Login"</a>
            </div>
        </section>

        <section class="features mt-5">
            <h2 class="text-center mb-4" attr:data-translate="features-title">
                {translated(ui, "features-title", "Why Choose MediScan AI?")}
            </h2>
            <div class="row">
                <div class="col-md-4">
                    <div class="card feature-card h-100">
                        <div class="card-body">
                            <h5 class="card-title">"Fast X-ray Analysis"</h5>
                            <p class="card-text">
                                "Upload an X-ray and get an AI-assisted reading in seconds, with a confidence score for every finding."
                            </p>
                        </div>
                    </div>
                </div>
                <div class="col-md-4">
                    <div class="card feature-card h-100">
                        <div class="card-body">
                            <h5 class="card-title">"Patient Records"</h5>
                            <p class="card-text">
                                "Keep patient history, allergies, and blood group in one searchable place."
                            </p>
                        </div>
                    </div>
                </div>
                <div class="col-md-4">
                    <div class="card feature-card h-100">
                        <div class="card-body">
                            <h5 class="card-title">"Five Languages"</h5>
                            <p class="card-text">
                                "Use the interface in English, Hindi, Tamil, Telugu, or Bengali."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
