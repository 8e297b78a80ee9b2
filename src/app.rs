//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{alert_stack::AlertStack, loading_overlay::LoadingOverlay, navbar::Navbar};
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, patient_form::PatientFormPage,
    patients::PatientsPage, predict::PredictPage, result::ResultPage, signup::SignupPage,
};
use crate::state::{patients::PatientsState, predictions::PredictionsState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, restores the persisted language
/// preference once on the client, and sets up routing with the app chrome
/// (navbar, alert stack, loading overlay) around the routed outlet.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let patients = RwSignal::new(PatientsState::demo());
    let predictions = RwSignal::new(PredictionsState::demo());

    provide_context(ui);
    provide_context(patients);
    provide_context(predictions);

    // Effects only run on the client, so the server-rendered baseline and the
    // hydrated DOM agree; the stored language applies right after hydration.
    Effect::new(move || {
        let stored = crate::i18n::load_preference();
        if ui.with_untracked(|state| state.language) != stored {
            ui.update(|state| state.language = stored);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/mediscan-ui.css"/>
        <Title text="MediScan AI"/>

        <Router>
            <Navbar/>
            <main class="container py-4">
                <AlertStack/>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("patients") view=PatientsPage/>
                    <Route path=StaticSegment("patient_form") view=PatientFormPage/>
                    <Route path=StaticSegment("upload_predict") view=PredictPage/>
                    <Route path=StaticSegment("prediction") view=ResultPage/>
                </Routes>
            </main>
            <LoadingOverlay/>
        </Router>
    }
}
