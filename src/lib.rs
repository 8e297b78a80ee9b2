//! # mediscan-ui
//!
//! Leptos + WASM frontend for the MediScan AI X-ray analysis application.
//! Replaces the server-templated pages and their script glue with a
//! Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the embedded
//! translation table, and the shared form validation guard. Forms post
//! natively to the backend; this crate constructs no requests and parses no
//! responses.

pub mod app;
pub mod components;
pub mod forms;
pub mod i18n;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
