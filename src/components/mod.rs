//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod alert_stack;
pub mod confidence_bar;
pub mod loading_overlay;
pub mod navbar;
pub mod patient_card;
pub mod upload_area;
