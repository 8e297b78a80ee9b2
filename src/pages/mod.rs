//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod patient_form;
pub mod patients;
pub mod predict;
pub mod result;
pub mod signup;
