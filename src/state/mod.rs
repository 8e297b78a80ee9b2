//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`ui`, `patients`, `predictions`) so individual
//! components can depend on small focused models. Each state struct is
//! provided from the root component as an `RwSignal` context.

pub mod patients;
pub mod predictions;
pub mod ui;
