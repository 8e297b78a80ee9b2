//! Patient directory state and search matching.
//!
//! DESIGN
//! ======
//! Patient records are read-only on this side of the wire; the directory
//! holds lightweight summaries for card rendering and filtering. Search is a
//! per-keystroke linear scan over each card's text. Cards stay mounted while
//! a search runs; only their visibility toggles.

#[cfg(test)]
#[path = "patients_test.rs"]
mod patients_test;

use serde::Deserialize;

/// Patient gender as captured by the intake form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Intake form option order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Form value, e.g. `male`.
    pub fn value(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Display label, e.g. `Male`.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// One row of the patient directory, as rendered on a patient card.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PatientSummary {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub contact: String,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub medical_history: Option<String>,
    #[serde(default)]
    pub allergies: Option<String>,
}

impl PatientSummary {
    /// The card text a search query is matched against: every line the
    /// patient card renders, labels included, lowercased and space-joined.
    /// Must stay aligned with `components::patient_card`.
    pub fn search_text(&self) -> String {
        let mut text = format!(
            "{} Age {} · {} Contact: {}",
            self.name,
            self.age,
            self.gender.label(),
            self.contact
        );
        let labeled = [
            ("Blood group:", &self.blood_group),
            ("History:", &self.medical_history),
            ("Allergies:", &self.allergies),
        ];
        for (label, value) in labeled {
            if let Some(value) = value {
                text.push(' ');
                text.push_str(label);
                text.push(' ');
                text.push_str(value);
            }
        }
        text.to_lowercase()
    }

    /// Case-insensitive substring match against the card text. The empty
    /// query matches every card.
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.search_text().contains(&query.to_lowercase())
    }
}

/// The patient directory.
#[derive(Clone, Debug, Default)]
pub struct PatientsState {
    pub patients: Vec<PatientSummary>,
}

impl PatientsState {
    /// Demo directory used when no backend is wired up.
    pub fn demo() -> Self {
        let patients = serde_json::from_str(include_str!("demo_patients.json"))
            .unwrap_or_else(|err| {
                leptos::logging::warn!("demo patient seed failed to parse: {err}");
                Vec::new()
            });
        Self { patients }
    }
}
