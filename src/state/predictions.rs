//! Prediction results as shown on the dashboard and result page.

#[cfg(test)]
#[path = "predictions_test.rs"]
mod predictions_test;

/// Body part selectable on the analysis form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyPart {
    Chest,
    Hand,
    Leg,
    Skull,
    Spine,
    Pelvis,
}

impl BodyPart {
    /// Analysis form option order.
    pub const ALL: [BodyPart; 6] = [
        BodyPart::Chest,
        BodyPart::Hand,
        BodyPart::Leg,
        BodyPart::Skull,
        BodyPart::Spine,
        BodyPart::Pelvis,
    ];

    /// Form value, e.g. `chest`.
    pub fn value(self) -> &'static str {
        match self {
            BodyPart::Chest => "chest",
            BodyPart::Hand => "hand",
            BodyPart::Leg => "leg",
            BodyPart::Skull => "skull",
            BodyPart::Spine => "spine",
            BodyPart::Pelvis => "pelvis",
        }
    }

    /// Display label, e.g. `Chest`.
    pub fn label(self) -> &'static str {
        match self {
            BodyPart::Chest => "Chest",
            BodyPart::Hand => "Hand",
            BodyPart::Leg => "Leg",
            BodyPart::Skull => "Skull",
            BodyPart::Spine => "Spine",
            BodyPart::Pelvis => "Pelvis",
        }
    }
}

/// One analysis result, newest first in [`PredictionsState::recent`].
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionView {
    pub patient_name: String,
    pub body_part: BodyPart,
    pub condition: String,
    /// Model confidence as a percentage in `0..=100`.
    pub confidence: f64,
}

/// Recent analysis results.
#[derive(Clone, Debug, Default)]
pub struct PredictionsState {
    pub recent: Vec<PredictionView>,
}

impl PredictionsState {
    /// The most recent result, shown on the result page.
    pub fn latest(&self) -> Option<&PredictionView> {
        self.recent.first()
    }

    /// Demo results used when no backend is wired up, one per demo patient,
    /// newest first.
    pub fn demo() -> Self {
        Self {
            recent: vec![
                PredictionView {
                    patient_name: "Arjun Patel".to_owned(),
                    body_part: BodyPart::Leg,
                    condition: "Fracture".to_owned(),
                    confidence: 91.0,
                },
                PredictionView {
                    patient_name: "Priya Sharma".to_owned(),
                    body_part: BodyPart::Hand,
                    condition: "Normal".to_owned(),
                    confidence: 94.0,
                },
                PredictionView {
                    patient_name: "Rajesh Kumar".to_owned(),
                    body_part: BodyPart::Chest,
                    condition: "Pneumonia".to_owned(),
                    confidence: 87.0,
                },
            ],
        }
    }
}
