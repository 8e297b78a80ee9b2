use super::*;

#[test]
fn latest_is_the_first_recent_entry() {
    let state = PredictionsState::demo();
    let latest = state.latest().unwrap();
    assert_eq!(latest.patient_name, "Arjun Patel");
    assert_eq!(latest.body_part, BodyPart::Leg);
}

#[test]
fn demo_history_matches_the_patient_directory_seed() {
    let state = PredictionsState::demo();
    let entries: Vec<(&str, BodyPart, &str)> = state
        .recent
        .iter()
        .map(|p| (p.patient_name.as_str(), p.body_part, p.condition.as_str()))
        .collect();
    assert_eq!(
        entries,
        [
            ("Arjun Patel", BodyPart::Leg, "Fracture"),
            ("Priya Sharma", BodyPart::Hand, "Normal"),
            ("Rajesh Kumar", BodyPart::Chest, "Pneumonia"),
        ]
    );
    let confidences: Vec<f64> = state.recent.iter().map(|p| p.confidence).collect();
    assert_eq!(confidences, [91.0, 94.0, 87.0]);
}

#[test]
fn latest_is_none_for_an_empty_history() {
    assert!(PredictionsState::default().latest().is_none());
}

#[test]
fn demo_confidences_are_percentages() {
    for prediction in PredictionsState::demo().recent {
        assert!((0.0..=100.0).contains(&prediction.confidence));
    }
}

#[test]
fn body_part_values_match_form_options() {
    for part in BodyPart::ALL {
        assert_eq!(part.value(), part.label().to_lowercase());
    }
}
