use super::*;

fn sample() -> PatientSummary {
    PatientSummary {
        id: 7,
        name: "Rajesh Kumar".to_owned(),
        age: 45,
        gender: Gender::Male,
        contact: "+91-98765-12345".to_owned(),
        blood_group: Some("O+".to_owned()),
        medical_history: Some("Hypertension, previous chest infection in 2020".to_owned()),
        allergies: Some("Penicillin".to_owned()),
    }
}

#[test]
fn search_matches_are_case_insensitive() {
    let patient = sample();
    assert!(patient.matches_search("rajesh"));
    assert!(patient.matches_search("RAJESH"));
    assert!(patient.matches_search("Kumar"));
}

#[test]
fn search_spans_every_rendered_field() {
    let patient = sample();
    assert!(patient.matches_search("98765"));
    assert!(patient.matches_search("o+"));
    assert!(patient.matches_search("hypertension"));
    assert!(patient.matches_search("penicillin"));
    assert!(patient.matches_search("45"));
}

#[test]
fn search_also_matches_rendered_labels() {
    // Matching runs over the card text, which includes the field labels.
    let patient = sample();
    assert!(patient.matches_search("blood group"));
    assert!(patient.matches_search("allergies"));

    let mut bare = sample();
    bare.blood_group = None;
    bare.medical_history = None;
    bare.allergies = None;
    assert!(!bare.matches_search("blood group"));
}

#[test]
fn empty_query_matches_everything() {
    assert!(sample().matches_search(""));
}

#[test]
fn unmatched_query_hides_the_card() {
    let patient = sample();
    assert!(!patient.matches_search("zzz"));
    assert!(!patient.matches_search("priya"));
}

#[test]
fn demo_directory_parses_and_seeds_three_patients() {
    let state = PatientsState::demo();
    assert_eq!(state.patients.len(), 3);
    let names: Vec<&str> = state.patients.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Rajesh Kumar", "Priya Sharma", "Arjun Patel"]);
    assert_eq!(state.patients[1].gender, Gender::Female);
    assert_eq!(state.patients[2].blood_group.as_deref(), Some("B-"));
}

#[test]
fn gender_values_match_form_options() {
    for gender in Gender::ALL {
        assert_eq!(gender.value(), gender.label().to_lowercase());
    }
}
