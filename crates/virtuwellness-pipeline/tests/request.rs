use virtuwellness_core::error::ValidationError;
use virtuwellness_pipeline::{AssessmentRequest, Role};

#[test]
fn parses_input_contract() {
    let request: AssessmentRequest = serde_json::from_str(
        r#"{
            "responses": [0, 1, 2, 3, 0, 1, 2, 3, 0],
            "free_text": "tired",
            "role": "working_professional",
            "age": 34
        }"#,
    )
    .unwrap();
    assert_eq!(request.responses.len(), 9);
    assert_eq!(request.role, Role::WorkingProfessional);
    assert_eq!(request.age, Some(34));
    assert_eq!(request.sleep_hours, None);
    assert_eq!(request.anxiety_responses, None);
}

#[test]
fn parses_anxiety_answers() {
    let request: AssessmentRequest = serde_json::from_str(
        r#"{"responses": [0,0,0,0,0,0,0,0,0], "anxiety_responses": [1,2,3,0,1,2,3]}"#,
    )
    .unwrap();
    assert_eq!(request.anxiety_responses, Some(vec![1, 2, 3, 0, 1, 2, 3]));
}

#[test]
fn optional_fields_default() {
    let request: AssessmentRequest = serde_json::from_str(r#"{"responses": [0,0,0,0,0,0,0,0,0]}"#).unwrap();
    assert_eq!(request.free_text, "");
    assert_eq!(request.role, Role::Unspecified);
    assert_eq!(request.age, None);
}

#[test]
fn unknown_role_is_unspecified() {
    let request: AssessmentRequest =
        serde_json::from_str(r#"{"responses": [], "role": "astronaut"}"#).unwrap();
    assert_eq!(request.role, Role::Unspecified);
    assert_eq!("Working Professional".parse::<Role>().unwrap(), Role::WorkingProfessional);
    assert_eq!("retired".parse::<Role>().unwrap(), Role::Unspecified);
}

#[test]
fn json_role_accepts_display_forms() {
    for (raw, expected) in [
        ("Student", Role::Student),
        ("Working Professional", Role::WorkingProfessional),
        ("working-professional", Role::WorkingProfessional),
        (" HOMEMAKER ", Role::Homemaker),
    ] {
        let body = format!(r#"{{"responses": [], "role": "{raw}"}}"#);
        let request: AssessmentRequest = serde_json::from_str(&body).unwrap();
        assert_eq!(request.role, expected, "role {raw:?}");
    }
}

#[test]
fn role_serializes_snake_case() {
    let json = serde_json::to_value(Role::WorkingProfessional).unwrap();
    assert_eq!(json, "working_professional");
    let back: Role = serde_json::from_value(json).unwrap();
    assert_eq!(back, Role::WorkingProfessional);
}

#[test]
fn validates_age_range() {
    assert!(AssessmentRequest::new([0; 9]).with_age(18).validate_attributes().is_ok());
    assert!(AssessmentRequest::new([0; 9]).with_age(100).validate_attributes().is_ok());
    assert_eq!(
        AssessmentRequest::new([0; 9]).with_age(101).validate_attributes(),
        Err(ValidationError::AgeOutOfRange {
            age: 101,
            min: 18,
            max: 100
        })
    );
}

#[test]
fn validates_lifestyle_ranges() {
    assert_eq!(
        AssessmentRequest::new([0; 9])
            .with_lifestyle(25.0, 30)
            .validate_attributes(),
        Err(ValidationError::SleepHoursOutOfRange(25.0))
    );
    assert_eq!(
        AssessmentRequest::new([0; 9])
            .with_lifestyle(7.0, 2000)
            .validate_attributes(),
        Err(ValidationError::ExerciseMinutesOutOfRange(2000))
    );
    assert!(
        AssessmentRequest::new([0; 9])
            .with_lifestyle(f64::NAN, 0)
            .validate_attributes()
            .is_err()
    );
}
