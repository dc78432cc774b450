use virtuwellness_core::error::ValidationError;
use virtuwellness_core::models::assessment::{AnxietyScreen, AssessmentResult};
use virtuwellness_core::models::recommendation::{
    RecommendationSection, RecommendationSet, SectionKind,
};
use virtuwellness_core::models::score::NumericScore;
use virtuwellness_core::models::sentiment::{SentimentLabel, SentimentSignal, SentimentSource};
use virtuwellness_core::models::severity::SeverityTier;
use virtuwellness_core::models::subject::SubjectId;

#[test]
fn normalization_rounds_to_one_decimal() {
    let score = NumericScore::new(20, 27).normalized_to(10.0);
    assert_eq!(score.raw, 20);
    assert_eq!(score.normalized, Some(7.4));

    let full = NumericScore::new(27, 27).normalized_to(10.0);
    assert_eq!(full.normalized, Some(10.0));
}

#[test]
fn sentiment_confidence_is_clamped() {
    let s = SentimentSignal::new(SentimentLabel::Negative, 1.7, SentimentSource::Model);
    assert_eq!(s.confidence, 1.0);
    let s = SentimentSignal::new(SentimentLabel::Positive, f64::NAN, SentimentSource::Model);
    assert_eq!(s.confidence, 0.0);
}

#[test]
fn neutral_default_has_half_confidence() {
    assert_eq!(SentimentSignal::NEUTRAL_DEFAULT.label, SentimentLabel::Neutral);
    assert_eq!(SentimentSignal::NEUTRAL_DEFAULT.confidence, 0.5);
}

#[test]
fn same_outcome_ignores_timestamp() {
    let subject = SubjectId::new();
    let recs = RecommendationSet(vec![RecommendationSection {
        section_title: "General wellbeing".to_string(),
        kind: SectionKind::Universal,
        items: vec!["Keep a regular sleep schedule".to_string()],
    }]);
    let build = |at: jiff::Timestamp| {
        AssessmentResult::new(
            subject,
            "phq9",
            NumericScore::new(3, 27),
            SeverityTier::Minimal,
            SeverityTier::Minimal,
            SentimentSignal::NEUTRAL_DEFAULT,
            recs.clone(),
            at,
        )
    };

    let a = build(jiff::Timestamp::UNIX_EPOCH);
    let b = build(jiff::Timestamp::from_second(60).unwrap());
    assert_ne!(a, b);
    assert!(a.same_outcome(&b));
    assert!(!a.was_escalated());
}

#[test]
fn result_json_uses_output_contract_field_names() {
    let result = AssessmentResult::new(
        SubjectId::new(),
        "phq9",
        NumericScore::new(12, 27),
        SeverityTier::Moderate,
        SeverityTier::ModeratelySevere,
        SentimentSignal::new(SentimentLabel::Negative, 0.9, SentimentSource::Lexicon),
        RecommendationSet(vec![RecommendationSection {
            section_title: "Crisis support".to_string(),
            kind: SectionKind::Crisis,
            items: vec!["Call or text 988".to_string()],
        }]),
        jiff::Timestamp::UNIX_EPOCH,
    );

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["tier"], "moderately_severe");
    assert_eq!(json["sentiment"]["label"], "negative");
    assert_eq!(json["recommendations"][0]["section_title"], "Crisis support");
    assert_eq!(json["score"], 12);
    assert_eq!(json["score_max"], 27);
    assert!(json["normalized_score"].is_null());
    assert!(json["anxiety"].is_null());

    let back: AssessmentResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn anxiety_screen_flattens_its_score() {
    let result = AssessmentResult::new(
        SubjectId::new(),
        "phq9",
        NumericScore::new(3, 27).normalized_to(10.0),
        SeverityTier::Minimal,
        SeverityTier::Minimal,
        SentimentSignal::NEUTRAL_DEFAULT,
        RecommendationSet::default(),
        jiff::Timestamp::UNIX_EPOCH,
    )
    .with_anxiety(AnxietyScreen {
        score: NumericScore::new(12, 21),
        tier: SeverityTier::Moderate,
    });

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["score"], 3);
    assert_eq!(json["normalized_score"], 1.1);
    assert_eq!(json["anxiety"]["score"], 12);
    assert_eq!(json["anxiety"]["score_max"], 21);
    assert_eq!(json["anxiety"]["tier"], "moderate");

    let back: AssessmentResult = serde_json::from_value(json).unwrap();
    assert_eq!(back.anxiety().map(|a| a.tier), Some(SeverityTier::Moderate));
    assert_eq!(back, result);
}

#[test]
fn incomplete_error_lists_positions() {
    let err = ValidationError::Incomplete {
        missing: vec![3, 7],
    };
    assert_eq!(
        err.to_string(),
        "questionnaire is incomplete; unanswered items: 3, 7"
    );
}
