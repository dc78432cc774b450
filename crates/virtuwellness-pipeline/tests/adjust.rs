use virtuwellness_core::models::sentiment::{SentimentLabel, SentimentSignal, SentimentSource};
use virtuwellness_core::models::severity::SeverityTier;
use virtuwellness_pipeline::adjust::adjust;

fn signal(label: SentimentLabel) -> SentimentSignal {
    SentimentSignal::new(label, 0.8, SentimentSource::Lexicon)
}

#[test]
fn negative_escalates_one_step() {
    assert_eq!(
        adjust(SeverityTier::Mild, &signal(SentimentLabel::Negative)),
        SeverityTier::Moderate
    );
}

#[test]
fn negative_clamps_at_severe() {
    assert_eq!(
        adjust(SeverityTier::Severe, &signal(SentimentLabel::Negative)),
        SeverityTier::Severe
    );
}

#[test]
fn neutral_and_positive_leave_tier_alone() {
    for tier in SeverityTier::ALL {
        assert_eq!(adjust(tier, &signal(SentimentLabel::Neutral)), tier);
        assert_eq!(adjust(tier, &signal(SentimentLabel::Positive)), tier);
        assert_eq!(adjust(tier, &SentimentSignal::NEUTRAL_DEFAULT), tier);
    }
}

#[test]
fn never_less_severe_and_at_most_one_step() {
    for tier in SeverityTier::ALL {
        for label in [
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
            SentimentLabel::Positive,
        ] {
            let out = adjust(tier, &signal(label));
            assert!(out >= tier);
            assert!(out.index() - tier.index() <= 1);
        }
    }
}
