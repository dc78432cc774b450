use virtuwellness_core::models::sentiment::SentimentSignal;
use virtuwellness_core::models::severity::SeverityTier;

/// Escalate one tier on Negative sentiment, clamped at the most severe tier.
/// Neutral and Positive leave the tier unchanged; there is no de-escalation.
pub fn adjust(tier: SeverityTier, sentiment: &SentimentSignal) -> SeverityTier {
    if sentiment.is_negative() {
        tier.escalate()
    } else {
        tier
    }
}
