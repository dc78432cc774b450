use tracing::{debug, warn};
use virtuwellness_core::models::sentiment::{SentimentLabel, SentimentSignal, SentimentSource};

use crate::lexicon::{self, LexiconCounts};
use crate::model::ModelAvailability;

const MAX_LEXICAL_CONFIDENCE: f64 = 0.9;
const TIE_CONFIDENCE: f64 = 0.7;

/// Derives a [`SentimentSignal`] from free text.
///
/// Holds only the model handle resolved at startup, so one estimator can be
/// shared by any number of concurrent assessments.
#[derive(Debug, Clone, Default)]
pub struct SentimentEstimator {
    model: ModelAvailability,
}

impl SentimentEstimator {
    /// Estimator that only ever uses the lexicon.
    pub fn lexical() -> Self {
        Self::default()
    }

    pub fn new(model: ModelAvailability) -> Self {
        Self { model }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_available()
    }

    /// Never fails. Empty text yields the neutral default; model errors fall
    /// back to the lexicon.
    pub fn estimate(&self, text: &str) -> SentimentSignal {
        if text.trim().is_empty() {
            return SentimentSignal::NEUTRAL_DEFAULT;
        }

        if let Some(model) = self.model.model() {
            match model.infer(text) {
                Ok(verdict) if verdict.confidence.is_finite() => {
                    debug!(model = model.name(), label = %verdict.label, "model sentiment");
                    return SentimentSignal::new(
                        verdict.label,
                        verdict.confidence,
                        SentimentSource::Model,
                    );
                }
                Ok(verdict) => {
                    warn!(
                        model = model.name(),
                        confidence = verdict.confidence,
                        "model returned non-finite confidence, falling back to lexicon"
                    );
                }
                Err(e) => {
                    warn!(model = model.name(), error = %e, "model inference failed, falling back to lexicon");
                }
            }
        }

        lexical_estimate(text)
    }
}

/// Lexicon-only estimate. Always available.
pub fn lexical_estimate(text: &str) -> SentimentSignal {
    let counts = lexicon::count(text);
    let signal = from_counts(counts);
    debug!(
        tokens = counts.total_tokens,
        negative = counts.negative,
        positive = counts.positive,
        label = %signal.label,
        "lexical sentiment"
    );
    signal
}

fn from_counts(counts: LexiconCounts) -> SentimentSignal {
    if counts.total_tokens == 0 {
        return SentimentSignal::NEUTRAL_DEFAULT;
    }

    let margin = |winner: usize, loser: usize| {
        let share = (winner - loser) as f64 / counts.total_tokens as f64;
        (0.5 + share).min(MAX_LEXICAL_CONFIDENCE)
    };

    let (label, confidence) = if counts.negative > counts.positive {
        (
            SentimentLabel::Negative,
            margin(counts.negative, counts.positive),
        )
    } else if counts.positive > counts.negative {
        (
            SentimentLabel::Positive,
            margin(counts.positive, counts.negative),
        )
    } else {
        (SentimentLabel::Neutral, TIE_CONFIDENCE)
    };

    SentimentSignal::new(label, confidence, SentimentSource::Lexicon)
}
