use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Positive => "positive",
        };
        f.write_str(s)
    }
}

/// Which estimator produced a [`SentimentSignal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SentimentSource {
    /// No free text was supplied.
    Default,
    Lexicon,
    Model,
}

/// Coarse polarity of the free text that accompanied an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SentimentSignal {
    pub label: SentimentLabel,
    /// Always within `[0, 1]`.
    pub confidence: f64,
    pub source: SentimentSource,
}

impl SentimentSignal {
    /// Signal used when there is no text to analyse.
    pub const NEUTRAL_DEFAULT: SentimentSignal = SentimentSignal {
        label: SentimentLabel::Neutral,
        confidence: 0.5,
        source: SentimentSource::Default,
    };

    pub fn new(label: SentimentLabel, confidence: f64, source: SentimentSource) -> Self {
        let confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            label,
            confidence,
            source,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.label == SentimentLabel::Negative
    }
}
