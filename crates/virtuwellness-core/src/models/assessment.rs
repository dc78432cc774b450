use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::recommendation::RecommendationSet;
use super::score::NumericScore;
use super::sentiment::SentimentSignal;
use super::severity::SeverityTier;
use super::subject::SubjectId;

/// Secondary anxiety screen reported alongside the primary result. It never
/// feeds the sentiment adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnxietyScreen {
    #[serde(flatten)]
    pub score: NumericScore,
    pub tier: SeverityTier,
}

/// Outcome of one pipeline run.
///
/// Built in full before it is handed to storage and never edited afterwards;
/// a later assessment supersedes it by being appended to the subject's
/// history. Fields are read through accessors so a stored record cannot be
/// patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    subject_id: SubjectId,
    instrument_id: String,
    #[serde(flatten)]
    score: NumericScore,
    /// Tier from the score alone, before sentiment adjustment.
    initial_tier: SeverityTier,
    tier: SeverityTier,
    sentiment: SentimentSignal,
    recommendations: RecommendationSet,
    #[serde(default)]
    anxiety: Option<AnxietyScreen>,
    created_at: jiff::Timestamp,
}

impl AssessmentResult {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        subject_id: SubjectId,
        instrument_id: impl Into<String>,
        score: NumericScore,
        initial_tier: SeverityTier,
        tier: SeverityTier,
        sentiment: SentimentSignal,
        recommendations: RecommendationSet,
        created_at: jiff::Timestamp,
    ) -> Self {
        Self {
            subject_id,
            instrument_id: instrument_id.into(),
            score,
            initial_tier,
            tier,
            sentiment,
            recommendations,
            anxiety: None,
            created_at,
        }
    }

    /// Attach the anxiety screen while the record is being built.
    pub fn with_anxiety(mut self, screen: AnxietyScreen) -> Self {
        self.anxiety = Some(screen);
        self
    }

    pub fn subject_id(&self) -> SubjectId {
        self.subject_id
    }

    pub fn instrument_id(&self) -> &str {
        &self.instrument_id
    }

    pub fn score(&self) -> NumericScore {
        self.score
    }

    pub fn initial_tier(&self) -> SeverityTier {
        self.initial_tier
    }

    /// Final tier after sentiment adjustment.
    pub fn tier(&self) -> SeverityTier {
        self.tier
    }

    pub fn sentiment(&self) -> SentimentSignal {
        self.sentiment
    }

    pub fn recommendations(&self) -> &RecommendationSet {
        &self.recommendations
    }

    pub fn anxiety(&self) -> Option<AnxietyScreen> {
        self.anxiety
    }

    pub fn created_at(&self) -> jiff::Timestamp {
        self.created_at
    }

    pub fn was_escalated(&self) -> bool {
        self.tier > self.initial_tier
    }

    /// Equality ignoring `created_at`.
    pub fn same_outcome(&self, other: &AssessmentResult) -> bool {
        Self {
            created_at: other.created_at,
            ..self.clone()
        } == *other
    }
}
