use std::sync::Arc;

use tracing::{debug, info};
use virtuwellness_core::error::ValidationError;
use virtuwellness_core::models::assessment::{AnxietyScreen, AssessmentResult};
use virtuwellness_core::models::subject::SubjectId;
use virtuwellness_instruments::instruments::gad7::Gad7;
use virtuwellness_instruments::instruments::phq9::Phq9;
use virtuwellness_instruments::Instrument;
use virtuwellness_sentiment::estimator::SentimentEstimator;

use crate::adjust::adjust;
use crate::error::ConfigError;
use crate::recommend::{self, RecommendationContext};
use crate::request::AssessmentRequest;

/// Runs assessments for one instrument, plus the GAD-7 anxiety screen when a
/// request carries anxiety answers.
///
/// Holds no mutable state, so a single `Pipeline` can serve concurrent
/// requests for the same or different subjects.
#[derive(Clone)]
pub struct Pipeline {
    instrument: Arc<dyn Instrument>,
    anxiety: Arc<dyn Instrument>,
    estimator: SentimentEstimator,
    normalize_to: Option<f64>,
}

impl Pipeline {
    pub fn new(instrument: Arc<dyn Instrument>, estimator: SentimentEstimator) -> Self {
        Self {
            instrument,
            anxiety: Arc::new(Gad7),
            estimator,
            normalize_to: None,
        }
    }

    /// PHQ-9 pipeline, the canonical configuration.
    pub fn phq9(estimator: SentimentEstimator) -> Self {
        Self::new(Arc::new(Phq9), estimator)
    }

    /// Also report scores rescaled onto `0..=target`.
    pub fn with_normalization(mut self, target: f64) -> Result<Self, ConfigError> {
        if !(target.is_finite() && target > 0.0) {
            return Err(ConfigError::InvalidNormalization(target));
        }
        self.normalize_to = Some(target);
        Ok(self)
    }

    pub fn instrument(&self) -> &dyn Instrument {
        self.instrument.as_ref()
    }

    pub fn anxiety_instrument(&self) -> &dyn Instrument {
        self.anxiety.as_ref()
    }

    pub fn estimator(&self) -> &SentimentEstimator {
        &self.estimator
    }

    pub fn run(
        &self,
        subject: SubjectId,
        request: &AssessmentRequest,
    ) -> Result<AssessmentResult, ValidationError> {
        self.run_at(subject, request, jiff::Timestamp::now())
    }

    /// Same as [`Pipeline::run`] with a caller-chosen timestamp.
    pub fn run_at(
        &self,
        subject: SubjectId,
        request: &AssessmentRequest,
        created_at: jiff::Timestamp,
    ) -> Result<AssessmentResult, ValidationError> {
        request.validate_attributes()?;

        let score = self
            .instrument
            .aggregate(&request.responses, self.normalize_to)?;
        let initial_tier = self.instrument.classify(&score);
        debug!(%subject, raw = score.raw, tier = %initial_tier, "classified score");

        let anxiety = match &request.anxiety_responses {
            Some(answers) => {
                let score = self
                    .anxiety
                    .aggregate(answers, self.normalize_to)
                    .map_err(|e| ValidationError::AnxietyScreen(Box::new(e)))?;
                let tier = self.anxiety.classify(&score);
                debug!(%subject, raw = score.raw, tier = %tier, "classified anxiety screen");
                Some(AnxietyScreen { score, tier })
            }
            None => None,
        };

        let sentiment = self.estimator.estimate(&request.free_text);
        let tier = adjust(initial_tier, &sentiment);
        debug!(
            %subject,
            sentiment = %sentiment.label,
            confidence = sentiment.confidence,
            from = %initial_tier,
            to = %tier,
            "applied sentiment adjustment"
        );

        let recommendations = recommend::select(&RecommendationContext {
            tier,
            role: request.role,
            age: request.age,
            sleep_hours: request.sleep_hours,
            exercise_minutes: request.exercise_minutes,
            anxiety_tier: anxiety.map(|a| a.tier),
        });

        let mut result = AssessmentResult::new(
            subject,
            self.instrument.id(),
            score,
            initial_tier,
            tier,
            sentiment,
            recommendations,
            created_at,
        );
        if let Some(screen) = anxiety {
            result = result.with_anxiety(screen);
        }

        info!(
            %subject,
            instrument = self.instrument.id(),
            raw = score.raw,
            tier = %tier,
            escalated = result.was_escalated(),
            sections = result.recommendations().sections().len(),
            "assessment complete"
        );
        Ok(result)
    }
}
