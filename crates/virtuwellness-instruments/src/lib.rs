//! virtuwellness-instruments
//!
//! Questionnaire definitions and the pure scoring steps that turn a complete
//! set of answers into a score and a severity tier. No I/O.

pub mod accumulator;
pub mod bands;
pub mod error;
pub mod instruments;
pub mod scoring;

use virtuwellness_core::error::ValidationError;
use virtuwellness_core::models::score::NumericScore;
use virtuwellness_core::models::severity::SeverityTier;

use bands::BandTable;
use error::InstrumentError;
use scoring::{Item, ResponseOption, ScoreRange};

/// Trait implemented by each self-report questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    /// Questionnaire items in presentation order.
    fn items(&self) -> &[Item];

    /// Valid range for every item's answer.
    fn item_range(&self) -> ScoreRange;

    /// Labelled answer choices, one per value in [`Instrument::item_range`].
    fn response_options(&self) -> &[ResponseOption];

    /// Boundary table mapping raw totals to severity tiers.
    fn bands(&self) -> &BandTable;

    fn item_count(&self) -> usize {
        self.items().len()
    }

    /// Highest possible raw total.
    fn raw_max(&self) -> u32 {
        self.item_count() as u32 * u32::from(self.item_range().max)
    }

    /// Check a complete answer set: exact item count, every value in range.
    fn validate_responses(&self, responses: &[u8]) -> Result<(), ValidationError> {
        if responses.len() != self.item_count() {
            return Err(ValidationError::WrongItemCount {
                expected: self.item_count(),
                actual: responses.len(),
            });
        }
        let range = self.item_range();
        for (index, (item, &value)) in self.items().iter().zip(responses).enumerate() {
            range.check(item, index, value)?;
        }
        Ok(())
    }

    /// Sum the answers, optionally adding a rescaled display value.
    fn aggregate(
        &self,
        responses: &[u8],
        normalize_to: Option<f64>,
    ) -> Result<NumericScore, ValidationError> {
        scoring::aggregate(self, responses, normalize_to)
    }

    /// Map a raw total onto this instrument's severity tiers.
    fn classify(&self, score: &NumericScore) -> SeverityTier {
        self.bands().classify(score.raw)
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Like [`get_instrument`], but an unknown ID is an error.
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
