use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use virtuwellness_core::error::ValidationError;
use virtuwellness_core::models::score::NumericScore;

use crate::Instrument;

/// Inclusive range of valid answer values for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Reject `value` for the item at zero-based `index`. Errors report the
    /// one-based position a respondent would see.
    pub fn check(&self, item: &Item, index: usize, value: u8) -> Result<(), ValidationError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(ValidationError::ItemOutOfRange {
                item_id: item.id.clone(),
                position: index + 1,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// A single questionnaire prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub prompt: String,
}

/// A labelled answer choice, e.g. `1 = "Several days"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub value: u8,
    pub label: String,
}

/// Sum a complete answer set.
///
/// Malformed input is rejected, never clamped. When `normalize_to` is given
/// the score also carries `round(raw / raw_max * normalize_to, 1)`.
pub fn aggregate<I: Instrument + ?Sized>(
    instrument: &I,
    responses: &[u8],
    normalize_to: Option<f64>,
) -> Result<NumericScore, ValidationError> {
    instrument.validate_responses(responses)?;

    let raw: u32 = responses.iter().map(|&v| u32::from(v)).sum();
    let score = NumericScore::new(raw, instrument.raw_max());

    let score = match normalize_to {
        None => score,
        Some(target) if target.is_finite() && target > 0.0 => score.normalized_to(target),
        Some(target) => return Err(ValidationError::InvalidNormalization(target)),
    };

    debug!(
        instrument = instrument.id(),
        raw = score.raw,
        raw_max = score.raw_max,
        normalized = ?score.normalized,
        "aggregated responses"
    );
    Ok(score)
}
