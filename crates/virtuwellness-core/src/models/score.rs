use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregated questionnaire score.
///
/// `raw` is the canonical value used for classification. `normalized` is an
/// optional display value rescaled onto a secondary range (e.g. 0–10).
///
/// Serialized as plain numbers named for the output record (`score`,
/// `score_max`, `normalized_score`) so it can be flattened into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericScore {
    #[serde(rename = "score")]
    pub raw: u32,
    #[serde(rename = "score_max")]
    pub raw_max: u32,
    #[serde(rename = "normalized_score")]
    pub normalized: Option<f64>,
}

impl NumericScore {
    pub fn new(raw: u32, raw_max: u32) -> Self {
        Self {
            raw,
            raw_max,
            normalized: None,
        }
    }

    /// Linear rescale onto `0..=target_max`, rounded to one decimal place.
    pub fn normalized_to(self, target_max: f64) -> Self {
        let value = if self.raw_max == 0 {
            0.0
        } else {
            round_one_decimal(f64::from(self.raw) / f64::from(self.raw_max) * target_max)
        };
        Self {
            normalized: Some(value),
            ..self
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
