use thiserror::Error;
use virtuwellness_core::models::severity::SeverityTier;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("band tiers must rise strictly from Minimal to Severe; got {actual:?}")]
    BandTierOrder { actual: Vec<SeverityTier> },

    #[error("band table bounds must strictly increase; {bound} follows {previous}")]
    BandBoundsNotIncreasing { previous: u32, bound: u32 },

    #[error("band table tops out at {top} but scores reach {raw_max}")]
    BandTableIncomplete { top: u32, raw_max: u32 },
}
