//! Boundary tables mapping raw totals to severity tiers.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use virtuwellness_core::models::severity::SeverityTier;

use crate::error::InstrumentError;

/// One row of a [`BandTable`]: totals up to and including `upper` fall in
/// `tier` unless an earlier row already claimed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub upper: u32,
    pub tier: SeverityTier,
}

/// Ordered, gap-free list of inclusive upper bounds, one per tier the scale
/// uses.
///
/// Scales may skip tiers (GAD-7 has no Moderately Severe band), but every
/// table starts at Minimal, ends at Severe, and lists tiers in strictly
/// rising order. A total exactly on a bound belongs to the lower tier.
///
/// Deserialized tables are checked the same way as [`BandTable::from_bands`],
/// with the top bound taken as the domain maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "BandRows")]
#[ts(export)]
pub struct BandTable {
    bands: Vec<Band>,
}

#[derive(Deserialize)]
struct BandRows {
    bands: Vec<Band>,
}

impl TryFrom<BandRows> for BandTable {
    type Error = InstrumentError;

    fn try_from(rows: BandRows) -> Result<Self, Self::Error> {
        let top = rows.bands.last().map(|b| b.upper).unwrap_or(0);
        Self::from_bands(rows.bands, top)
    }
}

impl BandTable {
    /// Build a table from `(upper bound, tier)` rows listed in tier order.
    pub fn new(rows: &[(u32, SeverityTier)], raw_max: u32) -> Result<Self, InstrumentError> {
        let bands = rows
            .iter()
            .map(|&(upper, tier)| Band { upper, tier })
            .collect();
        Self::from_bands(bands, raw_max)
    }

    /// Tiers must rise strictly from Minimal to Severe, bounds must strictly
    /// increase, and the last bound must reach `raw_max`.
    pub fn from_bands(bands: Vec<Band>, raw_max: u32) -> Result<Self, InstrumentError> {
        let tiers: Vec<_> = bands.iter().map(|b| b.tier).collect();
        let rising = tiers.windows(2).all(|pair| pair[0] < pair[1]);
        if !rising
            || tiers.first() != Some(&SeverityTier::Minimal)
            || tiers.last() != Some(&SeverityTier::MOST_SEVERE)
        {
            return Err(InstrumentError::BandTierOrder { actual: tiers });
        }

        for pair in bands.windows(2) {
            if pair[1].upper <= pair[0].upper {
                return Err(InstrumentError::BandBoundsNotIncreasing {
                    previous: pair[0].upper,
                    bound: pair[1].upper,
                });
            }
        }

        let top = bands.last().map(|b| b.upper).unwrap_or(0);
        if top < raw_max {
            return Err(InstrumentError::BandTableIncomplete { top, raw_max });
        }

        Ok(Self { bands })
    }

    /// Built-in tables are checked by tests rather than at runtime.
    pub(crate) fn from_trusted(rows: &[(u32, SeverityTier)]) -> Self {
        Self {
            bands: rows
                .iter()
                .map(|&(upper, tier)| Band { upper, tier })
                .collect(),
        }
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Tiers this scale can produce, least severe first.
    pub fn tiers(&self) -> impl Iterator<Item = SeverityTier> + '_ {
        self.bands.iter().map(|b| b.tier)
    }

    /// Total lookup: the first band whose bound is at or above `raw`, or the
    /// most severe tier when `raw` exceeds every bound.
    pub fn classify(&self, raw: u32) -> SeverityTier {
        self.bands
            .iter()
            .find(|b| raw <= b.upper)
            .map(|b| b.tier)
            .unwrap_or(SeverityTier::MOST_SEVERE)
    }

    /// Inclusive range of raw totals that map to `tier`, or `None` when this
    /// scale has no band for it.
    pub fn range_of(&self, tier: SeverityTier) -> Option<(u32, u32)> {
        let i = self.bands.iter().position(|b| b.tier == tier)?;
        let lower = match i.checked_sub(1) {
            Some(prev) => self.bands[prev].upper + 1,
            None => 0,
        };
        Some((lower, self.bands[i].upper))
    }
}
