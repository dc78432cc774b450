use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Ordered severity classification. Declaration order is severity order, so
/// `Ord` compares tiers by how severe they are.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityTier {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl SeverityTier {
    /// Every tier, least severe first.
    pub const ALL: [SeverityTier; 5] = [
        SeverityTier::Minimal,
        SeverityTier::Mild,
        SeverityTier::Moderate,
        SeverityTier::ModeratelySevere,
        SeverityTier::Severe,
    ];

    pub const MOST_SEVERE: SeverityTier = SeverityTier::Severe;

    /// Position in [`SeverityTier::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<SeverityTier> {
        Self::ALL.get(index).copied()
    }

    /// One step toward greater severity, clamped at [`SeverityTier::Severe`].
    pub fn escalate(self) -> SeverityTier {
        Self::from_index(self.index() + 1).unwrap_or(Self::MOST_SEVERE)
    }

    /// Tiers at which crisis resources must be shown.
    pub fn requires_crisis_resources(self) -> bool {
        self >= SeverityTier::ModeratelySevere
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityTier::Minimal => "Minimal",
            SeverityTier::Mild => "Mild",
            SeverityTier::Moderate => "Moderate",
            SeverityTier::ModeratelySevere => "Moderately Severe",
            SeverityTier::Severe => "Severe",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
