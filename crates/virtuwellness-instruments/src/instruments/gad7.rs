use std::sync::LazyLock;

use virtuwellness_core::models::severity::SeverityTier;

use crate::bands::BandTable;
use crate::scoring::{Item, ResponseOption, ScoreRange};
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder seven-item scale. Same 0–3 answer
/// scale as PHQ-9. Total 0–21, four tiers.
pub struct Gad7;

pub const ITEM_RANGE: ScoreRange = ScoreRange { min: 0, max: 3 };

/// No Moderately Severe band: anything above 14 is Severe.
pub const BANDS: [(u32, SeverityTier); 4] = [
    (4, SeverityTier::Minimal),
    (9, SeverityTier::Mild),
    (14, SeverityTier::Moderate),
    (21, SeverityTier::Severe),
];

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            [
                ("nervous", "Feeling nervous, anxious, or on edge"),
                ("uncontrolled_worry", "Not being able to stop or control worrying"),
                ("excessive_worry", "Worrying too much about different things"),
                ("trouble_relaxing", "Trouble relaxing"),
                ("restless", "Being so restless that it is hard to sit still"),
                ("irritable", "Becoming easily annoyed or irritable"),
                ("afraid", "Feeling afraid, as if something awful might happen"),
            ]
            .iter()
            .map(|(id, prompt)| Item {
                id: id.to_string(),
                prompt: prompt.to_string(),
            })
            .collect()
        });
        &ITEMS
    }

    fn item_range(&self) -> ScoreRange {
        ITEM_RANGE
    }

    fn response_options(&self) -> &[ResponseOption] {
        static OPTIONS: LazyLock<Vec<ResponseOption>> = LazyLock::new(|| {
            [
                (0, "Not at all"),
                (1, "Several days"),
                (2, "More than half the days"),
                (3, "Nearly every day"),
            ]
            .iter()
            .map(|&(value, label)| ResponseOption {
                value,
                label: label.to_string(),
            })
            .collect()
        });
        &OPTIONS
    }

    fn bands(&self) -> &BandTable {
        static TABLE: LazyLock<BandTable> = LazyLock::new(|| BandTable::from_trusted(&BANDS));
        &TABLE
    }
}
