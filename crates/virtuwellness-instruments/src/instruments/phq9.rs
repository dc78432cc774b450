use std::sync::LazyLock;

use virtuwellness_core::models::severity::SeverityTier;

use crate::bands::BandTable;
use crate::scoring::{Item, ResponseOption, ScoreRange};
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire, nine-item depression module.
/// Each item rated 0–3 over the last two weeks. Total 0–27.
pub struct Phq9;

pub const ITEM_RANGE: ScoreRange = ScoreRange { min: 0, max: 3 };

/// Inclusive upper bound of each tier.
pub const BANDS: [(u32, SeverityTier); 5] = [
    (4, SeverityTier::Minimal),
    (9, SeverityTier::Mild),
    (14, SeverityTier::Moderate),
    (19, SeverityTier::ModeratelySevere),
    (27, SeverityTier::Severe),
];

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            [
                ("anhedonia", "Little interest or pleasure in doing things"),
                ("depressed_mood", "Feeling down, depressed, or hopeless"),
                ("sleep", "Trouble falling or staying asleep, or sleeping too much"),
                ("fatigue", "Feeling tired or having little energy"),
                ("appetite", "Poor appetite or overeating"),
                (
                    "self_worth",
                    "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
                ),
                (
                    "concentration",
                    "Trouble concentrating on things, such as reading or watching television",
                ),
                (
                    "psychomotor",
                    "Moving or speaking so slowly that other people could have noticed, or being so fidgety or restless that you have been moving around a lot more than usual",
                ),
                (
                    "self_harm",
                    "Thoughts that you would be better off dead, or of hurting yourself in some way",
                ),
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
