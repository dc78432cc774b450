use thiserror::Error;

/// Malformed or out-of-range input. Always surfaced to the caller and never
/// silently corrected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("expected {expected} answers but received {actual}")]
    WrongItemCount { expected: usize, actual: usize },

    #[error(
        "answer to item {position} ({item_id}) is {value}, but answers must be between {min} and {max}"
    )]
    ItemOutOfRange {
        item_id: String,
        position: usize,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("item position {position} does not exist; the questionnaire has {len} items")]
    PositionOutOfBounds { position: usize, len: usize },

    #[error("questionnaire is incomplete; unanswered items: {}", format_positions(.missing))]
    Incomplete { missing: Vec<usize> },

    #[error("normalization target must be a positive number, got {0}")]
    InvalidNormalization(f64),

    #[error("age {age} is outside the accepted range {min}-{max}")]
    AgeOutOfRange { age: u16, min: u16, max: u16 },

    #[error("sleep hours must be between 0 and 24, got {0}")]
    SleepHoursOutOfRange(f64),

    #[error("exercise minutes must be at most 1440 per day, got {0}")]
    ExerciseMinutesOutOfRange(u32),

    #[error("anxiety screen: {0}")]
    AnxietyScreen(Box<ValidationError>),
}

fn format_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
