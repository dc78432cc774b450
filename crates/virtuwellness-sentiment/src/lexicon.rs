//! Fixed polarity word lists and the tokenizer shared by every estimator.

pub const NEGATIVE: &[&str] = &[
    "alone",
    "angry",
    "anxious",
    "ashamed",
    "awful",
    "bad",
    "crying",
    "depressed",
    "desperate",
    "down",
    "empty",
    "exhausted",
    "failure",
    "guilty",
    "hate",
    "helpless",
    "hopeless",
    "hurt",
    "lonely",
    "lost",
    "miserable",
    "numb",
    "overwhelmed",
    "pain",
    "sad",
    "scared",
    "stressed",
    "suicidal",
    "terrible",
    "tired",
    "unhappy",
    "upset",
    "useless",
    "worried",
    "worthless",
];

pub const POSITIVE: &[&str] = &[
    "better",
    "calm",
    "confident",
    "content",
    "energetic",
    "enjoy",
    "excited",
    "fine",
    "glad",
    "good",
    "grateful",
    "great",
    "happy",
    "hope",
    "hopeful",
    "joy",
    "loved",
    "motivated",
    "optimistic",
    "peaceful",
    "proud",
    "relaxed",
    "rested",
    "supported",
    "wonderful",
];

/// Split on whitespace, lowercase, and strip punctuation from both ends.
/// Tokens that are only punctuation still count toward the total.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(|raw| {
        raw.trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase()
    })
}

pub fn is_negative(token: &str) -> bool {
    NEGATIVE.binary_search(&token).is_ok()
}

pub fn is_positive(token: &str) -> bool {
    POSITIVE.binary_search(&token).is_ok()
}

/// Polarity hit counts over a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexiconCounts {
    pub negative: usize,
    pub positive: usize,
    pub total_tokens: usize,
}

pub fn count(text: &str) -> LexiconCounts {
    tokenize(text).fold(LexiconCounts::default(), |mut acc, token| {
        acc.total_tokens += 1;
        if is_negative(&token) {
            acc.negative += 1;
        } else if is_positive(&token) {
            acc.positive += 1;
        }
        acc
    })
}
