use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which block of guidance a section belongs to. Sections always appear in
/// this order when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SectionKind {
    Universal,
    Role,
    Anxiety,
    Lifestyle,
    Crisis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationSection {
    pub section_title: String,
    pub kind: SectionKind,
    pub items: Vec<String>,
}

/// Ordered recommendation sections for one assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct RecommendationSet(pub Vec<RecommendationSection>);

impl RecommendationSet {
    pub fn sections(&self) -> &[RecommendationSection] {
        &self.0
    }

    pub fn section(&self, kind: SectionKind) -> Option<&RecommendationSection> {
        self.0.iter().find(|s| s.kind == kind)
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.section(kind).is_some()
    }

    /// All recommendation lines in display order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.0.iter().flat_map(|s| s.items.iter().map(String::as_str))
    }
}
