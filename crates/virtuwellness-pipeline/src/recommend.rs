//! Deterministic selection of recommendation text.

use virtuwellness_core::models::recommendation::{
    RecommendationSection, RecommendationSet, SectionKind,
};
use virtuwellness_core::models::severity::SeverityTier;

use crate::request::Role;

pub const CRISIS_HOTLINE: &str = "988";

const SHORT_SLEEP_HOURS: f64 = 6.0;
const LOW_EXERCISE_MINUTES: u32 = 30;

/// Inputs that shape the recommendations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationContext {
    /// Final tier, after sentiment adjustment.
    pub tier: SeverityTier,
    pub role: Role,
    pub age: Option<u16>,
    pub sleep_hours: Option<f64>,
    pub exercise_minutes: Option<u32>,
    /// Tier from the optional anxiety screen. Never adjusted by sentiment.
    pub anxiety_tier: Option<SeverityTier>,
}

impl RecommendationContext {
    pub fn new(tier: SeverityTier, role: Role) -> Self {
        Self {
            tier,
            role,
            age: None,
            sleep_hours: None,
            exercise_minutes: None,
            anxiety_tier: None,
        }
    }
}

/// Compose sections in fixed order: universal, role, anxiety, lifestyle,
/// crisis.
pub fn select(ctx: &RecommendationContext) -> RecommendationSet {
    let mut sections = vec![universal(ctx)];
    sections.extend(role_section(ctx.role));
    if ctx.anxiety_tier.is_some_and(|t| t >= SeverityTier::Moderate) {
        sections.push(anxiety_section());
    }
    sections.extend(lifestyle_section(ctx));
    if ctx.tier.requires_crisis_resources() {
        sections.push(crisis_section());
    }
    RecommendationSet(sections)
}

fn section(title: &str, kind: SectionKind, items: &[&str]) -> RecommendationSection {
    RecommendationSection {
        section_title: title.to_string(),
        kind,
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn universal(ctx: &RecommendationContext) -> RecommendationSection {
    let mut items: Vec<&str> = match ctx.tier {
        SeverityTier::Minimal | SeverityTier::Mild => vec![
            "Continue monitoring your mental health and retake this check-in every few weeks",
            "Keep up self-care routines that help you recharge",
            "Stay connected with friends and family",
        ],
        SeverityTier::Moderate => vec![
            "Consider speaking with a mental health professional",
            "Practice a short mindfulness or breathing exercise every day",
            "Keep a regular sleep schedule",
        ],
        SeverityTier::ModeratelySevere | SeverityTier::Severe => vec![
            "Seek help from a mental health professional as soon as possible",
            "Schedule an appointment with your doctor or a licensed therapist",
            "Let someone you trust know how you are feeling",
        ],
    };

    match ctx.age {
        Some(age) if age < 25 => items.push(
            "Campus and youth services often offer free counselling; check what is available near you",
        ),
        Some(age) if age >= 65 => items.push(
            "Mention these results at your next primary care visit; mood changes can have medical causes",
        ),
        _ => {}
    }

    section("General wellbeing", SectionKind::Universal, &items)
}

fn role_section(role: Role) -> Option<RecommendationSection> {
    let (title, items): (&str, &[&str]) = match role {
        Role::Student => (
            "For students",
            &[
                "Break coursework into small, scheduled tasks",
                "Use your institution's counselling or wellbeing service",
                "Protect time for rest and social activities during exam periods",
            ],
        ),
        Role::WorkingProfessional => (
            "For working professionals",
            &[
                "Set clear boundaries between work hours and personal time",
                "Check whether your employer offers an employee assistance programme",
                "Take short breaks away from your screen during the day",
            ],
        ),
        Role::Homemaker => (
            "For homemakers",
            &[
                "Schedule time each week for an activity that is just for you",
                "Share household responsibilities where you can",
                "Join a local community or parent group to stay connected",
            ],
        ),
        Role::Unspecified => return None,
    };
    Some(section(title, SectionKind::Role, items))
}

fn anxiety_section() -> RecommendationSection {
    section(
        "Managing anxiety",
        SectionKind::Anxiety,
        &[
            "Try breathing exercises when feeling anxious",
            "Consider anxiety management techniques such as grounding or progressive muscle relaxation",
            "Limit caffeine and alcohol intake",
        ],
    )
}

fn lifestyle_section(ctx: &RecommendationContext) -> Option<RecommendationSection> {
    let mut items = Vec::new();
    if ctx.sleep_hours.is_some_and(|h| h < SHORT_SLEEP_HOURS) {
        items.push("Work on improving sleep duration (aim for 7-9 hours)");
    }
    if ctx.exercise_minutes.is_some_and(|m| m < LOW_EXERCISE_MINUTES) {
        items.push("Try to increase physical activity (aim for 30+ minutes daily)");
    }
    if items.is_empty() {
        return None;
    }
    Some(section("Lifestyle", SectionKind::Lifestyle, &items))
}

fn crisis_section() -> RecommendationSection {
    section(
        "Crisis support",
        SectionKind::Crisis,
        &[
            "If you are thinking about harming yourself, call or text the 988 Suicide & Crisis Lifeline (988) right now",
            "If you are in immediate danger, call your local emergency number",
            "Do not wait for your next appointment; reach out to a professional today",
        ],
    )
}
