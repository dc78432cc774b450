use virtuwellness_core::models::recommendation::SectionKind;
use virtuwellness_core::models::severity::SeverityTier;
use virtuwellness_pipeline::recommend::{select, RecommendationContext, CRISIS_HOTLINE};
use virtuwellness_pipeline::Role;

const ROLES: [Role; 4] = [
    Role::Student,
    Role::WorkingProfessional,
    Role::Homemaker,
    Role::Unspecified,
];

#[test]
fn universal_block_always_first_and_non_empty() {
    for tier in SeverityTier::ALL {
        for role in ROLES {
            let set = select(&RecommendationContext::new(tier, role));
            let first = &set.sections()[0];
            assert_eq!(first.kind, SectionKind::Universal);
            assert!(!first.items.is_empty());
        }
    }
}

#[test]
fn crisis_block_iff_moderately_severe_or_worse() {
    for tier in SeverityTier::ALL {
        let set = select(&RecommendationContext::new(tier, Role::Student));
        let expected = matches!(tier, SeverityTier::ModeratelySevere | SeverityTier::Severe);
        assert_eq!(set.has_section(SectionKind::Crisis), expected, "{tier}");
    }
}

#[test]
fn crisis_block_references_hotline_and_comes_last() {
    let set = select(&RecommendationContext::new(SeverityTier::Severe, Role::Homemaker));
    let last = set.sections().last().unwrap();
    assert_eq!(last.kind, SectionKind::Crisis);
    assert!(last.items.iter().any(|i| i.contains(CRISIS_HOTLINE)));
}

#[test]
fn role_block_follows_status() {
    let set = select(&RecommendationContext::new(SeverityTier::Mild, Role::Student));
    assert_eq!(
        set.section(SectionKind::Role).unwrap().section_title,
        "For students"
    );

    let set = select(&RecommendationContext::new(
        SeverityTier::Mild,
        Role::WorkingProfessional,
    ));
    assert_eq!(
        set.section(SectionKind::Role).unwrap().section_title,
        "For working professionals"
    );

    let set = select(&RecommendationContext::new(SeverityTier::Mild, Role::Unspecified));
    assert!(!set.has_section(SectionKind::Role));
    assert_eq!(set.sections().len(), 1);
}

#[test]
fn lifestyle_block_only_when_habits_fall_short() {
    let mut ctx = RecommendationContext::new(SeverityTier::Minimal, Role::Unspecified);
    ctx.sleep_hours = Some(8.0);
    ctx.exercise_minutes = Some(45);
    assert!(!select(&ctx).has_section(SectionKind::Lifestyle));

    ctx.sleep_hours = Some(5.0);
    let set = select(&ctx);
    let lifestyle = set.section(SectionKind::Lifestyle).unwrap();
    assert_eq!(lifestyle.items.len(), 1);
    assert!(lifestyle.items[0].contains("sleep"));

    ctx.exercise_minutes = Some(10);
    assert_eq!(
        select(&ctx).section(SectionKind::Lifestyle).unwrap().items.len(),
        2
    );
}

#[test]
fn anxiety_block_only_from_moderate_anxiety() {
    let mut ctx = RecommendationContext::new(SeverityTier::Minimal, Role::Unspecified);
    assert!(!select(&ctx).has_section(SectionKind::Anxiety));

    for (tier, expected) in [
        (SeverityTier::Minimal, false),
        (SeverityTier::Mild, false),
        (SeverityTier::Moderate, true),
        (SeverityTier::Severe, true),
    ] {
        ctx.anxiety_tier = Some(tier);
        assert_eq!(select(&ctx).has_section(SectionKind::Anxiety), expected, "{tier}");
    }

    let set = select(&ctx);
    let anxiety = set.section(SectionKind::Anxiety).unwrap();
    assert!(anxiety.items.iter().any(|i| i.contains("breathing")));
    assert!(anxiety.items.iter().any(|i| i.contains("caffeine")));
    assert!(!set.has_section(SectionKind::Crisis));
}

#[test]
fn age_adds_tailored_universal_item() {
    let base = RecommendationContext::new(SeverityTier::Moderate, Role::Unspecified);
    let without = select(&base).sections()[0].items.len();

    let young = select(&RecommendationContext {
        age: Some(19),
        ..base
    });
    assert_eq!(young.sections()[0].items.len(), without + 1);

    let middle = select(&RecommendationContext {
        age: Some(40),
        ..base
    });
    assert_eq!(middle.sections()[0].items.len(), without);

    let older = select(&RecommendationContext {
        age: Some(70),
        ..base
    });
    assert!(older.items().any(|i| i.contains("primary care")));
}

#[test]
fn sections_follow_fixed_order() {
    let set = select(&RecommendationContext {
        tier: SeverityTier::Severe,
        role: Role::WorkingProfessional,
        age: Some(30),
        sleep_hours: Some(4.5),
        exercise_minutes: Some(0),
        anxiety_tier: Some(SeverityTier::Severe),
    });
    let kinds: Vec<_> = set.sections().iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Universal,
            SectionKind::Role,
            SectionKind::Anxiety,
            SectionKind::Lifestyle,
            SectionKind::Crisis
        ]
    );
}

#[test]
fn selection_is_deterministic() {
    let ctx = RecommendationContext {
        tier: SeverityTier::Moderate,
        role: Role::Homemaker,
        age: Some(22),
        sleep_hours: Some(5.5),
        exercise_minutes: None,
        anxiety_tier: Some(SeverityTier::Mild),
    };
    assert_eq!(select(&ctx), select(&ctx));
}
