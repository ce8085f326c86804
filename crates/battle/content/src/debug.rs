//! Built-in sample roster used by the CLI and tests when no data directory
//! is configured.

use battle_core::{
    BattleConfig, ModifierKind, Polarity, Roster, SkillCategory, StatKind, TargetScope,
};

use crate::factory::{TemplateError, UnitFactory};
use crate::templates::{BuffTemplate, SkillTemplate, UnitTemplate};

fn party_skills(attribute: &str) -> Vec<SkillTemplate> {
    let rally = BuffTemplate::new("buff_atk20", StatKind::Atk, 0.2, 2)
        .with_kind(ModifierKind::Inert)
        .with_target(TargetScope::OnSelf);

    vec![
        SkillTemplate::new("basic", "Basic", SkillCategory::Basic, 100.0, 1.0, attribute),
        SkillTemplate::new("heavy", "Heavy", SkillCategory::Heavy, 100.0, 1.5, attribute),
        SkillTemplate::new("ult", "Ultimate", SkillCategory::Ultimate, 150.0, 3.0, attribute)
            .with_effect(rally),
    ]
}

fn enemy_skills(attribute: &str) -> Vec<SkillTemplate> {
    let slow = BuffTemplate::new("debuff_slow", StatKind::GaugeSpeed, -0.1, 2)
        .with_polarity(Polarity::Debuff);

    vec![
        SkillTemplate::new("e_basic", "Claw", SkillCategory::Basic, 100.0, 1.0, attribute),
        SkillTemplate::new("e_heavy", "Charge", SkillCategory::Heavy, 100.0, 1.2, attribute)
            .with_effect(slow),
        SkillTemplate::new("e_ult", "Rage", SkillCategory::Ultimate, 150.0, 2.5, attribute),
    ]
}

fn with_skills(mut template: UnitTemplate, skills: Vec<SkillTemplate>) -> UnitTemplate {
    template.skills = skills;
    template
}

/// Two-unit allied party.
pub fn debug_party() -> Vec<UnitTemplate> {
    let mut rita = with_skills(UnitTemplate::new("rita", 150, 20.0, 500), party_skills("Physical"));
    rita.name = Some("Rita".into());

    let mut fio = with_skills(UnitTemplate::new("fio", 100, 25.0, 400), party_skills("Magic"));
    fio.name = Some("Fio".into());

    vec![rita, fio]
}

/// Two-unit enemy wave.
pub fn debug_enemies() -> Vec<UnitTemplate> {
    let mut goblin = with_skills(
        UnitTemplate::new("goblin", 120, 18.0, 300),
        enemy_skills("Physical"),
    );
    goblin.name = Some("Goblin".into());

    let mut imp = with_skills(UnitTemplate::new("imp", 130, 22.0, 350), enemy_skills("Fire"));
    imp.name = Some("Imp".into());

    vec![goblin, imp]
}

/// Builds the sample battle under `config`.
pub fn debug_roster(config: BattleConfig) -> Result<Roster, TemplateError> {
    UnitFactory::new(config).build_roster(&debug_party(), &debug_enemies())
}
