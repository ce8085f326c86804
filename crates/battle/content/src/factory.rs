//! Template validation and conversion into runtime units.

use battle_core::{
    BattleConfig, BattleError, ErrorSeverity, LedgerError, PerkSet, Resistances, Roster,
    RosterError, Skill, StatBlock, Unit,
};
use tracing::{debug, warn};

use crate::templates::{BuffTemplate, SkillTemplate, UnitTemplate};

/// Content that cannot become a valid unit.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TemplateError {
    #[error("unit '{unit}' has non-positive max HP {max_hp}")]
    NonPositiveMaxHp { unit: String, max_hp: i32 },

    #[error("unit '{unit}' resistance '{attribute}' = {value} is outside [-1, 1]")]
    ResistanceOutOfRange {
        unit: String,
        attribute: String,
        value: f32,
    },

    #[error("unit '{unit}' has no skills")]
    NoSkills { unit: String },

    #[error("skill '{skill}' of unit '{unit}' uses unknown attribute '{attribute}'")]
    UnknownAttribute {
        unit: String,
        skill: String,
        attribute: String,
    },

    #[error("buff '{buff}' on '{owner}' has non-positive duration {turns}")]
    NonPositiveDuration {
        owner: String,
        buff: String,
        turns: i32,
    },

    #[error("unit '{unit}' starting buffs rejected: {source}")]
    Ledger {
        unit: String,
        #[source]
        source: LedgerError,
    },

    #[error(transparent)]
    Roster(#[from] RosterError),
}

impl BattleError for TemplateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            TemplateError::NonPositiveMaxHp { .. } => "template_non_positive_max_hp",
            TemplateError::ResistanceOutOfRange { .. } => "template_resistance_out_of_range",
            TemplateError::NoSkills { .. } => "template_no_skills",
            TemplateError::UnknownAttribute { .. } => "template_unknown_attribute",
            TemplateError::NonPositiveDuration { .. } => "template_non_positive_duration",
            TemplateError::Ledger { .. } => "template_ledger",
            TemplateError::Roster(err) => err.error_code(),
        }
    }
}

/// Converts templates into units under a battle configuration.
#[derive(Clone, Debug, Default)]
pub struct UnitFactory {
    config: BattleConfig,
}

impl UnitFactory {
    pub fn new(config: BattleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Validates `template` and builds the unit, including its starting buffs.
    pub fn build(&self, template: &UnitTemplate) -> Result<Unit, TemplateError> {
        self.validate(template)?;

        let resistances: Resistances = template
            .resistances
            .iter()
            .map(|(tag, value)| (tag.clone(), *value))
            .collect();
        let stats = StatBlock::new(template.attack, template.gauge_speed, template.max_hp)
            .with_resistances(resistances);

        let skills = template.skills.iter().map(Self::build_skill);
        let perks: PerkSet = template.perks.iter().cloned().collect();

        let mut unit = Unit::new(template.id.as_str(), stats)
            .with_name(template.name.clone().unwrap_or_else(|| template.id.clone()))
            .with_skills(skills)
            .with_perks(perks)
            .with_tags(template.tags.iter().cloned());

        for buff in &template.starting_buffs {
            unit.apply_modifier(buff.instantiate(), self.config.stacking)
                .map_err(|source| TemplateError::Ledger {
                    unit: template.id.clone(),
                    source,
                })?;
        }

        debug!(
            unit = %unit.id,
            skills = unit.skills.len(),
            perks = unit.perks.len(),
            buffs = unit.ledger.len(),
            "built unit from template"
        );

        Ok(unit)
    }

    /// Builds every template, stopping at the first invalid one.
    pub fn build_all(&self, templates: &[UnitTemplate]) -> Result<Vec<Unit>, TemplateError> {
        templates.iter().map(|t| self.build(t)).collect()
    }

    /// Builds both sides and assembles a validated roster.
    pub fn build_roster(
        &self,
        allies: &[UnitTemplate],
        enemies: &[UnitTemplate],
    ) -> Result<Roster, TemplateError> {
        let allies = self.build_all(allies)?;
        let enemies = self.build_all(enemies)?;
        Ok(Roster::new(allies, enemies)?)
    }

    fn build_skill(template: &SkillTemplate) -> Skill {
        let skill = Skill::new(
            template.id.clone(),
            template.name.clone(),
            template.category,
            template.gauge_cost,
            template.base_power,
            template.attribute.clone(),
        );
        match &template.effect {
            Some(effect) => skill.with_effect(effect.instantiate()),
            None => skill,
        }
    }

    fn validate(&self, template: &UnitTemplate) -> Result<(), TemplateError> {
        let unit = &template.id;

        if template.max_hp <= 0 {
            return Err(TemplateError::NonPositiveMaxHp {
                unit: unit.clone(),
                max_hp: template.max_hp,
            });
        }

        for (attribute, value) in &template.resistances {
            if !(Resistances::MIN..=Resistances::MAX).contains(value) {
                return Err(TemplateError::ResistanceOutOfRange {
                    unit: unit.clone(),
                    attribute: attribute.clone(),
                    value: *value,
                });
            }
            if !self.config.knows_attribute(attribute) {
                warn!(unit = %unit, %attribute, "resistance for undeclared attribute is never consulted");
            }
        }

        if template.skills.is_empty() {
            return Err(TemplateError::NoSkills { unit: unit.clone() });
        }

        for skill in &template.skills {
            if !self.config.knows_attribute(&skill.attribute) {
                return Err(TemplateError::UnknownAttribute {
                    unit: unit.clone(),
                    skill: skill.id.clone(),
                    attribute: skill.attribute.clone(),
                });
            }
            if let Some(effect) = &skill.effect {
                check_duration(&skill.id, effect)?;
            }
        }

        for buff in &template.starting_buffs {
            check_duration(unit, buff)?;
        }

        if template.gauge_speed <= 0.0 {
            warn!(unit = %unit, speed = template.gauge_speed, "unit will never fill its gauge");
        }

        Ok(())
    }
}

fn check_duration(owner: &str, buff: &BuffTemplate) -> Result<(), TemplateError> {
    if buff.duration_turns <= 0 {
        return Err(TemplateError::NonPositiveDuration {
            owner: owner.to_owned(),
            buff: buff.id.clone(),
            turns: buff.duration_turns,
        });
    }
    Ok(())
}
