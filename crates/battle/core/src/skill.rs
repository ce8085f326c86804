//! Skills a unit can use on its turn.

use crate::modifier::ModifierInstance;

/// Skill tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillCategory {
    #[default]
    Basic,
    Heavy,
    Ultimate,
}

/// A skill definition owned by a unit.
///
/// `gauge_cost` is advisory. Resolution never checks it: the actor's gauge
/// resets to zero after every turn regardless of the skill used.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub gauge_cost: f32,
    /// Multiplier applied to the actor's attack.
    pub base_power: f32,
    /// Damage-attribute tag used for resistance lookup.
    pub attribute: String,
    /// Modifier instantiated on the target when the skill lands.
    pub effect: Option<ModifierInstance>,
}

impl Skill {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: SkillCategory,
        gauge_cost: f32,
        base_power: f32,
        attribute: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            gauge_cost,
            base_power,
            attribute: attribute.into(),
            effect: None,
        }
    }

    pub fn with_effect(mut self, effect: ModifierInstance) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Whether a decision source should offer this skill at `gauge`.
    pub fn is_affordable(&self, gauge: f32) -> bool {
        gauge >= self.gauge_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::ModifierKind;

    #[test]
    fn affordability_is_gauge_against_cost() {
        let heavy = Skill::new("heavy", "Heavy", SkillCategory::Heavy, 100.0, 1.5, "Physical");
        let ult = Skill::new("ult", "Ultimate", SkillCategory::Ultimate, 150.0, 3.0, "Physical");

        assert!(heavy.is_affordable(100.0));
        assert!(!heavy.is_affordable(99.9));
        assert!(!ult.is_affordable(100.0));
    }

    #[test]
    fn effect_is_optional() {
        let plain = Skill::new("basic", "Basic", SkillCategory::Basic, 100.0, 1.0, "Magic");
        assert!(plain.effect.is_none());

        let with = plain.with_effect(ModifierInstance::new("mark", 2, 0.0, ModifierKind::Inert));
        assert_eq!(with.effect.as_ref().map(|e| e.id.as_str()), Some("mark"));
    }
}
