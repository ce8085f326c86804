//! Data-driven perks shipped with the core.

use super::Perk;
use crate::skill::Skill;
use crate::unit::Unit;

/// Built-in perk vocabulary.
///
/// Content files name one of these variants; user code can still register
/// any other [`Perk`] implementation next to them.
#[derive(Clone, Debug, PartialEq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PerkKind {
    /// Leaves every hook untouched.
    Passthrough,

    /// Multiplies gauge gain by `factor`.
    Haste { factor: f32 },

    /// Multiplies outgoing damage by `1 + bonus`.
    Overpower { bonus: f32 },

    /// Multiplies outgoing damage by `1 + bonus` for skills tagged `attribute`.
    Affinity { attribute: String, bonus: f32 },

    /// Multiplies outgoing damage by `1 + bonus` when the defender's HP
    /// ratio is at or below `threshold`.
    Executioner { threshold: f32, bonus: f32 },
}

impl Perk for PerkKind {
    fn name(&self) -> &str {
        let name: &'static str = self.into();
        name
    }

    fn on_gauge_gain(&self, _unit: &Unit, gain: f32) -> f32 {
        match self {
            PerkKind::Haste { factor } => gain * factor,
            _ => gain,
        }
    }

    fn on_modify_damage(&self, _attacker: &Unit, defender: &Unit, skill: &Skill, damage: f32) -> f32 {
        match self {
            PerkKind::Overpower { bonus } => damage * (1.0 + bonus),
            PerkKind::Affinity { attribute, bonus } if *attribute == skill.attribute => {
                damage * (1.0 + bonus)
            }
            PerkKind::Executioner { threshold, bonus }
                if defender.stats.hp_ratio() <= *threshold =>
            {
                damage * (1.0 + bonus)
            }
            _ => damage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::SkillCategory;
    use crate::stats::StatBlock;

    fn unit(hp: i32) -> Unit {
        Unit::new("u", StatBlock::new(100, 10.0, 100).with_current_hp(hp))
    }

    fn skill(attribute: &str) -> Skill {
        Skill::new("s", "S", SkillCategory::Basic, 100.0, 1.0, attribute)
    }

    #[test]
    fn haste_scales_gauge_gain_only() {
        let perk = PerkKind::Haste { factor: 1.5 };
        let u = unit(100);
        assert_eq!(perk.on_gauge_gain(&u, 10.0), 15.0);
        assert_eq!(perk.on_modify_damage(&u, &u, &skill("Fire"), 10.0), 10.0);
    }

    #[test]
    fn affinity_requires_matching_attribute() {
        let perk = PerkKind::Affinity {
            attribute: "Fire".into(),
            bonus: 0.5,
        };
        let u = unit(100);
        assert_eq!(perk.on_modify_damage(&u, &u, &skill("Fire"), 100.0), 150.0);
        assert_eq!(perk.on_modify_damage(&u, &u, &skill("Magic"), 100.0), 100.0);
    }

    #[test]
    fn executioner_checks_defender_hp_ratio() {
        let perk = PerkKind::Executioner {
            threshold: 0.3,
            bonus: 1.0,
        };
        let attacker = unit(100);
        assert_eq!(perk.on_modify_damage(&attacker, &unit(30), &skill("X"), 50.0), 100.0);
        assert_eq!(perk.on_modify_damage(&attacker, &unit(31), &skill("X"), 50.0), 50.0);
    }

    #[test]
    fn names_are_snake_case() {
        assert_eq!(PerkKind::Passthrough.name(), "passthrough");
        assert_eq!(PerkKind::Overpower { bonus: 0.1 }.name(), "overpower");
    }
}
