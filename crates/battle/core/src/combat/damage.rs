//! Damage calculation and application.

use crate::skill::Skill;
use crate::unit::Unit;

/// Smallest amount of damage a landed hit can deal.
pub const MIN_DAMAGE: i32 = 1;

/// Attacker-side damage before resistance: `(raw, after_perks)`.
pub fn pre_mitigation_damage(attacker: &Unit, defender: &Unit, skill: &Skill) -> (f32, f32) {
    let raw = attacker.stats.attack as f32 * skill.base_power;
    let after_perks = attacker
        .perks
        .modify_damage(attacker, defender, skill, raw);
    (raw, after_perks)
}

/// Applies a resistance multiplier: `damage × (1 − resistance)`.
pub fn mitigate(damage: f32, resistance: f32) -> f32 {
    damage * (1.0 - resistance)
}

/// Rounds to the nearest integer (ties to even) and floors at [`MIN_DAMAGE`].
///
/// Non-numeric input settles at the minimum.
pub fn settle_damage(value: f32) -> i32 {
    (value.round_ties_even() as i32).max(MIN_DAMAGE)
}

/// Pure, attacker-to-defender part of a strike.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageBreakdown {
    pub raw: f32,
    pub after_perks: f32,
    pub resistance: f32,
    pub mitigated: f32,
}

impl DamageBreakdown {
    /// Runs raw damage, the attacker's damage hooks, and the defender's resistance.
    pub fn compute(attacker: &Unit, defender: &Unit, skill: &Skill) -> Self {
        let (raw, after_perks) = pre_mitigation_damage(attacker, defender, skill);
        let resistance = defender.stats.resistance(&skill.attribute);
        Self {
            raw,
            after_perks,
            resistance,
            mitigated: mitigate(after_perks, resistance),
        }
    }
}

/// What the defender's side of a strike did.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitOutcome {
    /// Mitigated damage handed to the defender.
    pub incoming: f32,
    /// Value after the defender's ledger chain.
    pub after_ledger: f32,
    /// HP actually removed.
    pub dealt: i32,
    pub remaining_hp: i32,
}
