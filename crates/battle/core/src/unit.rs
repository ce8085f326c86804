//! The battle actor.

use std::fmt;

use crate::combat::{HitOutcome, settle_damage};
use crate::config::StackingPolicy;
use crate::ledger::{Applied, Ledger, LedgerError};
use crate::modifier::{ModifierInstance, ValueTransform};
use crate::perk::{Perk, PerkSet};
use crate::skill::Skill;
use crate::stats::StatBlock;

/// Lower bound of the action gauge.
pub const GAUGE_MIN: f32 = 0.0;
/// Upper bound of the action gauge; a unit at this value is ready to act.
pub const GAUGE_MAX: f32 = 100.0;

/// Unique identifier of a unit within one battle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UnitId(pub String);

impl UnitId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for UnitId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A combatant.
///
/// A unit exclusively owns its stats, skills, perks, and ledger. Units are
/// never removed from a battle: death is the state `current_hp <= 0`, and dead
/// units stay addressable while being skipped by scheduling.
#[derive(Debug)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub stats: StatBlock,
    pub skills: Vec<Skill>,
    pub perks: PerkSet,
    pub ledger: Ledger,
    pub tags: Vec<String>,
    gauge: f32,
}

impl Unit {
    /// Creates a unit with an empty gauge, no skills, perks, or modifiers.
    pub fn new(id: impl Into<UnitId>, stats: StatBlock) -> Self {
        let id = id.into();
        Self {
            name: id.0.clone(),
            id,
            stats,
            skills: Vec::new(),
            perks: PerkSet::new(),
            ledger: Ledger::new(),
            tags: Vec::new(),
            gauge: GAUGE_MIN,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn with_skills(mut self, skills: impl IntoIterator<Item = Skill>) -> Self {
        self.skills.extend(skills);
        self
    }

    pub fn with_perk(mut self, perk: impl Perk + 'static) -> Self {
        self.perks.push(perk);
        self
    }

    pub fn with_perks(mut self, perks: PerkSet) -> Self {
        self.perks = perks;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the starting gauge, clamped into `[GAUGE_MIN, GAUGE_MAX]`.
    pub fn with_gauge(mut self, gauge: f32) -> Self {
        self.gauge = clamp_gauge(gauge, GAUGE_MIN);
        self
    }

    pub fn gauge(&self) -> f32 {
        self.gauge
    }

    pub fn is_ready(&self) -> bool {
        self.gauge >= GAUGE_MAX
    }

    pub fn is_dead(&self) -> bool {
        self.stats.current_hp <= 0
    }

    /// Looks up one of this unit's skills by id.
    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    /// Adds `raw` gauge after threading it through every perk's gauge hook.
    ///
    /// Returns the new gauge if it changed. The result is clamped into
    /// `[GAUGE_MIN, GAUGE_MAX]`; a non-numeric perk result leaves the gauge
    /// untouched.
    pub fn gain_gauge(&mut self, raw: f32) -> Option<f32> {
        let gain = self.perks.gauge_gain(self, raw);
        let next = clamp_gauge(self.gauge + gain, self.gauge);
        self.set_gauge(next)
    }

    /// Empties the gauge. Returns the new value if it changed.
    pub fn reset_gauge(&mut self) -> Option<f32> {
        self.set_gauge(GAUGE_MIN)
    }

    fn set_gauge(&mut self, value: f32) -> Option<f32> {
        if value == self.gauge {
            return None;
        }
        self.gauge = value;
        Some(value)
    }

    /// Records a modifier on this unit's ledger.
    pub fn apply_modifier(
        &mut self,
        instance: ModifierInstance,
        policy: StackingPolicy,
    ) -> Result<Applied, LedgerError> {
        self.ledger.apply(instance, policy)
    }

    /// Consumes one turn of every ledger entry, returning the expired ones.
    pub fn tick_modifiers(&mut self) -> Vec<ModifierInstance> {
        self.ledger.tick()
    }

    /// Receives mitigated damage.
    ///
    /// The ledger chain runs on the unrounded value; the result is then
    /// rounded and floored at the minimum hit before HP is lowered.
    pub fn take_hit(&mut self, mitigated: f32) -> HitOutcome {
        let after_ledger = self.ledger.transform(mitigated);
        let dealt = settle_damage(after_ledger);
        self.stats.lose_hp(dealt);

        HitOutcome {
            incoming: mitigated,
            after_ledger,
            dealt,
            remaining_hp: self.stats.current_hp,
        }
    }
}

fn clamp_gauge(value: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(GAUGE_MIN, GAUGE_MAX)
    }
}
