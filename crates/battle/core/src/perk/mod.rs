//! Passive capabilities invoked at fixed points of a unit's turn.
//!
//! Every perk exposes the same four hooks:
//!
//! | Hook | When | Result |
//! |---|---|---|
//! | [`Perk::on_gauge_gain`] | gauge scheduler, per eligible tick | transformed gain |
//! | [`Perk::before_skill`] | after skill selection | notification |
//! | [`Perk::on_modify_damage`] | after raw damage, before resistance | transformed damage |
//! | [`Perk::after_skill`] | after the effect plays | notification |
//!
//! A [`PerkSet`] invokes its perks in registration order. Value hooks are
//! chained: perk `i` receives perk `i - 1`'s output, so `[A, B]` composes
//! as `B(A(raw))`.
//!
//! Perks never own their unit. The unit is passed in as a parameter.

mod builtin;

pub use builtin::PerkKind;

use std::fmt;

use crate::skill::Skill;
use crate::unit::Unit;

/// A passive capability owned by exactly one unit.
///
/// All hooks default to identity / no-op, so implementations only override
/// the points they care about.
pub trait Perk: Send + Sync {
    /// Returns a human-readable name (used in logging and debugging).
    fn name(&self) -> &str;

    fn on_gauge_gain(&self, _unit: &Unit, gain: f32) -> f32 {
        gain
    }

    fn before_skill(&self, _unit: &Unit, _skill: &Skill) {}

    fn on_modify_damage(
        &self,
        _attacker: &Unit,
        _defender: &Unit,
        _skill: &Skill,
        damage: f32,
    ) -> f32 {
        damage
    }

    fn after_skill(&self, _unit: &Unit, _skill: &Skill) {}
}

/// Ordered perks of a single unit.
#[derive(Default)]
pub struct PerkSet {
    perks: Vec<Box<dyn Perk>>,
}

impl PerkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a perk after every existing one.
    pub fn push(&mut self, perk: impl Perk + 'static) {
        self.perks.push(Box::new(perk));
    }

    pub fn push_boxed(&mut self, perk: Box<dyn Perk>) {
        self.perks.push(perk);
    }

    /// Chains `on_gauge_gain` over every perk.
    pub fn gauge_gain(&self, unit: &Unit, raw: f32) -> f32 {
        self.perks
            .iter()
            .fold(raw, |gain, perk| perk.on_gauge_gain(unit, gain))
    }

    pub fn before_skill(&self, unit: &Unit, skill: &Skill) {
        for perk in &self.perks {
            perk.before_skill(unit, skill);
        }
    }

    /// Chains `on_modify_damage` over every perk.
    pub fn modify_damage(&self, attacker: &Unit, defender: &Unit, skill: &Skill, raw: f32) -> f32 {
        self.perks.iter().fold(raw, |damage, perk| {
            perk.on_modify_damage(attacker, defender, skill, damage)
        })
    }

    pub fn after_skill(&self, unit: &Unit, skill: &Skill) {
        for perk in &self.perks {
            perk.after_skill(unit, skill);
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.perks.iter().map(|p| p.name())
    }

    pub fn len(&self) -> usize {
        self.perks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.perks.is_empty()
    }
}

impl fmt::Debug for PerkSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl<P: Perk + 'static> FromIterator<P> for PerkSet {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        let mut set = Self::new();
        for perk in iter {
            set.push(perk);
        }
        set
    }
}
