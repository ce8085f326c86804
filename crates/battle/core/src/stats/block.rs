//! Numeric attributes of a unit.

use super::Resistances;

/// A unit's combat attributes.
///
/// `current_hp` starts at `max_hp` and is only ever lowered by damage.
/// It may drop below zero; a unit with `current_hp <= 0` is dead.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub attack: i32,
    /// Gauge gained per second of battle time.
    pub gauge_speed: f32,
    pub current_hp: i32,
    pub max_hp: i32,
    pub resistances: Resistances,
}

impl StatBlock {
    /// Creates a stat block at full health with no resistances.
    pub fn new(attack: i32, gauge_speed: f32, max_hp: i32) -> Self {
        Self {
            attack,
            gauge_speed,
            current_hp: max_hp,
            max_hp,
            resistances: Resistances::new(),
        }
    }

    pub fn with_resistances(mut self, resistances: Resistances) -> Self {
        self.resistances = resistances;
        self
    }

    /// Overrides the starting HP. Only used at construction time.
    pub fn with_current_hp(mut self, current_hp: i32) -> Self {
        self.current_hp = current_hp;
        self
    }

    /// Resistance multiplier for a damage attribute (neutral when unmapped).
    pub fn resistance(&self, attribute: &str) -> f32 {
        self.resistances.get(attribute)
    }

    /// Remaining HP as a fraction of max HP, `0.0` when max HP is not positive.
    pub fn hp_ratio(&self) -> f32 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        self.current_hp.max(0) as f32 / self.max_hp as f32
    }

    /// Lowers current HP by `amount`, saturating at `i32::MIN`.
    pub fn lose_hp(&mut self, amount: i32) {
        self.current_hp = self.current_hp.saturating_sub(amount.max(0));
    }
}
