//! The two sides of a battle and stable addressing into them.
//!
//! Roster order is the deterministic iteration order of the battle: every
//! ally in insertion order, then every enemy in insertion order. Units that
//! become ready on the same tick act in this order.

use std::collections::HashSet;

use crate::error::{BattleError, ErrorSeverity};
use crate::unit::{Unit, UnitId};

/// Which team a unit fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Allies,
    Enemies,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Allies => Side::Enemies,
            Side::Enemies => Side::Allies,
        }
    }
}

/// Stable address of a unit: its side and position within that side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    pub side: Side,
    pub index: usize,
}

impl Slot {
    pub const fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }
}

/// Errors produced while assembling a roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("{0} side has no units")]
    EmptySide(Side),

    #[error("unit id '{0}' appears more than once")]
    DuplicateId(UnitId),

    #[error("unit '{id}' has non-positive max HP {max_hp}")]
    NonPositiveMaxHp { id: UnitId, max_hp: i32 },

    #[error("unit '{id}' starts with expired modifiers")]
    ExpiredModifier { id: UnitId },
}

impl BattleError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RosterError::ExpiredModifier { .. } => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RosterError::EmptySide(_) => "roster_empty_side",
            RosterError::DuplicateId(_) => "roster_duplicate_id",
            RosterError::NonPositiveMaxHp { .. } => "roster_non_positive_max_hp",
            RosterError::ExpiredModifier { .. } => "roster_expired_modifier",
        }
    }
}

/// Every unit in a battle, split by side.
#[derive(Debug)]
pub struct Roster {
    allies: Vec<Unit>,
    enemies: Vec<Unit>,
}

impl Roster {
    /// Assembles a roster, validating it for battle.
    ///
    /// Both sides must be non-empty, ids must be unique across the whole
    /// roster, and every unit must have positive max HP.
    pub fn new(allies: Vec<Unit>, enemies: Vec<Unit>) -> Result<Self, RosterError> {
        if allies.is_empty() {
            return Err(RosterError::EmptySide(Side::Allies));
        }
        if enemies.is_empty() {
            return Err(RosterError::EmptySide(Side::Enemies));
        }

        let mut seen = HashSet::new();
        for unit in allies.iter().chain(enemies.iter()) {
            if !seen.insert(&unit.id) {
                return Err(RosterError::DuplicateId(unit.id.clone()));
            }
            if unit.stats.max_hp <= 0 {
                return Err(RosterError::NonPositiveMaxHp {
                    id: unit.id.clone(),
                    max_hp: unit.stats.max_hp,
                });
            }
            if unit.ledger.has_expired() {
                return Err(RosterError::ExpiredModifier {
                    id: unit.id.clone(),
                });
            }
        }

        Ok(Self { allies, enemies })
    }

    pub fn allies(&self) -> &[Unit] {
        &self.allies
    }

    pub fn enemies(&self) -> &[Unit] {
        &self.enemies
    }

    pub fn side(&self, side: Side) -> &[Unit] {
        match side {
            Side::Allies => &self.allies,
            Side::Enemies => &self.enemies,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut [Unit] {
        match side {
            Side::Allies => &mut self.allies,
            Side::Enemies => &mut self.enemies,
        }
    }

    pub fn unit(&self, slot: Slot) -> Option<&Unit> {
        self.side(slot.side).get(slot.index)
    }

    pub fn unit_mut(&mut self, slot: Slot) -> Option<&mut Unit> {
        self.side_mut(slot.side).get_mut(slot.index)
    }

    /// Borrows two distinct units mutably at once.
    ///
    /// Returns `None` if either slot is out of range or both name the same unit.
    pub fn pair_mut(&mut self, a: Slot, b: Slot) -> Option<(&mut Unit, &mut Unit)> {
        if a == b {
            return None;
        }

        if a.side != b.side {
            let (allies, enemies) = (&mut self.allies, &mut self.enemies);
            let (first, second) = match a.side {
                Side::Allies => (allies.get_mut(a.index)?, enemies.get_mut(b.index)?),
                Side::Enemies => (enemies.get_mut(a.index)?, allies.get_mut(b.index)?),
            };
            return Some((first, second));
        }

        let units = self.side_mut(a.side);
        if a.index >= units.len() || b.index >= units.len() {
            return None;
        }
        if a.index < b.index {
            let (left, right) = units.split_at_mut(b.index);
            Some((&mut left[a.index], &mut right[0]))
        } else {
            let (left, right) = units.split_at_mut(a.index);
            Some((&mut right[0], &mut left[b.index]))
        }
    }

    /// Every slot in roster order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        let allies = (0..self.allies.len()).map(|i| Slot::new(Side::Allies, i));
        let enemies = (0..self.enemies.len()).map(|i| Slot::new(Side::Enemies, i));
        allies.chain(enemies)
    }

    /// Every unit with its slot, in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &Unit)> {
        let allies = self
            .allies
            .iter()
            .enumerate()
            .map(|(i, u)| (Slot::new(Side::Allies, i), u));
        let enemies = self
            .enemies
            .iter()
            .enumerate()
            .map(|(i, u)| (Slot::new(Side::Enemies, i), u));
        allies.chain(enemies)
    }

    /// Mutable counterpart of [`Roster::iter`].
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Slot, &mut Unit)> {
        let allies = self
            .allies
            .iter_mut()
            .enumerate()
            .map(|(i, u)| (Slot::new(Side::Allies, i), u));
        let enemies = self
            .enemies
            .iter_mut()
            .enumerate()
            .map(|(i, u)| (Slot::new(Side::Enemies, i), u));
        allies.chain(enemies)
    }

    /// Finds the slot of the unit with `id` within `side`.
    pub fn find_in(&self, side: Side, id: &UnitId) -> Option<Slot> {
        self.side(side)
            .iter()
            .position(|u| &u.id == id)
            .map(|index| Slot::new(side, index))
    }

    /// Finds the slot of the unit with `id` anywhere in the roster.
    pub fn find(&self, id: &UnitId) -> Option<Slot> {
        self.find_in(Side::Allies, id)
            .or_else(|| self.find_in(Side::Enemies, id))
    }

    /// Returns true once every unit on `side` is dead.
    pub fn is_wiped(&self, side: Side) -> bool {
        self.side(side).iter().all(Unit::is_dead)
    }

    /// The surviving side once the other one is wiped.
    pub fn winner(&self) -> Option<Side> {
        if self.is_wiped(Side::Enemies) {
            Some(Side::Allies)
        } else if self.is_wiped(Side::Allies) {
            Some(Side::Enemies)
        } else {
            None
        }
    }

    /// Total number of units on both sides.
    pub fn len(&self) -> usize {
        self.allies.len() + self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Releases the units, allies first.
    pub fn into_sides(self) -> (Vec<Unit>, Vec<Unit>) {
        (self.allies, self.enemies)
    }
}
