//! Event types for different topics.

use battle_core::{Unit, UnitId};
use serde::{Deserialize, Serialize};

use crate::report::{BattleOutcome, TurnRecord};

/// Read-only view of a unit at the moment an event was published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSnapshot {
    pub id: UnitId,
    pub name: String,
    pub current_hp: i32,
    pub max_hp: i32,
    pub gauge: f32,
}

impl From<&Unit> for UnitSnapshot {
    fn from(unit: &Unit) -> Self {
        Self {
            id: unit.id.clone(),
            name: unit.name.clone(),
            current_hp: unit.stats.current_hp,
            max_hp: unit.stats.max_hp,
            gauge: unit.gauge(),
        }
    }
}

/// Events published by the battle runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BattleEvent {
    /// Roster handed to the presentation layer before the first tick.
    RosterInitialized {
        allies: Vec<UnitSnapshot>,
        enemies: Vec<UnitSnapshot>,
    },

    GaugeChanged { unit: UnitId, value: f32 },

    /// The resolution effect for a turn started playing.
    EffectPlayed {
        actor: UnitId,
        skill: String,
        target: UnitId,
    },

    TurnResolved(Box<TurnRecord>),

    BattleEnded {
        outcome: BattleOutcome,
        ticks: u64,
        turns: usize,
    },
}
