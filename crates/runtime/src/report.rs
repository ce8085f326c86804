//! What a finished battle hands back to its caller.

use battle_core::{Applied, DamageBreakdown, HitOutcome, Side, UnitId};
use serde::{Deserialize, Serialize};

/// A skill effect that landed on the target's ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppliedEffect {
    pub id: String,
    pub applied: Applied,
}

/// One resolved turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Loop pass during which the turn resolved (1-based).
    pub tick: u64,
    pub actor: UnitId,
    pub skill: String,
    pub target: UnitId,
    pub damage: DamageBreakdown,
    pub hit: HitOutcome,
    pub effect: Option<AppliedEffect>,
    /// Modifier ids that expired on the actor when the turn ticked.
    pub expired_on_actor: Vec<String>,
    pub expired_on_target: Vec<String>,
}

/// Which side won.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    /// Every enemy is dead.
    Victory,
    /// Every ally is dead.
    Defeat,
}

impl BattleOutcome {
    pub fn from_winner(side: Side) -> Self {
        match side {
            Side::Allies => BattleOutcome::Victory,
            Side::Enemies => BattleOutcome::Defeat,
        }
    }

    pub fn winner(self) -> Side {
        match self {
            BattleOutcome::Victory => Side::Allies,
            BattleOutcome::Defeat => Side::Enemies,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    /// Loop passes processed, including the one that ended the battle.
    pub ticks: u64,
    pub turns: Vec<TurnRecord>,
}

impl BattleReport {
    /// Total HP removed by `actor` across the battle.
    pub fn damage_dealt_by(&self, actor: &UnitId) -> i64 {
        self.turns
            .iter()
            .filter(|turn| &turn.actor == actor)
            .map(|turn| i64::from(turn.hit.dealt))
            .sum()
    }

    pub fn turns_by<'a>(&'a self, actor: &'a UnitId) -> impl Iterator<Item = &'a TurnRecord> {
        self.turns.iter().filter(move |turn| &turn.actor == actor)
    }
}
