//! Deterministic battle rules shared by the runtime and content loaders.
//!
//! `battle-core` defines the canonical data model of a gauge-driven battle
//! (stats, modifiers, perks, skills, units, rosters) together with the pure
//! pieces of turn resolution: the gauge scheduler and damage math. Nothing in
//! this crate suspends, logs, or touches the filesystem; the async turn
//! pipeline in the runtime crate drives these APIs.
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod modifier;
pub mod perk;
pub mod roster;
pub mod skill;
pub mod stats;
pub mod unit;

pub use combat::{
    DamageBreakdown, HitOutcome, MIN_DAMAGE, mitigate, pre_mitigation_damage, settle_damage,
};
pub use config::{BattleConfig, StackingPolicy};
pub use engine::{GaugeChange, GaugeScheduler};
pub use error::{BattleError, ErrorSeverity};
pub use ledger::{Applied, Ledger, LedgerError};
pub use modifier::{
    ModifierInstance, ModifierKind, Polarity, StatKind, TargetScope, ValueTransform,
};
pub use perk::{Perk, PerkKind, PerkSet};
pub use roster::{Roster, RosterError, Side, Slot};
pub use skill::{Skill, SkillCategory};
pub use stats::{Resistances, StatBlock};
pub use unit::{GAUGE_MAX, GAUGE_MIN, Unit, UnitId};
