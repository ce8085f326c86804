//! Unified error types surfaced by the runtime API.
//!
//! Every failure here ends the current battle. Contract violations by a
//! [`DecisionSource`](super::DecisionSource) are reported with the ids
//! involved so clients can tell which collaborator misbehaved.
use std::time::Duration;

use battle_core::{BattleError, ErrorSeverity, LedgerError, RosterError, Slot, UnitId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("decision source chose no skill for {actor}")]
    NoSkillChosen { actor: UnitId },

    #[error("skill '{skill}' chosen for {actor} is not one of its skills")]
    SkillNotOwned { actor: UnitId, skill: String },

    #[error("decision source chose no target for {actor}")]
    NoTargetChosen { actor: UnitId },

    #[error("target {target} chosen for {actor} is not in the candidate set")]
    TargetNotCandidate { actor: UnitId, target: UnitId },

    #[error("{kind} decision for {actor} timed out after {timeout:?}")]
    DecisionTimeout {
        actor: UnitId,
        kind: DecisionKind,
        timeout: Duration,
    },

    #[error("battle did not finish within {max_ticks} ticks")]
    TickLimitExceeded { max_ticks: u64 },

    #[error("no unit at {0:?}")]
    UnknownSlot(Slot),

    #[error("runtime requires a roster before building")]
    MissingRoster,

    #[error("runtime requires a decision source before building")]
    MissingDecisionSource,

    #[error("tick delta must be finite and positive, got {0}")]
    InvalidTickDelta(f32),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

impl BattleError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::NoSkillChosen { .. }
            | RuntimeError::SkillNotOwned { .. }
            | RuntimeError::NoTargetChosen { .. }
            | RuntimeError::TargetNotCandidate { .. }
            | RuntimeError::DecisionTimeout { .. } => ErrorSeverity::Validation,
            RuntimeError::TickLimitExceeded { .. } => ErrorSeverity::Fatal,
            RuntimeError::UnknownSlot(_) => ErrorSeverity::Internal,
            RuntimeError::MissingRoster
            | RuntimeError::MissingDecisionSource
            | RuntimeError::InvalidTickDelta(_) => ErrorSeverity::Validation,
            RuntimeError::Ledger(err) => err.severity(),
            RuntimeError::Roster(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::NoSkillChosen { .. } => "runtime_no_skill",
            RuntimeError::SkillNotOwned { .. } => "runtime_skill_not_owned",
            RuntimeError::NoTargetChosen { .. } => "runtime_no_target",
            RuntimeError::TargetNotCandidate { .. } => "runtime_target_not_candidate",
            RuntimeError::DecisionTimeout { .. } => "runtime_decision_timeout",
            RuntimeError::TickLimitExceeded { .. } => "runtime_tick_limit",
            RuntimeError::UnknownSlot(_) => "runtime_unknown_slot",
            RuntimeError::MissingRoster => "runtime_missing_roster",
            RuntimeError::MissingDecisionSource => "runtime_missing_decision_source",
            RuntimeError::InvalidTickDelta(_) => "runtime_invalid_tick_delta",
            RuntimeError::Ledger(err) => err.error_code(),
            RuntimeError::Roster(err) => err.error_code(),
        }
    }
}

/// Which decision point suspended.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DecisionKind {
    Skill,
    Target,
}
