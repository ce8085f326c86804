//! Asynchronous collaborators a battle suspends on.
//!
//! Runtime users plug in a [`DecisionSource`] (player input, scripted
//! fixtures, or AI policies) and a [`PresentationSink`] (UI, animation, event
//! streaming). The battle never proceeds past a suspension point until the
//! collaborator answers.
use std::time::Duration;

use async_trait::async_trait;
use battle_core::{GAUGE_MAX, Skill, Unit, UnitId};

use crate::report::{BattleReport, TurnRecord};

/// Source of skill and target choices.
///
/// Answers must be drawn from what the runtime offers: a skill the actor
/// owns and a candidate the runtime listed. Anything else aborts the battle
/// with a typed error.
#[async_trait]
pub trait DecisionSource: Send + Sync {
    /// Choose the skill `actor` uses this turn.
    ///
    /// Gauge cost is not enforced by the runtime; implementations may
    /// consult [`Skill::is_affordable`].
    async fn choose_skill(&self, actor: &Unit) -> Option<Skill>;

    /// Choose a target among `candidates` (the opposing side, dead units
    /// included).
    async fn choose_target(&self, actor: &Unit, candidates: &[&Unit]) -> Option<UnitId>;
}

/// Receiver of everything a battle wants shown.
///
/// Only [`play_resolution_effect`](Self::play_resolution_effect) suspends.
/// The synchronous notifications are called inline with the mutation that
/// caused them and must return promptly.
#[async_trait]
pub trait PresentationSink: Send + Sync {
    /// Called exactly once before the first tick.
    fn initialize_roster(&self, _all: &[&Unit], _allies: &[Unit], _enemies: &[Unit]) {}

    fn on_gauge_changed(&self, _unit: &Unit, _value: f32) {}

    /// Plays the skill effect; the turn resumes once this returns.
    async fn play_resolution_effect(&self, actor: &Unit, skill: &Skill, target: &Unit);

    fn on_turn_resolved(&self, _record: &TurnRecord) {}

    fn on_battle_ended(&self, _report: &BattleReport) {}
}

/// Picks the actor's first skill and the first living candidate.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugDecisionSource;

#[async_trait]
impl DecisionSource for DebugDecisionSource {
    async fn choose_skill(&self, actor: &Unit) -> Option<Skill> {
        let skill = actor.skills.first()?.clone();
        tracing::info!("[UI] {} picks {}", actor.name, skill.name);
        Some(skill)
    }

    async fn choose_target(&self, actor: &Unit, candidates: &[&Unit]) -> Option<UnitId> {
        let target = candidates.iter().find(|unit| !unit.is_dead())?;
        tracing::info!("[UI] {} targets {}", actor.name, target.name);
        Some(target.id.clone())
    }
}

/// Logs every notification; effects complete after a configurable delay.
#[derive(Debug, Default, Clone)]
pub struct DebugPresentationSink {
    effect_delay: Option<Duration>,
}

impl DebugPresentationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleeps for `delay` per effect instead of a single yield.
    pub fn with_effect_delay(mut self, delay: Duration) -> Self {
        self.effect_delay = Some(delay);
        self
    }
}

#[async_trait]
impl PresentationSink for DebugPresentationSink {
    fn initialize_roster(&self, all: &[&Unit], allies: &[Unit], enemies: &[Unit]) {
        tracing::info!(
            "[UI] roster initialized: {} units ({} allies, {} enemies)",
            all.len(),
            allies.len(),
            enemies.len()
        );
    }

    fn on_gauge_changed(&self, unit: &Unit, value: f32) {
        if value >= GAUGE_MAX {
            tracing::info!("[Gauge] {} is ready", unit.name);
        } else {
            tracing::trace!("[Gauge] {} at {:.1}", unit.name, value);
        }
    }

    async fn play_resolution_effect(&self, actor: &Unit, skill: &Skill, target: &Unit) {
        tracing::info!("[Anim] {} uses {} on {}", actor.name, skill.name, target.name);
        match self.effect_delay {
            Some(delay) => tokio::time::sleep(delay).await,
            None => tokio::task::yield_now().await,
        }
    }

    fn on_turn_resolved(&self, record: &TurnRecord) {
        tracing::info!(
            "[Damage] {} takes {} damage ({} HP left)",
            record.target,
            record.hit.dealt,
            record.hit.remaining_hp
        );
        if let Some(effect) = &record.effect {
            tracing::info!("[Buff] {} gains {} ({})", record.target, effect.id, effect.applied);
        }
        for expired in record.expired_on_actor.iter().chain(&record.expired_on_target) {
            tracing::info!("[Buff] {} wore off", expired);
        }
    }

    fn on_battle_ended(&self, report: &BattleReport) {
        tracing::info!(
            "[UI] battle over: {} after {} ticks and {} turns",
            report.outcome,
            report.ticks,
            report.turns.len()
        );
    }
}

/// Ignores every notification and completes effects immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresentationSink;

#[async_trait]
impl PresentationSink for NullPresentationSink {
    async fn play_resolution_effect(&self, _actor: &Unit, _skill: &Skill, _target: &Unit) {}
}

#[cfg(test)]
mod tests {
    use battle_core::{SkillCategory, StatBlock};

    use super::*;

    fn unit(id: &str, hp: i32) -> Unit {
        Unit::new(id, StatBlock::new(100, 10.0, 100).with_current_hp(hp))
    }

    #[tokio::test]
    async fn debug_source_skips_dead_candidates() {
        let actor = unit("rita", 100);
        let dead = unit("goblin", 0);
        let alive = unit("imp", 50);

        let target = DebugDecisionSource
            .choose_target(&actor, &[&dead, &alive])
            .await;
        assert_eq!(target, Some(UnitId::from("imp")));

        assert_eq!(DebugDecisionSource.choose_target(&actor, &[&dead]).await, None);
    }

    #[tokio::test]
    async fn debug_source_picks_first_skill() {
        let bare = unit("rita", 100);
        assert!(DebugDecisionSource.choose_skill(&bare).await.is_none());

        let armed = unit("fio", 100)
            .with_skill(Skill::new("basic", "Basic", SkillCategory::Basic, 100.0, 1.0, "Magic"))
            .with_skill(Skill::new("heavy", "Heavy", SkillCategory::Heavy, 100.0, 1.5, "Magic"));
        let skill = DebugDecisionSource.choose_skill(&armed).await.unwrap();
        assert_eq!(skill.id, "basic");
    }
}
