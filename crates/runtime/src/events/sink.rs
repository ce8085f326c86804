//! Presentation sink that mirrors the battle onto an [`EventBus`].

use std::sync::Arc;

use async_trait::async_trait;
use battle_core::{Skill, Unit};

use super::bus::EventBus;
use super::types::{BattleEvent, UnitSnapshot};
use crate::api::PresentationSink;
use crate::report::{BattleReport, TurnRecord};

/// Publishes every notification as a [`BattleEvent`].
///
/// An optional inner sink receives the same calls afterwards; its effect
/// playback is what the turn waits on.
#[derive(Clone)]
pub struct EventSink {
    bus: EventBus,
    inner: Option<Arc<dyn PresentationSink>>,
}

impl EventSink {
    pub fn new(bus: EventBus) -> Self {
        Self { bus, inner: None }
    }

    /// Forwards every call to `inner` after publishing.
    pub fn with_inner(mut self, inner: Arc<dyn PresentationSink>) -> Self {
        self.inner = Some(inner);
        self
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }
}

#[async_trait]
impl PresentationSink for EventSink {
    fn initialize_roster(&self, all: &[&Unit], allies: &[Unit], enemies: &[Unit]) {
        self.bus.publish(BattleEvent::RosterInitialized {
            allies: allies.iter().map(UnitSnapshot::from).collect(),
            enemies: enemies.iter().map(UnitSnapshot::from).collect(),
        });
        if let Some(inner) = &self.inner {
            inner.initialize_roster(all, allies, enemies);
        }
    }

    fn on_gauge_changed(&self, unit: &Unit, value: f32) {
        self.bus.publish(BattleEvent::GaugeChanged {
            unit: unit.id.clone(),
            value,
        });
        if let Some(inner) = &self.inner {
            inner.on_gauge_changed(unit, value);
        }
    }

    async fn play_resolution_effect(&self, actor: &Unit, skill: &Skill, target: &Unit) {
        self.bus.publish(BattleEvent::EffectPlayed {
            actor: actor.id.clone(),
            skill: skill.id.clone(),
            target: target.id.clone(),
        });
        match &self.inner {
            Some(inner) => inner.play_resolution_effect(actor, skill, target).await,
            None => tokio::task::yield_now().await,
        }
    }

    fn on_turn_resolved(&self, record: &TurnRecord) {
        self.bus
            .publish(BattleEvent::TurnResolved(Box::new(record.clone())));
        if let Some(inner) = &self.inner {
            inner.on_turn_resolved(record);
        }
    }

    fn on_battle_ended(&self, report: &BattleReport) {
        self.bus.publish(BattleEvent::BattleEnded {
            outcome: report.outcome,
            ticks: report.ticks,
            turns: report.turns.len(),
        });
        if let Some(inner) = &self.inner {
            inner.on_battle_ended(report);
        }
    }
}
