//! High-level battle orchestrator.
//!
//! The runtime owns the roster for the duration of a battle, drives the
//! gauge scheduler one tick per loop pass, and resolves ready units one at a
//! time. Clients configure it through [`BattleRuntimeBuilder`].

use std::mem;
use std::sync::Arc;
use std::time::Duration;

use battle_core::{BattleConfig, GaugeScheduler, Roster, Unit};
use tracing::{debug, info};

use crate::api::{
    DecisionSource, NullPresentationSink, PresentationSink, Result, RuntimeError,
};
use crate::pipeline::{self, TurnContext};
use crate::report::{BattleOutcome, BattleReport, TurnRecord};

/// Runtime configuration shared across the loop and the pipeline.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    /// Game time advanced per loop pass.
    pub tick_delta: f32,
    /// Stall guard; `None` lets a battle that cannot end run forever.
    pub max_ticks: Option<u64>,
    /// Applied to both decision points.
    pub decision_timeout: Option<Duration>,
}

impl RuntimeConfig {
    pub const DEFAULT_TICK_DELTA: f32 = 1.0 / 60.0;
    pub const DEFAULT_MAX_TICKS: u64 = 1_000_000;
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            tick_delta: Self::DEFAULT_TICK_DELTA,
            max_ticks: Some(Self::DEFAULT_MAX_TICKS),
            decision_timeout: None,
        }
    }
}

/// Runs one battle to completion.
pub struct BattleRuntime {
    config: RuntimeConfig,
    roster: Roster,
    decisions: Arc<dyn DecisionSource>,
    sink: Arc<dyn PresentationSink>,
    ticks: u64,
    turns: Vec<TurnRecord>,
    initialized: bool,
}

impl BattleRuntime {
    /// Create a new runtime builder
    pub fn builder() -> BattleRuntimeBuilder {
        BattleRuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Loop passes processed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Releases the roster in its final state.
    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Runs loop passes until one side is wiped.
    ///
    /// A roster that is already decided ends without processing a tick.
    pub async fn run(&mut self) -> Result<BattleReport> {
        info!(
            allies = self.roster.allies().len(),
            enemies = self.roster.enemies().len(),
            tick_delta = self.config.tick_delta,
            "battle started"
        );

        loop {
            if let Some(outcome) = self.step().await? {
                return Ok(self.finish(outcome));
            }
        }
    }

    /// Processes one loop pass: a gauge tick, then every unit that is ready
    /// at the start of the pass, in roster order.
    ///
    /// Returns the outcome as soon as a side is wiped, without resolving the
    /// remaining ready units.
    pub async fn step(&mut self) -> Result<Option<BattleOutcome>> {
        self.ensure_initialized();

        if let Some(winner) = self.roster.winner() {
            return Ok(Some(BattleOutcome::from_winner(winner)));
        }

        if let Some(max_ticks) = self.config.max_ticks
            && self.ticks >= max_ticks
        {
            return Err(RuntimeError::TickLimitExceeded { max_ticks });
        }

        tokio::task::yield_now().await;
        self.ticks += 1;

        let sink = &*self.sink;
        GaugeScheduler::advance_with(&mut self.roster, self.config.tick_delta, |_, unit, value| {
            sink.on_gauge_changed(unit, value);
        });

        for slot in GaugeScheduler::ready_slots(&self.roster) {
            if self.roster.unit(slot).is_none_or(Unit::is_dead) {
                continue;
            }

            let ctx = TurnContext {
                decisions: &*self.decisions,
                sink,
                battle: &self.config.battle,
                decision_timeout: self.config.decision_timeout,
                tick: self.ticks,
            };
            let record = pipeline::resolve_turn(&mut self.roster, slot, ctx).await?;
            sink.on_turn_resolved(&record);
            self.turns.push(record);

            if let Some(winner) = self.roster.winner() {
                return Ok(Some(BattleOutcome::from_winner(winner)));
            }
        }

        Ok(None)
    }

    fn ensure_initialized(&mut self) {
        if mem::replace(&mut self.initialized, true) {
            return;
        }
        let all: Vec<&Unit> = self.roster.iter().map(|(_, unit)| unit).collect();
        self.sink
            .initialize_roster(&all, self.roster.allies(), self.roster.enemies());
        debug!(units = all.len(), "roster handed to presentation");
    }

    fn finish(&mut self, outcome: BattleOutcome) -> BattleReport {
        let report = BattleReport {
            outcome,
            ticks: self.ticks,
            turns: mem::take(&mut self.turns),
        };
        info!(
            %outcome,
            ticks = report.ticks,
            turns = report.turns.len(),
            "battle finished"
        );
        self.sink.on_battle_ended(&report);
        report
    }
}

/// Builder for [`BattleRuntime`] with flexible configuration.
pub struct BattleRuntimeBuilder {
    config: RuntimeConfig,
    roster: Option<Roster>,
    decisions: Option<Arc<dyn DecisionSource>>,
    sink: Option<Arc<dyn PresentationSink>>,
}

impl BattleRuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            roster: None,
            decisions: None,
            sink: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the roster to fight with (required)
    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = Some(roster);
        self
    }

    /// Set the decision source (required)
    pub fn decision_source(mut self, decisions: impl DecisionSource + 'static) -> Self {
        self.decisions = Some(Arc::new(decisions));
        self
    }

    pub fn shared_decision_source(mut self, decisions: Arc<dyn DecisionSource>) -> Self {
        self.decisions = Some(decisions);
        self
    }

    /// Set the presentation sink (defaults to [`NullPresentationSink`])
    pub fn presentation_sink(mut self, sink: impl PresentationSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    pub fn shared_presentation_sink(mut self, sink: Arc<dyn PresentationSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<BattleRuntime> {
        let delta = self.config.tick_delta;
        if !(delta.is_finite() && delta > 0.0) {
            return Err(RuntimeError::InvalidTickDelta(delta));
        }

        let roster = self.roster.ok_or(RuntimeError::MissingRoster)?;
        let decisions = self.decisions.ok_or(RuntimeError::MissingDecisionSource)?;
        let sink = self
            .sink
            .unwrap_or_else(|| Arc::new(NullPresentationSink));

        Ok(BattleRuntime {
            config: self.config,
            roster,
            decisions,
            sink,
            ticks: 0,
            turns: Vec::new(),
            initialized: false,
        })
    }
}
