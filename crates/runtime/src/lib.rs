//! Async orchestration for gauge-driven battles.
//!
//! This crate wires the pure rules of `battle-core` to the collaborators a
//! battle suspends on. Consumers build a [`BattleRuntime`] around a roster, a
//! [`DecisionSource`], and a [`PresentationSink`], then `run()` it to a
//! [`BattleReport`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the battle loop and builder
//! - [`pipeline`] resolves one unit's turn
//! - [`api`] exposes the traits and errors downstream clients interact with
//! - [`events`] provides a topic-based event bus and the sink that feeds it
//! - [`report`] holds what a finished battle returns
pub mod api;
pub mod events;
pub mod pipeline;
pub mod report;
pub mod runtime;

pub use api::{
    DebugDecisionSource, DebugPresentationSink, DecisionKind, DecisionSource,
    NullPresentationSink, PresentationSink, Result, RuntimeError,
};
pub use events::{BattleEvent, EventBus, EventSink, Topic, UnitSnapshot};
pub use pipeline::{TurnContext, resolve_turn};
pub use report::{AppliedEffect, BattleOutcome, BattleReport, TurnRecord};
pub use runtime::{BattleRuntime, BattleRuntimeBuilder, RuntimeConfig};
