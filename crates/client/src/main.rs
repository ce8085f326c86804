//! Battle simulator binary.
//!
//! Composition root that assembles:
//! 1. Content (data directory or built-in debug roster)
//! 2. Runtime via `BattleRuntime::builder()`
//! 3. Presentation: debug log sink, optionally mirrored to JSON lines
//!
//! # Examples
//!
//! ```bash
//! # Built-in roster
//! cargo run -p battle-client
//!
//! # Content from ./data, events streamed as JSON
//! BATTLE_DATA_DIR=data BATTLE_EVENTS_JSON=1 cargo run -p battle-client
//! ```

mod config;
mod logging;

use std::sync::Arc;

use anyhow::Result;
use battle_content::debug_roster;
use battle_core::{BattleConfig, Roster};
use battle_runtime::{
    BattleRuntime, DebugDecisionSource, DebugPresentationSink, EventBus, EventSink,
    PresentationSink, Topic,
};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::config::SimConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::setup_logging()?;

    let mut config = SimConfig::from_env();
    tracing::info!("Starting battle simulator");
    tracing::debug!(?config, "configuration loaded");

    let (battle_config, roster) = load_roster(&config)?;
    config.runtime.battle = battle_config;

    let mut debug_sink = DebugPresentationSink::new();
    if let Some(delay) = config.effect_delay {
        debug_sink = debug_sink.with_effect_delay(delay);
    }
    let debug_sink: Arc<dyn PresentationSink> = Arc::new(debug_sink);

    let bus = EventBus::with_capacity(config.event_buffer_size);
    let printers = if config.events_json {
        spawn_json_printers(&bus)
    } else {
        Vec::new()
    };
    let sink = EventSink::new(bus).with_inner(debug_sink);

    let mut runtime = BattleRuntime::builder()
        .config(config.runtime.clone())
        .roster(roster)
        .decision_source(DebugDecisionSource)
        .presentation_sink(sink)
        .build()?;

    let report = runtime.run().await?;
    drop(runtime);

    for printer in printers {
        printer.await?;
    }

    if !config.events_json {
        println!(
            "{} after {} ticks and {} turns",
            report.outcome,
            report.ticks,
            report.turns.len()
        );
    }

    tracing::info!("Simulator shutdown complete");
    Ok(())
}

/// Loads the roster from `BATTLE_DATA_DIR`, or builds the debug roster.
fn load_roster(config: &SimConfig) -> Result<(BattleConfig, Roster)> {
    match &config.data_dir {
        #[cfg(feature = "loaders")]
        Some(dir) => {
            tracing::info!("Loading content from {}", dir.display());
            battle_content::ContentFactory::new(dir).build_roster()
        }
        #[cfg(not(feature = "loaders"))]
        Some(dir) => anyhow::bail!(
            "BATTLE_DATA_DIR={} requires the `loaders` feature",
            dir.display()
        ),
        None => {
            tracing::info!("No data directory configured, using the debug roster");
            let battle = config.runtime.battle.clone();
            let roster = debug_roster(battle.clone())?;
            Ok((battle, roster))
        }
    }
}

/// One task per topic, each printing its events as JSON lines until the
/// bus is dropped.
fn spawn_json_printers(bus: &EventBus) -> Vec<JoinHandle<()>> {
    Topic::ALL
        .iter()
        .map(|&topic| {
            let mut rx = bus.subscribe(topic);
            tokio::spawn(async move {
                loop {
                    match rx.recv().await {
                        Ok(event) => match serde_json::to_string(&event) {
                            Ok(line) => println!("{line}"),
                            Err(e) => tracing::warn!("Failed to encode event: {}", e),
                        },
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!(?topic, skipped, "event printer lagged")
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
            })
        })
        .collect()
}
