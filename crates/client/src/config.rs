//! Simulator configuration loaded from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use battle_runtime::RuntimeConfig;

/// Everything the `battle-sim` binary reads at start-up.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Directory holding `battle.toml`, `allies.ron`, and `enemies.ron`.
    /// `None` runs the built-in debug roster.
    pub data_dir: Option<PathBuf>,
    pub runtime: RuntimeConfig,
    pub effect_delay: Option<Duration>,
    /// Print every bus event to stdout as one JSON object per line.
    pub events_json: bool,
    /// Per-topic capacity of the event bus.
    pub event_buffer_size: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            runtime: RuntimeConfig::default(),
            effect_delay: None,
            events_json: false,
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER_SIZE,
        }
    }
}

impl SimConfig {
    pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 256;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_DATA_DIR` - Content directory (default: built-in roster)
    /// - `BATTLE_TICK_DELTA` - Game seconds per loop pass (default: 1/60)
    /// - `BATTLE_MAX_TICKS` - Stall guard, `0` disables (default: 1,000,000)
    /// - `BATTLE_DECISION_TIMEOUT_MS` - Per-decision timeout (default: none)
    /// - `BATTLE_EFFECT_DELAY_MS` - Effect playback time (default: one yield)
    /// - `BATTLE_EVENTS_JSON` - Stream events as JSON lines (default: false)
    /// - `BATTLE_EVENT_BUFFER` - Event bus capacity per topic (default: 256)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.data_dir = lookup("BATTLE_DATA_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        if let Some(delta) = parse::<f32>(lookup("BATTLE_TICK_DELTA")) {
            config.runtime.tick_delta = delta;
        }

        if let Some(max_ticks) = parse::<u64>(lookup("BATTLE_MAX_TICKS")) {
            config.runtime.max_ticks = (max_ticks > 0).then_some(max_ticks);
        }

        config.runtime.decision_timeout =
            parse::<u64>(lookup("BATTLE_DECISION_TIMEOUT_MS")).map(Duration::from_millis);

        config.effect_delay =
            parse::<u64>(lookup("BATTLE_EFFECT_DELAY_MS")).map(Duration::from_millis);

        if let Some(enable) = parse::<bool>(lookup("BATTLE_EVENTS_JSON")) {
            config.events_json = enable;
        } else if lookup("BATTLE_EVENTS_JSON").is_some() {
            // Also accept just setting the variable without value as "true"
            config.events_json = true;
        }

        if let Some(size) = parse::<usize>(lookup("BATTLE_EVENT_BUFFER")).filter(|&n| n > 0) {
            config.event_buffer_size = size;
        }

        config
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
