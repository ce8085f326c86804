//! Turn scheduling.
//!
//! Units accumulate action gauge over battle time; the scheduler advances
//! gauges and reports which units may act. Turn resolution itself suspends
//! on external decisions and lives in the runtime crate.

mod gauge;

pub use gauge::{GaugeChange, GaugeScheduler};
