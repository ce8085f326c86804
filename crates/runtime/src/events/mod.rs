//! Topic-based event bus for battle events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need. [`EventSink`] bridges the presentation interface to
//! the bus.

mod bus;
mod sink;
mod types;

pub use bus::{EventBus, Topic};
pub use sink::EventSink;
pub use types::{BattleEvent, UnitSnapshot};
