//! Topic-based event bus implementation.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::BattleEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Gauge movement (high volume)
    Gauge,
    /// Effect playback and resolved turns
    Turn,
    /// Roster initialization and battle end
    Battle,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Gauge, Topic::Turn, Topic::Battle];
}

impl BattleEvent {
    pub fn topic(&self) -> Topic {
        match self {
            BattleEvent::GaugeChanged { .. } => Topic::Gauge,
            BattleEvent::EffectPlayed { .. } | BattleEvent::TurnResolved(_) => Topic::Turn,
            BattleEvent::RosterInitialized { .. } | BattleEvent::BattleEnded { .. } => {
                Topic::Battle
            }
        }
    }
}

struct Channels {
    gauge: broadcast::Sender<BattleEvent>,
    turn: broadcast::Sender<BattleEvent>,
    battle: broadcast::Sender<BattleEvent>,
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks; slow receivers lag.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                gauge: broadcast::channel(capacity).0,
                turn: broadcast::channel(capacity).0,
                battle: broadcast::channel(capacity).0,
            }),
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<BattleEvent> {
        match topic {
            Topic::Gauge => &self.channels.gauge,
            Topic::Turn => &self.channels.turn,
            Topic::Battle => &self.channels.battle,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: BattleEvent) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<BattleEvent> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<BattleEvent>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
