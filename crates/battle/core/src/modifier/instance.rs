//! A single timed modifier.

use super::{ModifierKind, Polarity, StatKind, TargetScope, ValueTransform};

/// A timed modifier attached to a unit's ledger, or carried by a skill as the
/// template it applies on hit.
///
/// `remaining_turns` counts resolved turns involving the holder, not gauge
/// ticks. Instances with `remaining_turns <= 0` are expired.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifierInstance {
    pub id: String,
    pub name: String,
    pub remaining_turns: i32,
    pub amount: f32,
    pub kind: ModifierKind,
    pub polarity: Polarity,
    pub scope: TargetScope,
    pub stat: StatKind,
    pub stackable: bool,
}

impl ModifierInstance {
    pub fn new(id: impl Into<String>, turns: i32, amount: f32, kind: ModifierKind) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            remaining_turns: turns,
            amount,
            kind,
            polarity: Polarity::default(),
            scope: TargetScope::default(),
            stat: StatKind::default(),
            stackable: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn with_scope(mut self, scope: TargetScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_stat(mut self, stat: StatKind) -> Self {
        self.stat = stat;
        self
    }

    pub fn with_stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_turns <= 0
    }

    /// Consumes one turn of duration.
    pub fn tick(&mut self) {
        self.remaining_turns = self.remaining_turns.saturating_sub(1);
    }
}

impl ValueTransform for ModifierInstance {
    fn transform(&self, value: f32) -> f32 {
        self.kind.apply(self.amount, value)
    }
}
