//! Per-unit buff/debuff ledger.
//!
//! The ledger is an insertion-ordered list of [`ModifierInstance`]s.
//!
//! # Turn-based duration
//!
//! Durations count resolved turns that involve the holder (as actor or as
//! target), not gauge ticks. [`Ledger::tick`] is called once per such turn
//! and removes every entry whose counter reaches zero, so an expired entry
//! is never visible to the next damage computation.

use crate::config::StackingPolicy;
use crate::error::{BattleError, ErrorSeverity};
use crate::modifier::{ModifierInstance, ValueTransform, fold_transforms};

/// Errors raised when an entry cannot be recorded.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("modifier '{id}' has non-positive duration {turns}")]
    NonPositiveDuration { id: String, turns: i32 },
}

impl BattleError for LedgerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            LedgerError::NonPositiveDuration { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            LedgerError::NonPositiveDuration { .. } => "ledger_non_positive_duration",
        }
    }
}

/// How an application was recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Applied {
    /// A new entry was appended.
    Appended,
    /// An existing non-stackable entry had its duration refreshed.
    Refreshed,
}

/// Timed modifiers held by one unit.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ledger {
    entries: Vec<ModifierInstance>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that `instance` may be recorded by any ledger.
    ///
    /// Instances with a non-positive duration are rejected: they would be
    /// read by damage computation before the next tick could remove them.
    pub fn check(instance: &ModifierInstance) -> Result<(), LedgerError> {
        if instance.remaining_turns <= 0 {
            return Err(LedgerError::NonPositiveDuration {
                id: instance.id.clone(),
                turns: instance.remaining_turns,
            });
        }
        Ok(())
    }

    /// Records `instance` according to `policy`.
    ///
    /// The ledger has no capacity limit; under [`StackingPolicy::Unlimited`]
    /// every valid application appends.
    pub fn apply(
        &mut self,
        instance: ModifierInstance,
        policy: StackingPolicy,
    ) -> Result<Applied, LedgerError> {
        Self::check(&instance)?;

        if policy == StackingPolicy::RespectFlag
            && !instance.stackable
            && let Some(existing) = self.entries.iter_mut().find(|e| e.id == instance.id)
        {
            existing.remaining_turns = existing.remaining_turns.max(instance.remaining_turns);
            return Ok(Applied::Refreshed);
        }

        self.entries.push(instance);
        Ok(Applied::Appended)
    }

    /// Decrements every entry by one turn and removes the expired ones.
    ///
    /// Returns the removed entries in ledger order.
    pub fn tick(&mut self) -> Vec<ModifierInstance> {
        for entry in &mut self.entries {
            entry.tick();
        }

        let (expired, live): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(ModifierInstance::is_expired);
        self.entries = live;
        expired
    }

    /// Returns true if an expired entry is still present.
    ///
    /// Always false between turns; a true result is a bookkeeping bug.
    pub fn has_expired(&self) -> bool {
        self.entries.iter().any(ModifierInstance::is_expired)
    }

    pub fn get(&self, id: &str) -> Option<&ModifierInstance> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of entries carrying `id`.
    pub fn count(&self, id: &str) -> usize {
        self.entries.iter().filter(|e| e.id == id).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModifierInstance> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ValueTransform for Ledger {
    /// Chains every active entry's transform in insertion order.
    fn transform(&self, value: f32) -> f32 {
        fold_transforms(value, &self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::ModifierKind;

    fn timer(id: &str, turns: i32) -> ModifierInstance {
        ModifierInstance::new(id, turns, 0.0, ModifierKind::Inert)
    }

    #[test]
    fn unlimited_policy_appends_duplicates() {
        let mut ledger = Ledger::new();
        let slow = timer("debuff_slow", 2).with_stackable(false);

        ledger.apply(slow.clone(), StackingPolicy::Unlimited).unwrap();
        ledger.apply(slow, StackingPolicy::Unlimited).unwrap();

        assert_eq!(ledger.count("debuff_slow"), 2);
    }

    #[test]
    fn respect_flag_refreshes_non_stackable_entries() {
        let mut ledger = Ledger::new();
        let policy = StackingPolicy::RespectFlag;

        ledger
            .apply(timer("guard", 1).with_stackable(false), policy)
            .unwrap();
        let applied = ledger
            .apply(timer("guard", 3).with_stackable(false), policy)
            .unwrap();

        assert_eq!(applied, Applied::Refreshed);
        assert_eq!(ledger.count("guard"), 1);
        assert_eq!(ledger.get("guard").unwrap().remaining_turns, 3);

        // A shorter re-application never shortens the entry.
        ledger
            .apply(timer("guard", 1).with_stackable(false), policy)
            .unwrap();
        assert_eq!(ledger.get("guard").unwrap().remaining_turns, 3);
    }

    #[test]
    fn respect_flag_still_stacks_stackable_entries() {
        let mut ledger = Ledger::new();
        let policy = StackingPolicy::RespectFlag;
        ledger.apply(timer("bleed", 2), policy).unwrap();
        ledger.apply(timer("bleed", 2), policy).unwrap();
        assert_eq!(ledger.count("bleed"), 2);
    }

    #[test]
    fn rejects_non_positive_duration() {
        let mut ledger = Ledger::new();
        let result = ledger.apply(timer("instant", 0), StackingPolicy::Unlimited);
        assert!(matches!(
            result,
            Err(LedgerError::NonPositiveDuration { turns: 0, .. })
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn unlimited_policy_has_no_capacity() {
        let mut ledger = Ledger::new();
        for _ in 0..200 {
            let applied = ledger.apply(timer("mark", 1_000), StackingPolicy::Unlimited);
            assert_eq!(applied, Ok(Applied::Appended));
        }
        assert_eq!(ledger.count("mark"), 200);
    }

    #[test]
    fn check_matches_apply() {
        assert!(Ledger::check(&timer("ok", 1)).is_ok());
        assert_eq!(
            Ledger::check(&timer("instant", 0)),
            Err(LedgerError::NonPositiveDuration {
                id: "instant".into(),
                turns: 0
            })
        );
    }

    #[test]
    fn tick_decrements_and_removes_expired() {
        let mut ledger = Ledger::new();
        ledger.apply(timer("short", 1), StackingPolicy::Unlimited).unwrap();
        ledger.apply(timer("long", 3), StackingPolicy::Unlimited).unwrap();

        let expired = ledger.tick();

        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, "short");
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get("long").unwrap().remaining_turns, 2);
        assert!(!ledger.has_expired());
    }

    #[test]
    fn transform_chains_in_insertion_order() {
        let mut ledger = Ledger::new();
        let policy = StackingPolicy::Unlimited;
        ledger
            .apply(ModifierInstance::new("a", 2, 10.0, ModifierKind::Flat), policy)
            .unwrap();
        ledger
            .apply(ModifierInstance::new("b", 2, 1.0, ModifierKind::Scale), policy)
            .unwrap();

        // (5 + 10) * 2
        assert_eq!(ledger.transform(5.0), 30.0);
    }
}
