use crate::roster::{Roster, Slot};
use crate::unit::Unit;

/// A gauge value that moved during a scheduler step.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaugeChange {
    pub slot: Slot,
    pub value: f32,
}

/// Advances action gauges and determines which units are eligible to act.
pub struct GaugeScheduler;

impl GaugeScheduler {
    /// Advances every eligible unit by `gauge_speed × delta`, reporting each
    /// change to `observer` immediately after the unit is mutated.
    ///
    /// Eligible means alive and not yet ready: ready units wait at the cap
    /// and dead units never gain. Skipped units do not run their perks.
    /// A zero, negative, or non-finite `delta` is a no-op.
    pub fn advance_with<F>(roster: &mut Roster, delta: f32, mut observer: F)
    where
        F: FnMut(Slot, &Unit, f32),
    {
        if !(delta.is_finite() && delta > 0.0) {
            return;
        }

        for (slot, unit) in roster.iter_mut() {
            if unit.is_ready() || unit.is_dead() {
                continue;
            }

            let raw = unit.stats.gauge_speed * delta;
            if let Some(value) = unit.gain_gauge(raw) {
                observer(slot, unit, value);
            }
        }
    }

    /// Collecting variant of [`GaugeScheduler::advance_with`].
    pub fn advance(roster: &mut Roster, delta: f32) -> Vec<GaugeChange> {
        let mut changes = Vec::new();
        Self::advance_with(roster, delta, |slot, _, value| {
            changes.push(GaugeChange { slot, value });
        });
        changes
    }

    /// Living units at full gauge, in roster order.
    pub fn ready_slots(roster: &Roster) -> Vec<Slot> {
        roster
            .iter()
            .filter(|(_, unit)| unit.is_ready() && !unit.is_dead())
            .map(|(slot, _)| slot)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::perk::{Perk, PerkKind};
    use crate::roster::Side;
    use crate::stats::StatBlock;
    use crate::unit::{GAUGE_MAX, GAUGE_MIN};

    struct CountingPerk(Arc<AtomicUsize>);
    impl Perk for CountingPerk {
        fn name(&self) -> &str {
            "counting"
        }
        fn on_gauge_gain(&self, _: &Unit, gain: f32) -> f32 {
            self.0.fetch_add(1, Ordering::SeqCst);
            gain
        }
    }

    fn unit(id: &str, speed: f32) -> Unit {
        Unit::new(id, StatBlock::new(100, speed, 100))
    }

    #[test]
    fn advances_by_speed_times_delta() {
        let mut roster =
            Roster::new(vec![unit("a", 20.0)], vec![unit("e", 25.0)]).unwrap();

        let changes = GaugeScheduler::advance(&mut roster, 0.5);

        assert_eq!(changes.len(), 2);
        assert_eq!(roster.allies()[0].gauge(), 10.0);
        assert_eq!(roster.enemies()[0].gauge(), 12.5);
    }

    #[test]
    fn never_exceeds_the_cap() {
        let mut roster = Roster::new(vec![unit("a", 90.0)], vec![unit("e", 10.0)]).unwrap();

        for _ in 0..5 {
            GaugeScheduler::advance(&mut roster, 1.0);
            for (_, u) in roster.iter() {
                assert!((GAUGE_MIN..=GAUGE_MAX).contains(&u.gauge()));
            }
        }
        assert_eq!(roster.allies()[0].gauge(), GAUGE_MAX);
    }

    #[test]
    fn zero_delta_changes_nothing_and_skips_perks() {
        let calls = Arc::new(AtomicUsize::new(0));
        let a = unit("a", 20.0).with_perk(CountingPerk(Arc::clone(&calls)));
        let mut roster = Roster::new(vec![a], vec![unit("e", 20.0)]).unwrap();

        assert!(GaugeScheduler::advance(&mut roster, 0.0).is_empty());
        assert!(GaugeScheduler::advance(&mut roster, -1.0).is_empty());
        assert!(GaugeScheduler::advance(&mut roster, f32::NAN).is_empty());

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(roster.allies()[0].gauge(), 0.0);
    }

    #[test]
    fn ready_and_dead_units_are_skipped_entirely() {
        let calls = Arc::new(AtomicUsize::new(0));
        let ready = unit("ready", 20.0)
            .with_gauge(GAUGE_MAX)
            .with_perk(CountingPerk(Arc::clone(&calls)));
        let mut dead = unit("dead", 20.0).with_perk(CountingPerk(Arc::clone(&calls)));
        dead.stats.lose_hp(500);

        let mut roster = Roster::new(vec![ready, dead], vec![unit("e", 20.0)]).unwrap();
        let changes = GaugeScheduler::advance(&mut roster, 1.0);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(changes, vec![GaugeChange {
            slot: Slot::new(Side::Enemies, 0),
            value: 20.0
        }]);
        assert_eq!(roster.allies()[1].gauge(), 0.0);
    }

    #[test]
    fn gain_is_transformed_by_perks_before_adding() {
        let hasted = unit("a", 10.0).with_perk(PerkKind::Haste { factor: 3.0 });
        let mut roster = Roster::new(vec![hasted], vec![unit("e", 10.0)]).unwrap();

        GaugeScheduler::advance(&mut roster, 1.0);

        assert_eq!(roster.allies()[0].gauge(), 30.0);
        assert_eq!(roster.enemies()[0].gauge(), 10.0);
    }

    #[test]
    fn observer_sees_each_mutation_in_roster_order() {
        let mut roster = Roster::new(
            vec![unit("a", 10.0), unit("b", 20.0)],
            vec![unit("e", 30.0)],
        )
        .unwrap();

        let mut seen = Vec::new();
        GaugeScheduler::advance_with(&mut roster, 1.0, |_, unit, value| {
            assert_eq!(unit.gauge(), value);
            seen.push((unit.id.to_string(), value));
        });

        assert_eq!(
            seen,
            vec![
                ("a".to_string(), 10.0),
                ("b".to_string(), 20.0),
                ("e".to_string(), 30.0),
            ]
        );
    }

    #[test]
    fn ready_slots_follow_roster_order_not_gauge() {
        let mut roster = Roster::new(
            vec![unit("slow", 100.0), unit("fast", 500.0)],
            vec![unit("e", 1.0)],
        )
        .unwrap();

        GaugeScheduler::advance(&mut roster, 1.0);
        let ready = GaugeScheduler::ready_slots(&roster);

        assert_eq!(
            ready,
            vec![Slot::new(Side::Allies, 0), Slot::new(Side::Allies, 1)]
        );
    }
}
