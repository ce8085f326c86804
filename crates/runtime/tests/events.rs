mod common;

use std::sync::Arc;

use battle_content::debug_roster;
use battle_core::BattleConfig;
use battle_runtime::{
    BattleEvent, BattleRuntime, DebugPresentationSink, EventBus, EventSink, RuntimeConfig, Topic,
};
use common::{Recorder, Scripted};
use tokio::sync::broadcast::error::TryRecvError;

#[tokio::test]
async fn event_sink_mirrors_the_battle() {
    let bus = EventBus::with_capacity(1_024);
    let mut battle_rx = bus.subscribe(Topic::Battle);
    let mut turn_rx = bus.subscribe(Topic::Turn);

    let mut battle = BattleRuntime::builder()
        .roster(debug_roster(BattleConfig::default()).unwrap())
        .decision_source(Scripted::first())
        .presentation_sink(EventSink::new(bus.clone()))
        .build()
        .unwrap();
    let report = battle.run().await.unwrap();

    match battle_rx.try_recv().unwrap() {
        BattleEvent::RosterInitialized { allies, enemies } => {
            assert_eq!(allies.len(), 2);
            assert_eq!(enemies.len(), 2);
            assert_eq!(allies[0].gauge, 0.0);
        }
        other => panic!("unexpected first event {other:?}"),
    }
    match battle_rx.try_recv().unwrap() {
        BattleEvent::BattleEnded { outcome, ticks, turns } => {
            assert_eq!(outcome, report.outcome);
            assert_eq!(ticks, report.ticks);
            assert_eq!(turns, report.turns.len());
        }
        other => panic!("unexpected last event {other:?}"),
    }
    assert!(matches!(battle_rx.try_recv(), Err(TryRecvError::Empty)));

    let mut played = 0;
    let mut resolved = Vec::new();
    while let Ok(event) = turn_rx.try_recv() {
        match event {
            BattleEvent::EffectPlayed { .. } => played += 1,
            BattleEvent::TurnResolved(record) => resolved.push(*record),
            other => panic!("{other:?} on turn topic"),
        }
    }
    assert_eq!(played, report.turns.len());
    assert_eq!(resolved, report.turns);
}

#[tokio::test]
async fn event_sink_forwards_to_inner_sink() {
    let bus = EventBus::new();
    let mut gauge_rx = bus.subscribe(Topic::Gauge);
    let recorder = Arc::new(Recorder::default());

    let sink = EventSink::new(bus).with_inner(recorder.clone());
    let mut battle = BattleRuntime::builder()
        .config(RuntimeConfig {
            tick_delta: 1.0,
            ..RuntimeConfig::default()
        })
        .roster(debug_roster(BattleConfig::default()).unwrap())
        .decision_source(Scripted::first())
        .presentation_sink(sink)
        .build()
        .unwrap();

    battle.step().await.unwrap();

    assert_eq!(recorder.count("init:"), 1);
    let forwarded = recorder.count("gauge:");
    assert!(forwarded > 0);

    let mut published = 0;
    while gauge_rx.try_recv().is_ok() {
        published += 1;
    }
    assert_eq!(published, forwarded);
}

#[tokio::test]
async fn debug_sink_drives_a_full_battle() {
    let mut battle = BattleRuntime::builder()
        .roster(debug_roster(BattleConfig::default()).unwrap())
        .decision_source(battle_runtime::DebugDecisionSource)
        .presentation_sink(DebugPresentationSink::new())
        .build()
        .unwrap();

    let report = battle.run().await.unwrap();
    assert_eq!(battle.roster().winner(), Some(report.outcome.winner()));
}

#[test]
fn events_serialize_with_a_tag() {
    let event = BattleEvent::GaugeChanged {
        unit: "rita".into(),
        value: 50.0,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(json, r#"{"event":"gauge_changed","unit":"rita","value":50.0}"#);

    let back: BattleEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}
