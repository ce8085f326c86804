//! Shared fixtures for runtime integration tests.
#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use battle_core::{Resistances, Skill, SkillCategory, StatBlock, Unit, UnitId};
use battle_runtime::{BattleReport, DecisionSource, PresentationSink, TurnRecord};

pub fn skill(id: &str, power: f32, attribute: &str) -> Skill {
    Skill::new(id, id, SkillCategory::Basic, 100.0, power, attribute)
}

/// A unit with a single Physical skill of the given power.
pub fn unit(id: &str, attack: i32, speed: f32, hp: i32) -> Unit {
    Unit::new(id, StatBlock::new(attack, speed, hp)).with_skill(skill("basic", 1.0, "Physical"))
}

pub fn resistant(id: &str, hp: i32, attribute: &str, value: f32) -> Unit {
    let stats = StatBlock::new(10, 0.0, hp).with_resistances(Resistances::new().with(attribute, value));
    Unit::new(id, stats).with_skill(skill("basic", 1.0, "Physical"))
}

#[derive(Clone, Debug)]
pub enum SkillPick {
    First,
    Id(String),
    /// A skill the actor does not own.
    Foreign,
    Nothing,
}

#[derive(Clone, Debug)]
pub enum TargetPick {
    FirstLiving,
    First,
    Id(UnitId),
    Nothing,
}

/// Decision source driven by a fixed script.
pub struct Scripted {
    pub skill: SkillPick,
    pub target: TargetPick,
    pub delay: Option<Duration>,
    pub log: Mutex<Vec<String>>,
}

impl Scripted {
    pub fn new(skill: SkillPick, target: TargetPick) -> Self {
        Self {
            skill,
            target,
            delay: None,
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn first() -> Self {
        Self::new(SkillPick::First, TargetPick::FirstLiving)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl DecisionSource for Scripted {
    async fn choose_skill(&self, actor: &Unit) -> Option<Skill> {
        self.pause().await;
        self.log.lock().unwrap().push(format!("skill:{}", actor.id));
        match &self.skill {
            SkillPick::First => actor.skills.first().cloned(),
            SkillPick::Id(id) => actor.skill(id).cloned(),
            SkillPick::Foreign => Some(skill("forged", 99.0, "Physical")),
            SkillPick::Nothing => None,
        }
    }

    async fn choose_target(&self, actor: &Unit, candidates: &[&Unit]) -> Option<UnitId> {
        self.pause().await;
        self.log
            .lock()
            .unwrap()
            .push(format!("target:{}:{}", actor.id, candidates.len()));
        match &self.target {
            TargetPick::FirstLiving => candidates
                .iter()
                .find(|unit| !unit.is_dead())
                .map(|unit| unit.id.clone()),
            TargetPick::First => candidates.first().map(|unit| unit.id.clone()),
            TargetPick::Id(id) => Some(id.clone()),
            TargetPick::Nothing => None,
        }
    }
}

/// Presentation sink that records every call in order.
#[derive(Default)]
pub struct Recorder {
    pub calls: Mutex<Vec<String>>,
    pub gauges: Mutex<Vec<f32>>,
}

impl Recorder {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    /// Actor ids of resolved turns, in order.
    pub fn turn_actors(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|c| c.strip_prefix("turn:"))
            .map(|rest| rest.split(':').next().unwrap_or_default().to_owned())
            .collect()
    }

    fn push(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PresentationSink for Recorder {
    fn initialize_roster(&self, all: &[&Unit], allies: &[Unit], enemies: &[Unit]) {
        self.push(format!("init:{}:{}:{}", all.len(), allies.len(), enemies.len()));
    }

    fn on_gauge_changed(&self, unit: &Unit, value: f32) {
        self.gauges.lock().unwrap().push(value);
        self.push(format!("gauge:{}:{}", unit.id, value));
    }

    async fn play_resolution_effect(&self, actor: &Unit, skill: &Skill, target: &Unit) {
        self.push(format!("effect:{}:{}:{}", actor.id, skill.id, target.id));
    }

    fn on_turn_resolved(&self, record: &TurnRecord) {
        self.push(format!("turn:{}:{}:{}", record.actor, record.target, record.hit.dealt));
    }

    fn on_battle_ended(&self, report: &BattleReport) {
        self.push(format!("end:{}", report.outcome));
    }
}
