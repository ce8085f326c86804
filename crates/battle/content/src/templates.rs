//! Serializable content definitions.
//!
//! Templates are plain data: they carry no behaviour and are converted into
//! runtime units by [`crate::factory::UnitFactory`].

use std::collections::BTreeMap;

use battle_core::{
    ModifierInstance, ModifierKind, PerkKind, Polarity, SkillCategory, StatKind, TargetScope,
};
use serde::{Deserialize, Serialize};

/// A unit definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitTemplate {
    pub id: String,
    /// Display name; defaults to the id.
    #[serde(default)]
    pub name: Option<String>,
    pub max_hp: i32,
    pub attack: i32,
    pub gauge_speed: f32,
    /// Attribute tag → multiplier in `[-1, 1]`.
    #[serde(default)]
    pub resistances: BTreeMap<String, f32>,
    #[serde(default)]
    pub skills: Vec<SkillTemplate>,
    #[serde(default)]
    pub perks: Vec<PerkKind>,
    #[serde(default)]
    pub starting_buffs: Vec<BuffTemplate>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl UnitTemplate {
    pub fn new(id: impl Into<String>, attack: i32, gauge_speed: f32, max_hp: i32) -> Self {
        Self {
            id: id.into(),
            name: None,
            max_hp,
            attack,
            gauge_speed,
            resistances: BTreeMap::new(),
            skills: Vec::new(),
            perks: Vec::new(),
            starting_buffs: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_skill(mut self, skill: SkillTemplate) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn with_resistance(mut self, attribute: impl Into<String>, value: f32) -> Self {
        self.resistances.insert(attribute.into(), value);
        self
    }

    pub fn with_perk(mut self, perk: PerkKind) -> Self {
        self.perks.push(perk);
        self
    }

    pub fn with_starting_buff(mut self, buff: BuffTemplate) -> Self {
        self.starting_buffs.push(buff);
        self
    }
}

/// A skill definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: SkillCategory,
    pub gauge_cost: f32,
    pub base_power: f32,
    pub attribute: String,
    /// Buff or debuff cast on the target when the skill lands.
    #[serde(default)]
    pub effect: Option<BuffTemplate>,
}

impl SkillTemplate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: SkillCategory,
        gauge_cost: f32,
        base_power: f32,
        attribute: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            gauge_cost,
            base_power,
            attribute: attribute.into(),
            effect: None,
        }
    }

    pub fn with_effect(mut self, effect: BuffTemplate) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// A buff/debuff definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuffTemplate {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub polarity: Polarity,
    #[serde(default)]
    pub target: TargetScope,
    #[serde(default)]
    pub stat: StatKind,
    pub amount: f32,
    pub duration_turns: i32,
    #[serde(default)]
    pub stackable: bool,
    /// Explicit transform; derived from `stat` when absent.
    #[serde(default)]
    pub kind: Option<ModifierKind>,
}

impl BuffTemplate {
    pub fn new(id: impl Into<String>, stat: StatKind, amount: f32, duration_turns: i32) -> Self {
        Self {
            id: id.into(),
            name: None,
            polarity: Polarity::default(),
            target: TargetScope::default(),
            stat,
            amount,
            duration_turns,
            stackable: false,
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: ModifierKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn with_target(mut self, target: TargetScope) -> Self {
        self.target = target;
        self
    }

    /// The transform this buff applies.
    pub fn resolved_kind(&self) -> ModifierKind {
        self.kind.unwrap_or_else(|| self.stat.default_modifier_kind())
    }

    /// Instantiates a fresh ledger entry.
    pub fn instantiate(&self) -> ModifierInstance {
        ModifierInstance::new(
            self.id.clone(),
            self.duration_turns,
            self.amount,
            self.resolved_kind(),
        )
        .with_name(self.name.clone().unwrap_or_else(|| self.id.clone()))
        .with_polarity(self.polarity)
        .with_scope(self.target)
        .with_stat(self.stat)
        .with_stackable(self.stackable)
    }
}
