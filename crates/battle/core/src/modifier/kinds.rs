//! Closed vocabularies describing what a modifier does.

/// How a modifier transforms a scalar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ModifierKind {
    /// Identity. The entry only carries a label and a duration.
    #[default]
    Inert,

    /// `value + amount`
    Flat,

    /// `value * (1 + amount)`; `amount = 0.2` is +20%, `-0.1` is -10%.
    Scale,
}

impl ModifierKind {
    /// Applies this kind with the given amount to `value`.
    pub fn apply(self, amount: f32, value: f32) -> f32 {
        match self {
            ModifierKind::Inert => value,
            ModifierKind::Flat => value + amount,
            ModifierKind::Scale => value * (1.0 + amount),
        }
    }
}

/// Whether a modifier is beneficial or harmful to its holder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Polarity {
    #[default]
    Buff,
    Debuff,
}

/// Declared audience of a modifier template.
///
/// Informational: skill effects always land on the chosen target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TargetScope {
    OnSelf,
    SingleAlly,
    AllAllies,
    #[default]
    SingleEnemy,
    AllEnemies,
}

/// Stat a modifier is declared against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    #[default]
    Atk,
    Def,
    MaxHp,
    GaugeSpeed,
    Shield,
}

impl StatKind {
    /// Transform used when a template does not state its kind explicitly.
    ///
    /// Attack modifiers scale incoming damage; every other stat yields an
    /// inert entry.
    pub fn default_modifier_kind(self) -> ModifierKind {
        match self {
            StatKind::Atk => ModifierKind::Scale,
            StatKind::Def | StatKind::MaxHp | StatKind::GaugeSpeed | StatKind::Shield => {
                ModifierKind::Inert
            }
        }
    }
}
