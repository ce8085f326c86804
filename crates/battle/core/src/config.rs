/// How a unit's ledger treats an incoming modifier whose id is already present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StackingPolicy {
    /// Every application appends a new entry, regardless of the `stackable` flag.
    #[default]
    Unlimited,

    /// Non-stackable modifiers refresh the existing entry instead of appending.
    ///
    /// The refreshed entry keeps the longer of the two remaining durations.
    RespectFlag,
}

/// Battle rule configuration and tunable parameters.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Ledger behaviour for repeated modifier ids.
    pub stacking: StackingPolicy,

    /// Known damage-attribute tags.
    ///
    /// When non-empty, content validation rejects skills whose attribute is
    /// not listed. Resistance lookups never consult this list: unmapped tags
    /// always resolve to a neutral multiplier.
    pub attributes: Vec<String>,
}

impl BattleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stacking(mut self, stacking: StackingPolicy) -> Self {
        self.stacking = stacking;
        self
    }

    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if `tag` is acceptable under the configured registry.
    pub fn knows_attribute(&self, tag: &str) -> bool {
        self.attributes.is_empty() || self.attributes.iter().any(|a| a == tag)
    }
}
