//! Per-attribute resistance lookup.

use std::collections::BTreeMap;

/// Resistance multipliers keyed by damage-attribute tag.
///
/// Values live in `[-1.0, 1.0]`:
/// - negative values amplify incoming damage (`-1.0` doubles it)
/// - `0.0` is neutral
/// - positive values mitigate (`1.0` is full immunity before the damage floor)
///
/// Tags are matched exactly. Unmapped tags resolve to the neutral value.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Resistances {
    entries: BTreeMap<String, f32>,
}

impl Resistances {
    pub const MIN: f32 = -1.0;
    pub const MAX: f32 = 1.0;
    pub const NEUTRAL: f32 = 0.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the resistance for `tag`, clamping into `[MIN, MAX]`.
    ///
    /// Non-finite values are stored as neutral.
    pub fn set(&mut self, tag: impl Into<String>, value: f32) {
        let value = if value.is_finite() {
            value.clamp(Self::MIN, Self::MAX)
        } else {
            Self::NEUTRAL
        };
        self.entries.insert(tag.into(), value);
    }

    /// Builder variant of [`Resistances::set`].
    pub fn with(mut self, tag: impl Into<String>, value: f32) -> Self {
        self.set(tag, value);
        self
    }

    /// Looks up the multiplier for `tag`, defaulting to neutral.
    pub fn get(&self, tag: &str) -> f32 {
        self.entries.get(tag).copied().unwrap_or(Self::NEUTRAL)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f32)> for Resistances {
    fn from_iter<T: IntoIterator<Item = (S, f32)>>(iter: T) -> Self {
        let mut resistances = Self::new();
        for (tag, value) in iter {
            resistances.set(tag, value);
        }
        resistances
    }
}
