//! Timed value modifiers and their composition.
//!
//! Buffs and debuffs are closed data ([`ModifierKind`] + amount) rather than
//! arbitrary callbacks, so they stay comparable, cloneable, and serializable.
//! Each instance is a [`ValueTransform`]; the target's ledger chains them
//! with [`fold_transforms`].
//!
//! # Application order
//!
//! Chains are applied strictly in insertion order, each link consuming the
//! previous link's output: `chain(v) = f_n(... f_1(f_0(v)))`.

mod chain;
mod instance;
mod kinds;

pub use chain::{ValueTransform, fold_transforms};
pub use instance::ModifierInstance;
pub use kinds::{ModifierKind, Polarity, StatKind, TargetScope};
