//! Unit attributes.
//!
//! A [`StatBlock`] holds the numeric attributes a unit fights with, and
//! [`Resistances`] maps damage-attribute tags to incoming-damage multipliers.
//! Stats are owned exclusively by their unit; only damage paths mutate HP.

pub mod block;
pub mod resistance;

pub use block::StatBlock;
pub use resistance::Resistances;
