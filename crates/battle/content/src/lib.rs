//! Data-driven unit definitions and the entity factory.
//!
//! This crate turns static content into fully constructed
//! [`battle_core::Unit`]s before a battle starts:
//! - serde templates for units, skills, buffs, and perks ([`templates`])
//! - template validation and conversion ([`factory`])
//! - the built-in debug party and enemy roster ([`debug`])
//! - RON/TOML loaders for data directories ([`loaders`], feature `loaders`)
//!
//! The battle runtime never reads content files itself.

pub mod debug;
pub mod factory;
pub mod templates;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use debug::{debug_enemies, debug_party, debug_roster};
pub use factory::{TemplateError, UnitFactory};
pub use templates::{BuffTemplate, SkillTemplate, UnitTemplate};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, RosterLoader};
