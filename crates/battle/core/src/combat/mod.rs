//! Damage calculation.
//!
//! # Formula
//!
//! ```text
//! raw         = attacker.attack × skill.base_power
//! after_perks = perk_n(... perk_0(raw))            (attacker's perks)
//! mitigated   = after_perks × (1 − defender.resistance[skill.attribute])
//! after_ledger= entry_n(... entry_0(mitigated))    (defender's ledger)
//! dealt       = max(1, round_half_even(after_ledger))
//! ```

mod damage;

pub use damage::{
    DamageBreakdown, HitOutcome, MIN_DAMAGE, mitigate, pre_mitigation_damage, settle_damage,
};
