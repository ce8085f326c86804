//! Common error infrastructure for battle-core.
//!
//! Domain errors ([`LedgerError`](crate::ledger::LedgerError),
//! [`RosterError`](crate::roster::RosterError)) live next to the types they
//! guard. This module classifies them so callers can decide between
//! degrading locally and terminating the battle.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: handled locally with a neutral default
/// - **Validation**: bad configuration or a broken caller contract
/// - **Internal**: bookkeeping invariant violated; indicates a bug
/// - **Fatal**: battle state cannot be trusted any more
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for battle-core errors.
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerError;
    use crate::roster::{RosterError, Side};

    #[test]
    fn classifies_core_errors() {
        let breach = LedgerError::NonPositiveDuration {
            id: "x".into(),
            turns: 0,
        };
        assert!(breach.severity().is_internal());
        assert_eq!(breach.error_code(), "ledger_non_positive_duration");

        let empty = RosterError::EmptySide(Side::Enemies);
        assert_eq!(empty.severity(), ErrorSeverity::Validation);
        assert!(!empty.severity().is_recoverable());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
