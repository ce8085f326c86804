//! Public runtime API surface.
//!
//! The collaborator traits a battle suspends on, their debug
//! implementations, and the error type every fallible runtime call returns.

pub mod errors;
pub mod providers;

pub use errors::{DecisionKind, Result, RuntimeError};
pub use providers::{
    DebugDecisionSource, DebugPresentationSink, DecisionSource, NullPresentationSink,
    PresentationSink,
};
