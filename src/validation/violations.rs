//! Configuration violations reported by eager validation.

use thiserror::Error;

/// A problem that would surface later as a runtime error on some path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    /// A fresh machine would start with no current state.
    #[error("Initial state '{initial}' is not defined")]
    UnknownInitial { initial: String },

    /// Firing `event` in `state` would fail with an invalid-state error.
    #[error("Transition '{event}' in state '{state}' targets undefined state '{target}'")]
    DanglingTransition {
        state: String,
        event: String,
        target: String,
    },

    /// `reset` and undoing back onto the history seed both need this state.
    #[error("Reserved state 'normal' is not defined")]
    MissingNormalState,
}
