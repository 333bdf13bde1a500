//! Errors returned by state machine operations.

use crate::validation::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when driving a state machine.
///
/// Every operation that returns one of these leaves the machine untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// The requested state is not in the configuration
    #[error("State '{name}' is not defined")]
    InvalidState { name: String },

    /// The current state has no transition for the event
    #[error("Event '{event}' is not handled in state {}", .state.as_deref().unwrap_or("<none>"))]
    UnhandledEvent {
        event: String,
        state: Option<String>,
    },

    /// Eager validation found problems with the configuration
    #[error("Invalid configuration ({} violation(s))", .0.len())]
    InvalidConfiguration(Vec<ConfigViolation>),
}
