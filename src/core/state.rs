//! State definitions for the configuration table.
//!
//! A state is a named entry holding event-keyed transition rules. Definitions
//! are plain data: once a configuration is built they are never mutated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the reserved state used to seed history and as the `reset` target.
///
/// Every machine starts with `["normal"]` as its history, whatever the
/// configured initial state is, and [`StateMachine::reset`] always moves here.
/// Configurations that want `reset` to work must define a state with this name.
///
/// [`StateMachine::reset`]: crate::StateMachine::reset
pub const NORMAL_STATE: &str = "normal";

/// Transition rules for a single state.
///
/// Maps an event name to the name of the state the machine moves to when
/// that event fires while this state is active.
///
/// # Example
///
/// ```rust
/// use retrace::core::StateDefinition;
///
/// let idle = StateDefinition::new()
///     .with_transition("start", "running")
///     .with_transition("quit", "stopped");
///
/// assert_eq!(idle.target("start"), Some("running"));
/// assert!(idle.handles("quit"));
/// assert!(!idle.handles("pause"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    #[serde(default)]
    transitions: BTreeMap<String, String>,
}

impl StateDefinition {
    /// Create a definition with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the extended definition.
    ///
    /// A second rule for the same event replaces the first.
    pub fn with_transition(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Destination state for `event`, if this state handles it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether `event` has a transition rule in this state.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// All `(event, target)` rules, ordered by event name.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.transitions
            .iter()
            .map(|(event, target)| (event.as_str(), target.as_str()))
    }
}

impl<E, T> FromIterator<(E, T)> for StateDefinition
where
    E: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (E, T)>>(iter: I) -> Self {
        Self {
            transitions: iter
                .into_iter()
                .map(|(event, target)| (event.into(), target.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_definition_handles_nothing() {
        let state = StateDefinition::new();
        assert!(!state.handles("go"));
        assert_eq!(state.target("go"), None);
        assert_eq!(state.transitions().count(), 0);
    }

    #[test]
    fn with_transition_adds_rule() {
        let state = StateDefinition::new().with_transition("go", "running");
        assert!(state.handles("go"));
        assert_eq!(state.target("go"), Some("running"));
    }

    #[test]
    fn later_rule_for_same_event_wins() {
        let state = StateDefinition::new()
            .with_transition("go", "running")
            .with_transition("go", "sprinting");
        assert_eq!(state.target("go"), Some("sprinting"));
        assert_eq!(state.transitions().count(), 1);
    }

    #[test]
    fn collects_from_pairs() {
        let state: StateDefinition = [("stop", "normal"), ("pause", "paused")]
            .into_iter()
            .collect();
        let rules: Vec<_> = state.transitions().collect();
        assert_eq!(rules, vec![("pause", "paused"), ("stop", "normal")]);
    }

    #[test]
    fn deserializes_missing_transitions_as_empty() {
        let state: StateDefinition = serde_json::from_str("{}").unwrap();
        assert_eq!(state, StateDefinition::new());
    }

    #[test]
    fn serializes_with_transitions_key() {
        let state = StateDefinition::new().with_transition("go", "running");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"transitions":{"go":"running"}}"#);
    }
}
