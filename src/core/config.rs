//! Machine configuration: the ordered state table plus the initial state.
//!
//! State order is part of the observable contract (`StateMachine::states`
//! lists names in configuration order), so the table is a vector of entries
//! rather than a hash map, with serde impls that keep document order.

use super::error::ConfigError;
use super::state::StateDefinition;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

/// Declarative description of a state machine.
///
/// Holds every state keyed by unique name, in insertion order, and the name of
/// the state a new machine starts in. Nothing is validated on construction: an
/// unknown `initial` or a transition pointing at a missing state only surfaces
/// when the machine reaches it. See [`crate::validation`] for an eager check.
///
/// A state name repeated in a JSON document behaves like repeated assignment:
/// the last definition wins and keeps the slot of the first occurrence.
///
/// # Example
///
/// ```rust
/// use retrace::core::Configuration;
///
/// let config = Configuration::from_json(r#"{
///     "states": {
///         "normal":  { "transitions": { "go": "running" } },
///         "running": { "transitions": { "stop": "normal" } }
///     },
///     "initial": "normal"
/// }"#).unwrap();
///
/// assert_eq!(config.initial(), "normal");
/// assert_eq!(config.names().collect::<Vec<_>>(), vec!["normal", "running"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    states: StateTable,
    initial: String,
}

impl Configuration {
    /// Build a configuration from `(name, definition)` pairs, keeping their order.
    ///
    /// A repeated name replaces the earlier definition in its original slot.
    pub fn new<I, N>(initial: impl Into<String>, states: I) -> Self
    where
        I: IntoIterator<Item = (N, StateDefinition)>,
        N: Into<String>,
    {
        let mut table = StateTable::default();
        for (name, state) in states {
            table.insert(name.into(), state);
        }
        Self {
            states: table,
            initial: initial.into(),
        }
    }

    /// Parse the JSON configuration format.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the JSON configuration format from a reader.
    ///
    /// Read failures surface as [`ConfigError::Parse`] with an I/O category.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Render as JSON, preserving state order.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Name of the state a fresh machine starts in.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Definition of the named state.
    pub fn get(&self, name: &str) -> Option<&StateDefinition> {
        self.position(name).map(|index| &self.states.0[index].1)
    }

    /// Whether a state with this name is configured.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// State names in configuration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.states.0.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, definition)` entries in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDefinition)> {
        self.states.0.iter().map(|(name, state)| (name.as_str(), state))
    }

    /// Number of configured states.
    pub fn len(&self) -> usize {
        self.states.0.len()
    }

    /// True when no states are configured.
    pub fn is_empty(&self) -> bool {
        self.states.0.is_empty()
    }

    /// Slot of `name` in the table, found by linear scan.
    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.states.0.iter().position(|(existing, _)| existing == name)
    }

    pub(crate) fn entry(&self, index: usize) -> Option<(&str, &StateDefinition)> {
        self.states
            .0
            .get(index)
            .map(|(name, state)| (name.as_str(), state))
    }

    pub(crate) fn with_initial(mut self, initial: String) -> Self {
        self.initial = initial;
        self
    }

    pub(crate) fn insert(&mut self, name: String, state: StateDefinition) {
        self.states.insert(name, state);
    }

    pub(crate) fn definition_mut(&mut self, name: &str) -> &mut StateDefinition {
        let index = match self.position(name) {
            Some(index) => index,
            None => {
                self.states.0.push((name.to_string(), StateDefinition::new()));
                self.states.0.len() - 1
            }
        };
        &mut self.states.0[index].1
    }
}

/// Ordered `name -> definition` table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct StateTable(Vec<(String, StateDefinition)>);

impl StateTable {
    fn insert(&mut self, name: String, state: StateDefinition) {
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = state,
            None => self.0.push((name, state)),
        }
    }
}

impl Serialize for StateTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, state) in &self.0 {
            map.serialize_entry(name, state)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StateTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StateTableVisitor)
    }
}

struct StateTableVisitor;

impl<'de> Visitor<'de> for StateTableVisitor {
    type Value = StateTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of state names to state definitions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = StateTable(Vec::with_capacity(access.size_hint().unwrap_or(0)));
        while let Some((name, state)) = access.next_entry::<String, StateDefinition>()? {
            table.insert(name, state);
        }
        Ok(table)
    }
}
