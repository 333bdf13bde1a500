//! Builder for constructing configurations.

use crate::builder::error::BuildError;
use crate::core::{Configuration, StateDefinition};

/// Builder for constructing a [`Configuration`] with a fluent API.
///
/// States keep the order in which they are first mentioned, whether through
/// [`state`](Self::state) or as the source of a [`transition`](Self::transition).
/// Transition targets are not added as states.
#[derive(Debug)]
pub struct ConfigurationBuilder {
    initial: Option<String>,
    config: Configuration,
}

impl ConfigurationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            config: Configuration::new(String::new(), std::iter::empty::<(String, StateDefinition)>()),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Add a state with its full set of transitions.
    ///
    /// Replaces any rules already given for `name`, keeping its position.
    pub fn state(mut self, name: impl Into<String>, definition: StateDefinition) -> Self {
        self.config.insert(name.into(), definition);
        self
    }

    /// Add a single `from --event--> to` rule, creating `from` if needed.
    pub fn transition(
        mut self,
        from: &str,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let definition = self.config.definition_mut(from);
        *definition = std::mem::take(definition).with_transition(event, to);
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Configuration, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.config.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(self.config.with_initial(initial))
    }
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
