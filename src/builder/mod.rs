//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a declarative macro for creating
//! configurations in code instead of loading them from JSON.

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigurationBuilder;
pub use error::BuildError;

use crate::core::Configuration;

impl Configuration {
    /// Start a fluent [`ConfigurationBuilder`].
    ///
    /// # Example
    ///
    /// ```
    /// use retrace::core::Configuration;
    ///
    /// let config = Configuration::builder()
    ///     .initial("normal")
    ///     .transition("normal", "go", "running")
    ///     .transition("running", "stop", "normal")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.len(), 2);
    /// ```
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StateMachine;

    #[test]
    fn builder_output_drives_a_machine() {
        let config = Configuration::builder()
            .initial("normal")
            .transition("normal", "go", "running")
            .transition("running", "stop", "normal")
            .build()
            .unwrap();

        let mut machine = StateMachine::new(config);
        machine.trigger("go").unwrap();
        machine.trigger("stop").unwrap();

        assert_eq!(machine.current_state_name(), Some("normal"));
        assert_eq!(machine.step_count(), 3);
    }
}
