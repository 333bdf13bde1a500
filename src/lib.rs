//! Retrace: a string-keyed finite state machine with undo/redo history
//!
//! A machine is driven by a declarative [`Configuration`]: named states, each
//! mapping event names to destination states. The machine tracks one current
//! state, follows transitions when events fire, and records every visited state
//! so that changes can be undone and redone.
//!
//! # Core Concepts
//!
//! - **Configuration**: Ordered, read-only state table, shareable between machines
//! - **StateMachine**: Current state, event dispatch, undo/redo
//! - **Validation**: Optional up-front check that reports every problem at once
//!
//! # Example
//!
//! ```rust
//! use retrace::{configuration, StateMachine};
//!
//! let config = configuration! {
//!     initial: "normal",
//!     states: {
//!         "normal" => { "go" => "running" },
//!         "running" => { "stop" => "normal" },
//!     }
//! };
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("go").unwrap();
//! machine.trigger("stop").unwrap();
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state_name(), Some("running"));
//! assert_eq!(machine.states(Some("stop")), vec!["running"]);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, ConfigurationBuilder};
pub use crate::core::{ConfigError, Configuration, StateDefinition, NORMAL_STATE};
pub use machine::{MachineError, StateMachine};
