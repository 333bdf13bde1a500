//! Core configuration and history types.
//!
//! This module contains the data the state machine is built from:
//! - State definitions and the reserved `normal` state name
//! - The ordered configuration table and its JSON format
//! - The undo/redo history stack
//!
//! Nothing here performs I/O beyond parsing a caller-supplied document.

mod config;
mod error;
mod history;
mod state;

pub use config::Configuration;
pub use error::ConfigError;
pub use state::{StateDefinition, NORMAL_STATE};

pub(crate) use history::History;
