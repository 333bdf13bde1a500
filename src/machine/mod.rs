//! The state machine: current state, event dispatch, and undo/redo.
//!
//! A [`StateMachine`] reads a shared [`Configuration`] and owns everything that
//! changes at runtime. All operations are synchronous. Mutating methods take
//! `&mut self`, so hosts that share a machine across threads must wrap it in a
//! lock themselves.

mod error;

pub use error::MachineError;

use crate::core::{Configuration, History, NORMAL_STATE};
use crate::validation;
use std::sync::Arc;
use tracing::{debug, warn};

/// Finite state machine with linear undo/redo history.
///
/// The configuration is held behind an `Arc` and never modified, so several
/// machines may share one configuration and still move independently.
///
/// History always starts as `["normal"]` ([`NORMAL_STATE`]), whatever the
/// configured initial state is. Undoing all the way back therefore lands on
/// `normal`.
///
/// # Example
///
/// ```rust
/// use retrace::{Configuration, StateMachine};
///
/// let config = Configuration::from_json(r#"{
///     "states": {
///         "normal":  { "transitions": { "go": "running" } },
///         "running": { "transitions": { "stop": "normal" } }
///     },
///     "initial": "normal"
/// }"#).unwrap();
///
/// let mut machine = StateMachine::new(config);
/// assert_eq!(machine.current_state_name(), Some("normal"));
///
/// machine.trigger("go").unwrap();
/// assert_eq!(machine.current_state_name(), Some("running"));
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state_name(), Some("normal"));
///
/// assert!(machine.redo());
/// assert_eq!(machine.current_state_name(), Some("running"));
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Arc<Configuration>,
    current: Option<usize>,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configured initial state.
    ///
    /// Nothing is validated. If `initial` names no configured state the machine
    /// starts with no current state and [`current_state_name`] returns `None`.
    ///
    /// [`current_state_name`]: Self::current_state_name
    pub fn new(config: impl Into<Arc<Configuration>>) -> Self {
        let config = config.into();
        let current = config.position(config.initial());
        if current.is_none() {
            warn!(initial = config.initial(), "initial state is not defined");
        }
        Self {
            config,
            current,
            history: History::seeded(),
        }
    }

    /// Create a machine after checking the whole configuration up front.
    ///
    /// Fails with [`MachineError::InvalidConfiguration`] listing every problem
    /// found by [`validation::validate`].
    pub fn validated(config: impl Into<Arc<Configuration>>) -> Result<Self, MachineError> {
        let config = config.into();
        let violations = validation::violations(&config);
        if !violations.is_empty() {
            warn!(count = violations.len(), "configuration failed validation");
            return Err(MachineError::InvalidConfiguration(violations));
        }
        Ok(Self::new(config))
    }

    /// Shared handle to the configuration this machine reads.
    pub fn configuration(&self) -> &Arc<Configuration> {
        &self.config
    }

    /// Name of the active state, or `None` if the machine sits on a name that
    /// is not configured.
    pub fn current_state_name(&self) -> Option<&str> {
        self.current
            .and_then(|index| self.config.entry(index))
            .map(|(name, _)| name)
    }

    /// Move to `name` directly, recording it in history.
    ///
    /// Closes the redo window. Entries already undone stay on the redo stack
    /// and become reachable again after the next [`undo`](Self::undo).
    pub fn change_state(&mut self, name: &str) -> Result<(), MachineError> {
        let Some(index) = self.config.position(name) else {
            warn!(state = name, "rejected change to undefined state");
            return Err(MachineError::InvalidState {
                name: name.to_string(),
            });
        };

        self.current = Some(index);
        self.history.advance(name);
        debug!(state = name, step = self.history.steps(), "changed state");
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// Fails with [`MachineError::UnhandledEvent`] when the current state has
    /// no rule for `event`, and with [`MachineError::InvalidState`] when the
    /// rule points at an undefined state. Neither failure changes anything.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let config = Arc::clone(&self.config);
        let target = self
            .current
            .and_then(|index| config.entry(index))
            .and_then(|(_, state)| state.target(event));

        let Some(target) = target else {
            warn!(event, state = ?self.current_state_name(), "unhandled event");
            return Err(MachineError::UnhandledEvent {
                event: event.to_string(),
                state: self.current_state_name().map(str::to_owned),
            });
        };

        debug!(event, target, "event triggered transition");
        self.change_state(target)?;
        self.history.close_redo_window();
        Ok(())
    }

    /// Move to the reserved `normal` state.
    pub fn reset(&mut self) -> Result<(), MachineError> {
        debug!("resetting to {}", NORMAL_STATE);
        self.change_state(NORMAL_STATE)
    }

    /// State names in configuration order.
    ///
    /// With an event, only the states that have a transition for it. An empty
    /// event name counts as no event.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            Some(event) if !event.is_empty() => self
                .config
                .iter()
                .filter(|(_, state)| state.handles(event))
                .map(|(name, _)| name)
                .collect(),
            _ => self.config.names().collect(),
        }
    }

    /// Step back to the previous state in history.
    ///
    /// Returns `false` and does nothing when history has one entry or none.
    pub fn undo(&mut self) -> bool {
        let Some(name) = self.history.step_back() else {
            debug!("nothing to undo");
            return false;
        };

        let current = self.config.position(name);
        if current.is_none() {
            warn!(state = name, "undo landed on a state that is not defined");
        }
        self.current = current;
        debug!(state = ?self.current_state_name(), step = self.history.steps(), "undo");
        true
    }

    /// Reapply the most recently undone state.
    ///
    /// Only allowed while the redo window opened by [`undo`](Self::undo) is
    /// still open. Any forward transition closes it.
    pub fn redo(&mut self) -> bool {
        let Some(name) = self.history.step_forward() else {
            debug!("nothing to redo");
            return false;
        };

        self.current = self.config.position(name);
        debug!(state = ?self.current_state_name(), step = self.history.steps(), "redo");
        true
    }

    /// Forget all history and redo entries. The current state is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
        debug!(state = ?self.current_state_name(), "history cleared");
    }

    /// Net forward progress: transitions and redos minus undos.
    ///
    /// Diagnostic only. Starts at 1 and drops to 0 after
    /// [`clear_history`](Self::clear_history).
    pub fn step_count(&self) -> usize {
        self.history.steps()
    }
}
