//! Linear undo/redo history of visited states.
//!
//! History is a stack of state names ending with the active one, paired with a
//! redo stack of names that were undone. A redo window flag decides whether the
//! redo stack may be replayed: undo opens it, forward progress closes it.

use super::state::NORMAL_STATE;

/// Visited-state stack with redo support.
///
/// Invariants maintained by every method:
/// - while the machine is active, the last visited name is the current state
/// - any forward step closes the redo window; the redo stack itself is only
///   emptied by `clear`
/// - `steps` moves in lockstep with forward progress, undo, and redo
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct History {
    visited: Vec<String>,
    redo: Vec<String>,
    redo_eligible: bool,
    steps: usize,
}

impl History {
    /// History for a fresh machine: `["normal"]`, one step, nothing to redo.
    pub(crate) fn seeded() -> Self {
        Self {
            visited: vec![NORMAL_STATE.to_string()],
            redo: Vec::new(),
            redo_eligible: false,
            steps: 1,
        }
    }

    /// Record forward progress into `name`.
    pub(crate) fn advance(&mut self, name: &str) {
        self.visited.push(name.to_string());
        self.steps += 1;
        self.redo_eligible = false;
    }

    pub(crate) fn close_redo_window(&mut self) {
        self.redo_eligible = false;
    }

    /// Move one entry back, returning the name that is now last.
    ///
    /// Returns `None` without touching anything when fewer than two entries
    /// remain.
    pub(crate) fn step_back(&mut self) -> Option<&str> {
        if self.visited.len() <= 1 {
            return None;
        }
        let undone = self.visited.pop()?;
        self.redo.push(undone);
        self.steps = self.steps.saturating_sub(1);
        self.redo_eligible = true;
        self.visited.last().map(String::as_str)
    }

    /// Replay the most recently undone entry, returning its name.
    ///
    /// Returns `None` when the redo stack is empty or the window is closed.
    /// A successful redo leaves the window open.
    pub(crate) fn step_forward(&mut self) -> Option<&str> {
        if !self.redo_eligible {
            return None;
        }
        let redone = self.redo.pop()?;
        self.visited.push(redone);
        self.steps += 1;
        self.visited.last().map(String::as_str)
    }

    /// Drop every entry from both stacks.
    pub(crate) fn clear(&mut self) {
        self.visited.clear();
        self.redo.clear();
        self.steps = 0;
        self.redo_eligible = false;
    }

    #[cfg(test)]
    pub(crate) fn last(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.visited.len()
    }

    #[cfg(test)]
    pub(crate) fn redo_len(&self) -> usize {
        self.redo.len()
    }

    #[cfg(test)]
    pub(crate) fn is_redo_eligible(&self) -> bool {
        self.redo_eligible
    }

    pub(crate) fn steps(&self) -> usize {
        self.steps
    }

    #[cfg(test)]
    pub(crate) fn visited(&self) -> &[String] {
        &self.visited
    }
}
