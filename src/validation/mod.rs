//! Eager configuration checking that reports every problem at once.
//!
//! Machines are built lazily: an unknown initial state or a transition into a
//! missing state only fails when the machine reaches it. Call [`validate`]
//! (or [`StateMachine::validated`](crate::StateMachine::validated)) to find all
//! of those problems up front instead.
//!
//! Checks use Stillwater's `Validation` so that one pass over the configuration
//! collects every violation rather than stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use retrace::core::{Configuration, StateDefinition};
//! use retrace::validation::{validate, ConfigViolation};
//! use stillwater::validation::Validation;
//!
//! let config = Configuration::new(
//!     "idle",
//!     vec![("idle", StateDefinition::new().with_transition("go", "nowhere"))],
//! );
//!
//! match validate(&config) {
//!     Validation::Failure(violations) => {
//!         assert_eq!(violations.len(), 2);
//!         assert!(violations
//!             .iter()
//!             .any(|v| matches!(v, ConfigViolation::DanglingTransition { .. })));
//!     }
//!     Validation::Success(_) => panic!("expected violations"),
//! }
//! ```

mod violations;

pub use violations::ConfigViolation;

use crate::core::{Configuration, NORMAL_STATE};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check `config` for every problem that lazy construction would defer.
///
/// Returns `Validation::Success(())` when the initial state, every transition
/// target, and the reserved `normal` state all resolve.
pub fn validate(config: &Configuration) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

    checks.push(if config.contains(config.initial()) {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::UnknownInitial {
            initial: config.initial().to_string(),
        })
    });

    checks.push(if config.contains(NORMAL_STATE) {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::MissingNormalState)
    });

    for (state, definition) in config.iter() {
        for (event, target) in definition.transitions() {
            if !config.contains(target) {
                checks.push(Validation::fail(ConfigViolation::DanglingTransition {
                    state: state.to_string(),
                    event: event.to_string(),
                    target: target.to_string(),
                }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Collect the violations of a failed validation into a plain vector.
pub(crate) fn violations(config: &Configuration) -> Vec<ConfigViolation> {
    match validate(config) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateDefinition;

    fn go_stop() -> Configuration {
        Configuration::new(
            "normal",
            vec![
                ("normal", StateDefinition::new().with_transition("go", "running")),
                ("running", StateDefinition::new().with_transition("stop", "normal")),
            ],
        )
    }

    #[test]
    fn well_formed_configuration_passes() {
        assert!(validate(&go_stop()).is_success());
        assert!(violations(&go_stop()).is_empty());
    }

    #[test]
    fn unknown_initial_is_reported() {
        let config = Configuration::new("missing", vec![("normal", StateDefinition::new())]);

        let found = violations(&config);
        assert_eq!(
            found,
            vec![ConfigViolation::UnknownInitial {
                initial: "missing".to_string()
            }]
        );
    }

    #[test]
    fn missing_normal_state_is_reported() {
        let config = Configuration::new("idle", vec![("idle", StateDefinition::new())]);

        assert_eq!(violations(&config), vec![ConfigViolation::MissingNormalState]);
    }

    #[test]
    fn accumulates_all_violations() {
        let config = Configuration::new(
            "ghost",
            vec![
                ("idle", StateDefinition::new().with_transition("go", "busy")),
                (
                    "busy",
                    StateDefinition::new()
                        .with_transition("done", "finished")
                        .with_transition("fail", "broken"),
                ),
            ],
        );

        let result = validate(&config);
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert_eq!(errors.len(), 4);
            assert!(errors
                .iter()
                .any(|e| matches!(e, ConfigViolation::UnknownInitial { .. })));
            assert!(errors
                .iter()
                .any(|e| matches!(e, ConfigViolation::MissingNormalState)));
            let dangling = errors
                .iter()
                .filter(|e| matches!(e, ConfigViolation::DanglingTransition { .. }))
                .count();
            assert_eq!(dangling, 2);
        }
    }

    #[test]
    fn violation_messages_name_the_problem() {
        let violation = ConfigViolation::DanglingTransition {
            state: "busy".to_string(),
            event: "done".to_string(),
            target: "finished".to_string(),
        };
        assert_eq!(
            violation.to_string(),
            "Transition 'done' in state 'busy' targets undefined state 'finished'"
        );
    }
}
