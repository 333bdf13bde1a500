//! Macros for declaring configurations inline.

/// Declare a [`Configuration`](crate::core::Configuration) from literals.
///
/// States keep the order they are written in. Like the JSON format, nothing is
/// validated: targets may name states that do not exist.
///
/// # Example
///
/// ```
/// use retrace::{configuration, StateMachine};
///
/// let config = configuration! {
///     initial: "normal",
///     states: {
///         "normal" => { "go" => "running" },
///         "running" => { "stop" => "normal", "crash" => "broken" },
///         "broken" => {},
///     }
/// };
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("go").unwrap();
/// assert_eq!(machine.current_state_name(), Some("running"));
/// ```
#[macro_export]
macro_rules! configuration {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $($event:expr => $target:expr),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {
        $crate::core::Configuration::new(
            $initial,
            ::std::vec![
                $(
                    (
                        $state,
                        $crate::core::StateDefinition::new()
                            $(.with_transition($event, $target))*,
                    )
                ),*
            ],
        )
    };
}
