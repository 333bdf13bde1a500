//! Editor Modes
//!
//! This example drives a modal editor's mode switching with undo/redo.
//!
//! Key concepts:
//! - Loading a configuration from JSON
//! - Firing events and handling unhandled ones
//! - Undo/redo and how forward progress closes the redo window
//! - Structured logging of every transition
//!
//! Run with: RUST_LOG=retrace=debug cargo run --example editor_modes

use retrace::{Configuration, MachineError, StateMachine};

const MODES: &str = r#"{
    "states": {
        "normal": { "transitions": { "i": "insert", "v": "visual", ":": "command" } },
        "insert": { "transitions": { "esc": "normal" } },
        "visual": { "transitions": { "esc": "normal", "i": "insert" } },
        "command": { "transitions": { "esc": "normal", "enter": "normal" } }
    },
    "initial": "normal"
}"#;

fn show(machine: &StateMachine) {
    println!(
        "  mode: {:<8} steps: {}",
        machine.current_state_name().unwrap_or("<none>"),
        machine.step_count()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("=== Editor Modes ===\n");

    let config = Configuration::from_json(MODES)?;
    let mut machine = StateMachine::validated(config)?;
    show(&machine);

    println!("\nKeys pressed: v, i, esc");
    for key in ["v", "i", "esc"] {
        machine.trigger(key)?;
        show(&machine);
    }

    println!("\nKey 'enter' in normal mode:");
    match machine.trigger("enter") {
        Err(MachineError::UnhandledEvent { event, state }) => {
            println!("  '{event}' ignored in {}", state.as_deref().unwrap_or("<none>"));
        }
        other => other?,
    }

    println!("\nUndo twice, redo once:");
    machine.undo();
    machine.undo();
    machine.redo();
    show(&machine);

    println!("\nEntering command mode closes the redo window:");
    machine.change_state("command")?;
    println!("  redo available: {}", machine.redo());
    show(&machine);

    println!("\nModes reachable with 'esc': {:?}", machine.states(Some("esc")));
    println!("All modes: {:?}", machine.states(None));

    println!("\n=== Example Complete ===");
    Ok(())
}
