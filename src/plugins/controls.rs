//! Keyboard controls
//!
//! - Escape: quit
//! - Space: pause or resume
//! - R: restart from the initial layout

use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            send_commands_from_keys.in_set(SimulationSet::Input),
        );
    }
}

/// Command bound to a key, if any
pub fn command_for_key(key: KeyCode) -> Option<SimulationCommand> {
    match key {
        KeyCode::Escape => Some(SimulationCommand::Quit),
        KeyCode::Space => Some(SimulationCommand::TogglePause),
        KeyCode::KeyR => Some(SimulationCommand::Restart),
        _ => None,
    }
}

pub fn send_commands_from_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut simulation_commands: EventWriter<SimulationCommand>,
) {
    for &key in keys.get_just_pressed() {
        if let Some(command) = command_for_key(key) {
            simulation_commands.write(command);
        }
    }
}
