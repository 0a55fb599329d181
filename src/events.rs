//! Centralized event definitions
//!
//! Input systems translate key presses into [`SimulationCommand`]s; the
//! simulation and trail plugins react to them.

use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationCommand {
    /// Put every body back where the run started
    Restart,
    TogglePause,
    Quit,
}
