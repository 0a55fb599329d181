//! Orrery prelude module
//!
//! Re-exports the types most systems need so plugin modules can start with a
//! single `use crate::prelude::*;`.

// External crate re-exports
pub use bevy::prelude::*;

// Internal re-exports - Config
pub use crate::config::SimulationConfig;

// Internal re-exports - Events and states
pub use crate::events::SimulationCommand;
pub use crate::states::AppState;

// Internal re-exports - Physics
pub use crate::physics::math::{Scalar, Vector};
