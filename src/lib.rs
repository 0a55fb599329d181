//! Orrery library
//!
//! The [`physics`] module is a self-contained engine that can be stepped
//! without any rendering; [`plugins`] wires it into a Bevy app.

pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod states;
pub mod utils;

// Re-export commonly used items
pub use config::SimulationConfig;
pub use error::SimulationError;
pub use physics::{
    Body, BodyStore, ForceLaw, PhysicsEngine, circular_layout,
    math::{Scalar, Vector},
};
pub use plugins::simulation::SimulationPlugin;
pub use states::AppState;
