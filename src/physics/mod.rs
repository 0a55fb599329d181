//! Headless gravity engine
//!
//! Nothing in this module touches the presentation layer; a [`BodyStore`]
//! and a [`PhysicsEngine`] are enough to run a simulation.

pub mod body;
pub mod engine;
pub mod forces;
pub mod integrators;
pub mod layout;
pub mod math;
pub mod store;

pub use body::Body;
pub use engine::PhysicsEngine;
pub use forces::ForceLaw;
pub use layout::circular_layout;
pub use store::BodyStore;
