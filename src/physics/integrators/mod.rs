//! Numerical integration of body motion

use crate::physics::math::{Scalar, Vector};

pub mod semi_implicit_euler;

pub use semi_implicit_euler::SemiImplicitEuler;

/// Base trait for integrators
pub trait Integrator: Send + Sync {
    /// Advance a single body's state by one time step
    ///
    /// # Arguments
    /// * `position` - Mutable reference to position
    /// * `velocity` - Mutable reference to velocity vector
    /// * `acceleration` - Acceleration computed from the start-of-step snapshot
    /// * `dt` - Elapsed time since the previous step
    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar);

    /// Get the name of this integrator
    fn name(&self) -> &str;
}
