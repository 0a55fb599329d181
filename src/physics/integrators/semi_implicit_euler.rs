//! Semi-implicit Euler integration method (Euler-Cromer)

use super::Integrator;
use crate::physics::math::{Scalar, Vector};

/// Default multiplier applied to elapsed time
pub const DEFAULT_BOOST_FACTOR: Scalar = 0.15;

/// Semi-implicit Euler integrator with a boosted time step
///
/// Velocity is advanced from the start-of-step acceleration first, then
/// position is advanced using the new velocity. Elapsed time is scaled by
/// `boost_factor`, which decouples simulated speed from frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemiImplicitEuler {
    pub boost_factor: Scalar,
}

impl Default for SemiImplicitEuler {
    fn default() -> Self {
        Self {
            boost_factor: DEFAULT_BOOST_FACTOR,
        }
    }
}

impl SemiImplicitEuler {
    pub fn new(boost_factor: Scalar) -> Self {
        Self { boost_factor }
    }
}

impl Integrator for SemiImplicitEuler {
    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar) {
        // v(t+dt) = v(t) + a(t) * dt * boost
        *velocity += acceleration * dt * self.boost_factor;

        // x(t+dt) = x(t) + v(t+dt) * dt * boost
        *position += *velocity * dt * self.boost_factor;
    }

    fn name(&self) -> &str {
        "Semi-implicit Euler"
    }
}
