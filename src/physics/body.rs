//! Simulated point masses

use crate::physics::math::{Scalar, Vector};
use crate::utils::color::BodyColor;

/// One simulated point mass.
///
/// x and y are screen-plane coordinates; z is a synthetic depth axis that
/// takes part in the force computation and drives the depth cues used when
/// drawing, but is not unit-consistent with x and y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vector,
    pub velocity: Vector,
    mass: Scalar,
    pub color: BodyColor,
}

impl Body {
    /// Returns `None` unless `mass` is positive and finite.
    pub fn new(position: Vector, velocity: Vector, mass: Scalar, color: BodyColor) -> Option<Self> {
        (mass.is_finite() && mass > 0.0).then_some(Self {
            position,
            velocity,
            mass,
            color,
        })
    }

    /// Mass is fixed for the lifetime of the body.
    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }
}
