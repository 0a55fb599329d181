//! Initial placement of bodies on a ring

use crate::error::SimulationError;
use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector, point_on_circle};
use crate::physics::store::BodyStore;
use crate::utils::color::BodyColor;

/// Angle of the first body, pointing straight up on screen
pub const FIRST_BODY_ANGLE_DEGREES: Scalar = -90.0;

/// Ring radius for a given body count
pub fn ring_radius(body_count: usize) -> Scalar {
    match body_count {
        0..=6 => 100.0,
        7..=12 => 160.0,
        _ => 220.0,
    }
}

/// Places `body_count` bodies evenly around a ring centred on `center`.
///
/// Every body starts at rest at depth zero with the shared `mass`. Colors
/// are drawn from `next_color` in index order.
pub fn circular_layout(
    body_count: usize,
    center: Vector,
    mass: Scalar,
    mut next_color: impl FnMut() -> BodyColor,
) -> Result<BodyStore, SimulationError> {
    if body_count == 0 {
        return Err(SimulationError::InvalidBodyCount(body_count));
    }

    let radius = ring_radius(body_count);
    let step = 360.0 / body_count as Scalar;
    let center = Vector::new(center.x, center.y, 0.0);

    let mut angle = FIRST_BODY_ANGLE_DEGREES;
    let mut bodies = Vec::with_capacity(body_count);
    for _ in 0..body_count {
        let position = point_on_circle(center, radius, angle);
        let body = Body::new(position, Vector::ZERO, mass, next_color())
            .ok_or(SimulationError::NonPositiveMass(mass))?;
        bodies.push(body);
        angle += step;
    }

    BodyStore::from_bodies(bodies)
}
