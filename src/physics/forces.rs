//! Pairwise attraction and per-body acceleration accumulation

use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector, bearing_degrees, to_radians};

/// Default distance floor applied before dividing by the separation
pub const DEFAULT_MIN_DISTANCE: Scalar = 25.0;

/// Inverse-linear attraction with a distance floor.
///
/// `m_a * m_b / max(r, min_distance)`. The floor acts as a soft body radius
/// so that coincident or very close bodies produce a bounded force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceLaw {
    pub min_distance: Scalar,
}

impl Default for ForceLaw {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

impl ForceLaw {
    pub fn new(min_distance: Scalar) -> Self {
        Self { min_distance }
    }

    /// Scalar magnitude of the attraction between two bodies
    #[inline]
    pub fn magnitude(&self, a: &Body, b: &Body) -> Scalar {
        let distance = a.position.distance(b.position);
        a.mass() * b.mass() / distance.max(self.min_distance)
    }

    /// Net pull on `bodies[index]` from every other body.
    ///
    /// The scalar force is projected onto the axes through two bearings, one
    /// in the x-y plane and one in the x-z plane, rather than a normalized
    /// direction vector. The z component is therefore not orthogonal to the
    /// x-y pair; trajectories depend on this exact decomposition.
    pub fn acceleration_on(&self, bodies: &[Body], index: usize) -> Vector {
        let body = &bodies[index];
        let mut acceleration = Vector::ZERO;

        for (other_index, other) in bodies.iter().enumerate() {
            if other_index == index {
                continue;
            }

            let dx = body.position.x - other.position.x;
            let dy = body.position.y - other.position.y;
            let dz = body.position.z - other.position.z;

            let theta = to_radians(bearing_degrees(dy, dx));
            let phi = to_radians(bearing_degrees(dz, dx));

            let force = -self.magnitude(body, other);

            acceleration.x += force * libm::sin(theta);
            acceleration.y += force * libm::cos(theta);
            acceleration.z += force * libm::cos(phi);
        }

        acceleration
    }

    /// Fills `out` with the acceleration of every body, all read from the
    /// same snapshot of `bodies`.
    pub fn accelerations_into(&self, bodies: &[Body], out: &mut Vec<Vector>) {
        out.clear();
        out.extend((0..bodies.len()).map(|index| self.acceleration_on(bodies, index)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::color::BodyColor;

    fn body_at(x: Scalar, y: Scalar, z: Scalar, mass: Scalar) -> Body {
        Body::new(Vector::new(x, y, z), Vector::ZERO, mass, BodyColor::default()).unwrap()
    }

    #[test]
    fn test_magnitude_is_symmetric() {
        let law = ForceLaw::default();
        let a = body_at(0.0, 0.0, 0.0, 1000.0);
        let b = body_at(30.0, 40.0, 12.0, 250.0);

        assert_eq!(law.magnitude(&a, &b), law.magnitude(&b, &a));
    }

    #[test]
    fn test_magnitude_is_inverse_linear() {
        let law = ForceLaw::default();
        let a = body_at(0.0, 0.0, 0.0, 1000.0);
        let b = body_at(100.0, 0.0, 0.0, 1000.0);
        let c = body_at(200.0, 0.0, 0.0, 1000.0);

        assert!((law.magnitude(&a, &b) - 10_000.0).abs() < 1e-9);
        assert!((law.magnitude(&a, &c) - 5_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_magnitude_clamps_close_range() {
        let law = ForceLaw::default();
        let a = body_at(0.0, 0.0, 0.0, 1000.0);
        let clamped = 1000.0 * 1000.0 / 25.0;

        for distance in [0.0, 1.0, 12.5, 24.999, 25.0] {
            let b = body_at(distance, 0.0, 0.0, 1000.0);
            assert_eq!(law.magnitude(&a, &b), clamped);
        }
    }

    #[test]
    fn test_magnitude_non_increasing_with_distance() {
        let law = ForceLaw::default();
        let a = body_at(0.0, 0.0, 0.0, 1000.0);

        let mut previous = Scalar::INFINITY;
        for step in 0..200 {
            let distance = 25.0 + step as Scalar * 3.7;
            let b = body_at(0.0, distance, 0.0, 1000.0);
            let magnitude = law.magnitude(&a, &b);
            assert!(magnitude <= previous);
            previous = magnitude;
        }
    }

    #[test]
    fn test_single_body_has_no_acceleration() {
        let law = ForceLaw::default();
        let bodies = [body_at(10.0, 10.0, 10.0, 1000.0)];

        assert_eq!(law.acceleration_on(&bodies, 0), Vector::ZERO);
    }

    #[test]
    fn test_pull_along_x_points_toward_other_body() {
        let law = ForceLaw::default();
        let bodies = [body_at(0.0, 0.0, 0.0, 1000.0), body_at(100.0, 0.0, 0.0, 1000.0)];

        let left = law.acceleration_on(&bodies, 0);
        let right = law.acceleration_on(&bodies, 1);

        assert!(left.x > 0.0, "left body should be pulled right: {left}");
        assert!(right.x < 0.0, "right body should be pulled left: {right}");
        assert!((left.x + right.x).abs() < 1e-9);
        assert!(left.y.abs() < 1e-9 && right.y.abs() < 1e-9);
    }

    #[test]
    fn test_coincident_x_uses_zero_ratio() {
        let law = ForceLaw::default();
        // dx == 0: both bearings collapse to 90 degrees
        let bodies = [body_at(0.0, 0.0, 0.0, 1000.0), body_at(0.0, 100.0, 0.0, 1000.0)];

        let acceleration = law.acceleration_on(&bodies, 0);
        let magnitude = law.magnitude(&bodies[0], &bodies[1]);

        assert!(acceleration.is_finite());
        assert!((acceleration.x + magnitude).abs() < 1e-9);
        assert!(acceleration.y.abs() < 1e-9);
        assert!(acceleration.z.abs() < 1e-9);
    }

    #[test]
    fn test_depth_component_uses_second_bearing() {
        let law = ForceLaw::default();
        let bodies = [body_at(0.0, 0.0, 0.0, 1000.0), body_at(-50.0, 0.0, 50.0, 1000.0)];

        // dx = 50, dz = -50: phi = 90 - atan(-1) = 135 degrees
        let acceleration = law.acceleration_on(&bodies, 0);
        let force = -law.magnitude(&bodies[0], &bodies[1]);
        let expected_z = force * libm::cos(to_radians(135.0));

        assert!((acceleration.z - expected_z).abs() < 1e-9);
        assert!(acceleration.z > 0.0);
    }

    #[test]
    fn test_accelerations_into_reuses_buffer() {
        let law = ForceLaw::default();
        let bodies = [
            body_at(0.0, 0.0, 0.0, 1000.0),
            body_at(100.0, 0.0, 0.0, 1000.0),
            body_at(0.0, 100.0, 0.0, 1000.0),
        ];

        let mut out = vec![Vector::splat(99.0); 7];
        law.accelerations_into(&bodies, &mut out);

        assert_eq!(out.len(), 3);
        for (index, acceleration) in out.iter().enumerate() {
            assert_eq!(*acceleration, law.acceleration_on(&bodies, index));
        }
    }
}
