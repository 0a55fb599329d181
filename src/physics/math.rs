/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 3D vector type for positions, velocities, and accelerations
pub type Vector = bevy::math::DVec3;

const PI: Scalar = core::f64::consts::PI;
const DEGREES_PER_RADIAN: Scalar = 180.0 / PI;

#[inline]
pub fn to_radians(degrees: Scalar) -> Scalar {
    PI * degrees / 180.0
}

#[inline]
pub fn to_degrees(radians: Scalar) -> Scalar {
    radians * DEGREES_PER_RADIAN
}

/// Ratio `numerator / dx`, taken as zero when `dx` is exactly zero.
#[inline]
pub fn guarded_ratio(numerator: Scalar, dx: Scalar) -> Scalar {
    if dx == 0.0 { 0.0 } else { numerator / dx }
}

/// Bearing in degrees of an offset whose run along x is `dx`.
///
/// Computed as `90 - atan(numerator / dx)` and shifted by -180 when `dx` is
/// negative, so that the projected component points back across the whole
/// circle rather than only the half-plane `atan` covers.
pub fn bearing_degrees(numerator: Scalar, dx: Scalar) -> Scalar {
    let bearing = 90.0 - to_degrees(libm::atan(guarded_ratio(numerator, dx)));
    if dx < 0.0 { bearing - 180.0 } else { bearing }
}

/// Point on a circle in screen space, with the angle in degrees.
pub fn point_on_circle(center: Vector, radius: Scalar, angle_degrees: Scalar) -> Vector {
    let angle = to_radians(angle_degrees);
    Vector::new(
        radius * libm::cos(angle) + center.x,
        radius * libm::sin(angle) + center.y,
        center.z,
    )
}
