//! Errors raised while configuring or stepping a simulation

use crate::physics::math::Scalar;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationError {
    /// A simulation needs at least one body
    InvalidBodyCount(usize),
    /// Body mass must be positive and finite
    NonPositiveMass(Scalar),
    /// Boost factor must be finite and non-negative
    InvalidBoostFactor(Scalar),
    /// Force-law distance floor must be positive and finite
    InvalidMinDistance(Scalar),
    /// Elapsed time must be finite and non-negative
    InvalidTimeStep(Scalar),
    /// Target frame rate must be positive and finite
    InvalidFrameRate(Scalar),
    /// Window dimensions must be positive and finite
    InvalidWindowSize { width: f32, height: f32 },
    /// Trail opacity bounds must satisfy `0 <= min <= max <= 1`
    InvalidOpacityRange { min: Scalar, max: Scalar },
    /// A rendering setting is out of range
    InvalidRenderingValue { name: &'static str, value: Scalar },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidBodyCount(count) => {
                write!(f, "Invalid body count {count}: at least one body is required")
            }
            SimulationError::NonPositiveMass(mass) => {
                write!(f, "Invalid body mass {mass}: mass must be greater than zero")
            }
            SimulationError::InvalidBoostFactor(boost) => {
                write!(f, "Invalid boost factor {boost}: must be finite and non-negative")
            }
            SimulationError::InvalidMinDistance(distance) => {
                write!(f, "Invalid force distance floor {distance}: must be greater than zero")
            }
            SimulationError::InvalidTimeStep(dt) => {
                write!(f, "Invalid time step {dt}: must be finite and non-negative")
            }
            SimulationError::InvalidFrameRate(rate) => {
                write!(f, "Invalid target frame rate {rate}: must be greater than zero")
            }
            SimulationError::InvalidWindowSize { width, height } => {
                write!(f, "Invalid window size {width}x{height}: both sides must be positive")
            }
            SimulationError::InvalidOpacityRange { min, max } => {
                write!(f, "Invalid trail opacity range {min}..={max}: need 0 <= min <= max <= 1")
            }
            SimulationError::InvalidRenderingValue { name, value } => {
                write!(f, "Invalid rendering setting {name} = {value}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_offending_value() {
        assert!(SimulationError::InvalidBodyCount(0).to_string().contains('0'));
        assert!(SimulationError::NonPositiveMass(-3.0).to_string().contains("-3"));
        assert!(SimulationError::InvalidTimeStep(-0.5).to_string().contains("-0.5"));
        assert!(
            SimulationError::InvalidRenderingValue {
                name: "depth_divisor",
                value: 0.0,
            }
            .to_string()
            .contains("depth_divisor")
        );
    }
}
