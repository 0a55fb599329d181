//! Whole-frame stepping of the body store

use crate::config::PhysicsConfig;
use crate::error::SimulationError;
use crate::physics::forces::ForceLaw;
use crate::physics::integrators::{Integrator, SemiImplicitEuler};
use crate::physics::math::{Scalar, Vector};
use crate::physics::store::BodyStore;

/// Advances every body by one frame.
///
/// Accelerations for all bodies are computed from the same snapshot into a
/// scratch buffer before any body is moved, so the update is synchronous
/// across the store. The buffer is reused between steps and never carries
/// state from one step into the next.
pub struct PhysicsEngine {
    force_law: ForceLaw,
    integrator: Box<dyn Integrator>,
    accelerations: Vec<Vector>,
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new(ForceLaw::default(), Box::new(SemiImplicitEuler::default()))
    }
}

impl PhysicsEngine {
    pub fn new(force_law: ForceLaw, integrator: Box<dyn Integrator>) -> Self {
        Self {
            force_law,
            integrator,
            accelerations: Vec::new(),
        }
    }

    pub fn from_config(config: &PhysicsConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        Ok(Self::new(
            ForceLaw::new(config.force_min_distance),
            Box::new(SemiImplicitEuler::new(config.boost_factor)),
        ))
    }

    #[inline]
    pub fn force_law(&self) -> &ForceLaw {
        &self.force_law
    }

    #[inline]
    pub fn integrator(&self) -> &dyn Integrator {
        self.integrator.as_ref()
    }

    /// Accelerations computed by the most recent successful step, by body index
    #[inline]
    pub fn last_accelerations(&self) -> &[Vector] {
        &self.accelerations
    }

    /// Advance `store` by `dt` seconds of elapsed time.
    ///
    /// Only velocity and position change. `dt` must be finite and
    /// non-negative; anything else leaves the store untouched.
    pub fn step(&mut self, store: &mut BodyStore, dt: Scalar) -> Result<(), SimulationError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimulationError::InvalidTimeStep(dt));
        }

        self.force_law
            .accelerations_into(store.as_slice(), &mut self.accelerations);

        for (body, acceleration) in store.as_mut_slice().iter_mut().zip(&self.accelerations) {
            self.integrator
                .step(&mut body.position, &mut body.velocity, *acceleration, dt);
        }

        Ok(())
    }
}
