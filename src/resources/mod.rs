use crate::physics::math::Scalar;
use crate::physics::{BodyStore, PhysicsEngine};
use bevy::prelude::*;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

/// Seed offset that keeps body colors independent of any other seeded stream
const RENDERING_SEED_SALT: u64 = 0x6f72_7265_7279;

/// Random source for presentation only; physics never draws from it
#[derive(Deref, DerefMut, Debug, Clone, PartialEq)]
pub struct RenderingRng(pub ChaCha8Rng);

impl RenderingRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed ^ RENDERING_SEED_SALT))
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::default(),
        }
    }
}

impl Default for RenderingRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

/// Live body state, indexed by body identity
#[derive(Resource, Deref, DerefMut, Debug, Clone, PartialEq)]
pub struct Bodies(pub BodyStore);

/// Body state as it was laid out at the start of the run
#[derive(Resource, Deref, Debug, Clone, PartialEq)]
pub struct InitialBodies(pub BodyStore);

#[derive(Resource, Deref, DerefMut)]
pub struct Engine(pub PhysicsEngine);

/// Elapsed time fed to the engine since the run started
#[derive(Resource, Deref, DerefMut, Copy, Clone, Default, PartialEq, Debug)]
pub struct ElapsedTime(pub Scalar);
