//! Ordered arena of bodies addressed by positional index

use crate::error::SimulationError;
use crate::physics::body::Body;

/// The bodies of one simulation run.
///
/// The set of bodies is fixed once constructed; only their kinematic state
/// changes, and only through [`crate::physics::engine::PhysicsEngine`].
#[derive(Debug, Clone, PartialEq)]
pub struct BodyStore {
    bodies: Vec<Body>,
}

impl BodyStore {
    pub fn from_bodies(bodies: Vec<Body>) -> Result<Self, SimulationError> {
        if bodies.is_empty() {
            return Err(SimulationError::InvalidBodyCount(0));
        }

        Ok(Self { bodies })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Always false for a constructed store; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}

impl<'a> IntoIterator for &'a BodyStore {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::math::Vector;
    use crate::utils::color::BodyColor;

    #[test]
    fn test_empty_store_is_rejected() {
        assert_eq!(
            BodyStore::from_bodies(Vec::new()),
            Err(SimulationError::InvalidBodyCount(0))
        );
    }

    #[test]
    fn test_index_is_identity() {
        let bodies: Vec<Body> = (0..3)
            .map(|i| {
                Body::new(
                    Vector::new(i as f64, 0.0, 0.0),
                    Vector::ZERO,
                    1.0,
                    BodyColor::default(),
                )
                .unwrap()
            })
            .collect();
        let store = BodyStore::from_bodies(bodies).unwrap();

        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
        for (index, body) in store.iter().enumerate() {
            assert_eq!(store.get(index), Some(body));
            assert_eq!(body.position.x, index as f64);
        }
        assert!(store.get(3).is_none());
    }
}
