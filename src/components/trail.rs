use crate::prelude::*;
use std::collections::VecDeque;

/// Past positions of one body, newest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trail {
    pub points: VecDeque<Vector>,
    pub last_update: f32,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, position: Vector, current_time: f32) {
        self.points.push_front(position);
        self.last_update = current_time;
    }

    /// Drop the oldest points beyond `max_points`
    pub fn enforce_limit(&mut self, max_points: usize) {
        self.points.truncate(max_points);
    }

    pub fn should_update(&self, current_time: f32, update_interval: f32) -> bool {
        current_time - self.last_update >= update_interval
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.last_update = 0.0;
    }
}

/// One trail per body, indexed like the body store
#[derive(Resource, Deref, DerefMut, Clone, Debug, Default, PartialEq)]
pub struct Trails(pub Vec<Trail>);

impl Trails {
    pub fn for_body_count(body_count: usize) -> Self {
        Self(vec![Trail::new(); body_count])
    }

    pub fn clear(&mut self) {
        self.0.iter_mut().for_each(Trail::clear);
    }
}
