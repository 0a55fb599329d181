//! Caps the windowed frame rate at `window.target_frame_rate`
//!
//! At the end of every frame the limiter sleeps for whatever is left of the
//! frame budget, measured from the end of the previous frame.

use crate::prelude::*;
use std::time::{Duration, Instant};

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FrameLimiter {
    pub frame_budget: Duration,
    last_frame_end: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(target_frame_rate: Scalar) -> Self {
        Self {
            frame_budget: frame_budget(target_frame_rate),
            last_frame_end: None,
        }
    }
}

pub struct FramePacingPlugin;

impl Plugin for FramePacingPlugin {
    fn build(&self, app: &mut App) {
        let target_frame_rate = app
            .world()
            .get_resource::<SimulationConfig>()
            .map(|config| config.window.target_frame_rate)
            .unwrap_or_else(|| SimulationConfig::default().window.target_frame_rate);

        debug!("Capping frame rate at {target_frame_rate} fps");

        app.insert_resource(FrameLimiter::new(target_frame_rate));
        app.add_systems(Last, limit_frame_rate);
    }
}

/// Wall-clock time one frame may take at `target_frame_rate`.
///
/// A rate that is not positive and finite gives no budget.
pub fn frame_budget(target_frame_rate: Scalar) -> Duration {
    if target_frame_rate.is_finite() && target_frame_rate > 0.0 {
        Duration::from_secs_f64(1.0 / target_frame_rate)
    } else {
        Duration::ZERO
    }
}

/// How long to sleep after a frame that took `frame_time`
pub fn remaining_budget(frame_time: Duration, frame_budget: Duration) -> Duration {
    frame_budget.saturating_sub(frame_time)
}

pub fn limit_frame_rate(mut limiter: ResMut<FrameLimiter>) {
    if let Some(last_frame_end) = limiter.last_frame_end {
        let pause = remaining_budget(last_frame_end.elapsed(), limiter.frame_budget);
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
    }

    limiter.last_frame_end = Some(Instant::now());
}
