//! Color utilities for bodies, trails and the HUD.
//!
//! Body colors are plain 8-bit RGB triples so that the physics types can carry
//! them without depending on the renderer. Conversion to Bevy colors happens
//! only at draw time.
//!
//! # Depth cues
//!
//! The z axis has no on-screen position, so it is shown through two cues:
//!
//! - **Radius**: `max(min, base + z / divisor)`, see [`depth_radius`]
//! - **Opacity**: `clamp(base + z / divisor, min, max)`, see [`depth_opacity`]

use crate::config::RenderingConfig;
use crate::physics::math::Scalar;
use crate::resources::RenderingRng;
use bevy::color::{Alpha, Color};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lowest channel value a randomly generated body color can take
pub const RANDOM_CHANNEL_FLOOR: u8 = 50;

/// Width of the random range added on top of the floor
pub const RANDOM_CHANNEL_SPAN: u8 = 200;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Default for BodyColor {
    fn default() -> Self {
        Self::new(200, 200, 200)
    }
}

impl BodyColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn to_color(self) -> Color {
        Color::srgb_u8(self.red, self.green, self.blue)
    }

    /// Same hue with its alpha taken from the body's depth
    pub fn at_depth(self, z: Scalar, config: &RenderingConfig) -> Color {
        self.to_color().with_alpha(depth_opacity(z, config) as f32)
    }
}

/// Random color with every channel in `50..=250`
pub fn random_body_color(rng: &mut RenderingRng) -> BodyColor {
    let mut channel =
        || RANDOM_CHANNEL_FLOOR + rng.random_range(0..=RANDOM_CHANNEL_SPAN);
    let red = channel();
    let green = channel();
    let blue = channel();
    BodyColor::new(red, green, blue)
}

/// On-screen radius for a body at depth `z`
pub fn depth_radius(z: Scalar, config: &RenderingConfig) -> Scalar {
    (config.body_radius + z / config.depth_divisor).max(config.min_body_radius)
}

/// Trail opacity for a point at depth `z`, in `0.0..=1.0`
pub fn depth_opacity(z: Scalar, config: &RenderingConfig) -> Scalar {
    (config.trail_opacity + z / config.depth_divisor)
        .clamp(config.min_trail_opacity, config.max_trail_opacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_colors_stay_in_range() {
        let mut rng = RenderingRng::from_seed(7);
        for _ in 0..1_000 {
            let color = random_body_color(&mut rng);
            for channel in [color.red, color.green, color.blue] {
                assert!((50..=250).contains(&channel), "channel out of range: {channel}");
            }
        }
    }

    #[test]
    fn test_random_colors_repeat_with_seed() {
        let mut rng1 = RenderingRng::from_seed(99);
        let mut rng2 = RenderingRng::from_seed(99);

        let colors1: Vec<BodyColor> = (0..8).map(|_| random_body_color(&mut rng1)).collect();
        let colors2: Vec<BodyColor> = (0..8).map(|_| random_body_color(&mut rng2)).collect();

        assert_eq!(colors1, colors2);
    }

    #[test]
    fn test_depth_radius() {
        let config = RenderingConfig::default();

        assert_eq!(depth_radius(0.0, &config), 7.0);
        assert_eq!(depth_radius(200.0, &config), 8.0);
        assert_eq!(depth_radius(-1400.0, &config), 1.0);
        assert_eq!(depth_radius(-5000.0, &config), 1.0);
    }

    #[test]
    fn test_depth_opacity_is_clamped() {
        let config = RenderingConfig::default();

        assert_eq!(depth_opacity(0.0, &config), 0.5);
        assert!((depth_opacity(20.0, &config) - 0.6).abs() < 1e-12);
        assert_eq!(depth_opacity(1000.0, &config), 0.8);
        assert_eq!(depth_opacity(-1000.0, &config), 0.1);
    }

    #[test]
    fn test_at_depth_sets_alpha() {
        let config = RenderingConfig::default();
        let color = BodyColor::new(255, 0, 0).at_depth(1000.0, &config);

        assert!((color.alpha() - 0.8).abs() < 1e-6);
    }
}
