use crate::error::SimulationError;
use crate::physics::forces::DEFAULT_MIN_DISTANCE;
use crate::physics::integrators::semi_implicit_euler::DEFAULT_BOOST_FACTOR;
use crate::physics::math::{Scalar, Vector};
use crate::utils::color::BodyColor;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub window: WindowConfig,
    pub rendering: RenderingConfig,
    pub trails: TrailConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub body_count: usize,
    pub body_mass: Scalar,
    pub boost_factor: Scalar,
    pub force_min_distance: Scalar,
    /// Constant elapsed time per frame; wall-clock frame time when unset
    pub fixed_time_step: Option<Scalar>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            body_count: 3,
            body_mass: 1000.0,
            boost_factor: DEFAULT_BOOST_FACTOR,
            force_min_distance: DEFAULT_MIN_DISTANCE,
            fixed_time_step: None,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.body_count == 0 {
            return Err(SimulationError::InvalidBodyCount(self.body_count));
        }

        if !self.body_mass.is_finite() || self.body_mass <= 0.0 {
            return Err(SimulationError::NonPositiveMass(self.body_mass));
        }

        if !self.boost_factor.is_finite() || self.boost_factor < 0.0 {
            return Err(SimulationError::InvalidBoostFactor(self.boost_factor));
        }

        if !self.force_min_distance.is_finite() || self.force_min_distance <= 0.0 {
            return Err(SimulationError::InvalidMinDistance(self.force_min_distance));
        }

        if let Some(dt) = self.fixed_time_step {
            if !dt.is_finite() || dt < 0.0 {
                return Err(SimulationError::InvalidTimeStep(dt));
            }
        }

        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub target_frame_rate: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Orrery".to_string(),
            width: 1200.0,
            height: 780.0,
            target_frame_rate: 60.0,
        }
    }
}

impl WindowConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        let positive = |side: f32| side.is_finite() && side > 0.0;
        if !positive(self.width) || !positive(self.height) {
            return Err(SimulationError::InvalidWindowSize {
                width: self.width,
                height: self.height,
            });
        }

        if !self.target_frame_rate.is_finite() || self.target_frame_rate <= 0.0 {
            return Err(SimulationError::InvalidFrameRate(self.target_frame_rate));
        }

        Ok(())
    }

    /// Centre of the viewport in screen coordinates
    pub fn center(&self) -> Vector {
        Vector::new(self.width as Scalar / 2.0, self.height as Scalar / 2.0, 0.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RenderingConfig {
    /// Seed for body colors; random when unset
    pub color_seed: Option<u64>,
    pub body_radius: Scalar,
    pub min_body_radius: Scalar,
    pub trail_opacity: Scalar,
    pub min_trail_opacity: Scalar,
    pub max_trail_opacity: Scalar,
    /// Depth units per unit of radius or opacity change
    pub depth_divisor: Scalar,
    pub background_color: BodyColor,
    pub text_color: BodyColor,
    pub axis_color: BodyColor,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            color_seed: None,
            body_radius: 7.0,
            min_body_radius: 1.0,
            trail_opacity: 0.5,
            min_trail_opacity: 0.1,
            max_trail_opacity: 0.8,
            depth_divisor: 200.0,
            background_color: BodyColor::new(10, 10, 10),
            text_color: BodyColor::new(200, 200, 200),
            axis_color: BodyColor::new(80, 80, 80),
        }
    }
}

impl RenderingConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        let finite = [
            ("body_radius", self.body_radius),
            ("min_body_radius", self.min_body_radius),
            ("trail_opacity", self.trail_opacity),
        ];
        if let Some((name, value)) = finite.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(SimulationError::InvalidRenderingValue { name, value });
        }

        if !self.depth_divisor.is_finite() || self.depth_divisor <= 0.0 {
            return Err(SimulationError::InvalidRenderingValue {
                name: "depth_divisor",
                value: self.depth_divisor,
            });
        }

        // NaN fails every comparison, so it is rejected here too
        let (min, max) = (self.min_trail_opacity, self.max_trail_opacity);
        if !(0.0 <= min && min <= max && max <= 1.0) {
            return Err(SimulationError::InvalidOpacityRange { min, max });
        }

        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TrailConfig {
    pub enabled: bool,
    pub max_points_per_trail: usize,
    pub update_interval_seconds: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_points_per_trail: 4_000,
            update_interval_seconds: 0.0,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.physics.validate()?;
        self.window.validate()?;
        self.rendering.validate()
    }

    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse config file {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path);
                Self::default()
            }
        }
    }

    /// Path of the per-user configuration file, if the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "orrery").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the per-user configuration file, or defaults when there is none
    pub fn load_from_user_config() -> Self {
        match Self::user_config_path() {
            Some(path) => Self::load_or_default(&path.to_string_lossy()),
            None => {
                debug!("No user configuration directory available. Using defaults.");
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
