// config.rs - Tunables for the motion controllers and the coin economy
use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::MotionError;

/// A rejected configuration value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("speed must be positive, got {0}")]
    NonPositiveSpeed(f32),

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("min distance must be positive, got {0}")]
    NonPositiveMinDistance(f32),

    #[error("min distance {min} exceeds max distance {max}")]
    InvertedZoomRange { min: f32, max: f32 },

    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: i64 },
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails this check as well
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// Waypoint patrol tunables
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatrolConfig {
    /// Meters per second along a leg
    pub speed: f32,
    /// Carried for compatibility, arrival is decided by leg progress alone
    pub reach_threshold: f32,
    pub turbulence_frequency: f32,
    pub turbulence_strength: f32,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            reach_threshold: 0.5,
            turbulence_frequency: 0.5,
            turbulence_strength: 2.0,
        }
    }
}

impl PatrolConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.speed > 0.0) {
            return Err(ConfigError::NonPositiveSpeed(self.speed));
        }
        non_negative("reach_threshold", self.reach_threshold)?;
        non_negative("turbulence_frequency", self.turbulence_frequency)?;
        non_negative("turbulence_strength", self.turbulence_strength)?;
        Ok(())
    }
}

/// Orbit camera tunables
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Radians per second fed into the sway sine
    pub sway_speed: f32,
    /// Peak sway angle in degrees
    pub sway_angle: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub zoom_speed_mouse: f32,
    pub zoom_speed_touch: f32,
    pub zoom_smoothness: f32,
    pub noise_frequency: f32,
    pub noise_amplitude: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            sway_speed: 0.5,
            sway_angle: 90.0,
            min_distance: 2.0,
            max_distance: 20.0,
            zoom_speed_mouse: 5.0,
            zoom_speed_touch: 0.5,
            zoom_smoothness: 10.0,
            noise_frequency: 1.0,
            noise_amplitude: 0.5,
        }
    }
}

impl OrbitConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_distance > 0.0) {
            return Err(ConfigError::NonPositiveMinDistance(self.min_distance));
        }
        if !(self.min_distance <= self.max_distance) {
            return Err(ConfigError::InvertedZoomRange {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        non_negative("sway_speed", self.sway_speed)?;
        non_negative("zoom_speed_mouse", self.zoom_speed_mouse)?;
        non_negative("zoom_speed_touch", self.zoom_speed_touch)?;
        non_negative("zoom_smoothness", self.zoom_smoothness)?;
        non_negative("noise_frequency", self.noise_frequency)?;
        non_negative("noise_amplitude", self.noise_amplitude)?;
        Ok(())
    }
}

/// Scene layout used by the headless runner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub waypoints: Vec<Vec3>,
    pub orbit_target: Option<Vec3>,
    pub camera_position: Vec3,
    pub noise_seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            waypoints: vec![
                Vec3::new(-10.0, 4.0, -10.0),
                Vec3::new(10.0, 6.0, -10.0),
                Vec3::new(10.0, 5.0, 10.0),
                Vec3::new(-10.0, 7.0, 10.0),
            ],
            orbit_target: Some(Vec3::ZERO),
            camera_position: Vec3::new(0.0, 6.0, -12.0),
            noise_seed: 0,
        }
    }
}

/// Coin economy tunables
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub coin_key: String,
    pub starting_coins: i64,
    pub cost_per_crop: i64,
    pub amount_to_grant: i64,
    /// Gap between neighbouring crops
    pub padding: f32,
    pub label_prefix: String,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            coin_key: "PlayerCoins".to_string(),
            starting_coins: 10,
            cost_per_crop: 1,
            amount_to_grant: 5,
            padding: 0.1,
            label_prefix: "Coins: ".to_string(),
        }
    }
}

impl EconomyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("starting_coins", self.starting_coins),
            ("cost_per_crop", self.cost_per_crop),
            ("amount_to_grant", self.amount_to_grant),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativeAmount { field, value });
            }
        }
        non_negative("padding", self.padding)
    }
}

/// Complete configuration file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub patrol: PatrolConfig,
    pub orbit: OrbitConfig,
    pub scene: SceneConfig,
    pub economy: EconomyConfig,
}

impl MotionConfig {
    /// Read and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MotionError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, MotionError> {
        let config: MotionConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.patrol.validate()?;
        self.orbit.validate()?;
        self.economy.validate()
    }
}
