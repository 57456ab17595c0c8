//! Simulation configuration and its validation.

use bevy::math::DVec2;
use bevy::prelude::Resource;

use crate::physics::KinematicsModel;
use crate::spacecraft::{MissionClock, SteeringConfig};
use crate::time::{TickSource, TimeScaleRange};
use crate::types::SECONDS_PER_HOUR;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{which} trail cap must be at least 1")]
    ZeroTrailCap { which: &'static str },

    #[error("zoom must be positive and finite, got {0}")]
    InvalidZoom(f64),

    #[error("screen size must be positive, got {width}x{height}")]
    InvalidScreen { width: f64, height: f64 },

    #[error("time scale range [{min}, {max}] with step {step} is invalid")]
    InvalidTimeScaleRange { min: f64, max: f64, step: f64 },

    #[error("initial time scale {0} outside the allowed range")]
    TimeScaleOutOfRange(f64),

    #[error("fixed tick delta must be positive, got {0}")]
    InvalidTickDelta(f64),

    #[error("arrival threshold must be non-negative, got {0}")]
    InvalidArrivalThreshold(f64),

    #[error("spacecraft speed must be positive, got {0}")]
    InvalidSpeed(f64),
}

/// Everything needed to assemble a simulation.
#[derive(Resource, Clone, Debug)]
pub struct SimulationConfig {
    pub model: KinematicsModel,
    pub tick_source: TickSource,
    pub time_scale: f64,
    pub time_scale_range: TimeScaleRange,
    /// Trail cap for planets and moons.
    pub body_trail_cap: usize,
    /// Trail cap for belt bodies integrated under gravity.
    pub belt_trail_cap: usize,
    /// Trail cap for spacecraft.
    pub spacecraft_trail_cap: usize,
    pub steering: SteeringConfig,
    /// Distance per tick for every spacecraft.
    pub spacecraft_speed: f64,
    /// Number of belt asteroids to scatter.
    pub asteroid_count: usize,
    pub camera_center: DVec2,
    pub zoom: f64,
    pub screen_size: DVec2,
    /// Seed for procedural placement. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::orrery()
    }
}

impl SimulationConfig {
    /// Circular-orbit orrery in screen-like units, driven by wall time.
    pub fn orrery() -> Self {
        Self {
            model: KinematicsModel::Circular,
            tick_source: TickSource::WallClock,
            time_scale: 1.0,
            time_scale_range: TimeScaleRange::default(),
            body_trail_cap: 200,
            belt_trail_cap: 1,
            spacecraft_trail_cap: 300,
            steering: SteeringConfig::default(),
            spacecraft_speed: 2.0,
            asteroid_count: 200,
            camera_center: DVec2::ZERO,
            zoom: 1.0,
            screen_size: DVec2::new(1280.0, 800.0),
            seed: None,
        }
    }

    /// N-body solar system in SI units, one simulated hour per tick.
    pub fn gravity_well() -> Self {
        Self {
            model: KinematicsModel::Gravity {
                include_primary: false,
            },
            tick_source: TickSource::Fixed(SECONDS_PER_HOUR),
            time_scale: 1.0,
            time_scale_range: TimeScaleRange::default(),
            body_trail_cap: 800,
            belt_trail_cap: 40,
            spacecraft_trail_cap: 400,
            steering: SteeringConfig {
                arrival_threshold: 5.0e9,
                mission_clock: MissionClock::Unscaled,
            },
            spacecraft_speed: 1.5e8,
            asteroid_count: 200,
            camera_center: DVec2::ZERO,
            zoom: 1.2e-9,
            screen_size: DVec2::new(1280.0, 800.0),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.body_trail_cap == 0 {
            return Err(ConfigError::ZeroTrailCap { which: "body" });
        }
        if self.belt_trail_cap == 0 {
            return Err(ConfigError::ZeroTrailCap { which: "belt" });
        }
        if self.spacecraft_trail_cap == 0 {
            return Err(ConfigError::ZeroTrailCap { which: "spacecraft" });
        }
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(ConfigError::InvalidZoom(self.zoom));
        }
        if !(self.screen_size.x > 0.0 && self.screen_size.y > 0.0) {
            return Err(ConfigError::InvalidScreen {
                width: self.screen_size.x,
                height: self.screen_size.y,
            });
        }

        let range = self.time_scale_range;
        if !(range.min > 0.0 && range.min <= range.max && range.step > 0.0) {
            return Err(ConfigError::InvalidTimeScaleRange {
                min: range.min,
                max: range.max,
                step: range.step,
            });
        }
        if !(range.min..=range.max).contains(&self.time_scale) {
            return Err(ConfigError::TimeScaleOutOfRange(self.time_scale));
        }

        if let TickSource::Fixed(dt) = self.tick_source {
            if !(dt.is_finite() && dt > 0.0) {
                return Err(ConfigError::InvalidTickDelta(dt));
            }
        }
        if !(self.steering.arrival_threshold >= 0.0) {
            return Err(ConfigError::InvalidArrivalThreshold(
                self.steering.arrival_threshold,
            ));
        }
        if !(self.spacecraft_speed > 0.0) {
            return Err(ConfigError::InvalidSpeed(self.spacecraft_speed));
        }

        Ok(())
    }
}
