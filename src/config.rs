use crate::{
    constants::{
        DEFAULT_ACCELERATION, DEFAULT_BRAKE_STRENGTH, DEFAULT_MAX_SPEED, DEFAULT_MAX_STEER_ANGLE,
        DEFAULT_LENGTH, DEFAULT_START_HEADING, DEFAULT_START_X, DEFAULT_START_Y,
        DEFAULT_STEER_RATE, DEFAULT_WHEEL_BASE, DEFAULT_WIDTH, REVERSE_SPEED_RATIO,
    },
    error::{Error, Result},
};
use glam::DVec2;
use noisy_float::types::R64;
use serde::Deserialize;
use std::path::Path;

/// Tuning of a single vehicle.
///
/// The rates are applied once per control call, not per second, so they are
/// tuned against the frame rate of the owning session.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VehicleConfig {
    /// Distance between the front and rear axle midpoints.
    pub wheel_base: f64,
    /// Forward top speed. Reverse is capped at a fraction of it.
    pub max_speed: f64,
    /// Speed gained per throttle call while moving forward or standing.
    pub acceleration: f64,
    /// Speed lost per brake call while moving forward.
    pub brake_strength: f64,
    /// Steering lock in degrees.
    pub max_steer_angle: f64,
    /// Degrees of steering per steer call.
    pub steer_rate: f64,
    /// Chassis size for drawing. Does not affect the motion.
    pub width: f64,
    pub length: f64,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            wheel_base: DEFAULT_WHEEL_BASE,
            max_speed: DEFAULT_MAX_SPEED,
            acceleration: DEFAULT_ACCELERATION,
            brake_strength: DEFAULT_BRAKE_STRENGTH,
            max_steer_angle: DEFAULT_MAX_STEER_ANGLE,
            steer_rate: DEFAULT_STEER_RATE,
            width: DEFAULT_WIDTH,
            length: DEFAULT_LENGTH,
        }
    }
}

impl VehicleConfig {
    pub fn validate(&self) -> Result<()> {
        let Self {
            wheel_base,
            max_speed,
            acceleration,
            brake_strength,
            max_steer_angle,
            steer_rate,
            width,
            length,
        } = *self;

        positive("wheel_base", wheel_base)?;
        positive("max_speed", max_speed)?;
        positive("acceleration", acceleration)?;
        positive("brake_strength", brake_strength)?;
        positive("max_steer_angle", max_steer_angle)?;
        positive("steer_rate", steer_rate)?;
        positive("width", width)?;
        positive("length", length)?;
        Ok(())
    }

    pub fn max_reverse_speed(&self) -> f64 {
        self.max_speed * REVERSE_SPEED_RATIO
    }
}

/// Where the vehicle is placed when a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StartPose {
    pub x: f64,
    pub y: f64,
    /// Degrees.
    pub heading: f64,
}

impl Default for StartPose {
    fn default() -> Self {
        Self {
            x: DEFAULT_START_X,
            y: DEFAULT_START_Y,
            heading: DEFAULT_START_HEADING,
        }
    }
}

impl StartPose {
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub start: StartPose,
    pub vehicle: VehicleConfig,
}

impl SessionConfig {
    /// Parses and validates a TOML document. Missing tables and fields take
    /// their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.vehicle.validate()?;
        finite("start.x", config.start.x)?;
        finite("start.y", config.start.y)?;
        finite("start.heading", config.start.heading)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<R64> {
    R64::try_new(value).ok_or(Error::InvalidConfiguration { field, value })
}

fn positive(field: &'static str, value: f64) -> Result<R64> {
    let checked = finite(field, value)?;
    if checked.raw() > 0.0 {
        Ok(checked)
    } else {
        Err(Error::InvalidConfiguration { field, value })
    }
}
