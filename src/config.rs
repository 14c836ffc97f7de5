//! TOML planner configuration.
//!
//! ```toml
//! waypoints = [0.0, 5.0, -5.0]
//! ref_duration = 0.0   # 0 requests the time-optimal profile
//!
//! [limits]
//! max_pos = 10.0
//! max_vel = 2.0
//! max_acc = 2.0
//! max_jerk = 2.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ProfileError};
use crate::limits::KinematicLimits;
use crate::trajectory::TrajectoryProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub limits: KinematicLimits,
    pub waypoints: Vec<f64>,
    /// Requested total duration; 0 selects the time-optimal profile.
    #[serde(default)]
    pub ref_duration: f64,
}

/// Parses a planner configuration from TOML text. Does not validate.
pub fn load_toml(s: &str) -> Result<PlannerConfig, toml::de::Error> {
    toml::from_str(s)
}

impl PlannerConfig {
    /// Reads, parses and validates a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let cfg = load_toml(&text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()?;
        if self.waypoints.is_empty() {
            return Err(ConfigError::Invalid("waypoints must not be empty".into()));
        }
        for (i, w) in self.waypoints.iter().enumerate() {
            if !w.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "waypoints[{i}] must be finite, got {w}"
                )));
            }
            if w.abs() > self.limits.max_pos {
                return Err(ConfigError::Invalid(format!(
                    "waypoints[{i}] = {w} exceeds max_pos {}",
                    self.limits.max_pos
                )));
            }
        }
        if !self.ref_duration.is_finite() || self.ref_duration < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "ref_duration must be finite and >= 0, got {}",
                self.ref_duration
            )));
        }
        Ok(())
    }

    /// Builds the trajectory described by this configuration.
    pub fn build(&self) -> Result<TrajectoryProfile, ProfileError> {
        TrajectoryProfile::build(&self.waypoints, self.ref_duration, self.limits)
    }
}
