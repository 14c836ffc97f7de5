use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Kinematic limits of one degree of freedom. All values are positive
/// magnitudes in caller-defined units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicLimits {
    /// Absolute position bound. Only checked against configured waypoints.
    pub max_pos: f64,

    /// Velocity limit.
    pub max_vel: f64,

    /// Acceleration limit.
    pub max_acc: f64,

    /// Jerk limit.
    pub max_jerk: f64,
}

impl KinematicLimits {
    pub fn new(max_pos: f64, max_vel: f64, max_acc: f64, max_jerk: f64) -> Self {
        Self {
            max_pos,
            max_vel,
            max_acc,
            max_jerk,
        }
    }

    /// Every limit must be finite and strictly positive.
    ///
    /// The solvers assume this but do not check it themselves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("max_pos", self.max_pos),
            ("max_vel", self.max_vel),
            ("max_acc", self.max_acc),
            ("max_jerk", self.max_jerk),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        Ok(())
    }
}
