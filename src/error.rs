use std::fmt;

use thiserror::Error;

/// Which kinematic quantity a stretched profile overshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    Jerk,
    Acceleration,
    Velocity,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LimitKind::Jerk => "jerk",
            LimitKind::Acceleration => "acceleration",
            LimitKind::Velocity => "velocity",
        };
        f.write_str(name)
    }
}

/// Failures raised while solving or building a profile.
///
/// None of these are retried internally: profile construction is
/// all-or-nothing and the caller decides what to change.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProfileError {
    #[error("degenerate cubic equation: {0}")]
    DegenerateEquation(&'static str),
    #[error("reference duration {requested} is shorter than the time-optimal duration {optimal}")]
    InfeasibleDuration { requested: f64, optimal: f64 },
    #[error("stretched profile exceeds {kind} limit: {value} > {limit}")]
    LimitViolation {
        kind: LimitKind,
        value: f64,
        limit: f64,
    },
    #[error("waypoint list is empty")]
    NoWaypoints,
    #[error("sampling frequency must be finite and > 0, got {0}")]
    InvalidFrequency(f64),
}

/// Failures while loading a planner configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
