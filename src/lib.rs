//! # scurve_waypoints
//!
//! Jerk-limited seven-phase S-curve profiles for one axis moving from rest
//! through a list of waypoints, with optional stretching to a fixed total
//! duration.
//!
//! This library provides the following modules:
//! - `cubic` for the real-root cubic solver and the non-negative root selector.
//! - `phase` for the seven closed-form motion phases and their durations.
//! - `inflection` for the states at the 8 phase boundaries of a segment.
//! - `scurve` for the time-optimal and time-synchronization solvers.
//! - `segment` for splitting waypoints at direction reversals.
//! - `trajectory` for building a multi-segment profile and sampling it.
//! - `executor` for stepping through a profile at a fixed rate.
//! - `stop` for estimating the distance of an emergency stop.
//! - `config` for loading limits and waypoints from TOML.
//!
//! ```
//! use scurve_waypoints::{KinematicLimits, TrajectoryProfile};
//!
//! let limits = KinematicLimits::new(20.0, 2.0, 2.0, 2.0);
//! let profile = TrajectoryProfile::build(&[0.0, 10.0], 0.0, limits)?;
//! assert_eq!(profile.duration(), 7.0);
//! let end = profile.sample(7.0).unwrap();
//! assert!((end.pos - 10.0).abs() < 1e-9);
//! # Ok::<(), scurve_waypoints::ProfileError>(())
//! ```

pub mod config;
pub mod cubic;
pub mod error;
pub mod executor;
pub mod inflection;
pub mod limits;
pub mod motion_state;
pub mod phase;
pub mod scurve;
pub mod segment;
pub mod stop;
pub mod trajectory;

// Re-export main types for convenience:
pub use config::{load_toml, PlannerConfig};
pub use cubic::{min_root, min_root3, solve_cubic, CubicRoots};
pub use error::{ConfigError, LimitKind, ProfileError};
pub use executor::ProfileExecutor;
pub use inflection::InflectionPoints;
pub use limits::KinematicLimits;
pub use motion_state::MotionState;
pub use phase::{Phase, PhaseDurations};
pub use scurve::{OptimalProfile, Regime, SCurve, Stretched};
pub use segment::{segment_boundaries, Segment, SegmentProfile};
pub use stop::{estimate_stop_distance, StopManeuver};
pub use trajectory::{Sample, TrajectoryProfile};
