//! Braking distance of an emergency stop.
//!
//! The stop is two constant-jerk phases: jerk `-jm` for `t1` drives the
//! acceleration negative, then `+jm` for `t2` brings acceleration and
//! velocity to zero together:
//!
//! `t2 = sqrt(a0²/(2·jm²) + v0/jm)`, `t1 = t2 + a0/jm`
//!
//! The acceleration and velocity limits do not shape the maneuver.

use crate::limits::KinematicLimits;
use crate::motion_state::MotionState;

/// Below this magnitude of both velocity and acceleration the axis is
/// considered stopped.
pub const STOPPED_EPSILON: f64 = 0.001;

/// A solved two-phase braking maneuver.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StopManeuver {
    /// Duration of the `-jm` phase.
    pub t1: f64,
    /// Duration of the `+jm` phase.
    pub t2: f64,
    /// State at the end of the first phase, relative to the start position.
    pub mid: MotionState,
    /// State at the end of the stop, relative to the start position.
    pub end: MotionState,
    /// Absolute position where the axis comes to rest.
    pub stop_position: f64,
}

impl StopManeuver {
    /// Plans a stop from `state` with jerk limit `limits.max_jerk`.
    ///
    /// The closed form is derived for `v0 >= 0`. A negative velocity is
    /// evaluated with the same formula, which is not a mirrored stop: when
    /// `a0²/(2·jm²) + v0/jm < 0` every duration and state is NaN, and
    /// otherwise `t1` can be negative and the displacement points the wrong
    /// way.
    pub fn plan(state: MotionState, limits: &KinematicLimits) -> Self {
        let MotionState {
            pos: p0,
            vel: v0,
            acc: a0,
        } = state;
        if v0.abs() <= STOPPED_EPSILON && a0.abs() <= STOPPED_EPSILON {
            return Self {
                stop_position: p0,
                ..Self::default()
            };
        }
        if v0 < 0.0 {
            tracing::warn!(v0, a0, "stop estimate is only derived for non-negative velocity");
        }

        let jm = limits.max_jerk;
        let t2 = (a0 * a0 / (2.0 * jm * jm) + v0 / jm).sqrt();
        let t1 = t2 + a0 / jm;

        let start = MotionState::new(0.0, v0, a0);
        let mid = start.advance(-jm, t1);
        let end = mid.advance(jm, t2);
        tracing::debug!(t1, t2, distance = end.pos, "planned stop");

        Self {
            t1,
            t2,
            mid,
            end,
            stop_position: p0 + end.pos,
        }
    }

    /// Displacement covered while stopping.
    pub fn distance(&self) -> f64 {
        self.end.pos
    }

    pub fn duration(&self) -> f64 {
        self.t1 + self.t2
    }
}

/// Displacement incurred by an emergency stop from `(a0, v0, p0)`.
///
/// Returns 0 when the axis is already stopped. For a negative `v0` the
/// result follows [`StopManeuver::plan`] and may be NaN.
pub fn estimate_stop_distance(a0: f64, v0: f64, p0: f64, limits: &KinematicLimits) -> f64 {
    StopManeuver::plan(MotionState::new(p0, v0, a0), limits).distance()
}
