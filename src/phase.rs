//! The seven phases of a rest-to-rest S-curve and their kinematics.
//!
//! Phase order and jerk sign:
//! `J1(+j)`, `A1(0)`, `J2(-j)`, `V(0)`, `J3(-j)`, `A2(0)`, `J4(+j)`.
//!
//! Every phase function takes the segment's initial state and a time `t`
//! measured from the segment start. A phase derives its own starting state
//! by evaluating the phase before it at that phase's end time, so the chain
//! is continuous by construction.

use crate::motion_state::MotionState;

/// Durations of the jerk (`tj`), constant-acceleration (`ta`) and
/// constant-velocity (`tv`) phases.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PhaseDurations {
    pub tj: f64,
    pub ta: f64,
    pub tv: f64,
}

impl PhaseDurations {
    pub const ZERO: PhaseDurations = PhaseDurations {
        tj: 0.0,
        ta: 0.0,
        tv: 0.0,
    };

    pub fn new(tj: f64, ta: f64, tv: f64) -> Self {
        Self { tj, ta, tv }
    }

    /// Total duration `4·tj + 2·ta + tv`.
    pub fn total(&self) -> f64 {
        4.0 * self.tj + 2.0 * self.ta + self.tv
    }

    /// Cumulative times of the 8 phase boundaries.
    pub fn boundaries(&self) -> [f64; 8] {
        let Self { tj, ta, tv } = *self;
        [
            0.0,
            tj,
            tj + ta,
            2.0 * tj + ta,
            2.0 * tj + ta + tv,
            3.0 * tj + ta + tv,
            3.0 * tj + 2.0 * ta + tv,
            4.0 * tj + 2.0 * ta + tv,
        ]
    }
}

/// Jerk ramps acceleration up.
pub fn phase_j1(_d: &PhaseDurations, init: MotionState, jrk: f64, t: f64) -> MotionState {
    init.advance(jrk, t)
}

/// Constant acceleration.
pub fn phase_a1(d: &PhaseDurations, init: MotionState, jrk: f64, t: f64) -> MotionState {
    let ts = t - d.tj;
    phase_j1(d, init, jrk, t - ts).advance(0.0, ts)
}

/// Jerk ramps acceleration back to zero.
pub fn phase_j2(d: &PhaseDurations, init: MotionState, jrk: f64, t: f64) -> MotionState {
    let ts = t - (d.tj + d.ta);
    phase_a1(d, init, jrk, t - ts).advance(-jrk, ts)
}

/// Constant velocity.
pub fn phase_v(d: &PhaseDurations, init: MotionState, jrk: f64, t: f64) -> MotionState {
    let ts = t - (2.0 * d.tj + d.ta);
    phase_j2(d, init, jrk, t - ts).cruise(ts)
}

/// Jerk ramps deceleration up.
pub fn phase_j3(d: &PhaseDurations, init: MotionState, jrk: f64, t: f64) -> MotionState {
    let ts = t - (2.0 * d.tj + d.ta + d.tv);
    phase_v(d, init, jrk, t - ts).advance(-jrk, ts)
}

/// Constant deceleration.
pub fn phase_a2(d: &PhaseDurations, init: MotionState, jrk: f64, t: f64) -> MotionState {
    let ts = t - (3.0 * d.tj + d.ta + d.tv);
    phase_j3(d, init, jrk, t - ts).advance(0.0, ts)
}

/// Jerk ramps deceleration back to zero.
pub fn phase_j4(d: &PhaseDurations, init: MotionState, jrk: f64, t: f64) -> MotionState {
    let ts = t - (3.0 * d.tj + 2.0 * d.ta + d.tv);
    phase_a2(d, init, jrk, t - ts).advance(jrk, ts)
}

/// One of the seven phases, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    J1,
    A1,
    J2,
    V,
    J3,
    A2,
    J4,
}

impl Phase {
    pub const ALL: [Phase; 7] = [
        Phase::J1,
        Phase::A1,
        Phase::J2,
        Phase::V,
        Phase::J3,
        Phase::A2,
        Phase::J4,
    ];

    /// Position in the sequence, 0..7.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Sign applied to the peak jerk during this phase.
    pub fn jerk_sign(self) -> f64 {
        match self {
            Phase::J1 | Phase::J4 => 1.0,
            Phase::J2 | Phase::J3 => -1.0,
            Phase::A1 | Phase::V | Phase::A2 => 0.0,
        }
    }

    /// Evaluate this phase at segment-local time `t`.
    pub fn eval(self, d: &PhaseDurations, init: MotionState, jrk: f64, t: f64) -> MotionState {
        match self {
            Phase::J1 => phase_j1(d, init, jrk, t),
            Phase::A1 => phase_a1(d, init, jrk, t),
            Phase::J2 => phase_j2(d, init, jrk, t),
            Phase::V => phase_v(d, init, jrk, t),
            Phase::J3 => phase_j3(d, init, jrk, t),
            Phase::A2 => phase_a2(d, init, jrk, t),
            Phase::J4 => phase_j4(d, init, jrk, t),
        }
    }

    /// Phase owning local time `t`.
    ///
    /// Each window is `[start, end)` except the last, which also includes
    /// the final boundary. Zero-length phases are skipped. `None` when `t`
    /// lies outside `[0, T]`.
    pub fn locate(boundaries: &[f64; 8], t: f64) -> Option<Phase> {
        if t < boundaries[0] {
            return None;
        }
        if t <= boundaries[7] {
            let idx = boundaries[1..7].iter().position(|end| t < *end).unwrap_or(6);
            return Some(Phase::ALL[idx]);
        }
        None
    }
}
