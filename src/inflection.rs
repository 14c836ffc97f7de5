use crate::motion_state::MotionState;
use crate::phase::{Phase, PhaseDurations};

/// Times and states at the 8 phase boundaries of one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InflectionPoints {
    pub time: [f64; 8],
    pub state: [MotionState; 8],
}

impl InflectionPoints {
    /// Evaluates every phase at its own end time, starting from `init`.
    pub fn compute(d: &PhaseDurations, jrk: f64, init: MotionState) -> Self {
        let time = d.boundaries();
        let mut state = [init; 8];
        for (phase, end) in Phase::ALL.iter().zip(1..) {
            state[end] = phase.eval(d, init, jrk, time[end]);
        }
        Self { time, state }
    }

    /// Boundary state at the end of the segment.
    pub fn last(&self) -> MotionState {
        self.state[7]
    }

    /// Largest velocity magnitude over the segment, reached on the cruise
    /// boundaries.
    pub fn peak_velocity(&self) -> f64 {
        self.state[3].vel.abs().max(self.state[4].vel.abs())
    }

    /// Largest acceleration magnitude, reached on the plateau boundaries.
    pub fn peak_acceleration(&self) -> f64 {
        [1, 2, 5, 6]
            .iter()
            .map(|&i| self.state[i].acc.abs())
            .fold(0.0, f64::max)
    }
}
