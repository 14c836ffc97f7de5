use crate::inflection::InflectionPoints;
use crate::motion_state::MotionState;
use crate::phase::{Phase, PhaseDurations};

/// Displacements at or below this magnitude are treated as no motion.
pub const DEAD_BAND: f64 = 1e-5;

/// Waypoint indices where the motion is split into independent segments.
///
/// A split is recorded at `i` whenever `waypoints[i] * waypoints[i + 1] < 0`.
/// The first and last indices are always present, so `n` splits yield
/// `n + 1` segments. Intermediate waypoints that do not reverse direction
/// are passed through without stopping.
pub fn segment_boundaries(waypoints: &[f64]) -> Vec<usize> {
    let Some(last) = waypoints.len().checked_sub(1) else {
        return Vec::new();
    };
    let mut boundaries = vec![0];
    boundaries.extend(
        waypoints
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[0] * pair[1] < 0.0)
            .map(|(i, _)| i),
    );
    boundaries.push(last);
    boundaries
}

/// A monotonic-direction sub-motion between two waypoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start_pos: f64,
    pub end_pos: f64,
}

impl Segment {
    pub fn new(start_pos: f64, end_pos: f64) -> Self {
        Self { start_pos, end_pos }
    }

    /// Splits `waypoints` at every direction reversal.
    pub fn split(waypoints: &[f64]) -> Vec<Segment> {
        segment_boundaries(waypoints)
            .windows(2)
            .map(|idx| Segment::new(waypoints[idx[0]], waypoints[idx[1]]))
            .collect()
    }

    pub fn displacement(&self) -> f64 {
        self.end_pos - self.start_pos
    }

    /// -1, 0 or +1. Zero inside the dead band.
    pub fn direction(&self) -> f64 {
        let ds = self.displacement();
        if self.is_degenerate() {
            0.0
        } else if ds > 0.0 {
            1.0
        } else {
            -1.0
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.displacement().abs() <= DEAD_BAND
    }
}

/// Solved coefficients of one segment: everything needed to sample it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SegmentProfile {
    pub durations: PhaseDurations,
    /// Signed peak jerk; the sign carries the direction of motion.
    pub jerk: f64,
    pub duration: f64,
}

impl SegmentProfile {
    /// Zero-duration, zero-jerk profile of a no-motion segment.
    pub const IDLE: SegmentProfile = SegmentProfile {
        durations: PhaseDurations::ZERO,
        jerk: 0.0,
        duration: 0.0,
    };

    pub fn new(durations: PhaseDurations, jerk: f64) -> Self {
        Self {
            durations,
            jerk,
            duration: durations.total(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.duration == 0.0
    }

    /// Phase boundaries in the segment's local frame (starting at rest).
    pub fn inflection_points(&self) -> InflectionPoints {
        InflectionPoints::compute(&self.durations, self.jerk, MotionState::REST)
    }

    /// Phase and local-frame state at segment-local time `t`, or `None`
    /// outside `[0, duration]`.
    pub fn state_at(&self, t: f64) -> Option<(Phase, MotionState)> {
        let boundaries = self.durations.boundaries();
        let phase = Phase::locate(&boundaries, t)?;
        Some((phase, phase.eval(&self.durations, MotionState::REST, self.jerk, t)))
    }
}
