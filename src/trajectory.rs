//! Multi-segment profile through a waypoint list, and its sampler.

use crate::error::ProfileError;
use crate::inflection::InflectionPoints;
use crate::limits::KinematicLimits;
use crate::phase::Phase;
use crate::scurve::SCurve;
use crate::segment::{Segment, SegmentProfile};

/// Kinematic state at a query time.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Time since the start of the owning segment.
    pub time: f64,
    /// Absolute position.
    pub pos: f64,
    pub vel: f64,
    pub acc: f64,
}

/// A solved trajectory: one profile per segment plus the cumulative time
/// at which each segment starts. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryProfile {
    segments: Vec<Segment>,
    profiles: Vec<SegmentProfile>,
    /// `segments.len() + 1` cumulative times, starting at 0.
    boundaries: Vec<f64>,
    optimal_duration: f64,
}

impl TrajectoryProfile {
    /// Solves every segment of `waypoints` for minimum time, then, if
    /// `ref_duration > 0`, stretches the whole trajectory to last exactly
    /// `ref_duration`.
    ///
    /// Extra time is shared among segments in proportion to their optimal
    /// durations. No-motion segments stay at zero duration and get no share.
    ///
    /// # Errors
    /// - `NoWaypoints` for an empty list.
    /// - `InfeasibleDuration` if `ref_duration` is shorter than the summed
    ///   optimal durations.
    /// - `LimitViolation` if a stretched segment overshoots a limit.
    /// - `DegenerateEquation` from the cubic solver.
    pub fn build(
        waypoints: &[f64],
        ref_duration: f64,
        limits: KinematicLimits,
    ) -> Result<Self, ProfileError> {
        if waypoints.is_empty() {
            return Err(ProfileError::NoWaypoints);
        }
        let solver = SCurve::new(limits);
        let segments = Segment::split(waypoints);

        let mut profiles = Vec::with_capacity(segments.len());
        for segment in &segments {
            if segment.is_degenerate() {
                profiles.push(SegmentProfile::IDLE);
                continue;
            }
            let optimal = solver.time_optimal(segment.displacement().abs())?;
            profiles.push(SegmentProfile::new(
                optimal.durations,
                segment.direction() * limits.max_jerk,
            ));
        }
        let optimal_duration: f64 = profiles.iter().map(|p| p.duration).sum();

        if ref_duration > 0.0 {
            if ref_duration < optimal_duration {
                tracing::warn!(
                    ref_duration,
                    optimal_duration,
                    "reference duration shorter than time-optimal duration"
                );
                return Err(ProfileError::InfeasibleDuration {
                    requested: ref_duration,
                    optimal: optimal_duration,
                });
            }
            let slack = ref_duration - optimal_duration;
            for (segment, profile) in segments.iter().zip(profiles.iter_mut()) {
                if segment.is_degenerate() {
                    continue;
                }
                let dt = profile.duration * slack / optimal_duration;
                let ds = segment.displacement().abs();
                let stretched = match solver.stretch(profile.durations, profile.duration, dt, ds) {
                    Ok(stretched) => stretched,
                    Err(e) => {
                        tracing::warn!(error = %e, dt, ds, "segment cannot be stretched");
                        return Err(e);
                    }
                };
                *profile = SegmentProfile {
                    durations: stretched.durations,
                    jerk: segment.direction() * stretched.jerk,
                    duration: stretched.total,
                };
            }
        }

        let boundaries: Vec<f64> = std::iter::once(0.0)
            .chain(profiles.iter().scan(0.0, |acc, p| {
                *acc += p.duration;
                Some(*acc)
            }))
            .collect();

        tracing::debug!(
            segments = segments.len(),
            optimal_duration,
            duration = boundaries.last().copied().unwrap_or(0.0),
            "built trajectory profile"
        );
        Ok(Self {
            segments,
            profiles,
            boundaries,
            optimal_duration,
        })
    }

    /// Total duration of the trajectory.
    pub fn duration(&self) -> f64 {
        self.boundaries.last().copied().unwrap_or(0.0)
    }

    /// Sum of the segments' time-optimal durations, before any stretching.
    pub fn optimal_duration(&self) -> f64 {
        self.optimal_duration
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn profiles(&self) -> &[SegmentProfile] {
        &self.profiles
    }

    /// Cumulative start times of every segment, followed by the end time.
    pub fn time_boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// Inflection points of segment `idx` in its local frame.
    pub fn inflection_points(&self, idx: usize) -> Option<InflectionPoints> {
        self.profiles.get(idx).map(SegmentProfile::inflection_points)
    }

    /// Index of the segment owning global time `tg`.
    ///
    /// Segment `i` owns `(boundaries[i], boundaries[i + 1]]`; a time that no
    /// window owns (in particular `tg == 0`) falls back to segment 0.
    pub fn segment_at(&self, tg: f64) -> usize {
        self.boundaries
            .windows(2)
            .rposition(|w| tg > w[0] && tg <= w[1])
            .unwrap_or(0)
    }

    /// Owning segment and clamped segment-local time for global time `tg`,
    /// or `None` when `tg` is outside `[0, duration]` (NaN included).
    fn locate(&self, tg: f64) -> Option<(usize, f64)> {
        if !(0.0..=self.duration()).contains(&tg) {
            return None;
        }
        let idx = self.segment_at(tg);
        // Cumulative boundaries can round past the segment's own end
        let t = (tg - self.boundaries[idx]).min(self.profiles[idx].duration);
        Some((idx, t))
    }

    /// Position, velocity and acceleration at global time `tg`.
    ///
    /// `None` when `tg` is outside `[0, duration]` or NaN; a sampling loop
    /// can stop once it sees `None`.
    pub fn sample(&self, tg: f64) -> Option<Sample> {
        let (idx, t) = self.locate(tg)?;
        let (phase, state) = self.profiles[idx].state_at(t)?;
        tracing::trace!(tg, segment = idx, t, phase = ?phase, "sample");
        let state = state.offset(self.segments[idx].start_pos);
        Some(Sample {
            time: t,
            pos: state.pos,
            vel: state.vel,
            acc: state.acc,
        })
    }

    /// Phase active at global time `tg`.
    pub fn phase_at(&self, tg: f64) -> Option<Phase> {
        let (idx, t) = self.locate(tg)?;
        self.profiles[idx].state_at(t).map(|(phase, _)| phase)
    }
}
