use crate::cubic::{min_root, solve_cubic};
use crate::error::{LimitKind, ProfileError};
use crate::limits::KinematicLimits;
use crate::phase::PhaseDurations;

/// Which kinematic plateaus a time-optimal profile reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Both acceleration and velocity plateaus (`Ds >= Dthr1`).
    Full,
    /// Acceleration plateau only, no cruise phase (`Dthr2 <= Ds < Dthr1`).
    AccelLimited,
    /// Pure jerk ramps (`Ds < Dthr2`).
    JerkLimited,
}

/// Result of the time-optimal solve for one displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimalProfile {
    pub durations: PhaseDurations,
    pub regime: Regime,
}

impl OptimalProfile {
    pub fn total(&self) -> f64 {
        self.durations.total()
    }
}

/// Result of stretching a profile to a longer duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stretched {
    pub durations: PhaseDurations,
    /// New total duration.
    pub total: f64,
    /// Peak jerk magnitude that still covers the displacement.
    pub jerk: f64,
}

/// Time-optimal and time-synchronized S-curve solver for one axis.
///
/// All displacements handed to the solver are magnitudes; the caller owns
/// the direction of motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SCurve {
    limits: KinematicLimits,
}

impl SCurve {
    // Absolute slack allowed on each limit after stretching
    const JERK_TOLERANCE: f64 = 1.0;
    const ACC_TOLERANCE: f64 = 0.1;
    const VEL_TOLERANCE: f64 = 0.1;

    pub fn new(limits: KinematicLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &KinematicLimits {
        &self.limits
    }

    /// `(Dthr1, Dthr2)`.
    ///
    /// `Dthr1 = am·vm/jm + vm²/am` is the shortest distance reaching both
    /// plateaus, `Dthr2 = 2·am³/jm²` the shortest reaching the acceleration
    /// plateau.
    pub fn thresholds(&self) -> (f64, f64) {
        let KinematicLimits {
            max_vel: vm,
            max_acc: am,
            max_jerk: jm,
            ..
        } = self.limits;
        let d_thr1 = am * vm / jm + vm * vm / am;
        let d_thr2 = 2.0 * am.powi(3) / (jm * jm);
        (d_thr1, d_thr2)
    }

    /// Minimum-time phase durations covering `ds` (a magnitude, `>= 0`).
    ///
    /// # Errors
    /// `DegenerateEquation` if `ds` is exactly zero; callers filter
    /// no-motion segments before solving.
    pub fn time_optimal(&self, ds: f64) -> Result<OptimalProfile, ProfileError> {
        let KinematicLimits {
            max_vel: vm,
            max_acc: am,
            max_jerk: jm,
            ..
        } = self.limits;
        let (d_thr1, d_thr2) = self.thresholds();

        // Jerk and plateau durations fixed by the limits alone
        let tj_max = am / jm;
        let ta_max = vm / am - am / jm;
        if ta_max < 0.0 {
            tracing::warn!(
                vm,
                am,
                jm,
                "velocity limit is below am^2/jm, acceleration plateau is unreachable"
            );
        }

        let (durations, regime) = if ds >= d_thr1 {
            let tv = (ds - d_thr1) / vm;
            (PhaseDurations::new(tj_max, ta_max, tv), Regime::Full)
        } else if ds >= d_thr2 {
            // Distance with tv = 0 is jm·tj·(tj + ta)·(2·tj + ta); solve the
            // quadratic in ta and keep the non-negative root.
            let tj = tj_max;
            let root = (tj * jm * (jm * tj.powi(3) + 4.0 * ds)).sqrt();
            let ta1 = -(3.0 * tj * tj * jm - root) / (2.0 * tj * jm);
            let ta2 = -(3.0 * tj * tj * jm + root) / (2.0 * tj * jm);
            let ta = min_root(ta1, ta2);
            (PhaseDurations::new(tj, ta, 0.0), Regime::AccelLimited)
        } else {
            // 2·jm·tj³ - ds = 0
            let roots = solve_cubic(2.0 * jm, 0.0, 0.0, -ds)?;
            (PhaseDurations::new(roots.first(), 0.0, 0.0), Regime::JerkLimited)
        };

        tracing::debug!(
            ds,
            d_thr1,
            d_thr2,
            regime = ?regime,
            tj = durations.tj,
            ta = durations.ta,
            tv = durations.tv,
            "time-optimal solve"
        );
        Ok(OptimalProfile { durations, regime })
    }

    /// Stretches `durations` (total `total`) by `dt` extra seconds, keeping
    /// the ratio between phases, and solves for the peak jerk that still
    /// covers `ds`.
    ///
    /// `total` must be positive. With `dt == 0` the durations are unchanged
    /// and the jerk is the one implied by them.
    ///
    /// # Errors
    /// `LimitViolation` if the new jerk exceeds `jm + 1`, the new peak
    /// acceleration `am + 0.1` or the new peak velocity `vm + 0.1`.
    pub fn stretch(
        &self,
        durations: PhaseDurations,
        total: f64,
        dt: f64,
        ds: f64,
    ) -> Result<Stretched, ProfileError> {
        let KinematicLimits {
            max_vel: vm,
            max_acc: am,
            max_jerk: jm,
            ..
        } = self.limits;

        // Time-fraction weights of each phase kind
        let kj = durations.tj / total;
        let ka = durations.ta / total;
        let kv = durations.tv / total;

        let tj = durations.tj + kj * dt;
        let ta = durations.ta + ka * dt;
        let tv = durations.tv + kv * dt;

        // Distance of a rest-to-rest profile is j·tj·(tj + ta)·(2·tj + ta + tv)
        let jerk = ds / (tj * (tj + ta) * (2.0 * tj + ta + tv));

        let checks = [
            (LimitKind::Jerk, jerk.abs(), jm, Self::JERK_TOLERANCE),
            (LimitKind::Acceleration, (tj * jerk).abs(), am, Self::ACC_TOLERANCE),
            (
                LimitKind::Velocity,
                (jerk * tj * tj + jerk * ta * tj).abs(),
                vm,
                Self::VEL_TOLERANCE,
            ),
        ];
        for (kind, value, limit, tolerance) in checks {
            if value - limit > tolerance {
                return Err(ProfileError::LimitViolation { kind, value, limit });
            }
        }

        let durations = PhaseDurations::new(tj, ta, tv);
        let total = durations.total();
        tracing::debug!(dt, ds, jerk, total, "stretched segment");
        Ok(Stretched {
            durations,
            total,
            jerk,
        })
    }
}
