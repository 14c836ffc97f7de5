use scurve_waypoints::{
    KinematicLimits, LimitKind, PhaseDurations, ProfileError, SCurve, TrajectoryProfile,
};

fn unit_limits() -> KinematicLimits {
    KinematicLimits::new(20.0, 2.0, 2.0, 2.0)
}

fn assert_close(got: f64, want: f64, tol: f64) {
    assert!((got - want).abs() <= tol, "got {got}, want {want} (tol {tol})");
}

#[test]
fn reference_shorter_than_optimal_is_infeasible() {
    let err = TrajectoryProfile::build(&[0.0, 10.0], 5.0, unit_limits()).unwrap_err();
    match err {
        ProfileError::InfeasibleDuration { requested, optimal } => {
            assert_eq!(requested, 5.0);
            assert_eq!(optimal, 7.0);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn reference_equal_to_optimal_keeps_profile() {
    let optimal = TrajectoryProfile::build(&[0.0, 10.0], 0.0, unit_limits()).unwrap();
    let synced = TrajectoryProfile::build(&[0.0, 10.0], 7.0, unit_limits()).unwrap();
    assert_eq!(synced.duration(), 7.0);
    assert_close(synced.profiles()[0].jerk, optimal.profiles()[0].jerk, 1e-12);
}

#[test]
fn single_segment_stretches_to_reference() {
    let profile = TrajectoryProfile::build(&[0.0, 10.0], 14.0, unit_limits()).unwrap();
    assert_close(profile.duration(), 14.0, 1e-12);
    assert_eq!(profile.optimal_duration(), 7.0);

    let seg = profile.profiles()[0];
    assert_close(seg.durations.tj, 2.0, 1e-12);
    assert_close(seg.durations.tv, 6.0, 1e-12);
    assert_close(seg.jerk, 0.25, 1e-12);

    let end = profile.sample(profile.duration()).unwrap();
    assert_close(end.pos, 10.0, 1e-9);
    assert_close(end.vel, 0.0, 1e-9);
    assert_close(end.acc, 0.0, 1e-9);
}

#[test]
fn slack_is_shared_in_proportion_to_optimal_durations() {
    let limits = unit_limits();
    let optimal = TrajectoryProfile::build(&[0.0, 5.0, -5.0], 0.0, limits).unwrap();
    let t_opt = optimal.duration();
    let reference = 2.0 * t_opt;
    let synced = TrajectoryProfile::build(&[0.0, 5.0, -5.0], reference, limits).unwrap();

    assert_close(synced.duration(), reference, 1e-9);
    for (before, after) in optimal.profiles().iter().zip(synced.profiles()) {
        assert_close(after.duration, 2.0 * before.duration, 1e-9);
        assert_eq!(after.jerk.signum(), before.jerk.signum());
        assert!(after.jerk.abs() < before.jerk.abs());
    }
    let end = synced.sample(synced.duration()).unwrap();
    assert_close(end.pos, -5.0, 1e-9);
    assert_close(end.vel, 0.0, 1e-9);
}

#[test]
fn idle_segments_get_no_slack() {
    let limits = unit_limits();
    let synced = TrajectoryProfile::build(&[3.0, -3.0], 20.0, limits).unwrap();
    let idle = synced.profiles()[0];
    assert!(idle.is_idle());
    assert_eq!(idle.jerk, 0.0);
    assert_close(synced.profiles()[1].duration, 20.0, 1e-9);
}

#[test]
fn stretch_without_extra_time_returns_original_jerk() {
    let limits = KinematicLimits::new(50.0, 3.0, 4.0, 10.0);
    let solver = SCurve::new(limits);
    for ds in [0.2, 3.0, 25.0] {
        let opt = solver.time_optimal(ds).unwrap();
        let st = solver.stretch(opt.durations, opt.total(), 0.0, ds).unwrap();
        assert_eq!(st.durations, opt.durations);
        assert_eq!(st.total, opt.total());
        assert_close(st.jerk, limits.max_jerk, 1e-9);
    }
}

#[test]
fn stretch_rejects_jerk_above_tolerance() {
    let solver = SCurve::new(unit_limits());
    // Covering 10 units in 0.4 s needs a jerk far above 2 + 1
    let err = solver
        .stretch(PhaseDurations::new(0.1, 0.0, 0.0), 0.4, 0.0, 10.0)
        .unwrap_err();
    match err {
        ProfileError::LimitViolation { kind, value, limit } => {
            assert_eq!(kind, LimitKind::Jerk);
            assert_eq!(limit, 2.0);
            assert!(value > 3.0);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn limit_violation_message_names_the_quantity() {
    let err = ProfileError::LimitViolation {
        kind: LimitKind::Velocity,
        value: 3.0,
        limit: 2.0,
    };
    assert_eq!(err.to_string(), "stretched profile exceeds velocity limit: 3 > 2");
}
