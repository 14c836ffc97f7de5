use rstest::rstest;
use scurve_waypoints::{KinematicLimits, Phase, ProfileError, Regime, SCurve, TrajectoryProfile};

fn unit_limits() -> KinematicLimits {
    KinematicLimits::new(20.0, 2.0, 2.0, 2.0)
}

fn assert_close(got: f64, want: f64, tol: f64) {
    assert!((got - want).abs() <= tol, "got {got}, want {want} (tol {tol})");
}

#[test]
fn single_segment_full_regime_scenario() {
    let profile = TrajectoryProfile::build(&[0.0, 10.0], 0.0, unit_limits()).expect("build");
    assert_eq!(profile.segments().len(), 1);

    let seg = profile.profiles()[0];
    assert_eq!(seg.durations.tj, 1.0);
    assert_eq!(seg.durations.ta, 0.0);
    assert_eq!(seg.durations.tv, 3.0);
    assert_eq!(seg.jerk, 2.0);
    assert_eq!(profile.duration(), 7.0);

    let start = profile.sample(0.0).expect("sample at 0");
    assert_eq!((start.time, start.pos, start.vel, start.acc), (0.0, 0.0, 0.0, 0.0));

    let end = profile.sample(7.0).expect("sample at T");
    assert_close(end.time, 7.0, 1e-12);
    assert_close(end.pos, 10.0, 1e-9);
    assert_close(end.vel, 0.0, 1e-9);
    assert_close(end.acc, 0.0, 1e-9);
}

#[test]
fn mid_cruise_sample_runs_at_max_velocity() {
    let profile = TrajectoryProfile::build(&[0.0, 10.0], 0.0, unit_limits()).unwrap();
    let s = profile.sample(3.5).unwrap();
    assert_eq!(profile.phase_at(3.5), Some(Phase::V));
    assert_close(s.vel, 2.0, 1e-12);
    assert_close(s.acc, 0.0, 1e-12);
    assert_close(s.pos, 5.0, 1e-12);
}

#[rstest]
#[case(-1e-9)]
#[case(7.0 + 1e-9)]
#[case(100.0)]
#[case(f64::NAN)]
fn sample_outside_trajectory_is_none(#[case] tg: f64) {
    let profile = TrajectoryProfile::build(&[0.0, 10.0], 0.0, unit_limits()).unwrap();
    assert!(profile.sample(tg).is_none());
    assert!(profile.phase_at(tg).is_none());
}

#[test]
fn negative_displacement_uses_negative_jerk() {
    let profile = TrajectoryProfile::build(&[2.0, -8.0], 0.0, unit_limits()).unwrap();
    // 2 * -8 < 0 splits at index 0, leaving an idle head segment
    assert_eq!(profile.segments().len(), 2);
    assert!(profile.profiles()[0].is_idle());
    assert_eq!(profile.profiles()[1].jerk, -2.0);

    let end = profile.sample(profile.duration()).unwrap();
    assert_close(end.pos, -8.0, 1e-9);
    assert_close(end.vel, 0.0, 1e-9);
}

#[test]
fn reversal_produces_two_segments() {
    let profile = TrajectoryProfile::build(&[0.0, 5.0, -5.0], 0.0, unit_limits()).unwrap();
    let segments = profile.segments();
    assert_eq!(segments.len(), 2);
    assert_eq!((segments[0].start_pos, segments[0].end_pos), (0.0, 5.0));
    assert_eq!((segments[1].start_pos, segments[1].end_pos), (5.0, -5.0));
    assert!(profile.profiles()[0].jerk > 0.0);
    assert!(profile.profiles()[1].jerk < 0.0);

    let b = profile.time_boundaries();
    assert_eq!(b.len(), 3);
    let turn = profile.sample(b[1]).unwrap();
    assert_close(turn.pos, 5.0, 1e-9);
    assert_close(turn.vel, 0.0, 1e-9);

    let end = profile.sample(b[2]).unwrap();
    assert_close(end.pos, -5.0, 1e-9);
}

#[test]
fn time_zero_belongs_to_first_segment() {
    let profile = TrajectoryProfile::build(&[0.0, 5.0, -5.0], 0.0, unit_limits()).unwrap();
    assert_eq!(profile.segment_at(0.0), 0);
    let s = profile.sample(0.0).unwrap();
    assert_eq!((s.time, s.pos, s.vel, s.acc), (0.0, 0.0, 0.0, 0.0));
    assert_eq!(profile.phase_at(0.0), Some(Phase::J1));
}

#[test]
fn segment_boundary_time_belongs_to_earlier_segment() {
    let profile = TrajectoryProfile::build(&[0.0, 5.0, -5.0], 0.0, unit_limits()).unwrap();
    let b = profile.time_boundaries();
    assert_eq!(profile.segment_at(b[1]), 0);
    assert_eq!(profile.segment_at(b[1] + 1e-9), 1);
    let s = profile.sample(b[1]).unwrap();
    assert_close(s.time, b[1], 1e-12);
}

#[test]
fn idle_first_segment_samples_its_start_at_time_zero() {
    let profile = TrajectoryProfile::build(&[3.0, -3.0], 0.0, unit_limits()).unwrap();
    assert_eq!(profile.time_boundaries()[1], 0.0);
    let s = profile.sample(0.0).unwrap();
    assert_eq!((s.pos, s.vel, s.acc), (3.0, 0.0, 0.0));
}

#[test]
fn single_waypoint_builds_zero_length_profile() {
    let profile = TrajectoryProfile::build(&[4.0], 0.0, unit_limits()).unwrap();
    assert_eq!(profile.duration(), 0.0);
    let s = profile.sample(0.0).unwrap();
    assert_eq!(s.pos, 4.0);
    assert!(profile.sample(1e-6).is_none());
}

#[test]
fn empty_waypoints_are_rejected() {
    let err = TrajectoryProfile::build(&[], 0.0, unit_limits()).unwrap_err();
    assert_eq!(err, ProfileError::NoWaypoints);
}

#[test]
fn dead_band_segment_is_idle() {
    let profile = TrajectoryProfile::build(&[1.0, 1.0 + 1e-6], 0.0, unit_limits()).unwrap();
    let p = profile.profiles()[0];
    assert!(p.is_idle());
    assert_eq!(p.jerk, 0.0);
    assert_eq!(profile.duration(), 0.0);
}

#[test]
fn sampling_inflection_times_reproduces_inflection_points() {
    let limits = KinematicLimits::new(50.0, 3.0, 4.0, 10.0);
    for target in [0.2, 3.0, 25.0] {
        let profile = TrajectoryProfile::build(&[0.0, target], 0.0, limits).unwrap();
        let ip = profile.inflection_points(0).unwrap();
        for (t, state) in ip.time.iter().zip(ip.state.iter()) {
            let s = profile.sample(*t).unwrap();
            assert_close(s.pos, state.pos, 1e-9);
            assert_close(s.vel, state.vel, 1e-9);
            assert_close(s.acc, state.acc, 1e-9);
        }
    }
}

#[rstest]
#[case(0.2, Regime::JerkLimited)]
#[case(3.0, Regime::AccelLimited)]
#[case(25.0, Regime::Full)]
fn regime_follows_distance(#[case] ds: f64, #[case] regime: Regime) {
    // Dthr1 = 1.2 + 2.25 = 3.45, Dthr2 = 1.28
    let solver = SCurve::new(KinematicLimits::new(50.0, 3.0, 4.0, 10.0));
    assert_eq!(solver.time_optimal(ds).unwrap().regime, regime);
}

#[test]
fn limits_hold_across_a_dense_sample() {
    let limits = KinematicLimits::new(50.0, 3.0, 4.0, 10.0);
    let profile = TrajectoryProfile::build(&[0.0, 12.0, -6.0, 4.0], 0.0, limits).unwrap();
    let n = 2000;
    for i in 0..=n {
        let tg = profile.duration() * i as f64 / n as f64;
        let Some(s) = profile.sample(tg) else {
            continue;
        };
        assert!(s.vel.abs() <= limits.max_vel + 1e-9, "vel {} at {tg}", s.vel);
        assert!(s.acc.abs() <= limits.max_acc + 1e-9, "acc {} at {tg}", s.acc);
    }
}
