use std::error::Error;

use gnuplot::*;
use scurve_waypoints::{estimate_stop_distance, KinematicLimits, PlannerConfig, ProfileExecutor};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    // Optional TOML file as the first argument, see demos/jog.toml
    let cfg = match std::env::args().nth(1) {
        Some(path) => PlannerConfig::from_path(path)?,
        None => PlannerConfig {
            limits: KinematicLimits::new(60.0, 20.0, 10.0, 40.0),
            waypoints: vec![0.0, 50.0, 20.0, 25.0, -40.0],
            ref_duration: 0.0,
        },
    };
    let limits = cfg.limits;
    let profile = cfg.build()?;

    let total_time = profile.duration();
    if total_time <= 0.0 {
        return Err("Trajectory has zero duration, nothing to plot.".into());
    }

    let sampling_rate = 1000.0;
    let executor = ProfileExecutor::new(&profile, sampling_rate)?;
    let n = executor.len_hint();

    let mut time_axis = Vec::with_capacity(n);
    let mut positions = Vec::with_capacity(n);
    let mut velocities = Vec::with_capacity(n);
    let mut accelerations = Vec::with_capacity(n);
    let mut stop_positions = Vec::with_capacity(n);

    for (t, s) in executor {
        time_axis.push(t);
        positions.push(s.pos);
        velocities.push(s.vel);
        accelerations.push(s.acc);
        // Stop estimate is only meaningful while moving forward
        let stop = if s.vel >= 0.0 {
            estimate_stop_distance(s.acc, s.vel, s.pos, &limits)
        } else {
            0.0
        };
        stop_positions.push(s.pos + stop);
    }

    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Waypoint trajectory", &[]);
        axes.set_x_label("Time (s)", &[]);
        axes.set_y_label("Position derivatives", &[]);
        axes.lines(&time_axis, &positions, &[Color("blue"), Caption("Position")]);
        axes.lines(&time_axis, &velocities, &[Color("red"), Caption("Velocity")]);
        axes.lines(&time_axis, &accelerations, &[Color("green"), Caption("Acceleration")]);
        axes.lines(
            &time_axis,
            &stop_positions,
            &[Color("gray"), Caption("Stop position")],
        );
        for b in profile.time_boundaries() {
            axes.lines(
                [*b, *b],
                [-limits.max_vel, limits.max_pos],
                &[Color("black"), LineStyle(Dash)],
            );
        }
    }

    fg.show().map_err(|e| format!("Failed to display plot: {e}"))?;

    println!(
        "Plot generated. {} segments, total motion time: {:.3} seconds.",
        profile.segments().len(),
        total_time
    );
    Ok(())
}
