use glam::Vec3;
use trajectory_engine::{InterpolationMode, Trajectory};

/// Traces the same square of control points under all three interpolation
/// modes and prints the sampled positions side by side.
fn main() {
    env_logger::init();

    let points = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(5.0, 0.0, 0.0),
        Vec3::new(5.0, 5.0, 0.0),
        Vec3::new(0.0, 5.0, 0.0),
    ];

    let mut trajectories: Vec<(&str, Trajectory)> = [
        ("linear", InterpolationMode::Linear),
        ("bezier", InterpolationMode::Bezier),
        ("spline", InterpolationMode::Spline),
    ]
    .into_iter()
    .map(|(name, mode)| {
        let mut traj = Trajectory::new();
        for p in points {
            traj.add_point(p);
        }
        traj.set_mode(mode);
        (name, traj)
    })
    .collect();

    println!("{:>8}  {:^24}  {:^24}  {:^24}", "time", "linear", "bezier", "spline");
    let dt = 0.1;
    for step in 0..40 {
        let positions: Vec<Vec3> = trajectories
            .iter_mut()
            .map(|(_, traj)| traj.advance(dt))
            .collect();
        print!("{:>8.2}", (step + 1) as f32 * dt);
        for pos in positions {
            print!("  ({:>6.2}, {:>6.2}, {:>6.2})", pos.x, pos.y, pos.z);
        }
        println!();
    }

    for (name, traj) in &trajectories {
        println!("{}: {} cycles completed", name, traj.completed_cycles());
    }
}
