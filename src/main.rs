use anyhow::{bail, Result};
use clap::Parser;
use glam::Vec3;

use trajectory_engine::cli::Cli;
use trajectory_engine::clock::FixedStep;
use trajectory_engine::trajectory::{InterpolationMode, Trajectory};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut trajectory = Trajectory::new();
    match &cli.file {
        Some(path) => trajectory.load_from_file(path)?,
        None => {
            // No file given: sample a built-in square path
            for p in [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(4.0, 0.0, 0.0),
                Vec3::new(4.0, 0.0, 4.0),
                Vec3::new(0.0, 0.0, 4.0),
            ] {
                trajectory.add_point(p);
            }
        }
    }

    if let Some(mode) = &cli.mode {
        trajectory.set_mode(parse_mode(mode)?);
    }
    if let Some(speed) = cli.speed {
        trajectory.set_speed(speed);
    }

    print!("{}", trajectory);

    let steps = FixedStep::over(cli.duration, cli.rate);
    let dt = steps.dt();
    for (i, step) in steps.enumerate() {
        let pos = trajectory.advance(step);
        println!(
            "t={:>7.3}  ({:>8.4}, {:>8.4}, {:>8.4})",
            (i + 1) as f32 * dt,
            pos.x,
            pos.y,
            pos.z
        );
    }
    println!("Completed cycles: {}", trajectory.completed_cycles());

    if let Some(path) = &cli.save {
        trajectory.save_to_file(path)?;
        println!("Saved trajectory to {:?}", path);
    }

    Ok(())
}

fn parse_mode(name: &str) -> Result<InterpolationMode> {
    match name.to_ascii_lowercase().as_str() {
        "linear" => Ok(InterpolationMode::Linear),
        "bezier" => Ok(InterpolationMode::Bezier),
        "spline" => Ok(InterpolationMode::Spline),
        other => bail!("unknown interpolation mode: {}", other),
    }
}
