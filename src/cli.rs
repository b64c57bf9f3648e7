// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "trajectory-engine")]
#[command(about = "Samples positions along a control-point trajectory", long_about = None)]
pub struct Cli {
    /// Trajectory file to load (point count, points, mode tag, speed)
    #[arg(long = "file")]
    pub file: Option<PathBuf>,

    /// Interpolation mode override: linear, bezier or spline
    #[arg(long = "mode")]
    pub mode: Option<String>,

    /// Playback speed override
    #[arg(long = "speed")]
    pub speed: Option<f32>,

    /// Seconds of playback to sample
    #[arg(long = "duration", default_value = "5.0")]
    pub duration: f32,

    /// Sampling rate in steps per second
    #[arg(long = "rate", default_value = "30.0")]
    pub rate: f32,

    /// Write the (possibly modified) trajectory back to this file on exit
    #[arg(long = "save")]
    pub save: Option<PathBuf>,
}
