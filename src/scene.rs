use anyhow::{bail, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::trajectory::{InterpolationMode, Trajectory};

/// JSON-embeddable trajectory description for scene files.
///
/// Matches the schema the scene viewers store per object: a `points` array,
/// an optional speed, an optional auto-start flag, and the interpolation mode
/// as an uppercase string. Absent fields keep the engine defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrajectoryConfig {
    pub points: Vec<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
    #[serde(default, rename = "autoStart")]
    pub auto_start: bool,
    #[serde(
        default,
        rename = "interpolationType",
        skip_serializing_if = "Option::is_none"
    )]
    pub interpolation_type: Option<String>,
}

impl TrajectoryConfig {
    pub fn from_trajectory(traj: &Trajectory, auto_start: bool) -> Self {
        Self {
            points: traj.control_points().iter().map(|p| p.to_array()).collect(),
            speed: Some(traj.speed()),
            auto_start,
            interpolation_type: Some(traj.mode().to_string()),
        }
    }

    /// Replaces `traj`'s state with this config's points and settings.
    pub fn apply_to(&self, traj: &mut Trajectory) -> Result<()> {
        traj.clear();
        for p in &self.points {
            traj.add_point(Vec3::from_array(*p));
        }
        if let Some(speed) = self.speed {
            traj.set_speed(speed);
        }
        if let Some(name) = &self.interpolation_type {
            traj.set_mode(parse_mode(name)?);
        }
        Ok(())
    }
}

fn parse_mode(name: &str) -> Result<InterpolationMode> {
    match name {
        "LINEAR" => Ok(InterpolationMode::Linear),
        "BEZIER" => Ok(InterpolationMode::Bezier),
        "SPLINE" => Ok(InterpolationMode::Spline),
        other => bail!("unknown interpolation type: {}", other),
    }
}
