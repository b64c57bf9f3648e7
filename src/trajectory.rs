use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use glam::Vec3;
use log::{debug, info, warn};

use crate::math::{bezier_point, linear_point, spline_point};

/// Interpolation scheme used to generate positions between control points.
///
/// The integer tags are fixed by the trajectory file format.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum InterpolationMode {
    #[default]
    Linear = 0,
    Bezier = 1,
    Spline = 2,
}

impl InterpolationMode {
    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            0 => Some(Self::Linear),
            1 => Some(Self::Bezier),
            2 => Some(Self::Spline),
            _ => None,
        }
    }

    pub fn tag(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Linear => "LINEAR",
            Self::Bezier => "BEZIER",
            Self::Spline => "SPLINE",
        };
        write!(f, "{}", name)
    }
}

/// A looping motion path through an ordered set of 3D control points.
///
/// Each call to [`advance`](Self::advance) moves internal playback time
/// forward and returns the interpolated position for the active mode. The
/// engine is single-owner state: one caller (typically the per-frame update
/// loop driving one scene object) mutates it, and it never knows about the
/// object it animates.
#[derive(Clone, Debug)]
pub struct Trajectory {
    control_points: Vec<Vec3>,
    mode: InterpolationMode,
    speed: f32,
    current_time: f32,
    total_time: f32,
    completed_cycles: u64,
}

impl Trajectory {
    pub fn new() -> Self {
        Self {
            control_points: Vec::new(),
            mode: InterpolationMode::Linear,
            speed: 1.0,
            current_time: 0.0,
            total_time: 0.0,
            completed_cycles: 0,
        }
    }

    /// Appends a waypoint to the path. Insertion order defines path order;
    /// duplicates are allowed.
    pub fn add_point(&mut self, point: Vec3) {
        self.control_points.push(point);
        self.recompute_total_time();
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.control_points
    }

    /// Switches interpolation mode. The path's parametric length depends on
    /// the mode, so total time is recomputed immediately.
    pub fn set_mode(&mut self, mode: InterpolationMode) {
        self.mode = mode;
        self.recompute_total_time();
    }

    pub fn mode(&self) -> InterpolationMode {
        self.mode
    }

    /// Sets the playback speed multiplier. Non-positive or non-finite values
    /// would stall or reverse the path, so they are rejected.
    pub fn set_speed(&mut self, speed: f32) {
        if !(speed > 0.0 && speed.is_finite()) {
            warn!("ignoring invalid trajectory speed {}", speed);
            return;
        }
        self.speed = speed;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Number of full loops completed since creation or the last clear.
    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    /// Advances playback by `delta_time` seconds and returns the new position.
    ///
    /// Degenerate paths never error: an empty trajectory pins to the origin
    /// and a single point is returned unconditionally. With two or more
    /// points the path loops forever, wrapping playback time back to zero at
    /// the end of each cycle. Negative delta is clamped to zero so the path
    /// can stall but never run backwards.
    pub fn advance(&mut self, delta_time: f32) -> Vec3 {
        match self.control_points.as_slice() {
            [] => return Vec3::ZERO,
            [only] => return *only,
            _ => {}
        }

        let delta_time = if delta_time.is_finite() && delta_time >= 0.0 {
            delta_time
        } else {
            warn!("clamping invalid delta_time {} to 0", delta_time);
            0.0
        };

        self.current_time += self.speed * delta_time;
        if self.current_time >= self.total_time {
            self.current_time = 0.0;
            self.completed_cycles += 1;
            debug!(
                "trajectory completed cycle {} ({} points, {} mode)",
                self.completed_cycles,
                self.control_points.len(),
                self.mode
            );
        }

        let t = self.current_time / self.total_time;
        match self.mode {
            InterpolationMode::Linear => linear_point(&self.control_points, t),
            InterpolationMode::Bezier => bezier_point(&self.control_points, t),
            InterpolationMode::Spline => spline_point(&self.control_points, t),
        }
    }

    /// Position for the current playback time without advancing it.
    pub fn current_position(&self) -> Vec3 {
        match self.control_points.as_slice() {
            [] => Vec3::ZERO,
            [only] => *only,
            _ => {
                let t = self.current_time / self.total_time;
                match self.mode {
                    InterpolationMode::Linear => linear_point(&self.control_points, t),
                    InterpolationMode::Bezier => bezier_point(&self.control_points, t),
                    InterpolationMode::Spline => spline_point(&self.control_points, t),
                }
            }
        }
    }

    /// Removes all control points and resets playback. Mode and speed are
    /// settings rather than accumulated state, so they survive.
    pub fn clear(&mut self) {
        self.control_points.clear();
        self.current_time = 0.0;
        self.total_time = 0.0;
        self.completed_cycles = 0;
    }

    /// Parametric length of one full loop: the linear path spends one time
    /// unit per point, the curved modes one per segment. A spline short of
    /// its 4-point minimum falls back to linear wholesale, timing included.
    fn recompute_total_time(&mut self) {
        let n = self.control_points.len();
        self.total_time = match self.mode {
            InterpolationMode::Linear => n as f32,
            InterpolationMode::Spline if n < 4 => n as f32,
            InterpolationMode::Bezier | InterpolationMode::Spline => n.saturating_sub(1) as f32,
        };
    }

    /// Serializes the trajectory to a plain-text file: point count, one point
    /// per line, then the mode tag and speed.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut out = String::new();
        out.push_str(&format!("{}\n", self.control_points.len()));
        for p in &self.control_points {
            out.push_str(&format!("{} {} {}\n", p.x, p.y, p.z));
        }
        out.push_str(&format!("{}\n", self.mode.tag()));
        out.push_str(&format!("{}\n", self.speed));

        fs::write(path, out).context(format!("Failed to write trajectory file: {:?}", path))?;
        info!(
            "saved trajectory ({} points) to {:?}",
            self.control_points.len(),
            path
        );
        Ok(())
    }

    /// Loads a trajectory file saved by [`save_to_file`](Self::save_to_file),
    /// replacing all current state.
    ///
    /// Older files that stop after the point list are accepted; the missing
    /// trailing fields fall back to LINEAR mode and speed 1.0. The file is
    /// parsed in full before any state changes, so a failed load leaves the
    /// trajectory untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .context(format!("Failed to open trajectory file: {:?}", path))?;
        let parsed = parse_trajectory_text(&text)
            .context(format!("Malformed trajectory file: {:?}", path))?;

        self.clear();
        self.mode = parsed.mode;
        self.speed = parsed.speed;
        for p in parsed.points {
            self.add_point(p);
        }
        info!(
            "loaded trajectory ({} points, {} mode) from {:?}",
            self.control_points.len(),
            self.mode,
            path
        );
        Ok(())
    }
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::new()
    }
}

/// Mode, speed and point listing for console diagnostics.
impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Trajectory: {} points, {} mode, speed {}",
            self.control_points.len(),
            self.mode,
            self.speed
        )?;
        for (i, p) in self.control_points.iter().enumerate() {
            writeln!(f, "  [{}] ({}, {}, {})", i, p.x, p.y, p.z)?;
        }
        Ok(())
    }
}

struct ParsedTrajectory {
    points: Vec<Vec3>,
    mode: InterpolationMode,
    speed: f32,
}

fn parse_trajectory_text(text: &str) -> Result<ParsedTrajectory> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let count: usize = lines
        .next()
        .context("missing point count")?
        .trim()
        .parse()
        .context("invalid point count")?;

    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let line = lines.next().context(format!("missing point {}", i))?;
        let mut coords = line.split_whitespace().map(|c| c.parse::<f32>());
        let mut next = |axis: &str| -> Result<f32> {
            coords
                .next()
                .context(format!("point {} missing {} coordinate", i, axis))?
                .context(format!("point {} has invalid {} coordinate", i, axis))
        };
        points.push(Vec3::new(next("x")?, next("y")?, next("z")?));
    }

    // Legacy files end after the point list; the trailing mode and speed
    // fields default instead of erroring.
    let mode = match lines.next() {
        Some(line) => {
            let tag: u32 = line.trim().parse().context("invalid interpolation tag")?;
            match InterpolationMode::from_tag(tag) {
                Some(mode) => mode,
                None => bail!("unknown interpolation tag {}", tag),
            }
        }
        None => InterpolationMode::Linear,
    };
    let speed: f32 = match lines.next() {
        Some(line) => line.trim().parse().context("invalid speed")?,
        None => 1.0,
    };
    // Same guard as set_speed: a stored speed that would stall or reverse
    // the path makes the file malformed rather than silently accepted.
    if !(speed > 0.0 && speed.is_finite()) {
        bail!("speed must be positive and finite, got {}", speed);
    }

    Ok(ParsedTrajectory {
        points,
        mode,
        speed,
    })
}
