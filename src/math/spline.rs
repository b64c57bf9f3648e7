use glam::Vec3;

use super::linear::linear_point;

/// Evaluates a Catmull-Rom spline through `points` at normalized t in [0, 1).
///
/// Needs at least 4 points for a proper tangent window; below that it degrades
/// to the piecewise-linear path. Endpoint segments reuse the nearest point as
/// the missing tangent source (clamped indices), which keeps the curve
/// continuous at the boundary without looping smoothness.
pub fn spline_point(points: &[Vec3], t: f32) -> Vec3 {
    if points.len() < 4 {
        return linear_point(points, t);
    }

    let n = points.len();
    let segments = (n - 1) as f32;
    let scaled = t.clamp(0.0, 1.0) * segments;
    let i = (scaled as usize).min(n - 2);
    let local = scaled - i as f32;

    let p0 = points[i.saturating_sub(1)];
    let p1 = points[i];
    let p2 = points[i + 1];
    let p3 = points[(i + 2).min(n - 1)];

    catmull_rom(p0, p1, p2, p3, local)
}

/// Catmull-Rom cubic basis at segment-local t in [0, 1].
fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;

    p0 * (-0.5 * t3 + t2 - 0.5 * t)
        + p1 * (1.5 * t3 - 2.5 * t2 + 1.0)
        + p2 * (-1.5 * t3 + 2.0 * t2 + 0.5 * t)
        + p3 * (0.5 * t3 - 0.5 * t2)
}
