use glam::Vec3;

/// Evaluates a piecewise-linear path through `points` at normalized t in [0, 1).
///
/// The parameter range is split into N-1 equal segments; within a segment the
/// position is a straight lerp between its two endpoints. The segment index is
/// clamped to N-2 so t values at (or fractionally past) 1.0 stay on the last
/// segment instead of indexing out of bounds.
pub fn linear_point(points: &[Vec3], t: f32) -> Vec3 {
    match points {
        [] => Vec3::ZERO,
        [only] => *only,
        _ => {
            let segments = (points.len() - 1) as f32;
            let scaled = t.clamp(0.0, 1.0) * segments;
            let i = (scaled as usize).min(points.len() - 2);
            let local = scaled - i as f32;
            points[i].lerp(points[i + 1], local)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_empty_is_origin() {
        assert_eq!(linear_point(&[], 0.3), Vec3::ZERO);
    }

    #[test]
    fn test_linear_single_point() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(linear_point(&[p], 0.0), p);
        assert_eq!(linear_point(&[p], 0.9), p);
    }

    #[test]
    fn test_linear_midpoint_of_segment() {
        let points = [Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)];
        let pos = linear_point(&points, 0.5);
        assert_eq!(pos, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_linear_segment_boundary() {
        let points = [
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
        ];
        // t = 0.5 lands exactly on the middle point
        let pos = linear_point(&points, 0.5);
        assert!((pos - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_linear_clamps_at_one() {
        let points = [Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)];
        let pos = linear_point(&points, 1.0);
        assert_eq!(pos, Vec3::new(4.0, 0.0, 0.0));
    }
}
