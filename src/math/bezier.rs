use glam::Vec3;

/// Evaluates the single Bézier curve of degree N-1 through all `points` at t.
///
/// Classical Bernstein form: sum of C(N-1, i) * (1-t)^(N-1-i) * t^i * p[i].
/// No subdivision is performed, so cost grows with the point count; binomial
/// coefficients are accumulated in f64 to stay finite for large N where a u64
/// would overflow.
pub fn bezier_point(points: &[Vec3], t: f32) -> Vec3 {
    match points {
        [] => Vec3::ZERO,
        [only] => *only,
        _ => {
            let n = points.len() - 1;
            let t = t.clamp(0.0, 1.0) as f64;
            let one_minus_t = 1.0 - t;

            let mut pos = glam::DVec3::ZERO;
            for (i, p) in points.iter().enumerate() {
                let basis = binomial(n, i) * one_minus_t.powi((n - i) as i32) * t.powi(i as i32);
                pos += p.as_dvec3() * basis;
            }
            pos.as_vec3()
        }
    }
}

/// Binomial coefficient C(n, k) via the multiplicative formula.
fn binomial(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);
    let mut c = 1.0f64;
    for i in 0..k {
        c = c * (n - i) as f64 / (i + 1) as f64;
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_small_values() {
        assert_eq!(binomial(4, 0), 1.0);
        assert_eq!(binomial(4, 2), 6.0);
        assert_eq!(binomial(5, 3), 10.0);
        assert_eq!(binomial(10, 5), 252.0);
    }

    #[test]
    fn test_bezier_starts_at_first_point() {
        let points = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(0.0, 5.0, 0.0),
        ];
        let pos = bezier_point(&points, 0.0);
        assert!((pos - points[0]).length() < 1e-6);
    }

    #[test]
    fn test_bezier_ends_at_last_point() {
        let points = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(0.0, 5.0, 0.0),
        ];
        let pos = bezier_point(&points, 1.0);
        assert!((pos - points[2]).length() < 1e-5);
    }

    #[test]
    fn test_bezier_two_points_is_lerp() {
        let points = [Vec3::ZERO, Vec3::new(8.0, 0.0, 0.0)];
        let pos = bezier_point(&points, 0.25);
        assert!((pos - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_bezier_quadratic_midpoint() {
        // Quadratic Bézier at t=0.5: 0.25*p0 + 0.5*p1 + 0.25*p2
        let points = [
            Vec3::ZERO,
            Vec3::new(4.0, 4.0, 0.0),
            Vec3::new(8.0, 0.0, 0.0),
        ];
        let pos = bezier_point(&points, 0.5);
        assert!((pos - Vec3::new(4.0, 2.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_bezier_large_point_count_stays_finite() {
        let points: Vec<Vec3> = (0..80)
            .map(|i| Vec3::new(i as f32, (i % 7) as f32, 0.0))
            .collect();
        let pos = bezier_point(&points, 0.5);
        assert!(pos.is_finite());
    }
}
