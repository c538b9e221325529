// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// Smallest parametric distance an intersection test will accept.
///
/// Distances at or below this value are rejected so that secondary rays
/// (shadow and reflection rays) starting on a surface cannot re-hit that
/// same surface at a zero or near-zero distance.
pub const RAY_EPSILON: f64 = 1e-6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dvec3_creation() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_dvec3_operations() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(4.0, 5.0, 6.0);
        let c = a + b;
        assert_eq!(c, DVec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_ray_epsilon_positive() {
        assert!(RAY_EPSILON > 0.0);
        assert!(RAY_EPSILON < 1e-3);
    }
}
