//! Sphere surface.

use prism_math::{DVec3, Interval, Ray};

use crate::surface::Surface;

/// Sphere defined by center and radius.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: DVec3,
    pub radius: f64,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: DVec3, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Surface for Sphere {
    fn intersect(&self, ray: &Ray, range: Interval) -> Option<f64> {
        // Quadratic |o + t*d - c|^2 = r^2 with unit d reduces to
        // t^2 + 2bt + (|oc|^2 - r^2) = 0 where b = d . oc.
        let oc = ray.origin - self.center;
        let b = ray.direction.dot(oc);
        let discriminant = b * b - (oc.length_squared() - self.radius * self.radius);
        if discriminant < 0.0 {
            return None;
        }

        // The candidate is the algebraically smaller root. A ray starting
        // inside the sphere gets a negative candidate and reports a miss.
        let t = -b - discriminant.sqrt();
        range.surrounds(t).then_some(t)
    }

    fn normal_at(&self, point: DVec3) -> DVec3 {
        (point - self.center).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_math::RAY_EPSILON;

    fn full_range() -> Interval {
        Interval::new(RAY_EPSILON, f64::INFINITY)
    }

    #[test]
    fn test_head_on_hit_distance() {
        // Sphere of radius r at the origin, ray from (0,0,-10) toward +Z:
        // first hit at distance 10 - r.
        for radius in [0.5, 1.0, 2.0] {
            let sphere = Sphere::new(DVec3::ZERO, radius);
            let ray = Ray::new(DVec3::new(0.0, 0.0, -10.0), DVec3::Z, 0);
            let t = sphere.intersect(&ray, full_range()).unwrap();
            assert!((t - (10.0 - radius)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_head_on_hit_normal() {
        let sphere = Sphere::new(DVec3::ZERO, 2.0);
        let ray = Ray::new(DVec3::new(0.0, 0.0, -10.0), DVec3::Z, 0);
        let t = sphere.intersect(&ray, full_range()).unwrap();
        let normal = sphere.normal_at(ray.at(t));
        assert!((normal - DVec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_miss() {
        let sphere = Sphere::new(DVec3::ZERO, 1.0);
        let ray = Ray::new(DVec3::new(0.0, 5.0, -10.0), DVec3::Z, 0);
        assert_eq!(sphere.intersect(&ray, full_range()), None);
    }

    #[test]
    fn test_origin_inside_sphere_no_hit() {
        // A ray starting inside the sphere must not report the surface it
        // would exit through; the smaller root is behind the origin.
        let sphere = Sphere::new(DVec3::ZERO, 2.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::Z, 0);
        assert_eq!(sphere.intersect(&ray, full_range()), None);
    }

    #[test]
    fn test_origin_on_surface_rejected_by_epsilon() {
        // Ray starting on the surface pointing inward: the smaller root is
        // at distance 0 and falls below the epsilon, so no hit is reported.
        let sphere = Sphere::new(DVec3::ZERO, 1.0);
        let ray = Ray::new(DVec3::new(0.0, 0.0, -1.0), DVec3::Z, 0);
        assert_eq!(sphere.intersect(&ray, full_range()), None);
    }

    #[test]
    fn test_range_upper_bound() {
        // A hit farther than the current best must be rejected.
        let sphere = Sphere::new(DVec3::ZERO, 1.0);
        let ray = Ray::new(DVec3::new(0.0, 0.0, -10.0), DVec3::Z, 0);
        assert_eq!(sphere.intersect(&ray, Interval::new(RAY_EPSILON, 5.0)), None);
        assert!(sphere
            .intersect(&ray, Interval::new(RAY_EPSILON, 9.5))
            .is_some());
    }
}
