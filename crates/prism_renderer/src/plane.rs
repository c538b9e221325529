//! Infinite plane surface.

use prism_math::{DVec3, Interval, Ray};

use crate::surface::Surface;

/// Plane in point-normal form.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Any point on the plane
    pub point: DVec3,
    /// Unit normal of the plane
    pub normal: DVec3,
}

impl Plane {
    /// Create a new plane from a point on it and its unit normal.
    pub fn new(point: DVec3, normal: DVec3) -> Self {
        Self { point, normal }
    }
}

impl Surface for Plane {
    fn intersect(&self, ray: &Ray, range: Interval) -> Option<f64> {
        let denominator = ray.direction.dot(self.normal);
        // A ray parallel to the plane never intersects it.
        if denominator == 0.0 {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denominator;
        range.surrounds(t).then_some(t)
    }

    fn normal_at(&self, _point: DVec3) -> DVec3 {
        self.normal
    }
}
