//! Surface trait and Hit record for ray-surface intersection.

use prism_math::{DVec3, Interval, Ray};

/// Result of a successful ray-surface intersection query.
///
/// The distance and the index of the winning surface are always produced
/// together; "no hit" is `Option::None`, never a sentinel distance. A `t`
/// of exactly 0.0 therefore cannot be confused with "nothing hit yet".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Parametric distance along the ray to the intersection point
    pub t: f64,
    /// Index of the intersected primitive in the world's surface list
    pub surface: usize,
}

/// Trait for surfaces that can be intersected by rays.
pub trait Surface: Send + Sync {
    /// Find the smallest ray parameter at which the ray meets this surface.
    ///
    /// Only distances strictly inside `range` qualify; the caller supplies
    /// `(RAY_EPSILON, best_so_far)` so that near-zero self-hits and hits
    /// farther than the current best are both rejected. Degenerate
    /// configurations (parallel plane, negative discriminant) are a miss,
    /// never an error. The ray direction must be a unit vector.
    fn intersect(&self, ray: &Ray, range: Interval) -> Option<f64>;

    /// Unit outward surface normal at a point on the surface.
    fn normal_at(&self, point: DVec3) -> DVec3;
}
