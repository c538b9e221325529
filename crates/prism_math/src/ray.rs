use glam::DVec3;

/// A ray in 3D space with origin, direction, and recursion depth.
///
/// Rays represent the semi-infinite line `origin + t * direction` for
/// `t >= 0`. The `depth` field counts how many reflection bounces led to
/// this ray: primary rays start at depth 0 and each reflection ray is one
/// deeper than its parent. Rays are plain immutable values; intersection
/// tests report their results separately rather than writing into the ray.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
    pub depth: u32,
}

impl Ray {
    /// Create a new ray.
    ///
    /// Shading code assumes `direction` is a unit vector; callers normalize
    /// before constructing the ray.
    pub fn new(origin: DVec3, direction: DVec3, depth: u32) -> Self {
        Self {
            origin,
            direction,
            depth,
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}
