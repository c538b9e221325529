//! Point light sources.

use prism_math::{DVec3, Ray};

use crate::shader::Color;

/// A point light emitting uniformly in all directions.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    /// Light position in world space
    pub position: DVec3,
    /// Light color (RGB, 0-1)
    pub color: Color,
    /// Scalar brightness multiplier
    pub brightness: f64,
}

impl PointLight {
    /// Create a new point light.
    pub fn new(position: DVec3, color: Color, brightness: f64) -> Self {
        Self {
            position,
            color,
            brightness,
        }
    }

    /// Radiance arriving along the given ray.
    ///
    /// A point light emits the same in every direction, so the ray is
    /// unused here; it is part of the signature so directional emitters
    /// can be added without touching the shaders.
    pub fn emitted(&self, _ray: &Ray) -> Color {
        self.color * self.brightness
    }
}
