//! Shader trait and the Flat/Phong/Reflective shading models.

use prism_math::{DVec3, Ray};

use crate::surface::Hit;
use crate::world::World;

/// Color type alias (RGB values typically 0-1)
pub type Color = DVec3;

/// Trait for shaders that compute the outgoing color at a hit point.
pub trait Shader: Send + Sync {
    /// Shade the surface point hit by `ray`.
    ///
    /// `point` is the world-space hit point and `normal` the unit surface
    /// normal there. Shaders may query the world for lights and shadowing,
    /// and may recurse back into `World::cast_ray`.
    fn shade(&self, world: &World, ray: &Ray, hit: &Hit, point: DVec3, normal: DVec3) -> Color;
}

/// Constant color shader, ignores lighting entirely.
#[derive(Debug, Clone)]
pub struct Flat {
    pub color: Color,
}

impl Flat {
    /// Create a new flat shader with the given color.
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Shader for Flat {
    fn shade(&self, _world: &World, _ray: &Ray, _hit: &Hit, _point: DVec3, _normal: DVec3) -> Color {
        self.color
    }
}

/// Phong local illumination: ambient + per-light diffuse and specular.
#[derive(Debug, Clone)]
pub struct Phong {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub specular_exponent: f64,
}

impl Phong {
    /// Create a new Phong shader.
    pub fn new(ambient: Color, diffuse: Color, specular: Color, specular_exponent: f64) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            specular_exponent,
        }
    }
}

impl Shader for Phong {
    fn shade(&self, world: &World, _ray: &Ray, _hit: &Hit, point: DVec3, normal: DVec3) -> Color {
        // Ambient is added once, independent of the lights.
        let mut color = self.ambient * 0.5;

        for light in &world.lights {
            let to_light = (light.position - point).normalize();
            let shadow_ray = Ray::new(point, to_light, 0);

            // Any surface between the point and the light occludes it. The
            // epsilon in the intersection tests keeps the shadow ray from
            // re-hitting the surface it starts on.
            if world.enable_shadows && world.closest_intersection(&shadow_ray).is_some() {
                continue;
            }

            let n_dot_l = normal.dot(to_light);
            let diffuse = self.diffuse * n_dot_l.max(0.0);

            let reflected = reflect(-to_light, normal).normalize_or_zero();
            let view = (point - world.camera.position).normalize();
            let r_dot_v = reflected.dot(view).max(0.0);
            let specular = self.specular * r_dot_v.powf(self.specular_exponent);

            color += (diffuse + specular) * light.emitted(&shadow_ray);
        }

        color
    }
}

/// Phong illumination plus a recursively traced mirror reflection.
#[derive(Debug, Clone)]
pub struct Reflective {
    pub phong: Phong,
    pub reflectivity: f64,
}

impl Reflective {
    /// Create a new reflective shader around a Phong base.
    pub fn new(phong: Phong, reflectivity: f64) -> Self {
        Self { phong, reflectivity }
    }
}

impl Shader for Reflective {
    fn shade(&self, world: &World, ray: &Ray, hit: &Hit, point: DVec3, normal: DVec3) -> Color {
        let mut color = self.phong.shade(world, ray, hit, point, normal);

        // Past the depth limit the mirror term is simply black.
        if ray.depth < world.recursion_depth_limit {
            let direction = reflect(ray.direction, normal).normalize();
            let reflect_ray = Ray::new(point, direction, ray.depth + 1);
            color += world.cast_ray(&reflect_ray) * self.reflectivity;
        }

        color
    }
}

/// Reflect a vector about a normal.
#[inline]
pub(crate) fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect() {
        // Straight down onto a floor reflects straight up.
        let v = -DVec3::Y;
        assert_eq!(reflect(v, DVec3::Y), DVec3::Y);

        // 45 degree incidence.
        let v = DVec3::new(1.0, -1.0, 0.0).normalize();
        let r = reflect(v, DVec3::Y);
        assert!((r - DVec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-12);
    }

    #[test]
    fn test_reflect_preserves_length() {
        let v = DVec3::new(0.3, -0.8, 0.2);
        let r = reflect(v, DVec3::Y);
        assert!((r.length() - v.length()).abs() < 1e-12);
    }
}
