//! World aggregate: surfaces, shaders, lights, camera, and ray casting.

use std::collections::HashMap;

use prism_core::{SceneFile, ShaderKind, SurfaceDesc};
use prism_math::{Interval, Ray, RAY_EPSILON};
use thiserror::Error;

use crate::camera::Camera;
use crate::light::PointLight;
use crate::plane::Plane;
use crate::shader::{Color, Flat, Phong, Reflective, Shader};
use crate::sphere::Sphere;
use crate::surface::{Hit, Surface};

/// Errors produced while building a world from a scene description.
///
/// The render loop assumes all of this has been checked up front, so every
/// malformed-scene case surfaces here rather than mid-render.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("surface references unknown shader \"{0}\"")]
    UnknownShader(String),

    #[error("duplicate shader name \"{0}\"")]
    DuplicateShader(String),

    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("plane normal must have nonzero length")]
    DegenerateNormal,

    #[error("camera look and up directions must not be parallel")]
    DegenerateCamera,
}

/// A surface in the world paired with the shader it is drawn with.
///
/// Shaders are owned by the world and referenced by index, so many
/// surfaces can share one shader instance.
pub struct Primitive {
    pub shape: Box<dyn Surface>,
    pub shader: usize,
}

/// The complete renderable scene.
///
/// Everything here is immutable during rendering; per-ray state lives in
/// the rays and hit records, so the world can be shared freely across
/// render threads.
pub struct World {
    pub surfaces: Vec<Primitive>,
    pub shaders: Vec<Box<dyn Shader>>,
    pub lights: Vec<PointLight>,
    pub camera: Camera,
    pub background: Color,
    pub enable_shadows: bool,
    pub recursion_depth_limit: u32,
}

impl World {
    /// Create an empty world seen through the given camera.
    pub fn new(camera: Camera) -> Self {
        Self {
            surfaces: Vec::new(),
            shaders: Vec::new(),
            lights: Vec::new(),
            camera,
            background: Color::ZERO,
            enable_shadows: true,
            recursion_depth_limit: 4,
        }
    }

    /// Add a shader and return its index.
    pub fn add_shader(&mut self, shader: Box<dyn Shader>) -> usize {
        self.shaders.push(shader);
        self.shaders.len() - 1
    }

    /// Add a surface drawn with the shader at the given index.
    pub fn add_surface(&mut self, shape: Box<dyn Surface>, shader: usize) {
        self.surfaces.push(Primitive { shape, shader });
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Find the closest surface the ray intersects, if any.
    ///
    /// Each surface is probed with the interval narrowed to the best
    /// distance seen so far, so the final hit is the global minimum over
    /// all surfaces. Returns `None` when nothing is hit.
    pub fn closest_intersection(&self, ray: &Ray) -> Option<Hit> {
        let mut best: Option<Hit> = None;

        for (index, primitive) in self.surfaces.iter().enumerate() {
            let closest_so_far = best.map_or(f64::INFINITY, |hit| hit.t);
            let range = Interval::new(RAY_EPSILON, closest_so_far);
            if let Some(t) = primitive.shape.intersect(ray, range) {
                best = Some(Hit { t, surface: index });
            }
        }

        best
    }

    /// Cast a ray into the world and return the color it sees.
    ///
    /// Returns the background color when the ray hits nothing. Otherwise
    /// the hit surface's shader computes the color, recursing back into
    /// this method for reflection rays.
    pub fn cast_ray(&self, ray: &Ray) -> Color {
        match self.closest_intersection(ray) {
            Some(hit) => {
                let point = ray.at(hit.t);
                let primitive = &self.surfaces[hit.surface];
                let normal = primitive.shape.normal_at(point).normalize();
                self.shaders[primitive.shader].shade(self, ray, &hit, point, normal)
            }
            None => self.background,
        }
    }

    /// Build a renderable world from a scene description, validating it.
    pub fn from_scene(scene: &SceneFile) -> Result<Self, BuildError> {
        let look = scene.camera.look_at - scene.camera.position;
        if look.cross(scene.camera.up).length_squared() == 0.0 {
            return Err(BuildError::DegenerateCamera);
        }
        let camera = Camera::aimed(
            scene.camera.position,
            scene.camera.look_at,
            scene.camera.up,
            scene.settings.width,
            scene.settings.height,
        );

        let mut world = World::new(camera);
        world.background = scene.settings.background;
        world.enable_shadows = scene.settings.enable_shadows;
        world.recursion_depth_limit = scene.settings.recursion_depth_limit;

        let mut shader_ids: HashMap<&str, usize> = HashMap::new();
        for desc in &scene.shaders {
            if shader_ids.contains_key(desc.name.as_str()) {
                return Err(BuildError::DuplicateShader(desc.name.clone()));
            }
            let shader: Box<dyn Shader> = match &desc.kind {
                ShaderKind::Flat { color } => Box::new(Flat::new(*color)),
                ShaderKind::Phong {
                    ambient,
                    diffuse,
                    specular,
                    specular_exponent,
                } => Box::new(Phong::new(*ambient, *diffuse, *specular, *specular_exponent)),
                ShaderKind::Reflective {
                    ambient,
                    diffuse,
                    specular,
                    specular_exponent,
                    reflectivity,
                } => Box::new(Reflective::new(
                    Phong::new(*ambient, *diffuse, *specular, *specular_exponent),
                    *reflectivity,
                )),
            };
            let id = world.add_shader(shader);
            shader_ids.insert(desc.name.as_str(), id);
        }

        for desc in &scene.surfaces {
            let shader = *shader_ids
                .get(desc.shader_name())
                .ok_or_else(|| BuildError::UnknownShader(desc.shader_name().to_string()))?;
            match desc {
                SurfaceDesc::Sphere { center, radius, .. } => {
                    if *radius <= 0.0 {
                        return Err(BuildError::InvalidRadius(*radius));
                    }
                    world.add_surface(Box::new(Sphere::new(*center, *radius)), shader);
                }
                SurfaceDesc::Plane { point, normal, .. } => {
                    if normal.length_squared() == 0.0 {
                        return Err(BuildError::DegenerateNormal);
                    }
                    world.add_surface(Box::new(Plane::new(*point, normal.normalize())), shader);
                }
            }
        }

        for desc in &scene.lights {
            world.add_light(PointLight::new(desc.position, desc.color, desc.brightness));
        }

        log::info!(
            "Built world: {} surfaces, {} lights, shadows {}, depth limit {}",
            world.surfaces.len(),
            world.lights.len(),
            if world.enable_shadows { "on" } else { "off" },
            world.recursion_depth_limit
        );
        Ok(world)
    }
}
