//! Prism Renderer - recursive Whitted-style CPU ray tracing.
//!
//! The pipeline: the render driver asks the camera for a view ray per
//! pixel, `World::cast_ray` finds the closest surface hit, and the hit
//! surface's shader computes the outgoing color, consulting the lights
//! and recursing back into `cast_ray` for mirror reflections.

mod bucket;
mod camera;
mod light;
mod plane;
mod renderer;
mod shader;
mod sphere;
mod surface;
mod world;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use light::PointLight;
pub use plane::Plane;
pub use renderer::{pack_color, render, render_parallel, render_pixel, Frame};
pub use shader::{Color, Flat, Phong, Reflective, Shader};
pub use sphere::Sphere;
pub use surface::{Hit, Surface};
pub use world::{BuildError, Primitive, World};

/// Re-export common math types from prism_math
pub use prism_math::{DVec3, Interval, Ray, RAY_EPSILON};
