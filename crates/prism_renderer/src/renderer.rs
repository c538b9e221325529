//! Frame rendering and color packing.

use prism_math::{Interval, Ray};

use crate::shader::Color;
use crate::world::World;

/// Valid range for a color channel before packing.
const CHANNEL: Interval = Interval { min: 0.0, max: 1.0 };

/// Pack a color into a 32-bit RGBA pixel.
///
/// Each channel is clamped to [0, 1] and scaled to [0, 255]; out-of-range
/// values clamp rather than wrap. Layout is 0xRRGGBBAA with alpha 255.
pub fn pack_color(color: Color) -> u32 {
    let r = (CHANNEL.clamp(color.x) * 255.0) as u32;
    let g = (CHANNEL.clamp(color.y) * 255.0) as u32;
    let b = (CHANNEL.clamp(color.z) * 255.0) as u32;
    (r << 24) | (g << 16) | (b << 8) | 0xff
}

/// Image buffer of packed 32-bit pixels.
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

impl Frame {
    /// Create a new frame filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![pack_color(Color::ZERO); (width * height) as usize],
        }
    }

    /// Get the packed pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the packed pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, pixel: u32) {
        self.pixels[(y * self.width + x) as usize] = pixel;
    }

    /// Flatten to RGBA bytes (for the image crate or display).
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for pixel in &self.pixels {
            bytes.push((pixel >> 24) as u8);
            bytes.push((pixel >> 16) as u8);
            bytes.push((pixel >> 8) as u8);
            bytes.push(*pixel as u8);
        }
        bytes
    }
}

/// Compute the color of one pixel.
///
/// Builds the primary view ray at the camera and casts it into the world.
/// A numerically degenerate result for a pixel degrades to the background
/// color for that pixel alone; it never aborts the render.
pub fn render_pixel(world: &World, x: u32, y: u32) -> Color {
    let direction = world.camera.pixel_direction(x, y);
    let ray = Ray::new(world.camera.position, direction, 0);
    let color = world.cast_ray(&ray);
    if color.is_finite() {
        color
    } else {
        world.background
    }
}

/// Render the entire scene sequentially.
///
/// This is the reference single-threaded loop; `render_parallel` produces
/// an identical frame since pixels are independent.
pub fn render(world: &World) -> Frame {
    let mut frame = Frame::new(world.camera.width, world.camera.height);

    for y in 0..frame.height {
        for x in 0..frame.width {
            frame.set(x, y, pack_color(render_pixel(world, x, y)));
        }
    }

    frame
}

/// Render the scene in parallel across buckets using rayon.
pub fn render_parallel(world: &World) -> Frame {
    use rayon::prelude::*;

    use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};

    let width = world.camera.width;
    let height = world.camera.height;
    let buckets = generate_buckets(width, height, DEFAULT_BUCKET_SIZE);
    log::debug!(
        "Rendering {}x{} in {} buckets on {} threads",
        width,
        height,
        buckets.len(),
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, world)))
        .collect();

    let mut frame = Frame::new(width, height);
    for result in &results {
        result.write_into(&mut frame);
    }
    frame
}
