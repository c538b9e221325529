//! Prism Core - scene description for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneFile`, `SurfaceDesc`, `ShaderDesc`,
//!   `LightDesc`, `CameraDesc`, `RenderSettings`
//! - **Scene loading**: JSON scene files via serde
//!
//! The types here are pure data and renderer-agnostic; the renderer crate
//! validates a `SceneFile` and builds its own world representation from it.
//!
//! # Example
//!
//! ```ignore
//! use prism_core::SceneFile;
//!
//! let scene = SceneFile::from_path("scene.json")?;
//! println!("Loaded {} surfaces, {} lights",
//!     scene.surfaces.len(),
//!     scene.lights.len());
//! ```

pub mod scene;

// Re-export commonly used types
pub use scene::{
    CameraDesc, LightDesc, RenderSettings, SceneError, SceneFile, ShaderDesc, ShaderKind,
    SurfaceDesc,
};
