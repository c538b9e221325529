//! Scene description types and the JSON scene loader.
//!
//! A scene file names its shaders once in a table, and each surface refers
//! to a shader by name. The renderer resolves those names into indices when
//! it builds its world, so the description stays a plain tree of data.

use std::path::Path;

use prism_math::DVec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading a scene file.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Global render settings for a scene.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderSettings {
    /// Output image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Output image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
    /// Whether shadow rays are cast during shading
    #[serde(default = "default_true")]
    pub enable_shadows: bool,
    /// Maximum reflection recursion depth (0 disables reflections)
    #[serde(default = "default_depth_limit")]
    pub recursion_depth_limit: u32,
    /// Color returned for rays that hit nothing
    #[serde(default)]
    pub background: DVec3,
}

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    480
}

fn default_true() -> bool {
    true
}

fn default_depth_limit() -> u32 {
    4
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            enable_shadows: true,
            recursion_depth_limit: default_depth_limit(),
            background: DVec3::ZERO,
        }
    }
}

/// Camera placement. The viewing basis is derived from these fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CameraDesc {
    /// Camera position in world space
    pub position: DVec3,
    /// Point the camera looks at
    pub look_at: DVec3,
    /// Approximate up direction
    #[serde(default = "default_up")]
    pub up: DVec3,
}

fn default_up() -> DVec3 {
    DVec3::Y
}

/// A point light source.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LightDesc {
    /// Light position in world space
    pub position: DVec3,
    /// Light color (RGB, 0-1)
    #[serde(default = "default_light_color")]
    pub color: DVec3,
    /// Scalar brightness multiplier
    #[serde(default = "default_brightness")]
    pub brightness: f64,
}

fn default_light_color() -> DVec3 {
    DVec3::ONE
}

fn default_brightness() -> f64 {
    1.0
}

/// A named shader entry in the scene's shader table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShaderDesc {
    /// Name surfaces use to refer to this shader
    pub name: String,
    #[serde(flatten)]
    pub kind: ShaderKind,
}

/// The shading models a surface can use.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShaderKind {
    /// Constant color, ignores lighting entirely
    Flat { color: DVec3 },
    /// Ambient + diffuse + specular local illumination
    Phong {
        ambient: DVec3,
        diffuse: DVec3,
        specular: DVec3,
        specular_exponent: f64,
    },
    /// Phong plus a recursively traced mirror contribution
    Reflective {
        ambient: DVec3,
        diffuse: DVec3,
        specular: DVec3,
        specular_exponent: f64,
        reflectivity: f64,
    },
}

/// A geometric surface, referring to its shader by name.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceDesc {
    Sphere {
        center: DVec3,
        radius: f64,
        shader: String,
    },
    Plane {
        point: DVec3,
        normal: DVec3,
        shader: String,
    },
}

impl SurfaceDesc {
    /// Name of the shader this surface uses.
    pub fn shader_name(&self) -> &str {
        match self {
            SurfaceDesc::Sphere { shader, .. } => shader,
            SurfaceDesc::Plane { shader, .. } => shader,
        }
    }
}

/// A complete scene description as read from a scene file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SceneFile {
    #[serde(default)]
    pub settings: RenderSettings,
    pub camera: CameraDesc,
    #[serde(default)]
    pub shaders: Vec<ShaderDesc>,
    #[serde(default)]
    pub lights: Vec<LightDesc>,
    #[serde(default)]
    pub surfaces: Vec<SurfaceDesc>,
}

impl SceneFile {
    /// Parse a scene from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let scene = Self::from_json(&contents)?;
        log::info!(
            "Loaded scene from {}: {} surfaces, {} lights, {} shaders",
            path.display(),
            scene.surfaces.len(),
            scene.lights.len(),
            scene.shaders.len()
        );
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE_JSON: &str = r#"{
        "settings": { "width": 320, "height": 240, "recursion_depth_limit": 2 },
        "camera": {
            "position": [0.0, 2.0, -8.0],
            "look_at": [0.0, 0.0, 0.0]
        },
        "shaders": [
            { "name": "red", "type": "flat", "color": [1.0, 0.0, 0.0] },
            {
                "name": "shiny",
                "type": "phong",
                "ambient": [0.1, 0.1, 0.1],
                "diffuse": [0.7, 0.7, 0.7],
                "specular": [0.5, 0.5, 0.5],
                "specular_exponent": 32.0
            },
            {
                "name": "mirror",
                "type": "reflective",
                "ambient": [0.05, 0.05, 0.05],
                "diffuse": [0.2, 0.2, 0.2],
                "specular": [0.8, 0.8, 0.8],
                "specular_exponent": 64.0,
                "reflectivity": 0.6
            }
        ],
        "lights": [
            { "position": [5.0, 10.0, -5.0], "brightness": 1.5 }
        ],
        "surfaces": [
            { "type": "sphere", "center": [0.0, 0.0, 0.0], "radius": 1.0, "shader": "shiny" },
            { "type": "plane", "point": [0.0, -1.0, 0.0], "normal": [0.0, 1.0, 0.0], "shader": "red" }
        ]
    }"#;

    #[test]
    fn test_parse_scene() {
        let scene = SceneFile::from_json(SCENE_JSON).unwrap();

        assert_eq!(scene.settings.width, 320);
        assert_eq!(scene.settings.height, 240);
        assert_eq!(scene.settings.recursion_depth_limit, 2);
        // Not specified, falls back to the default
        assert!(scene.settings.enable_shadows);
        assert_eq!(scene.settings.background, DVec3::ZERO);

        assert_eq!(scene.shaders.len(), 3);
        assert_eq!(scene.lights.len(), 1);
        assert_eq!(scene.surfaces.len(), 2);
    }

    #[test]
    fn test_parse_shader_kinds() {
        let scene = SceneFile::from_json(SCENE_JSON).unwrap();

        assert!(matches!(scene.shaders[0].kind, ShaderKind::Flat { .. }));
        assert!(matches!(scene.shaders[1].kind, ShaderKind::Phong { .. }));
        match &scene.shaders[2].kind {
            ShaderKind::Reflective { reflectivity, .. } => assert_eq!(*reflectivity, 0.6),
            other => panic!("expected reflective shader, got {:?}", other),
        }
    }

    #[test]
    fn test_surface_shader_names() {
        let scene = SceneFile::from_json(SCENE_JSON).unwrap();

        assert_eq!(scene.surfaces[0].shader_name(), "shiny");
        assert_eq!(scene.surfaces[1].shader_name(), "red");
    }

    #[test]
    fn test_light_defaults() {
        let scene = SceneFile::from_json(SCENE_JSON).unwrap();

        let light = &scene.lights[0];
        assert_eq!(light.color, DVec3::ONE);
        assert_eq!(light.brightness, 1.5);
    }

    #[test]
    fn test_camera_default_up() {
        let scene = SceneFile::from_json(SCENE_JSON).unwrap();
        assert_eq!(scene.camera.up, DVec3::Y);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.width, 640);
        assert_eq!(settings.height, 480);
        assert!(settings.enable_shadows);
        assert_eq!(settings.recursion_depth_limit, 4);
    }

    #[test]
    fn test_reject_malformed_json() {
        assert!(SceneFile::from_json("{ not json").is_err());
        // Unknown surface type
        let bad = r#"{
            "camera": { "position": [0,0,0], "look_at": [0,0,1] },
            "surfaces": [ { "type": "torus", "shader": "x" } ]
        }"#;
        assert!(SceneFile::from_json(bad).is_err());
    }
}
