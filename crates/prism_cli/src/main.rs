//! Prism command line renderer.
//!
//! Loads a JSON scene (or a built-in demo scene), renders it on the CPU,
//! and writes the result as a PNG.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use image::RgbaImage;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, LevelFilter};
use rayon::prelude::*;

use prism_core::{
    CameraDesc, LightDesc, SceneFile, ShaderDesc, ShaderKind, SurfaceDesc,
};
use prism_math::DVec3;
use prism_renderer::{
    generate_buckets, render, render_bucket, BucketResult, Frame, World, DEFAULT_BUCKET_SIZE,
};

/// Log levels selectable from the command line.
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments.
#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "A recursive ray tracer")]
struct Args {
    /// Scene file to render (JSON); a built-in demo scene is used if omitted
    scene: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Override the scene's image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Override the scene's image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Disable shadow rays
    #[arg(long)]
    no_shadows: bool,

    /// Override the reflection recursion depth limit
    #[arg(long)]
    depth_limit: Option<u32>,

    /// Render on a single thread instead of in parallel buckets
    #[arg(long)]
    sequential: bool,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.clone().into())
        .init();

    let mut scene = match &args.scene {
        Some(path) => SceneFile::from_path(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => {
            info!("No scene given, rendering the built-in demo scene");
            demo_scene()
        }
    };

    // Command line overrides take precedence over the scene file.
    if let Some(width) = args.width {
        scene.settings.width = width;
    }
    if let Some(height) = args.height {
        scene.settings.height = height;
    }
    if args.no_shadows {
        scene.settings.enable_shadows = false;
    }
    if let Some(limit) = args.depth_limit {
        scene.settings.recursion_depth_limit = limit;
    }

    let world = World::from_scene(&scene).context("failed to build world from scene")?;

    info!(
        "Rendering {}x{}...",
        scene.settings.width, scene.settings.height
    );
    let start = Instant::now();
    let frame = if args.sequential {
        render(&world)
    } else {
        render_with_progress(&world)
    };
    info!("Rendered in {:.2?}", start.elapsed());

    let image = RgbaImage::from_raw(frame.width, frame.height, frame.to_rgba_bytes())
        .context("frame buffer has unexpected size")?;
    image
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("Wrote {}", args.output.display());

    Ok(())
}

/// Render in parallel buckets with a progress bar.
fn render_with_progress(world: &World) -> Frame {
    let width = world.camera.width;
    let height = world.camera.height;
    let buckets = generate_buckets(width, height, DEFAULT_BUCKET_SIZE);

    info!("Using {} CPU threads", rayon::current_num_threads());
    let progress = ProgressBar::new(buckets.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} ETA: {eta}")
            .expect("static progress template is valid"),
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let result = BucketResult::new(*bucket, render_bucket(bucket, world));
            progress.inc(1);
            result
        })
        .collect();
    progress.finish();

    let mut frame = Frame::new(width, height);
    for result in &results {
        result.write_into(&mut frame);
    }
    frame
}

/// A matte sphere and a mirror sphere on a floor plane, lit by two lights.
fn demo_scene() -> SceneFile {
    SceneFile {
        settings: Default::default(),
        camera: CameraDesc {
            position: DVec3::new(0.0, 2.0, -8.0),
            look_at: DVec3::new(0.0, 0.5, 0.0),
            up: DVec3::Y,
        },
        shaders: vec![
            ShaderDesc {
                name: "floor".into(),
                kind: ShaderKind::Phong {
                    ambient: DVec3::new(0.3, 0.3, 0.35),
                    diffuse: DVec3::new(0.5, 0.5, 0.55),
                    specular: DVec3::ZERO,
                    specular_exponent: 1.0,
                },
            },
            ShaderDesc {
                name: "ruby".into(),
                kind: ShaderKind::Phong {
                    ambient: DVec3::new(0.3, 0.05, 0.05),
                    diffuse: DVec3::new(0.8, 0.15, 0.15),
                    specular: DVec3::new(0.6, 0.6, 0.6),
                    specular_exponent: 48.0,
                },
            },
            ShaderDesc {
                name: "mirror".into(),
                kind: ShaderKind::Reflective {
                    ambient: DVec3::new(0.05, 0.05, 0.08),
                    diffuse: DVec3::new(0.15, 0.15, 0.2),
                    specular: DVec3::new(0.7, 0.7, 0.7),
                    specular_exponent: 96.0,
                    reflectivity: 0.7,
                },
            },
        ],
        lights: vec![
            LightDesc {
                position: DVec3::new(6.0, 10.0, -6.0),
                color: DVec3::ONE,
                brightness: 1.0,
            },
            LightDesc {
                position: DVec3::new(-8.0, 6.0, -4.0),
                color: DVec3::new(0.9, 0.9, 1.0),
                brightness: 0.4,
            },
        ],
        surfaces: vec![
            SurfaceDesc::Plane {
                point: DVec3::new(0.0, -0.5, 0.0),
                normal: DVec3::Y,
                shader: "floor".into(),
            },
            SurfaceDesc::Sphere {
                center: DVec3::new(-1.2, 0.5, 0.0),
                radius: 1.0,
                shader: "ruby".into(),
            },
            SurfaceDesc::Sphere {
                center: DVec3::new(1.2, 0.5, 1.0),
                radius: 1.0,
                shader: "mirror".into(),
            },
        ],
    }
}
