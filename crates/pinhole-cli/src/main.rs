//! pinhole CLI - render TOML scene files with the pinhole ray tracer.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, info};
use pinhole_raytrace::{
    emit_debug_rays, render, render_into, Camera, HitPolicy, Raster, RenderOptions, Scene,
    SceneDescription, Shape, TriangleTest,
};
use std::path::{Path, PathBuf};

mod logger;
mod output;

use logger::{init_logger, LogLevel};
use output::{save_image, JsonRays};

#[derive(Parser)]
#[command(name = "pinhole")]
#[command(about = "Brute-force pinhole ray tracer", long_about = None)]
struct Cli {
    /// Logging level (RUST_LOG overrides per module)
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene file to an image
    Render {
        /// Scene description (.toml)
        scene: PathBuf,
        /// Output image (format determined by extension)
        #[arg(short, long, default_value = "render.png")]
        output: PathBuf,
        #[command(flatten)]
        overrides: Overrides,
        /// Render on the calling thread, one pixel at a time
        #[arg(long)]
        sequential: bool,
        /// Also dump debug rays to this JSON file
        #[arg(long)]
        debug_rays: Option<PathBuf>,
        /// Include every pixel ray in the debug dump, not just the frustum corners
        #[arg(long, requires = "debug_rays")]
        pixel_rays: bool,
    },
    /// Dump the camera's debug rays as JSON
    Rays {
        /// Scene description (.toml)
        scene: PathBuf,
        /// Output JSON file
        #[arg(short, long, default_value = "rays.json")]
        output: PathBuf,
        #[command(flatten)]
        overrides: Overrides,
        /// Include every pixel ray, not just the frustum corners
        #[arg(long)]
        pixel_rays: bool,
    },
    /// Display information about a scene file
    Info {
        /// Scene description (.toml)
        scene: PathBuf,
    },
}

/// Command-line overrides for values in the scene file.
#[derive(Args, Debug, Default, Clone)]
struct Overrides {
    /// Vertical field of view in degrees
    #[arg(long)]
    fov: Option<f64>,
    /// Raster width in pixels
    #[arg(long)]
    width: Option<u32>,
    /// Raster height in pixels
    #[arg(long)]
    height: Option<u32>,
    /// Which primitive wins when several are hit
    #[arg(long, value_enum)]
    hit_policy: Option<PolicyArg>,
    /// How triangles are tested
    #[arg(long, value_enum)]
    triangle_test: Option<TriangleTestArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Last hitting primitive in scene order (reference)
    LastHit,
    /// Closest hit
    Nearest,
}

impl From<PolicyArg> for HitPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::LastHit => HitPolicy::LastHit,
            PolicyArg::Nearest => HitPolicy::Nearest,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TriangleTestArg {
    /// Unbounded supporting plane (reference)
    Plane,
    /// Plane hit inside the triangle only
    Bounded,
}

impl From<TriangleTestArg> for TriangleTest {
    fn from(arg: TriangleTestArg) -> Self {
        match arg {
            TriangleTestArg::Plane => TriangleTest::Plane,
            TriangleTestArg::Bounded => TriangleTest::Bounded,
        }
    }
}

impl Overrides {
    fn apply(&self, desc: &mut SceneDescription) {
        if let Some(fov) = self.fov {
            desc.camera.fov = fov;
        }
        if let Some(width) = self.width {
            desc.camera.width = width;
        }
        if let Some(height) = self.height {
            desc.camera.height = height;
        }
        if let Some(policy) = self.hit_policy {
            desc.render.hit_policy = policy.into();
        }
        if let Some(test) = self.triangle_test {
            desc.render.triangle_test = test.into();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    match cli.command {
        Commands::Render {
            scene,
            output,
            overrides,
            sequential,
            debug_rays,
            pixel_rays,
        } => {
            let (camera, scene, options) = load_scene(&scene, &overrides)?;
            let raster = render_scene(&camera, &scene, &options, sequential)?;
            save_image(&raster, &output)?;
            if let Some(path) = debug_rays {
                dump_rays(&camera, &path, pixel_rays)?;
            }
        }
        Commands::Rays {
            scene,
            output,
            overrides,
            pixel_rays,
        } => {
            let (camera, _, _) = load_scene(&scene, &overrides)?;
            dump_rays(&camera, &output, pixel_rays)?;
        }
        Commands::Info { scene } => {
            show_info(&scene)?;
        }
    }

    Ok(())
}

fn read_description(path: &Path) -> Result<SceneDescription> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scene {}", path.display()))?;
    SceneDescription::from_toml(&source)
        .with_context(|| format!("failed to parse scene {}", path.display()))
}

fn load_scene(path: &Path, overrides: &Overrides) -> Result<(Camera, Scene, RenderOptions)> {
    let mut desc = read_description(path)?;
    overrides.apply(&mut desc);
    debug!("loaded {} with overrides {:?}", path.display(), overrides);
    desc.build()
        .with_context(|| format!("invalid scene {}", path.display()))
}

fn render_scene(
    camera: &Camera,
    scene: &Scene,
    options: &RenderOptions,
    sequential: bool,
) -> Result<Raster> {
    let start = std::time::Instant::now();
    let raster = if sequential {
        let mut raster = Raster::new(camera.width(), camera.height(), options.background);
        render_into(camera, scene, options, &mut raster)?;
        raster
    } else {
        render(camera, scene, options)
    };
    info!(
        "rendered {}x{} against {} primitives in {:.2?}",
        camera.width(),
        camera.height(),
        scene.len(),
        start.elapsed()
    );
    Ok(raster)
}

fn dump_rays(camera: &Camera, path: &Path, pixel_rays: bool) -> Result<()> {
    let mut rays = JsonRays::default();
    emit_debug_rays(camera, &mut rays, pixel_rays);
    rays.save(path)
}

fn show_info(path: &Path) -> Result<()> {
    let desc = read_description(path)?;
    let (camera, scene, options) = desc
        .build()
        .with_context(|| format!("invalid scene {}", path.display()))?;

    println!("pinhole scene: {}", path.display());
    println!("  Field of view: {}°", camera.field_of_view());
    println!("  Raster: {}x{}", camera.width(), camera.height());
    println!(
        "  Image plane: {:.4} x {:.4}",
        camera.plane_width(),
        camera.plane_height()
    );
    println!("  Hit policy: {:?}", options.hit_policy);
    println!("  Triangle test: {:?}", options.triangle_test);
    println!("  Primitives: {}", scene.len());

    if !scene.is_empty() {
        println!("\nPrimitives:");
        for (i, primitive) in scene.iter().enumerate() {
            let c = primitive.color();
            println!(
                "  {}: {} ({:.2}, {:.2}, {:.2}, {:.2}) {}",
                i,
                primitive.shape().kind(),
                c.r,
                c.g,
                c.b,
                c.a,
                describe(primitive.shape())
            );
        }
    }

    let tests = camera.width() as u64 * camera.height() as u64 * scene.len() as u64;
    println!("\nIntersection tests per render: {}", tests);
    Ok(())
}

fn describe(shape: &Shape) -> String {
    match shape {
        Shape::Triangle(tri) => {
            let c = tri.center();
            format!("center ({:.3}, {:.3}, {:.3})", c.x, c.y, c.z)
        }
        Shape::Sphere(sphere) => {
            let c = sphere.center();
            format!(
                "center ({:.3}, {:.3}, {:.3}) radius {:.3}",
                c.x,
                c.y,
                c.z,
                sphere.radius()
            )
        }
        Shape::Plane(plane) => {
            let n = plane.normal();
            format!("normal ({:.3}, {:.3}, {:.3})", n.x, n.y, n.z)
        }
    }
}
