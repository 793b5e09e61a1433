//! The per-pixel render loop.
//!
//! Every pixel casts one ray through its center and tests it against every
//! primitive in scene order. There is no acceleration structure: a render
//! performs `width * height * primitives` intersection tests.

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::color::Color;
use crate::error::{RaytraceError, Result};
use crate::intersect::TriangleTest;
use crate::raster::{Raster, RasterSurface};
use crate::shape::Scene;
use crate::Ray;

/// Which primitive colors a pixel when several are hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HitPolicy {
    /// The last hitting primitive in scene order wins, regardless of
    /// distance (reference behavior).
    #[default]
    LastHit,
    /// The hit with the smallest `t` wins; ties go to the earlier primitive.
    Nearest,
}

/// Knobs for a render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Hit selection policy.
    pub hit_policy: HitPolicy,
    /// Triangle intersection test.
    pub triangle_test: TriangleTest,
    /// Color of pixels whose ray hits nothing.
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            hit_policy: HitPolicy::LastHit,
            triangle_test: TriangleTest::Plane,
            background: Color::BLACK,
        }
    }
}

impl RenderOptions {
    /// Depth-correct options: nearest hit and bounded triangles.
    pub fn corrected() -> Self {
        Self {
            hit_policy: HitPolicy::Nearest,
            triangle_test: TriangleTest::Bounded,
            ..Self::default()
        }
    }
}

/// Resolve the color seen along `ray`.
pub fn resolve(ray: &Ray, scene: &Scene, options: &RenderOptions) -> Color {
    let test = options.triangle_test;
    let winner = match options.hit_policy {
        HitPolicy::LastHit => scene
            .iter()
            .filter(|p| p.intersect_with(ray, test).is_some())
            .last(),
        HitPolicy::Nearest => {
            let mut closest = None;
            let mut closest_t = f64::INFINITY;
            for primitive in scene {
                if let Some(hit) = primitive.intersect_with(ray, test) {
                    if hit.t < closest_t {
                        closest_t = hit.t;
                        closest = Some(primitive);
                    }
                }
            }
            closest
        }
    };
    winner.map_or(options.background, |p| p.color())
}

/// Render into a caller-provided surface, one pixel at a time.
///
/// The surface must have the camera's dimensions.
pub fn render_into<S>(
    camera: &Camera,
    scene: &Scene,
    options: &RenderOptions,
    surface: &mut S,
) -> Result<()>
where
    S: RasterSurface + ?Sized,
{
    if surface.width() != camera.width() || surface.height() != camera.height() {
        return Err(RaytraceError::SurfaceMismatch {
            width: camera.width(),
            height: camera.height(),
            actual_width: surface.width(),
            actual_height: surface.height(),
        });
    }
    log_start(camera, scene, options);

    for y in 0..camera.height() {
        for x in 0..camera.width() {
            let color = resolve(&camera.pixel_ray(x, y), scene, options);
            surface.set_pixel(x, y, color);
        }
        trace!("row {} done", y);
    }
    Ok(())
}

/// Render to a new [`Raster`], distributing rows across the rayon pool.
///
/// Each worker owns a disjoint row, so the output is bit-identical to
/// [`render_into`].
pub fn render(camera: &Camera, scene: &Scene, options: &RenderOptions) -> Raster {
    log_start(camera, scene, options);

    let width = camera.width();
    let mut raster = Raster::new(width, camera.height(), options.background);
    raster
        .pixels_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = resolve(&camera.pixel_ray(x as u32, y as u32), scene, options);
            }
            trace!("row {} done", y);
        });
    raster
}

fn log_start(camera: &Camera, scene: &Scene, options: &RenderOptions) {
    debug!(
        "rendering {}x{} with {} primitives ({:?}, {:?} triangles)",
        camera.width(),
        camera.height(),
        scene.len(),
        options.hit_policy,
        options.triangle_test
    );
}
