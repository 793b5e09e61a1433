//! Debug ray visualization.
//!
//! Purely observational: sinks receive rays and a display color and have no
//! influence on the rendered image.

use crate::camera::Camera;
use crate::color::Color;
use crate::Ray;

/// Color of the four frustum-edge rays.
pub const CORNER_RAY_COLOR: Color = Color::BLUE;

/// Color of per-pixel rays.
pub const PIXEL_RAY_COLOR: Color = Color::WHITE;

/// Receiver for rays to draw.
pub trait DebugRaySink {
    /// Accept one ray with its display color.
    fn ray(&mut self, ray: &Ray, color: Color);
}

/// A ray tagged with the color it should be drawn in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugRay {
    /// The ray.
    pub ray: Ray,
    /// Display color.
    pub color: Color,
}

/// Sink that keeps every ray it receives, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedRays {
    /// Rays received so far.
    pub rays: Vec<DebugRay>,
}

impl DebugRaySink for RecordedRays {
    fn ray(&mut self, ray: &Ray, color: Color) {
        self.rays.push(DebugRay { ray: *ray, color });
    }
}

/// Emit the camera's frustum-edge rays and, optionally, every pixel ray.
///
/// Corner rays come first in [`Camera::corner_rays`] order, followed by pixel
/// rays in row-major order.
pub fn emit_debug_rays<S>(camera: &Camera, sink: &mut S, include_pixel_rays: bool)
where
    S: DebugRaySink + ?Sized,
{
    for ray in camera.corner_rays() {
        sink.ray(&ray, CORNER_RAY_COLOR);
    }

    if !include_pixel_rays {
        return;
    }
    for y in 0..camera.height() {
        for x in 0..camera.width() {
            sink.ray(&camera.pixel_ray(x, y), PIXEL_RAY_COLOR);
        }
    }
}
