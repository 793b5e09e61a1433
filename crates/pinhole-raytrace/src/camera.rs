//! Pinhole camera and image-plane mapping.
//!
//! The camera sits at the world origin looking down +z. Rays pass through a
//! virtual image plane at z = 1 whose world-space size follows from the
//! vertical field of view and the raster aspect ratio.

use log::debug;
use pinhole_math::{Point3, Vec3};

use crate::error::{RaytraceError, Result};
use crate::Ray;

/// Pinhole camera with a fixed focal distance of one world unit.
///
/// Image-plane dimensions are derived state. They are recomputed by every
/// constructor and setter, so a `Camera` value always has them in sync with
/// its field of view and resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    fov_degrees: f64,
    width: u32,
    height: u32,
    plane_width: f64,
    plane_height: f64,
}

impl Camera {
    /// Create a camera with a vertical field of view (degrees) and raster size.
    ///
    /// Fails if `fov_degrees` is not strictly inside (0, 180) or either
    /// dimension is zero.
    pub fn new(fov_degrees: f64, width: u32, height: u32) -> Result<Self> {
        validate_fov(fov_degrees)?;
        validate_dimensions(width, height)?;
        let mut camera = Self {
            fov_degrees,
            width,
            height,
            plane_width: 0.0,
            plane_height: 0.0,
        };
        camera.compute_image_plane();
        Ok(camera)
    }

    /// Change the vertical field of view.
    pub fn set_field_of_view(&mut self, fov_degrees: f64) -> Result<()> {
        validate_fov(fov_degrees)?;
        self.fov_degrees = fov_degrees;
        self.compute_image_plane();
        Ok(())
    }

    /// Change the raster resolution.
    pub fn set_resolution(&mut self, width: u32, height: u32) -> Result<()> {
        validate_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        self.compute_image_plane();
        Ok(())
    }

    fn compute_image_plane(&mut self) {
        // vertical fov: plane height drives width
        self.plane_height = 2.0 * (self.fov_degrees.to_radians() / 2.0).tan();
        self.plane_width = self.plane_height * self.aspect_ratio();
        debug!(
            "image plane {:.4}x{:.4} for fov {} at {}x{}",
            self.plane_width, self.plane_height, self.fov_degrees, self.width, self.height
        );
    }

    /// Vertical field of view in degrees.
    pub fn field_of_view(&self) -> f64 {
        self.fov_degrees
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height of the raster.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// World-space width of the image plane.
    pub fn plane_width(&self) -> f64 {
        self.plane_width
    }

    /// World-space height of the image plane.
    pub fn plane_height(&self) -> f64 {
        self.plane_height
    }

    /// Map normalized image coordinates to a world-space ray direction.
    ///
    /// `(0, 0)` is the top-left corner of the image and `(1, 1)` the
    /// bottom-right. Image rows grow downward while world y grows upward.
    /// The result is not normalized.
    pub fn normalized_to_world(&self, nx: f64, ny: f64) -> Vec3 {
        Vec3::new(
            self.plane_width * (nx - 0.5),
            self.plane_height * (0.5 - ny),
            1.0,
        )
    }

    /// Ray from the camera through the center of pixel `(x, y)`.
    pub fn pixel_ray(&self, x: u32, y: u32) -> Ray {
        let nx = (x as f64 + 0.5) / self.width as f64;
        let ny = (y as f64 + 0.5) / self.height as f64;
        Ray::new(Point3::origin(), self.normalized_to_world(nx, ny))
    }

    /// The four frustum-edge rays through the image-plane corners.
    ///
    /// Order: top-left, bottom-left, top-right, bottom-right.
    pub fn corner_rays(&self) -> [Ray; 4] {
        [(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]
            .map(|(nx, ny)| Ray::new(Point3::origin(), self.normalized_to_world(nx, ny)))
    }
}

fn validate_fov(fov_degrees: f64) -> Result<()> {
    // NaN fails both comparisons
    if fov_degrees > 0.0 && fov_degrees < 180.0 {
        Ok(())
    } else {
        Err(RaytraceError::InvalidFieldOfView(fov_degrees))
    }
}

fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(RaytraceError::InvalidDimensions { width, height });
    }
    Ok(())
}
