//! Writing rendered rasters and debug rays to disk.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;
use log::info;
use pinhole_raytrace::{Color, DebugRaySink, Raster, RasterSurface, Ray};
use serde::Serialize;

/// Save a raster as an 8-bit RGBA image; the format follows the extension.
pub fn save_image(raster: &Raster, path: &Path) -> Result<()> {
    let image = to_image(raster)?;
    image
        .save(path)
        .with_context(|| format!("failed to write image {}", path.display()))?;
    info!("wrote {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

fn to_image(raster: &Raster) -> Result<RgbaImage> {
    RgbaImage::from_raw(raster.width(), raster.height(), raster.to_rgba8())
        .context("raster buffer does not match its dimensions")
}

/// One debug ray in the JSON dump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RayRecord {
    /// Ray origin.
    pub origin: [f64; 3],
    /// Ray direction, unnormalized.
    pub direction: [f64; 3],
    /// Display color.
    pub color: Color,
}

/// Debug ray sink collecting serializable records.
#[derive(Debug, Default)]
pub struct JsonRays {
    pub records: Vec<RayRecord>,
}

impl DebugRaySink for JsonRays {
    fn ray(&mut self, ray: &Ray, color: Color) {
        self.records.push(RayRecord {
            origin: ray.origin.coords.into(),
            direction: ray.direction.into(),
            color,
        });
    }
}

impl JsonRays {
    /// Write the collected rays as a pretty-printed JSON array.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.records)
            .with_context(|| format!("failed to write rays to {}", path.display()))?;
        info!("wrote {} debug rays to {}", self.records.len(), path.display());
        Ok(())
    }
}
