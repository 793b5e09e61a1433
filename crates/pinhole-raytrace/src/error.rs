//! Error types for camera, primitive and scene configuration.

use thiserror::Error;

/// Errors that can occur while configuring a render.
///
/// Every variant is raised before the first ray is generated; the render
/// loop itself cannot fail.
#[derive(Error, Debug)]
pub enum RaytraceError {
    /// Vertical field of view outside the open interval (0°, 180°).
    #[error("field of view must be strictly between 0 and 180 degrees, got {0}")]
    InvalidFieldOfView(f64),

    /// Raster width or height is zero.
    #[error("raster dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Requested raster width.
        width: u32,
        /// Requested raster height.
        height: u32,
    },

    /// Target surface does not match the camera's raster size.
    #[error("surface is {actual_width}x{actual_height} but the camera renders {width}x{height}")]
    SurfaceMismatch {
        /// Camera raster width.
        width: u32,
        /// Camera raster height.
        height: u32,
        /// Surface width.
        actual_width: u32,
        /// Surface height.
        actual_height: u32,
    },

    /// A primitive was given a zero-length or non-finite normal.
    #[error("primitive normal is zero or not finite")]
    DegenerateNormal,

    /// Triangle vertices are collinear, so no winding normal exists.
    #[error("triangle vertices are collinear")]
    DegenerateTriangle,

    /// Sphere radius is not a positive finite number.
    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f64),

    /// A primitive in a scene description failed validation.
    #[error("primitive #{index} is invalid")]
    InvalidPrimitive {
        /// Position of the primitive in the description.
        index: usize,
        /// What was wrong with it.
        #[source]
        source: Box<RaytraceError>,
    },

    /// Scene description could not be parsed.
    #[error("invalid scene description: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for raytrace operations.
pub type Result<T> = std::result::Result<T, RaytraceError>;
