//! Sphere primitive.

use pinhole_math::Point3;

use crate::error::{RaytraceError, Result};

/// A sphere given by center and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Create a sphere. The radius must be positive and finite.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(RaytraceError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Center of the sphere.
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}
