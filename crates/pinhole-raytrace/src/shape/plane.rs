//! Infinite plane primitive.

use pinhole_math::{is_usable_normal, Point3, Vec3};

use crate::error::{RaytraceError, Result};

/// An unbounded plane through `origin` with the given normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    origin: Point3,
    normal: Vec3,
}

impl Plane {
    /// Create a plane. The normal need not be unit length but must be non-zero.
    pub fn new(origin: Point3, normal: Vec3) -> Result<Self> {
        if !is_usable_normal(&normal) {
            return Err(RaytraceError::DegenerateNormal);
        }
        Ok(Self { origin, normal })
    }

    /// Any point on the plane.
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Plane normal.
    pub fn normal(&self) -> &Vec3 {
        &self.normal
    }
}
