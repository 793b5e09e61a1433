//! Ray representation and intersection results.

use pinhole_math::{Point3, Vec3};

/// A ray in 3D space defined by origin and direction.
///
/// The direction is kept exactly as given. Hit distances are expressed in
/// multiples of it, so callers must not assume unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray, not normalized.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}

/// Result of a ray-primitive intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Parameter along the ray where the intersection occurs.
    pub t: f64,
    /// 3D intersection point.
    pub point: Point3,
}

impl Hit {
    /// Build the hit at parameter `t` along `ray`.
    pub fn at(ray: &Ray, t: f64) -> Self {
        Self {
            t,
            point: ray.at(t),
        }
    }
}
