#![warn(missing_docs)]

//! Math types for the pinhole ray tracer.
//!
//! Thin wrappers around nalgebra providing the handful of types the
//! tracer needs: points, vectors, tolerance constants and a few
//! triangle helpers.

use nalgebra::Vector3;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space. Not required to be unit length.
pub type Vec3 = Vector3<f64>;

/// Tolerance constants for geometric comparisons.
///
/// Tolerances are relative so that tiny but well-formed geometry is
/// accepted at any scale.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Largest sine of the angle between two edges that still counts as
    /// collinear.
    pub collinear: f64,
}

impl Tolerance {
    /// Default tolerances (1e-12 collinear).
    pub const DEFAULT: Self = Self { collinear: 1e-12 };

    /// Check if a triangle has collapsed onto a line or a point.
    ///
    /// Compares the winding normal against the product of the two edge
    /// lengths it was built from, so the test does not depend on size.
    pub fn is_degenerate_triangle(&self, a: &Point3, b: &Point3, c: &Point3) -> bool {
        let scale = (b - a).norm() * (c - a).norm();
        // NaN fails the comparison
        !(triangle_normal(a, b, c).norm() > self.collinear * scale)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Check that a normal can orient a plane: finite and not exactly zero.
///
/// The length is irrelevant; callers never normalize.
pub fn is_usable_normal(n: &Vec3) -> bool {
    n.iter().all(|c| c.is_finite()) && *n != Vec3::zeros()
}

/// Centroid of a triangle.
pub fn triangle_centroid(a: &Point3, b: &Point3, c: &Point3) -> Point3 {
    Point3::from((a.coords + b.coords + c.coords) / 3.0)
}

/// Unnormalized face normal following the `a -> b -> c` winding.
///
/// Its length is twice the triangle's area.
pub fn triangle_normal(a: &Point3, b: &Point3, c: &Point3) -> Vec3 {
    (b - a).cross(&(c - a))
}
