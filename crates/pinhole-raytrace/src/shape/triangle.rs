//! Triangle primitive.

use pinhole_math::{
    is_usable_normal, triangle_centroid, triangle_normal, Point3, Tolerance, Vec3,
};

use crate::error::{RaytraceError, Result};

/// A triangle with a cached centroid and face normal.
///
/// The normal is trusted input: [`Triangle::from_parts`] keeps it as
/// given and only rejects a zero or non-finite vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Point3; 3],
    center: Point3,
    normal: Vec3,
}

impl Triangle {
    /// Build a triangle from its vertices, deriving the centroid and the
    /// winding normal `(v1 - v0) x (v2 - v0)`.
    pub fn new(vertices: [Point3; 3]) -> Result<Self> {
        let [a, b, c] = &vertices;
        if Tolerance::DEFAULT.is_degenerate_triangle(a, b, c) {
            return Err(RaytraceError::DegenerateTriangle);
        }
        Ok(Self {
            center: triangle_centroid(a, b, c),
            normal: triangle_normal(a, b, c),
            vertices,
        })
    }

    /// Build a triangle from authored data without recomputing anything.
    pub fn from_parts(vertices: [Point3; 3], center: Point3, normal: Vec3) -> Result<Self> {
        if !is_usable_normal(&normal) {
            return Err(RaytraceError::DegenerateNormal);
        }
        Ok(Self {
            vertices,
            center,
            normal,
        })
    }

    /// The three vertices in authored order.
    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    /// Point the plane test anchors on.
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Face normal, not necessarily unit length.
    pub fn normal(&self) -> &Vec3 {
        &self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_derives_center_and_normal() {
        let tri = Triangle::new([
            Point3::new(-1.5, -1.0, 2.0),
            Point3::new(0.0, 2.0, 2.0),
            Point3::new(1.5, -1.0, 2.0),
        ])
        .unwrap();
        assert_relative_eq!(*tri.center(), Point3::new(0.0, 0.0, 2.0));
        // wound so the normal points back at the origin
        assert!(tri.normal().z < 0.0);
        assert_relative_eq!(tri.normal().x, 0.0);
        assert_relative_eq!(tri.normal().y, 0.0);
    }

    #[test]
    fn test_new_rejects_collinear() {
        let result = Triangle::new([
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ]);
        assert!(matches!(result, Err(RaytraceError::DegenerateTriangle)));
    }

    #[test]
    fn test_new_accepts_small_triangle() {
        let tri = Triangle::new([
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1e-5, 0.0, 1.0),
            Point3::new(0.0, 1e-5, 1.0),
        ])
        .unwrap();
        assert_relative_eq!(*tri.normal(), Vec3::new(0.0, 0.0, 1e-10), max_relative = 1e-12);
    }

    #[test]
    fn test_new_rejects_small_collinear() {
        let result = Triangle::new([
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1e-5, 0.0, 1.0),
            Point3::new(2e-5, 0.0, 1.0),
        ]);
        assert!(matches!(result, Err(RaytraceError::DegenerateTriangle)));
    }

    #[test]
    fn test_from_parts_accepts_small_normal() {
        let normal = Vec3::new(0.0, 0.0, -1e-12);
        let tri = Triangle::from_parts([Point3::origin(); 3], Point3::origin(), normal).unwrap();
        assert_eq!(*tri.normal(), normal);
    }

    #[test]
    fn test_from_parts_keeps_authored_normal() {
        let vertices = [
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ];
        let normal = Vec3::new(0.0, 0.0, -7.0);
        let tri = Triangle::from_parts(vertices, Point3::new(0.0, 0.0, 1.0), normal).unwrap();
        assert_eq!(*tri.normal(), normal);
        assert_eq!(*tri.center(), Point3::new(0.0, 0.0, 1.0));
        assert_eq!(tri.vertices(), &vertices);
    }

    #[test]
    fn test_from_parts_rejects_zero_normal() {
        let result = Triangle::from_parts(
            [Point3::origin(); 3],
            Point3::origin(),
            Vec3::zeros(),
        );
        assert!(matches!(result, Err(RaytraceError::DegenerateNormal)));

        let result = Triangle::from_parts(
            [Point3::origin(); 3],
            Point3::origin(),
            Vec3::new(f64::NAN, 0.0, 1.0),
        );
        assert!(matches!(result, Err(RaytraceError::DegenerateNormal)));
    }
}
