//! Ray-primitive intersection algorithms.
//!
//! Each shape kind has a dedicated closed-form intersector returning the
//! closest hit in front of the ray origin (`t > 0`), if any.

mod plane;
mod sphere;
mod triangle;

pub use plane::intersect_plane;
pub use sphere::intersect_sphere;
pub use triangle::{barycentric, intersect_triangle, intersect_triangle_bounded};

use serde::{Deserialize, Serialize};

use crate::shape::Shape;
use crate::{Hit, Ray};

/// How triangles are tested against rays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriangleTest {
    /// Hit the triangle's unbounded supporting plane (reference behavior).
    #[default]
    Plane,
    /// Hit the plane, then require the point to lie inside the triangle.
    Bounded,
}

/// Intersect a ray with a shape.
///
/// This dispatches to the appropriate intersector based on shape kind.
pub fn intersect_shape(ray: &Ray, shape: &Shape, test: TriangleTest) -> Option<Hit> {
    match shape {
        Shape::Triangle(tri) => match test {
            TriangleTest::Plane => intersect_triangle(ray, tri),
            TriangleTest::Bounded => intersect_triangle_bounded(ray, tri),
        },
        Shape::Sphere(sphere) => intersect_sphere(ray, sphere),
        Shape::Plane(plane) => intersect_plane(ray, plane.origin(), plane.normal()),
    }
}
