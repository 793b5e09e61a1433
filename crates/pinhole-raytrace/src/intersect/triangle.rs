//! Ray-triangle intersection.
//!
//! [`intersect_triangle`] only tests the triangle's supporting plane,
//! anchored at its centroid. Any ray crossing that plane in front of the
//! origin reports a hit, whether or not the point lies inside the three
//! vertices. [`intersect_triangle_bounded`] adds the containment check.

use pinhole_math::{triangle_normal, Point3};

use super::intersect_plane;
use crate::shape::Triangle;
use crate::{Hit, Ray};

/// Intersect a ray with the unbounded plane of a triangle.
pub fn intersect_triangle(ray: &Ray, tri: &Triangle) -> Option<Hit> {
    intersect_plane(ray, tri.center(), tri.normal())
}

/// Intersect a ray with a triangle, rejecting plane hits outside it.
pub fn intersect_triangle_bounded(ray: &Ray, tri: &Triangle) -> Option<Hit> {
    let hit = intersect_triangle(ray, tri)?;
    barycentric(tri, &hit.point).map(|_| hit)
}

/// Barycentric weights of `p` with respect to the triangle's vertices.
///
/// `p` is projected onto the vertex plane along its normal. Returns `None`
/// when the projection falls outside the triangle or the vertices are
/// collinear. Points on an edge count as inside.
pub fn barycentric(tri: &Triangle, p: &Point3) -> Option<[f64; 3]> {
    let [a, b, c] = tri.vertices();
    let n = triangle_normal(a, b, c);
    let area2 = n.norm_squared();
    if area2 == 0.0 {
        return None;
    }

    // signed sub-triangle areas opposite each vertex
    let wa = n.dot(&(c - b).cross(&(p - b))) / area2;
    let wb = n.dot(&(a - c).cross(&(p - c))) / area2;
    let wc = 1.0 - wa - wb;

    if wa >= 0.0 && wb >= 0.0 && wc >= 0.0 {
        Some([wa, wb, wc])
    } else {
        None
    }
}
