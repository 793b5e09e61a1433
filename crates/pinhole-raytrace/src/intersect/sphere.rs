//! Ray-sphere intersection (quadratic equation).

use crate::shape::Sphere;
use crate::{Hit, Ray};

/// Intersect a ray with a sphere.
///
/// Returns the nearest intersection with `t > 0`. A ray starting inside
/// the sphere reports its exit point.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<Hit> {
    let oc = ray.origin - sphere.center();
    let d = &ray.direction;

    // Quadratic: |oc + t*d|^2 = r^2
    let a = d.dot(d);
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * oc.dot(d);
    let c = oc.dot(&oc) - sphere.radius() * sphere.radius();

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);

    [t1, t2]
        .into_iter()
        .find(|&t| t > 0.0)
        .map(|t| Hit::at(ray, t))
}
