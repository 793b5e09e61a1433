//! Ray-plane intersection (closed-form).

use pinhole_math::{Point3, Vec3};

use crate::{Hit, Ray};

/// Intersect a ray with the plane through `anchor` with normal `normal`.
///
/// Returns `Some(hit)` if the ray meets the plane at a finite `t > 0`, or
/// `None` if the ray is exactly parallel to the plane or meets it at or
/// behind the origin. Neither vector needs to be unit length.
/// Both sides of the plane count; there is no backface culling.
pub fn intersect_plane(ray: &Ray, anchor: &Point3, normal: &Vec3) -> Option<Hit> {
    let denom = ray.direction.dot(normal);

    // Ray is parallel to plane
    if denom == 0.0 {
        return None;
    }

    let t = (anchor - ray.origin).dot(normal) / denom;

    // Intersection is at or behind ray origin, or overflowed
    if !(t > 0.0) || !t.is_finite() {
        return None;
    }

    Some(Hit::at(ray, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_plane_perpendicular() {
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0));
        let hit = intersect_plane(&ray, &Point3::new(0.0, 0.0, 5.0), &Vec3::new(0.0, 0.0, -1.0));
        let hit = hit.unwrap();
        assert_relative_eq!(hit.t, 5.0);
        assert_relative_eq!(hit.point, Point3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_ray_plane_backface_counts() {
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0));
        let anchor = Point3::new(0.0, 0.0, 5.0);
        let front = intersect_plane(&ray, &anchor, &Vec3::new(0.0, 0.0, -1.0)).unwrap();
        let back = intersect_plane(&ray, &anchor, &Vec3::new(0.0, 0.0, 1.0)).unwrap();
        assert_relative_eq!(front.t, back.t);
    }

    #[test]
    fn test_ray_plane_parallel() {
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let anchor = Point3::new(0.0, 0.0, 5.0);
        for origin in [
            Point3::origin(),
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(3.0, -2.0, 7.0),
        ] {
            let ray = Ray::new(origin, Vec3::new(1.0, 2.0, 0.0));
            assert!(intersect_plane(&ray, &anchor, &normal).is_none());
        }
    }

    #[test]
    fn test_ray_plane_behind() {
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0));
        let hit = intersect_plane(&ray, &Point3::new(0.0, 0.0, 5.0), &Vec3::new(0.0, 0.0, -1.0));
        assert!(hit.is_none());
    }

    #[test]
    fn test_ray_plane_origin_on_plane() {
        // t == 0 is not a hit
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 1.0, 1.0));
        let hit = intersect_plane(&ray, &Point3::new(0.0, 0.0, 5.0), &Vec3::z());
        assert!(hit.is_none());
    }

    #[test]
    fn test_ray_plane_short_direction_small_normal() {
        // dot product is 1e-13 but the ray is head-on
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1e-7));
        let hit = intersect_plane(&ray, &Point3::new(0.0, 0.0, 5.0), &Vec3::new(0.0, 0.0, -1e-6));
        let hit = hit.unwrap();
        assert_relative_eq!(hit.t, 5e7);
        assert_relative_eq!(hit.point, Point3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_ray_plane_overflowing_t() {
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1e-300));
        let hit = intersect_plane(&ray, &Point3::new(0.0, 0.0, 1e300), &Vec3::new(0.0, 0.0, 1e-10));
        assert!(hit.is_none());
    }

    #[test]
    fn test_ray_plane_unnormalized_direction() {
        let ray = Ray::new(Point3::origin(), Vec3::new(1.0, 0.0, 2.0));
        let hit = intersect_plane(&ray, &Point3::new(0.0, 0.0, 10.0), &Vec3::new(0.0, 0.0, 3.0));
        let hit = hit.unwrap();
        // t counts multiples of the raw direction, not world distance
        assert_relative_eq!(hit.t, 5.0);
        assert_relative_eq!(hit.point, Point3::new(5.0, 0.0, 10.0));
    }
}
