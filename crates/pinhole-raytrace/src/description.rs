//! Declarative scene files.
//!
//! A [`SceneDescription`] is the serde form of everything a render needs:
//! camera, render options and an ordered primitive list. It is plain data;
//! [`SceneDescription::build`] validates it into the runtime types.

use log::debug;
use pinhole_math::{triangle_centroid, triangle_normal, Point3, Tolerance, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::color::Color;
use crate::error::{RaytraceError, Result};
use crate::render::RenderOptions;
use crate::shape::{Plane, Primitive, Scene, Sphere, Triangle};

/// Camera section of a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraDescription {
    /// Vertical field of view in degrees.
    pub fov: f64,
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
}

/// One primitive of a scene file, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", deny_unknown_fields)]
pub enum PrimitiveDescription {
    /// Triangle. `center` defaults to the centroid, `normal` to the
    /// winding normal of `vertices`.
    Triangle {
        /// The three vertices.
        vertices: [[f64; 3]; 3],
        /// Plane anchor used by the intersection test.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        center: Option<[f64; 3]>,
        /// Face normal.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        normal: Option<[f64; 3]>,
        /// Flat color.
        color: Color,
    },
    /// Sphere.
    Sphere {
        /// Center point.
        center: [f64; 3],
        /// Radius.
        radius: f64,
        /// Flat color.
        color: Color,
    },
    /// Unbounded plane.
    Plane {
        /// Any point on the plane.
        origin: [f64; 3],
        /// Plane normal.
        normal: [f64; 3],
        /// Flat color.
        color: Color,
    },
}

impl PrimitiveDescription {
    /// Validate into a runtime primitive.
    pub fn build(&self) -> Result<Primitive> {
        let primitive = match self {
            PrimitiveDescription::Triangle {
                vertices,
                center,
                normal,
                color,
            } => Primitive::new(build_triangle(vertices, center, normal)?, *color),
            PrimitiveDescription::Sphere {
                center,
                radius,
                color,
            } => Primitive::new(Sphere::new(point(center), *radius)?, *color),
            PrimitiveDescription::Plane {
                origin,
                normal,
                color,
            } => Primitive::new(Plane::new(point(origin), vector(normal))?, *color),
        };
        Ok(primitive)
    }
}

fn build_triangle(
    vertices: &[[f64; 3]; 3],
    center: &Option<[f64; 3]>,
    normal: &Option<[f64; 3]>,
) -> Result<Triangle> {
    let vertices = vertices.map(|v| point(&v));
    if center.is_none() && normal.is_none() {
        return Triangle::new(vertices);
    }

    let [a, b, c] = &vertices;
    let center = center
        .as_ref()
        .map(point)
        .unwrap_or_else(|| triangle_centroid(a, b, c));
    let normal = match normal {
        Some(n) => vector(n),
        None => {
            if Tolerance::DEFAULT.is_degenerate_triangle(a, b, c) {
                return Err(RaytraceError::DegenerateTriangle);
            }
            triangle_normal(a, b, c)
        }
    };
    Triangle::from_parts(vertices, center, normal)
}

fn point(p: &[f64; 3]) -> Point3 {
    Point3::new(p[0], p[1], p[2])
}

fn vector(v: &[f64; 3]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}

/// A complete scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    /// Camera configuration.
    pub camera: CameraDescription,
    /// Render options; every key is optional.
    #[serde(default)]
    pub render: RenderOptions,
    /// Primitives in iteration order.
    #[serde(default)]
    pub primitives: Vec<PrimitiveDescription>,
}

impl SceneDescription {
    /// Parse a TOML scene file.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Validate the camera section.
    pub fn camera(&self) -> Result<Camera> {
        Camera::new(self.camera.fov, self.camera.width, self.camera.height)
    }

    /// Validate every primitive, keeping their order.
    pub fn scene(&self) -> Result<Scene> {
        self.primitives
            .iter()
            .enumerate()
            .map(|(index, p)| {
                p.build().map_err(|e| RaytraceError::InvalidPrimitive {
                    index,
                    source: Box::new(e),
                })
            })
            .collect()
    }

    /// Validate everything, failing before any ray is generated.
    pub fn build(&self) -> Result<(Camera, Scene, RenderOptions)> {
        let camera = self.camera()?;
        let scene = self.scene()?;
        debug!("scene description built: {} primitives", scene.len());
        Ok((camera, scene, self.render))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intersect::TriangleTest;
    use crate::render::HitPolicy;
    use crate::shape::Shape;
    use approx::assert_relative_eq;

    const SCENE: &str = r#"
[camera]
fov = 60.0
width = 4
height = 4

[render]
hit_policy = "nearest"
triangle_test = "bounded"

[[primitives]]
kind = "triangle"
vertices = [[-1.5, -1.0, 2.0], [1.5, -1.0, 2.0], [0.0, 2.0, 2.0]]
normal = [0.0, 0.0, -1.0]
color = { r = 1.0, g = 0.0, b = 0.0 }

[[primitives]]
kind = "sphere"
center = [0.0, 0.0, 6.0]
radius = 1.5
color = { r = 0.0, g = 1.0, b = 0.0, a = 0.5 }

[[primitives]]
kind = "plane"
origin = [0.0, -2.0, 0.0]
normal = [0.0, 1.0, 0.0]
color = { r = 0.5, g = 0.5, b = 0.5 }
"#;

    #[test]
    fn test_parse_and_build() {
        let desc = SceneDescription::from_toml(SCENE).unwrap();
        let (camera, scene, options) = desc.build().unwrap();

        assert_eq!(camera.width(), 4);
        assert_relative_eq!(camera.field_of_view(), 60.0);
        assert_eq!(options.hit_policy, HitPolicy::Nearest);
        assert_eq!(options.triangle_test, TriangleTest::Bounded);
        assert_eq!(options.background, Color::BLACK);

        let kinds: Vec<_> = scene.iter().map(|p| p.shape().kind()).collect();
        assert_eq!(kinds, ["triangle", "sphere", "plane"]);
        assert_eq!(scene.primitives()[1].color(), Color::rgba(0.0, 1.0, 0.0, 0.5));
    }

    #[test]
    fn test_triangle_center_defaults_to_centroid() {
        let desc = SceneDescription::from_toml(SCENE).unwrap();
        let scene = desc.scene().unwrap();
        let Shape::Triangle(tri) = scene.primitives()[0].shape() else {
            panic!("expected a triangle");
        };
        assert_relative_eq!(*tri.center(), Point3::new(0.0, 0.0, 2.0));
        assert_eq!(*tri.normal(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_render_section_is_optional() {
        let desc = SceneDescription::from_toml("[camera]\nfov = 45.0\nwidth = 8\nheight = 2\n").unwrap();
        let (_, scene, options) = desc.build().unwrap();
        assert!(scene.is_empty());
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_bad_camera_fails_build() {
        let desc = SceneDescription::from_toml("[camera]\nfov = 180.0\nwidth = 8\nheight = 2\n").unwrap();
        assert!(matches!(desc.build(), Err(RaytraceError::InvalidFieldOfView(_))));
    }

    #[test]
    fn test_bad_primitive_reports_index() {
        let source = r#"
[camera]
fov = 60.0
width = 4
height = 4

[[primitives]]
kind = "sphere"
center = [0.0, 0.0, 6.0]
radius = 1.0
color = { r = 1.0, g = 1.0, b = 1.0 }

[[primitives]]
kind = "sphere"
center = [0.0, 0.0, 6.0]
radius = -1.0
color = { r = 1.0, g = 1.0, b = 1.0 }
"#;
        let desc = SceneDescription::from_toml(source).unwrap();
        match desc.build() {
            Err(RaytraceError::InvalidPrimitive { index, source }) => {
                assert_eq!(index, 1);
                assert!(matches!(*source, RaytraceError::InvalidRadius(_)));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_collinear_triangle_without_normal() {
        let desc = PrimitiveDescription::Triangle {
            vertices: [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [2.0, 0.0, 1.0]],
            center: Some([0.0, 0.0, 1.0]),
            normal: None,
            color: Color::RED,
        };
        assert!(matches!(desc.build(), Err(RaytraceError::DegenerateTriangle)));
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let source = "[camera]\nfov = 60.0\nwidth = 4\nheight = 4\n\n[[primitives]]\nkind = \"torus\"\n";
        assert!(matches!(
            SceneDescription::from_toml(source),
            Err(RaytraceError::Parse(_))
        ));
    }

    #[test]
    fn test_misspelled_render_key_is_parse_error() {
        let source = "[camera]\nfov = 60.0\nwidth = 4\nheight = 4\n\n[render]\nhit-policy = \"nearest\"\n";
        assert!(matches!(
            SceneDescription::from_toml(source),
            Err(RaytraceError::Parse(_))
        ));
    }

    #[test]
    fn test_misspelled_primitive_key_is_parse_error() {
        let source = r#"
[camera]
fov = 60.0
width = 4
height = 4

[[primitives]]
kind = "triangle"
vertices = [[-1.5, -1.0, 2.0], [1.5, -1.0, 2.0], [0.0, 2.0, 2.0]]
normall = [0.0, 0.0, -1.0]
color = { r = 1.0, g = 0.0, b = 0.0 }
"#;
        assert!(matches!(
            SceneDescription::from_toml(source),
            Err(RaytraceError::Parse(_))
        ));
    }

    #[test]
    fn test_small_triangle_without_normal_builds() {
        let desc = PrimitiveDescription::Triangle {
            vertices: [[0.0, 0.0, 1.0], [1e-5, 0.0, 1.0], [0.0, 1e-5, 1.0]],
            center: Some([0.0, 0.0, 1.0]),
            normal: None,
            color: Color::RED,
        };
        assert!(desc.build().is_ok());
    }
}
