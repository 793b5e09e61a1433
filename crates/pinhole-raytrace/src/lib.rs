#![warn(missing_docs)]

//! Brute-force pinhole ray casting for the pinhole ray tracer.
//!
//! One ray per pixel is cast from a camera at the origin through a virtual
//! image plane at z = 1. Each ray is tested against every primitive of the
//! scene and the pixel takes the flat color of the winning primitive.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray representation with origin and (unnormalized) direction
//! - [`Hit`] - Intersection result: parameter `t` and hit point
//! - [`Camera`] - Field of view, raster size and the image-plane mapping
//! - [`shape`] - Triangle, sphere and plane primitives, and the ordered [`Scene`]
//! - [`intersect`] - Closed-form intersectors for each shape kind
//! - [`render`] - The per-pixel loop, sequential and row-parallel
//! - [`debug`] - Frustum and pixel ray emission for visualization
//! - [`description`] - TOML scene files
//!
//! # Reference behavior
//!
//! By default triangles are tested against their unbounded supporting plane
//! and the last hitting primitive in scene order colors the pixel.
//! [`RenderOptions::corrected`] switches to bounded triangles and nearest-hit
//! selection.
//!
//! # Example
//!
//! ```
//! use pinhole_math::{Point3, Vec3};
//! use pinhole_raytrace::{render, Camera, Color, Primitive, RenderOptions, Scene, Triangle};
//!
//! let camera = Camera::new(60.0, 4, 4)?;
//! let triangle = Triangle::from_parts(
//!     [
//!         Point3::new(-1.5, -1.0, 2.0),
//!         Point3::new(1.5, -1.0, 2.0),
//!         Point3::new(0.0, 2.0, 2.0),
//!     ],
//!     Point3::new(0.0, 0.0, 2.0),
//!     Vec3::new(0.0, 0.0, -1.0),
//! )?;
//! let scene: Scene = [Primitive::new(triangle, Color::RED)].into_iter().collect();
//!
//! let raster = render(&camera, &scene, &RenderOptions::default());
//! assert_eq!(raster.pixel(0, 0), Some(Color::RED));
//! # Ok::<(), pinhole_raytrace::RaytraceError>(())
//! ```

mod camera;
mod color;
pub mod debug;
pub mod description;
pub mod error;
pub mod intersect;
mod raster;
mod ray;
pub mod render;
pub mod shape;

pub use camera::Camera;
pub use color::Color;
pub use debug::{emit_debug_rays, DebugRay, DebugRaySink, RecordedRays};
pub use description::SceneDescription;
pub use error::{RaytraceError, Result};
pub use intersect::TriangleTest;
pub use raster::{Raster, RasterSurface};
pub use ray::{Hit, Ray};
pub use render::{render, render_into, resolve, HitPolicy, RenderOptions};
pub use shape::{Plane, Primitive, Scene, Shape, Sphere, Triangle};
