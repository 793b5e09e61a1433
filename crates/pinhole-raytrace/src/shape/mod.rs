//! Scene primitives: a closed set of shape kinds, each with a flat color.

mod plane;
mod sphere;
mod triangle;

pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::Triangle;

use crate::color::Color;
use crate::intersect::{intersect_shape, TriangleTest};
use crate::{Hit, Ray};

/// Geometry of a primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Triangle, tested against its supporting plane by default.
    Triangle(Triangle),
    /// Sphere.
    Sphere(Sphere),
    /// Unbounded plane.
    Plane(Plane),
}

impl Shape {
    /// Short lowercase name of the shape kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Triangle(_) => "triangle",
            Shape::Sphere(_) => "sphere",
            Shape::Plane(_) => "plane",
        }
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}

impl From<Plane> for Shape {
    fn from(p: Plane) -> Self {
        Shape::Plane(p)
    }
}

/// A renderable primitive: a shape painted with one flat color.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    shape: Shape,
    color: Color,
}

impl Primitive {
    /// Create a primitive.
    pub fn new(shape: impl Into<Shape>, color: Color) -> Self {
        Self {
            shape: shape.into(),
            color,
        }
    }

    /// Intersect with the reference triangle test (unbounded plane).
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.intersect_with(ray, TriangleTest::Plane)
    }

    /// Intersect using the given triangle test.
    pub fn intersect_with(&self, ray: &Ray, test: TriangleTest) -> Option<Hit> {
        intersect_shape(ray, &self.shape, test)
    }

    /// Flat color of the primitive.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Geometry of the primitive.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

/// An ordered collection of primitives.
///
/// Order is significant: under [`HitPolicy::LastHit`](crate::HitPolicy::LastHit)
/// the last hitting primitive wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a primitive at the end of the iteration order.
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Primitives in iteration order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Iterate primitives in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    /// Number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl FromIterator<Primitive> for Scene {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}
