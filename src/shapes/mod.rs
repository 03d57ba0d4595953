pub mod circle;
pub mod point;
pub mod polygon;

use std::fmt;

use crate::error::{CollisionError, Result};
use crate::math::vec2::Vec2;

// Re-export the specific shape types
pub use circle::Circle;
pub use point::Point;
pub use polygon::Polygon;

/// Discriminant of [`Shape`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Circle,
    Polygon,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Point => "point",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
        };
        f.write_str(name)
    }
}

/// A shape that can take part in a collision query.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    pub fn point(position: Vec2) -> Result<Self> {
        Point::new(position).map(Shape::Point)
    }

    pub fn circle(position: Vec2, radius: f64) -> Result<Self> {
        Circle::new(position, radius).map(Shape::Circle)
    }

    /// Builds a polygon; the vertices are re-ordered by angle around their centroid.
    pub fn polygon(vertices: Vec<Vec2>) -> Result<Self> {
        Polygon::new(vertices).map(Shape::Polygon)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Re-checks the invariant of the variant.
    ///
    /// Fields are public and may have been changed since construction, so every
    /// query calls this before touching the geometry.
    pub fn validate(&self) -> Result<()> {
        let res = match self {
            Shape::Point(p) => p.validate(),
            Shape::Circle(c) => c.validate(),
            Shape::Polygon(p) => p.validate(),
        };
        if let Err(err) = &res {
            log::debug!("{} failed validation: {}", self.kind(), err);
        }
        res
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            _ => None,
        }
    }

    /// Rotates a polygon in place about `center`. See [`Polygon::rotate`].
    ///
    /// Fails with `InvalidShape` for points and circles.
    pub fn rotate(&mut self, radians: f64, center: Vec2) -> Result<&mut Self> {
        let kind = self.kind();
        match self {
            Shape::Polygon(p) => {
                p.rotate(radians, center).map_err(|err| {
                    log::debug!("polygon rotation rejected: {}", err);
                    err
                })?;
            }
            _ => {
                return Err(CollisionError::InvalidShape(format!(
                    "only polygons can be rotated, got a {kind}"
                )));
            }
        }
        Ok(self)
    }

    /// Moves the shape rigidly by `offset`.
    pub fn translate(&mut self, offset: Vec2) -> Result<&mut Self> {
        self.validate()?;
        if !offset.is_finite() {
            return Err(CollisionError::InvalidArgument(format!(
                "translation offset must be finite, got {offset:?}"
            )));
        }
        match self {
            Shape::Point(p) => p.position += offset,
            Shape::Circle(c) => c.position += offset,
            Shape::Polygon(p) => {
                for v in &mut p.vertices {
                    *v += offset;
                }
            }
        }
        Ok(self)
    }
}

impl From<Point> for Shape {
    fn from(p: Point) -> Self {
        Shape::Point(p)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}
