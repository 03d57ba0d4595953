// --- Projection helpers for SAT ---

use crate::error::{CollisionError, Result};
use crate::math::vec2::Vec2;
use crate::shapes::Shape;

/// Extent of a shape along an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub min: f64,
    pub max: f64,
    /// Projection of a circle's center, before widening by the radius.
    /// `None` for points and polygons.
    pub center: Option<f64>,
}

impl Projection {
    pub fn overlaps(&self, other: &Projection) -> bool {
        intervals_overlap(self.min, self.max, other.min, other.max)
    }

    /// True if `value` lies in the closed interval `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Projects `vertices` onto `axis` and returns `(min, max)`.
///
/// Fails with `InvalidArgument` on an empty slice.
pub fn project_vertices(vertices: &[Vec2], axis: Vec2) -> Result<(f64, f64)> {
    if vertices.is_empty() {
        return Err(CollisionError::InvalidArgument(
            "cannot project an empty vertex set".to_string(),
        ));
    }
    let mut min_proj = f64::INFINITY;
    let mut max_proj = f64::NEG_INFINITY;

    for vertex in vertices {
        let projection = vertex.dot(axis);
        min_proj = min_proj.min(projection);
        max_proj = max_proj.max(projection);
    }
    Ok((min_proj, max_proj))
}

/// Projects a shape onto a unit `axis`.
///
/// A circle's interval is widened by its radius on both sides and the bare
/// center projection is reported in [`Projection::center`].
pub fn project_shape(shape: &Shape, axis: Vec2) -> Result<Projection> {
    let projection = match shape {
        Shape::Point(point) => {
            let p = point.position.dot(axis);
            Projection {
                min: p,
                max: p,
                center: None,
            }
        }
        Shape::Circle(circle) => {
            let center_proj = circle.position.dot(axis);
            Projection {
                min: center_proj - circle.radius,
                max: center_proj + circle.radius,
                center: Some(center_proj),
            }
        }
        Shape::Polygon(polygon) => {
            let (min, max) = project_vertices(&polygon.vertices, axis)?;
            Projection {
                min,
                max,
                center: None,
            }
        }
    };
    Ok(projection)
}

/// Closed-interval overlap of `[min_a, max_a]` and `[min_b, max_b]`.
///
/// True iff an endpoint of either interval lies inside the other one, which
/// for well-formed intervals is the same as `min_a <= max_b && min_b <= max_a`.
pub fn intervals_overlap(min_a: f64, max_a: f64, min_b: f64, max_b: f64) -> bool {
    let within = |v: f64, lo: f64, hi: f64| v >= lo && v <= hi;
    within(min_a, min_b, max_b)
        || within(max_a, min_b, max_b)
        || within(min_b, min_a, max_a)
        || within(max_b, min_a, max_a)
}
