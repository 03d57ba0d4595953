use std::f64::consts::TAU;

use crate::error::{CollisionError, Result};
use crate::math::vec2::Vec2;

/// A convex polygon given by its vertices in world space.
///
/// `Polygon::new` stores the vertices in angular order around their centroid
/// (clockwise, see [`sort_by_angle`]), so consecutive vertices form the edges
/// and every edge normal faces the same side of its edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a new polygon from a vector of vertices, re-ordering them by angle.
    ///
    /// Fails with `InvalidArgument` if fewer than 3 vertices are provided or
    /// any vertex has a non-finite coordinate. Convexity is not checked.
    pub fn new(mut vertices: Vec<Vec2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(CollisionError::InvalidArgument(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        if let Some((i, v)) = vertices.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(CollisionError::InvalidArgument(format!(
                "polygon vertex {i} is not finite: {v:?}"
            )));
        }
        sort_by_angle(&mut vertices);
        Ok(Polygon { vertices })
    }

    pub fn validate(&self) -> Result<()> {
        if self.vertices.len() < 3 {
            return Err(CollisionError::InvalidShape(format!(
                "polygon has {} vertices, needs at least 3",
                self.vertices.len()
            )));
        }
        if let Some((i, v)) = self.vertices.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(CollisionError::InvalidShape(format!(
                "polygon vertex {i} is not finite: {v:?}"
            )));
        }
        Ok(())
    }

    /// Arithmetic mean of the vertices.
    pub fn centroid(&self) -> Vec2 {
        centroid(&self.vertices)
    }

    /// Returns one unit normal per edge, in edge order.
    ///
    /// Edge `i` runs from `vertices[i]` to `vertices[(i + 1) % n]`; its normal
    /// is the clockwise perpendicular `(e.y, -e.x)` of the edge vector `e`.
    /// A zero-length edge yields a zero normal.
    pub fn edge_normals(&self) -> Vec<Vec2> {
        let n = self.vertices.len();
        let mut normals = Vec::with_capacity(n);

        for i in 0..n {
            let v1 = self.vertices[i];
            let v2 = self.vertices[(i + 1) % n];
            let edge = v2 - v1;
            normals.push(edge.perpendicular_cw().normalize());
        }
        normals
    }

    /// Point-in-convex-polygon test, boundary inclusive.
    ///
    /// Works for either winding: the point is inside when it is not strictly
    /// on both sides of the edge lines.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let n = self.vertices.len();
        let mut has_pos = false;
        let mut has_neg = false;

        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let side = (b - a).cross(point - a);
            if side > 0.0 {
                has_pos = true;
            } else if side < 0.0 {
                has_neg = true;
            }
            if has_pos && has_neg {
                return false;
            }
        }

        if !has_pos && !has_neg {
            // Degenerate (collinear) polygon and a point on its line: fall back to the extent.
            let (min_x, max_x, min_y, max_y) = self.vertices.iter().fold(
                (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
                |(lx, hx, ly, hy), v| (lx.min(v.x), hx.max(v.x), ly.min(v.y), hy.max(v.y)),
            );
            return point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y;
        }
        true
    }

    /// Rotates every vertex counter-clockwise by `radians` about `center`, in place.
    ///
    /// The vertex order is kept as is; it is not re-sorted afterwards.
    pub fn rotate(&mut self, radians: f64, center: Vec2) -> Result<&mut Self> {
        self.validate()?;
        if !radians.is_finite() {
            return Err(CollisionError::InvalidArgument(format!(
                "rotation angle must be finite, got {radians}"
            )));
        }
        if !center.is_finite() {
            return Err(CollisionError::InvalidArgument(format!(
                "rotation center must be finite, got {center:?}"
            )));
        }
        for v in &mut self.vertices {
            *v = v.rotate_about(center, radians);
        }
        Ok(self)
    }
}

/// Arithmetic mean of `vertices`. Returns `Vec2::ZERO` for an empty slice.
pub fn centroid(vertices: &[Vec2]) -> Vec2 {
    if vertices.is_empty() {
        return Vec2::ZERO;
    }
    let mut sum = Vec2::ZERO;
    for v in vertices {
        sum += *v;
    }
    sum / vertices.len() as f64
}

/// Sorts `vertices` by the angle of `v - centroid`, measured as `atan2(x, y)`
/// and wrapped into `[0, 2π)`, ascending.
///
/// The angle starts at +y and grows towards +x, so the result is in clockwise
/// order. Equal angles keep their input order.
pub fn sort_by_angle(vertices: &mut [Vec2]) {
    let pivot = centroid(vertices);
    let angle = |v: &Vec2| {
        let d = *v - pivot;
        (d.x.atan2(d.y) + TAU) % TAU
    };
    vertices.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
}
