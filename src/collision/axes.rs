//! Candidate separating axes.

use crate::math::vec2::Vec2;
use crate::shapes::Shape;

/// Drops axes that are (anti-)parallel to an axis already kept.
///
/// `normal` is dropped when `|normal · kept| >= threshold` for some earlier
/// survivor `kept`. An axis and its negation give the same interval test, so
/// opposite directions collapse too. This is a single greedy pass in input
/// order, not a clustering: a chain of axes each just under the threshold from
/// the previous one may keep more members than a transitive grouping would.
/// Zero vectors (from zero-length edges) are never kept.
pub fn filter_unique_normals(normals: &[Vec2], threshold: f64) -> Vec<Vec2> {
    let mut unique: Vec<Vec2> = Vec::with_capacity(normals.len());
    for &normal in normals {
        if normal.magnitude_squared() < 1e-10 {
            continue;
        }
        if unique.iter().all(|kept| kept.dot(normal).abs() < threshold) {
            unique.push(normal);
        }
    }
    unique
}

/// Edge normals of every polygon operand, de-duplicated.
///
/// Points and circles contribute no axes.
pub fn candidate_axes(a: &Shape, b: &Shape, threshold: f64) -> Vec<Vec2> {
    let mut normals = Vec::new();
    for shape in [a, b] {
        if let Shape::Polygon(polygon) = shape {
            normals.extend(polygon.edge_normals());
        }
    }
    filter_unique_normals(&normals, threshold)
}
