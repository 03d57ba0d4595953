use crate::config::SatConfig;
use crate::error::Result;
use crate::shapes::{Circle, Point, Polygon, Shape};

use super::axes::candidate_axes;
use super::projection::{project_shape, Projection};

/// Tests whether two shapes overlap, using the default [`SatConfig`].
///
/// Touching shapes count as colliding. Fails with `InvalidShape` if either
/// shape no longer satisfies its invariant.
pub fn are_colliding(a: &Shape, b: &Shape) -> Result<bool> {
    are_colliding_with(a, b, &SatConfig::default())
}

/// Tests whether two shapes overlap with an explicit configuration.
pub fn are_colliding_with(a: &Shape, b: &Shape, config: &SatConfig) -> Result<bool> {
    config.validate()?;
    a.validate()?;
    b.validate()?;
    dispatch(a, b, config)
}

fn dispatch(a: &Shape, b: &Shape, config: &SatConfig) -> Result<bool> {
    let colliding = match (a, b) {
        (Shape::Point(p), Shape::Point(q)) => check_point_point(p, q),
        (Shape::Circle(c1), Shape::Circle(c2)) => check_circle_circle(c1, c2),
        (Shape::Point(p), Shape::Circle(c)) | (Shape::Circle(c), Shape::Point(p)) => {
            check_point_circle(p, c)
        }
        (Shape::Point(p), Shape::Polygon(poly)) | (Shape::Polygon(poly), Shape::Point(p)) => {
            check_point_polygon(p, poly)
        }
        _ => check_sat(a, b, config)?,
    };
    Ok(colliding)
}

/// Two points collide only when their positions are exactly equal.
pub fn check_point_point(p: &Point, q: &Point) -> bool {
    log::trace!("point-point fast path");
    p.position == q.position
}

/// Circles collide when the distance between centers is at most the sum of radii.
pub fn check_circle_circle(a: &Circle, b: &Circle) -> bool {
    log::trace!("circle-circle fast path");
    let radii_sum = a.radius + b.radius;
    a.position.distance(b.position) <= radii_sum
}

pub fn check_point_circle(point: &Point, circle: &Circle) -> bool {
    log::trace!("point-circle fast path");
    point.position.distance(circle.position) <= circle.radius
}

pub fn check_point_polygon(point: &Point, polygon: &Polygon) -> bool {
    log::trace!("point-polygon fast path");
    polygon.contains_point(point.position)
}

/// Separating axis test for pairs involving at least one polygon.
///
/// Only polygon edge normals are tested. For a circle operand the widened
/// interval can overlap near a polygon corner without a real contact, so a
/// circle must also be confirmed on some axis, either by its center projecting
/// inside the other interval or by a polygon vertex lying within its radius.
fn check_sat(a: &Shape, b: &Shape, config: &SatConfig) -> Result<bool> {
    let axes = candidate_axes(a, b, config.axis_dedup_threshold);
    if axes.is_empty() {
        // Every polygon operand has all its vertices on one spot.
        log::trace!("no usable axis, testing collapsed polygons as points");
        return dispatch(&collapse_to_point(a), &collapse_to_point(b), config);
    }
    let circle_involved = matches!(a, Shape::Circle(_)) || matches!(b, Shape::Circle(_));
    let mut circle_overlap = false;

    for axis in axes {
        let proj_a = project_shape(a, axis)?;
        let proj_b = project_shape(b, axis)?;

        if !proj_a.overlaps(&proj_b) {
            log::trace!("separating axis found: {:?}", axis);
            return Ok(false);
        }

        if circle_involved && !circle_overlap {
            circle_overlap = circle_confirmed(a, &proj_a, b, &proj_b)
                || circle_confirmed(b, &proj_b, a, &proj_a);
        }
    }

    if circle_involved && !circle_overlap {
        log::trace!("no axis confirmed the circle overlap");
    }
    Ok(!circle_involved || circle_overlap)
}

/// Replaces a polygon by a point at its first vertex; other shapes are returned as is.
fn collapse_to_point(shape: &Shape) -> Shape {
    match shape {
        Shape::Polygon(polygon) => Shape::Point(Point {
            position: polygon.vertices[0],
        }),
        other => other.clone(),
    }
}

/// Whether `shape`, if it is a circle, is confirmed to reach `other` on the current axis.
fn circle_confirmed(
    shape: &Shape,
    proj: &Projection,
    other: &Shape,
    other_proj: &Projection,
) -> bool {
    let (Shape::Circle(circle), Some(center)) = (shape, proj.center) else {
        return false;
    };
    if other_proj.contains(center) {
        return true;
    }
    match other {
        Shape::Polygon(polygon) => {
            let hit = polygon
                .vertices
                .iter()
                .any(|v| v.distance(circle.position) <= circle.radius);
            if hit {
                log::trace!("polygon vertex within circle radius");
            }
            hit
        }
        _ => false,
    }
}
