//! Narrow-phase 2D collision detection for points, circles and convex polygons.
//!
//! Shapes are built through validating constructors and tested pairwise with
//! [`are_colliding`], which uses exact fast paths for point and circle pairs
//! and the separating axis theorem whenever a polygon is involved.
//!
//! ```
//! use sat_collision::{are_colliding, Shape, Vec2};
//!
//! let square = Shape::polygon(vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(1.0, 0.0),
//!     Vec2::new(1.0, 1.0),
//!     Vec2::new(0.0, 1.0),
//! ])?;
//! let ball = Shape::circle(Vec2::new(2.0, 0.0), 2.0)?;
//! assert!(are_colliding(&square, &ball)?);
//! # Ok::<(), sat_collision::CollisionError>(())
//! ```

pub mod collision;
pub mod config;
pub mod error;
pub mod math;
pub mod shapes;

// Re-export key types for easier use
pub use collision::{are_colliding, are_colliding_with};
pub use config::{SatConfig, DEFAULT_AXIS_DEDUP_THRESHOLD};
pub use error::{CollisionError, Result};
pub use math::vec2::Vec2;
pub use shapes::{Circle, Point, Polygon, Shape, ShapeKind};
