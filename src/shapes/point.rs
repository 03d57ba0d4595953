use crate::error::{CollisionError, Result};
use crate::math::vec2::Vec2;

/// A dimensionless point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: Vec2,
}

impl Point {
    /// Creates a point, failing with `InvalidArgument` on a non-finite position.
    pub fn new(position: Vec2) -> Result<Self> {
        if !position.is_finite() {
            return Err(CollisionError::InvalidArgument(format!(
                "point position must be finite, got {position:?}"
            )));
        }
        Ok(Self { position })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.position.is_finite() {
            return Err(CollisionError::InvalidShape(format!(
                "point position is not finite: {:?}",
                self.position
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(Vec2::new(1.0, -2.0)).unwrap();
        assert_eq!(p.position, Vec2::new(1.0, -2.0));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_point_new_rejects_nan() {
        let err = Point::new(Vec2::new(f64::NAN, 0.0)).unwrap_err();
        assert!(matches!(err, CollisionError::InvalidArgument(_)));
    }

    #[test]
    fn test_point_validate_after_mutation() {
        let mut p = Point::new(Vec2::ZERO).unwrap();
        p.position.y = f64::NEG_INFINITY;
        assert!(matches!(p.validate(), Err(CollisionError::InvalidShape(_))));
    }
}
