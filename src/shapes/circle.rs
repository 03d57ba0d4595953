use crate::error::{CollisionError, Result};
use crate::math::vec2::Vec2;

/// A solid disc of `radius` around `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub position: Vec2,
    pub radius: f64,
}

impl Circle {
    /// Creates a circle.
    ///
    /// Fails with `InvalidArgument` if the center is not finite or the radius
    /// is not a finite positive number.
    pub fn new(position: Vec2, radius: f64) -> Result<Self> {
        if !position.is_finite() {
            return Err(CollisionError::InvalidArgument(format!(
                "circle center must be finite, got {position:?}"
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(CollisionError::InvalidArgument(format!(
                "circle radius must be positive, got {radius}"
            )));
        }
        Ok(Self { position, radius })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.position.is_finite() {
            return Err(CollisionError::InvalidShape(format!(
                "circle center is not finite: {:?}",
                self.position
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(CollisionError::InvalidShape(format!(
                "circle radius is not positive: {}",
                self.radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_new() {
        let c = Circle::new(Vec2::new(1.0, 1.0), 5.0).unwrap();
        assert_eq!(c.radius, 5.0);
        assert_eq!(c.position, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_circle_new_rejects_bad_radius() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Circle::new(Vec2::ZERO, radius).unwrap_err();
            assert!(matches!(err, CollisionError::InvalidArgument(_)), "radius {radius}");
        }
    }

    #[test]
    fn test_circle_new_rejects_bad_center() {
        let err = Circle::new(Vec2::new(0.0, f64::NAN), 1.0).unwrap_err();
        assert!(matches!(err, CollisionError::InvalidArgument(_)));
    }

    #[test]
    fn test_circle_validate_after_mutation() {
        let mut c = Circle::new(Vec2::ZERO, 1.0).unwrap();
        c.radius = -2.0;
        assert!(matches!(c.validate(), Err(CollisionError::InvalidShape(_))));
    }
}
