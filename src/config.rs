//! Tunable parameters of the separating axis test.

use crate::error::{CollisionError, Result};

/// Default `|dot|` above which two axes are treated as the same direction
/// (an angular difference under about 2.56 degrees).
pub const DEFAULT_AXIS_DEDUP_THRESHOLD: f64 = 0.999;

/// Configuration of the separating axis test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatConfig {
    /// Two candidate axes `a`, `b` collapse into one when `|a · b| >= axis_dedup_threshold`.
    /// Must lie in `(0, 1]`.
    pub axis_dedup_threshold: f64,
}

impl SatConfig {
    /// Creates a configuration with the given de-duplication threshold.
    pub fn new(axis_dedup_threshold: f64) -> Result<Self> {
        let config = SatConfig {
            axis_dedup_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Fails with `InvalidArgument` unless the threshold is finite and in `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let t = self.axis_dedup_threshold;
        if !t.is_finite() || t <= 0.0 || t > 1.0 {
            return Err(CollisionError::InvalidArgument(format!(
                "axis de-duplication threshold must lie in (0, 1], got {t}"
            )));
        }
        Ok(())
    }
}

impl Default for SatConfig {
    fn default() -> Self {
        SatConfig {
            axis_dedup_threshold: DEFAULT_AXIS_DEDUP_THRESHOLD,
        }
    }
}
