use crate::error::ValidationError;

pub const DEFAULT_Z_THRESHOLD: f64 = 3.0;

/// Added to the standard deviation before dividing, for near-zero spreads
/// that slip past the exact `std == 0` check.
pub const OUTLIER_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub z_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            z_threshold: DEFAULT_Z_THRESHOLD,
        }
    }
}

impl ScoringConfig {
    pub fn with_z_threshold(z_threshold: f64) -> Result<Self, ValidationError> {
        let config = Self { z_threshold };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.z_threshold.is_finite() || self.z_threshold <= 0.0 {
            return Err(ValidationError::InvalidThreshold {
                value: self.z_threshold,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
