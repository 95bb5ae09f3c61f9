use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One evaluated sample. `y2` is only present for comparison families.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y2: Option<f64>,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, y2: None }
    }

    pub fn pair(x: f64, y: f64, y2: f64) -> Self {
        Self { x, y, y2: Some(y2) }
    }
}

/// Inclusive sampling interval `[min, max]` walked in increments of `step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err(ModelError::InvalidDomain("bounds and step must be finite"));
        }
        if self.step <= 0.0 {
            return Err(ModelError::InvalidDomain("step must be positive"));
        }
        if self.min > self.max {
            return Err(ModelError::InvalidDomain("min must not exceed max"));
        }
        Ok(())
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

impl Default for Domain {
    /// The free-range simulator's starting window.
    fn default() -> Self {
        Self {
            min: -10.0,
            max: 10.0,
            step: 0.5,
        }
    }
}
