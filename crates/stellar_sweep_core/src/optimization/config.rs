//! Minimizer settings

use serde::{Deserialize, Serialize};

use crate::error::SweepError;

/// Settings shared by every cell minimization in a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimizerConfig {
    /// Absolute tolerance on both the simplex extent and the objective spread
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Iteration budget before the best vertex is accepted as-is
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

pub(crate) fn default_tolerance() -> f64 {
    0.01
}

pub(crate) fn default_max_iterations() -> usize {
    200
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl MinimizerConfig {
    pub fn validate(&self) -> Result<(), SweepError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(SweepError::Config(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(SweepError::Config(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
