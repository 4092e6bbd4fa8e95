//! Configuration types for an error-table sweep.

use serde::{Deserialize, Serialize};

use crate::error::SweepError;
use crate::optimization::{MinimizerConfig, default_max_iterations, default_tolerance};

use super::{SweepAxis, SweepGrid};

/// Largest accepted half-width: a 1001 x 1001 grid, about a million cells.
pub const MAX_HALF_WIDTH: usize = 500;

/// Fixed inputs of one sweep run. Immutable once the sweep starts.
///
/// Defaults reproduce the baseline 5 solar-mass model: `Rtot = 11.5`,
/// `Ltot = 70.0`, initial `Tc = 2.0`, steps `dR = 0.5` and `dL = 5.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Perturbation steps on each side of the baseline (`n`)
    pub half_width: usize,
    pub total_mass: f64,
    pub total_radius: f64,
    pub total_luminosity: f64,
    /// Initial guess handed to every cell minimization
    pub central_temperature: f64,
    pub radius_step: f64,
    pub luminosity_step: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            half_width: 8,
            total_mass: 5.0,
            total_radius: 11.5,
            total_luminosity: 70.0,
            central_temperature: 2.0,
            radius_step: 0.5,
            luminosity_step: 5.0,
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl SweepConfig {
    /// Default configuration with the given half-width
    pub fn with_half_width(half_width: usize) -> Self {
        Self {
            half_width,
            ..Default::default()
        }
    }

    pub fn radius_axis(&self) -> SweepAxis {
        SweepAxis::new(self.total_radius, self.radius_step, self.half_width)
    }

    pub fn luminosity_axis(&self) -> SweepAxis {
        SweepAxis::new(self.total_luminosity, self.luminosity_step, self.half_width)
    }

    pub fn grid(&self) -> SweepGrid {
        SweepGrid::new(self.luminosity_axis(), self.radius_axis())
    }

    pub fn minimizer(&self) -> MinimizerConfig {
        MinimizerConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }

    /// Reject values the sweep cannot work with.
    ///
    /// Zero steps and a zero half-width are accepted; they give degenerate
    /// but valid tables. Half-widths above [`MAX_HALF_WIDTH`] are rejected.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.half_width > MAX_HALF_WIDTH {
            return Err(SweepError::Config(format!(
                "half_width must be at most {MAX_HALF_WIDTH}, got {}",
                self.half_width
            )));
        }

        let finite = [
            ("total_mass", self.total_mass),
            ("total_radius", self.total_radius),
            ("total_luminosity", self.total_luminosity),
            ("central_temperature", self.central_temperature),
            ("radius_step", self.radius_step),
            ("luminosity_step", self.luminosity_step),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SweepError::Config(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        for (name, step) in [
            ("radius_step", self.radius_step),
            ("luminosity_step", self.luminosity_step),
        ] {
            if step < 0.0 {
                return Err(SweepError::Config(format!(
                    "{name} must not be negative, got {step}"
                )));
            }
        }

        self.minimizer().validate()
    }
}
