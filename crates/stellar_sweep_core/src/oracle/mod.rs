//! The error oracle: an opaque stellar-structure model scored by its relative error.
//!
//! The sweep never looks inside the model. It only needs a deterministic,
//! side-effect free function from the four boundary parameters to a
//! non-negative error percentage. Anything implementing [`ErrorOracle`] works,
//! including plain closures:
//!
//! ```ignore
//! use stellar_sweep_core::oracle::{OracleError, StarParameters};
//!
//! let oracle = |p: &StarParameters| -> Result<f64, OracleError> {
//!     Ok((p.central_temperature - 2.2).powi(2))
//! };
//! ```

mod adapter;
mod synthetic;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use adapter::CellObjective;
pub use synthetic::{QuadraticOracle, SyntheticStarOracle};

/// One full set of model inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarParameters {
    pub total_mass: f64,
    pub total_radius: f64,
    pub total_luminosity: f64,
    pub central_temperature: f64,
}

impl fmt::Display for StarParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(Mtot={}, Rtot={}, Ltot={}, Tc={})",
            self.total_mass, self.total_radius, self.total_luminosity, self.central_temperature
        )
    }
}

/// Failures raised by an oracle implementation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OracleError {
    /// A parameter lies outside the range the model can integrate.
    #[error("{parameter} = {value} is outside the model domain")]
    OutOfDomain { parameter: &'static str, value: f64 },

    /// The model failed for any other reason.
    #[error("model evaluation failed: {0}")]
    Failed(String),
}

/// A deterministic stellar model scored by relative error (in percent).
///
/// Implementations must be pure: the sweep may call `evaluate` concurrently
/// from several threads and expects identical output for identical input.
pub trait ErrorOracle: Sync {
    fn evaluate(&self, params: &StarParameters) -> Result<f64, OracleError>;
}

impl<F> ErrorOracle for F
where
    F: Fn(&StarParameters) -> Result<f64, OracleError> + Sync,
{
    fn evaluate(&self, params: &StarParameters) -> Result<f64, OracleError> {
        self(params)
    }
}
