//! Single-variable view of the oracle for one sweep cell.

use crate::error::SweepError;

use super::{ErrorOracle, StarParameters};

/// The oracle with mass, radius and luminosity pinned, leaving the central
/// temperature as the only free variable.
///
/// No caching and no validation of the temperature happen here. Oracle
/// failures and non-finite results are turned into [`SweepError`]s and
/// returned unchanged to the caller.
#[derive(Debug)]
pub struct CellObjective<'a, O: ?Sized> {
    oracle: &'a O,
    total_mass: f64,
    total_radius: f64,
    total_luminosity: f64,
}

impl<'a, O: ErrorOracle + ?Sized> CellObjective<'a, O> {
    pub fn new(oracle: &'a O, total_mass: f64, total_radius: f64, total_luminosity: f64) -> Self {
        Self {
            oracle,
            total_mass,
            total_radius,
            total_luminosity,
        }
    }

    /// Full parameter set for a trial central temperature
    pub fn parameters(&self, central_temperature: f64) -> StarParameters {
        StarParameters {
            total_mass: self.total_mass,
            total_radius: self.total_radius,
            total_luminosity: self.total_luminosity,
            central_temperature,
        }
    }

    /// Evaluate the oracle at `central_temperature`.
    pub fn error_at(&self, central_temperature: f64) -> Result<f64, SweepError> {
        let params = self.parameters(central_temperature);
        let value = self
            .oracle
            .evaluate(&params)
            .map_err(|source| SweepError::OracleFailure { params, source })?;

        if !value.is_finite() {
            return Err(SweepError::NonFiniteError { params, value });
        }
        Ok(value)
    }
}
