//! Closed-form oracles for exercising the sweep without a stellar model.

use serde::{Deserialize, Serialize};

use super::{ErrorOracle, OracleError, StarParameters};

/// `curvature * (Tc - optimum)^2`, independent of mass, radius and luminosity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadraticOracle {
    pub optimum: f64,
    pub curvature: f64,
}

impl Default for QuadraticOracle {
    fn default() -> Self {
        Self {
            optimum: 2.2,
            curvature: 1.0,
        }
    }
}

impl ErrorOracle for QuadraticOracle {
    fn evaluate(&self, params: &StarParameters) -> Result<f64, OracleError> {
        Ok(self.curvature * (params.central_temperature - self.optimum).powi(2))
    }
}

/// Smooth surrogate of a stellar-structure error surface.
///
/// The best central temperature follows the virial scaling `Tc ∝ M / R`, with
/// a weak luminosity dependence. Away from the reference radius and
/// luminosity the error cannot drop to zero: the residual floor grows with the
/// squared relative offsets. The returned value is a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticStarOracle {
    pub reference_radius: f64,
    pub reference_luminosity: f64,
    /// `Tc* = virial_coefficient * M / R * (L / L_ref)^luminosity_exponent`
    pub virial_coefficient: f64,
    pub luminosity_exponent: f64,
    pub radius_weight: f64,
    pub luminosity_weight: f64,
}

impl Default for SyntheticStarOracle {
    fn default() -> Self {
        Self {
            reference_radius: 11.5,
            reference_luminosity: 70.0,
            virial_coefficient: 4.37,
            luminosity_exponent: 0.1,
            radius_weight: 1.0,
            luminosity_weight: 0.25,
        }
    }
}

impl SyntheticStarOracle {
    /// Central temperature at which the error is smallest for a given star
    pub fn optimal_temperature(&self, mass: f64, radius: f64, luminosity: f64) -> f64 {
        self.virial_coefficient * mass / radius
            * (luminosity / self.reference_luminosity).powf(self.luminosity_exponent)
    }

    fn check_domain(parameter: &'static str, value: f64) -> Result<(), OracleError> {
        if value > 0.0 && value.is_finite() {
            Ok(())
        } else {
            Err(OracleError::OutOfDomain { parameter, value })
        }
    }
}

impl ErrorOracle for SyntheticStarOracle {
    fn evaluate(&self, params: &StarParameters) -> Result<f64, OracleError> {
        Self::check_domain("Mtot", params.total_mass)?;
        Self::check_domain("Rtot", params.total_radius)?;
        Self::check_domain("Ltot", params.total_luminosity)?;
        Self::check_domain("Tc", params.central_temperature)?;

        let optimum = self.optimal_temperature(
            params.total_mass,
            params.total_radius,
            params.total_luminosity,
        );
        let radius_offset = (params.total_radius - self.reference_radius) / self.reference_radius;
        let luminosity_offset =
            (params.total_luminosity - self.reference_luminosity) / self.reference_luminosity;
        let temperature_offset = (params.central_temperature - optimum) / optimum;

        let squared = self.radius_weight * radius_offset.powi(2)
            + self.luminosity_weight * luminosity_offset.powi(2)
            + temperature_offset.powi(2);

        Ok(100.0 * squared.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(radius: f64, luminosity: f64, tc: f64) -> StarParameters {
        StarParameters {
            total_mass: 5.0,
            total_radius: radius,
            total_luminosity: luminosity,
            central_temperature: tc,
        }
    }

    #[test]
    fn test_quadratic_ignores_radius_and_luminosity() {
        let oracle = QuadraticOracle::default();
        let a = oracle.evaluate(&params(11.0, 65.0, 2.0)).unwrap();
        let b = oracle.evaluate(&params(12.0, 75.0, 2.0)).unwrap();
        assert_eq!(a, b);
        assert!((a - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_synthetic_is_zero_at_reference_optimum() {
        let oracle = SyntheticStarOracle::default();
        let tc = oracle.optimal_temperature(5.0, 11.5, 70.0);
        let error = oracle.evaluate(&params(11.5, 70.0, tc)).unwrap();
        assert!(error.abs() < 1e-9);
    }

    #[test]
    fn test_synthetic_floor_grows_off_reference() {
        let oracle = SyntheticStarOracle::default();
        let near = oracle.optimal_temperature(5.0, 12.0, 70.0);
        let far = oracle.optimal_temperature(5.0, 13.0, 70.0);
        let near_error = oracle.evaluate(&params(12.0, 70.0, near)).unwrap();
        let far_error = oracle.evaluate(&params(13.0, 70.0, far)).unwrap();
        assert!(near_error > 0.0);
        assert!(far_error > near_error);
    }

    #[test]
    fn test_synthetic_rejects_non_positive_temperature() {
        let oracle = SyntheticStarOracle::default();
        let err = oracle.evaluate(&params(11.5, 70.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            OracleError::OutOfDomain {
                parameter: "Tc",
                value: 0.0
            }
        );
    }
}
