//! Run configuration: sweep inputs, rendering options and the oracle to use.
//!
//! Loaded from an optional YAML file, then overridden by command-line flags:
//!
//! ```yaml
//! sweep:
//!   half_width: 4
//!   tolerance: 0.001
//! render:
//!   color_map: seismic
//!   font_family: sans-serif
//! oracle:
//!   kind: synthetic
//!   synthetic:
//!     reference_radius: 12.0
//! ```

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use stellar_sweep_core::oracle::{
    ErrorOracle, OracleError, QuadraticOracle, StarParameters, SyntheticStarOracle,
};
use stellar_sweep_core::{RenderConfig, SweepConfig};

/// The built-in oracles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OracleKind {
    #[default]
    Synthetic,
    Quadratic,
}

impl OracleKind {
    pub fn name(&self) -> &'static str {
        match self {
            OracleKind::Synthetic => "synthetic",
            OracleKind::Quadratic => "quadratic",
        }
    }
}

/// Oracle selection plus parameters for every built-in oracle.
///
/// Only the parameters of the selected `kind` are used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    pub kind: OracleKind,
    pub synthetic: SyntheticStarOracle,
    pub quadratic: QuadraticOracle,
}

impl ErrorOracle for OracleConfig {
    fn evaluate(&self, params: &StarParameters) -> Result<f64, OracleError> {
        match self.kind {
            OracleKind::Synthetic => self.synthetic.evaluate(params),
            OracleKind::Quadratic => self.quadratic.evaluate(params),
        }
    }
}

/// Everything needed for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sweep: SweepConfig,
    pub render: RenderConfig,
    pub oracle: OracleConfig,
}

impl AppConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| color_eyre::eyre::eyre!("failed to read {}: {e}", path.display()))?;
        let config = Self::from_yaml(&content)
            .map_err(|e| color_eyre::eyre::eyre!("failed to parse {}: {e}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Validate both halves before any oracle call
    pub fn validate(&self) -> Result<(), stellar_sweep_core::SweepError> {
        self.sweep.validate()?;
        self.render.validate()
    }
}
