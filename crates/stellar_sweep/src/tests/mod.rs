//! Tests for the command-line front end
//!
//! - `config_merge` - YAML loading and flag overrides
//! - `viewer` - heatmap widget rendering and key handling
//! - `outputs` - files written by `--save` / `--json` and the text report
//! - `log_rotation` - log file trimming

mod config_merge;
mod log_rotation;

use stellar_sweep_core::oracle::QuadraticOracle;
use stellar_sweep_core::{SweepConfig, SweepResults, error_table};

/// Small sweep against the closed-form quadratic oracle
pub(crate) fn quadratic_results(half_width: usize) -> SweepResults {
    error_table(
        &SweepConfig::with_half_width(half_width),
        &QuadraticOracle::default(),
        None,
    )
    .unwrap()
}
