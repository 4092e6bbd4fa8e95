//! Error-table sweeps for stellar-structure models
//!
//! This crate explores how the relative error of a stellar model responds to
//! perturbations of its total radius and total luminosity, re-optimizing the
//! central temperature in every cell:
//! - Perturbation axes and the row-major (luminosity × radius) grid
//! - A one-dimensional Nelder-Mead minimizer over central temperature
//! - Sequential or rayon-parallel assembly of the error matrix
//! - Heatmap tables with diverging color maps, exported as SVG or text
//!
//! The stellar model itself is an external [`oracle::ErrorOracle`].
//!
//! ```ignore
//! use stellar_sweep_core::oracle::SyntheticStarOracle;
//! use stellar_sweep_core::render::{HeatmapTable, RenderConfig, render_svg};
//! use stellar_sweep_core::sweep::{SweepConfig, error_table};
//!
//! let results = error_table(&SweepConfig::with_half_width(8), &SyntheticStarOracle::default(), None)?;
//! let render = RenderConfig::default();
//! let svg = render_svg(&HeatmapTable::errors(&results, &render)?, &render)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod optimization;
pub mod oracle;
pub mod render;
pub mod sweep;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::SweepError;
pub use oracle::{ErrorOracle, OracleError, StarParameters};
pub use render::{HeatmapTable, RenderConfig};
pub use sweep::{ErrorMatrix, SweepConfig, SweepResults, error_table};
