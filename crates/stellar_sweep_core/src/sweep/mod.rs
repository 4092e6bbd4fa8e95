//! Error-table sweep over radius and luminosity perturbations.
//!
//! The baseline radius and luminosity are each perturbed by `k` steps,
//! `k = -n..=n`. For every resulting (luminosity, radius) cell the central
//! temperature is re-optimized to minimize the oracle error, and the minimal
//! error is stored in a `(2n+1) × (2n+1)` matrix.
//!
//! ```ignore
//! use stellar_sweep_core::oracle::SyntheticStarOracle;
//! use stellar_sweep_core::sweep::{SweepConfig, SweepProgress, error_table};
//!
//! let config = SweepConfig::with_half_width(8);
//! let progress = SweepProgress::default();
//! let results = error_table(&config, &SyntheticStarOracle::default(), Some(&progress))?;
//! println!("best cell error: {:?}", results.errors().min_value());
//! ```

mod assembler;
mod axis;
mod config;
mod grid;
mod matrix;
mod progress;

pub use assembler::{
    CellDiagnostic, CellOutcome, SweepResults, error_table, minimize_cell,
};
pub use axis::SweepAxis;
pub use config::{MAX_HALF_WIDTH, SweepConfig};
pub use grid::{GridCell, SweepGrid};
pub use matrix::{CellMatrix, ErrorMatrix};
pub use progress::SweepProgress;
