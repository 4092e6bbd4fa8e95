//! Sweep evaluator: one central-temperature minimization per grid cell.
//!
//! Cells are independent, so with the `parallel` feature they are minimized
//! on the rayon pool. Each result lands in its own slot of the output
//! matrices, which keeps the outcome identical to the sequential order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::SweepError;
use crate::optimization::{MinimizerConfig, minimize_nelder_mead};
use crate::oracle::{CellObjective, ErrorOracle};

use super::{CellMatrix, ErrorMatrix, GridCell, SweepAxis, SweepConfig, SweepProgress};

/// Outcome of the minimization in a single cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellOutcome {
    pub error: f64,
    pub central_temperature: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// A cell whose minimization stopped on the iteration budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellDiagnostic {
    pub row: usize,
    pub col: usize,
    pub luminosity: f64,
    pub radius: f64,
    pub iterations: usize,
}

/// Completed sweep. Every matrix has the grid's shape and is fully populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResults {
    config: SweepConfig,
    errors: ErrorMatrix,
    temperatures: CellMatrix<f64>,
    iterations: CellMatrix<usize>,
    diagnostics: Vec<CellDiagnostic>,
}

impl SweepResults {
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Minimal error per cell
    pub fn errors(&self) -> &ErrorMatrix {
        &self.errors
    }

    /// Minimizing central temperature per cell
    pub fn temperatures(&self) -> &CellMatrix<f64> {
        &self.temperatures
    }

    /// Simplex iterations spent per cell
    pub fn iterations(&self) -> &CellMatrix<usize> {
        &self.iterations
    }

    /// Cells that did not meet the tolerance, in row-major order
    pub fn diagnostics(&self) -> &[CellDiagnostic] {
        &self.diagnostics
    }

    pub fn luminosity_axis(&self) -> SweepAxis {
        self.config.luminosity_axis()
    }

    pub fn radius_axis(&self) -> SweepAxis {
        self.config.radius_axis()
    }

    pub fn all_converged(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consume the results, keeping only the error matrix
    pub fn into_errors(self) -> ErrorMatrix {
        self.errors
    }
}

/// Minimize the error over central temperature for one cell.
pub fn minimize_cell<O: ErrorOracle + ?Sized>(
    oracle: &O,
    total_mass: f64,
    cell: &GridCell,
    initial_guess: f64,
    minimizer: &MinimizerConfig,
) -> Result<CellOutcome, SweepError> {
    let objective = CellObjective::new(oracle, total_mass, cell.radius, cell.luminosity);
    let result = minimize_nelder_mead(|tc| objective.error_at(tc), initial_guess, minimizer)?;

    tracing::debug!(
        row = cell.row,
        col = cell.col,
        luminosity = cell.luminosity,
        radius = cell.radius,
        central_temperature = result.central_temperature,
        error = result.error,
        iterations = result.iterations,
        "cell minimized"
    );

    Ok(CellOutcome {
        error: result.error,
        central_temperature: result.central_temperature,
        iterations: result.iterations,
        converged: result.converged,
    })
}

fn evaluate_cell<O: ErrorOracle + ?Sized>(
    config: &SweepConfig,
    oracle: &O,
    minimizer: &MinimizerConfig,
    cell: &GridCell,
    progress: Option<&SweepProgress>,
) -> Result<CellOutcome, SweepError> {
    if progress.is_some_and(SweepProgress::is_cancelled) {
        return Err(SweepError::Cancelled);
    }

    let outcome = minimize_cell(
        oracle,
        config.total_mass,
        cell,
        config.central_temperature,
        minimizer,
    )?;

    if let Some(progress) = progress {
        if progress.is_cancelled() {
            return Err(SweepError::Cancelled);
        }
        progress.increment();
    }
    Ok(outcome)
}

/// Build the error table for `config` against `oracle`.
///
/// Every `(luminosity, radius)` cell is minimized from the shared initial
/// central temperature. The first oracle failure aborts the sweep and no
/// results are returned. Cells that exhaust the iteration budget keep their
/// best point and are listed in [`SweepResults::diagnostics`].
pub fn error_table<O: ErrorOracle + ?Sized>(
    config: &SweepConfig,
    oracle: &O,
    progress: Option<&SweepProgress>,
) -> Result<SweepResults, SweepError> {
    config.validate()?;

    let grid = config.grid();
    let (rows, cols) = grid.shape();
    let cells: Vec<GridCell> = grid.cells().collect();
    let minimizer = config.minimizer();

    if let Some(progress) = progress {
        progress.reset(cells.len());
    }

    tracing::info!(
        rows,
        cols,
        total_mass = config.total_mass,
        tolerance = config.tolerance,
        "starting error table sweep"
    );

    #[cfg(feature = "parallel")]
    let outcomes: Vec<CellOutcome> = cells
        .par_iter()
        .map(|cell| evaluate_cell(config, oracle, &minimizer, cell, progress))
        .collect::<Result<_, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<CellOutcome> = cells
        .iter()
        .map(|cell| evaluate_cell(config, oracle, &minimizer, cell, progress))
        .collect::<Result<_, _>>()?;

    let mut errors = CellMatrix::new(rows, cols, 0.0);
    let mut temperatures = CellMatrix::new(rows, cols, 0.0);
    let mut iterations = CellMatrix::new(rows, cols, 0);
    let mut diagnostics = Vec::new();

    for (cell, outcome) in cells.iter().zip(&outcomes) {
        errors.set(cell.row, cell.col, outcome.error);
        temperatures.set(cell.row, cell.col, outcome.central_temperature);
        iterations.set(cell.row, cell.col, outcome.iterations);

        if !outcome.converged {
            tracing::warn!(
                row = cell.row,
                col = cell.col,
                luminosity = cell.luminosity,
                radius = cell.radius,
                iterations = outcome.iterations,
                "cell did not converge, keeping best point"
            );
            diagnostics.push(CellDiagnostic {
                row: cell.row,
                col: cell.col,
                luminosity: cell.luminosity,
                radius: cell.radius,
                iterations: outcome.iterations,
            });
        }
    }

    tracing::info!(
        cells = outcomes.len(),
        non_converged = diagnostics.len(),
        min_error = ?errors.min_value(),
        max_error = ?errors.max_value(),
        "error table sweep finished"
    );

    Ok(SweepResults {
        config: config.clone(),
        errors,
        temperatures,
        iterations,
        diagnostics,
    })
}
