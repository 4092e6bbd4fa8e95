//! Optimization result types
//!
//! Contains types for tracking minimizer progress and final results.

use serde::{Deserialize, Serialize};

/// A single objective evaluation during minimization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub central_temperature: f64,
    pub error: f64,
}

/// History of evaluations during minimization
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvergenceHistory {
    /// All evaluations in call order
    pub evaluations: Vec<EvaluationRecord>,

    /// Best error seen after each evaluation (monotonically non-increasing)
    pub best_values: Vec<f64>,
}

impl ConvergenceHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: EvaluationRecord) {
        let current_best = self.best_values.last().copied().unwrap_or(f64::INFINITY);
        self.best_values.push(current_best.min(record.error));
        self.evaluations.push(record);
    }

    #[must_use]
    pub fn num_evaluations(&self) -> usize {
        self.evaluations.len()
    }

    /// Lowest-error evaluation; the earliest one wins ties.
    #[must_use]
    pub fn best_evaluation(&self) -> Option<&EvaluationRecord> {
        self.evaluations.iter().reduce(|best, e| {
            if e.error < best.error { e } else { best }
        })
    }
}

/// Reason why minimization terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// Simplex extent and objective spread both fell within tolerance
    Converged,

    /// Iteration budget exhausted; the best vertex was accepted
    MaxIterationsReached,
}

/// Final result of one scalar minimization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Minimizing central temperature
    pub central_temperature: f64,

    /// Error at `central_temperature`
    pub error: f64,

    pub converged: bool,
    pub termination_reason: TerminationReason,

    /// Number of simplex iterations performed
    pub iterations: usize,

    pub history: ConvergenceHistory,
}

impl OptimizationResult {
    /// Number of oracle calls made
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.history.num_evaluations()
    }
}
