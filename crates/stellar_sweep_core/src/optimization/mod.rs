//! Scalar minimization of the per-cell error over central temperature
//!
//! # Example
//!
//! ```ignore
//! use stellar_sweep_core::optimization::{MinimizerConfig, minimize_nelder_mead};
//!
//! let config = MinimizerConfig { tolerance: 0.01, ..Default::default() };
//! let result = minimize_nelder_mead(|tc| Ok((tc - 2.2).powi(2)), 2.0, &config)?;
//! println!("Tc* = {:.3}, error = {:.4}", result.central_temperature, result.error);
//! ```

mod config;
mod nelder_mead;
mod result;

pub use config::MinimizerConfig;
pub(crate) use config::{default_max_iterations, default_tolerance};
pub use nelder_mead::minimize_nelder_mead;
pub use result::{ConvergenceHistory, EvaluationRecord, OptimizationResult, TerminationReason};
