//! Nelder-Mead simplex minimization in one dimension
//!
//! The simplex is a pair of central temperatures. Each iteration replaces the
//! worse vertex by a reflected, expanded or contracted point, or shrinks the
//! pair toward the better vertex. Derivative-free, so it tolerates oracles
//! that are only piecewise smooth, but it only finds the local minimum reached
//! from the starting point.

use crate::error::SweepError;

use super::config::MinimizerConfig;
use super::result::{ConvergenceHistory, EvaluationRecord, OptimizationResult, TerminationReason};

/// Standard Nelder-Mead coefficients
const REFLECTION_COEF: f64 = 1.0;
const EXPANSION_COEF: f64 = 2.0;
const CONTRACTION_COEF: f64 = 0.5;
const SHRINK_COEF: f64 = 0.5;

/// Relative offset of the second initial vertex
const INITIAL_RELATIVE_STEP: f64 = 0.05;
/// Absolute offset of the second initial vertex when the guess is zero
const INITIAL_ZERO_STEP: f64 = 0.00025;

#[derive(Debug, Clone, Copy)]
struct Vertex {
    x: f64,
    f: f64,
}

/// Orders the simplex best-first. Stable, so the older vertex wins ties.
fn sort_simplex(simplex: &mut [Vertex; 2]) {
    if simplex[1].f < simplex[0].f {
        simplex.swap(0, 1);
    }
}

fn within_tolerance(simplex: &[Vertex; 2], tolerance: f64) -> bool {
    (simplex[1].x - simplex[0].x).abs() <= tolerance
        && (simplex[1].f - simplex[0].f).abs() <= tolerance
}

/// Second vertex of the initial simplex
fn initial_step(initial_guess: f64) -> f64 {
    if initial_guess == 0.0 {
        INITIAL_ZERO_STEP
    } else {
        initial_guess * (1.0 + INITIAL_RELATIVE_STEP)
    }
}

/// Minimize `objective` starting from `initial_guess`.
///
/// Terminates when both the distance between the two vertices and the
/// difference of their objective values are within `config.tolerance`.
/// Exhausting `config.max_iterations` is not an error: the best vertex is
/// returned with `converged == false`. Any error from `objective` aborts
/// immediately.
pub fn minimize_nelder_mead<F>(
    mut objective: F,
    initial_guess: f64,
    config: &MinimizerConfig,
) -> Result<OptimizationResult, SweepError>
where
    F: FnMut(f64) -> Result<f64, SweepError>,
{
    let mut history = ConvergenceHistory::new();
    let mut eval = |x: f64| -> Result<Vertex, SweepError> {
        let f = objective(x)?;
        history.record(EvaluationRecord {
            central_temperature: x,
            error: f,
        });
        Ok(Vertex { x, f })
    };

    let mut simplex = [eval(initial_guess)?, eval(initial_step(initial_guess))?];
    sort_simplex(&mut simplex);

    let mut iteration = 0;
    let mut converged = within_tolerance(&simplex, config.tolerance);

    while !converged && iteration < config.max_iterations {
        iteration += 1;

        let [best, worst] = simplex;
        // In one dimension the centroid of all but the worst vertex is the best vertex.
        let centroid = best.x;

        let reflected = eval(centroid + REFLECTION_COEF * (centroid - worst.x))?;

        if reflected.f < best.f {
            let expanded = eval(centroid + EXPANSION_COEF * (centroid - worst.x))?;
            simplex[1] = if expanded.f < reflected.f {
                expanded
            } else {
                reflected
            };
        } else if reflected.f < worst.f {
            // Outside contraction
            let contracted =
                eval(centroid + CONTRACTION_COEF * REFLECTION_COEF * (centroid - worst.x))?;
            if contracted.f <= reflected.f {
                simplex[1] = contracted;
            } else {
                simplex[1] = eval(best.x + SHRINK_COEF * (worst.x - best.x))?;
            }
        } else {
            // Inside contraction. Shrinking toward the best vertex would land on
            // the same point, so the contracted vertex is kept either way.
            simplex[1] = eval(centroid + CONTRACTION_COEF * (worst.x - centroid))?;
        }

        sort_simplex(&mut simplex);
        converged = within_tolerance(&simplex, config.tolerance);
    }

    let best = simplex[0];

    Ok(OptimizationResult {
        central_temperature: best.x,
        error: best.f,
        converged,
        termination_reason: if converged {
            TerminationReason::Converged
        } else {
            TerminationReason::MaxIterationsReached
        },
        iterations: iteration,
        history,
    })
}
