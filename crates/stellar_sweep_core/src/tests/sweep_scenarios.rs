//! Tests for complete error-table sweeps
//!
//! These tests verify that:
//! - The stub oracle `(Tc - 2.2)^2` yields a uniform, near-zero 3x3 table
//! - A sweep is bit-for-bit deterministic, parallel or not
//! - A single failing cell aborts the whole sweep
//! - The degenerate `n = 0` sweep matches a single cell minimization

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::SweepError;
use crate::optimization::{MinimizerConfig, minimize_nelder_mead};
use crate::oracle::{
    CellObjective, OracleError, QuadraticOracle, StarParameters, SyntheticStarOracle,
};
use crate::sweep::{SweepConfig, error_table, minimize_cell};

fn stub_oracle(p: &StarParameters) -> Result<f64, OracleError> {
    Ok((p.central_temperature - 2.2).powi(2) + 0.0 * (p.total_radius + p.total_luminosity))
}

#[test]
fn test_stub_oracle_gives_uniform_near_zero_table() {
    let config = SweepConfig {
        half_width: 1,
        total_mass: 5.0,
        total_radius: 11.5,
        total_luminosity: 70.0,
        central_temperature: 2.0,
        radius_step: 0.5,
        luminosity_step: 5.0,
        tolerance: 0.01,
        ..Default::default()
    };

    let results = error_table(&config, &stub_oracle, None).unwrap();

    assert_eq!(results.errors().shape(), (3, 3));
    assert!(results.all_converged());
    for (_, _, &tc) in results.temperatures().iter() {
        assert!((tc - 2.2).abs() < 0.01, "Tc* = {tc}");
    }
    let first = results.errors().data()[0];
    for (_, _, &error) in results.errors().iter() {
        assert!(error < 1e-4, "error = {error}");
        assert_eq!(error.to_bits(), first.to_bits());
    }
}

#[test]
fn test_sweeps_are_deterministic() {
    let config = SweepConfig::with_half_width(3);
    let oracle = SyntheticStarOracle::default();

    let a = error_table(&config, &oracle, None).unwrap();
    let b = error_table(&config, &oracle, None).unwrap();

    let bits = |m: &crate::sweep::ErrorMatrix| m.data().iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(a.errors()), bits(b.errors()));
    assert_eq!(bits(a.temperatures()), bits(b.temperatures()));
}

#[test]
fn test_matches_sequential_cell_by_cell_evaluation() {
    let config = SweepConfig::with_half_width(2);
    let oracle = SyntheticStarOracle::default();
    let results = error_table(&config, &oracle, None).unwrap();

    for cell in config.grid().cells() {
        let outcome = minimize_cell(
            &oracle,
            config.total_mass,
            &cell,
            config.central_temperature,
            &config.minimizer(),
        )
        .unwrap();
        let stored = results.errors().get(cell.row, cell.col).unwrap();
        assert_eq!(stored.to_bits(), outcome.error.to_bits());
    }
}

#[test]
fn test_errors_are_non_negative() {
    let results = error_table(
        &SweepConfig::with_half_width(4),
        &SyntheticStarOracle::default(),
        None,
    )
    .unwrap();

    assert!(results.errors().data().iter().all(|&e| e >= 0.0));
}

#[test]
fn test_synthetic_oracle_error_floor_grows_from_center() {
    let results = error_table(
        &SweepConfig::with_half_width(2),
        &SyntheticStarOracle::default(),
        None,
    )
    .unwrap();

    let center = *results.errors().get(2, 2).unwrap();
    let corner = *results.errors().get(0, 0).unwrap();
    assert!(center < 1.0, "center error {center}");
    assert!(corner > center);
}

#[test]
fn test_degenerate_sweep_matches_single_cell() {
    let config = SweepConfig::with_half_width(0);
    let oracle = SyntheticStarOracle::default();
    let results = error_table(&config, &oracle, None).unwrap();

    let objective = CellObjective::new(&oracle, 5.0, 11.5, 70.0);
    let direct = minimize_nelder_mead(
        |tc| objective.error_at(tc),
        2.0,
        &MinimizerConfig {
            tolerance: 0.01,
            max_iterations: 200,
        },
    )
    .unwrap();

    assert_eq!(results.errors().shape(), (1, 1));
    assert_eq!(results.errors().data()[0].to_bits(), direct.error.to_bits());
    assert_eq!(
        results.temperatures().data()[0].to_bits(),
        direct.central_temperature.to_bits()
    );
}

#[test]
fn test_single_failing_cell_aborts_sweep() {
    let oracle = |p: &StarParameters| -> Result<f64, OracleError> {
        if p.total_radius > 11.9 && p.total_luminosity > 74.0 {
            Err(OracleError::Failed("integration diverged".to_string()))
        } else {
            stub_oracle(p)
        }
    };

    let err = error_table(&SweepConfig::with_half_width(1), &oracle, None).unwrap_err();
    match err {
        SweepError::OracleFailure { params, source } => {
            assert_eq!(params.total_radius, 12.0);
            assert_eq!(params.total_luminosity, 75.0);
            assert_eq!(source, OracleError::Failed("integration diverged".to_string()));
        }
        other => panic!("expected oracle failure, got {other:?}"),
    }
}

#[test]
fn test_non_finite_oracle_value_aborts_sweep() {
    let oracle = |p: &StarParameters| -> Result<f64, OracleError> {
        if p.total_radius < 11.2 {
            Ok(f64::INFINITY)
        } else {
            stub_oracle(p)
        }
    };

    let err = error_table(&SweepConfig::with_half_width(1), &oracle, None).unwrap_err();
    assert!(matches!(err, SweepError::NonFiniteError { .. }));
}

#[test]
fn test_oracle_sees_fixed_mass_in_every_call() {
    let calls = AtomicUsize::new(0);
    let oracle = |p: &StarParameters| -> Result<f64, OracleError> {
        assert_eq!(p.total_mass, 3.5);
        calls.fetch_add(1, Ordering::Relaxed);
        Ok((p.central_temperature - 2.2).powi(2))
    };
    let config = SweepConfig {
        total_mass: 3.5,
        ..SweepConfig::with_half_width(1)
    };

    error_table(&config, &oracle, None).unwrap();
    assert!(calls.load(Ordering::Relaxed) >= 2 * 9);
}

#[test]
fn test_quadratic_oracle_default_is_the_stub() {
    let results = error_table(
        &SweepConfig::with_half_width(1),
        &QuadraticOracle::default(),
        None,
    )
    .unwrap();
    let stub = error_table(&SweepConfig::with_half_width(1), &stub_oracle, None).unwrap();

    assert_eq!(results.errors(), stub.errors());
}
