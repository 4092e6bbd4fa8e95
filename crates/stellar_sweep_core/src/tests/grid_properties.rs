//! Tests for the perturbation grid
//!
//! These tests verify that:
//! - Axes and matrices have `2n + 1` points per dimension
//! - The center of each axis is exactly the baseline value
//! - Axes increase by exactly one step per index

use crate::oracle::QuadraticOracle;
use crate::sweep::{SweepAxis, SweepConfig, error_table};

#[test]
fn test_shape_for_several_half_widths() {
    for n in [0, 1, 2, 5] {
        let config = SweepConfig::with_half_width(n);
        let results = error_table(&config, &QuadraticOracle::default(), None).unwrap();

        assert_eq!(results.radius_axis().values().len(), 2 * n + 1);
        assert_eq!(results.luminosity_axis().values().len(), 2 * n + 1);
        assert_eq!(results.errors().shape(), (2 * n + 1, 2 * n + 1));
        assert_eq!(results.errors().len(), (2 * n + 1) * (2 * n + 1));
    }
}

#[test]
fn test_center_is_baseline() {
    let config = SweepConfig {
        half_width: 4,
        total_radius: 11.37,
        total_luminosity: 68.9,
        radius_step: 0.3,
        luminosity_step: 2.7,
        ..Default::default()
    };

    assert_eq!(config.radius_axis().values()[4], 11.37);
    assert_eq!(config.luminosity_axis().values()[4], 68.9);
    assert_eq!(config.grid().cell(4, 4).unwrap().radius, 11.37);
    assert_eq!(config.grid().cell(4, 4).unwrap().luminosity, 68.9);
}

#[test]
fn test_axes_step_monotonically() {
    let config = SweepConfig::with_half_width(6);

    for (axis, step) in [
        (config.radius_axis(), config.radius_step),
        (config.luminosity_axis(), config.luminosity_step),
    ] {
        let values = axis.values();
        for pair in values.windows(2) {
            assert!(pair[1] > pair[0]);
            assert!((pair[1] - pair[0] - step).abs() < 1e-12);
        }
    }
}

#[test]
fn test_axis_is_reproducible() {
    let a = SweepAxis::new(11.5, 0.1, 10).values();
    let b = SweepAxis::new(11.5, 0.1, 10).values();
    let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&b));
}
