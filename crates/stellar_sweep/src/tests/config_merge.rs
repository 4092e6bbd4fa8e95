use std::io::Write;

use clap::Parser;
use stellar_sweep_core::render::{ColorMap, ScaleFloor};
use stellar_sweep_core::{ErrorOracle, StarParameters};

use crate::cli::{Args, ShowQuantity};
use crate::config::{AppConfig, OracleKind};

const FILE_CONFIG: &str = "\
sweep:
  half_width: 3
  tolerance: 0.001
  total_mass: 6.0
render:
  color_map: seismic
  font_family: sans-serif
oracle:
  kind: quadratic
  quadratic:
    optimum: 3.0
";

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults_without_file_or_flags() {
    let config = Args::default().resolve().unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.sweep.half_width, 8);
    assert_eq!(config.oracle.kind, OracleKind::Synthetic);
}

#[test]
fn test_partial_yaml_keeps_defaults() {
    let config = AppConfig::from_yaml("sweep:\n  half_width: 2\n").unwrap();
    assert_eq!(config.sweep.half_width, 2);
    assert_eq!(config.sweep.total_radius, 11.5);
    assert_eq!(config.render.title, "Summary table");
    assert_eq!(config.oracle.kind, OracleKind::Synthetic);
}

#[test]
fn test_file_values_are_loaded() {
    let file = write_config(FILE_CONFIG);
    let args = Args {
        config: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let config = args.resolve().unwrap();

    assert_eq!(config.sweep.half_width, 3);
    assert_eq!(config.sweep.tolerance, 0.001);
    assert_eq!(config.sweep.total_mass, 6.0);
    assert_eq!(config.render.color_map, ColorMap::Seismic);
    assert_eq!(config.render.font_family, "sans-serif");
    assert_eq!(config.oracle.kind, OracleKind::Quadratic);
    assert_eq!(config.oracle.quadratic.optimum, 3.0);
    assert_eq!(config.oracle.quadratic.curvature, 1.0);
}

#[test]
fn test_flags_override_file() {
    let file = write_config(FILE_CONFIG);
    let args = Args {
        config: Some(file.path().to_path_buf()),
        half_width: Some(1),
        color_map: Some(ColorMap::Bwr),
        zero_floor: true,
        oracle: Some(OracleKind::Synthetic),
        ..Default::default()
    };
    let config = args.resolve().unwrap();

    assert_eq!(config.sweep.half_width, 1);
    assert_eq!(config.sweep.tolerance, 0.001);
    assert_eq!(config.render.color_map, ColorMap::Bwr);
    assert_eq!(config.render.scale_floor, ScaleFloor::Zero);
    assert_eq!(config.oracle.kind, OracleKind::Synthetic);
    // The file's quadratic parameters survive a switch of kind
    assert_eq!(config.oracle.quadratic.optimum, 3.0);
}

#[test]
fn test_selected_oracle_is_evaluated() {
    let mut config = AppConfig::default();
    config.oracle.kind = OracleKind::Quadratic;
    config.oracle.quadratic.optimum = 3.0;

    let params = StarParameters {
        total_mass: 5.0,
        total_radius: 11.5,
        total_luminosity: 70.0,
        central_temperature: 3.0,
    };
    assert_eq!(config.oracle.evaluate(&params).unwrap(), 0.0);
}

#[test]
fn test_invalid_override_is_rejected() {
    let args = Args {
        tolerance: Some(-1.0),
        ..Default::default()
    };
    assert!(args.resolve().is_err());

    let args = Args {
        radius_step: Some(-0.5),
        ..Default::default()
    };
    assert!(args.resolve().is_err());
}

#[test]
fn test_oversized_half_width_is_rejected() {
    let args = Args::try_parse_from(["stellar_sweep", &usize::MAX.to_string()]).unwrap();
    assert_eq!(args.half_width, Some(usize::MAX));
    assert!(args.resolve().is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let args = Args {
        config: Some(dir.path().join("missing.yaml")),
        ..Default::default()
    };
    assert!(args.resolve().is_err());
}

#[test]
fn test_command_line_parsing() {
    let args = Args::try_parse_from([
        "stellar_sweep",
        "4",
        "--color-map",
        "bwr",
        "--oracle",
        "quadratic",
        "--show",
        "temperature",
        "--print",
    ])
    .unwrap();

    assert_eq!(args.half_width, Some(4));
    assert_eq!(args.color_map, Some(ColorMap::Bwr));
    assert_eq!(args.oracle, Some(OracleKind::Quadratic));
    assert_eq!(args.show, ShowQuantity::Temperature);
    assert!(args.print);
    assert_eq!(args.log_level, "info");
}

#[test]
fn test_unknown_color_map_is_rejected() {
    let result = Args::try_parse_from(["stellar_sweep", "--color-map", "viridis"]);
    assert!(result.is_err());
}
