use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use stellar_sweep_core::render::{ColorMap, ScaleFloor, TableQuantity};

use crate::config::{AppConfig, OracleKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ShowQuantity {
    #[default]
    Error,
    Temperature,
}

impl From<ShowQuantity> for TableQuantity {
    fn from(show: ShowQuantity) -> Self {
        match show {
            ShowQuantity::Error => TableQuantity::Error,
            ShowQuantity::Temperature => TableQuantity::CentralTemperature,
        }
    }
}

#[derive(Parser, Debug, Default)]
#[command(name = "stellar_sweep")]
#[command(about = "Error tables for stellar models over radius and luminosity perturbations")]
pub struct Args {
    /// Perturbation steps on each side of the baseline (default: 8)
    pub half_width: Option<usize>,

    /// YAML file with `sweep`, `render` and `oracle` sections
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Total mass, held fixed for every cell
    #[arg(long)]
    pub mass: Option<f64>,

    /// Baseline total radius
    #[arg(long)]
    pub radius: Option<f64>,

    /// Baseline total luminosity
    #[arg(long)]
    pub luminosity: Option<f64>,

    /// Initial central temperature guess
    #[arg(long)]
    pub central_temperature: Option<f64>,

    #[arg(long)]
    pub radius_step: Option<f64>,

    #[arg(long)]
    pub luminosity_step: Option<f64>,

    /// Minimizer convergence tolerance
    #[arg(long)]
    pub tolerance: Option<f64>,

    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Built-in oracle (defaults to the one in the config file, else synthetic)
    #[arg(long, value_enum)]
    pub oracle: Option<OracleKind>,

    /// coolwarm, bwr or seismic
    #[arg(long)]
    pub color_map: Option<ColorMap>,

    /// Decimal places in cell annotations
    #[arg(long)]
    pub precision: Option<usize>,

    /// Anchor the color scale at zero instead of the smallest error
    #[arg(long)]
    pub zero_floor: bool,

    #[arg(long)]
    pub font_family: Option<String>,

    /// Quantity shown first
    #[arg(long, value_enum, default_value_t = ShowQuantity::Error)]
    pub show: ShowQuantity,

    /// Write the table as an SVG figure
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Write the full sweep results as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Print the table to stdout instead of opening the viewer
    #[arg(short, long)]
    pub print: bool,

    /// Path to the data directory (default: ~/.stellar_sweep/)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Load the config file if one was given, then apply flag overrides.
    pub fn resolve(&self) -> color_eyre::Result<AppConfig> {
        let base = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        let config = self.apply(base);
        config.validate()?;
        Ok(config)
    }

    /// Overlay every flag that was set onto `config`
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        let sweep = &mut config.sweep;
        if let Some(n) = self.half_width {
            sweep.half_width = n;
        }
        if let Some(v) = self.mass {
            sweep.total_mass = v;
        }
        if let Some(v) = self.radius {
            sweep.total_radius = v;
        }
        if let Some(v) = self.luminosity {
            sweep.total_luminosity = v;
        }
        if let Some(v) = self.central_temperature {
            sweep.central_temperature = v;
        }
        if let Some(v) = self.radius_step {
            sweep.radius_step = v;
        }
        if let Some(v) = self.luminosity_step {
            sweep.luminosity_step = v;
        }
        if let Some(v) = self.tolerance {
            sweep.tolerance = v;
        }
        if let Some(v) = self.max_iterations {
            sweep.max_iterations = v;
        }

        let render = &mut config.render;
        if let Some(map) = self.color_map {
            render.color_map = map;
        }
        if let Some(p) = self.precision {
            render.precision = p;
        }
        if self.zero_floor {
            render.scale_floor = ScaleFloor::Zero;
        }
        if let Some(family) = &self.font_family {
            render.font_family = family.clone();
        }

        if let Some(kind) = self.oracle {
            config.oracle.kind = kind;
        }

        config
    }
}
