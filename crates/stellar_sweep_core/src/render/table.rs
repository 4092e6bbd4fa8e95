//! Heatmap table model shared by every output format.

use serde::{Deserialize, Serialize};

use crate::error::SweepError;
use crate::sweep::{CellMatrix, SweepAxis, SweepResults};

use super::{RenderConfig, Rgb, ScaleFloor};

/// Which per-cell quantity a table shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableQuantity {
    /// Minimal relative error, annotated as a percentage
    #[default]
    Error,
    /// Minimizing central temperature
    CentralTemperature,
}

impl TableQuantity {
    pub fn label(&self) -> &'static str {
        match self {
            TableQuantity::Error => "error",
            TableQuantity::CentralTemperature => "central temperature",
        }
    }
}

/// One annotated cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatCell {
    pub value: f64,
    pub annotation: String,
    pub color: Rgb,
}

/// Everything a renderer needs: colors, annotations and axis labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapTable {
    pub title: String,
    pub quantity: TableQuantity,
    pub cells: CellMatrix<HeatCell>,
    /// `k·δL`, top to bottom
    pub row_labels: Vec<String>,
    /// `k·δR`, left to right
    pub column_labels: Vec<String>,
    /// Values mapped to the two ends of the color scale
    pub scale_min: f64,
    pub scale_max: f64,
}

/// Axis tick labels `k·δ<symbol>` for `k = -n..=n`
pub fn axis_labels(axis: &SweepAxis, symbol: &str) -> Vec<String> {
    axis.offsets().map(|k| format!("{k}·δ{symbol}")).collect()
}

/// Cell annotation text for `value`
pub fn annotate(value: f64, precision: usize, quantity: TableQuantity) -> String {
    match quantity {
        TableQuantity::Error => format!("{value:.precision$} %"),
        TableQuantity::CentralTemperature => format!("{value:.precision$}"),
    }
}

/// Position of `value` on a linear scale, clamped to `[0, 1]`.
///
/// A collapsed scale (`max <= min`) maps everything to the low end.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range > 0.0 && range.is_finite() {
        ((value - min) / range).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

impl HeatmapTable {
    /// Build a table from a matrix whose rows follow `row_axis` (luminosity)
    /// and columns follow `column_axis` (radius).
    pub fn from_matrix(
        matrix: &CellMatrix<f64>,
        row_axis: &SweepAxis,
        column_axis: &SweepAxis,
        quantity: TableQuantity,
        config: &RenderConfig,
    ) -> Result<Self, SweepError> {
        config.validate()?;
        if matrix.shape() != (row_axis.len(), column_axis.len()) {
            return Err(SweepError::Config(format!(
                "matrix shape {:?} does not match axes ({}, {})",
                matrix.shape(),
                row_axis.len(),
                column_axis.len()
            )));
        }

        let scale_max = matrix.max_value().unwrap_or(0.0);
        let scale_min = match config.scale_floor {
            ScaleFloor::MatrixMin => matrix.min_value().unwrap_or(0.0),
            ScaleFloor::Zero => 0.0,
        };

        let cells = matrix.map(|&value| HeatCell {
            value,
            annotation: annotate(value, config.precision, quantity),
            color: config
                .color_map
                .sample(normalize(value, scale_min, scale_max)),
        });

        Ok(Self {
            title: config.title.clone(),
            quantity,
            cells,
            row_labels: axis_labels(row_axis, "L"),
            column_labels: axis_labels(column_axis, "R"),
            scale_min,
            scale_max,
        })
    }

    /// Table of minimal errors for a finished sweep
    pub fn errors(results: &SweepResults, config: &RenderConfig) -> Result<Self, SweepError> {
        Self::from_matrix(
            results.errors(),
            &results.luminosity_axis(),
            &results.radius_axis(),
            TableQuantity::Error,
            config,
        )
    }

    /// Table of optimal central temperatures for a finished sweep
    pub fn temperatures(results: &SweepResults, config: &RenderConfig) -> Result<Self, SweepError> {
        Self::from_matrix(
            results.temperatures(),
            &results.luminosity_axis(),
            &results.radius_axis(),
            TableQuantity::CentralTemperature,
            config,
        )
    }

    pub fn for_quantity(
        results: &SweepResults,
        quantity: TableQuantity,
        config: &RenderConfig,
    ) -> Result<Self, SweepError> {
        match quantity {
            TableQuantity::Error => Self::errors(results, config),
            TableQuantity::CentralTemperature => Self::temperatures(results, config),
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    /// Widest annotation, in characters
    pub fn annotation_width(&self) -> usize {
        self.cells
            .data()
            .iter()
            .map(|c| c.annotation.chars().count())
            .max()
            .unwrap_or(0)
    }
}
