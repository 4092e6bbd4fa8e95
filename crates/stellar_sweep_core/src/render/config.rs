//! Rendering options, passed explicitly to every renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SweepError;

/// Diverging color maps available for the heatmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMap {
    /// Blue through light grey to red
    #[default]
    Coolwarm,
    /// Blue through white to red
    Bwr,
    /// Dark blue through white to dark red
    Seismic,
}

impl ColorMap {
    pub const ALL: [ColorMap; 3] = [ColorMap::Coolwarm, ColorMap::Bwr, ColorMap::Seismic];

    pub fn name(&self) -> &'static str {
        match self {
            ColorMap::Coolwarm => "coolwarm",
            ColorMap::Bwr => "bwr",
            ColorMap::Seismic => "seismic",
        }
    }
}

impl fmt::Display for ColorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMap {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorMap::ALL
            .into_iter()
            .find(|map| map.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SweepError::Config(format!("unknown color map '{s}'")))
    }
}

/// Lower end of the color scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleFloor {
    /// Smallest value in the matrix
    #[default]
    MatrixMin,
    /// Zero
    Zero,
}

/// Figure dimensions in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 7.0,
        }
    }
}

/// Presentation settings for the error table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub color_map: ColorMap,
    pub scale_floor: ScaleFloor,
    /// Decimal places of each cell annotation
    pub precision: usize,
    pub font_family: String,
    pub figure_size: FigureSize,
    /// Pixels per inch for raster-sized outputs (SVG)
    pub dpi: f64,
    pub title: String,
    /// Font sizes in points
    pub title_font_size: f64,
    pub tick_font_size: f64,
    pub annotation_font_size: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color_map: ColorMap::default(),
            scale_floor: ScaleFloor::default(),
            precision: 2,
            font_family: "serif".to_string(),
            figure_size: FigureSize::default(),
            dpi: 100.0,
            title: "Summary table".to_string(),
            title_font_size: 20.0,
            tick_font_size: 16.0,
            annotation_font_size: 5.0,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), SweepError> {
        let sizes = [
            ("figure_size.width", self.figure_size.width),
            ("figure_size.height", self.figure_size.height),
            ("dpi", self.dpi),
            ("title_font_size", self.title_font_size),
            ("tick_font_size", self.tick_font_size),
            ("annotation_font_size", self.annotation_font_size),
        ];
        for (name, value) in sizes {
            if !(value.is_finite() && value > 0.0) {
                return Err(SweepError::Config(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.font_family.trim().is_empty() {
            return Err(SweepError::Config("font_family must not be empty".to_string()));
        }
        Ok(())
    }

    /// Figure width and height in pixels
    pub fn pixel_size(&self) -> (f64, f64) {
        (
            self.figure_size.width * self.dpi,
            self.figure_size.height * self.dpi,
        )
    }

    /// Convert a font size in points to pixels at the configured dpi
    pub fn points_to_pixels(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }
}
