//! SVG figure output, drawn with `plotters`.
//!
//! Figure dimensions are inches times `dpi` and fonts are in points, both
//! from [`RenderConfig`]. Row 0 of the table is drawn at the top.

use std::ops::Range;

use plotters::coord::ranged1d::{KeyPointHint, NoDefaultFormatting, Ranged, ValueFormatter};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{HeatmapTable, RenderConfig, Rgb};
use crate::error::SweepError;

/// One axis of the cell grid: cell `i` spans `[i, i + 1)` and its tick sits
/// at the centre.
#[derive(Debug, Clone, Copy)]
struct CellAxis {
    cells: usize,
}

impl CellAxis {
    fn new(cells: usize) -> Self {
        Self {
            cells: cells.max(1),
        }
    }

    fn index_of(&self, value: f64) -> Option<usize> {
        let index = value.floor();
        (index >= 0.0 && (index as usize) < self.cells).then_some(index as usize)
    }
}

impl Ranged for CellAxis {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        let span = (limit.1 - limit.0) as f64;
        limit.0 + (span * value / self.cells as f64).round() as i32
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            return Vec::new();
        }
        (0..self.cells).map(|i| i as f64 + 0.5).collect()
    }

    fn range(&self) -> Range<f64> {
        0.0..self.cells as f64
    }
}

impl ValueFormatter<f64> for CellAxis {
    fn format(value: &f64) -> String {
        format!("{value:.1}")
    }
}

impl From<Rgb> for RGBColor {
    fn from(color: Rgb) -> Self {
        RGBColor(color.0, color.1, color.2)
    }
}

fn render_error(e: impl std::fmt::Display) -> SweepError {
    SweepError::Render(e.to_string())
}

/// Render `table` as a standalone SVG document.
pub fn render_svg(table: &HeatmapTable, config: &RenderConfig) -> Result<String, SweepError> {
    let (width, height) = config.pixel_size();
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width.round() as u32, height.round() as u32))
            .into_drawing_area();
        draw_table(&root, table, config)?;
        root.present().map_err(render_error)?;
    }
    Ok(svg)
}

fn draw_table<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    table: &HeatmapTable,
    config: &RenderConfig,
) -> Result<(), SweepError> {
    let family = config.font_family.as_str();
    let title_px = config.points_to_pixels(config.title_font_size);
    let tick_px = config.points_to_pixels(config.tick_font_size);
    let annotation_px = config.points_to_pixels(config.annotation_font_size);

    let widest_row_label = table
        .row_labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0) as f64;

    root.fill(&WHITE).map_err(render_error)?;

    let x_axis = CellAxis::new(table.cols());
    let y_axis = CellAxis::new(table.rows());
    let rows = table.rows();

    let mut chart = ChartBuilder::on(root)
        .caption(&table.title, (family, title_px))
        .margin(20)
        .x_label_area_size(tick_px * 2.5)
        .y_label_area_size(widest_row_label * tick_px * 0.6 + 20.0)
        .build_cartesian_2d(x_axis, y_axis)
        .map_err(render_error)?;

    // The y axis grows upwards, so row r sits at rows - 1 - r.
    let column_label = |v: &f64| {
        x_axis
            .index_of(*v)
            .and_then(|c| table.column_labels.get(c).cloned())
            .unwrap_or_default()
    };
    let row_label = |v: &f64| {
        y_axis
            .index_of(*v)
            .and_then(|y| table.row_labels.get(rows - 1 - y).cloned())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(table.cols())
        .y_labels(rows)
        .x_label_formatter(&column_label)
        .y_label_formatter(&row_label)
        .label_style((family, tick_px))
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(table.cells.iter().map(|(row, col, cell)| {
            let (x, y) = (col as f64, (rows - 1 - row) as f64);
            Rectangle::new(
                [(x, y), (x + 1.0, y + 1.0)],
                RGBColor::from(cell.color).filled(),
            )
        }))
        .map_err(render_error)?;

    let annotation_style = (family, annotation_px)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series(table.cells.iter().map(|(row, col, cell)| {
            let (x, y) = (col as f64 + 0.5, (rows - 1 - row) as f64 + 0.5);
            Text::new(cell.annotation.clone(), (x, y), annotation_style.clone())
        }))
        .map_err(render_error)?;

    Ok(())
}
