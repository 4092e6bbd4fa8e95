use ratatui::prelude::*;
use stellar_sweep_core::render::{HeatCell, HeatmapTable, TableQuantity};

use super::styles::{HELP_COLOR, LABEL_COLOR, contrast_color, to_color};

/// Colored cell grid with `k·δL` labels on the left and `k·δR` labels below.
///
/// Rows or columns that do not fit in the area are cut off.
pub struct HeatmapView<'a> {
    table: &'a HeatmapTable,
}

impl<'a> HeatmapView<'a> {
    pub fn new(table: &'a HeatmapTable) -> Self {
        Self { table }
    }

    fn label_width(&self) -> u16 {
        self.table
            .row_labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u16
    }

    /// Width of one cell including a space of padding on each side
    pub fn cell_width(&self) -> u16 {
        let widest_label = self
            .table
            .column_labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        (widest_label.max(self.table.annotation_width()) + 2) as u16
    }

    /// Columns and rows needed to draw the whole table
    pub fn required_size(&self) -> (u16, u16) {
        let width = self.label_width() + 1 + self.cell_width() * self.table.cols() as u16;
        let height = self.table.rows() as u16 + 1;
        (width, height)
    }
}

impl Widget for HeatmapView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let label_width = self.label_width();
        let cell_width = self.cell_width();
        let grid_x = area.x + label_width + 1;
        let visible_cols = (area.width.saturating_sub(label_width + 1) / cell_width.max(1)) as usize;
        let visible_rows = (area.height.saturating_sub(1) as usize).min(self.table.rows());

        for row in 0..visible_rows {
            let y = area.y + row as u16;
            let label = &self.table.row_labels[row];
            buf.set_stringn(
                area.x,
                y,
                format!("{label:>w$}", w = label_width as usize),
                label_width as usize,
                Style::default().fg(LABEL_COLOR),
            );

            for (col, cell) in self
                .table
                .cells
                .row(row)
                .unwrap_or_default()
                .iter()
                .enumerate()
                .take(visible_cols)
            {
                let x = grid_x + col as u16 * cell_width;
                let style = Style::default()
                    .bg(to_color(cell.color))
                    .fg(contrast_color(cell.color));
                buf.set_style(Rect::new(x, y, cell_width, 1), style);
                buf.set_stringn(
                    x,
                    y,
                    format!("{:^w$}", cell.annotation, w = cell_width as usize),
                    cell_width as usize,
                    style,
                );
            }
        }

        let label_y = area.y + visible_rows as u16;
        if label_y < area.bottom() {
            for (col, label) in self.table.column_labels.iter().enumerate().take(visible_cols) {
                let x = grid_x + col as u16 * cell_width;
                buf.set_stringn(
                    x,
                    label_y,
                    format!("{label:^w$}", w = cell_width as usize),
                    cell_width as usize,
                    Style::default().fg(LABEL_COLOR),
                );
            }
        }
    }
}

/// One-line legend: the values at both ends of the color scale.
///
/// A swatch is drawn only for an end that some cell actually sits on.
pub fn scale_legend(table: &HeatmapTable) -> Line<'static> {
    let unit = match table.quantity {
        TableQuantity::Error => " %",
        TableQuantity::CentralTemperature => "",
    };
    let low = table.cells.data().iter().find(|c| c.value == table.scale_min);
    let high = table.cells.data().iter().find(|c| c.value == table.scale_max);
    let swatch = |cell: Option<&HeatCell>| match cell {
        Some(c) => Span::styled("  ", Style::default().bg(to_color(c.color))),
        None => Span::raw("  "),
    };

    Line::from(vec![
        Span::styled("scale ", Style::default().fg(HELP_COLOR)),
        swatch(low),
        Span::raw(format!(" {:.3}{unit}  ..  ", table.scale_min)),
        swatch(high),
        Span::raw(format!(" {:.3}{unit}", table.scale_max)),
    ])
}
