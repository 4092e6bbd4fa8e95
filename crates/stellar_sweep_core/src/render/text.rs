//! Plain-text rendering for logs and non-interactive output.

use super::HeatmapTable;

/// Render `table` as an aligned text grid with the title on the first line.
pub fn render_text(table: &HeatmapTable) -> String {
    let label_width = table
        .row_labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let cell_width = table
        .column_labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(table.annotation_width());

    let mut out = String::new();
    out.push_str(&table.title);
    out.push('\n');

    out.push_str(&" ".repeat(label_width));
    for label in &table.column_labels {
        out.push_str(&format!(" {label:>cell_width$}"));
    }
    out.push('\n');

    for (row, label) in table.row_labels.iter().enumerate() {
        out.push_str(&format!("{label:>label_width$}"));
        for cell in table.cells.row(row).unwrap_or_default() {
            out.push_str(&format!(" {:>cell_width$}", cell.annotation));
        }
        out.push('\n');
    }

    out
}
