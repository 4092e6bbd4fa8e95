//! Non-interactive outputs: SVG figure, JSON results and plain text.

use std::path::Path;

use color_eyre::eyre::WrapErr;
use stellar_sweep_core::render::{HeatmapTable, RenderConfig, render_svg, render_text};
use stellar_sweep_core::SweepResults;

pub fn save_svg(table: &HeatmapTable, config: &RenderConfig, path: &Path) -> color_eyre::Result<()> {
    let svg = render_svg(table, config)?;
    std::fs::write(path, svg)
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "saved figure");
    Ok(())
}

pub fn save_json(results: &SweepResults, path: &Path) -> color_eyre::Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "saved results");
    Ok(())
}

/// Text table followed by one line per cell that did not converge
pub fn text_report(results: &SweepResults, table: &HeatmapTable) -> String {
    let mut out = render_text(table);
    for diag in results.diagnostics() {
        out.push_str(&format!(
            "not converged after {} iterations: L={}, R={}\n",
            diag.iterations, diag.luminosity, diag.radius
        ));
    }
    out
}
