//! Table renderer: maps a completed error matrix to an annotated heatmap.
//!
//! [`HeatmapTable`] resolves colors, annotations and axis labels once; the
//! output modules only lay it out. Options travel in an explicit
//! [`RenderConfig`], so concurrent sweeps never share presentation state.

mod colormap;
mod config;
mod svg;
mod table;
mod text;

pub use colormap::Rgb;
pub use config::{ColorMap, FigureSize, RenderConfig, ScaleFloor};
pub use svg::render_svg;
pub use table::{HeatCell, HeatmapTable, TableQuantity, annotate, axis_labels, normalize};
pub use text::render_text;
