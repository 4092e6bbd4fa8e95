//! Terminal widgets for the interactive table viewer

pub mod heatmap;
pub mod status_bar;
pub mod styles;

pub use heatmap::HeatmapView;
pub use status_bar::StatusBar;
