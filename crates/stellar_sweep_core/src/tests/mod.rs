//! Scenario tests for the sweep engine
//!
//! Tests are organized by topic:
//! - `grid_properties` - Axis and matrix shape invariants
//! - `sweep_scenarios` - Full sweeps against stub and synthetic oracles
//! - `rendering` - Heatmap tables built from finished sweeps

mod grid_properties;
mod sweep_scenarios;
