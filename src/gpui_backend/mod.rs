//! GPUI integration for gpui_areaplot.
//!
//! This module provides a GPUI view that draws the diagram onto a
//! fixed-resolution canvas scaled into its layout bounds, forwards left clicks
//! to the bound click handler, and shows validation alerts and a hover
//! readout.

mod config;
mod hover;
mod paint;
mod state;
mod view;

pub use config::DiagramViewConfig;
pub use view::GpuiDiagramView;
