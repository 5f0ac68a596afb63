//! Axis configuration, tick formatting, and the grid/axis layer.

use std::sync::Arc;

use crate::geom::ScreenPoint;
use crate::render::{LineSegment, RenderCommand, RenderList};
use crate::style::Theme;
use crate::transform::Transform;

/// Formatter for axis tick labels.
#[derive(Clone, Default)]
pub enum AxisFormatter {
    /// Whole numbers without decimals, other values in shortest form.
    #[default]
    Default,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => {
                if value.fract() == 0.0 {
                    format!("{value:.0}")
                } else {
                    format!("{value}")
                }
            }
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "AxisFormatter::Default"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}

/// Layout of the axis layer, shared by both axes.
#[derive(Debug, Clone)]
pub struct AxisConfig {
    ticks: Vec<f64>,
    tick_half_length: f64,
    x_label_offset: f64,
    y_label_offset: f64,
    y_label_baseline: f64,
    label_size: f32,
    x_title: String,
    y_title: String,
    formatter: AxisFormatter,
}

impl AxisConfig {
    /// Create the default axis layout: integer ticks from -5 to 5, skipping 0.
    pub fn new() -> Self {
        Self {
            ticks: vec![-5.0, -4.0, -3.0, -2.0, -1.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            tick_half_length: 3.0,
            x_label_offset: 15.0,
            y_label_offset: 15.0,
            y_label_baseline: 4.0,
            label_size: 12.0,
            x_title: "X".to_string(),
            y_title: "Y".to_string(),
            formatter: AxisFormatter::default(),
        }
    }

    /// Set the tick positions in graph units.
    pub fn with_ticks(mut self, ticks: impl IntoIterator<Item = f64>) -> Self {
        self.ticks = ticks.into_iter().collect();
        self
    }

    /// Set the tick label formatter.
    pub fn with_formatter(mut self, formatter: AxisFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Set the axis-end titles.
    pub fn with_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_title = x.into();
        self.y_title = y.into();
        self
    }

    /// Set the label font size in pixels.
    pub fn with_label_size(mut self, size: f32) -> Self {
        self.label_size = size;
        self
    }

    /// Tick positions in graph units.
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    /// Label font size in pixels.
    pub fn label_size(&self) -> f32 {
        self.label_size
    }

    /// Access the formatter.
    pub fn formatter(&self) -> &AxisFormatter {
        &self.formatter
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Push the grid/axis layer: axis lines, ticks, tick labels, axis titles.
pub fn build_axes(render: &mut RenderList, transform: &Transform, axis: &AxisConfig, theme: &Theme) {
    let config = transform.config();
    let width = f64::from(config.pixel_width());
    let height = f64::from(config.pixel_height());
    let origin = transform.origin();
    let line = theme.axis_line();
    let label = theme.label_style(axis.label_size);

    render.push(RenderCommand::LineSegments {
        segments: vec![
            LineSegment::new(ScreenPoint::new(0.0, origin.y), ScreenPoint::new(width, origin.y)),
            LineSegment::new(ScreenPoint::new(origin.x, 0.0), ScreenPoint::new(origin.x, height)),
        ],
        style: line,
    });

    let half = axis.tick_half_length;
    for &tick in &axis.ticks {
        let x = transform.to_pixel_x(tick);
        let y = transform.to_pixel_y(tick);
        let text = axis.formatter.format(tick);

        render.push(RenderCommand::LineSegments {
            segments: vec![LineSegment::new(
                ScreenPoint::new(x, origin.y - half),
                ScreenPoint::new(x, origin.y + half),
            )],
            style: line,
        });
        render.push(RenderCommand::Text {
            position: ScreenPoint::new(x, origin.y + axis.x_label_offset),
            text: text.clone(),
            style: label.clone(),
        });

        render.push(RenderCommand::LineSegments {
            segments: vec![LineSegment::new(
                ScreenPoint::new(origin.x - half, y),
                ScreenPoint::new(origin.x + half, y),
            )],
            style: line,
        });
        render.push(RenderCommand::Text {
            position: ScreenPoint::new(origin.x - axis.y_label_offset, y + axis.y_label_baseline),
            text,
            style: label.clone(),
        });
    }

    render.push(RenderCommand::Text {
        position: ScreenPoint::new(width - 10.0, origin.y - 10.0),
        text: axis.x_title.clone(),
        style: label.clone(),
    });
    render.push(RenderCommand::Text {
        position: ScreenPoint::new(origin.x + 10.0, 10.0),
        text: axis.y_title.clone(),
        style: label,
    });
}
