//! Colors and stroke widths for every diagram layer.

use crate::render::{Color, LineStyle, ShapeStyle, TextStyle};

/// Visual theme for the diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Background color behind the canvas (backends only).
    pub background: Color,
    /// Fill of the region shapes.
    pub region_fill: Color,
    /// Outline of the region shapes.
    pub region_stroke: Color,
    /// Outline width of the region shapes.
    pub region_stroke_width: f32,
    /// Axis, tick, and label color.
    pub axis: Color,
    /// Axis and tick line width.
    pub axis_width: f32,
    /// Marker fill for points classified as hits.
    pub hit: Color,
    /// Marker fill for points classified as misses.
    pub miss: Color,
    /// Marker outline color.
    pub marker_outline: Color,
    /// Marker outline width.
    pub marker_outline_width: f32,
    /// Marker radius in pixels.
    pub marker_radius: f64,
    /// Alert banner background (backends only).
    pub alert_background: Color,
    /// Alert banner text (backends only).
    pub alert_text: Color,
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill and stroke applied to every region shape.
    pub fn region_style(&self) -> ShapeStyle {
        ShapeStyle {
            fill: self.region_fill,
            stroke: LineStyle {
                color: self.region_stroke,
                width: self.region_stroke_width,
            },
        }
    }

    /// Stroke for axes and ticks.
    pub fn axis_line(&self) -> LineStyle {
        LineStyle {
            color: self.axis,
            width: self.axis_width,
        }
    }

    /// Marker style for a classified point.
    pub fn marker_style(&self, hit: bool) -> ShapeStyle {
        ShapeStyle {
            fill: if hit { self.hit } else { self.miss },
            stroke: LineStyle {
                color: self.marker_outline,
                width: self.marker_outline_width,
            },
        }
    }

    /// Text style for axis labels at the given size.
    pub fn label_style(&self, size: f32) -> TextStyle {
        TextStyle {
            color: self.axis,
            size,
            ..TextStyle::default()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::rgb8(0x1f, 0x29, 0x37),
            region_fill: Color::rgba8(51, 153, 255, 0.5),
            region_stroke: Color::rgb8(0x33, 0x99, 0xff),
            region_stroke_width: 2.0,
            axis: Color::WHITE,
            axis_width: 1.0,
            hit: Color::rgb8(0x4a, 0xde, 0x80),
            miss: Color::rgb8(0xef, 0x44, 0x44),
            marker_outline: Color::WHITE,
            marker_outline_width: 1.0,
            marker_radius: 4.0,
            alert_background: Color::rgba8(0xef, 0x44, 0x44, 0.9),
            alert_text: Color::WHITE,
        }
    }
}
