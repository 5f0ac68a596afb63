//! Rendering primitives and path helpers.
//!
//! These types are backend-agnostic. A frame is described as a [`RenderList`]
//! in canvas pixels; render backends (such as the GPUI backend) execute it.

use std::f64::consts::{PI, TAU};

use crate::geom::{ScreenPoint, ScreenRect};

/// Angular step used when sampling arcs into polygons.
const ARC_STEP_RADIANS: f64 = PI / 64.0;

/// RGBA color.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 1.0)
    }

    /// Create a color from 8-bit channels and a fractional alpha.
    pub const fn rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

/// Line stroke styling.
///
/// The width is expressed in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Fill and stroke styling for closed shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    /// Fill color.
    pub fill: Color,
    /// Outline stroke.
    pub stroke: LineStyle,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: Color::TRANSPARENT,
            stroke: LineStyle::default(),
        }
    }
}

/// Horizontal text anchoring relative to the text position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Position marks the left edge.
    Left,
    /// Position marks the horizontal center.
    #[default]
    Center,
    /// Position marks the right edge.
    Right,
}

/// Text styling.
///
/// The text position is the baseline anchor, as on an HTML canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
    /// Horizontal anchoring.
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
            align: TextAlign::Center,
        }
    }
}

/// A line segment in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start.
    pub start: ScreenPoint,
    /// Segment end.
    pub end: ScreenPoint,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }
}

/// A single path-building operation, mirroring the HTML canvas path API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    /// Begin a new subpath at the point.
    MoveTo(ScreenPoint),
    /// Straight line from the current point.
    LineTo(ScreenPoint),
    /// A closed axis-aligned rectangle subpath.
    Rect(ScreenRect),
    /// Circular arc in pixel space.
    ///
    /// Angles are measured from the +X pixel axis toward +Y pixel (downward),
    /// so positive angles turn clockwise on screen. With `anticlockwise` set
    /// the sweep runs from `start_angle` toward decreasing angles.
    Arc {
        /// Arc center.
        center: ScreenPoint,
        /// Radius in pixels.
        radius: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// End angle in radians.
        end_angle: f64,
        /// Sweep direction.
        anticlockwise: bool,
    },
    /// Close the current subpath back to its first point.
    Close,
}

/// Render command list.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Clear a rectangle to transparent.
    Clear(ScreenRect),
    /// Fill then stroke a path.
    Path {
        /// Path operations.
        ops: Vec<PathOp>,
        /// Fill and stroke styling.
        style: ShapeStyle,
    },
    /// Stroke line segments.
    LineSegments {
        /// Segments to draw.
        segments: Vec<LineSegment>,
        /// Styling for the segments.
        style: LineStyle,
    },
    /// Fill then stroke a circle.
    Circle {
        /// Circle center.
        center: ScreenPoint,
        /// Radius in pixels.
        radius: f64,
        /// Fill and stroke styling.
        style: ShapeStyle,
    },
    /// Draw text.
    Text {
        /// Baseline anchor position.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of commands in the list.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the list holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Convert path operations into polygons (one per subpath).
///
/// Arcs are sampled at a fixed angular step; a `MoveTo` or `Rect` starts a new
/// polygon. Polygons are implicitly closed.
pub fn flatten_path(ops: &[PathOp]) -> Vec<Vec<ScreenPoint>> {
    let mut polygons = Vec::new();
    let mut current: Vec<ScreenPoint> = Vec::new();

    for op in ops {
        match *op {
            PathOp::MoveTo(point) => {
                flush(&mut polygons, &mut current);
                current.push(point);
            }
            PathOp::LineTo(point) => current.push(point),
            PathOp::Rect(rect) => {
                flush(&mut polygons, &mut current);
                polygons.push(vec![
                    rect.min,
                    ScreenPoint::new(rect.max.x, rect.min.y),
                    rect.max,
                    ScreenPoint::new(rect.min.x, rect.max.y),
                ]);
            }
            PathOp::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                anticlockwise,
            } => {
                sample_arc(
                    &mut current,
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    anticlockwise,
                );
            }
            PathOp::Close => flush(&mut polygons, &mut current),
        }
    }
    flush(&mut polygons, &mut current);
    polygons
}

fn flush(polygons: &mut Vec<Vec<ScreenPoint>>, current: &mut Vec<ScreenPoint>) {
    if current.len() >= 2 {
        polygons.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// Signed sweep of a canvas arc, following the HTML canvas rules.
pub fn arc_sweep(start_angle: f64, end_angle: f64, anticlockwise: bool) -> f64 {
    let raw = end_angle - start_angle;
    if anticlockwise {
        if raw <= -TAU {
            -TAU
        } else {
            -(-raw).rem_euclid(TAU)
        }
    } else if raw >= TAU {
        TAU
    } else {
        raw.rem_euclid(TAU)
    }
}

fn sample_arc(
    out: &mut Vec<ScreenPoint>,
    center: ScreenPoint,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    anticlockwise: bool,
) {
    let sweep = arc_sweep(start_angle, end_angle, anticlockwise);
    let steps = (sweep.abs() / ARC_STEP_RADIANS).ceil().max(1.0) as usize;
    for step in 0..=steps {
        let angle = start_angle + sweep * step as f64 / steps as f64;
        out.push(ScreenPoint::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
}
