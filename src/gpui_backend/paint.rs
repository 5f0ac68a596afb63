use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, Point, TextRun, Window, font,
    point, px, quad,
};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{
    Color, LineSegment, LineStyle, RenderCommand, RenderList, ShapeStyle, TextAlign, TextStyle,
    flatten_path,
};

/// A built frame plus where the canvas is displayed.
#[derive(Debug, Clone)]
pub(crate) struct DiagramFrame {
    pub(crate) render: RenderList,
    pub(crate) element: ScreenRect,
    pub(crate) resolution: (u32, u32),
}

/// Maps canvas-internal pixels onto the displayed element.
#[derive(Debug, Clone, Copy)]
struct CanvasMapping {
    origin: ScreenPoint,
    scale_x: f64,
    scale_y: f64,
}

impl CanvasMapping {
    fn new(element: ScreenRect, resolution: (u32, u32)) -> Self {
        Self {
            origin: element.min,
            scale_x: element.width() / f64::from(resolution.0.max(1)),
            scale_y: element.height() / f64::from(resolution.1.max(1)),
        }
    }

    fn point(&self, canvas: ScreenPoint) -> Point<Pixels> {
        point(
            px((self.origin.x + canvas.x * self.scale_x) as f32),
            px((self.origin.y + canvas.y * self.scale_y) as f32),
        )
    }

    fn length(&self, canvas: f64) -> f32 {
        (canvas * self.scale_x.min(self.scale_y)) as f32
    }
}

pub(crate) fn paint_frame(frame: &DiagramFrame, window: &mut Window, cx: &mut App) {
    let mapping = CanvasMapping::new(frame.element, frame.resolution);
    for command in frame.render.commands() {
        match command {
            // GPUI repaints the whole window every frame.
            RenderCommand::Clear(_) => {}
            RenderCommand::Path { ops, style } => {
                for polygon in flatten_path(ops) {
                    paint_polygon(window, &mapping, &polygon, *style);
                }
            }
            RenderCommand::LineSegments { segments, style } => {
                paint_lines(window, &mapping, segments, *style);
            }
            RenderCommand::Circle {
                center,
                radius,
                style,
            } => {
                paint_circle(window, &mapping, *center, *radius, *style);
            }
            RenderCommand::Text {
                position,
                text,
                style,
            } => {
                paint_text(window, cx, &mapping, *position, text, style);
            }
        }
    }
}

fn paint_polygon(
    window: &mut Window,
    mapping: &CanvasMapping,
    polygon: &[ScreenPoint],
    style: ShapeStyle,
) {
    let Some((first, rest)) = polygon.split_first() else {
        return;
    };

    if style.fill.a > 0.0 {
        let mut builder = PathBuilder::fill();
        builder.move_to(mapping.point(*first));
        for vertex in rest {
            builder.line_to(mapping.point(*vertex));
        }
        if let Ok(path) = builder.build() {
            window.paint_path(path, to_rgba(style.fill));
        }
    }

    if style.stroke.width > 0.0 && style.stroke.color.a > 0.0 {
        let mut builder = PathBuilder::stroke(px(mapping.length(f64::from(style.stroke.width))));
        builder.move_to(mapping.point(*first));
        for vertex in rest {
            builder.line_to(mapping.point(*vertex));
        }
        builder.line_to(mapping.point(*first));
        if let Ok(path) = builder.build() {
            window.paint_path(path, to_rgba(style.stroke.color));
        }
    }
}

fn paint_lines(
    window: &mut Window,
    mapping: &CanvasMapping,
    segments: &[LineSegment],
    style: LineStyle,
) {
    if segments.is_empty() {
        return;
    }
    let width = mapping.length(f64::from(style.width)).max(0.5);
    let mut builder = PathBuilder::stroke(px(width));
    for segment in segments {
        builder.move_to(mapping.point(segment.start));
        builder.line_to(mapping.point(segment.end));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_circle(
    window: &mut Window,
    mapping: &CanvasMapping,
    center: ScreenPoint,
    radius: f64,
    style: ShapeStyle,
) {
    let center = mapping.point(center);
    let radius = px(mapping.length(radius));
    let bounds = Bounds::from_corners(
        point(center.x - radius, center.y - radius),
        point(center.x + radius, center.y + radius),
    );
    window.paint_quad(quad(
        bounds,
        Corners::all(radius),
        to_rgba(style.fill),
        Edges::all(px(mapping.length(f64::from(style.stroke.width)))),
        to_rgba(style.stroke.color),
        BorderStyle::default(),
    ));
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    mapping: &CanvasMapping,
    position: ScreenPoint,
    text: &str,
    style: &TextStyle,
) {
    if text.is_empty() {
        return;
    }
    let font_size = px(mapping.length(f64::from(style.size)));
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: to_hsla(style.color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), font_size, &[run], None);
    let anchor = mapping.point(position);
    let x = match style.align {
        TextAlign::Left => anchor.x,
        TextAlign::Center => anchor.x - shaped.width * 0.5,
        TextAlign::Right => anchor.x - shaped.width,
    };
    // Canvas text positions are baselines; GPUI paints from the line top.
    let origin = point(x, anchor.y - shaped.ascent);
    let line_height = shaped.ascent + shaped.descent;
    let _ = shaped.paint(origin, line_height, window, cx);
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
