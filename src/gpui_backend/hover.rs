use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{
    LineStyle, PathOp, RenderCommand, RenderList, ShapeStyle, TextAlign, TextStyle,
};
use crate::style::Theme;
use crate::transform::Transform;

const READOUT_PADDING: f64 = 8.0;
const READOUT_SIZE: f32 = 12.0;
const ALERT_HEIGHT: f64 = 28.0;

/// Push the graph coordinate under `cursor` (window coordinates).
pub(crate) fn build_hover_readout(
    render: &mut RenderList,
    transform: &Transform,
    element: ScreenRect,
    cursor: ScreenPoint,
    theme: &Theme,
) {
    let canvas = transform.device_to_canvas_pixel(cursor, element);
    let point = transform.to_graph(canvas);
    render.push(RenderCommand::Text {
        position: ScreenPoint::new(READOUT_PADDING, READOUT_PADDING + f64::from(READOUT_SIZE)),
        text: format!("x: {:.2}  y: {:.2}", point.x, point.y),
        style: TextStyle {
            color: theme.axis,
            size: READOUT_SIZE,
            align: TextAlign::Left,
        },
    });
}

/// Push a banner along the bottom edge of the canvas.
pub(crate) fn build_alert(
    render: &mut RenderList,
    transform: &Transform,
    message: &str,
    theme: &Theme,
) {
    let canvas = transform.config().canvas_rect();
    let banner = ScreenRect::new(
        ScreenPoint::new(canvas.min.x, canvas.max.y - ALERT_HEIGHT),
        canvas.max,
    );
    render.push(RenderCommand::Path {
        ops: vec![PathOp::Rect(banner)],
        style: ShapeStyle {
            fill: theme.alert_background,
            stroke: LineStyle {
                color: theme.alert_background,
                width: 0.0,
            },
        },
    });
    render.push(RenderCommand::Text {
        position: ScreenPoint::new(canvas.width() / 2.0, canvas.max.y - ALERT_HEIGHT / 2.0 + 4.0),
        text: message.to_string(),
        style: TextStyle {
            color: theme.alert_text,
            size: READOUT_SIZE,
            align: TextAlign::Center,
        },
    });
}
