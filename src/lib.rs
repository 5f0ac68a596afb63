//! gpui_areaplot renders a compound-region diagram and captures clicks on it.
//!
//! The diagram shows a triangle, a rectangle, and a quarter-disc wedge scaled
//! by a radius R, with axes and the points a backend has already classified.
//! Clicks are converted into graph coordinates and handed to an injected
//! [`ClassificationHook`]. Frames are built as backend-agnostic
//! [`RenderList`]s; the optional `gpui` feature provides a GPUI view.

#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod frame;
pub mod geom;
pub mod interaction;
pub mod points;
pub mod region;
pub mod render;
pub mod style;
pub mod transform;
pub mod view;

#[cfg(feature = "gpui")]
pub mod gpui_backend;

pub use axis::{AxisConfig, AxisFormatter, build_axes};
pub use error::{CaptureError, ConfigError, IntegrationError, ValidationError};
pub use frame::{CanvasSurface, ClickHandler, FrameOrchestrator, build_frame};
pub use geom::{Point, ScreenPoint, ScreenRect};
pub use interaction::{
    CanvasRequest, ClassificationHook, ClickCapture, ClickCaptureBuilder, ClickEvent,
    ClickOutcome, format_coordinate,
};
pub use points::{SampledPoint, build_points, parse_points_json};
pub use region::{RegionShapes, build_region};
pub use render::{
    Color, LineSegment, LineStyle, PathOp, RenderCommand, RenderList, ShapeStyle, TextAlign,
    TextStyle, flatten_path,
};
pub use style::Theme;
pub use transform::{Transform, ViewConfig};
pub use view::{RadiusSelection, RadiusState, ViewHandle, ViewState};

#[cfg(feature = "gpui")]
pub use gpui_backend::{DiagramViewConfig, GpuiDiagramView};
