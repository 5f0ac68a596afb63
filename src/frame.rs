//! Frame orchestration: clear, draw every layer, and rebind click capture.

use std::sync::{Arc, Mutex};

use crate::axis::{AxisConfig, build_axes};
use crate::error::CaptureError;
use crate::interaction::{ClickCapture, ClickEvent, ClickOutcome};
use crate::points::build_points;
use crate::region::build_region;
use crate::render::{RenderCommand, RenderList};
use crate::style::Theme;
use crate::transform::{Transform, ViewConfig};
use crate::view::{ViewHandle, ViewState};

/// Click handler bound to a surface. Binding a new one replaces the old.
pub type ClickHandler = Box<dyn FnMut(&ClickEvent) -> Result<ClickOutcome, CaptureError>>;

/// A drawing surface with a fixed internal resolution.
pub trait CanvasSurface {
    /// Internal resolution in pixels (width, height).
    fn resolution(&self) -> (u32, u32);

    /// Execute a frame's commands.
    fn execute(&mut self, render: &RenderList);

    /// Bind the click handler, dropping any previously bound one.
    fn bind_click(&mut self, handler: ClickHandler);
}

/// Build a full frame: clear, region, grid/axis, then points.
///
/// The region layer is skipped when no usable radius is available.
pub fn build_frame(
    config: &ViewConfig,
    state: &ViewState,
    theme: &Theme,
    axis: &AxisConfig,
) -> RenderList {
    let transform = Transform::new(*config);
    let mut render = RenderList::new();
    render.push(RenderCommand::Clear(config.canvas_rect()));

    match state.effective_radius() {
        Ok(r) => build_region(&mut render, &transform, r, theme.region_style()),
        Err(err) => tracing::debug!("skipping region layer: {err}"),
    }
    build_axes(&mut render, &transform, axis, theme);
    build_points(&mut render, &state.points, &transform, theme);

    tracing::trace!(commands = render.len(), "built frame");
    render
}

/// Redraws a surface from the shared view state and rebinds click capture.
pub struct FrameOrchestrator {
    view: ViewHandle,
    capture: Arc<Mutex<ClickCapture>>,
    theme: Theme,
    axis: AxisConfig,
}

impl FrameOrchestrator {
    /// Create an orchestrator with the default theme and axis layout.
    pub fn new(view: ViewHandle, capture: ClickCapture) -> Self {
        Self {
            view,
            capture: Arc::new(Mutex::new(capture)),
            theme: Theme::default(),
            axis: AxisConfig::default(),
        }
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the axis layout.
    pub fn with_axis(mut self, axis: AxisConfig) -> Self {
        self.axis = axis;
        self
    }

    /// Access the shared view state.
    pub fn view(&self) -> &ViewHandle {
        &self.view
    }

    /// Access the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Run the click capture with exclusive access, e.g. to inspect the staged request.
    pub fn with_capture<R>(&self, f: impl FnOnce(&ClickCapture) -> R) -> Option<R> {
        let capture = self.capture.lock().ok()?;
        Some(f(&capture))
    }

    /// Redraw the surface and rebind its click handler.
    ///
    /// Returns `false` without doing anything when there is no surface yet
    /// (or it has a zero resolution) or the view state is unavailable.
    pub fn init(&self, surface: Option<&mut dyn CanvasSurface>) -> bool {
        let Some(surface) = surface else {
            tracing::debug!("no canvas surface, skipping frame");
            return false;
        };
        let (width, height) = surface.resolution();
        let config = match ViewConfig::new(width, height) {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("skipping frame: {err}");
                return false;
            }
        };
        let Some(render) = self
            .view
            .read(|state| build_frame(&config, state, &self.theme, &self.axis))
        else {
            tracing::warn!("view state is poisoned, skipping frame");
            return false;
        };

        surface.execute(&render);
        surface.bind_click(self.click_handler(config));
        true
    }

    fn click_handler(&self, config: ViewConfig) -> ClickHandler {
        let view = self.view.clone();
        let capture = Arc::clone(&self.capture);
        let transform = Transform::new(config);
        Box::new(move |event: &ClickEvent| {
            // The view lock is released before the hook runs, so a hook may
            // append points through the same handle.
            let radius = view
                .read(|state| state.radius.clone())
                .ok_or(CaptureError::StateUnavailable)?;
            let mut capture = capture.lock().map_err(|_| CaptureError::StateUnavailable)?;
            Ok(capture.handle_click(event, &transform, &radius)?)
        })
    }
}

impl std::fmt::Debug for FrameOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameOrchestrator")
            .field("view", &self.view)
            .field("theme", &self.theme)
            .field("axis", &self.axis)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::SampledPoint;
    use crate::view::RadiusState;

    fn frame_for(state: &ViewState) -> RenderList {
        let config = ViewConfig::new(400, 400).unwrap();
        build_frame(&config, state, &Theme::default(), &AxisConfig::default())
    }

    #[test]
    fn layers_are_drawn_in_order() {
        let mut state = ViewState::new(3.0);
        state.points.push(SampledPoint::new(0.5, 0.5, true));
        let render = frame_for(&state);
        let commands = render.commands();

        assert!(matches!(commands[0], RenderCommand::Clear(_)));
        assert!(
            commands[1..4]
                .iter()
                .all(|command| matches!(command, RenderCommand::Path { .. }))
        );
        assert!(matches!(commands[4], RenderCommand::LineSegments { .. }));
        assert!(matches!(
            commands[commands.len() - 1],
            RenderCommand::Circle { .. }
        ));
    }

    #[test]
    fn region_skipped_without_radius() {
        let state = ViewState {
            radius: RadiusState::unset(),
            points: Vec::new(),
        };
        let render = frame_for(&state);
        assert!(
            !render
                .commands()
                .iter()
                .any(|command| matches!(command, RenderCommand::Path { .. }))
        );
    }

    #[test]
    fn frame_is_pure() {
        let state = ViewState::new(2.0);
        assert_eq!(frame_for(&state), frame_for(&state));
    }

    struct CaptureSurface {
        last: RenderList,
        handler: Option<ClickHandler>,
    }

    impl CanvasSurface for CaptureSurface {
        fn resolution(&self) -> (u32, u32) {
            (400, 400)
        }

        fn execute(&mut self, render: &RenderList) {
            self.last = render.clone();
        }

        fn bind_click(&mut self, handler: ClickHandler) {
            self.handler = Some(handler);
        }
    }

    #[test]
    fn orchestrator_uses_configured_theme_and_axis() {
        use crate::error::IntegrationError;
        use crate::interaction::CanvasRequest;
        use crate::render::Color;

        let theme = Theme {
            hit: Color::rgb8(0, 0, 255),
            ..Theme::default()
        };
        let axis = AxisConfig::new().with_ticks([]).with_titles("", "");
        let capture = ClickCapture::builder()
            .hook(|_: &CanvasRequest| -> Result<(), IntegrationError> { Ok(()) })
            .build()
            .unwrap();
        let mut state = ViewState::new(3.0);
        state.points.push(SampledPoint::new(1.0, 1.0, true));
        let orchestrator = FrameOrchestrator::new(ViewHandle::new(state), capture)
            .with_theme(theme.clone())
            .with_axis(axis);
        assert_eq!(orchestrator.theme(), &theme);

        let mut surface = CaptureSurface {
            last: RenderList::new(),
            handler: None,
        };
        assert!(orchestrator.init(Some(&mut surface)));
        assert!(surface.handler.is_some());

        let texts = surface
            .last
            .commands()
            .iter()
            .filter(|command| matches!(command, RenderCommand::Text { text, .. } if !text.is_empty()))
            .count();
        assert_eq!(texts, 0);
        let Some(RenderCommand::Circle { style, .. }) = surface.last.commands().last() else {
            panic!("points are drawn last");
        };
        assert_eq!(style.fill, Color::rgb8(0, 0, 255));
    }
}
