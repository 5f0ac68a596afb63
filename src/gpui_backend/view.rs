use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{
    Bounds, MouseButton, MouseDownEvent, MouseMoveEvent, Pixels, Point, Window, canvas, div,
};

use crate::frame::FrameOrchestrator;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::transform::{Transform, ViewConfig};
use crate::view::ViewHandle;

use super::config::DiagramViewConfig;
use super::hover::{build_alert, build_hover_readout};
use super::paint::{DiagramFrame, paint_frame, to_hsla};
use super::state::{DiagramUiState, RecordingSurface};

/// A GPUI view that renders the diagram and captures clicks on it.
///
/// Each frame runs the [`FrameOrchestrator`] against a fixed-resolution
/// canvas, so the bound click handler always matches the latest frame.
#[derive(Clone)]
pub struct GpuiDiagramView {
    orchestrator: Arc<FrameOrchestrator>,
    state: Arc<RwLock<DiagramUiState>>,
    config: DiagramViewConfig,
}

impl GpuiDiagramView {
    /// Create a view with the default [`DiagramViewConfig`].
    pub fn new(orchestrator: FrameOrchestrator) -> Self {
        Self::with_config(orchestrator, DiagramViewConfig::default())
    }

    /// Create a view with a custom configuration.
    pub fn with_config(orchestrator: FrameOrchestrator, config: DiagramViewConfig) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            state: Arc::new(RwLock::new(DiagramUiState::default())),
            config,
        }
    }

    /// Get the handle the page controller uses to update R and the points.
    ///
    /// Call `notify` on the view's context after writing through it.
    pub fn view_handle(&self) -> ViewHandle {
        self.orchestrator.view().clone()
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let Ok(mut state) = self.state.write() else {
            return;
        };
        if state.dispatch_click(screen_point(ev.position)).is_some() {
            cx.notify();
        }
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        if let Ok(mut state) = self.state.write() {
            state.set_hover(screen_point(ev.position));
        }
        cx.notify();
    }
}

impl Render for GpuiDiagramView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let orchestrator = Arc::clone(&self.orchestrator);
        let state = Arc::clone(&self.state);
        let config = self.config.clone();
        let background = to_hsla(self.orchestrator.theme().background);

        div()
            .size_full()
            .bg(background)
            .child(
                canvas(
                    move |bounds, _, _| build_diagram_frame(&orchestrator, &state, &config, bounds),
                    move |_, frame, window, cx| {
                        if let Some(frame) = frame {
                            paint_frame(&frame, window, cx);
                        }
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
    }
}

fn build_diagram_frame(
    orchestrator: &FrameOrchestrator,
    state: &RwLock<DiagramUiState>,
    config: &DiagramViewConfig,
    bounds: Bounds<Pixels>,
) -> Option<DiagramFrame> {
    let element = fit_square(bounds, config);
    let resolution = (config.canvas_width, config.canvas_height);
    let mut state = state.write().ok()?;
    state.element = Some(element);

    let mut surface = RecordingSurface::new(resolution, &mut state.click_handler);
    if !orchestrator.init(Some(&mut surface)) {
        return None;
    }
    let mut render = surface.into_render();

    let transform = Transform::new(ViewConfig::new(resolution.0, resolution.1).ok()?);
    if config.show_hover {
        if let Some(cursor) = state.hover {
            build_hover_readout(&mut render, &transform, element, cursor, orchestrator.theme());
        }
    }
    if config.show_alerts {
        if let Some(message) = state.alert.as_deref() {
            build_alert(&mut render, &transform, message, orchestrator.theme());
        }
    }

    Some(DiagramFrame {
        render,
        element,
        resolution,
    })
}

/// Largest rectangle with the canvas aspect ratio, centered in `bounds`.
fn fit_square(bounds: Bounds<Pixels>, config: &DiagramViewConfig) -> ScreenRect {
    let width = f64::from(f32::from(bounds.size.width));
    let height = f64::from(f32::from(bounds.size.height));
    let aspect = f64::from(config.canvas_width.max(1)) / f64::from(config.canvas_height.max(1));
    let (fit_w, fit_h) = if width / height.max(1.0) > aspect {
        (height * aspect, height)
    } else {
        (width, width / aspect)
    };
    let origin = ScreenPoint::new(
        f64::from(f32::from(bounds.origin.x)) + (width - fit_w) / 2.0,
        f64::from(f32::from(bounds.origin.y)) + (height - fit_h) / 2.0,
    );
    ScreenRect::from_origin_size(origin, fit_w, fit_h)
}

fn screen_point(point: Point<Pixels>) -> ScreenPoint {
    ScreenPoint::new(f64::from(f32::from(point.x)), f64::from(f32::from(point.y)))
}
