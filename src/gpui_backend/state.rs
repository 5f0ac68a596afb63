use crate::error::CaptureError;
use crate::frame::{CanvasSurface, ClickHandler};
use crate::geom::{ScreenPoint, ScreenRect};
use crate::interaction::{ClickEvent, ClickOutcome};
use crate::render::RenderList;

#[derive(Default)]
pub(crate) struct DiagramUiState {
    /// Displayed canvas bounds in window coordinates.
    pub(crate) element: Option<ScreenRect>,
    pub(crate) click_handler: Option<ClickHandler>,
    pub(crate) hover: Option<ScreenPoint>,
    pub(crate) alert: Option<String>,
}

impl DiagramUiState {
    pub(crate) fn set_hover(&mut self, position: ScreenPoint) {
        self.hover = self
            .element
            .filter(|element| element.contains(position))
            .map(|_| position);
    }

    /// Forward a left click to the bound handler and update the alert.
    ///
    /// Returns `None` when the click lands outside the displayed canvas or no
    /// handler is bound yet.
    pub(crate) fn dispatch_click(
        &mut self,
        position: ScreenPoint,
    ) -> Option<Result<ClickOutcome, CaptureError>> {
        let element = self.element.filter(|element| element.contains(position))?;
        let handler = self.click_handler.as_mut()?;
        let result = handler(&ClickEvent::new(position, element));
        self.alert = match &result {
            Ok(_) => None,
            Err(err) => err.user_message(),
        };
        Some(result)
    }
}

/// Surface adapter that records the frame and the bound handler for painting.
pub(crate) struct RecordingSurface<'a> {
    resolution: (u32, u32),
    render: RenderList,
    handler: &'a mut Option<ClickHandler>,
}

impl<'a> RecordingSurface<'a> {
    pub(crate) fn new(resolution: (u32, u32), handler: &'a mut Option<ClickHandler>) -> Self {
        Self {
            resolution,
            render: RenderList::new(),
            handler,
        }
    }

    pub(crate) fn into_render(self) -> RenderList {
        self.render
    }
}

impl CanvasSurface for RecordingSurface<'_> {
    fn resolution(&self) -> (u32, u32) {
        self.resolution
    }

    fn execute(&mut self, render: &RenderList) {
        self.render = render.clone();
    }

    fn bind_click(&mut self, handler: ClickHandler) {
        *self.handler = Some(handler);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::IntegrationError;
    use crate::frame::FrameOrchestrator;
    use crate::interaction::{CanvasRequest, ClickCapture};
    use crate::view::{ViewHandle, ViewState};
    use test_log::test;

    fn bound_state(radius: f64) -> (DiagramUiState, FrameOrchestrator, Arc<Mutex<usize>>) {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let capture = ClickCapture::builder()
            .hook(move |_: &CanvasRequest| -> Result<(), IntegrationError> {
                *counter.lock().unwrap() += 1;
                Ok(())
            })
            .build()
            .unwrap();
        let orchestrator = FrameOrchestrator::new(ViewHandle::new(ViewState::new(radius)), capture);

        // A 400x400 canvas letterboxed into a 600x400 window.
        let mut state = DiagramUiState {
            element: Some(ScreenRect::new(
                ScreenPoint::new(100.0, 0.0),
                ScreenPoint::new(500.0, 400.0),
            )),
            ..DiagramUiState::default()
        };
        let mut surface = RecordingSurface::new((400, 400), &mut state.click_handler);
        assert!(orchestrator.init(Some(&mut surface)));
        (state, orchestrator, calls)
    }

    #[test]
    fn click_in_letterbox_margin_is_ignored() {
        let (mut state, orchestrator, calls) = bound_state(3.0);
        assert!(state.dispatch_click(ScreenPoint::new(20.0, 200.0)).is_none());
        assert!(state.dispatch_click(ScreenPoint::new(560.0, 200.0)).is_none());
        assert_eq!(*calls.lock().unwrap(), 0);
        assert_eq!(
            orchestrator.with_capture(|capture| capture.staged().clone()),
            Some(CanvasRequest::default())
        );
    }

    #[test]
    fn click_on_canvas_is_dispatched() {
        let (mut state, _orchestrator, calls) = bound_state(3.0);
        let outcome = state
            .dispatch_click(ScreenPoint::new(300.0, 200.0))
            .unwrap()
            .unwrap();
        assert_eq!(outcome.request.x, "0.000000");
        assert_eq!(outcome.request.y, "0.000000");
        assert_eq!(*calls.lock().unwrap(), 1);
        assert!(state.alert.is_none());
    }

    #[test]
    fn invalid_radius_sets_alert() {
        let (mut state, _orchestrator, calls) = bound_state(6.0);
        let result = state.dispatch_click(ScreenPoint::new(300.0, 200.0)).unwrap();
        assert!(result.is_err());
        assert_eq!(
            state.alert.as_deref(),
            Some("Please select a valid Radius (R) first.")
        );
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn no_handler_before_first_frame() {
        let mut state = DiagramUiState {
            element: Some(ScreenRect::new(
                ScreenPoint::new(0.0, 0.0),
                ScreenPoint::new(400.0, 400.0),
            )),
            ..DiagramUiState::default()
        };
        assert!(state.dispatch_click(ScreenPoint::new(200.0, 200.0)).is_none());
    }
}
