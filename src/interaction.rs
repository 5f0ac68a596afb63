//! Click capture: validate the radius, convert the click into graph space,
//! stage the classification request, and notify the backend hook.

use serde::Serialize;

use crate::error::{ConfigError, IntegrationError, ValidationError};
use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::transform::Transform;
use crate::view::RadiusState;

/// Decimal digits used for staged coordinates.
pub const COORDINATE_PRECISION: usize = 6;

/// A pointer click on the canvas element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    /// Pointer position in device/layout pixels.
    pub position: ScreenPoint,
    /// The canvas element's displayed bounding box at click time.
    pub element: ScreenRect,
}

impl ClickEvent {
    /// Create a click event.
    pub fn new(position: ScreenPoint, element: ScreenRect) -> Self {
        Self { position, element }
    }
}

/// Request fields handed to the classification transport.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CanvasRequest {
    /// Graph X with six decimals.
    pub x: String,
    /// Graph Y with six decimals.
    pub y: String,
    /// Radius the point is checked against.
    pub r: f64,
    /// Marks the request as coming from a canvas click rather than a form.
    #[serde(rename = "isCanvasSubmission")]
    pub from_canvas: bool,
}

impl CanvasRequest {
    /// Build a canvas-originated request for a graph point and radius.
    pub fn from_click(point: Point, r: f64) -> Self {
        Self {
            x: format_coordinate(point.x),
            y: format_coordinate(point.y),
            r,
            from_canvas: true,
        }
    }
}

/// Format a graph coordinate with fixed precision. Negative zero prints as zero.
///
/// Values exactly halfway between two representable outputs round away from
/// zero, matching JavaScript's `toFixed`.
pub fn format_coordinate(value: f64) -> String {
    let value = value + 0.0;
    let digits = COORDINATE_PRECISION as i32;
    // A binary value sits exactly on a decimal tie only when it is an odd
    // multiple of 2^-(digits + 1).
    let scaled = value * 2f64.powi(digits + 1);
    let on_tie = scaled.is_finite() && scaled.fract() == 0.0 && scaled % 2.0 != 0.0;
    let value = if on_tie {
        value + value.signum() * 0.25 * 10f64.powi(-digits)
    } else {
        value
    };
    format!("{:.*}", COORDINATE_PRECISION, value)
}

/// Remote notification invoked once per valid click.
pub trait ClassificationHook: Send {
    /// Deliver the staged request to the classification backend.
    fn process_canvas_click(&mut self, request: &CanvasRequest) -> Result<(), IntegrationError>;
}

impl<F> ClassificationHook for F
where
    F: FnMut(&CanvasRequest) -> Result<(), IntegrationError> + Send,
{
    fn process_canvas_click(&mut self, request: &CanvasRequest) -> Result<(), IntegrationError> {
        self(request)
    }
}

/// Result of a click that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickOutcome {
    /// Clicked position in graph space.
    pub point: Point,
    /// The request that was staged.
    pub request: CanvasRequest,
    /// Whether the hook accepted the request.
    pub dispatched: bool,
}

/// Converts clicks into classification requests.
pub struct ClickCapture {
    hook: Box<dyn ClassificationHook>,
    staged: CanvasRequest,
}

impl ClickCapture {
    /// Start building a click capture.
    pub fn builder() -> ClickCaptureBuilder {
        ClickCaptureBuilder::default()
    }

    /// The most recently staged request.
    pub fn staged(&self) -> &CanvasRequest {
        &self.staged
    }

    /// Handle one click.
    ///
    /// A missing or out-of-range radius (with no usable fallback) discards the
    /// click before anything is computed or staged. A hook failure is logged
    /// and reported through [`ClickOutcome::dispatched`].
    pub fn handle_click(
        &mut self,
        event: &ClickEvent,
        transform: &Transform,
        radius: &RadiusState,
    ) -> Result<ClickOutcome, ValidationError> {
        let r = radius.resolve().inspect_err(|err| {
            tracing::warn!(radius = ?radius.value, "click rejected: {err}");
        })?;

        let canvas = transform.device_to_canvas_pixel(event.position, event.element);
        let point = transform.to_graph(canvas);

        self.staged = CanvasRequest::from_click(point, r);
        tracing::debug!(x = %self.staged.x, y = %self.staged.y, r, "staged canvas request");

        let dispatched = match self.hook.process_canvas_click(&self.staged) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "canvas click was not delivered");
                false
            }
        };

        Ok(ClickOutcome {
            point,
            request: self.staged.clone(),
            dispatched,
        })
    }
}

impl std::fmt::Debug for ClickCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickCapture")
            .field("staged", &self.staged)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ClickCapture`].
#[derive(Default)]
pub struct ClickCaptureBuilder {
    hook: Option<Box<dyn ClassificationHook>>,
}

impl ClickCaptureBuilder {
    /// Set the classification hook.
    pub fn hook(mut self, hook: impl ClassificationHook + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Build the click capture. Fails when no hook was supplied.
    pub fn build(self) -> Result<ClickCapture, ConfigError> {
        let hook = self.hook.ok_or(ConfigError::MissingHook)?;
        Ok(ClickCapture {
            hook,
            staged: CanvasRequest::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::ViewConfig;
    use std::sync::{Arc, Mutex};

    fn transform_400() -> Transform {
        Transform::new(ViewConfig::new(400, 400).unwrap())
    }

    fn element_400() -> ScreenRect {
        ScreenRect::from_origin_size(ScreenPoint::new(0.0, 0.0), 400.0, 400.0)
    }

    fn recording_capture() -> (ClickCapture, Arc<Mutex<Vec<CanvasRequest>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let capture = ClickCapture::builder()
            .hook(move |request: &CanvasRequest| -> Result<(), IntegrationError> {
                sink.lock().unwrap().push(request.clone());
                Ok(())
            })
            .build()
            .unwrap();
        (capture, calls)
    }

    #[test]
    fn missing_hook_is_a_config_error() {
        assert_eq!(ClickCapture::builder().build().err(), Some(ConfigError::MissingHook));
    }

    #[test]
    fn center_click_maps_to_origin() {
        let (mut capture, calls) = recording_capture();
        let event = ClickEvent::new(ScreenPoint::new(200.0, 200.0), element_400());
        let outcome = capture
            .handle_click(&event, &transform_400(), &RadiusState::new(3.0))
            .unwrap();
        assert_eq!(outcome.request.x, "0.000000");
        assert_eq!(outcome.request.y, "0.000000");
        assert!(outcome.dispatched);
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn one_unit_up_and_right() {
        let (mut capture, calls) = recording_capture();
        let event = ClickEvent::new(ScreenPoint::new(240.0, 160.0), element_400());
        capture
            .handle_click(&event, &transform_400(), &RadiusState::new(2.0))
            .unwrap();
        let expected = CanvasRequest {
            x: "1.000000".to_string(),
            y: "1.000000".to_string(),
            r: 2.0,
            from_canvas: true,
        };
        assert_eq!(capture.staged(), &expected);
        assert_eq!(calls.lock().unwrap().as_slice(), &[expected]);
    }

    #[test]
    fn scaled_element_is_rescaled() {
        let (mut capture, _) = recording_capture();
        let element = ScreenRect::from_origin_size(ScreenPoint::new(50.0, 30.0), 200.0, 200.0);
        let event = ClickEvent::new(ScreenPoint::new(170.0, 110.0), element);
        let outcome = capture
            .handle_click(&event, &transform_400(), &RadiusState::new(3.0))
            .unwrap();
        assert_eq!(outcome.point, Point::new(1.0, 1.0));
    }

    #[test]
    fn invalid_radius_discards_click() {
        for r in [0.5, 6.0] {
            let (mut capture, calls) = recording_capture();
            let radius = RadiusState::new(r);
            let event = ClickEvent::new(ScreenPoint::new(240.0, 160.0), element_400());
            let result = capture.handle_click(&event, &transform_400(), &radius);
            assert_eq!(result, Err(ValidationError::InvalidRadius));
            assert_eq!(capture.staged(), &CanvasRequest::default());
            assert!(calls.lock().unwrap().is_empty());
        }
    }

    #[test]
    fn fallback_selection_supplies_radius() {
        let (mut capture, _) = recording_capture();
        let mut radius = RadiusState::unset();
        radius.radio.check(4.0);
        let event = ClickEvent::new(ScreenPoint::new(200.0, 200.0), element_400());
        let outcome = capture.handle_click(&event, &transform_400(), &radius).unwrap();
        assert_eq!(outcome.request.r, 4.0);
    }

    #[test_log::test]
    fn hook_failure_still_stages_request() {
        let mut capture = ClickCapture::builder()
            .hook(|_: &CanvasRequest| -> Result<(), IntegrationError> {
                Err(IntegrationError::HookUnavailable)
            })
            .build()
            .unwrap();
        let event = ClickEvent::new(ScreenPoint::new(160.0, 240.0), element_400());
        let outcome = capture
            .handle_click(&event, &transform_400(), &RadiusState::new(3.0))
            .unwrap();
        assert!(!outcome.dispatched);
        assert_eq!(capture.staged().x, "-1.000000");
        assert_eq!(capture.staged().y, "-1.000000");
        assert!(capture.staged().from_canvas);
    }

    #[test]
    fn negative_zero_formats_as_zero() {
        assert_eq!(format_coordinate(-0.0), "0.000000");
        assert_eq!(format_coordinate(-1.25), "-1.250000");
        assert_eq!(format_coordinate(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_coordinate(0.0078125), "0.007813");
        assert_eq!(format_coordinate(-0.0078125), "-0.007813");
        assert_eq!(format_coordinate(0.0390625), "0.039063");
        assert_eq!(format_coordinate(1.0078125), "1.007813");
        assert_eq!(format_coordinate(0.5), "0.500000");
    }

    #[test]
    fn sub_pixel_click_on_a_tie_stages_rounded_up() {
        let (mut capture, _) = recording_capture();
        let event = ClickEvent::new(ScreenPoint::new(200.3125, 200.0), element_400());
        let outcome = capture
            .handle_click(&event, &transform_400(), &RadiusState::new(3.0))
            .unwrap();
        assert_eq!(outcome.request.x, "0.007813");
    }

    #[test]
    fn request_serializes_with_transport_names() {
        let request = CanvasRequest::from_click(Point::new(0.5, -0.5), 3.0);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "x": "0.500000",
                "y": "-0.500000",
                "r": 3.0,
                "isCanvasSubmission": true
            })
        );
    }
}
