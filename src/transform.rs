//! Coordinate transforms between graph space and canvas pixels.

use crate::error::ConfigError;
use crate::geom::{Point, ScreenPoint, ScreenRect};

/// Number of graph units spanned by the canvas width.
pub const GRAPH_SPAN_UNITS: f64 = 10.0;

/// Canvas resolution and graph scale.
///
/// One graph unit is `pixel_width / 10` pixels, so the visible graph spans
/// +/-5 units horizontally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    pixel_width: u32,
    pixel_height: u32,
    unit_px: f64,
}

impl ViewConfig {
    /// Create a configuration for a canvas of the given internal resolution.
    pub fn new(pixel_width: u32, pixel_height: u32) -> Result<Self, ConfigError> {
        if pixel_width == 0 || pixel_height == 0 {
            return Err(ConfigError::ZeroResolution {
                width: pixel_width,
                height: pixel_height,
            });
        }
        Ok(Self {
            pixel_width,
            pixel_height,
            unit_px: f64::from(pixel_width) / GRAPH_SPAN_UNITS,
        })
    }

    /// Internal canvas width in pixels.
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    /// Internal canvas height in pixels.
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    /// Pixel length of one graph unit.
    pub fn unit_px(&self) -> f64 {
        self.unit_px
    }

    /// The full canvas rectangle in canvas pixels.
    pub fn canvas_rect(&self) -> ScreenRect {
        ScreenRect::from_origin_size(
            ScreenPoint::new(0.0, 0.0),
            f64::from(self.pixel_width),
            f64::from(self.pixel_height),
        )
    }
}

/// Transform between graph coordinates and canvas pixels.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    config: ViewConfig,
    center: ScreenPoint,
}

impl Transform {
    /// Create a transform for the given canvas configuration.
    pub fn new(config: ViewConfig) -> Self {
        let center = ScreenPoint::new(
            f64::from(config.pixel_width) / 2.0,
            f64::from(config.pixel_height) / 2.0,
        );
        Self { config, center }
    }

    /// Access the canvas configuration.
    pub fn config(&self) -> ViewConfig {
        self.config
    }

    /// Pixel position of the graph origin.
    pub fn origin(&self) -> ScreenPoint {
        self.center
    }

    /// Map a graph X value to a pixel column.
    pub fn to_pixel_x(&self, value: f64) -> f64 {
        self.center.x + value * self.config.unit_px
    }

    /// Map a graph Y value to a pixel row. Graph Y grows upward.
    pub fn to_pixel_y(&self, value: f64) -> f64 {
        self.center.y - value * self.config.unit_px
    }

    /// Map a graph point into canvas pixels.
    pub fn to_pixel(&self, point: Point) -> ScreenPoint {
        ScreenPoint::new(self.to_pixel_x(point.x), self.to_pixel_y(point.y))
    }

    /// Map a pixel column back to a graph X value.
    pub fn to_graph_x(&self, pixel: f64) -> f64 {
        (pixel - self.center.x) / self.config.unit_px
    }

    /// Map a pixel row back to a graph Y value.
    pub fn to_graph_y(&self, pixel: f64) -> f64 {
        (self.center.y - pixel) / self.config.unit_px
    }

    /// Map a canvas pixel back into graph space.
    pub fn to_graph(&self, pixel: ScreenPoint) -> Point {
        Point::new(self.to_graph_x(pixel.x), self.to_graph_y(pixel.y))
    }

    /// Rescale a device/layout-space point into canvas-internal pixels.
    ///
    /// `element` is the canvas element's displayed bounding box in the same
    /// space as `device`. The displayed size may differ from the internal
    /// resolution, so each axis is scaled by `resolution / displayed size`.
    pub fn device_to_canvas_pixel(&self, device: ScreenPoint, element: ScreenRect) -> ScreenPoint {
        let scale_x = axis_scale(f64::from(self.config.pixel_width), element.width());
        let scale_y = axis_scale(f64::from(self.config.pixel_height), element.height());
        ScreenPoint::new(
            (device.x - element.min.x) * scale_x,
            (device.y - element.min.y) * scale_y,
        )
    }
}

fn axis_scale(resolution: f64, displayed: f64) -> f64 {
    if displayed > 0.0 && displayed.is_finite() {
        resolution / displayed
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform_400() -> Transform {
        Transform::new(ViewConfig::new(400, 400).expect("valid config"))
    }

    #[test]
    fn unit_is_tenth_of_width() {
        let config = ViewConfig::new(400, 300).unwrap();
        assert_eq!(config.unit_px(), 40.0);
    }

    #[test]
    fn zero_resolution_rejected() {
        assert_eq!(
            ViewConfig::new(0, 400),
            Err(ConfigError::ZeroResolution {
                width: 0,
                height: 400
            })
        );
    }

    #[test]
    fn roundtrip_both_axes() {
        let transform = transform_400();
        for value in [-5.0, -3.25, -0.001, 0.0, 0.5, 1.0, 2.75, 4.999_999, 5.0] {
            let x = transform.to_graph_x(transform.to_pixel_x(value));
            let y = transform.to_graph_y(transform.to_pixel_y(value));
            assert!((x - value).abs() < 1e-9);
            assert!((y - value).abs() < 1e-9);
        }
    }

    #[test]
    fn y_axis_is_inverted() {
        let transform = transform_400();
        let pixel = transform.to_pixel(Point::new(1.0, 1.0));
        assert_eq!(pixel, ScreenPoint::new(240.0, 160.0));
    }

    #[test]
    fn device_scaling_uses_displayed_size() {
        let transform = transform_400();
        let element = ScreenRect::from_origin_size(ScreenPoint::new(10.0, 20.0), 200.0, 100.0);
        let canvas = transform.device_to_canvas_pixel(ScreenPoint::new(110.0, 70.0), element);
        assert_eq!(canvas, ScreenPoint::new(200.0, 200.0));
    }

    #[test]
    fn degenerate_element_keeps_unit_scale() {
        let transform = transform_400();
        let element = ScreenRect::from_origin_size(ScreenPoint::new(5.0, 5.0), 0.0, 0.0);
        let canvas = transform.device_to_canvas_pixel(ScreenPoint::new(15.0, 25.0), element);
        assert_eq!(canvas, ScreenPoint::new(10.0, 20.0));
    }
}
