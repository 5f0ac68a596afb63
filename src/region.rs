//! Compound region geometry and rendering.
//!
//! The region is the union of three shapes sharing the graph origin, each in
//! its own quadrant and scaled by the radius R:
//!
//! - a right triangle in quadrant 1 with legs R/2 (along X) and R (along Y),
//! - a rectangle in quadrant 3 spanning R/2 by R,
//! - a quarter-disc wedge of radius R in quadrant 4.

use std::f64::consts::FRAC_PI_2;

use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::render::{PathOp, RenderCommand, RenderList, ShapeStyle};
use crate::transform::Transform;

/// Pixel-space geometry of the three region shapes for one radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionShapes {
    /// Triangle vertices: origin, (R/2, 0), (0, R).
    pub triangle: [ScreenPoint; 3],
    /// Rectangle below-left of the origin.
    pub rectangle: ScreenRect,
    /// Wedge center (the origin pixel).
    pub wedge_center: ScreenPoint,
    /// Wedge radius in pixels.
    pub wedge_radius: f64,
}

impl RegionShapes {
    /// Compute the shapes for radius `r` (in graph units).
    pub fn new(transform: &Transform, r: f64) -> Self {
        let unit = transform.config().unit_px();
        let triangle = [
            transform.to_pixel(Point::new(0.0, 0.0)),
            transform.to_pixel(Point::new(r / 2.0, 0.0)),
            transform.to_pixel(Point::new(0.0, r)),
        ];
        let rectangle = ScreenRect::from_origin_size(
            ScreenPoint::new(transform.to_pixel_x(-r / 2.0), transform.to_pixel_y(0.0)),
            (r / 2.0) * unit,
            r * unit,
        );
        Self {
            triangle,
            rectangle,
            wedge_center: transform.origin(),
            wedge_radius: r * unit,
        }
    }

    /// Path for the triangle.
    pub fn triangle_path(&self) -> Vec<PathOp> {
        let [a, b, c] = self.triangle;
        vec![
            PathOp::MoveTo(a),
            PathOp::LineTo(b),
            PathOp::LineTo(c),
            PathOp::Close,
        ]
    }

    /// Path for the rectangle.
    pub fn rectangle_path(&self) -> Vec<PathOp> {
        vec![PathOp::Rect(self.rectangle)]
    }

    /// Path for the quadrant-4 wedge.
    ///
    /// Pixel angle pi/2 points down the screen (graph -Y) and 0 points right,
    /// so sweeping anticlockwise between them traces the lower-right quarter.
    pub fn wedge_path(&self) -> Vec<PathOp> {
        vec![
            PathOp::MoveTo(self.wedge_center),
            PathOp::Arc {
                center: self.wedge_center,
                radius: self.wedge_radius,
                start_angle: FRAC_PI_2,
                end_angle: 0.0,
                anticlockwise: true,
            },
            PathOp::Close,
        ]
    }

    /// Pixel bounding boxes of the triangle, rectangle, and wedge.
    pub fn bounds(&self) -> [ScreenRect; 3] {
        let [a, b, c] = self.triangle;
        let triangle = ScreenRect::new(
            ScreenPoint::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            ScreenPoint::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        );
        let wedge = ScreenRect::from_origin_size(
            self.wedge_center,
            self.wedge_radius,
            self.wedge_radius,
        );
        [triangle, self.rectangle, wedge]
    }
}

/// Push the region layer for radius `r`: triangle, rectangle, then wedge.
pub fn build_region(render: &mut RenderList, transform: &Transform, r: f64, style: ShapeStyle) {
    let shapes = RegionShapes::new(transform, r);
    for ops in [
        shapes.triangle_path(),
        shapes.rectangle_path(),
        shapes.wedge_path(),
    ] {
        render.push(RenderCommand::Path { ops, style });
    }
}
