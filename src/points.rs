//! Classified sample points and their overlay layer.

use serde::{Deserialize, Serialize};

use crate::geom::Point;
use crate::render::{RenderCommand, RenderList};
use crate::style::Theme;
use crate::transform::Transform;

/// A point classified by the backend as inside (`hit`) or outside the region.
///
/// Extra fields in backend records (radius, timing, timestamp) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampledPoint {
    /// X in graph units.
    pub x: f64,
    /// Y in graph units.
    pub y: f64,
    /// Classification result.
    pub hit: bool,
}

impl SampledPoint {
    /// Create a new sampled point.
    pub fn new(x: f64, y: f64, hit: bool) -> Self {
        Self { x, y, hit }
    }

    /// Position in graph space.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Parse the backend's JSON result list.
///
/// Anything other than a JSON array yields no points. Array elements that do
/// not describe a point are skipped.
pub fn parse_points_json(json: &str) -> Vec<SampledPoint> {
    let value: serde_json::Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "point list is not valid JSON");
            return Vec::new();
        }
    };
    let serde_json::Value::Array(items) = value else {
        tracing::debug!("point list is not an array, rendering no points");
        return Vec::new();
    };
    items
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, item)| match serde_json::from_value::<SampledPoint>(item) {
                Ok(point) => Some(point),
                Err(err) => {
                    tracing::warn!(index, error = %err, "skipping malformed point");
                    None
                }
            },
        )
        .collect()
}

/// Push one marker per point, in sequence order.
pub fn build_points(
    render: &mut RenderList,
    points: &[SampledPoint],
    transform: &Transform,
    theme: &Theme,
) {
    for point in points {
        render.push(RenderCommand::Circle {
            center: transform.to_pixel(point.position()),
            radius: theme.marker_radius,
            style: theme.marker_style(point.hit),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;
    use crate::geom::ScreenPoint;
    use crate::transform::ViewConfig;

    #[test]
    fn markers_follow_sequence_order() {
        let theme = Theme::default();
        let transform = Transform::new(ViewConfig::new(400, 400).unwrap());
        let points = [SampledPoint::new(1.0, 1.0, true), SampledPoint::new(-1.0, -1.0, false)];
        let mut render = RenderList::new();
        build_points(&mut render, &points, &transform, &theme);

        assert_eq!(render.len(), 2);
        let fills: Vec<_> = render
            .commands()
            .iter()
            .map(|command| match command {
                RenderCommand::Circle { center, radius, style } => {
                    assert_eq!(*radius, 4.0);
                    assert_eq!(style.stroke.color, theme.marker_outline);
                    (*center, style.fill)
                }
                other => panic!("unexpected command {other:?}"),
            })
            .collect();
        assert_eq!(fills[0], (ScreenPoint::new(240.0, 160.0), theme.hit));
        assert_eq!(fills[1], (ScreenPoint::new(160.0, 240.0), theme.miss));
    }

    #[test]
    fn empty_sequence_draws_nothing() {
        let transform = Transform::new(ViewConfig::new(400, 400).unwrap());
        let mut render = RenderList::new();
        build_points(&mut render, &[], &transform, &Theme::default());
        assert!(render.is_empty());
    }

    #[test]
    fn parses_backend_records() {
        let json = r#"[
            {"x": 1.0, "y": 2.5, "r": 3.0, "hit": true, "executionTimeNanos": 1200,
             "timestamp": "2024-01-01T10:00:00"},
            {"x": -1.5, "y": 0.0, "r": 3.0, "hit": false}
        ]"#;
        let points = parse_points_json(json);
        assert_eq!(
            points,
            vec![SampledPoint::new(1.0, 2.5, true), SampledPoint::new(-1.5, 0.0, false)]
        );
    }

    #[test]
    fn non_array_yields_no_points() {
        assert!(parse_points_json("{\"x\": 1}").is_empty());
        assert!(parse_points_json("null").is_empty());
        assert!(parse_points_json("not json").is_empty());
    }

    #[test]
    fn malformed_elements_are_skipped() {
        let points = parse_points_json(r#"[{"x": 1}, {"x": 0.5, "y": 0.5, "hit": true}, 7]"#);
        assert_eq!(points, vec![SampledPoint::new(0.5, 0.5, true)]);
    }
}
