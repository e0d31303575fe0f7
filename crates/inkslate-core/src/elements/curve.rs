//! Smoothed curve stroke.

use super::{ElementId, HIT_TOLERANCE, SerializableColor, flat_points, origin_is_zero, points_bounds};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pen stroke rendered through a quadratic-Bezier midpoint spline.
///
/// The raw samples are stored untouched; smoothing is a render-time mapping,
/// so the element stays faithful to the captured gesture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothCurve {
    pub id: ElementId,
    #[serde(default, skip_serializing_if = "origin_is_zero")]
    pub origin: Point,
    #[serde(with = "flat_points")]
    pub points: Vec<Point>,
    pub stroke: SerializableColor,
    pub stroke_width: f64,
}

impl SmoothCurve {
    pub fn new(start: Point, stroke: SerializableColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin: Point::ZERO,
            points: vec![start],
            stroke,
            stroke_width: 2.0,
        }
    }

    pub fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Same coarse box test as [`FreehandStroke`](super::FreehandStroke): the
    /// smoothed path never leaves the hull of its control points, so the
    /// point bounding box is a safe region.
    pub fn contains(&self, point: Point) -> bool {
        points_bounds(self.origin, &self.points)
            .map(|b| b.inflate(HIT_TOLERANCE, HIT_TOLERANCE).contains(point))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point_curve_is_hittable_near_its_point() {
        let curve = SmoothCurve::new(Point::new(40.0, 40.0), SerializableColor::INK);
        assert!(curve.contains(Point::new(45.0, 45.0)));
        assert!(!curve.contains(Point::new(60.0, 60.0)));
    }

    #[test]
    fn hit_covers_the_sample_hull() {
        let mut curve = SmoothCurve::new(Point::new(0.0, 0.0), SerializableColor::INK);
        curve.push_point(Point::new(50.0, 80.0));
        curve.push_point(Point::new(100.0, 0.0));
        assert!(curve.contains(Point::new(50.0, 40.0)));
        assert!(!curve.contains(Point::new(50.0, 100.0)));
    }
}
