//! Freehand pen stroke.

use super::{ElementId, HIT_TOLERANCE, SerializableColor, flat_points, origin_is_zero, points_bounds};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A raw pen stroke: every pointer sample is kept, no decimation.
///
/// Points are world coordinates at capture time; `origin` is a translation
/// applied on top (zero until the stroke is moved).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreehandStroke {
    pub id: ElementId,
    #[serde(default, skip_serializing_if = "origin_is_zero")]
    pub origin: Point,
    #[serde(with = "flat_points")]
    pub points: Vec<Point>,
    pub stroke: SerializableColor,
    pub stroke_width: f64,
}

impl FreehandStroke {
    /// Start a new stroke at the pointer-down point.
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

    /// Coarse path hit test: bounding box of the translated points, inflated
    /// by the fixed tolerance. A stroke with no points is never hit.
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
    fn stroke_starts_with_one_point() {
        let stroke = FreehandStroke::new(Point::new(3.0, 4.0), SerializableColor::INK);
        assert_eq!(stroke.points.len(), 1);
        assert_eq!(stroke.origin, Point::ZERO);
    }

    #[test]
    fn hit_uses_inflated_bounds() {
        let mut stroke = FreehandStroke::new(Point::new(0.0, 0.0), SerializableColor::INK);
        stroke.push_point(Point::new(100.0, 0.0));

        assert!(stroke.contains(Point::new(50.0, 8.0)));
        assert!(stroke.contains(Point::new(-9.0, 0.0)));
        assert!(!stroke.contains(Point::new(50.0, 15.0)));
    }

    #[test]
    fn hit_respects_translation() {
        let mut stroke = FreehandStroke::new(Point::new(0.0, 0.0), SerializableColor::INK);
        stroke.push_point(Point::new(10.0, 10.0));
        stroke.origin = Point::new(100.0, 100.0);

        assert!(stroke.contains(Point::new(105.0, 105.0)));
        assert!(!stroke.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn empty_stroke_is_never_hit() {
        let mut stroke = FreehandStroke::new(Point::ZERO, SerializableColor::INK);
        stroke.points.clear();
        assert!(!stroke.contains(Point::ZERO));
    }
}
