//! Ellipse shape.

use super::{ElementId, SerializableColor};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ellipse described by its drag box; rendered as a circle centered on
/// the box with radius equal to the box half-diagonal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ellipse {
    pub id: ElementId,
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub stroke: SerializableColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<SerializableColor>,
    pub stroke_width: f64,
}

impl Ellipse {
    pub fn new(origin: Point, stroke: SerializableColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            width: 0.0,
            height: 0.0,
            stroke,
            fill: None,
            stroke_width: 2.0,
        }
    }

    /// Center of the drag box. Signed deltas make this correct for any
    /// drag direction without normalization.
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    /// Half-diagonal of the drag box, the rendered radius.
    pub fn radius(&self) -> f64 {
        self.width.hypot(self.height) / 2.0
    }

    /// Bounding-circle membership: a point is inside when its distance to
    /// the box center is at most the half-diagonal. This is deliberately an
    /// approximation, not a true ellipse test; selection behavior depends
    /// on it.
    pub fn contains(&self, point: Point) -> bool {
        point.distance(self.center()) <= self.radius()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ellipse(w: f64, h: f64) -> Ellipse {
        let mut e = Ellipse::new(Point::new(0.0, 0.0), SerializableColor::INK);
        e.width = w;
        e.height = h;
        e
    }

    #[test]
    fn center_hit() {
        assert!(ellipse(100.0, 100.0).contains(Point::new(50.0, 50.0)));
    }

    #[test]
    fn radius_is_half_diagonal() {
        let e = ellipse(60.0, 80.0);
        assert!((e.radius() - 50.0).abs() < f64::EPSILON);
        // Half-diagonal circle: the box corner itself lies on the boundary.
        assert!(e.contains(Point::new(0.0, 0.0)));
        // Beyond the circle.
        assert!(!e.contains(Point::new(30.0, -15.0)));
    }

    #[test]
    fn negative_drag_keeps_the_same_circle() {
        let forward = ellipse(100.0, 100.0);
        let mut backward = Ellipse::new(Point::new(100.0, 100.0), SerializableColor::INK);
        backward.width = -100.0;
        backward.height = -100.0;
        assert_eq!(forward.center(), backward.center());
        assert!((forward.radius() - backward.radius()).abs() < f64::EPSILON);
    }
}
