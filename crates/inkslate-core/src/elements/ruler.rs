//! Measurement ruler.

use super::{ElementId, HIT_TOLERANCE, SerializableColor, normalized_rect};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A measured segment. `measured_distance` is derived from the drag deltas
/// and cached while the ruler is drawn, in the same unit as coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ruler {
    pub id: ElementId,
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub stroke: SerializableColor,
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measured_distance: Option<f64>,
}

impl Ruler {
    pub fn new(origin: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            width: 0.0,
            height: 0.0,
            stroke: SerializableColor::RULER_RED,
            stroke_width: 2.0,
            measured_distance: None,
        }
    }

    pub fn end(&self) -> Point {
        Point::new(self.origin.x + self.width, self.origin.y + self.height)
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    /// Euclidean length of the current drag deltas.
    pub fn measure(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// Same coarse box test as [`Line`](super::Line).
    pub fn contains(&self, point: Point) -> bool {
        normalized_rect(self.origin, self.width, self.height)
            .inflate(HIT_TOLERANCE, HIT_TOLERANCE)
            .contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_is_euclidean() {
        let mut ruler = Ruler::new(Point::new(0.0, 0.0));
        ruler.width = 30.0;
        ruler.height = 40.0;
        assert!((ruler.measure() - 50.0).abs() < f64::EPSILON);
        assert_eq!(ruler.midpoint(), Point::new(15.0, 20.0));
    }

    #[test]
    fn ruler_defaults_to_measurement_red() {
        let ruler = Ruler::new(Point::ZERO);
        assert_eq!(ruler.stroke, SerializableColor::RULER_RED);
        assert!(ruler.measured_distance.is_none());
    }
}
