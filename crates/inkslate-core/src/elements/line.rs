//! Straight line segment.

use super::{ElementId, HIT_TOLERANCE, SerializableColor, normalized_rect};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A line from `origin` to `origin + (width, height)`. The signed deltas
/// keep the drag direction, so the segment renders exactly as drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: ElementId,
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub stroke: SerializableColor,
    pub stroke_width: f64,
}

impl Line {
    pub fn new(origin: Point, stroke: SerializableColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            width: 0.0,
            height: 0.0,
            stroke,
            stroke_width: 2.0,
        }
    }

    /// Far endpoint of the segment.
    pub fn end(&self) -> Point {
        Point::new(self.origin.x + self.width, self.origin.y + self.height)
    }

    /// Coarse test: the segment's bounding box inflated by the fixed
    /// tolerance, not true segment distance.
    pub fn contains(&self, point: Point) -> bool {
        normalized_rect(self.origin, self.width, self.height)
            .inflate(HIT_TOLERANCE, HIT_TOLERANCE)
            .contains(point)
    }
}
