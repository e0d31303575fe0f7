//! Rectangle shape.

use super::{ElementId, SerializableColor, normalized_rect};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned rectangle with signed width/height. Normalization to a
/// min-corner box happens only at render and hit-test time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    pub id: ElementId,
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub stroke: SerializableColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<SerializableColor>,
    pub stroke_width: f64,
}

impl Rectangle {
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

    /// Sign-corrected box.
    pub fn bounds(&self) -> Rect {
        normalized_rect(self.origin, self.width, self.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}
