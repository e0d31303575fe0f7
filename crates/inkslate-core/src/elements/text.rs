//! Free text label.

use super::{ElementId, SerializableColor};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Approximate advance width per character, used for the synthetic hit box
/// since text carries no explicit width/height.
pub const CHAR_WIDTH: f64 = 12.0;
/// Fixed line height of the synthetic hit box.
pub const LINE_HEIGHT: f64 = 24.0;

/// A text label anchored at a world point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    pub id: ElementId,
    pub origin: Point,
    pub text: String,
    pub font_size: f64,
    pub stroke: SerializableColor,
}

impl Text {
    pub fn new(origin: Point, text: String, stroke: SerializableColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            text,
            font_size: 20.0,
            stroke,
        }
    }

    /// Synthetic box derived from the text length. Even an empty label gets
    /// one character of width so it stays selectable.
    pub fn bounds(&self) -> Rect {
        let chars = self.text.chars().count().max(1) as f64;
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + chars * CHAR_WIDTH,
            self.origin.y + LINE_HEIGHT,
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}
