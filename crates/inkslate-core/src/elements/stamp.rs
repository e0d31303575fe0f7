//! Fixed-glyph component stamps (logic gates and passive circuit symbols).

use super::{ElementId, SerializableColor, normalized_rect};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed symbol library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StampKind {
    And,
    Or,
    Not,
    Resistor,
    Capacitor,
    Battery,
    Ground,
}

impl StampKind {
    pub fn all() -> &'static [StampKind] {
        &[
            StampKind::And,
            StampKind::Or,
            StampKind::Not,
            StampKind::Resistor,
            StampKind::Capacitor,
            StampKind::Battery,
            StampKind::Ground,
        ]
    }
}

/// A stamped symbol. The glyph is defined in a normalized 100×100 local
/// space and stretched to fill the element's box at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStamp {
    pub id: ElementId,
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    #[serde(rename = "stampKind")]
    pub kind: StampKind,
    pub stroke: SerializableColor,
    pub stroke_width: f64,
}

impl ComponentStamp {
    pub fn new(origin: Point, kind: StampKind, stroke: SerializableColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            width: 0.0,
            height: 0.0,
            kind,
            stroke,
            stroke_width: 2.0,
        }
    }

    pub fn bounds(&self) -> Rect {
        normalized_rect(self.origin, self.width, self.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_kind_snapshot_tags_are_uppercase() {
        assert_eq!(serde_json::to_string(&StampKind::And).unwrap(), "\"AND\"");
        assert_eq!(
            serde_json::to_string(&StampKind::Resistor).unwrap(),
            "\"RESISTOR\""
        );
        let parsed: StampKind = serde_json::from_str("\"GROUND\"").unwrap();
        assert_eq!(parsed, StampKind::Ground);
    }

    #[test]
    fn stamp_hit_is_its_normalized_box() {
        let mut stamp =
            ComponentStamp::new(Point::new(250.0, 50.0), StampKind::And, SerializableColor::INK);
        stamp.width = -50.0;
        stamp.height = -50.0;
        assert!(stamp.contains(Point::new(225.0, 25.0)));
        assert!(!stamp.contains(Point::new(150.0, 25.0)));
    }
}
