//! Element definitions for the diagram canvas.
//!
//! A committed drawing is an ordered sequence of [`Element`]s; insertion
//! order is z-order (later elements draw on top and are hit-tested first).
//! Elements are immutable once committed; edits go through a full
//! replace-by-id so undo/redo stays simple list replacement.

mod curve;
mod ellipse;
mod freehand;
mod line;
mod rectangle;
mod ruler;
mod stamp;
mod table;
mod text;

pub use curve::SmoothCurve;
pub use ellipse::Ellipse;
pub use freehand::FreehandStroke;
pub use line::Line;
pub use rectangle::Rectangle;
pub use ruler::Ruler;
pub use stamp::{ComponentStamp, StampKind};
pub use table::{Table, parse_cell_key};
pub use text::Text;

use kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as _;
use uuid::Uuid;

/// Unique identifier for elements, stable for the element's lifetime.
pub type ElementId = Uuid;

/// Fixed pixel tolerance for line/path hit tests.
pub const HIT_TOLERANCE: f64 = 10.0;

/// Serializable color representation (RGBA8), carried as a hex string in
/// snapshots so colors round-trip the way the host hands them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    /// Default ink color (slate-900).
    pub const INK: Self = Self::new(0x1e, 0x29, 0x3b, 255);
    /// Light ink used on dark backgrounds (slate-50).
    pub const PAPER: Self = Self::new(0xf8, 0xfa, 0xfc, 255);
    /// Measurement red used by the ruler tool.
    pub const RULER_RED: Self = Self::new(0xef, 0x44, 0x44, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parse a `#rgb`, `#rrggbb` or `#rrggbbaa` hex string, or one of the
    /// color words the snapshot format allows.
    pub fn from_hex(s: &str) -> Option<Self> {
        match s {
            "transparent" | "none" => return Some(Self::transparent()),
            "black" => return Some(Self::black()),
            "white" => return Some(Self::white()),
            _ => {}
        }
        let hex = s.strip_prefix('#')?;
        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        match hex.len() {
            3 => {
                let r = byte(0..1)? * 17;
                let g = byte(1..2)? * 17;
                let b = byte(2..3)? * 17;
                Some(Self::new(r, g, b, 255))
            }
            6 => Some(Self::new(byte(0..2)?, byte(2..4)?, byte(4..6)?, 255)),
            8 => Some(Self::new(byte(0..2)?, byte(2..4)?, byte(4..6)?, byte(6..8)?)),
            _ => None,
        }
    }

    /// Format as the snapshot hex string.
    pub fn to_hex(&self) -> String {
        if self.is_transparent() {
            "transparent".to_string()
        } else if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(c: SerializableColor) -> Self {
        Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl Serialize for SerializableColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SerializableColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).ok_or_else(|| D::Error::custom(format!("invalid color: {s:?}")))
    }
}

/// Normalize a signed-size box to a well-formed rect. The sign of
/// `width`/`height` encodes drag direction and is preserved on the element
/// itself; normalization happens only here, at render/hit-test time.
pub fn normalized_rect(origin: Point, width: f64, height: f64) -> Rect {
    let x0 = if width < 0.0 { origin.x + width } else { origin.x };
    let y0 = if height < 0.0 { origin.y + height } else { origin.y };
    Rect::new(x0, y0, x0 + width.abs(), y0 + height.abs())
}

/// Bounding box of a point list translated by `origin`. `None` when the
/// list is empty.
pub fn points_bounds(origin: Point, points: &[Point]) -> Option<Rect> {
    let first = points.first()?;
    let mut rect = Rect::from_points(
        Point::new(first.x + origin.x, first.y + origin.y),
        Point::new(first.x + origin.x, first.y + origin.y),
    );
    for p in &points[1..] {
        rect = rect.union_pt(Point::new(p.x + origin.x, p.y + origin.y));
    }
    Some(rect)
}

pub(crate) fn origin_is_zero(p: &Point) -> bool {
    p.x == 0.0 && p.y == 0.0
}

/// Serde adapter storing `Vec<Point>` as a flat alternating x,y list, the
/// snapshot wire form for path-like elements.
pub(crate) mod flat_points {
    use kurbo::Point;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(points: &[Point], serializer: S) -> Result<S::Ok, S::Error> {
        let flat: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();
        flat.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Point>, D::Error> {
        let flat = Vec::<f64>::deserialize(deserializer)?;
        if flat.len() % 2 != 0 {
            return Err(serde::de::Error::custom("odd number of path coordinates"));
        }
        Ok(flat
            .chunks_exact(2)
            .map(|xy| Point::new(xy[0], xy[1]))
            .collect())
    }
}

/// One drawable unit. The variant tag and only the attributes relevant to
/// that variant appear in the serialized snapshot; absent attributes
/// round-trip as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Element {
    FreehandStroke(FreehandStroke),
    SmoothCurve(SmoothCurve),
    Line(Line),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    ComponentStamp(ComponentStamp),
    Ruler(Ruler),
    Text(Text),
    Table(Table),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::FreehandStroke(e) => e.id,
            Element::SmoothCurve(e) => e.id,
            Element::Line(e) => e.id,
            Element::Rectangle(e) => e.id,
            Element::Ellipse(e) => e.id,
            Element::ComponentStamp(e) => e.id,
            Element::Ruler(e) => e.id,
            Element::Text(e) => e.id,
            Element::Table(e) => e.id,
        }
    }

    /// World-space anchor. For path-like variants this is a translation
    /// applied to the point list, not a corner.
    pub fn origin(&self) -> Point {
        match self {
            Element::FreehandStroke(e) => e.origin,
            Element::SmoothCurve(e) => e.origin,
            Element::Line(e) => e.origin,
            Element::Rectangle(e) => e.origin,
            Element::Ellipse(e) => e.origin,
            Element::ComponentStamp(e) => e.origin,
            Element::Ruler(e) => e.origin,
            Element::Text(e) => e.origin,
            Element::Table(e) => e.origin,
        }
    }

    pub fn set_origin(&mut self, origin: Point) {
        match self {
            Element::FreehandStroke(e) => e.origin = origin,
            Element::SmoothCurve(e) => e.origin = origin,
            Element::Line(e) => e.origin = origin,
            Element::Rectangle(e) => e.origin = origin,
            Element::Ellipse(e) => e.origin = origin,
            Element::ComponentStamp(e) => e.origin = origin,
            Element::Ruler(e) => e.origin = origin,
            Element::Text(e) => e.origin = origin,
            Element::Table(e) => e.origin = origin,
        }
    }

    /// Whether a world point falls inside this element's hit region.
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Element::FreehandStroke(e) => e.contains(point),
            Element::SmoothCurve(e) => e.contains(point),
            Element::Line(e) => e.contains(point),
            Element::Rectangle(e) => e.contains(point),
            Element::Ellipse(e) => e.contains(point),
            Element::ComponentStamp(e) => e.contains(point),
            Element::Ruler(e) => e.contains(point),
            Element::Text(e) => e.contains(point),
            Element::Table(e) => e.contains(point),
        }
    }
}

/// Walk the element sequence back-to-front (last drawn first) and return the
/// first element whose region contains the query point.
pub fn hit_test(elements: &[Element], point: Point) -> Option<ElementId> {
    elements
        .iter()
        .rev()
        .find(|el| el.contains(point))
        .map(Element::id)
}
