//! Backend-neutral draw list.
//!
//! Scene building reduces the document to filled paths, stroked paths and
//! text runs; a backend replays them in order with no knowledge of the
//! element model.

use kurbo::{Affine, BezPath, Point, Stroke};
use peniko::Color;

/// Horizontal alignment of a text run relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Origin is the start of the baseline.
    Start,
    /// Origin is the horizontal center of the baseline.
    Middle,
}

/// A single run of text.
#[derive(Debug, Clone)]
pub struct TextRun {
    pub origin: Point,
    pub content: String,
    pub size: f64,
    pub color: Color,
    pub anchor: TextAnchor,
    pub bold: bool,
}

/// One draw command.
#[derive(Debug, Clone)]
pub enum Primitive {
    Fill { path: BezPath, color: Color },
    Stroke {
        path: BezPath,
        style: Stroke,
        color: Color,
    },
    Text(TextRun),
}

/// A complete frame, replayed front to back.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Clear color for the frame.
    pub background: Color,
    /// Screen-space primitives under the document, i.e. the grid. Not
    /// affected by the pan transform.
    pub underlay: Vec<Primitive>,
    /// Pan translation applied to every item in `items`.
    pub transform: Affine,
    /// Document primitives in z-order.
    pub items: Vec<Primitive>,
}
