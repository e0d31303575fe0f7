//! Inline text-editing overlay.
//!
//! At most one overlay exists at a time; it is a transient and never part
//! of a committed snapshot. The [`Editor`](crate::editor::Editor) owns its
//! lifecycle and commit semantics.

use crate::camera::Camera;
use crate::elements::ElementId;
use kurbo::{Point, Rect, Size};

/// What an open overlay will write when committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineEditKind {
    /// A free-floating text label anchored at the pointer-down point.
    FreeText,
    /// Text for one cell of a table element.
    TableCell {
        element: ElementId,
        cell_key: String,
    },
}

/// A single transient text-input surface.
#[derive(Debug, Clone)]
pub struct InlineEdit {
    pub kind: InlineEditKind,
    /// World-space anchor: pointer-down point for free text, the cell's
    /// top-left corner for table cells.
    pub anchor: Point,
    /// Pixel dimensions of the edited region; set for table cells only.
    pub size: Option<Size>,
    /// Text being edited.
    pub text: String,
}

impl InlineEdit {
    /// Open an overlay for free text placement.
    pub fn free_text(anchor: Point) -> Self {
        Self {
            kind: InlineEditKind::FreeText,
            anchor,
            size: None,
            text: String::new(),
        }
    }

    /// Open an overlay over a table cell, prefilled with its current text.
    pub fn table_cell(element: ElementId, cell_key: String, cell: Rect, text: String) -> Self {
        Self {
            kind: InlineEditKind::TableCell { element, cell_key },
            anchor: cell.origin(),
            size: Some(cell.size()),
            text,
        }
    }

    /// Screen position of the anchor under the current pan, so the overlay
    /// visually tracks the shape underneath while the user pans.
    pub fn screen_anchor(&self, camera: &Camera) -> Point {
        camera.world_to_screen(self.anchor)
    }
}
