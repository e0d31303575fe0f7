//! Table grid with per-cell text.

use super::{ElementId, SerializableColor, normalized_rect};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A uniform grid of `rows × cols` cells. Cell text is sparse: an absent
/// `"row-col"` key means an empty cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: ElementId,
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    #[serde(rename = "tableRows")]
    pub rows: u32,
    #[serde(rename = "tableCols")]
    pub cols: u32,
    #[serde(rename = "cellText", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cells: BTreeMap<String, String>,
    pub stroke: SerializableColor,
    pub stroke_width: f64,
}

impl Table {
    pub fn new(origin: Point, rows: u32, cols: u32, stroke: SerializableColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            width: 0.0,
            height: 0.0,
            rows: rows.max(1),
            cols: cols.max(1),
            cells: BTreeMap::new(),
            stroke,
            stroke_width: 1.0,
        }
    }

    pub fn bounds(&self) -> Rect {
        normalized_rect(self.origin, self.width, self.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    fn cell_size(&self) -> (f64, f64) {
        let bounds = self.bounds();
        (
            bounds.width() / self.cols as f64,
            bounds.height() / self.rows as f64,
        )
    }

    /// Resolve a world point already known to be near the table into a
    /// `(row, col)` address: relative offset divided by uniform cell size,
    /// floored and clamped to the grid. Points outside the normalized box
    /// resolve to nothing.
    pub fn cell_at(&self, point: Point) -> Option<(u32, u32)> {
        let bounds = self.bounds();
        let rel_x = point.x - bounds.x0;
        let rel_y = point.y - bounds.y0;
        if !(rel_x >= 0.0 && rel_x <= bounds.width() && rel_y >= 0.0 && rel_y <= bounds.height()) {
            return None;
        }
        let (cell_w, cell_h) = self.cell_size();
        let col = ((rel_x / cell_w).floor() as i64).clamp(0, i64::from(self.cols) - 1) as u32;
        let row = ((rel_y / cell_h).floor() as i64).clamp(0, i64::from(self.rows) - 1) as u32;
        Some((row, col))
    }

    /// World-space rect of one cell, for overlay placement.
    pub fn cell_rect(&self, row: u32, col: u32) -> Rect {
        let bounds = self.bounds();
        let (cell_w, cell_h) = self.cell_size();
        let x0 = bounds.x0 + f64::from(col) * cell_w;
        let y0 = bounds.y0 + f64::from(row) * cell_h;
        Rect::new(x0, y0, x0 + cell_w, y0 + cell_h)
    }

    pub fn cell_key(row: u32, col: u32) -> String {
        format!("{row}-{col}")
    }

    /// Text stored at a cell; empty when the key is absent.
    pub fn cell_text(&self, key: &str) -> &str {
        self.cells.get(key).map(String::as_str).unwrap_or("")
    }

    /// Overwrite a cell. Empty text still overwrites, clearing any
    /// previous content.
    pub fn set_cell(&mut self, key: String, text: String) {
        self.cells.insert(key, text);
    }
}

/// Parse a `"row-col"` cell key back into indices.
pub fn parse_cell_key(key: &str) -> Option<(u32, u32)> {
    let (row, col) = key.split_once('-')?;
    Some((row.parse().ok()?, col.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_150x90() -> Table {
        let mut table = Table::new(Point::new(0.0, 0.0), 3, 3, SerializableColor::INK);
        table.width = 150.0;
        table.height = 90.0;
        table
    }

    #[test]
    fn cell_addressing_matches_uniform_grid() {
        let table = table_150x90();
        assert_eq!(table.cell_at(Point::new(149.0, 89.0)), Some((2, 2)));
        assert_eq!(table.cell_at(Point::new(0.0, 0.0)), Some((0, 0)));
        assert_eq!(table.cell_at(Point::new(50.0, 30.0)), Some((1, 1)));
        assert_eq!(table.cell_at(Point::new(200.0, 30.0)), None);
    }

    #[test]
    fn boundary_clicks_clamp_to_last_cell() {
        let table = table_150x90();
        // The far corner divides exactly onto the grid edge; clamp keeps it
        // addressable.
        assert_eq!(table.cell_at(Point::new(150.0, 90.0)), Some((2, 2)));
    }

    #[test]
    fn cell_addressing_survives_reverse_drag() {
        let mut table = Table::new(Point::new(150.0, 90.0), 3, 3, SerializableColor::INK);
        table.width = -150.0;
        table.height = -90.0;
        assert_eq!(table.cell_at(Point::new(50.0, 30.0)), Some((1, 1)));
    }

    #[test]
    fn cell_rects_tile_the_box() {
        let table = table_150x90();
        assert_eq!(table.cell_rect(0, 0), Rect::new(0.0, 0.0, 50.0, 30.0));
        assert_eq!(table.cell_rect(2, 2), Rect::new(100.0, 60.0, 150.0, 90.0));
    }

    #[test]
    fn empty_string_overwrites_a_cell() {
        let mut table = table_150x90();
        table.set_cell(Table::cell_key(1, 1), "42".into());
        assert_eq!(table.cell_text("1-1"), "42");
        table.set_cell(Table::cell_key(1, 1), String::new());
        assert_eq!(table.cell_text("1-1"), "");
    }

    #[test]
    fn cell_keys_parse_back() {
        assert_eq!(parse_cell_key("2-0"), Some((2, 0)));
        assert_eq!(parse_cell_key("x-0"), None);
        assert_eq!(parse_cell_key("nope"), None);
    }

    #[test]
    fn degenerate_table_never_panics() {
        let table = Table::new(Point::ZERO, 3, 3, SerializableColor::INK);
        assert_eq!(table.cell_at(Point::new(1.0, 1.0)), None);
        // Exactly on the collapsed box: division yields NaN, which casts to
        // the first cell rather than crashing.
        assert_eq!(table.cell_at(Point::ZERO), Some((0, 0)));
    }
}
