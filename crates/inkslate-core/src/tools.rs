//! Tool system for the diagram canvas.

use crate::elements::{
    ComponentStamp, Element, Ellipse, FreehandStroke, Line, Rectangle, Ruler, SerializableColor,
    SmoothCurve, StampKind, Table,
};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A click-sized release (both |width| and |height| under this threshold)
/// substitutes a default-size shape instead of committing a degenerate one.
pub const CLICK_SIZE_THRESHOLD: f64 = 5.0;
/// Default edge length for shapes committed from a bare click.
pub const DEFAULT_SHAPE_SIZE: f64 = 50.0;
/// Default dimensions for a table committed from a bare click.
pub const DEFAULT_TABLE_SIZE: (f64, f64) = (150.0, 100.0);

/// Available tools. The active tool persists across gestures; it changes
/// only through explicit activation, never from pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    Select,
    Pan,
    #[default]
    FreehandPen,
    SmoothCurve,
    Line,
    Rectangle,
    Ellipse,
    Ruler,
    Text,
    Table,
    ComponentStamp,
    Eraser,
}

impl ToolKind {
    /// Tools whose gesture builds a new element.
    pub fn is_drawing(self) -> bool {
        matches!(
            self,
            ToolKind::FreehandPen
                | ToolKind::SmoothCurve
                | ToolKind::Line
                | ToolKind::Rectangle
                | ToolKind::Ellipse
                | ToolKind::Ruler
                | ToolKind::Table
                | ToolKind::ComponentStamp
        )
    }
}

/// Row/column counts for the next table element. Supplied explicitly at
/// tool activation; the engine never prompts for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub rows: u32,
    pub cols: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { rows: 3, cols: 3 }
    }
}

/// Manages the current tool and the element being drawn.
#[derive(Debug, Clone)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Stamp placed by the component-stamp tool.
    pub selected_stamp: StampKind,
    /// Dimensions seeding the next table element.
    pub table_config: TableConfig,
    /// Stroke color applied to new elements.
    pub stroke_color: SerializableColor,
    /// Element under construction during a draw gesture.
    in_progress: Option<Element>,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self {
            current_tool: ToolKind::default(),
            selected_stamp: StampKind::And,
            table_config: TableConfig::default(),
            stroke_color: SerializableColor::INK,
            in_progress: None,
        }
    }
}

impl ToolManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tools, discarding any in-progress element.
    pub fn set_tool(&mut self, tool: ToolKind) {
        log::debug!("tool -> {tool:?}");
        self.current_tool = tool;
        self.in_progress = None;
    }

    /// Activate the table tool with explicit dimensions. `None` means the
    /// configuration step was abandoned: the current tool is left
    /// unchanged.
    pub fn activate_table(&mut self, config: Option<TableConfig>) {
        if let Some(config) = config {
            self.table_config = TableConfig {
                rows: config.rows.max(1),
                cols: config.cols.max(1),
            };
            self.set_tool(ToolKind::Table);
        }
    }

    /// Activate the component-stamp tool with the given symbol.
    pub fn activate_stamp(&mut self, kind: StampKind) {
        self.selected_stamp = kind;
        self.set_tool(ToolKind::ComponentStamp);
    }

    /// Begin a draw gesture at a world point. Returns whether an element
    /// was started (non-drawing tools start nothing here).
    pub fn begin(&mut self, point: Point) -> bool {
        let stroke = self.stroke_color;
        self.in_progress = match self.current_tool {
            ToolKind::FreehandPen => Some(Element::FreehandStroke(FreehandStroke::new(point, stroke))),
            ToolKind::SmoothCurve => Some(Element::SmoothCurve(SmoothCurve::new(point, stroke))),
            ToolKind::Line => Some(Element::Line(Line::new(point, stroke))),
            ToolKind::Rectangle => Some(Element::Rectangle(Rectangle::new(point, stroke))),
            ToolKind::Ellipse => Some(Element::Ellipse(Ellipse::new(point, stroke))),
            ToolKind::Ruler => Some(Element::Ruler(Ruler::new(point))),
            ToolKind::Table => Some(Element::Table(Table::new(
                point,
                self.table_config.rows,
                self.table_config.cols,
                stroke,
            ))),
            ToolKind::ComponentStamp => Some(Element::ComponentStamp(ComponentStamp::new(
                point,
                self.selected_stamp,
                stroke,
            ))),
            ToolKind::Select | ToolKind::Pan | ToolKind::Text | ToolKind::Eraser => None,
        };
        self.in_progress.is_some()
    }

    /// Feed a pointer sample into the in-progress element. Path tools
    /// append every sample with no decimation; box tools track the signed
    /// drag deltas; the ruler recomputes its measurement each sample.
    pub fn update(&mut self, point: Point) {
        let Some(element) = &mut self.in_progress else {
            return;
        };
        match element {
            Element::FreehandStroke(stroke) => stroke.push_point(point),
            Element::SmoothCurve(curve) => curve.push_point(point),
            Element::Line(line) => {
                line.width = point.x - line.origin.x;
                line.height = point.y - line.origin.y;
            }
            Element::Rectangle(rect) => {
                rect.width = point.x - rect.origin.x;
                rect.height = point.y - rect.origin.y;
            }
            Element::Ellipse(ellipse) => {
                ellipse.width = point.x - ellipse.origin.x;
                ellipse.height = point.y - ellipse.origin.y;
            }
            Element::Ruler(ruler) => {
                ruler.width = point.x - ruler.origin.x;
                ruler.height = point.y - ruler.origin.y;
                ruler.measured_distance = Some(ruler.measure());
            }
            Element::Table(table) => {
                table.width = point.x - table.origin.x;
                table.height = point.y - table.origin.y;
            }
            Element::ComponentStamp(stamp) => {
                stamp.width = point.x - stamp.origin.x;
                stamp.height = point.y - stamp.origin.y;
            }
            Element::Text(_) => {}
        }
    }

    /// Finish the gesture and take the completed element. Box-like shapes
    /// released from a bare click are substituted with a default size so a
    /// stray click never commits an invisible shape; path strokes commit
    /// as-is, even a single point.
    pub fn end(&mut self, point: Point) -> Option<Element> {
        self.update(point);
        let mut element = self.in_progress.take()?;
        match &mut element {
            Element::Line(line) if is_click(line.width, line.height) => {
                line.width = DEFAULT_SHAPE_SIZE;
                line.height = DEFAULT_SHAPE_SIZE;
            }
            Element::Rectangle(rect) if is_click(rect.width, rect.height) => {
                rect.width = DEFAULT_SHAPE_SIZE;
                rect.height = DEFAULT_SHAPE_SIZE;
            }
            Element::Ellipse(ellipse) if is_click(ellipse.width, ellipse.height) => {
                ellipse.width = DEFAULT_SHAPE_SIZE;
                ellipse.height = DEFAULT_SHAPE_SIZE;
            }
            Element::Ruler(ruler) if is_click(ruler.width, ruler.height) => {
                ruler.width = DEFAULT_SHAPE_SIZE;
                ruler.height = DEFAULT_SHAPE_SIZE;
                ruler.measured_distance = Some(ruler.measure());
            }
            Element::ComponentStamp(stamp) if is_click(stamp.width, stamp.height) => {
                stamp.width = DEFAULT_SHAPE_SIZE;
                stamp.height = DEFAULT_SHAPE_SIZE;
            }
            Element::Table(table) if is_click(table.width, table.height) => {
                table.width = DEFAULT_TABLE_SIZE.0;
                table.height = DEFAULT_TABLE_SIZE.1;
            }
            _ => {}
        }
        Some(element)
    }

    /// Abandon the gesture, discarding the in-progress element.
    pub fn cancel(&mut self) {
        self.in_progress = None;
    }

    /// Element being drawn, for rendering the in-progress preview.
    pub fn in_progress(&self) -> Option<&Element> {
        self.in_progress.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.in_progress.is_some()
    }
}

fn is_click(width: f64, height: f64) -> bool {
    width.abs() < CLICK_SIZE_THRESHOLD && height.abs() < CLICK_SIZE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_sized_rectangle_gets_the_default_size() {
        let mut tools = ToolManager::new();
        tools.set_tool(ToolKind::Rectangle);
        assert!(tools.begin(Point::new(10.0, 10.0)));
        tools.update(Point::new(12.0, 11.0));
        let element = tools.end(Point::new(12.0, 11.0)).unwrap();
        match element {
            Element::Rectangle(rect) => {
                assert_eq!(rect.width, DEFAULT_SHAPE_SIZE);
                assert_eq!(rect.height, DEFAULT_SHAPE_SIZE);
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
    }

    #[test]
    fn dragged_rectangle_keeps_its_signed_size() {
        let mut tools = ToolManager::new();
        tools.set_tool(ToolKind::Rectangle);
        tools.begin(Point::new(100.0, 100.0));
        let element = tools.end(Point::new(40.0, 70.0)).unwrap();
        match element {
            Element::Rectangle(rect) => {
                assert_eq!(rect.width, -60.0);
                assert_eq!(rect.height, -30.0);
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
    }

    #[test]
    fn click_sized_table_gets_table_defaults() {
        let mut tools = ToolManager::new();
        tools.activate_table(Some(TableConfig { rows: 2, cols: 4 }));
        tools.begin(Point::new(0.0, 0.0));
        let element = tools.end(Point::new(1.0, 1.0)).unwrap();
        match element {
            Element::Table(table) => {
                assert_eq!((table.width, table.height), DEFAULT_TABLE_SIZE);
                assert_eq!((table.rows, table.cols), (2, 4));
                assert!(table.cells.is_empty());
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn abandoned_table_activation_keeps_the_current_tool() {
        let mut tools = ToolManager::new();
        tools.set_tool(ToolKind::Ellipse);
        tools.activate_table(None);
        assert_eq!(tools.current_tool, ToolKind::Ellipse);
        tools.activate_table(Some(TableConfig::default()));
        assert_eq!(tools.current_tool, ToolKind::Table);
    }

    #[test]
    fn freehand_accumulates_every_sample() {
        let mut tools = ToolManager::new();
        tools.set_tool(ToolKind::FreehandPen);
        tools.begin(Point::new(0.0, 0.0));
        for i in 1..=10 {
            tools.update(Point::new(f64::from(i), f64::from(i)));
        }
        let element = tools.end(Point::new(11.0, 11.0)).unwrap();
        match element {
            // begin + 10 moves + the release sample
            Element::FreehandStroke(stroke) => assert_eq!(stroke.points.len(), 12),
            other => panic!("expected freehand stroke, got {other:?}"),
        }
    }

    #[test]
    fn single_point_stroke_commits_as_is() {
        let mut tools = ToolManager::new();
        tools.set_tool(ToolKind::SmoothCurve);
        tools.begin(Point::new(5.0, 5.0));
        let element = tools.end(Point::new(5.0, 5.0)).unwrap();
        match element {
            Element::SmoothCurve(curve) => assert_eq!(curve.points.len(), 2),
            other => panic!("expected smooth curve, got {other:?}"),
        }
    }

    #[test]
    fn ruler_measures_while_dragging() {
        let mut tools = ToolManager::new();
        tools.set_tool(ToolKind::Ruler);
        tools.begin(Point::new(0.0, 0.0));
        tools.update(Point::new(30.0, 40.0));
        match tools.in_progress() {
            Some(Element::Ruler(ruler)) => {
                assert!((ruler.measured_distance.unwrap() - 50.0).abs() < f64::EPSILON);
            }
            other => panic!("expected ruler, got {other:?}"),
        }
    }

    #[test]
    fn ruler_click_remeasures_the_default_segment() {
        let mut tools = ToolManager::new();
        tools.set_tool(ToolKind::Ruler);
        tools.begin(Point::new(0.0, 0.0));
        let element = tools.end(Point::new(1.0, 1.0)).unwrap();
        match element {
            Element::Ruler(ruler) => {
                let expected = DEFAULT_SHAPE_SIZE * std::f64::consts::SQRT_2;
                assert!((ruler.measured_distance.unwrap() - expected).abs() < 1e-9);
            }
            other => panic!("expected ruler, got {other:?}"),
        }
    }

    #[test]
    fn tool_switch_discards_in_progress_work() {
        let mut tools = ToolManager::new();
        tools.set_tool(ToolKind::Line);
        tools.begin(Point::ZERO);
        assert!(tools.is_active());
        tools.set_tool(ToolKind::Select);
        assert!(!tools.is_active());
        assert!(tools.end(Point::ZERO).is_none());
    }

    #[test]
    fn stamp_activation_selects_the_symbol() {
        let mut tools = ToolManager::new();
        tools.activate_stamp(StampKind::Resistor);
        assert_eq!(tools.current_tool, ToolKind::ComponentStamp);
        tools.begin(Point::ZERO);
        match tools.in_progress() {
            Some(Element::ComponentStamp(stamp)) => assert_eq!(stamp.kind, StampKind::Resistor),
            other => panic!("expected stamp, got {other:?}"),
        }
    }
}
