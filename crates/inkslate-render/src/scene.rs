//! Scene building: document state in, draw list out.

use crate::primitives::{Primitive, Scene, TextAnchor, TextRun};
use crate::stamps::{self, GLYPH_EXTENT};
use crate::theme::Theme;
use inkslate_core::Editor;
use inkslate_core::elements::{
    ComponentStamp, Element, Ellipse, FreehandStroke, Line, Rectangle, Ruler, SmoothCurve, Table,
    Text as TextElement, parse_cell_key,
};
use kurbo::{Affine, BezPath, Cap, Circle, Join, Point, Rect, Shape, Size, Stroke, Vec2};
use peniko::Color;

/// Spacing of the background grid pattern, in screen pixels.
pub const GRID_SPACING: f64 = 20.0;

const CIRCLE_TOLERANCE: f64 = 0.1;
/// Pixels per inch for the ruler's imperial readout.
const PPI: f64 = 96.0;

/// Reduce the whole editor state for one frame: background, grid, the
/// committed document with any drag stand-in substituted, and the
/// in-progress draw preview on top.
pub fn build_scene(editor: &Editor, theme: Theme, viewport: Size) -> Scene {
    let mut items = Vec::new();
    let dragged = editor.dragged();
    for element in editor.elements() {
        match dragged {
            Some(preview) if preview.id() == element.id() => {
                render_element(preview, theme, &mut items)
            }
            _ => render_element(element, theme, &mut items),
        }
    }
    if let Some(preview) = editor.draw_preview() {
        render_element(preview, theme, &mut items);
    }
    Scene {
        background: theme.canvas(),
        underlay: grid(viewport, theme),
        transform: Affine::translate(editor.camera().offset),
        items,
    }
}

/// Screen-fixed grid lines covering the viewport.
fn grid(viewport: Size, theme: Theme) -> Vec<Primitive> {
    let mut path = BezPath::new();
    let mut x = 0.0;
    while x <= viewport.width {
        path.move_to((x, 0.0));
        path.line_to((x, viewport.height));
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y <= viewport.height {
        path.move_to((0.0, y));
        path.line_to((viewport.width, y));
        y += GRID_SPACING;
    }
    vec![Primitive::Stroke {
        path,
        style: Stroke::new(1.0),
        color: theme.grid(),
    }]
}

fn render_element(element: &Element, theme: Theme, out: &mut Vec<Primitive>) {
    match element {
        Element::FreehandStroke(stroke) => render_freehand(stroke, theme, out),
        Element::SmoothCurve(curve) => render_curve(curve, theme, out),
        Element::Line(line) => render_line(line, theme, out),
        Element::Rectangle(rect) => render_rectangle(rect, theme, out),
        Element::Ellipse(ellipse) => render_ellipse(ellipse, theme, out),
        Element::ComponentStamp(stamp) => render_stamp(stamp, theme, out),
        Element::Ruler(ruler) => render_ruler(ruler, theme, out),
        Element::Text(text) => render_text(text, theme, out),
        Element::Table(table) => render_table(table, theme, out),
    }
}

fn round_stroke(width: f64) -> Stroke {
    Stroke::new(width).with_caps(Cap::Round).with_join(Join::Round)
}

fn render_freehand(stroke: &FreehandStroke, theme: Theme, out: &mut Vec<Primitive>) {
    let offset = stroke.origin.to_vec2();
    let mut path = BezPath::new();
    let mut points = stroke.points.iter().map(|p| *p + offset);
    let Some(first) = points.next() else { return };
    path.move_to(first);
    for p in points {
        path.line_to(p);
    }
    out.push(Primitive::Stroke {
        path,
        style: round_stroke(stroke.stroke_width),
        color: theme.ink(stroke.stroke),
    });
}

fn render_curve(curve: &SmoothCurve, theme: Theme, out: &mut Vec<Primitive>) {
    let offset = curve.origin.to_vec2();
    let translated: Vec<Point> = curve.points.iter().map(|p| *p + offset).collect();
    let path = smooth_curve_path(&translated);
    if path.elements().is_empty() {
        return;
    }
    out.push(Primitive::Stroke {
        path,
        style: round_stroke(curve.stroke_width),
        color: theme.ink(curve.stroke),
    });
}

/// Smooth a raw point sequence with quadratic segments: each interior
/// point is a control point and the curve passes through consecutive
/// midpoints, with a final straight run to the last sample.
pub fn smooth_curve_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };
    if rest.is_empty() {
        return path;
    }
    path.move_to(first);
    for window in points.windows(3).map(|w| (w[1], w[2])) {
        let (control, next) = window;
        path.quad_to(control, control.midpoint(next));
    }
    path.line_to(points[points.len() - 1]);
    path
}

fn render_line(line: &Line, theme: Theme, out: &mut Vec<Primitive>) {
    let mut path = BezPath::new();
    path.move_to(line.origin);
    path.line_to(line.end());
    out.push(Primitive::Stroke {
        path,
        style: round_stroke(line.stroke_width),
        color: theme.ink(line.stroke),
    });
}

fn render_rectangle(rect: &Rectangle, theme: Theme, out: &mut Vec<Primitive>) {
    let path = rect.bounds().to_path(CIRCLE_TOLERANCE);
    if let Some(fill) = rect.fill.filter(|f| !f.is_transparent()) {
        out.push(Primitive::Fill {
            path: path.clone(),
            color: fill.into(),
        });
    }
    out.push(Primitive::Stroke {
        path,
        style: round_stroke(rect.stroke_width),
        color: theme.ink(rect.stroke),
    });
}

fn render_ellipse(ellipse: &Ellipse, theme: Theme, out: &mut Vec<Primitive>) {
    // Drawn as the bounding circle, radius half the drag diagonal.
    let path = Circle::new(ellipse.center(), ellipse.radius()).to_path(CIRCLE_TOLERANCE);
    if let Some(fill) = ellipse.fill.filter(|f| !f.is_transparent()) {
        out.push(Primitive::Fill {
            path: path.clone(),
            color: fill.into(),
        });
    }
    out.push(Primitive::Stroke {
        path,
        style: round_stroke(ellipse.stroke_width),
        color: theme.ink(ellipse.stroke),
    });
}

fn render_stamp(stamp: &ComponentStamp, theme: Theme, out: &mut Vec<Primitive>) {
    let bounds = stamp.bounds();
    let sx = bounds.width() / GLYPH_EXTENT;
    let sy = bounds.height() / GLYPH_EXTENT;
    let place = Affine::translate(Vec2::new(bounds.x0, bounds.y0))
        * Affine::scale_non_uniform(sx, sy);
    let color = theme.ink(stamp.stroke);
    for (path, local_width) in stamps::glyph(stamp.kind) {
        // Non-uniform scale has no single stroke width; the mean keeps the
        // weight visually close to the authored glyph.
        let width = local_width * (sx.abs() + sy.abs()) / 2.0;
        out.push(Primitive::Stroke {
            path: place * path,
            style: round_stroke(width),
            color,
        });
    }
}

fn render_ruler(ruler: &Ruler, theme: Theme, out: &mut Vec<Primitive>) {
    // Measurement red throughout, independent of the theme.
    let red: Color = ruler.stroke.into();
    let mut segment = BezPath::new();
    segment.move_to(ruler.origin);
    segment.line_to(ruler.end());
    out.push(Primitive::Stroke {
        path: segment,
        style: Stroke::new(ruler.stroke_width).with_dashes(0.0, [4.0, 4.0]),
        color: red,
    });

    let mid = ruler.midpoint();
    let label_box = Rect::new(mid.x - 30.0, mid.y - 15.0, mid.x + 30.0, mid.y + 15.0)
        .to_rounded_rect(4.0)
        .to_path(CIRCLE_TOLERANCE);
    out.push(Primitive::Fill {
        path: label_box.clone(),
        color: theme.label_fill(),
    });
    out.push(Primitive::Stroke {
        path: label_box,
        style: Stroke::new(1.0),
        color: red,
    });
    out.push(Primitive::Text(TextRun {
        origin: Point::new(mid.x, mid.y + 4.0),
        content: ruler_label(ruler.measured_distance.unwrap_or_else(|| ruler.measure())),
        size: 11.0,
        color: red,
        anchor: TextAnchor::Middle,
        bold: true,
    }));
}

/// Label text: whole pixels and hundredths of an inch at 96 ppi.
pub fn ruler_label(distance: f64) -> String {
    let px = distance.round();
    format!("{px}px / {:.2}\"", px / PPI)
}

fn render_text(text: &TextElement, theme: Theme, out: &mut Vec<Primitive>) {
    out.push(Primitive::Text(TextRun {
        origin: text.origin,
        content: text.text.clone(),
        size: text.font_size,
        color: theme.ink(text.stroke),
        anchor: TextAnchor::Start,
        bold: false,
    }));
}

fn render_table(table: &Table, theme: Theme, out: &mut Vec<Primitive>) {
    let bounds = table.bounds();
    out.push(Primitive::Fill {
        path: bounds.to_path(CIRCLE_TOLERANCE),
        color: theme.table_fill(),
    });

    let cell_w = bounds.width() / f64::from(table.cols);
    let cell_h = bounds.height() / f64::from(table.rows);
    let mut lines = BezPath::new();
    for row in 0..=table.rows {
        let y = bounds.y0 + f64::from(row) * cell_h;
        lines.move_to((bounds.x0, y));
        lines.line_to((bounds.x1, y));
    }
    for col in 0..=table.cols {
        let x = bounds.x0 + f64::from(col) * cell_w;
        lines.move_to((x, bounds.y0));
        lines.line_to((x, bounds.y1));
    }
    out.push(Primitive::Stroke {
        path: lines,
        style: Stroke::new(table.stroke_width),
        color: theme.ink(table.stroke),
    });

    for (key, value) in &table.cells {
        if value.is_empty() {
            continue;
        }
        let Some((row, col)) = parse_cell_key(key) else {
            continue;
        };
        if row >= table.rows || col >= table.cols {
            continue;
        }
        let cell = table.cell_rect(row, col);
        out.push(Primitive::Text(TextRun {
            origin: Point::new(cell.center().x, cell.center().y + 4.0),
            content: value.clone(),
            size: 12.0,
            color: theme.cell_text(),
            anchor: TextAnchor::Middle,
            bold: false,
        }));
    }
}
