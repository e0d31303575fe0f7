//! Component stamp glyph geometry.
//!
//! Glyphs are authored in a fixed 100x100 local space and scaled
//! non-uniformly into the stamp's box at scene-build time, so a stretched
//! stamp stretches its symbol with it.

use inkslate_core::StampKind;
use kurbo::{Arc, BezPath, Circle, Point, Shape, SvgArc, Vec2};

/// Side length of the glyph authoring space.
pub const GLYPH_EXTENT: f64 = 100.0;

const ARC_TOLERANCE: f64 = 0.1;

/// Stroke paths for a stamp symbol, each with its local stroke width.
/// Widths are relative to the 100x100 space and scale with the glyph.
pub fn glyph(kind: StampKind) -> Vec<(BezPath, f64)> {
    match kind {
        StampKind::And => vec![(and_gate(), 5.0)],
        StampKind::Or => vec![(or_gate(), 5.0)],
        StampKind::Not => vec![(not_gate(), 5.0)],
        StampKind::Resistor => vec![(
            polyline(&[
                (0.0, 50.0),
                (10.0, 50.0),
                (20.0, 20.0),
                (40.0, 80.0),
                (60.0, 20.0),
                (80.0, 80.0),
                (90.0, 50.0),
                (100.0, 50.0),
            ]),
            5.0,
        )],
        StampKind::Capacitor => vec![(
            segments(&[
                ((40.0, 0.0), (40.0, 100.0)),
                ((60.0, 0.0), (60.0, 100.0)),
                ((0.0, 50.0), (40.0, 50.0)),
                ((60.0, 50.0), (100.0, 50.0)),
            ]),
            5.0,
        )],
        StampKind::Battery => vec![
            // Plates are drawn heavier than the leads.
            (
                segments(&[((40.0, 20.0), (40.0, 80.0)), ((60.0, 0.0), (60.0, 100.0))]),
                8.0,
            ),
            (
                segments(&[((0.0, 50.0), (40.0, 50.0)), ((60.0, 50.0), (100.0, 50.0))]),
                5.0,
            ),
        ],
        StampKind::Ground => vec![(
            segments(&[
                ((50.0, 0.0), (50.0, 50.0)),
                ((20.0, 50.0), (80.0, 50.0)),
                ((30.0, 70.0), (70.0, 70.0)),
                ((40.0, 90.0), (60.0, 90.0)),
            ]),
            5.0,
        )],
    }
}

/// Flat back, elliptical-arc nose.
fn and_gate() -> BezPath {
    let mut path = BezPath::new();
    path.move_to((10.0, 10.0));
    path.line_to((10.0, 90.0));
    path.line_to((40.0, 90.0));
    let nose = SvgArc {
        from: Point::new(40.0, 90.0),
        to: Point::new(40.0, 10.0),
        radii: Vec2::new(50.0, 40.0),
        x_rotation: 0.0,
        large_arc: false,
        sweep: false,
    };
    match Arc::from_svg_arc(&nose) {
        Some(arc) => path.extend(arc.append_iter(ARC_TOLERANCE)),
        None => path.line_to((40.0, 10.0)),
    }
    path.close_path();
    path
}

/// Two quadratic sweeps meeting at the output point.
fn or_gate() -> BezPath {
    let mut path = BezPath::new();
    path.move_to((10.0, 10.0));
    path.line_to((10.0, 90.0));
    path.quad_to((40.0, 90.0), (90.0, 50.0));
    path.quad_to((40.0, 10.0), (10.0, 10.0));
    path
}

/// Inverter triangle with a bubble on the output.
fn not_gate() -> BezPath {
    let mut path = BezPath::new();
    path.move_to((10.0, 10.0));
    path.line_to((10.0, 90.0));
    path.line_to((80.0, 50.0));
    path.close_path();
    path.extend(Circle::new((90.0, 50.0), 8.0).to_path(ARC_TOLERANCE));
    path
}

fn polyline(points: &[(f64, f64)]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(&first) = iter.next() {
        path.move_to(first);
        for &p in iter {
            path.line_to(p);
        }
    }
    path
}

fn segments(lines: &[((f64, f64), (f64, f64))]) -> BezPath {
    let mut path = BezPath::new();
    for &(from, to) in lines {
        path.move_to(from);
        path.line_to(to);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    fn subpaths(path: &BezPath) -> usize {
        path.elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count()
    }

    #[test]
    fn every_kind_has_a_glyph() {
        for &kind in StampKind::all() {
            let parts = glyph(kind);
            assert!(!parts.is_empty(), "{kind:?} has no geometry");
            for (path, width) in &parts {
                assert!(!path.elements().is_empty());
                assert!(*width > 0.0);
            }
        }
    }

    #[test]
    fn battery_plates_are_heavier_than_leads() {
        let parts = glyph(StampKind::Battery);
        let widths: Vec<f64> = parts.iter().map(|(_, w)| *w).collect();
        assert_eq!(widths, vec![8.0, 5.0]);
    }

    #[test]
    fn resistor_zigzag_spans_the_glyph_space() {
        let parts = glyph(StampKind::Resistor);
        let bounds = parts[0].0.bounding_box();
        assert_eq!(bounds.x0, 0.0);
        assert_eq!(bounds.x1, GLYPH_EXTENT);
    }

    #[test]
    fn ground_is_four_bars() {
        let parts = glyph(StampKind::Ground);
        assert_eq!(subpaths(&parts[0].0), 4);
    }

    #[test]
    fn not_gate_carries_its_bubble() {
        let parts = glyph(StampKind::Not);
        assert!(subpaths(&parts[0].0) >= 2);
    }
}
