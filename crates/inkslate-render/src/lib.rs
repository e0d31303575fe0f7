//! Inkslate Render Library
//!
//! Theme-aware scene building for the Inkslate diagram editor. Reduces
//! editor state to a backend-neutral draw list of paths and text runs.

mod primitives;
pub mod scene;
pub mod stamps;
pub mod theme;

pub use primitives::{Primitive, Scene, TextAnchor, TextRun};
pub use scene::{GRID_SPACING, build_scene, ruler_label, smooth_curve_path};
pub use theme::Theme;
