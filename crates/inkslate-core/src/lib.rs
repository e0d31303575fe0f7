//! Inkslate Core Library
//!
//! Platform-agnostic element model, history, and interaction logic for the
//! Inkslate diagram editor.

pub mod camera;
pub mod editor;
pub mod elements;
pub mod history;
pub mod overlay;
pub mod tools;

pub use camera::Camera;
pub use editor::{ChangeHandler, DRAG_THRESHOLD, Editor, SnapshotError};
pub use elements::{Element, ElementId, HIT_TOLERANCE, SerializableColor, StampKind, hit_test};
pub use history::History;
pub use overlay::{InlineEdit, InlineEditKind};
pub use tools::{TableConfig, ToolKind, ToolManager};
