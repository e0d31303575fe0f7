//! Editor facade: owns the document history, the camera, the tool system
//! and the inline-edit overlay, and drives all of them from a small
//! pointer-event protocol.
//!
//! The host feeds it client-relative screen coordinates; everything past
//! the camera transform works in world space. Exactly one gesture runs at
//! a time; a pointer-down arriving mid-gesture is ignored.

use crate::camera::Camera;
use crate::elements::{self, Element, ElementId, Table, Text as TextElement};
use crate::history::History;
use crate::overlay::{InlineEdit, InlineEditKind};
use crate::tools::{ToolKind, ToolManager};
use kurbo::{Point, Vec2};
use thiserror::Error;

/// Pointer travel beyond this distance turns a select press into a move
/// and an eraser press into a discarded drag.
pub const DRAG_THRESHOLD: f64 = 3.0;

/// Failure to parse a snapshot handed in from outside. The editor state is
/// untouched when this is returned.
#[derive(Debug, Error)]
#[error("invalid snapshot: {0}")]
pub struct SnapshotError(#[from] serde_json::Error);

/// Callback invoked with the serialized element list after every commit.
pub type ChangeHandler = Box<dyn FnMut(&str)>;

#[derive(Debug)]
struct DragState {
    id: ElementId,
    /// World point grabbed at pointer-down.
    grab: Point,
    origin_at_grab: Point,
    /// Moved copy shown in place of the committed element while dragging.
    preview: Element,
    moved: bool,
}

#[derive(Debug)]
enum Gesture {
    Idle,
    /// Panning; tracks the last screen point so deltas stay in screen
    /// space and pan speed is independent of the current offset.
    Pan { last: Point },
    Drag(DragState),
    Draw,
    Erase { target: ElementId, anchor: Point },
}

/// The drawing engine's single entry point.
pub struct Editor {
    history: History<Vec<Element>>,
    camera: Camera,
    tools: ToolManager,
    overlay: Option<InlineEdit>,
    gesture: Gesture,
    on_change: Option<ChangeHandler>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self {
            history: History::new(Vec::new()),
            camera: Camera::new(),
            tools: ToolManager::new(),
            overlay: None,
            gesture: Gesture::Idle,
            on_change: None,
        }
    }

    /// Build an editor from a serialized element list, e.g. a document
    /// loaded from the host's store.
    pub fn from_snapshot(json: &str) -> Result<Self, SnapshotError> {
        let mut editor = Self::new();
        editor.load_snapshot(json)?;
        Ok(editor)
    }

    /// Replace the document with a parsed snapshot, dropping all history.
    /// On parse failure the current document is left untouched.
    pub fn load_snapshot(&mut self, json: &str) -> Result<(), SnapshotError> {
        let elements: Vec<Element> = serde_json::from_str(json)?;
        log::debug!("loaded snapshot with {} elements", elements.len());
        self.history.reset(elements);
        self.overlay = None;
        self.gesture = Gesture::Idle;
        self.tools.cancel();
        self.emit();
        Ok(())
    }

    /// Serialize the committed element list.
    pub fn to_snapshot(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self.history.state())?)
    }

    /// Register a callback fired with the serialized document after every
    /// commit, so the host can persist continuously.
    pub fn set_on_change(&mut self, handler: ChangeHandler) {
        self.on_change = Some(handler);
    }

    /// Committed elements in z-order.
    pub fn elements(&self) -> &[Element] {
        self.history.state()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn tools(&self) -> &ToolManager {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolManager {
        &mut self.tools
    }

    /// Stroke color applied to elements created from now on.
    pub fn set_stroke_color(&mut self, color: crate::elements::SerializableColor) {
        self.tools.stroke_color = color;
    }

    pub fn overlay(&self) -> Option<&InlineEdit> {
        self.overlay.as_ref()
    }

    pub fn overlay_mut(&mut self) -> Option<&mut InlineEdit> {
        self.overlay.as_mut()
    }

    /// Element under construction by a drawing tool, for preview rendering.
    pub fn draw_preview(&self) -> Option<&Element> {
        self.tools.in_progress()
    }

    /// During a select-drag, the moved stand-in for the grabbed element.
    /// Renderers draw this instead of the committed element with the same
    /// id.
    pub fn dragged(&self) -> Option<&Element> {
        match &self.gesture {
            Gesture::Drag(drag) if drag.moved => Some(&drag.preview),
            _ => None,
        }
    }

    // ---- pointer protocol ----

    pub fn pointer_down(&mut self, screen: Point) {
        if self.overlay.is_some() {
            // A press with an open overlay commits it and is otherwise
            // swallowed; no shape is hit-tested or started.
            self.commit_overlay();
            return;
        }
        if !matches!(self.gesture, Gesture::Idle) {
            return;
        }
        let world = self.camera.screen_to_world(screen);
        match self.tools.current_tool {
            ToolKind::Pan => {
                self.gesture = Gesture::Pan { last: screen };
            }
            ToolKind::Select => {
                let topmost = self
                    .elements()
                    .iter()
                    .rev()
                    .find(|e| e.contains(world))
                    .cloned();
                if let Some(element) = topmost {
                    self.gesture = Gesture::Drag(DragState {
                        id: element.id(),
                        grab: world,
                        origin_at_grab: element.origin(),
                        preview: element,
                        moved: false,
                    });
                }
            }
            ToolKind::Text => {
                self.overlay = Some(InlineEdit::free_text(world));
            }
            ToolKind::Eraser => {
                if let Some(target) = elements::hit_test(self.elements(), world) {
                    self.gesture = Gesture::Erase {
                        target,
                        anchor: world,
                    };
                }
            }
            _ => {
                if self.tools.begin(world) {
                    self.gesture = Gesture::Draw;
                }
            }
        }
    }

    pub fn pointer_move(&mut self, screen: Point) {
        let world = self.camera.screen_to_world(screen);
        match &mut self.gesture {
            Gesture::Idle => {}
            Gesture::Pan { last } => {
                let delta = Vec2::new(screen.x - last.x, screen.y - last.y);
                *last = screen;
                self.camera.pan(delta);
            }
            Gesture::Drag(drag) => {
                let delta = world - drag.grab;
                if delta.hypot() > DRAG_THRESHOLD {
                    drag.moved = true;
                }
                if drag.moved {
                    drag.preview.set_origin(drag.origin_at_grab + delta);
                }
            }
            Gesture::Draw => self.tools.update(world),
            Gesture::Erase { .. } => {}
        }
    }

    pub fn pointer_up(&mut self, screen: Point) {
        let world = self.camera.screen_to_world(screen);
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Idle | Gesture::Pan { .. } => {}
            Gesture::Draw => {
                if let Some(element) = self.tools.end(world) {
                    let mut next = self.history.state().clone();
                    next.push(element);
                    self.commit(next);
                }
            }
            Gesture::Drag(drag) => {
                if drag.moved {
                    // The whole drag lands as one history entry.
                    let next = self
                        .history
                        .state()
                        .iter()
                        .map(|e| {
                            if e.id() == drag.id {
                                drag.preview.clone()
                            } else {
                                e.clone()
                            }
                        })
                        .collect();
                    self.commit(next);
                } else {
                    self.open_table_cell_overlay(drag.id, world);
                }
            }
            Gesture::Erase { target, anchor } => {
                if (world - anchor).hypot() <= DRAG_THRESHOLD {
                    let next: Vec<Element> = self
                        .history
                        .state()
                        .iter()
                        .filter(|e| e.id() != target)
                        .cloned()
                        .collect();
                    if next.len() != self.history.state().len() {
                        self.commit(next);
                    }
                }
            }
        }
    }

    /// Pointer left the canvas. Ends the gesture the same way a release
    /// would, at the last known position.
    pub fn pointer_leave(&mut self, screen: Point) {
        self.pointer_up(screen);
    }

    // ---- overlay ----

    /// Apply the open overlay's text and close it. Free text becomes a new
    /// text element unless it trims to nothing; table-cell text overwrites
    /// the addressed cell, empty text included.
    pub fn commit_overlay(&mut self) {
        let Some(edit) = self.overlay.take() else {
            return;
        };
        match edit.kind {
            InlineEditKind::FreeText => {
                if edit.text.trim().is_empty() {
                    return;
                }
                let text =
                    TextElement::new(edit.anchor, edit.text, self.tools.stroke_color);
                let mut next = self.history.state().clone();
                next.push(Element::Text(text));
                self.commit(next);
            }
            InlineEditKind::TableCell { element, cell_key } => {
                let mut next = self.history.state().clone();
                let Some(Element::Table(table)) =
                    next.iter_mut().find(|e| e.id() == element)
                else {
                    log::warn!("table {element} vanished before cell edit committed");
                    return;
                };
                table.set_cell(cell_key, edit.text);
                self.commit(next);
            }
        }
    }

    /// Close the overlay without applying its text.
    pub fn cancel_overlay(&mut self) {
        self.overlay = None;
    }

    fn open_table_cell_overlay(&mut self, id: ElementId, world: Point) {
        let Some(Element::Table(table)) =
            self.elements().iter().find(|e| e.id() == id)
        else {
            return;
        };
        let Some((row, col)) = table.cell_at(world) else {
            return;
        };
        let key = Table::cell_key(row, col);
        let text = table.cell_text(&key).to_string();
        self.overlay = Some(InlineEdit::table_cell(
            id,
            key,
            table.cell_rect(row, col),
            text,
        ));
    }

    // ---- history ----

    pub fn undo(&mut self) {
        if self.history.undo() {
            self.emit();
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo() {
            self.emit();
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Commit an empty document and recenter the view. Undoable like any
    /// other commit.
    pub fn clear(&mut self) {
        self.tools.cancel();
        self.overlay = None;
        self.gesture = Gesture::Idle;
        self.camera.reset();
        self.commit(Vec::new());
    }

    fn commit(&mut self, next: Vec<Element>) {
        log::debug!("commit: {} elements", next.len());
        self.history.set(next);
        self.emit();
    }

    fn emit(&mut self) {
        let Some(handler) = &mut self.on_change else {
            return;
        };
        match serde_json::to_string(self.history.state()) {
            Ok(json) => handler(&json),
            Err(err) => log::error!("failed to serialize document: {err}"),
        }
    }
}
