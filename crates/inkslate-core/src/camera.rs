//! Camera module for the pan transform.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// View transform for the canvas: a single translation offset applied
/// uniformly to the rendered scene. Scale is fixed at 1:1; there is no
/// zoom.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Camera {
    /// Current translation offset (pan).
    pub offset: Vec2,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a client-relative point to world coordinates by removing the
    /// pan offset. Consulted before any geometry runs on a pointer event.
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(screen.x - self.offset.x, screen.y - self.offset.y)
    }

    /// Convert a world point back to screen coordinates, e.g. to keep the
    /// inline-edit overlay tracking the shape underneath it during a pan.
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(world.x + self.offset.x, world.y + self.offset.y)
    }

    /// Accumulate a pan delta in screen coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Reset the pan to the origin.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }
}
