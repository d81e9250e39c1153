//! Drag state for window move operations

use crate::math::Vec2;
use crate::window::WindowId;

/// Current drag operation state
///
/// The offset is recorded at drag start, so each drag session computes a
/// fresh pointer-to-origin offset.
#[derive(Clone, Copy, Debug)]
pub enum DragState {
    /// Moving a window by its title bar
    MoveWindow {
        /// Window being moved
        window_id: WindowId,
        /// Offset from window origin to the pointer at drag start
        offset: Vec2,
    },
}

impl DragState {
    /// Get the window this drag operates on
    pub fn window_id(&self) -> WindowId {
        match self {
            DragState::MoveWindow { window_id, .. } => *window_id,
        }
    }
}
