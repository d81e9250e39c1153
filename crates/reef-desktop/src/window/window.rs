//! Window instance state

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use super::WindowId;

/// Window display state
///
/// A window is exactly one of these at a time, so "maximized while
/// minimized" is unrepresentable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowState {
    /// Normal floating window
    #[default]
    Normal,
    /// Hidden from paint and hit testing, still listed in the taskbar
    Minimized,
    /// Filling the viewport above the taskbar
    Maximized,
}

/// One open window instance
///
/// Layout state is owned exclusively by the [`super::WindowManager`];
/// content providers never hold a copy of it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Window {
    /// Unique instance id (distinct even for two instances of one app)
    pub id: WindowId,
    /// Which content provider renders inside this window
    pub app_id: String,
    /// Title bar text
    pub title: String,
    /// Top-left corner in screen space
    pub position: Vec2,
    /// Current size
    pub size: Size,
    /// Paint and focus order; strictly higher is on top
    pub z_order: u32,
    /// Display state
    pub state: WindowState,
    /// State to return to when restoring from minimized
    pub prev_state: Option<WindowState>,
    /// Geometry to restore when un-maximizing
    pub restore_rect: Option<(Vec2, Size)>,
}

impl Window {
    /// Full window rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Whether the window is minimized
    #[inline]
    pub fn is_minimized(&self) -> bool {
        self.state == WindowState::Minimized
    }

    /// Whether the window is maximized
    #[inline]
    pub fn is_maximized(&self) -> bool {
        self.state == WindowState::Maximized
    }

    /// Title bar rectangle (the drag region)
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Close button rectangle (rightmost title-bar button)
    pub fn close_button_rect(&self) -> Rect {
        self.button_rect(0)
    }

    /// Maximize button rectangle
    pub fn maximize_button_rect(&self) -> Rect {
        self.button_rect(1)
    }

    /// Minimize button rectangle
    pub fn minimize_button_rect(&self) -> Rect {
        self.button_rect(2)
    }

    /// Title-bar button rect by slot, counted from the right edge
    fn button_rect(&self, slot: u32) -> Rect {
        let side = FRAME_STYLE.button_size;
        let step = side + FRAME_STYLE.button_gap;
        let x = self.rect().right() - FRAME_STYLE.button_inset - side - slot as f32 * step;
        let y = self.position.y + (FRAME_STYLE.title_bar_height - side) / 2.0;
        Rect::new(x, y, side, side)
    }
}
