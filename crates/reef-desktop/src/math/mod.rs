//! Screen-space math primitives
//!
//! Everything in the shell lives in a single fixed-viewport coordinate
//! space: origin at the top-left of the screen, y growing downward.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;

/// Window frame metrics shared by hit testing and layout.
pub struct FrameStyle {
    /// Title bar height in pixels
    pub title_bar_height: f32,
    /// Square side of the title-bar buttons
    pub button_size: f32,
    /// Gap between title-bar buttons
    pub button_gap: f32,
    /// Inset from the window's right edge to the first button
    pub button_inset: f32,
}

/// Frame metrics used by every window.
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 36.0,
    button_size: 20.0,
    button_gap: 8.0,
    button_inset: 12.0,
};

/// Height of the taskbar strip at the bottom of the screen.
pub const TASKBAR_HEIGHT: f32 = 48.0;
