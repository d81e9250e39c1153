//! Window management and input routing for the Reef OS shell
//!
//! This crate owns the three shell-core state machines that carry real
//! invariants:
//!
//! - [`window::WindowManager`]: window lifecycle, focus, and z-order
//! - [`input::InputRouter`]: the drag state machine for window moves
//! - [`overlay::OverlayCoordinator`]: mutually exclusive popup panels
//!
//! Rendering, app content, and simulated devices live elsewhere; this crate
//! is pure state plus hit testing over screen-space rectangles.

pub mod input;
pub mod math;
pub mod overlay;
pub mod window;

pub use input::{DragState, InputResult, InputRouter};
pub use math::{Rect, Size, Vec2};
pub use overlay::{Overlay, OverlayCoordinator};
pub use window::{Window, WindowConfig, WindowId, WindowManager, WindowRegion, WindowState};
