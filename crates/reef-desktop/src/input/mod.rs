//! Input routing module
//!
//! Provides the drag state machine for window move operations.

mod drag;
mod result;
mod router;

pub use drag::DragState;
pub use result::InputResult;
pub use router::InputRouter;
