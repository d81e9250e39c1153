//! Window content seam
//!
//! The shell owns window chrome; what lives inside a window is supplied by
//! a [`ContentProvider`] registered per app. Providers receive pointer
//! events forwarded into their content area and may ask the shell to launch
//! other apps through [`LaunchRequests`], which the session drains on its
//! next tick.

use reef_desktop::{Vec2, WindowId};

use crate::apps::AppId;

/// App launches requested by content providers
#[derive(Debug, Default)]
pub struct LaunchRequests {
    queue: Vec<AppId>,
}

impl LaunchRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the shell to open an app
    pub fn request(&mut self, app: AppId) {
        self.queue.push(app);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Take all pending requests in order
    pub fn drain(&mut self) -> Vec<AppId> {
        std::mem::take(&mut self.queue)
    }
}

/// Supplier of a window's content behavior
pub trait ContentProvider {
    /// A window for this app was opened
    fn mounted(&mut self, window_id: WindowId) {
        let _ = window_id;
    }

    /// A window for this app was closed
    fn unmounted(&mut self, window_id: WindowId) {
        let _ = window_id;
    }

    /// Pointer down inside the content area, in window-local coordinates
    fn pointer(&mut self, window_id: WindowId, local: Vec2, launches: &mut LaunchRequests);
}
