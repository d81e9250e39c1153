//! Overlay coordination
//!
//! The start menu and the tray popups are mutually exclusive: the
//! coordinator holds a single selector rather than one flag per panel, so
//! two overlays being open at once is unrepresentable.

use serde::{Deserialize, Serialize};

/// A transient popup panel layered above the desktop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    /// Start menu
    Start,
    /// Network tray popup
    Wifi,
    /// Volume tray popup
    Volume,
    /// Battery tray popup
    Battery,
}

/// Single-selection overlay state
#[derive(Clone, Copy, Debug, Default)]
pub struct OverlayCoordinator {
    active: Option<Overlay>,
}

impl OverlayCoordinator {
    /// Create with no overlay open
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently open overlay, if any
    #[inline]
    pub fn active(&self) -> Option<Overlay> {
        self.active
    }

    /// Whether a specific overlay is open
    #[inline]
    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.active == Some(overlay)
    }

    /// Open an overlay, closing whichever one was open
    pub fn open(&mut self, overlay: Overlay) {
        self.active = Some(overlay);
    }

    /// Toggle an overlay: close it if open, otherwise open it
    pub fn toggle(&mut self, overlay: Overlay) {
        if self.active == Some(overlay) {
            self.active = None;
        } else {
            self.active = Some(overlay);
        }
    }

    /// Close any open overlay
    ///
    /// Invoked on desktop background clicks, on every app open, and on
    /// shutdown.
    pub fn close_all(&mut self) {
        self.active = None;
    }
}
