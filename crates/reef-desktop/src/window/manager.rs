//! Window manager for lifecycle, focus, and z-order

use std::collections::HashMap;

use crate::math::{Rect, Size, Vec2, TASKBAR_HEIGHT};
use super::{Window, WindowConfig, WindowId, WindowRegion, WindowState};

/// Z-order assigned to the first window of a session.
const Z_FLOOR: u32 = 10;

/// Cascade placement for windows opened without an explicit position.
const CASCADE_BASE_X: f32 = 100.0;
const CASCADE_BASE_Y: f32 = 50.0;
const CASCADE_STEP: f32 = 20.0;
const CASCADE_RANGE: f32 = 200.0;

/// Window manager handling window lifecycle, z-order, and focus
///
/// Operating on an unknown id is always a silent no-op: this is a
/// UI-facing shell, not a resource system.
pub struct WindowManager {
    /// All windows by ID
    windows: HashMap<WindowId, Window>,
    /// Currently focused window, if any
    focused: Option<WindowId>,
    /// Next window ID
    next_id: u64,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a new window manager
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            focused: None,
            next_id: 1,
        }
    }

    /// Open a new window
    ///
    /// Without an explicit position the window cascades from the open-window
    /// count, wrapping so it never drifts off-screen. The new window lands
    /// on top of the stack and takes focus.
    pub fn open(&mut self, config: WindowConfig) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;

        let position = config.position.unwrap_or_else(|| {
            let offset = (self.windows.len() as f32 * CASCADE_STEP) % CASCADE_RANGE;
            Vec2::new(CASCADE_BASE_X + offset, CASCADE_BASE_Y + offset)
        });

        let window = Window {
            id,
            app_id: config.app_id,
            title: config.title,
            position,
            size: config.size,
            z_order: self.top_z() + 1,
            state: WindowState::Normal,
            prev_state: None,
            restore_rect: None,
        };

        self.windows.insert(id, window);
        self.focused = Some(id);

        id
    }

    /// Close a window
    ///
    /// If it was focused, focus becomes undefined; the next-highest window
    /// is deliberately not auto-focused.
    pub fn close(&mut self, id: WindowId) {
        self.windows.remove(&id);
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    /// Get a mutable window by ID
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    /// Focus a window (brings to top)
    pub fn focus(&mut self, id: WindowId) {
        if !self.windows.contains_key(&id) {
            return;
        }

        let top = self.top_z();
        if let Some(window) = self.windows.get_mut(&id) {
            window.z_order = top + 1;
        }
        self.focused = Some(id);
    }

    /// Get the currently focused window ID
    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    /// Move a window to a new position; no bounds clamping, a window may be
    /// dragged partly off-screen
    pub fn move_to(&mut self, id: WindowId, x: f32, y: f32) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.position = Vec2::new(x, y);
        }
    }

    /// Minimize a window; clears focus if it was focused
    pub fn minimize(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            if window.state != WindowState::Minimized {
                window.prev_state = Some(window.state);
                window.state = WindowState::Minimized;
            }
        }
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    /// Restore a minimized window, then focus it
    pub fn restore(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            if window.state == WindowState::Minimized {
                window.state = window.prev_state.take().unwrap_or(WindowState::Normal);
            }
            self.focus(id);
        }
    }

    /// Toggle maximize; always focuses afterwards
    ///
    /// Maximizing remembers the current geometry and fills `viewport` minus
    /// the taskbar strip; maximizing again restores the remembered geometry
    /// exactly.
    pub fn maximize(&mut self, id: WindowId, viewport: Size) {
        if let Some(window) = self.windows.get_mut(&id) {
            if window.state == WindowState::Maximized {
                window.state = WindowState::Normal;
                if let Some((pos, size)) = window.restore_rect.take() {
                    window.position = pos;
                    window.size = size;
                }
            } else {
                window.restore_rect = Some((window.position, window.size));
                window.state = WindowState::Maximized;
                window.position = Vec2::ZERO;
                window.size = Size::new(viewport.width, viewport.height - TASKBAR_HEIGHT);
            }
            self.focus(id);
        }
    }

    /// Get windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// Get all windows
    pub fn all_windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// Find which region of which window is at a screen position
    ///
    /// Minimized windows are excluded; the topmost hit wins.
    pub fn region_at(&self, pos: Vec2) -> Option<(WindowId, WindowRegion)> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| std::cmp::Reverse(w.z_order));

        for window in windows {
            if window.state == WindowState::Minimized {
                continue;
            }
            if !window.rect().contains(pos) {
                continue;
            }
            return Some((window.id, hit_test_window(window, pos)));
        }

        None
    }

    /// Whether any open instance belongs to this app
    pub fn is_app_open(&self, app_id: &str) -> bool {
        self.windows.values().any(|w| w.app_id == app_id)
    }

    /// Find instances of an app, preferring an unminimized one
    pub fn find_app_instance(&self, app_id: &str) -> Option<&Window> {
        let mut minimized = None;
        for window in self.windows.values() {
            if window.app_id != app_id {
                continue;
            }
            if window.state != WindowState::Minimized {
                return Some(window);
            }
            minimized.get_or_insert(window);
        }
        minimized
    }

    /// Remove every window (session shutdown)
    pub fn close_all(&mut self) {
        self.windows.clear();
        self.focused = None;
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Highest z-order currently assigned, or the floor below the first slot
    fn top_z(&self) -> u32 {
        self.windows
            .values()
            .map(|w| w.z_order)
            .max()
            .unwrap_or(Z_FLOOR - 1)
    }
}

/// Hit test a window the pointer is known to be inside
fn hit_test_window(window: &Window, pos: Vec2) -> WindowRegion {
    // Buttons first: they sit inside the title bar
    if window.close_button_rect().contains(pos) {
        return WindowRegion::CloseButton;
    }
    if window.maximize_button_rect().contains(pos) {
        return WindowRegion::MaximizeButton;
    }
    if window.minimize_button_rect().contains(pos) {
        return WindowRegion::MinimizeButton;
    }
    if window.title_bar_rect().contains(pos) {
        return WindowRegion::TitleBar;
    }
    WindowRegion::Content
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(title: &str) -> WindowConfig {
        WindowConfig {
            title: title.to_string(),
            app_id: "test".to_string(),
            size: Size::new(800.0, 600.0),
            position: None,
        }
    }

    fn config_at(title: &str, x: f32, y: f32) -> WindowConfig {
        WindowConfig {
            position: Some(Vec2::new(x, y)),
            ..config(title)
        }
    }

    #[test]
    fn test_open_assigns_floor_z_and_focus() {
        let mut wm = WindowManager::new();
        let id = wm.open(config("First"));

        assert_eq!(wm.get(id).unwrap().z_order, Z_FLOOR);
        assert_eq!(wm.focused(), Some(id));
    }

    #[test]
    fn test_open_stacks_above_existing() {
        let mut wm = WindowManager::new();
        let a = wm.open(config("A"));
        let b = wm.open(config("B"));

        assert!(wm.get(b).unwrap().z_order > wm.get(a).unwrap().z_order);
        assert_eq!(wm.focused(), Some(b));
    }

    #[test]
    fn test_cascade_positions_wrap() {
        let mut wm = WindowManager::new();
        let first = wm.open(config("0"));
        assert!((wm.get(first).unwrap().position.x - 100.0).abs() < 0.001);
        assert!((wm.get(first).unwrap().position.y - 50.0).abs() < 0.001);

        // Ten open windows put the eleventh back at the base offset
        for i in 1..10 {
            wm.open(config(&i.to_string()));
        }
        let wrapped = wm.open(config("wrapped"));
        assert!((wm.get(wrapped).unwrap().position.x - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_close_focused_leaves_focus_undefined() {
        let mut wm = WindowManager::new();
        let a = wm.open(config("A"));
        let b = wm.open(config("B"));

        wm.close(b);

        assert!(wm.get(b).is_none());
        assert_eq!(wm.focused(), None);
        assert!(wm.get(a).is_some());
    }

    #[test]
    fn test_close_unfocused_keeps_focus() {
        let mut wm = WindowManager::new();
        let a = wm.open(config("A"));
        let b = wm.open(config("B"));

        wm.close(a);

        assert_eq!(wm.focused(), Some(b));
    }

    #[test]
    fn test_focus_raises_to_top() {
        let mut wm = WindowManager::new();
        let a = wm.open(config("A"));
        let b = wm.open(config("B"));

        wm.focus(a);

        let top = wm.windows_by_z().last().unwrap().id;
        assert_eq!(top, a);
        assert_eq!(wm.focused(), Some(a));
        assert!(wm.get(a).unwrap().z_order > wm.get(b).unwrap().z_order);
    }

    #[test]
    fn test_focus_unknown_id_is_noop() {
        let mut wm = WindowManager::new();
        let a = wm.open(config("A"));

        wm.focus(999);

        assert_eq!(wm.focused(), Some(a));
    }

    #[test]
    fn test_minimize_clears_focus() {
        let mut wm = WindowManager::new();
        let id = wm.open(config("A"));

        wm.minimize(id);

        assert_eq!(wm.get(id).unwrap().state, WindowState::Minimized);
        assert_eq!(wm.focused(), None);
        assert_eq!(wm.count(), 1);
    }

    #[test]
    fn test_restore_refocuses() {
        let mut wm = WindowManager::new();
        let id = wm.open(config("A"));

        wm.minimize(id);
        wm.restore(id);

        assert_eq!(wm.get(id).unwrap().state, WindowState::Normal);
        assert_eq!(wm.focused(), Some(id));
    }

    #[test]
    fn test_maximize_is_own_inverse() {
        let mut wm = WindowManager::new();
        let viewport = Size::new(1920.0, 1080.0);
        let id = wm.open(config_at("A", 137.0, 92.0));
        wm.move_to(id, 311.0, 74.0);

        wm.maximize(id, viewport);
        {
            let w = wm.get(id).unwrap();
            assert_eq!(w.state, WindowState::Maximized);
            assert!((w.position.x).abs() < 0.001);
            assert!((w.size.width - 1920.0).abs() < 0.001);
            assert!((w.size.height - (1080.0 - TASKBAR_HEIGHT)).abs() < 0.001);
        }

        wm.maximize(id, viewport);
        {
            let w = wm.get(id).unwrap();
            assert_eq!(w.state, WindowState::Normal);
            assert!((w.position.x - 311.0).abs() < 0.001);
            assert!((w.position.y - 74.0).abs() < 0.001);
            assert!((w.size.width - 800.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_maximize_focuses() {
        let mut wm = WindowManager::new();
        let viewport = Size::new(1920.0, 1080.0);
        let a = wm.open(config("A"));
        let b = wm.open(config("B"));

        wm.maximize(a, viewport);

        assert_eq!(wm.focused(), Some(a));
        assert!(wm.get(a).unwrap().z_order > wm.get(b).unwrap().z_order);
    }

    #[test]
    fn test_move_applies_unclamped() {
        let mut wm = WindowManager::new();
        let id = wm.open(config("A"));

        wm.move_to(id, -250.0, 9000.0);

        let w = wm.get(id).unwrap();
        assert!((w.position.x - (-250.0)).abs() < 0.001);
        assert!((w.position.y - 9000.0).abs() < 0.001);
    }

    #[test]
    fn test_region_at_prefers_topmost() {
        let mut wm = WindowManager::new();
        let _a = wm.open(config_at("A", 100.0, 100.0));
        let b = wm.open(config_at("B", 150.0, 150.0));

        // Point inside both windows resolves to the one on top
        let (hit, _) = wm.region_at(Vec2::new(400.0, 400.0)).unwrap();
        assert_eq!(hit, b);
    }

    #[test]
    fn test_region_at_skips_minimized() {
        let mut wm = WindowManager::new();
        let a = wm.open(config_at("A", 100.0, 100.0));
        let b = wm.open(config_at("B", 100.0, 100.0));

        wm.minimize(b);

        let (hit, _) = wm.region_at(Vec2::new(400.0, 400.0)).unwrap();
        assert_eq!(hit, a);
    }

    #[test]
    fn test_region_classification() {
        let mut wm = WindowManager::new();
        let id = wm.open(config_at("A", 100.0, 100.0));

        let (hit, region) = wm.region_at(Vec2::new(200.0, 110.0)).unwrap();
        assert_eq!(hit, id);
        assert_eq!(region, WindowRegion::TitleBar);

        let (_, region) = wm.region_at(Vec2::new(400.0, 400.0)).unwrap();
        assert_eq!(region, WindowRegion::Content);

        let w = wm.get(id).unwrap();
        let close = w.close_button_rect();
        let center = Vec2::new(close.x + close.width / 2.0, close.y + close.height / 2.0);
        let (_, region) = wm.region_at(center).unwrap();
        assert_eq!(region, WindowRegion::CloseButton);

        assert!(wm.region_at(Vec2::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_find_app_instance_prefers_unminimized() {
        let mut wm = WindowManager::new();
        let a = wm.open(WindowConfig {
            app_id: "music".to_string(),
            ..config("Music")
        });
        let b = wm.open(WindowConfig {
            app_id: "music".to_string(),
            ..config("Music")
        });

        wm.minimize(a);

        assert_eq!(wm.find_app_instance("music").unwrap().id, b);

        wm.minimize(b);
        assert!(wm.find_app_instance("music").unwrap().is_minimized());

        assert!(wm.find_app_instance("chat").is_none());
    }

    #[test]
    fn test_close_all() {
        let mut wm = WindowManager::new();
        wm.open(config("A"));
        wm.open(config("B"));

        wm.close_all();

        assert_eq!(wm.count(), 0);
        assert_eq!(wm.focused(), None);
    }
}
