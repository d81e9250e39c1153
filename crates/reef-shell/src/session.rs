//! Shell session: power lifecycle, app launching, and input dispatch

use std::collections::HashMap;

use tracing::{debug, info};

use reef_desktop::{
    DragState, InputResult, InputRouter, Overlay, OverlayCoordinator, Size, Vec2, WindowId,
    WindowManager, WindowRegion,
};
use reef_sched::Scheduler;
use reef_systems::{PowerTray, StoreCatalog, TransferHub, VolumeTray, WifiTray};

use crate::apps::AppId;
use crate::clock::ClockConfig;
use crate::content::{ContentProvider, LaunchRequests};
use crate::error::{ShellError, ShellResult};

/// Duration of the boot screen.
pub const BOOT_MS: u64 = 4000;

/// Gap between shutting down and booting again during a restart.
pub const RESTART_GAP_MS: u64 = 1000;

/// Default viewport when none is supplied.
pub const DEFAULT_VIEWPORT: Size = Size::new(1280.0, 800.0);

/// Power lifecycle of the session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SystemPower {
    #[default]
    Off,
    Booting,
    Running,
}

/// Timer purposes owned by the session itself
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum SessionTimer {
    Boot,
    Restart,
}

/// Events delivered when a session timer fires
#[derive(Clone, Copy, Debug)]
enum SessionEvent {
    BootComplete,
    BeginBoot,
}

/// The shell session, composing the desktop, trays, and power lifecycle
pub struct ShellSession {
    power: SystemPower,
    viewport: Size,
    clock: ClockConfig,
    desktop_apps: Vec<AppId>,
    pinned_apps: Vec<AppId>,

    windows: WindowManager,
    input: InputRouter,
    overlays: OverlayCoordinator,

    wifi: WifiTray,
    battery: PowerTray,
    volume: VolumeTray,
    transfer: TransferHub,
    store: StoreCatalog,

    providers: HashMap<&'static str, Box<dyn ContentProvider>>,
    launches: LaunchRequests,
    sched: Scheduler<SessionTimer, SessionEvent>,
}

impl Default for ShellSession {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT)
    }
}

impl ShellSession {
    /// Create a powered-off session with the given viewport
    pub fn new(viewport: Size) -> Self {
        Self {
            power: SystemPower::Off,
            viewport,
            clock: ClockConfig::default(),
            desktop_apps: AppId::ALL.to_vec(),
            pinned_apps: vec![
                AppId::Chat,
                AppId::Notes,
                AppId::Gallery,
                AppId::Store,
                AppId::Settings,
            ],
            windows: WindowManager::new(),
            input: InputRouter::new(),
            overlays: OverlayCoordinator::new(),
            wifi: WifiTray::new(),
            battery: PowerTray::new(),
            volume: VolumeTray::new(),
            transfer: TransferHub::new(),
            store: StoreCatalog::new(),
            providers: HashMap::new(),
            launches: LaunchRequests::new(),
            sched: Scheduler::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn power(&self) -> SystemPower {
        self.power
    }

    pub fn is_running(&self) -> bool {
        self.power == SystemPower::Running
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn clock(&self) -> &ClockConfig {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut ClockConfig {
        &mut self.clock
    }

    pub fn desktop_apps(&self) -> &[AppId] {
        &self.desktop_apps
    }

    pub fn pinned_apps(&self) -> &[AppId] {
        &self.pinned_apps
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn overlays(&self) -> &OverlayCoordinator {
        &self.overlays
    }

    pub fn wifi(&self) -> &WifiTray {
        &self.wifi
    }

    pub fn wifi_mut(&mut self) -> &mut WifiTray {
        &mut self.wifi
    }

    pub fn battery(&self) -> &PowerTray {
        &self.battery
    }

    pub fn battery_mut(&mut self) -> &mut PowerTray {
        &mut self.battery
    }

    pub fn volume(&self) -> &VolumeTray {
        &self.volume
    }

    pub fn volume_mut(&mut self) -> &mut VolumeTray {
        &mut self.volume
    }

    pub fn transfer(&self) -> &TransferHub {
        &self.transfer
    }

    pub fn transfer_mut(&mut self) -> &mut TransferHub {
        &mut self.transfer
    }

    pub fn store(&self) -> &StoreCatalog {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut StoreCatalog {
        &mut self.store
    }

    /// Register the content provider for an app
    pub fn register_provider(&mut self, app: AppId, provider: Box<dyn ContentProvider>) {
        self.providers.insert(app.as_str(), provider);
    }

    /// Restore preferences from a snapshot
    pub fn apply_snapshot(&mut self, snapshot: &crate::snapshot::SessionSnapshot) {
        self.clock = snapshot.clock;
        self.desktop_apps = snapshot.desktop_apps.clone();
        self.pinned_apps = snapshot.pinned_apps.clone();
    }

    // ========================================================================
    // Power lifecycle
    // ========================================================================

    /// Begin booting a powered-off session
    pub fn power_on(&mut self, now_ms: u64) {
        if self.power != SystemPower::Off {
            return;
        }
        info!("session booting");
        self.power = SystemPower::Booting;
        self.sched.schedule(
            now_ms,
            BOOT_MS,
            SessionTimer::Boot,
            SessionEvent::BootComplete,
        );
    }

    /// Power off immediately
    ///
    /// Closes every window and overlay, ends any drag, cancels every
    /// pending timer, and resets the simulated subsystems to factory
    /// state so the next boot starts fresh.
    pub fn shutdown(&mut self) {
        info!("session shutting down");
        self.power = SystemPower::Off;
        for window in self.windows.windows_by_z() {
            let (id, app_id) = (window.id, window.app_id.clone());
            if let Some(provider) = self.providers.get_mut(app_id.as_str()) {
                provider.unmounted(id);
            }
        }
        self.windows.close_all();
        self.input.end_drag();
        self.overlays.close_all();
        self.launches.drain();
        self.sched.clear();
        self.wifi = WifiTray::new();
        self.battery = PowerTray::new();
        self.volume = VolumeTray::new();
        self.transfer = TransferHub::new();
        self.store = StoreCatalog::new();
    }

    /// Shut down, then boot again after a short gap
    pub fn restart(&mut self, now_ms: u64) {
        if self.power == SystemPower::Off {
            return;
        }
        self.shutdown();
        self.sched.schedule(
            now_ms,
            RESTART_GAP_MS,
            SessionTimer::Restart,
            SessionEvent::BeginBoot,
        );
    }

    // ========================================================================
    // App launching
    // ========================================================================

    /// Open a new window for an app
    ///
    /// Every call opens a fresh instance. Any open overlay is dismissed.
    pub fn open_app(&mut self, app: AppId) -> ShellResult<WindowId> {
        if !self.is_running() {
            return Err(ShellError::NotRunning { op: "open app" });
        }
        self.overlays.close_all();
        let id = self.windows.open(app.window_config());
        debug!(app = app.as_str(), window = id, "app opened");
        if let Some(provider) = self.providers.get_mut(app.as_str()) {
            provider.mounted(id);
        }
        Ok(id)
    }

    /// Open the app a store entry launches, if it is installed and maps to one
    pub fn open_store_entry(&mut self, entry_id: u32) -> ShellResult<Option<WindowId>> {
        let Some(entry) = self.store.entry(entry_id) else {
            return Ok(None);
        };
        if !entry.installed {
            return Ok(None);
        }
        let Some(app) = entry.launch.as_deref().and_then(AppId::parse) else {
            return Ok(None);
        };
        self.open_app(app).map(Some)
    }

    /// Click on a pinned taskbar app
    ///
    /// Focuses an existing unminimized instance, restores a minimized one,
    /// or opens a new instance when none exists.
    pub fn pinned_app_click(&mut self, app: AppId) -> ShellResult<WindowId> {
        if !self.is_running() {
            return Err(ShellError::NotRunning { op: "activate app" });
        }
        if let Some(window) = self.windows.find_app_instance(app.as_str()) {
            let (id, minimized) = (window.id, window.is_minimized());
            self.overlays.close_all();
            if minimized {
                self.windows.restore(id);
            } else {
                self.windows.focus(id);
            }
            return Ok(id);
        }
        self.open_app(app)
    }

    // ========================================================================
    // Window operations
    // ========================================================================

    /// Close a window, noting its provider
    pub fn close_window(&mut self, id: WindowId) {
        if !self.is_running() {
            return;
        }
        if let Some(window) = self.windows.get(id) {
            let app_id = window.app_id.clone();
            if let Some(provider) = self.providers.get_mut(app_id.as_str()) {
                provider.unmounted(id);
            }
        }
        if self.input.drag_state().map(DragState::window_id) == Some(id) {
            self.input.end_drag();
        }
        self.windows.close(id);
    }

    pub fn focus_window(&mut self, id: WindowId) {
        if self.is_running() {
            self.windows.focus(id);
        }
    }

    pub fn minimize_window(&mut self, id: WindowId) {
        if self.is_running() {
            self.windows.minimize(id);
        }
    }

    pub fn restore_window(&mut self, id: WindowId) {
        if self.is_running() {
            self.windows.restore(id);
        }
    }

    pub fn maximize_window(&mut self, id: WindowId) {
        if self.is_running() {
            let viewport = self.viewport;
            self.windows.maximize(id, viewport);
        }
    }

    /// Click on a window's taskbar entry
    ///
    /// Minimizes the focused window, restores a minimized one, and focuses
    /// anything else.
    pub fn taskbar_click(&mut self, id: WindowId) {
        if !self.is_running() {
            return;
        }
        let Some(window) = self.windows.get(id) else {
            return;
        };
        if window.is_minimized() {
            self.windows.restore(id);
        } else if self.windows.focused() == Some(id) {
            self.windows.minimize(id);
        } else {
            self.windows.focus(id);
        }
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    /// Toggle a tray overlay; opening one closes any other
    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        if self.is_running() {
            self.overlays.toggle(overlay);
        }
    }

    // ========================================================================
    // Pointer dispatch
    // ========================================================================

    /// Handle pointer down on the desktop
    ///
    /// Any press dismisses an open overlay. Presses on window chrome drive
    /// the corresponding window operation; presses on content focus the
    /// window and go to its provider, or are forwarded to the host when no
    /// provider is registered.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        if !self.is_running() {
            return InputResult::Unhandled;
        }
        let pos = Vec2::new(x, y);
        let overlay_was_open = self.overlays.active().is_some();
        self.overlays.close_all();

        let Some((window_id, region)) = self.windows.region_at(pos) else {
            return if overlay_was_open {
                InputResult::Handled
            } else {
                InputResult::Unhandled
            };
        };

        match region {
            WindowRegion::CloseButton => {
                self.close_window(window_id);
                InputResult::Handled
            }
            WindowRegion::MinimizeButton => {
                self.minimize_window(window_id);
                InputResult::Handled
            }
            WindowRegion::MaximizeButton => {
                self.maximize_window(window_id);
                InputResult::Handled
            }
            WindowRegion::TitleBar => {
                self.windows.focus(window_id);
                if let Some(window) = self.windows.get(window_id) {
                    self.input.start_window_move(window_id, pos - window.position);
                }
                InputResult::Handled
            }
            WindowRegion::Content => self.handle_content_press(window_id, pos),
        }
    }

    fn handle_content_press(&mut self, window_id: WindowId, pos: Vec2) -> InputResult {
        self.windows.focus(window_id);
        let Some(window) = self.windows.get(window_id) else {
            return InputResult::Unhandled;
        };
        let local = pos - window.position;
        let app_id = window.app_id.clone();

        if let Some(provider) = self.providers.get_mut(app_id.as_str()) {
            provider.pointer(window_id, local, &mut self.launches);
            InputResult::Handled
        } else {
            InputResult::Forward {
                window_id,
                local_x: local.x,
                local_y: local.y,
            }
        }
    }

    /// Handle pointer move, advancing an active window drag
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        if !self.is_running() {
            return InputResult::Unhandled;
        }
        let Some(DragState::MoveWindow { window_id, offset }) = self.input.drag_state().copied()
        else {
            return InputResult::Unhandled;
        };
        let pos = Vec2::new(x, y) - offset;
        self.windows.move_to(window_id, pos.x, pos.y);
        InputResult::Handled
    }

    /// Handle pointer up, ending any drag
    pub fn handle_pointer_up(&mut self) {
        self.input.end_drag();
    }

    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    // ========================================================================
    // Time
    // ========================================================================

    /// Advance simulated time across the session and every subsystem
    ///
    /// Subsystems only run while the session is running; their schedulers
    /// are empty otherwise because shutdown resets them.
    pub fn tick(&mut self, now_ms: u64) {
        for event in self.sched.advance(now_ms) {
            match event {
                SessionEvent::BootComplete => {
                    info!("session running");
                    self.power = SystemPower::Running;
                }
                SessionEvent::BeginBoot => {
                    self.power = SystemPower::Booting;
                    self.sched.schedule(
                        now_ms,
                        BOOT_MS,
                        SessionTimer::Boot,
                        SessionEvent::BootComplete,
                    );
                }
            }
        }

        if self.is_running() {
            self.wifi.tick(now_ms);
            self.transfer.tick(now_ms);
            self.store.tick(now_ms);

            for app in self.launches.drain() {
                // Launch requests only come from running providers, so the
                // guard in open_app cannot trip here.
                let _ = self.open_app(app);
            }
        }
    }
}
