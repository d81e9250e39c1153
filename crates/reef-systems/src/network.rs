//! Simulated wifi tray
//!
//! Networks are synthetic entities; connecting is a delayed transition with
//! a fixed latency. At most one connect is in flight at a time, keyed on
//! the connect purpose, so re-triggering while pending never stacks a
//! second completion timer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use reef_sched::Scheduler;

use crate::error::{SystemsError, SystemsResult};

/// Latency between requesting a connection and it completing.
pub const CONNECT_LATENCY_MS: u64 = 2000;

/// Latency before the tray auto-reconnects after being re-enabled.
pub const AUTO_RECONNECT_MS: u64 = 1500;

/// A discoverable network
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiNetwork {
    /// Display name
    pub ssid: String,
    /// Whether a passphrase is required
    pub secured: bool,
}

/// Timer purposes owned by the wifi tray
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum WifiTimer {
    /// Pending connect completion (one per tray, not per network)
    Connect,
    /// Auto-reconnect after re-enabling
    AutoReconnect,
}

/// Events delivered when a wifi timer fires
#[derive(Clone, Debug)]
enum WifiEvent {
    /// The pending connect finished
    Connected(String),
}

/// Wifi tray state machine
pub struct WifiTray {
    enabled: bool,
    networks: Vec<WifiNetwork>,
    connected: Option<String>,
    connecting: Option<String>,
    sched: Scheduler<WifiTimer, WifiEvent>,
}

impl Default for WifiTray {
    fn default() -> Self {
        Self::new()
    }
}

impl WifiTray {
    /// Create the tray enabled and connected to the default network
    pub fn new() -> Self {
        let networks = vec![
            WifiNetwork { ssid: "Reef Net".to_string(), secured: true },
            WifiNetwork { ssid: "Deep Sea Link".to_string(), secured: true },
            WifiNetwork { ssid: "Coral Guest".to_string(), secured: false },
            WifiNetwork { ssid: "Atlantis Public".to_string(), secured: true },
            WifiNetwork { ssid: "Trench Research".to_string(), secured: true },
        ];
        let default_ssid = networks[0].ssid.clone();
        Self {
            enabled: true,
            networks,
            connected: Some(default_ssid),
            connecting: None,
            sched: Scheduler::new(),
        }
    }

    /// Whether the radio is on
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Currently connected network, if any
    pub fn connected(&self) -> Option<&str> {
        self.connected.as_deref()
    }

    /// Network with a connect in flight, if any
    pub fn connecting(&self) -> Option<&str> {
        self.connecting.as_deref()
    }

    /// Networks visible in the tray; empty while the radio is off
    pub fn visible_networks(&self) -> &[WifiNetwork] {
        if self.enabled {
            &self.networks
        } else {
            &[]
        }
    }

    /// Turn the radio on or off
    ///
    /// Disabling drops the connection and cancels every pending timer.
    /// Enabling schedules an auto-reconnect to the default network.
    pub fn set_enabled(&mut self, enabled: bool, now_ms: u64) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;

        if enabled {
            let default_ssid = self.networks[0].ssid.clone();
            debug!(ssid = %default_ssid, "wifi enabled, scheduling auto-reconnect");
            self.sched.schedule(
                now_ms,
                AUTO_RECONNECT_MS,
                WifiTimer::AutoReconnect,
                WifiEvent::Connected(default_ssid),
            );
        } else {
            debug!("wifi disabled");
            self.connected = None;
            self.connecting = None;
            self.sched.clear();
        }
    }

    /// Request a connection to a known network
    ///
    /// No-op while disabled, already connected to `ssid`, or with a connect
    /// to `ssid` already pending (re-triggering never schedules a second
    /// timer). Requesting a different network while one is pending
    /// redirects the single in-flight connect.
    pub fn connect(&mut self, ssid: &str, now_ms: u64) {
        if !self.enabled || self.connected.as_deref() == Some(ssid) {
            return;
        }
        if self.connecting.as_deref() == Some(ssid) {
            return;
        }

        debug!(ssid, "wifi connect requested");
        self.connecting = Some(ssid.to_string());
        self.sched.schedule(
            now_ms,
            CONNECT_LATENCY_MS,
            WifiTimer::Connect,
            WifiEvent::Connected(ssid.to_string()),
        );
    }

    /// Add a user-supplied network and immediately try to join it
    ///
    /// The name must be non-empty after trimming; the network is secured
    /// iff a passphrase was supplied. New networks go to the top of the
    /// list.
    pub fn add_network(
        &mut self,
        name: &str,
        passphrase: Option<&str>,
        now_ms: u64,
    ) -> SystemsResult<()> {
        let ssid = name.trim();
        if ssid.is_empty() {
            return Err(SystemsError::InvalidInput {
                field: "network name",
                reason: "must not be empty",
            });
        }

        let secured = passphrase.is_some_and(|p| !p.trim().is_empty());
        let network = WifiNetwork {
            ssid: ssid.to_string(),
            secured,
        };
        self.networks.insert(0, network);
        self.connect(ssid, now_ms);

        Ok(())
    }

    /// Whether a connect completion is pending
    pub fn connect_pending(&self) -> bool {
        self.sched.is_pending(&WifiTimer::Connect) || self.sched.is_pending(&WifiTimer::AutoReconnect)
    }

    /// Advance simulated time, applying any due transitions
    pub fn tick(&mut self, now_ms: u64) {
        for event in self.sched.advance(now_ms) {
            match event {
                WifiEvent::Connected(ssid) => {
                    debug!(ssid = %ssid, "wifi connected");
                    self.connected = Some(ssid);
                    self.connecting = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_connected_to_default() {
        let wifi = WifiTray::new();
        assert!(wifi.enabled());
        assert_eq!(wifi.connected(), Some("Reef Net"));
        assert_eq!(wifi.visible_networks().len(), 5);
    }

    #[test]
    fn test_connect_completes_after_latency() {
        let mut wifi = WifiTray::new();

        wifi.connect("Deep Sea Link", 0);
        assert_eq!(wifi.connecting(), Some("Deep Sea Link"));
        assert_eq!(wifi.connected(), Some("Reef Net"));

        wifi.tick(CONNECT_LATENCY_MS - 1);
        assert_eq!(wifi.connected(), Some("Reef Net"));

        wifi.tick(CONNECT_LATENCY_MS);
        assert_eq!(wifi.connected(), Some("Deep Sea Link"));
        assert_eq!(wifi.connecting(), None);
    }

    #[test]
    fn test_connect_idempotent_while_pending() {
        let mut wifi = WifiTray::new();

        wifi.connect("Deep Sea Link", 0);
        wifi.connect("Deep Sea Link", 500);

        // The second request must not have pushed the deadline out
        wifi.tick(CONNECT_LATENCY_MS);
        assert_eq!(wifi.connected(), Some("Deep Sea Link"));
    }

    #[test]
    fn test_connect_redirects_to_latest_target() {
        let mut wifi = WifiTray::new();

        wifi.connect("Deep Sea Link", 0);
        wifi.connect("Atlantis Public", 500);

        // Only the latest target completes; the first timer was replaced
        wifi.tick(500 + CONNECT_LATENCY_MS);
        assert_eq!(wifi.connected(), Some("Atlantis Public"));
        assert_eq!(wifi.connecting(), None);
    }

    #[test]
    fn test_connect_to_current_network_is_noop() {
        let mut wifi = WifiTray::new();

        wifi.connect("Reef Net", 0);

        assert_eq!(wifi.connecting(), None);
        assert!(!wifi.connect_pending());
    }

    #[test]
    fn test_disable_clears_connection_and_timers() {
        let mut wifi = WifiTray::new();
        wifi.connect("Deep Sea Link", 0);

        wifi.set_enabled(false, 100);

        assert_eq!(wifi.connected(), None);
        assert_eq!(wifi.connecting(), None);
        assert!(wifi.visible_networks().is_empty());

        // The cancelled connect never lands
        wifi.tick(10_000);
        assert_eq!(wifi.connected(), None);
    }

    #[test]
    fn test_enable_auto_reconnects_to_default() {
        let mut wifi = WifiTray::new();
        wifi.set_enabled(false, 0);
        wifi.set_enabled(true, 100);

        wifi.tick(100 + AUTO_RECONNECT_MS - 1);
        assert_eq!(wifi.connected(), None);

        wifi.tick(100 + AUTO_RECONNECT_MS);
        assert_eq!(wifi.connected(), Some("Reef Net"));
    }

    #[test]
    fn test_connect_while_disabled_is_noop() {
        let mut wifi = WifiTray::new();
        wifi.set_enabled(false, 0);

        wifi.connect("Deep Sea Link", 100);

        assert_eq!(wifi.connecting(), None);
    }

    #[test]
    fn test_add_network_prepends_and_connects() {
        let mut wifi = WifiTray::new();

        wifi.add_network("  Harbor Station  ", Some("hunter2"), 0).unwrap();

        let first = &wifi.visible_networks()[0];
        assert_eq!(first.ssid, "Harbor Station");
        assert!(first.secured);
        assert_eq!(wifi.connecting(), Some("Harbor Station"));

        wifi.tick(CONNECT_LATENCY_MS);
        assert_eq!(wifi.connected(), Some("Harbor Station"));
    }

    #[test]
    fn test_add_network_without_passphrase_is_open() {
        let mut wifi = WifiTray::new();

        wifi.add_network("Open Cafe", None, 0).unwrap();
        assert!(!wifi.visible_networks()[0].secured);

        wifi.add_network("Blank Pass", Some("   "), 0).unwrap();
        assert!(!wifi.visible_networks()[0].secured);
    }

    #[test]
    fn test_add_network_rejects_empty_name() {
        let mut wifi = WifiTray::new();
        let before = wifi.visible_networks().len();

        let err = wifi.add_network("   ", Some("pass"), 0).unwrap_err();

        assert!(matches!(err, SystemsError::InvalidInput { .. }));
        assert_eq!(wifi.visible_networks().len(), before);
        assert_eq!(wifi.connecting(), None);
    }

    #[test]
    fn test_network_serialization() {
        let wifi = WifiTray::new();

        let json = serde_json::to_string(wifi.visible_networks()).unwrap();
        assert!(json.contains(r#""ssid":"Reef Net""#));

        let restored: Vec<WifiNetwork> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, wifi.visible_networks());
    }
}
