//! Simulated nearby-device transfer hub
//!
//! Discovery staggers devices into view, sends queue FIFO, and at most one
//! device is sending at a time. Completed devices cool down before
//! returning to idle.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use reef_sched::Scheduler;

/// Delay before the first device appears after enabling discovery.
pub const DISCOVERY_BASE_MS: u64 = 1500;

/// Additional delay between successive device appearances.
pub const DISCOVERY_STAGGER_MS: u64 = 800;

/// Interval between transfer progress increments.
pub const PROGRESS_INTERVAL_MS: u64 = 50;

/// Progress gained per increment.
pub const PROGRESS_STEP: u8 = 5;

/// Time a completed device shows its completed badge before going idle.
pub const COOLDOWN_MS: u64 = 2000;

/// Kind of a discovered device
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Phone,
    Laptop,
    Tablet,
}

/// Transfer lifecycle of a device
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    #[default]
    Idle,
    Queued,
    Sending,
    Completed,
    Failed,
}

/// A discovered nearby device
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: u32,
    pub name: String,
    pub kind: DeviceKind,
    pub status: DeviceStatus,
    /// Transfer progress, 0..=100
    pub progress: u8,
}

/// Timer purposes owned by the hub
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum TransferTimer {
    /// Staggered appearance of device at seed index
    Discover(usize),
    /// Progress increment of the single active transfer
    Progress,
    /// Completed badge expiry for a device
    Cooldown(u32),
}

/// Events delivered when a hub timer fires
#[derive(Clone, Debug)]
enum TransferEvent {
    Discovered(usize),
    Progressed,
    CooledDown(u32),
}

fn seed_devices() -> Vec<Device> {
    let seeds = [
        ("Marina's Phone", DeviceKind::Phone),
        ("Kai's Laptop", DeviceKind::Laptop),
        ("Shore Tablet", DeviceKind::Tablet),
        ("Dock Workstation", DeviceKind::Laptop),
    ];
    seeds
        .iter()
        .enumerate()
        .map(|(i, (name, kind))| Device {
            id: i as u32 + 1,
            name: name.to_string(),
            kind: *kind,
            status: DeviceStatus::Idle,
            progress: 0,
        })
        .collect()
}

/// Nearby-transfer hub state machine
pub struct TransferHub {
    discoverable: bool,
    devices: Vec<Device>,
    queue: VecDeque<u32>,
    sched: Scheduler<TransferTimer, TransferEvent>,
}

impl Default for TransferHub {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferHub {
    pub fn new() -> Self {
        Self {
            discoverable: false,
            devices: Vec::new(),
            queue: VecDeque::new(),
            sched: Scheduler::new(),
        }
    }

    pub fn discoverable(&self) -> bool {
        self.discoverable
    }

    /// Devices discovered so far, in appearance order
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn device(&self, id: u32) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    fn device_mut(&mut self, id: u32) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| d.id == id)
    }

    /// Turn discovery on or off
    ///
    /// Enabling staggers the seed devices into view. Disabling forgets
    /// every device, drops the queue, and cancels all pending timers.
    pub fn set_discoverable(&mut self, discoverable: bool, now_ms: u64) {
        if self.discoverable == discoverable {
            return;
        }
        self.discoverable = discoverable;

        if discoverable {
            debug!("transfer discovery enabled");
            for i in 0..seed_devices().len() {
                self.sched.schedule(
                    now_ms,
                    DISCOVERY_BASE_MS + i as u64 * DISCOVERY_STAGGER_MS,
                    TransferTimer::Discover(i),
                    TransferEvent::Discovered(i),
                );
            }
        } else {
            debug!("transfer discovery disabled");
            self.devices.clear();
            self.queue.clear();
            self.sched.clear();
        }
    }

    /// Queue a transfer to a device
    ///
    /// Only idle devices can be queued; anything else is a no-op. If
    /// nothing is sending the transfer starts immediately.
    pub fn send_to(&mut self, id: u32, now_ms: u64) {
        let Some(device) = self.device_mut(id) else {
            return;
        };
        if device.status != DeviceStatus::Idle {
            return;
        }

        debug!(id, name = %device.name, "transfer queued");
        device.status = DeviceStatus::Queued;
        device.progress = 0;
        self.queue.push_back(id);
        self.promote(now_ms);
    }

    /// Id of the device currently sending, if any
    pub fn sending(&self) -> Option<u32> {
        self.devices
            .iter()
            .find(|d| d.status == DeviceStatus::Sending)
            .map(|d| d.id)
    }

    /// Start the next queued transfer if nothing is in flight
    fn promote(&mut self, now_ms: u64) {
        if self.sending().is_some() {
            return;
        }
        let Some(id) = self.queue.pop_front() else {
            return;
        };
        if let Some(device) = self.device_mut(id) {
            debug!(id, "transfer started");
            device.status = DeviceStatus::Sending;
            device.progress = 0;
        }
        self.sched.schedule(
            now_ms,
            PROGRESS_INTERVAL_MS,
            TransferTimer::Progress,
            TransferEvent::Progressed,
        );
    }

    /// Advance simulated time, applying discovery, progress, and cooldowns
    pub fn tick(&mut self, now_ms: u64) {
        for event in self.sched.advance(now_ms) {
            match event {
                TransferEvent::Discovered(i) => {
                    let device = seed_devices().swap_remove(i);
                    debug!(id = device.id, name = %device.name, "device discovered");
                    self.devices.push(device);
                }
                TransferEvent::Progressed => self.step_progress(now_ms),
                TransferEvent::CooledDown(id) => {
                    if let Some(device) = self.device_mut(id) {
                        trace!(id, "transfer cooldown elapsed");
                        device.status = DeviceStatus::Idle;
                        device.progress = 0;
                    }
                }
            }
        }
    }

    fn step_progress(&mut self, now_ms: u64) {
        let Some(id) = self.sending() else {
            return;
        };
        let Some(device) = self.device_mut(id) else {
            return;
        };
        device.progress = device.progress.saturating_add(PROGRESS_STEP).min(100);
        trace!(id, progress = device.progress, "transfer progress");

        if device.progress >= 100 {
            debug!(id, "transfer completed");
            device.status = DeviceStatus::Completed;
            self.sched.schedule(
                now_ms,
                COOLDOWN_MS,
                TransferTimer::Cooldown(id),
                TransferEvent::CooledDown(id),
            );
            self.promote(now_ms);
        } else {
            self.sched.schedule(
                now_ms,
                PROGRESS_INTERVAL_MS,
                TransferTimer::Progress,
                TransferEvent::Progressed,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tick in small steps so interval timers can chain
    fn run_until(hub: &mut TransferHub, from_ms: u64, to_ms: u64) {
        let mut t = from_ms;
        while t < to_ms {
            t += PROGRESS_INTERVAL_MS;
            hub.tick(t);
        }
    }

    /// Time for one full transfer: 20 increments of 5
    const FULL_SEND_MS: u64 = (100 / PROGRESS_STEP as u64) * PROGRESS_INTERVAL_MS;

    fn discovered_hub() -> TransferHub {
        let mut hub = TransferHub::new();
        hub.set_discoverable(true, 0);
        hub.tick(DISCOVERY_BASE_MS + 3 * DISCOVERY_STAGGER_MS);
        hub
    }

    #[test]
    fn test_starts_hidden() {
        let hub = TransferHub::new();
        assert!(!hub.discoverable());
        assert!(hub.devices().is_empty());
    }

    #[test]
    fn test_discovery_staggers_devices() {
        let mut hub = TransferHub::new();
        hub.set_discoverable(true, 0);

        hub.tick(DISCOVERY_BASE_MS - 1);
        assert!(hub.devices().is_empty());

        hub.tick(DISCOVERY_BASE_MS);
        assert_eq!(hub.devices().len(), 1);
        assert_eq!(hub.devices()[0].name, "Marina's Phone");

        hub.tick(DISCOVERY_BASE_MS + DISCOVERY_STAGGER_MS);
        assert_eq!(hub.devices().len(), 2);

        hub.tick(DISCOVERY_BASE_MS + 3 * DISCOVERY_STAGGER_MS);
        assert_eq!(hub.devices().len(), 4);
    }

    #[test]
    fn test_send_starts_immediately_when_idle() {
        let mut hub = discovered_hub();

        hub.send_to(1, 5000);

        assert_eq!(hub.device(1).unwrap().status, DeviceStatus::Sending);
        assert_eq!(hub.sending(), Some(1));
    }

    #[test]
    fn test_progress_reaches_completion() {
        let mut hub = discovered_hub();
        hub.send_to(1, 5000);

        run_until(&mut hub, 5000, 5000 + FULL_SEND_MS);

        let device = hub.device(1).unwrap();
        assert_eq!(device.status, DeviceStatus::Completed);
        assert_eq!(device.progress, 100);
    }

    #[test]
    fn test_queue_is_fifo_with_single_sender() {
        let mut hub = discovered_hub();
        hub.send_to(1, 5000);
        hub.send_to(2, 5000);
        hub.send_to(3, 5000);

        assert_eq!(hub.sending(), Some(1));
        assert_eq!(hub.device(2).unwrap().status, DeviceStatus::Queued);
        assert_eq!(hub.device(3).unwrap().status, DeviceStatus::Queued);

        run_until(&mut hub, 5000, 5000 + FULL_SEND_MS);
        assert_eq!(hub.device(1).unwrap().status, DeviceStatus::Completed);
        assert_eq!(hub.sending(), Some(2));

        run_until(&mut hub, 5000 + FULL_SEND_MS, 5000 + 2 * FULL_SEND_MS);
        assert_eq!(hub.sending(), Some(3));
    }

    #[test]
    fn test_at_most_one_sending() {
        let mut hub = discovered_hub();
        hub.send_to(1, 5000);
        hub.send_to(2, 5000);

        let sending = hub
            .devices()
            .iter()
            .filter(|d| d.status == DeviceStatus::Sending)
            .count();
        assert_eq!(sending, 1);
    }

    #[test]
    fn test_cooldown_returns_device_to_idle() {
        let mut hub = discovered_hub();
        hub.send_to(1, 5000);
        run_until(&mut hub, 5000, 5000 + FULL_SEND_MS);

        hub.tick(5000 + FULL_SEND_MS + COOLDOWN_MS);

        let device = hub.device(1).unwrap();
        assert_eq!(device.status, DeviceStatus::Idle);
        assert_eq!(device.progress, 0);
    }

    #[test]
    fn test_resend_after_cooldown() {
        let mut hub = discovered_hub();
        hub.send_to(1, 5000);
        run_until(&mut hub, 5000, 5000 + FULL_SEND_MS);
        let idle_at = 5000 + FULL_SEND_MS + COOLDOWN_MS;
        hub.tick(idle_at);

        hub.send_to(1, idle_at);
        assert_eq!(hub.sending(), Some(1));
    }

    #[test]
    fn test_send_to_busy_device_is_noop() {
        let mut hub = discovered_hub();
        hub.send_to(1, 5000);

        hub.send_to(1, 5001);

        assert_eq!(hub.sending(), Some(1));
        // No duplicate queue entry: completing once leaves nothing pending
        run_until(&mut hub, 5001, 5001 + FULL_SEND_MS);
        assert_eq!(hub.sending(), None);
    }

    #[test]
    fn test_disable_forgets_everything() {
        let mut hub = discovered_hub();
        hub.send_to(1, 5000);
        hub.send_to(2, 5000);

        hub.set_discoverable(false, 5100);

        assert!(hub.devices().is_empty());
        assert_eq!(hub.sending(), None);

        // Stale progress and cooldown timers never land
        hub.tick(60_000);
        assert!(hub.devices().is_empty());
    }

    #[test]
    fn test_device_serialization() {
        let mut hub = discovered_hub();
        hub.send_to(1, 5000);
        run_until(&mut hub, 5000, 5000 + PROGRESS_INTERVAL_MS);

        let device = hub.device(1).unwrap();
        let json = serde_json::to_string(device).unwrap();
        assert!(json.contains(r#""status":"sending""#));
        assert!(json.contains(r#""kind":"phone""#));

        let restored: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(&restored, device);
    }

    #[test]
    fn test_reenable_rediscovers_from_scratch() {
        let mut hub = discovered_hub();
        hub.set_discoverable(false, 6000);
        hub.set_discoverable(true, 7000);

        hub.tick(7000 + DISCOVERY_BASE_MS);
        assert_eq!(hub.devices().len(), 1);
        assert_eq!(hub.devices()[0].status, DeviceStatus::Idle);
    }
}
