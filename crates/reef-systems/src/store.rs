//! Simulated app store catalog
//!
//! Install and uninstall are delayed transitions keyed per entry, so
//! repeated clicks while an operation is pending change nothing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use reef_sched::Scheduler;

/// Latency of a simulated install.
pub const INSTALL_MS: u64 = 1500;

/// Latency of a simulated uninstall.
pub const UNINSTALL_MS: u64 = 1000;

/// Operation in flight on a catalog entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PendingOp {
    Install,
    Uninstall,
}

/// A catalog entry
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreEntry {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub installed: bool,
    pub pending: Option<PendingOp>,
    /// App identifier launched when the entry is opened, if it maps to an app
    pub launch: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum StoreTimer {
    Op(u32),
}

#[derive(Clone, Copy, Debug)]
enum StoreEvent {
    OpDone(u32),
}

fn seed_entries() -> Vec<StoreEntry> {
    let seeds: [(&str, &str, bool, Option<&str>); 6] = [
        ("Tide Notes", "Productivity", true, Some("notes")),
        ("Current Chat", "Social", true, Some("chat")),
        ("Kelp Gallery", "Media", true, Some("gallery")),
        ("Pearl Music", "Media", false, Some("music")),
        ("Sonar Maps", "Navigation", false, None),
        ("Drift Weather", "Utilities", false, None),
    ];
    seeds
        .iter()
        .enumerate()
        .map(|(i, (name, category, installed, launch))| StoreEntry {
            id: i as u32 + 1,
            name: name.to_string(),
            category: category.to_string(),
            installed: *installed,
            pending: None,
            launch: launch.map(str::to_string),
        })
        .collect()
}

/// App store catalog state machine
pub struct StoreCatalog {
    entries: Vec<StoreEntry>,
    sched: Scheduler<StoreTimer, StoreEvent>,
}

impl Default for StoreCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreCatalog {
    pub fn new() -> Self {
        Self {
            entries: seed_entries(),
            sched: Scheduler::new(),
        }
    }

    pub fn entries(&self) -> &[StoreEntry] {
        &self.entries
    }

    pub fn entry(&self, id: u32) -> Option<&StoreEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn entry_mut(&mut self, id: u32) -> Option<&mut StoreEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Begin installing an entry
    ///
    /// No-op if already installed or an operation is pending.
    pub fn install(&mut self, id: u32, now_ms: u64) {
        let Some(entry) = self.entry_mut(id) else {
            return;
        };
        if entry.installed || entry.pending.is_some() {
            return;
        }
        debug!(id, name = %entry.name, "install started");
        entry.pending = Some(PendingOp::Install);
        self.sched.schedule(
            now_ms,
            INSTALL_MS,
            StoreTimer::Op(id),
            StoreEvent::OpDone(id),
        );
    }

    /// Begin uninstalling an entry
    ///
    /// No-op if not installed or an operation is pending.
    pub fn uninstall(&mut self, id: u32, now_ms: u64) {
        let Some(entry) = self.entry_mut(id) else {
            return;
        };
        if !entry.installed || entry.pending.is_some() {
            return;
        }
        debug!(id, name = %entry.name, "uninstall started");
        entry.pending = Some(PendingOp::Uninstall);
        self.sched.schedule(
            now_ms,
            UNINSTALL_MS,
            StoreTimer::Op(id),
            StoreEvent::OpDone(id),
        );
    }

    /// Advance simulated time, completing due operations
    pub fn tick(&mut self, now_ms: u64) {
        for event in self.sched.advance(now_ms) {
            match event {
                StoreEvent::OpDone(id) => {
                    if let Some(entry) = self.entry_mut(id) {
                        match entry.pending.take() {
                            Some(PendingOp::Install) => {
                                debug!(id, "install finished");
                                entry.installed = true;
                            }
                            Some(PendingOp::Uninstall) => {
                                debug!(id, "uninstall finished");
                                entry.installed = false;
                            }
                            None => {}
                        }
                    }
                }
            }
        }
    }
}
