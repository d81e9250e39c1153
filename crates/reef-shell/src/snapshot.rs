//! Snapshot serialization for shell preferences
//!
//! Windows are not persisted; a boot always starts with an empty desktop.
//! What survives is the user's layout and preferences.

use serde::{Deserialize, Serialize};

use crate::apps::AppId;
use crate::clock::ClockConfig;
use crate::error::ShellResult;
use crate::session::ShellSession;

/// Snapshot of shell preferences for persistence
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Version for migration support
    pub version: u32,
    /// Clock preferences
    pub clock: ClockConfig,
    /// Apps shown on the desktop
    pub desktop_apps: Vec<AppId>,
    /// Apps pinned to the taskbar
    pub pinned_apps: Vec<AppId>,
}

impl SessionSnapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Capture a session's preferences
    pub fn capture(session: &ShellSession) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            clock: *session.clock(),
            desktop_apps: session.desktop_apps().to_vec(),
            pinned_apps: session.pinned_apps().to_vec(),
        }
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    pub fn migrate(&mut self) {
        // Add migration logic as versions increase
        self.version = Self::CURRENT_VERSION;
    }

    /// Encode as JSON
    pub fn to_json(&self) -> ShellResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON, migrating old versions
    pub fn from_json(json: &str) -> ShellResult<Self> {
        let mut snapshot: SessionSnapshot = serde_json::from_str(json)?;
        if snapshot.needs_migration() {
            snapshot.migrate();
        }
        Ok(snapshot)
    }
}
