//! Simulated battery tray
//!
//! Purely presentational: the level never drains or charges on its own, so
//! the tray owns no scheduler.

use serde::{Deserialize, Serialize};

/// Power profile selectable from the battery tray
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerMode {
    Saver,
    #[default]
    Balanced,
    Performance,
}

/// Battery tray state
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PowerTray {
    level: u8,
    charging: bool,
    mode: PowerMode,
}

impl Default for PowerTray {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerTray {
    pub fn new() -> Self {
        Self {
            level: 84,
            charging: false,
            mode: PowerMode::Balanced,
        }
    }

    /// Charge percentage, 0..=100
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn charging(&self) -> bool {
        self.charging
    }

    pub fn mode(&self) -> PowerMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PowerMode) {
        self.mode = mode;
    }

    pub fn set_charging(&mut self, charging: bool) {
        self.charging = charging;
    }

    /// Icon name for the current level and charging state
    pub fn battery_icon(&self) -> &'static str {
        if self.charging {
            "battery-charging"
        } else if self.level <= 20 {
            "battery-low"
        } else {
            "battery"
        }
    }
}
