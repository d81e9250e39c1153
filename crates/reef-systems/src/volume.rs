//! Simulated volume tray

use serde::{Deserialize, Serialize};

/// Icon bucket for a volume level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeIcon {
    Muted,
    Low,
    Medium,
    High,
}

/// Volume tray state
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VolumeTray {
    level: u8,
    muted: bool,
}

impl Default for VolumeTray {
    fn default() -> Self {
        Self::new()
    }
}

impl VolumeTray {
    pub fn new() -> Self {
        Self {
            level: 75,
            muted: false,
        }
    }

    /// Volume level, 0..=100
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Set the level, clamped to 100
    ///
    /// Dragging to zero mutes; any positive level unmutes.
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
        self.muted = self.level == 0;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Effective level heard by the user
    pub fn effective_level(&self) -> u8 {
        if self.muted {
            0
        } else {
            self.level
        }
    }

    /// Icon bucket for the effective level
    pub fn icon(&self) -> VolumeIcon {
        match self.effective_level() {
            0 => VolumeIcon::Muted,
            1..=30 => VolumeIcon::Low,
            31..=70 => VolumeIcon::Medium,
            _ => VolumeIcon::High,
        }
    }
}
