//! Taskbar clock formatting

use serde::{Deserialize, Serialize};

const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// User-facing clock preferences
///
/// Fields default when absent so old snapshots keep decoding as options
/// are added.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// 24-hour display instead of 12-hour with am/pm
    pub twenty_four_hour: bool,
    /// Include a seconds field
    pub show_seconds: bool,
    /// Show the date next to the time; rendering the date itself is the
    /// embedder's job
    pub show_date: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            twenty_four_hour: false,
            show_seconds: false,
            show_date: false,
        }
    }
}

impl ClockConfig {
    /// Format a time of day given milliseconds since midnight
    ///
    /// Inputs past one day wrap around.
    pub fn format(&self, ms_of_day: u64) -> String {
        let total_secs = (ms_of_day % MS_PER_DAY) / 1000;
        let hours = total_secs / 3600;
        let minutes = (total_secs / 60) % 60;
        let seconds = total_secs % 60;

        let (display_hours, suffix) = if self.twenty_four_hour {
            (hours, "")
        } else {
            let h = match hours % 12 {
                0 => 12,
                h => h,
            };
            (h, if hours < 12 { " AM" } else { " PM" })
        };

        if self.show_seconds {
            format!("{display_hours}:{minutes:02}:{seconds:02}{suffix}")
        } else {
            format!("{display_hours}:{minutes:02}{suffix}")
        }
    }
}
