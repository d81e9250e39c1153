//! Built-in app registry

use serde::{Deserialize, Serialize};

use reef_desktop::{Size, WindowConfig};

/// Identifier of a built-in app
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    Chat,
    Notes,
    Gallery,
    SystemInfo,
    Settings,
    Store,
    Game,
    VideoPlayer,
    Share,
    Music,
}

impl AppId {
    /// All built-in apps, in launcher order
    pub const ALL: [AppId; 10] = [
        AppId::Chat,
        AppId::Notes,
        AppId::Gallery,
        AppId::SystemInfo,
        AppId::Settings,
        AppId::Store,
        AppId::Game,
        AppId::VideoPlayer,
        AppId::Share,
        AppId::Music,
    ];

    /// Stable string form used in snapshots and store catalog launch fields
    pub fn as_str(&self) -> &'static str {
        match self {
            AppId::Chat => "chat",
            AppId::Notes => "notes",
            AppId::Gallery => "gallery",
            AppId::SystemInfo => "system-info",
            AppId::Settings => "settings",
            AppId::Store => "store",
            AppId::Game => "game",
            AppId::VideoPlayer => "video-player",
            AppId::Share => "share",
            AppId::Music => "music",
        }
    }

    /// Parse the stable string form
    pub fn parse(s: &str) -> Option<AppId> {
        AppId::ALL.iter().copied().find(|a| a.as_str() == s)
    }

    /// Display name shown in title bars and launchers
    pub fn title(&self) -> &'static str {
        match self {
            AppId::Chat => "Chat",
            AppId::Notes => "Notes",
            AppId::Gallery => "Gallery",
            AppId::SystemInfo => "System Info",
            AppId::Settings => "Settings",
            AppId::Store => "App Store",
            AppId::Game => "Arcade",
            AppId::VideoPlayer => "Video Player",
            AppId::Share => "Quick Share",
            AppId::Music => "Music",
        }
    }

    /// Default window size
    pub fn default_size(&self) -> Size {
        match self {
            AppId::Chat => Size::new(400.0, 600.0),
            AppId::Notes => Size::new(600.0, 400.0),
            AppId::Gallery => Size::new(700.0, 500.0),
            AppId::SystemInfo => Size::new(400.0, 450.0),
            AppId::Settings => Size::new(700.0, 500.0),
            AppId::Store => Size::new(900.0, 650.0),
            AppId::Game => Size::new(800.0, 600.0),
            AppId::VideoPlayer => Size::new(800.0, 550.0),
            AppId::Share => Size::new(600.0, 550.0),
            AppId::Music => Size::new(800.0, 600.0),
        }
    }

    /// Window config used when the app is opened
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            title: self.title().to_string(),
            app_id: self.as_str().to_string(),
            size: self.default_size(),
            position: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trips() {
        for app in AppId::ALL {
            assert_eq!(AppId::parse(app.as_str()), Some(app));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(AppId::parse("terminal"), None);
    }

    #[test]
    fn test_window_config() {
        let config = AppId::Chat.window_config();
        assert_eq!(config.title, "Chat");
        assert_eq!(config.app_id, "chat");
        assert_eq!(config.size, Size::new(400.0, 600.0));
        assert!(config.position.is_none());
    }
}
