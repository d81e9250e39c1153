//! Window configuration for creation

use crate::math::{Size, Vec2};

/// Configuration for opening a window
#[derive(Clone, Debug, Default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Application identifier for content routing
    pub app_id: String,
    /// Initial size (usually the app's configured default)
    pub size: Size,
    /// Initial position (None = cascade from the open-window count)
    pub position: Option<Vec2>,
}
