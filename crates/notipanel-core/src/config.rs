use serde::{Deserialize, Serialize};

use crate::filter::NotificationFilter;

/// Appearance and startup behavior of the notifications panel.
///
/// Missing keys fall back to their defaults, so a partial `config.toml` is
/// always accepted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Heading shown at the top of the panel.
    pub title: String,
    /// Filter selected when the panel is created.
    pub default_filter: NotificationFilter,
    /// Whether the panel is open when the window first appears.
    pub open_on_start: bool,
    /// Width of the panel in pixels.
    pub panel_width: f32,
    /// Height in pixels after which the list starts scrolling.
    pub list_max_height: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: "Notifications".to_owned(),
            default_filter: NotificationFilter::default(),
            open_on_start: false,
            panel_width: 380.0,
            list_max_height: 420.0,
        }
    }
}
