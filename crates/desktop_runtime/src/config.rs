//! Static runtime configuration for the desktop shell.

use desktop_app_contract::AppId;
use serde::{Deserialize, Serialize};

use crate::model::WindowSize;

pub const TASKBAR_HEIGHT_PX: i32 = 48;
pub const MIN_WINDOW_WIDTH: i32 = 300;
pub const MIN_WINDOW_HEIGHT: i32 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Value of the z-index counter before the first window opens.
    pub initial_max_z_index: u32,
    /// Apps shown as taskbar buttons.
    pub pinned_apps: Vec<AppId>,
    /// Used when a manifest has no `window_defaults`.
    pub fallback_window_size: WindowSize,
    /// Centered windows are lifted by this many pixels.
    pub center_vertical_offset: i32,
    pub autostart_app: Option<AppId>,
    pub autostart_delay_ms: u64,
    pub clock_tick_ms: u64,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            initial_max_z_index: 100,
            pinned_apps: vec![AppId::About, AppId::Projects, AppId::Resume, AppId::Contact],
            fallback_window_size: WindowSize {
                width: 700,
                height: 500,
            },
            center_vertical_offset: 50,
            autostart_app: Some(AppId::About),
            autostart_delay_ms: 500,
            clock_tick_ms: 1000,
        }
    }
}
