use desktop_app_contract::{AccentColor, AppContent, AppId, WindowId};
use serde::{Deserialize, Serialize};

use crate::{apps::AppCatalog, config::DesktopConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

/// One open window instance.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    /// Copied from the descriptor at creation time.
    pub title: String,
    pub icon: String,
    pub rect: WindowRect,
    pub minimized: bool,
    pub maximized: bool,
    /// Paint order only.
    pub z_index: u32,
    pub content: AppContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DesktopAppearance {
    pub dark_overlay: bool,
    pub accent_color: Option<AccentColor>,
}

/// Page-lifetime window manager state.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    /// Insertion order; stacking comes from `z_index`.
    pub windows: Vec<WindowRecord>,
    /// Highest z-index issued so far. Never decreases.
    pub max_z_index: u32,
    pub focused: Option<WindowId>,
    pub next_window_id: u64,
    pub pinned_apps: Vec<AppId>,
    pub appearance: DesktopAppearance,
    pub apps: AppCatalog,
    pub fallback_window_size: WindowSize,
    pub center_vertical_offset: i32,
}

impl DesktopState {
    pub fn new(apps: AppCatalog, config: &DesktopConfig) -> Self {
        Self {
            windows: Vec::new(),
            max_z_index: config.initial_max_z_index,
            focused: None,
            next_window_id: 1,
            pinned_apps: config.pinned_apps.clone(),
            appearance: DesktopAppearance::default(),
            apps,
            fallback_window_size: config.fallback_window_size,
            center_vertical_offset: config.center_vertical_offset,
        }
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn is_focused(&self, window_id: WindowId) -> bool {
        self.focused == Some(window_id)
    }

    /// First record (in insertion order) belonging to `app_id`.
    pub fn window_for_app(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    /// Non-minimized windows ordered back to front by z-index.
    pub fn visible_windows_by_z(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<&WindowRecord> =
            self.windows.iter().filter(|w| !w.minimized).collect();
        visible.sort_by_key(|w| (w.z_index, w.id));
        visible
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}
