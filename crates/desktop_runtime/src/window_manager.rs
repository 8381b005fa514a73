//! Shared window-manager transition helpers used by the desktop reducer.

use desktop_app_contract::WindowId;

use crate::{
    config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH},
    model::{DesktopState, PointerPosition, ResizeEdge, WindowRect, WindowSize},
};

/// Issues the next z-index, strictly greater than every value issued before.
///
/// Returns `None` once the counter is exhausted; the counter is then left unchanged.
pub fn issue_z_index(state: &mut DesktopState) -> Option<u32> {
    let next = state.max_z_index.checked_add(1)?;
    state.max_z_index = next;
    Some(next)
}

pub fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

/// Focuses `target`, or clears focus when `target` is `None`.
///
/// No-op when `target` already equals the current focus. Focusing a minimized window
/// un-minimizes it. Unknown ids are ignored. With an exhausted z-index counter the window is
/// focused without being raised.
pub fn focus_window_internal(state: &mut DesktopState, target: Option<WindowId>) {
    if target == state.focused {
        return;
    }
    let Some(window_id) = target else {
        state.focused = None;
        return;
    };
    if state.window(window_id).is_none() {
        return;
    }

    let z_index = issue_z_index(state);
    if let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) {
        if let Some(z_index) = z_index {
            window.z_index = z_index;
        }
        window.minimized = false;
    }
    state.focused = Some(window_id);
}

/// Clears `minimized`/`maximized`, raises and focuses the window.
pub fn restore_window_internal(state: &mut DesktopState, window_id: WindowId) {
    if state.window(window_id).is_none() {
        return;
    }
    let z_index = issue_z_index(state);
    if let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) {
        window.minimized = false;
        window.maximized = false;
        if let Some(z_index) = z_index {
            window.z_index = z_index;
        }
    }
    state.focused = Some(window_id);
}

/// Initial rect for a new window: descriptor position if given, else centered on the viewport
/// and lifted by `vertical_offset`.
pub fn initial_window_rect(
    viewport: WindowRect,
    size: WindowSize,
    position: Option<PointerPosition>,
    vertical_offset: i32,
) -> WindowRect {
    let PointerPosition { x, y } = position.unwrap_or(PointerPosition {
        x: viewport.x + viewport.w / 2 - size.width / 2,
        y: viewport.y + viewport.h / 2 - size.height / 2 - vertical_offset,
    });
    WindowRect {
        x,
        y,
        w: size.width,
        h: size.height,
    }
}

/// Applies resize deltas for a given edge/corner drag and enforces the minimum window size.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    let resized = match edge {
        ResizeEdge::East => WindowRect {
            w: start.w + dx,
            ..start
        },
        ResizeEdge::West => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            ..start
        },
        ResizeEdge::South => WindowRect {
            h: start.h + dy,
            ..start
        },
        ResizeEdge::North => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            ..start
        },
        ResizeEdge::NorthEast => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            w: start.w + dx,
            ..start
        },
        ResizeEdge::NorthWest => WindowRect {
            x: start.x + dx,
            y: start.y + dy,
            w: start.w - dx,
            h: start.h - dy,
        },
        ResizeEdge::SouthEast => WindowRect {
            w: start.w + dx,
            h: start.h + dy,
            ..start
        },
        ResizeEdge::SouthWest => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            h: start.h + dy,
            ..start
        },
    };
    pin_opposite_edges(start, edge, resized.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT))
}

// West/north drags move the origin; once the minimum size is hit the far edge must stay put.
fn pin_opposite_edges(start: WindowRect, edge: ResizeEdge, mut rect: WindowRect) -> WindowRect {
    if matches!(
        edge,
        ResizeEdge::West | ResizeEdge::NorthWest | ResizeEdge::SouthWest
    ) {
        rect.x = start.x + start.w - rect.w;
    }
    if matches!(
        edge,
        ResizeEdge::North | ResizeEdge::NorthWest | ResizeEdge::NorthEast
    ) {
        rect.y = start.y + start.h - rect.h;
    }
    rect
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1280,
        h: 752,
    };

    #[test]
    fn initial_rect_centers_and_lifts_without_descriptor_position() {
        let rect = initial_window_rect(
            VIEWPORT,
            WindowSize {
                width: 700,
                height: 500,
            },
            None,
            50,
        );
        assert_eq!(
            rect,
            WindowRect {
                x: 290,
                y: 76,
                w: 700,
                h: 500
            }
        );
    }

    #[test]
    fn initial_rect_prefers_descriptor_position() {
        let rect = initial_window_rect(
            VIEWPORT,
            WindowSize {
                width: 600,
                height: 400,
            },
            Some(PointerPosition { x: 40, y: 30 }),
            50,
        );
        assert_eq!(
            rect,
            WindowRect {
                x: 40,
                y: 30,
                w: 600,
                h: 400
            }
        );
    }

    #[test]
    fn z_index_counter_stops_at_the_ceiling_instead_of_repeating() {
        let mut state = DesktopState::new(
            crate::apps::AppCatalog::builtin().expect("builtin catalog"),
            &crate::config::DesktopConfig {
                initial_max_z_index: u32::MAX - 1,
                ..crate::config::DesktopConfig::default()
            },
        );
        assert_eq!(issue_z_index(&mut state), Some(u32::MAX));
        assert_eq!(issue_z_index(&mut state), None);
        assert_eq!(state.max_z_index, u32::MAX);
    }

    #[test]
    fn west_resize_keeps_right_edge_when_clamped() {
        let start = WindowRect {
            x: 100,
            y: 100,
            w: 400,
            h: 300,
        };
        let rect = resize_rect(start, ResizeEdge::West, 250, 0);
        assert_eq!(rect.w, MIN_WINDOW_WIDTH);
        assert_eq!(rect.x + rect.w, start.x + start.w);
    }

    #[test]
    fn south_east_resize_grows_both_axes() {
        let start = WindowRect {
            x: 10,
            y: 10,
            w: 400,
            h: 300,
        };
        assert_eq!(
            resize_rect(start, ResizeEdge::SouthEast, 25, 40),
            WindowRect {
                x: 10,
                y: 10,
                w: 425,
                h: 340
            }
        );
    }
}
