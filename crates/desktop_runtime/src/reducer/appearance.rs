//! Reducer helpers for the cosmetic overlay settings.

use crate::{model::DesktopState, reducer::DesktopAction};

/// Applies overlay actions. Returns `true` when `action` was an appearance action.
pub(super) fn reduce_appearance_action(state: &mut DesktopState, action: &DesktopAction) -> bool {
    match action {
        DesktopAction::ToggleDarkMode => {
            state.appearance.dark_overlay = !state.appearance.dark_overlay;
        }
        DesktopAction::SetAccentColorOverlay { color } => {
            state.appearance.accent_color = color.clone();
        }
        _ => return false,
    }
    true
}
