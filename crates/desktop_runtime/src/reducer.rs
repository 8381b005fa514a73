//! Reducer actions and transition logic for the desktop window manager.

mod appearance;

use desktop_app_contract::{AccentColor, AppId, AppView, WindowId};
use thiserror::Error;

use crate::{
    model::{
        DesktopState, DragSession, InteractionState, PointerPosition, ResizeEdge, ResizeSession,
        WindowRecord, WindowRect,
    },
    window_manager::{
        focus_window_internal, initial_window_rect, issue_z_index, next_window_id, resize_rect,
        restore_window_internal,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app, or bring its existing window forward.
    OpenApp {
        /// App to open.
        app_id: AppId,
        /// Custom content used instead of the app's factory when a new window is created.
        content: Option<AppView>,
        /// Desktop viewport used to center the new window.
        viewport: WindowRect,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window, or clear focus with `None`.
    FocusWindow {
        /// Window to focus.
        window_id: Option<WindowId>,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a window and bring it to front.
    MaximizeWindow {
        /// Window to maximize.
        window_id: WindowId,
    },
    /// Restore a minimized or maximized window and bring it to front.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Taskbar button behavior for a pinned app (open, restore, minimize, or focus).
    ActivateTaskbarApp {
        /// Pinned app.
        app_id: AppId,
        /// Desktop viewport used if a new window has to be opened.
        viewport: WindowRect,
    },
    /// Begin dragging a window.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Flip the dark overlay.
    ToggleDarkMode,
    /// Set or clear the accent overlay color.
    SetAccentColorOverlay {
        /// New color, or `None` to clear.
        color: Option<AccentColor>,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors. State is left untouched whenever one is returned.
pub enum ReducerError {
    /// The requested app is not installed.
    #[error("app with id `{0}` not found")]
    UnknownApp(String),
    /// No z-index above the current maximum is left for a new window.
    #[error("z-index counter exhausted at {0}")]
    ZIndexExhausted(u32),
}

/// Applies a [`DesktopAction`] to the desktop state.
///
/// Actions naming a window that does not exist are silent no-ops.
///
/// # Errors
///
/// Returns [`ReducerError::UnknownApp`] when an app id has no catalog entry and
/// [`ReducerError::ZIndexExhausted`] when a new window cannot be stacked above the others.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<(), ReducerError> {
    if appearance::reduce_appearance_action(state, &action) {
        return Ok(());
    }

    match action {
        DesktopAction::OpenApp {
            app_id,
            content,
            viewport,
        } => open_app(state, app_id, content, viewport)?,
        DesktopAction::CloseWindow { window_id } => {
            state.windows.retain(|w| w.id != window_id);
            if state.focused == Some(window_id) {
                state.focused = None;
            }
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|session| session.window_id == window_id)
            {
                interaction.dragging = None;
            }
            if interaction
                .resizing
                .as_ref()
                .is_some_and(|session| session.window_id == window_id)
            {
                interaction.resizing = None;
            }
        }
        DesktopAction::FocusWindow { window_id } => focus_window_internal(state, window_id),
        DesktopAction::MinimizeWindow { window_id } => {
            let Some(window) = find_window_mut(state, window_id) else {
                return Ok(());
            };
            window.minimized = true;
            window.maximized = false;
            if state.focused == Some(window_id) {
                state.focused = None;
            }
        }
        DesktopAction::MaximizeWindow { window_id } => {
            if state.window(window_id).is_none() {
                return Ok(());
            }
            let z_index = issue_z_index(state);
            if let Some(window) = find_window_mut(state, window_id) {
                window.maximized = true;
                window.minimized = false;
                if let Some(z_index) = z_index {
                    window.z_index = z_index;
                }
            }
            state.focused = Some(window_id);
        }
        DesktopAction::RestoreWindow { window_id } => restore_window_internal(state, window_id),
        DesktopAction::ActivateTaskbarApp { app_id, viewport } => {
            let existing = state
                .window_for_app(app_id)
                .map(|w| (w.id, w.minimized));
            match existing {
                Some((window_id, true)) => restore_window_internal(state, window_id),
                Some((window_id, false)) if state.is_focused(window_id) => {
                    reduce_desktop(
                        state,
                        interaction,
                        DesktopAction::MinimizeWindow { window_id },
                    )?;
                }
                Some((window_id, false)) => focus_window_internal(state, Some(window_id)),
                None => open_app(state, app_id, None, viewport)?,
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            focus_window_internal(state, Some(window_id));
            let Some(window) = state.window(window_id) else {
                return Ok(());
            };
            if window.maximized {
                return Ok(());
            }
            let rect_start = window.rect;
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                if let Some(window) = find_window_mut(state, session.window_id) {
                    if !window.maximized {
                        window.rect = session.rect_start.offset(dx, dy);
                    }
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            focus_window_internal(state, Some(window_id));
            let Some(window) = state.window(window_id) else {
                return Ok(());
            };
            if window.maximized {
                return Ok(());
            }
            let rect_start = window.rect;
            interaction.resizing = Some(ResizeSession {
                window_id,
                edge,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                if let Some(window) = find_window_mut(state, session.window_id) {
                    if !window.maximized {
                        window.rect = resize_rect(session.rect_start, session.edge, dx, dy);
                    }
                }
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::ToggleDarkMode | DesktopAction::SetAccentColorOverlay { .. } => {}
    }

    Ok(())
}

/// Opens an app named by its string key (deep links, manifests).
///
/// # Errors
///
/// Returns [`ReducerError::UnknownApp`] when `key` is not a known app or has no catalog entry.
pub fn open_app_by_key(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    key: &str,
    viewport: WindowRect,
) -> Result<(), ReducerError> {
    let app_id = key
        .parse::<AppId>()
        .map_err(|err| ReducerError::UnknownApp(err.0))?;
    reduce_desktop(
        state,
        interaction,
        DesktopAction::OpenApp {
            app_id,
            content: None,
            viewport,
        },
    )
}

fn open_app(
    state: &mut DesktopState,
    app_id: AppId,
    content: Option<AppView>,
    viewport: WindowRect,
) -> Result<(), ReducerError> {
    let Some(descriptor) = state.apps.descriptor(app_id).cloned() else {
        return Err(ReducerError::UnknownApp(app_id.key().to_string()));
    };

    if let Some(window_id) = state
        .windows
        .iter()
        .find(|w| w.app_id == app_id && w.minimized)
        .map(|w| w.id)
    {
        restore_window_internal(state, window_id);
        return Ok(());
    }
    if let Some(window_id) = state
        .windows
        .iter()
        .find(|w| w.app_id == app_id && !w.minimized)
        .map(|w| w.id)
    {
        focus_window_internal(state, Some(window_id));
        return Ok(());
    }

    let size = descriptor.default_size.unwrap_or(state.fallback_window_size);
    let rect = initial_window_rect(
        viewport,
        size,
        descriptor.default_position,
        state.center_vertical_offset,
    );

    let Some(z_index) = issue_z_index(state) else {
        return Err(ReducerError::ZIndexExhausted(state.max_z_index));
    };
    let window_id = next_window_id(state);
    let content = match content {
        Some(view) => desktop_app_contract::AppContent::new(window_id, view),
        None => descriptor.instantiate(window_id),
    };
    state.windows.push(WindowRecord {
        id: window_id,
        app_id,
        title: descriptor.display_name,
        icon: descriptor.icon,
        rect,
        minimized: false,
        maximized: false,
        z_index,
        content,
    });
    state.focused = Some(window_id);
    Ok(())
}

fn find_window_mut(state: &mut DesktopState, window_id: WindowId) -> Option<&mut WindowRecord> {
    state.windows.iter_mut().find(|w| w.id == window_id)
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::AppContent;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        apps::{AppCatalog, AppDescriptor},
        config::DesktopConfig,
    };

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1280,
        h: 752,
    };

    fn fresh_state() -> DesktopState {
        DesktopState::new(
            AppCatalog::builtin().expect("builtin catalog"),
            &DesktopConfig::default(),
        )
    }

    fn dispatch(state: &mut DesktopState, action: DesktopAction) {
        let mut interaction = InteractionState::default();
        reduce_desktop(state, &mut interaction, action).expect("reduce");
    }

    fn open(state: &mut DesktopState, app_id: AppId) -> WindowId {
        dispatch(
            state,
            DesktopAction::OpenApp {
                app_id,
                content: None,
                viewport: VIEWPORT,
            },
        );
        state
            .window_for_app(app_id)
            .expect("window for opened app")
            .id
    }

    fn record(state: &DesktopState, window_id: WindowId) -> &WindowRecord {
        state.window(window_id).expect("window record")
    }

    #[test]
    fn open_minimize_reopen_walkthrough() {
        let mut state = fresh_state();
        assert_eq!(state.max_z_index, 100);

        let about = open(&mut state, AppId::About);
        assert_eq!(state.windows.len(), 1);
        let win = record(&state, about);
        assert!(!win.minimized);
        assert!(!win.maximized);
        assert_eq!(win.z_index, 101);
        assert_eq!(state.focused, Some(about));

        let again = open(&mut state, AppId::About);
        assert_eq!(again, about);
        assert_eq!(state.windows.len(), 1);
        assert_eq!(record(&state, about).z_index, 101);
        assert_eq!(state.max_z_index, 101);
        assert_eq!(state.focused, Some(about));

        dispatch(
            &mut state,
            DesktopAction::MinimizeWindow { window_id: about },
        );
        assert!(record(&state, about).minimized);
        assert_eq!(state.focused, None);

        open(&mut state, AppId::About);
        let win = record(&state, about);
        assert!(!win.minimized);
        assert_eq!(win.z_index, 102);
        assert_eq!(state.focused, Some(about));
        assert_eq!(state.windows.len(), 1);
    }

    #[test]
    fn new_window_uses_descriptor_defaults_and_factory_content() {
        let mut state = fresh_state();
        let projects = open(&mut state, AppId::Projects);
        let win = record(&state, projects);
        assert_eq!(win.title, "My Projects");
        assert_eq!(
            win.rect,
            WindowRect {
                x: 190,
                y: 76,
                w: 900,
                h: 500
            }
        );
        assert_eq!(
            win.content,
            AppContent::new(projects, AppView::Projects { selected: None })
        );
    }

    #[test]
    fn custom_content_is_used_only_when_creating() {
        let mut state = fresh_state();
        let detail = AppView::Projects {
            selected: Some("proj-git-smart".to_string()),
        };
        dispatch(
            &mut state,
            DesktopAction::OpenApp {
                app_id: AppId::Projects,
                content: Some(detail.clone()),
                viewport: VIEWPORT,
            },
        );
        let projects = state.window_for_app(AppId::Projects).expect("projects").id;
        assert_eq!(record(&state, projects).content.view, detail);

        dispatch(
            &mut state,
            DesktopAction::OpenApp {
                app_id: AppId::Projects,
                content: Some(AppView::Projects { selected: None }),
                viewport: VIEWPORT,
            },
        );
        assert_eq!(record(&state, projects).content.view, detail);
    }

    #[test]
    fn fallback_size_applies_without_manifest_defaults() {
        let catalog = AppCatalog::from_descriptors(vec![AppDescriptor::new(
            AppId::About,
            "About Me",
            "/os-icons/user-profile.svg",
        )]);
        let mut state = DesktopState::new(catalog, &DesktopConfig::default());
        let about = open(&mut state, AppId::About);
        assert_eq!(
            record(&state, about).rect,
            WindowRect {
                x: 290,
                y: 76,
                w: 700,
                h: 500
            }
        );
    }

    #[test]
    fn unknown_app_leaves_state_untouched() {
        let mut state = fresh_state();
        let about = open(&mut state, AppId::About);
        let before = state.clone();
        let mut interaction = InteractionState::default();

        let err = open_app_by_key(&mut state, &mut interaction, "unknown-app", VIEWPORT)
            .expect_err("unknown key");
        assert_eq!(err, ReducerError::UnknownApp("unknown-app".to_string()));
        assert_eq!(state, before);
        assert_eq!(state.focused, Some(about));
    }

    #[test]
    fn app_missing_from_catalog_is_unknown() {
        let catalog = AppCatalog::from_descriptors(vec![AppDescriptor::new(
            AppId::About,
            "About Me",
            "/os-icons/user-profile.svg",
        )]);
        let mut state = DesktopState::new(catalog, &DesktopConfig::default());
        let before = state.clone();
        let mut interaction = InteractionState::default();

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::Settings,
                content: None,
                viewport: VIEWPORT,
            },
        )
        .expect_err("settings not installed");
        assert_eq!(err, ReducerError::UnknownApp("settings".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn open_by_key_accepts_known_keys() {
        let mut state = fresh_state();
        let mut interaction = InteractionState::default();
        open_app_by_key(&mut state, &mut interaction, "recycle-bin", VIEWPORT)
            .expect("known key");
        assert!(state.window_for_app(AppId::RecycleBin).is_some());
    }

    #[test]
    fn second_app_stacks_above_first_and_takes_focus() {
        let mut state = fresh_state();
        let about = open(&mut state, AppId::About);
        let projects = open(&mut state, AppId::Projects);

        assert_eq!(state.windows.len(), 2);
        assert!(record(&state, projects).z_index > record(&state, about).z_index);
        assert_eq!(state.focused, Some(projects));
        let painted: Vec<WindowId> = state.visible_windows_by_z().iter().map(|w| w.id).collect();
        assert_eq!(painted, vec![about, projects]);
    }

    #[test]
    fn reopening_after_close_issues_a_new_window_id() {
        let mut state = fresh_state();
        let first = open(&mut state, AppId::Contact);
        dispatch(&mut state, DesktopAction::CloseWindow { window_id: first });
        assert!(state.windows.is_empty());
        assert_eq!(state.focused, None);

        let second = open(&mut state, AppId::Contact);
        assert_ne!(first, second);
        assert_eq!(record(&state, second).content.window_id, second);
    }

    #[test]
    fn repeated_opens_never_yield_two_visible_windows_per_app() {
        let mut state = fresh_state();
        let sequence = [
            AppId::About,
            AppId::Projects,
            AppId::About,
            AppId::Resume,
            AppId::Projects,
            AppId::About,
        ];
        for (step, app_id) in sequence.into_iter().enumerate() {
            let window_id = open(&mut state, app_id);
            if step % 2 == 1 {
                dispatch(&mut state, DesktopAction::MinimizeWindow { window_id });
            }
            for app in AppId::ALL {
                let visible = state
                    .windows
                    .iter()
                    .filter(|w| w.app_id == app && !w.minimized)
                    .count();
                assert!(visible <= 1, "{app} has {visible} visible windows");
            }
        }
        assert_eq!(state.windows.len(), 3);
    }

    #[test]
    fn raising_operations_issue_strictly_increasing_z_indices() {
        let mut state = fresh_state();
        let about = open(&mut state, AppId::About);
        let projects = open(&mut state, AppId::Projects);
        let mut issued = vec![record(&state, about).z_index, record(&state, projects).z_index];

        let steps = [
            DesktopAction::FocusWindow {
                window_id: Some(about),
            },
            DesktopAction::MaximizeWindow {
                window_id: projects,
            },
            DesktopAction::MaximizeWindow {
                window_id: projects,
            },
            DesktopAction::RestoreWindow { window_id: about },
            DesktopAction::RestoreWindow { window_id: about },
        ];
        let targets = [about, projects, projects, about, about];
        for (action, target) in steps.into_iter().zip(targets) {
            let before = state.max_z_index;
            dispatch(&mut state, action);
            assert!(state.max_z_index > before);
            issued.push(record(&state, target).z_index);
        }

        let mut deduped = issued.clone();
        deduped.dedup();
        assert_eq!(deduped, issued);
        assert!(issued.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn focusing_the_focused_window_is_a_noop() {
        let mut state = fresh_state();
        let about = open(&mut state, AppId::About);
        let before = state.clone();
        dispatch(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: Some(about),
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn focusing_nothing_clears_focus_without_touching_windows() {
        let mut state = fresh_state();
        let about = open(&mut state, AppId::About);
        let windows = state.windows.clone();

        dispatch(&mut state, DesktopAction::FocusWindow { window_id: None });
        assert_eq!(state.focused, None);
        assert_eq!(state.windows, windows);

        let max_z = state.max_z_index;
        dispatch(&mut state, DesktopAction::FocusWindow { window_id: None });
        assert_eq!(state.max_z_index, max_z);

        dispatch(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: Some(about),
            },
        );
        assert_eq!(state.focused, Some(about));
        assert_eq!(record(&state, about).z_index, max_z + 1);
    }

    #[test]
    fn focusing_a_minimized_window_unminimizes_it() {
        let mut state = fresh_state();
        let about = open(&mut state, AppId::About);
        dispatch(
            &mut state,
            DesktopAction::MinimizeWindow { window_id: about },
        );
        dispatch(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: Some(about),
            },
        );
        assert!(!record(&state, about).minimized);
        assert_eq!(state.focused, Some(about));
    }

    #[test]
    fn minimizing_unfocused_window_keeps_focus() {
        let mut state = fresh_state();
        let about = open(&mut state, AppId::About);
        let projects = open(&mut state, AppId::Projects);
        let z_before = record(&state, about).z_index;

        dispatch(
            &mut state,
            DesktopAction::MinimizeWindow { window_id: about },
        );
        assert_eq!(state.focused, Some(projects));
        assert!(record(&state, about).minimized);
        assert_eq!(record(&state, about).z_index, z_before);
        assert_eq!(state.visible_windows_by_z().len(), 1);
    }

    #[test]
    fn maximize_then_minimize_clears_maximized_flag() {
        let mut state = fresh_state();
        let about = open(&mut state, AppId::About);
        dispatch(
            &mut state,
            DesktopAction::MaximizeWindow { window_id: about },
        );
        assert!(record(&state, about).maximized);

        dispatch(
            &mut state,
            DesktopAction::MinimizeWindow { window_id: about },
        );
        let win = record(&state, about);
        assert!(win.minimized);
        assert!(!win.maximized);

        dispatch(&mut state, DesktopAction::RestoreWindow { window_id: about });
        let win = record(&state, about);
        assert!(!win.minimized);
        assert!(!win.maximized);
        assert_eq!(state.focused, Some(about));
    }

    #[test]
    fn unknown_window_ids_are_noops() {
        let mut state = fresh_state();
        open(&mut state, AppId::About);
        let before = state.clone();
        let ghost = WindowId(999);

        for action in [
            DesktopAction::CloseWindow { window_id: ghost },
            DesktopAction::MinimizeWindow { window_id: ghost },
            DesktopAction::MaximizeWindow { window_id: ghost },
            DesktopAction::RestoreWindow { window_id: ghost },
            DesktopAction::FocusWindow {
                window_id: Some(ghost),
            },
        ] {
            dispatch(&mut state, action);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn taskbar_activation_cycles_open_minimize_restore_focus() {
        let mut state = fresh_state();
        let activate = |state: &mut DesktopState| {
            dispatch(
                state,
                DesktopAction::ActivateTaskbarApp {
                    app_id: AppId::Resume,
                    viewport: VIEWPORT,
                },
            )
        };

        activate(&mut state);
        let resume = state.window_for_app(AppId::Resume).expect("resume").id;
        assert_eq!(state.focused, Some(resume));

        activate(&mut state);
        assert!(record(&state, resume).minimized);
        assert_eq!(state.focused, None);

        activate(&mut state);
        assert!(!record(&state, resume).minimized);
        assert_eq!(state.focused, Some(resume));

        open(&mut state, AppId::About);
        activate(&mut state);
        assert_eq!(state.focused, Some(resume));
        assert!(!record(&state, resume).minimized);
        assert_eq!(state.windows.len(), 2);
    }

    #[test]
    fn drag_moves_window_and_focuses_it() {
        let mut state = fresh_state();
        let mut interaction = InteractionState::default();
        let about = open(&mut state, AppId::About);
        let projects = open(&mut state, AppId::Projects);
        let original = record(&state, about).rect;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: about,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        )
        .expect("begin move");
        assert_eq!(state.focused, Some(about));
        assert_ne!(state.focused, Some(projects));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 35, y: 50 },
            },
        )
        .expect("update move");
        assert_eq!(record(&state, about).rect, original.offset(25, 40));

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove).expect("end move");
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn maximized_windows_do_not_start_drags() {
        let mut state = fresh_state();
        let mut interaction = InteractionState::default();
        let about = open(&mut state, AppId::About);
        dispatch(
            &mut state,
            DesktopAction::MaximizeWindow { window_id: about },
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: about,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        )
        .expect("begin move");
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn resize_respects_minimum_size() {
        let mut state = fresh_state();
        let mut interaction = InteractionState::default();
        let contact = open(&mut state, AppId::Contact);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: contact,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        )
        .expect("begin resize");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: -1000, y: -1000 },
            },
        )
        .expect("update resize");

        let rect = record(&state, contact).rect;
        assert_eq!(rect.w, crate::config::MIN_WINDOW_WIDTH);
        assert_eq!(rect.h, crate::config::MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn closing_dragged_window_ends_the_drag() {
        let mut state = fresh_state();
        let mut interaction = InteractionState::default();
        let about = open(&mut state, AppId::About);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: about,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        )
        .expect("begin move");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: about },
        )
        .expect("close");
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn exhausted_z_counter_never_hands_out_a_duplicate() {
        let mut state = DesktopState::new(
            AppCatalog::builtin().expect("builtin catalog"),
            &DesktopConfig {
                initial_max_z_index: u32::MAX - 1,
                ..DesktopConfig::default()
            },
        );
        let mut interaction = InteractionState::default();
        let about = open(&mut state, AppId::About);
        assert_eq!(record(&state, about).z_index, u32::MAX);

        let before = state.clone();
        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::Projects,
                content: None,
                viewport: VIEWPORT,
            },
        )
        .expect_err("no z-index left");
        assert_eq!(err, ReducerError::ZIndexExhausted(u32::MAX));
        assert_eq!(state, before);

        dispatch(&mut state, DesktopAction::MinimizeWindow { window_id: about });
        dispatch(&mut state, DesktopAction::RestoreWindow { window_id: about });
        assert_eq!(record(&state, about).z_index, u32::MAX);
        assert!(!record(&state, about).minimized);
        assert_eq!(state.focused, Some(about));
    }

    #[test]
    fn new_windows_get_content_from_the_descriptor_factory() {
        let mut state = fresh_state();
        let resume = open(&mut state, AppId::Resume);
        let expected = state
            .apps
            .descriptor(AppId::Resume)
            .expect("resume descriptor")
            .instantiate(resume);
        assert_eq!(record(&state, resume).content, expected);
    }
}
