//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container and the app command bridge. Timers and
//! browser queries live in [`crate::host`], UI composition in [`crate::components`].

use desktop_app_contract::{AppCommand, AppServices, WindowId};
use leptos::*;

use crate::{
    apps::AppCatalog,
    config::{DesktopConfig, TASKBAR_HEIGHT_PX},
    host,
    model::{DesktopState, InteractionState, WindowRect},
    reducer::{open_app_by_key, reduce_desktop, DesktopAction, ReducerError},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Runtime knobs the provider was mounted with.
    pub config: StoredValue<DesktopConfig>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Bridge for commands sent by app views through [`AppServices`].
    pub app_commands: Callback<AppCommand>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Current desktop viewport (browser window minus the taskbar).
    pub fn viewport(&self) -> WindowRect {
        host::desktop_viewport_rect(TASKBAR_HEIGHT_PX)
    }

    /// Opens an app by its string key, logging unknown keys.
    pub fn open_app_by_key(&self, key: &str) -> Result<(), ReducerError> {
        let viewport = self.viewport();
        commit(self.state, self.interaction, |desktop, ui| {
            open_app_by_key(desktop, ui, key, viewport)
        })
    }

    /// Service bundle handed to the app mounted in `window_id`.
    pub fn app_services(&self, window_id: WindowId) -> AppServices {
        let state = self.state;
        AppServices::new(
            window_id,
            self.app_commands,
            Signal::derive(move || state.with(|desktop| desktop.appearance.dark_overlay)),
            Signal::derive(move || state.with(|desktop| desktop.appearance.accent_color.clone())),
        )
    }
}

// Runs one transition against untracked copies and only writes signals that changed.
fn commit(
    state: RwSignal<DesktopState>,
    interaction: RwSignal<InteractionState>,
    transition: impl FnOnce(&mut DesktopState, &mut InteractionState) -> Result<(), ReducerError>,
) -> Result<(), ReducerError> {
    let mut desktop = state.get_untracked();
    let mut ui = interaction.get_untracked();
    let previous_ui = ui.clone();

    if let Err(err) = transition(&mut desktop, &mut ui) {
        logging::error!("desktop reducer error: {err}");
        return Err(err);
    }
    if state.with_untracked(|previous| *previous != desktop) {
        state.set(desktop);
    }
    if ui != previous_ui {
        interaction.set(ui);
    }
    Ok(())
}

fn app_command_action(command: AppCommand, viewport: WindowRect) -> DesktopAction {
    match command {
        AppCommand::ToggleDarkMode => DesktopAction::ToggleDarkMode,
        AppCommand::SetAccentColorOverlay { color } => {
            DesktopAction::SetAccentColorOverlay { color }
        }
        AppCommand::OpenApp { app_id, view } => DesktopAction::OpenApp {
            app_id,
            content: view,
            viewport,
        },
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and starts the host timers.
pub fn DesktopProvider(
    /// Runtime knobs; defaults apply when omitted.
    #[prop(optional)]
    config: Option<DesktopConfig>,
    /// Value of the `?open=` query parameter: an app key or `projects:<project-id>`.
    #[prop(optional_no_strip)]
    deep_link: Option<String>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let apps = AppCatalog::builtin().unwrap_or_else(|err| {
        logging::error!("failed to load app catalog: {err}");
        AppCatalog::default()
    });
    let state = create_rw_signal(DesktopState::new(apps, &config));
    let interaction = create_rw_signal(InteractionState::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let _ = commit(state, interaction, |desktop, ui| {
            reduce_desktop(desktop, ui, action)
        });
    });
    let app_commands = Callback::new(move |command: AppCommand| {
        let viewport = host::desktop_viewport_rect(TASKBAR_HEIGHT_PX);
        dispatch.call(app_command_action(command, viewport));
    });

    let runtime = DesktopRuntimeContext {
        state,
        interaction,
        config: store_value(config),
        dispatch,
        app_commands,
    };

    provide_context(runtime);

    host::install_boot_sequence(runtime, deep_link);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
