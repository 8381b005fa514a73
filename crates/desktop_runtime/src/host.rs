//! Browser-side helpers: viewport queries and the boot-time timers.

use std::time::Duration;

use leptos::*;

use desktop_app_contract::{AppId, AppView};

use crate::{
    config::DesktopConfig, model::WindowRect, reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

const FALLBACK_VIEWPORT_WIDTH: i32 = 1024;
const FALLBACK_VIEWPORT_HEIGHT: i32 = 768;

/// Returns the desktop area available to windows: the browser window minus the taskbar.
pub fn desktop_viewport_rect(taskbar_height_px: i32) -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT_WIDTH);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);

            return WindowRect {
                x: 0,
                y: 0,
                w: width.max(320),
                h: (height - taskbar_height_px).max(220),
            };
        }
    }

    WindowRect {
        x: 0,
        y: 0,
        w: FALLBACK_VIEWPORT_WIDTH,
        h: FALLBACK_VIEWPORT_HEIGHT - taskbar_height_px,
    }
}

/// One step of the boot sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum BootStep {
    /// Dispatch a reducer action.
    Dispatch(DesktopAction),
    /// Open an app through its string key. Unknown keys are logged and skipped.
    OpenByKey(String),
}

/// Boot steps in order: the autostart app, then the `?open=` deep link on top of it.
///
/// The deep link is either an app key or `projects:<project-id>`, which opens the project
/// gallery on that project's detail page.
pub fn boot_steps(
    deep_link: Option<&str>,
    config: &DesktopConfig,
    viewport: WindowRect,
) -> Vec<BootStep> {
    let mut steps = Vec::new();
    if let Some(app_id) = config.autostart_app {
        steps.push(BootStep::Dispatch(DesktopAction::OpenApp {
            app_id,
            content: None,
            viewport,
        }));
    }

    let Some(link) = deep_link.map(str::trim).filter(|link| !link.is_empty()) else {
        return steps;
    };
    let (key, target) = match link.split_once(':') {
        Some((key, target)) => (key.trim(), Some(target.trim())),
        None => (link, None),
    };
    match target.filter(|target| !target.is_empty()) {
        Some(project_id) if key == AppId::Projects.key() => {
            steps.push(BootStep::Dispatch(DesktopAction::OpenApp {
                app_id: AppId::Projects,
                content: Some(AppView::Projects {
                    selected: Some(project_id.to_string()),
                }),
                viewport,
            }));
        }
        _ => steps.push(BootStep::OpenByKey(key.to_string())),
    }
    steps
}

/// Runs [`boot_steps`] once the autostart delay elapses.
///
/// The timer is cleared when the provider's owner is disposed.
pub(crate) fn install_boot_sequence(runtime: DesktopRuntimeContext, deep_link: Option<String>) {
    let config = runtime.config.get_value();
    if config.autostart_app.is_none() && deep_link.is_none() {
        return;
    }

    let delay = Duration::from_millis(config.autostart_delay_ms);
    match set_timeout_with_handle(
        move || {
            for step in boot_steps(deep_link.as_deref(), &config, runtime.viewport()) {
                run_boot_step(runtime, step);
            }
        },
        delay,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("boot timer could not be scheduled: {err:?}"),
    }
}

fn run_boot_step(runtime: DesktopRuntimeContext, step: BootStep) {
    match step {
        BootStep::Dispatch(action) => runtime.dispatch_action(action),
        BootStep::OpenByKey(key) => match runtime.open_app_by_key(&key) {
            Ok(()) => logging::log!("opened deep-linked app `{key}`"),
            Err(_) => logging::warn!("ignoring deep link `?open={key}`"),
        },
    }
}
