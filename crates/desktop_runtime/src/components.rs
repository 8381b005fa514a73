//! Desktop shell UI composition and interaction surfaces.

mod menus;
mod taskbar;
mod window;

use desktop_app_contract::{AccentColor, AppId, WindowId};
use leptos::*;

use self::{taskbar::Taskbar, window::DesktopWindow};

use crate::{
    model::{DesktopState, PointerPosition, ResizeEdge},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const DESKTOP_ICON_LEFT_PX: i32 = 50;
const DESKTOP_ICON_TOP_PX: i32 = 50;
const DESKTOP_ICON_SPACING_PX: i32 = 100;

#[component]
/// Renders the full desktop shell: icons, windows, overlays and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let start_menu_open = create_rw_signal(false);

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();

        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div
                class="desktop-surface"
                on:click=move |_| {
                    start_menu_open.set(false);
                    runtime.dispatch_action(DesktopAction::FocusWindow { window_id: None });
                }
            >
                <For
                    each=move || state.with(|desktop| desktop.apps.desktop_icons())
                    key=|app| app.app_id
                    let:app
                >
                    {{
                        let app_id = app.app_id;
                        let (left, top) = desktop_icon_position(app.desktop_slot.unwrap_or(0));
                        view! {
                            <button
                                class="desktop-icon"
                                data-app=app_id.key()
                                style=format!("left:{left}px;top:{top}px;")
                                on:click=move |ev| ev.stop_propagation()
                                on:dblclick=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::OpenApp {
                                        app_id,
                                        content: None,
                                        viewport: runtime.viewport(),
                                    });
                                }
                            >
                                <img class="desktop-icon-image" src=app.icon.clone() alt="" />
                                <span class="desktop-icon-label">{app.display_name.clone()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="desktop-window-layer">
                <For
                    each=move || state.with(|desktop| desktop.windows.iter().map(|w| w.id).collect::<Vec<_>>())
                    key=|window_id| window_id.0
                    let:window_id
                >
                    <DesktopWindow window_id=window_id />
                </For>
            </div>

            <Show
                when=move || state.with(|desktop| desktop.appearance.dark_overlay)
                fallback=|| ()
            >
                <div class="desktop-overlay dark" aria-hidden="true" style=dark_overlay_style()></div>
            </Show>
            {move || {
                state
                    .with(|desktop| desktop.appearance.accent_color.clone())
                    .map(|color| {
                        view! {
                            <div
                                class="desktop-overlay accent"
                                aria-hidden="true"
                                style=accent_overlay_style(&color)
                            ></div>
                        }
                    })
            }}

            <Taskbar start_menu_open />
        </div>
    }
}

fn desktop_icon_position(slot: u32) -> (i32, i32) {
    let slot = i32::try_from(slot).unwrap_or(i32::MAX / DESKTOP_ICON_SPACING_PX);
    (
        DESKTOP_ICON_LEFT_PX,
        DESKTOP_ICON_TOP_PX + slot * DESKTOP_ICON_SPACING_PX,
    )
}

fn dark_overlay_style() -> &'static str {
    "position:fixed;inset:0;pointer-events:none;background-color:rgba(0,0,0,0.3);"
}

fn accent_overlay_style(color: &AccentColor) -> String {
    format!(
        "position:fixed;inset:0;pointer-events:none;background-color:{};opacity:0.15;",
        color.as_str()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct PinnedTaskbarAppState {
    running: bool,
    active: bool,
}

fn pinned_taskbar_app_state(state: &DesktopState, app_id: AppId) -> PinnedTaskbarAppState {
    let mut status = PinnedTaskbarAppState::default();
    for win in state.windows.iter().filter(|win| win.app_id == app_id) {
        status.running = true;
        if state.is_focused(win.id) && !win.minimized {
            status.active = true;
        }
    }
    status
}

fn taskbar_pinned_button_class(status: PinnedTaskbarAppState) -> &'static str {
    match (status.running, status.active) {
        (_, true) => "taskbar-app running active",
        (true, false) => "taskbar-app running",
        (false, false) => "taskbar-app",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClockSnapshot {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl TaskbarClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }
}

fn format_taskbar_clock_time(snapshot: TaskbarClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{:02}:{:02} {}", hour, snapshot.minute, suffix)
}

fn format_taskbar_clock_date(snapshot: TaskbarClockSnapshot) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        snapshot.month, snapshot.day, snapshot.year
    )
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}

fn window_frame_class(focused: bool, maximized: bool) -> String {
    let mut class = String::from("desktop-window");
    if focused {
        class.push_str(" focused");
    }
    if maximized {
        class.push_str(" maximized");
    }
    class
}
