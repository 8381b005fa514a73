use super::*;
use crate::apps::render_window_contents;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = create_memo(move |_| runtime.state.with(|desktop| desktop.window(window_id).cloned()));
    let is_focused = create_memo(move |_| runtime.state.with(|desktop| desktop.is_focused(window_id)));

    let focus = move |_| {
        if !is_focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: Some(window_id),
            });
        }
    };
    let minimize = move || runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
    let close = move || runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    let toggle_maximize = move || {
        if window.with_untracked(|win| win.as_ref().is_some_and(|win| win.maximized)) {
            runtime.dispatch_action(DesktopAction::RestoreWindow { window_id });
        } else {
            runtime.dispatch_action(DesktopAction::MaximizeWindow { window_id });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let swallow_pointer = move |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    let is_maximized =
        create_memo(move |_| window.with(|win| win.as_ref().is_some_and(|win| win.maximized)));
    let frame_style = move || {
        window.with(|win| {
            win.as_ref()
                .map(|win| {
                    let rect = if win.maximized {
                        runtime.viewport()
                    } else {
                        win.rect
                    };
                    format!(
                        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                        rect.x, rect.y, rect.w, rect.h, win.z_index
                    )
                })
                .unwrap_or_default()
        })
    };
    let (title, icon) = window
        .get_untracked()
        .map(|win| (win.title, win.icon))
        .unwrap_or_default();

    view! {
        <Show
            when=move || window.with(|win| win.as_ref().is_some_and(|win| !win.minimized))
            fallback=|| ()
        >
            <section
                id=window_id.to_string()
                class=move || window_frame_class(is_focused.get(), is_maximized.get())
                style=frame_style
                on:pointerdown=focus
                role="dialog"
                aria-label=title.clone()
            >
                <header
                    class="titlebar"
                    on:pointerdown=begin_move
                    on:dblclick=move |ev: web_sys::MouseEvent| {
                        stop_mouse_event(&ev);
                        toggle_maximize();
                    }
                >
                    <div class="titlebar-title">
                        <img class="titlebar-app-icon" src=icon.clone() alt="" />
                        <span>{title.clone()}</span>
                    </div>
                    <div class="titlebar-controls">
                        <button
                            aria-label="Minimize window"
                            on:pointerdown=swallow_pointer
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                minimize();
                            }
                        >
                            "_"
                        </button>
                        <button
                            aria-label=move || {
                                if is_maximized.get() { "Restore window" } else { "Maximize window" }
                            }
                            on:pointerdown=swallow_pointer
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                toggle_maximize();
                            }
                        >
                            {move || if is_maximized.get() { "❐" } else { "□" }}
                        </button>
                        <button
                            class="titlebar-close"
                            aria-label="Close window"
                            on:pointerdown=swallow_pointer
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                close();
                            }
                        >
                            "×"
                        </button>
                    </div>
                </header>
                <div class="window-body">
                    <WindowBody window_id=window_id />
                </div>
                <Show when=move || !is_maximized.get() fallback=|| ()>
                    <WindowResizeHandle window_id=window_id edge=ResizeEdge::North />
                    <WindowResizeHandle window_id=window_id edge=ResizeEdge::South />
                    <WindowResizeHandle window_id=window_id edge=ResizeEdge::East />
                    <WindowResizeHandle window_id=window_id edge=ResizeEdge::West />
                    <WindowResizeHandle window_id=window_id edge=ResizeEdge::NorthEast />
                    <WindowResizeHandle window_id=window_id edge=ResizeEdge::NorthWest />
                    <WindowResizeHandle window_id=window_id edge=ResizeEdge::SouthEast />
                    <WindowResizeHandle window_id=window_id edge=ResizeEdge::SouthWest />
                </Show>
            </section>
        </Show>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}

// Content is mounted once per window; later state changes never remount the app.
#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let services = runtime.app_services(window_id);
    let contents = runtime
        .state
        .with_untracked(|desktop| desktop.window(window_id).map(|w| w.content.clone()))
        .map(|content| render_window_contents(&content, services))
        .unwrap_or_else(|| view! { <p>"Closed"</p> }.into_view());

    view! {
        <div class="window-body-content">
            {contents}
        </div>
    }
}
