use std::time::Duration;

use super::*;

#[component]
pub(super) fn Taskbar(start_menu_open: RwSignal<bool>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(TaskbarClockSnapshot::now());

    let tick = Duration::from_millis(runtime.config.with_value(|config| config.clock_tick_ms));
    match set_interval_with_handle(move || clock_now.set(TaskbarClockSnapshot::now()), tick) {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => logging::warn!("taskbar clock could not be scheduled: {err:?}"),
    }

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if start_menu_open.get_untracked() {
            start_menu_open.set(false);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Desktop taskbar"
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <div class="taskbar-left">
                <button
                    id="taskbar-start-button"
                    class="start-button"
                    aria-label="Open application launcher"
                    aria-haspopup="menu"
                    aria-controls="desktop-launcher-menu"
                    aria-expanded=move || start_menu_open.get()
                    on:click=move |_| start_menu_open.update(|open| *open = !*open)
                >
                    <span>"Start"</span>
                </button>

                <div class="taskbar-pins" role="group" aria-label="Pinned apps">
                    <For
                        each=move || {
                            state.with(|desktop| {
                                desktop
                                    .pinned_apps
                                    .iter()
                                    .filter_map(|app_id| desktop.apps.descriptor(*app_id).cloned())
                                    .collect::<Vec<_>>()
                            })
                        }
                        key=|app| app.app_id
                        let:app
                    >
                        {{
                            let app_id = app.app_id;
                            let title = app.display_name.clone();
                            view! {
                                <button
                                    class=move || {
                                        state.with(|desktop| {
                                            taskbar_pinned_button_class(
                                                pinned_taskbar_app_state(desktop, app_id),
                                            )
                                        })
                                    }
                                    data-app=app_id.key()
                                    title=title.clone()
                                    aria-label=title
                                    aria-pressed=move || {
                                        state.with(|desktop| pinned_taskbar_app_state(desktop, app_id).active)
                                    }
                                    on:click=move |_| {
                                        start_menu_open.set(false);
                                        runtime.dispatch_action(DesktopAction::ActivateTaskbarApp {
                                            app_id,
                                            viewport: runtime.viewport(),
                                        });
                                    }
                                >
                                    <img class="taskbar-app-icon" src=app.icon.clone() alt="" />
                                    <span class="taskbar-indicator" aria-hidden="true"></span>
                                </button>
                            }
                        }}
                    </For>
                </div>
            </div>

            <div class="taskbar-right">
                <div
                    class="taskbar-clock"
                    aria-label=move || {
                        let now = clock_now.get();
                        format!("{}, {}", format_taskbar_clock_date(now), format_taskbar_clock_time(now))
                    }
                >
                    <span class="taskbar-clock-time">
                        {move || format_taskbar_clock_time(clock_now.get())}
                    </span>
                    <span class="taskbar-clock-date">
                        {move || format_taskbar_clock_date(clock_now.get())}
                    </span>
                </div>
            </div>

            <super::menus::StartMenu state runtime start_menu_open />
        </footer>
    }
}
