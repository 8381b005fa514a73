use super::*;

#[component]
pub(super) fn StartMenu(
    state: RwSignal<DesktopState>,
    runtime: DesktopRuntimeContext,
    start_menu_open: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || start_menu_open.get() fallback=|| ()>
            <div
                id="desktop-launcher-menu"
                class="start-menu"
                role="menu"
                aria-label="Application launcher"
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        ev.stop_propagation();
                        start_menu_open.set(false);
                    }
                }
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <For
                    each=move || state.with(|desktop| desktop.apps.all().to_vec())
                    key=|app| app.app_id
                    let:app
                >
                    {{
                        let app_id = app.app_id;
                        view! {
                            <button
                                id=format!("desktop-launcher-item-{}", app_id.key())
                                role="menuitem"
                                on:click=move |_| {
                                    start_menu_open.set(false);
                                    runtime.dispatch_action(DesktopAction::OpenApp {
                                        app_id,
                                        content: None,
                                        viewport: runtime.viewport(),
                                    });
                                }
                            >
                                <img class="taskbar-app-icon" src=app.icon.clone() alt="" />
                                <span>{app.display_name.clone()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>
        </Show>
    }
}
