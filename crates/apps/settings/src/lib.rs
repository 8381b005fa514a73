//! Personalization app for the desktop's cosmetic overlays.
//!
//! All changes go through the injected [`desktop_app_contract::ThemeService`], so the overlay
//! state stays owned by the desktop runtime.

use desktop_app_contract::{AccentColor, AppServices};
use leptos::*;

/// Accent colors offered by the palette, in display order.
pub const ACCENT_PALETTE: [&str; 5] = ["#0078D4", "#BF00FF", "#10B981", "#FFC300", "#E74C3C"];

const CURRENT_WALLPAPER: &str = "w11-bg-light.png";

fn palette() -> Vec<AccentColor> {
    ACCENT_PALETTE
        .iter()
        .filter_map(|raw| AccentColor::parse(raw).ok())
        .collect()
}

/// Choosing the active accent again clears it.
fn next_accent(current: Option<&AccentColor>, chosen: &AccentColor) -> Option<AccentColor> {
    if current == Some(chosen) {
        None
    } else {
        Some(chosen.clone())
    }
}

fn theme_label(dark: bool) -> &'static str {
    if dark {
        "Dark Mode (Overlay)"
    } else {
        "Light Mode"
    }
}

#[component]
pub fn SettingsApp(services: AppServices) -> impl IntoView {
    let theme = services.theme;
    let dark_overlay = theme.dark_overlay;
    let accent_color = theme.accent_color;

    view! {
        <div class="app-settings">
            <h2>"Personalization"</h2>
            <div class="app-content">
                <section class="settings-section">
                    <h3>"Theme"</h3>
                    <div class="settings-row">
                        <span>{move || theme_label(dark_overlay.get())}</span>
                        <button
                            class=move || if dark_overlay.get() { "toggle-track active" } else { "toggle-track" }
                            role="switch"
                            aria-checked=move || dark_overlay.get().to_string()
                            aria-label="Dark overlay"
                            on:click=move |_| theme.toggle_dark_mode()
                        ></button>
                    </div>
                </section>

                <section class="settings-section">
                    <h3>"Accent Color (Overlay)"</h3>
                    <div class="accent-grid">
                        {palette()
                            .into_iter()
                            .map(|color| {
                                let swatch = color.clone();
                                let is_active = {
                                    let color = color.clone();
                                    create_memo(move |_| {
                                        accent_color.with(|current| current.as_ref() == Some(&color))
                                    })
                                };
                                view! {
                                    <button
                                        class=move || if is_active.get() { "accent-swatch active" } else { "accent-swatch" }
                                        style=format!("background-color:{};", swatch.as_str())
                                        title=format!("Set accent to {}", swatch.as_str().to_uppercase())
                                        aria-pressed=move || is_active.get().to_string()
                                        on:click=move |_| {
                                            let next = accent_color.with_untracked(|current| {
                                                next_accent(current.as_ref(), &color)
                                            });
                                            theme.set_accent_color(next);
                                        }
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="settings-section">
                    <h3>"Desktop"</h3>
                    <div class="settings-row">
                        <span>"Current Wallpaper"</span>
                        <span class="settings-value">{CURRENT_WALLPAPER}</span>
                    </div>
                </section>
            </div>
        </div>
    }
}
