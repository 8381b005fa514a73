//! "About Me" desktop app.

use desktop_app_contract::{AppId, AppServices, AppView, WindowId};
use leptos::*;

const APP_VERSION: &str = "1.0.0";
// The project describing this site.
const FEATURED_PROJECT_ID: &str = "proj-glimpse-os";

const PARAGRAPHS: [&str; 4] = [
    "I am Sachin Mehta, a passionate and innovative developer specializing in building immersive \
     digital experiences. With a strong foundation in modern web technologies, I love crafting \
     clean, efficient, and visually appealing applications.",
    "This \"Glimpse OS\" portfolio is a demonstration of my dedication to creating unique user \
     interfaces, combining aesthetics with deep functionality to offer an engaging journey \
     through my work.",
    "My technical expertise includes React, TypeScript, Go, Node.js, and modern animation \
     libraries like GSAP and Framer Motion. I am always exploring new tools and techniques to \
     push the boundaries of web development.",
    "Feel free to explore the other \"apps\" in this OS to see my projects, review my resume, \
     or get in touch!",
];

fn featured_project_view() -> AppView {
    AppView::Projects {
        selected: Some(FEATURED_PROJECT_ID.to_string()),
    }
}

fn footer_text(window_id: WindowId) -> String {
    format!("App Version: {APP_VERSION} | Window ID: {window_id}")
}

#[component]
/// Profile introduction with shortcuts into the other apps.
pub fn AboutApp(services: AppServices) -> impl IntoView {
    let launcher = services.launcher;

    view! {
        <div class="app-about">
            <div class="app-content">
                <h2>"About Sachin Mehta"</h2>
                {PARAGRAPHS.iter().map(|text| view! { <p>{*text}</p> }).collect_view()}
                <div class="app-actions">
                    <button on:click=move |_| launcher.open(AppId::Projects)>"See my projects"</button>
                    <button on:click=move |_| launcher.open_with(featured_project_view())>
                        "How this site was built"
                    </button>
                    <button on:click=move |_| launcher.open(AppId::Resume)>"Open resume"</button>
                    <button on:click=move |_| launcher.open(AppId::Contact)>"Get in touch"</button>
                </div>
            </div>
            <footer class="app-footer">{footer_text(services.window_id)}</footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn footer_names_the_hosting_window() {
        assert_eq!(
            footer_text(WindowId(4)),
            "App Version: 1.0.0 | Window ID: window-4"
        );
    }

    #[test]
    fn featured_shortcut_opens_projects_on_a_detail_page() {
        let view = featured_project_view();
        assert_eq!(view.app_id(), AppId::Projects);
        assert_eq!(
            view,
            AppView::Projects {
                selected: Some("proj-glimpse-os".to_string())
            }
        );
    }
}
