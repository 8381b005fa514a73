//! Project gallery app.
//!
//! Shows a folder grid of projects; double-clicking a folder opens that project's detail page.
//! The window can also be opened directly on a detail page through
//! [`desktop_app_contract::AppView::Projects`].

use desktop_app_contract::{AppId, AppServices};
use leptos::*;

const FOLDER_ICON: &str = "/os-icons/folder-projects.svg";
const NO_LINK: &str = "#";

/// One portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectData {
    /// Stable id used by deep views.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    /// Live URL, or `#` when there is none.
    pub link: &'static str,
    /// Repository URL, or `#` when there is none.
    pub github_link: &'static str,
    pub tech_stack: &'static [&'static str],
}

/// Projects listed in the gallery, in display order.
pub static PROJECTS: [ProjectData; 3] = [
    ProjectData {
        id: "proj-glimpse-os",
        title: "Glimpse OS (This Portfolio)",
        description: "An immersive, OS-in-a-browser portfolio simulating a modern desktop \
            environment. It features a draggable window manager, app launcher, global state \
            management, and a custom UI component library. This project is a testament to my \
            passion for creating unique and highly interactive user interfaces.",
        image_url: "/assets/glimpseOS.png",
        link: NO_LINK,
        github_link: "https://github.com/AEGON247/GlimpseOS",
        tech_stack: &["React", "TypeScript", "Emotion.js", "Framer Motion", "Zustand", "Vite"],
    },
    ProjectData {
        id: "proj-git-smart",
        title: "git-smart (CLI Tool)",
        description: "A command-line utility built in Go that automates the tedious 7-step Git \
            workflow of syncing a feature branch with the default branch. The tool detects the \
            default branch, stashes uncommitted changes, pulls the latest, rebases, and pops the \
            stash, all in one command.",
        image_url: "/assets/gitSmart.png",
        link: "https://github.com/AEGON247/git-smart",
        github_link: "https://github.com/AEGON247/git-smart",
        tech_stack: &["Go (Golang)", "Cobra", "CLI", "Git"],
    },
    ProjectData {
        id: "proj-messiah",
        title: "Messiah (Food Wastage Tracker)",
        description: "A conceptual full-stack application for food detection, classification, \
            and wastage tracking. Designed to help users monitor and reduce food waste, this \
            project involved UI/UX design in Figma and planning for a complete system \
            architecture.",
        image_url: "/assets/messiah.png",
        link: NO_LINK,
        github_link: NO_LINK,
        tech_stack: &["Concept", "UI/UX Design", "Figma", "Full-Stack Architecture"],
    },
];

/// Looks up a project by id.
pub fn find_project(id: &str) -> Option<&'static ProjectData> {
    PROJECTS.iter().find(|project| project.id == id)
}

fn external_link(url: &'static str) -> Option<&'static str> {
    (url != NO_LINK && !url.is_empty()).then_some(url)
}

#[component]
/// Project gallery. `selected` opens the window on that project's detail page.
pub fn ProjectsApp(selected: Option<String>, services: AppServices) -> impl IntoView {
    let selected = create_rw_signal(selected.as_deref().and_then(find_project));

    view! {
        <div class="app-projects">
            {move || match selected.get() {
                None => view! {
                    <h2>"My Projects"</h2>
                    <div class="app-content project-grid">
                        {PROJECTS
                            .iter()
                            .map(|project| {
                                view! {
                                    <button
                                        class="folder-icon"
                                        data-project=project.id
                                        on:dblclick=move |_| selected.set(Some(project))
                                    >
                                        <img src=FOLDER_ICON alt="" />
                                        <span>{project.title}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_view(),
                Some(project) => view! {
                    <ProjectDetail
                        project=project
                        on_back=Callback::new(move |_| selected.set(None))
                        on_contact=Callback::new(move |_| services.launcher.open(AppId::Contact))
                    />
                }
                    .into_view(),
            }}
        </div>
    }
}

#[component]
fn ProjectDetail(
    project: &'static ProjectData,
    on_back: Callback<()>,
    on_contact: Callback<()>,
) -> impl IntoView {
    view! {
        <article class="project-detail">
            <header class="project-detail-header">
                <button title="Go Back" on:click=move |_| on_back.call(())>"←"</button>
                <h2>{project.title}</h2>
            </header>
            <div class="app-content">
                <img class="project-detail-image" src=project.image_url alt=project.title />
                <div class="project-tech-stack">
                    {project
                        .tech_stack
                        .iter()
                        .map(|tech| view! { <span class="tech-tag">{*tech}</span> })
                        .collect_view()}
                </div>
                <p>{project.description}</p>
                <div class="project-links">
                    {external_link(project.link).map(|url| {
                        view! { <a href=url target="_blank" rel="noopener noreferrer">"View Live"</a> }
                    })}
                    {external_link(project.github_link).map(|url| {
                        view! { <a href=url target="_blank" rel="noopener noreferrer">"View Code"</a> }
                    })}
                    <button on:click=move |_| on_contact.call(())>"Ask me about it"</button>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn projects_are_found_by_id() {
        assert_eq!(
            find_project("proj-git-smart").map(|project| project.title),
            Some("git-smart (CLI Tool)")
        );
        assert_eq!(find_project("proj-missing"), None);
    }

    #[test]
    fn placeholder_links_are_hidden() {
        let messiah = find_project("proj-messiah").expect("messiah");
        assert_eq!(external_link(messiah.link), None);
        assert_eq!(external_link(messiah.github_link), None);

        let glimpse = find_project("proj-glimpse-os").expect("glimpse");
        assert_eq!(external_link(glimpse.link), None);
        assert_eq!(
            external_link(glimpse.github_link),
            Some("https://github.com/AEGON247/GlimpseOS")
        );
    }
}
