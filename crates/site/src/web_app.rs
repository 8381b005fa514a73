use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

const DEEP_LINK_QUERY_KEY: &str = "open";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Glimpse OS | Sachin Mehta" />
        <Meta name="description" content="A portfolio you can explore like a desktop operating system." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// Mounts the desktop, opening `?open=<app-key>` or `?open=projects:<id>` after autostart.
#[component]
pub fn DesktopEntry() -> impl IntoView {
    let query = use_query_map();
    let deep_link = query.with_untracked(|params| deep_link_from_query(params.get(DEEP_LINK_QUERY_KEY)));

    view! {
        <DesktopProvider deep_link=deep_link>
            <DesktopShell />
        </DesktopProvider>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="canonical-content not-found">
            <h1>"Nothing here"</h1>
            <A href="/">"Back to the desktop"</A>
        </section>
    }
}

fn deep_link_from_query(raw: Option<&String>) -> Option<String> {
    raw.map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_ascii_lowercase)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deep_link_is_trimmed_and_lowercased() {
        assert_eq!(
            deep_link_from_query(Some(&" Recycle-Bin ".to_string())),
            Some("recycle-bin".to_string())
        );
        assert_eq!(deep_link_from_query(Some(&"   ".to_string())), None);
        assert_eq!(deep_link_from_query(None), None);
    }

    #[test]
    fn provider_takes_the_parsed_query_value_as_is() {
        let deep_link = deep_link_from_query(Some(&"Projects:proj-git-smart".to_string()));
        assert_eq!(deep_link.as_deref(), Some("projects:proj-git-smart"));

        let children: Children = Box::new(|| Fragment::new(Vec::new()));
        let _props = component_props_builder(&DesktopProvider)
            .deep_link(deep_link)
            .children(children)
            .build();

        let children: Children = Box::new(|| Fragment::new(Vec::new()));
        let _props = component_props_builder(&DesktopProvider)
            .deep_link(None)
            .children(children)
            .build();
    }
}
