//! Recycle bin: ideas that were explored and set aside.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdeaStatus {
    Abandoned,
    Prototype,
}

impl IdeaStatus {
    fn label(self) -> &'static str {
        match self {
            Self::Abandoned => "Abandoned",
            Self::Prototype => "Prototype",
        }
    }
}

struct DiscardedIdea {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    image_url: &'static str,
    status: IdeaStatus,
    tags: &'static [&'static str],
}

const DISCARDED_IDEAS: [DiscardedIdea; 2] = [
    DiscardedIdea {
        id: "idea-spaceweb",
        title: "Space Web Explorer",
        description: "An idea for a portfolio where navigation feels like exploring \
            constellations. Each star is a project, connected by animated lines. Abandoned due \
            to complexity vs. impact.",
        image_url: "https://placehold.co/400x300/3A3A3A/00FFFF?text=Space+Web+Explorer",
        status: IdeaStatus::Abandoned,
        tags: &["animation", "d3.js", "webgl"],
    },
    DiscardedIdea {
        id: "idea-retro-terminal",
        title: "Retro Terminal Portfolio",
        description: "A command-line interface based portfolio, where users type commands to \
            navigate and view content. Prototype built, but felt too niche for general audience.",
        image_url: "https://placehold.co/400x300/3A3A3A/00FF00?text=Retro+Terminal",
        status: IdeaStatus::Prototype,
        tags: &["cli", "text-ui", "bash"],
    },
];

fn bin_summary(count: usize) -> String {
    match count {
        0 => "Recycle Bin is empty".to_string(),
        1 => "1 discarded idea".to_string(),
        n => format!("{n} discarded ideas"),
    }
}

#[component]
pub fn RecycleBinApp() -> impl IntoView {
    view! {
        <div class="app-recycle-bin">
            <h2>"Recycle Bin (Discarded Ideas)"</h2>
            <p class="recycle-bin-summary">{bin_summary(DISCARDED_IDEAS.len())}</p>
            <div class="app-content idea-grid">
                {DISCARDED_IDEAS
                    .iter()
                    .map(|idea| {
                        view! {
                            <article class="idea-card" data-idea=idea.id>
                                <img src=idea.image_url alt=idea.title />
                                <div class="idea-card-content">
                                    <h3>{idea.title}</h3>
                                    <span class="idea-status">{idea.status.label()}</span>
                                    <p>{idea.description}</p>
                                    <div class="idea-tags">
                                        {idea
                                            .tags
                                            .iter()
                                            .map(|tag| view! { <span class="idea-tag">{*tag}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
