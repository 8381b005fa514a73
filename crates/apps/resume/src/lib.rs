//! Resume viewer.

use leptos::*;

struct ResumeProject {
    title: &'static str,
    description: &'static str,
    tech: &'static str,
}

const SUMMARY: &str = "Creative and technical Frontend Engineer obsessed with building unique, \
    immersive, and highly performant web experiences. Specializes in combining modern frameworks \
    like React and TypeScript with advanced animation libraries (GSAP, Framer Motion) and \
    low-level tooling (Go) to create applications that are both functional and delightful.";

const SKILLS: [&str; 13] = [
    "React",
    "TypeScript",
    "JavaScript (ES6+)",
    "Go (Golang)",
    "GSAP",
    "Framer Motion",
    "Emotion.js",
    "Tailwind CSS",
    "Node.js",
    "UI/UX Design",
    "Git & CLI",
    "Figma",
    "Vite",
];

const PROJECTS: [ResumeProject; 4] = [
    ResumeProject {
        title: "Glimpse OS (This Portfolio)",
        description: "A fully interactive, OS-in-a-browser portfolio simulating a modern desktop \
            environment. Features include a draggable window manager, dynamic app launcher, \
            global state management, and a custom UI component library.",
        tech: "React, TypeScript, Emotion.js, Framer Motion, Zustand, Vite",
    },
    ResumeProject {
        title: "git-smart (CLI Tool)",
        description: "A command-line utility built in Go that automates common Git workflows. \
            The tool syncs feature branches with the default branch, handling stashing, \
            rebasing, and error reporting in one command.",
        tech: "Go (Golang), Cobra, OS/Exec",
    },
    ResumeProject {
        title: "Adaptive Portfolio OS (Concept)",
        description: "A high-fidelity prototype for a \"persona-aware\" portfolio website. The UI \
            morphs in real time based on the detected visitor (Recruiter, Designer, Developer) \
            using a JSON-driven layout engine.",
        tech: "React, TypeScript, Framer Motion, React Context",
    },
    ResumeProject {
        title: "Messiah (Food Wastage Tracker)",
        description: "A conceptual app for food detection and wastage tracking.",
        tech: "(Concept)",
    },
];

#[component]
pub fn ResumeApp() -> impl IntoView {
    view! {
        <div class="app-resume">
            <h2>"Sachin Mehta"</h2>
            <p class="resume-subtitle">"Frontend Engineer & Interactive Developer"</p>
            <div class="app-content">
                <section>
                    <h3>"Summary"</h3>
                    <p>{SUMMARY}</p>
                </section>
                <section>
                    <h3>"Technical Skills"</h3>
                    <ul class="resume-skills">
                        {SKILLS.iter().map(|skill| view! { <li>{*skill}</li> }).collect_view()}
                    </ul>
                </section>
                <section>
                    <h3>"Featured Projects"</h3>
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <article class="resume-project">
                                    <h4>{project.title}</h4>
                                    <p>{project.description}</p>
                                    <p class="resume-project-tech">{format!("Tech: {}", project.tech)}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </section>
            </div>
        </div>
    }
}
