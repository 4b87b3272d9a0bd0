//! Portfolio window contents. The window manager hosts these without looking inside them.

use desktop_runtime::{use_window_actions, ContentRegistry, OpenWindowRequest, WindowId};
use desktop_window_contract::{use_content_metrics, ContentMountContext, WindowContent};
use leptos::*;

pub(crate) struct Project {
    pub slug: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

pub(crate) const PROJECTS: &[Project] = &[
    Project {
        slug: "tiny-desktop",
        name: "Tiny Desktop",
        summary: "A window manager for the browser with drag, resize, and a taskbar.",
        tags: &["rust", "leptos", "wasm"],
    },
    Project {
        slug: "field-notes",
        name: "Field Notes",
        summary: "A static notebook that renders Markdown into themed pages.",
        tags: &["markdown", "static-site"],
    },
    Project {
        slug: "orbit-scene",
        name: "Orbit Scene",
        summary: "A decorative 3D backdrop that only takes the camera when no window is open.",
        tags: &["webgl", "shaders"],
    },
];

pub(crate) fn project_by_slug(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.slug == slug)
}

fn project_window_id(slug: &str) -> WindowId {
    WindowId::new(format!("project:{slug}"))
}

/// Content for every window declared in the layout, plus the main window.
pub fn portfolio_contents() -> ContentRegistry {
    ContentRegistry::new()
        .with("main", content(|| view! { <WelcomeWindow /> }.into_view()))
        .with("about", content(|| view! { <AboutWindow /> }.into_view()))
        .with("projects", content(|| view! { <ProjectsWindow /> }.into_view()))
        .with("contact", content(|| view! { <ContactWindow /> }.into_view()))
}

fn content(render: impl Fn() -> View + 'static) -> WindowContent {
    WindowContent::new(move |_: ContentMountContext| render())
}

fn layout_token(is_narrow: bool) -> &'static str {
    if is_narrow {
        "stacked"
    } else {
        "columns"
    }
}

#[component]
fn WelcomeWindow() -> impl IntoView {
    let actions = use_window_actions();
    view! {
        <article data-content="welcome">
            <h1>"Hi, welcome to my desktop."</h1>
            <p>"Drag windows by their title bar, resize them from any edge, and park them in the taskbar."</p>
            <button type="button" on:click=move |_| actions.open("about", None)>
                "About me"
            </button>
            <button type="button" on:click=move |_| actions.open("projects", None)>
                "Projects"
            </button>
        </article>
    }
}

#[component]
fn AboutWindow() -> impl IntoView {
    let metrics = use_content_metrics();
    view! {
        <article data-content="about" data-layout=move || layout_token(metrics.get().is_narrow)>
            <h1>"About"</h1>
            <p>"I build small, sturdy tools for the web and the terminal."</p>
            <Show when=move || !metrics.get().is_short fallback=|| ()>
                <p>"Most of my time goes into Rust, interface details, and the places where the two meet."</p>
            </Show>
        </article>
    }
}

#[component]
fn ProjectsWindow() -> impl IntoView {
    let metrics = use_content_metrics();
    let actions = use_window_actions();
    view! {
        <section data-content="projects" data-layout=move || layout_token(metrics.get().is_narrow)>
            <h1>"Projects"</h1>
            <ul>
                {PROJECTS
                    .iter()
                    .map(|project| {
                        let open_detail = move |_: ev::MouseEvent| {
                            let detail = content(move || {
                                view! { <ProjectDetail project=project /> }.into_view()
                            });
                            actions.open(
                                project_window_id(project.slug),
                                Some(
                                    OpenWindowRequest::new()
                                        .with_title(project.name)
                                        .with_icon("document")
                                        .with_content(detail),
                                ),
                            );
                        };
                        view! {
                            <li>
                                <button type="button" on:click=open_detail>{project.name}</button>
                                <span>{project.summary}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
pub(crate) fn ProjectDetail(project: &'static Project) -> impl IntoView {
    view! {
        <article data-content="project" data-project=project.slug>
            <h1>{project.name}</h1>
            <p>{project.summary}</p>
            <ul data-slot="tags">
                {project.tags.iter().map(|tag| view! { <li>{*tag}</li> }).collect_view()}
            </ul>
        </article>
    }
}

#[component]
fn ContactWindow() -> impl IntoView {
    view! {
        <article data-content="contact">
            <h1>"Contact"</h1>
            <p>"The fastest way to reach me is email."</p>
            <a href="mailto:hello@example.com">"hello@example.com"</a>
        </article>
    }
}
