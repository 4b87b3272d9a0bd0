use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::content::{project_by_slug, ProjectDetail};
use crate::layout::load_layout;
use crate::portfolio_contents;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio Desktop" />
        <Meta name="description" content="A personal portfolio presented as a small desktop." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/projects/:slug" view=ProjectRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let layout = load_layout();

    view! {
        <DesktopProvider config=layout.desktop contents=portfolio_contents()>
            <DesktopShell theme=layout.theme>
                <div data-ui-slot="scene" aria-hidden="true"></div>
            </DesktopShell>
        </DesktopProvider>
    }
}

/// Standalone page for a project, reachable without the desktop.
#[component]
fn ProjectRoute() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|map| map.get("slug").cloned()).unwrap_or_default();

    view! {
        <section class="project-page">
            {move || match project_by_slug(&slug()) {
                Some(project) => view! { <ProjectDetail project=project /> }.into_view(),
                None => view! { <p>{format!("No project named `{}`.", slug())}</p> }.into_view(),
            }}
            <A href="/">"Back to the desktop"</A>
        </section>
    }
}
