//! Desktop shell UI composition: window layer, window views, and taskbar.

mod taskbar;
mod window;

use leptos::*;
use system_ui::{DesktopBackdrop, DesktopRoot, DesktopWindowLayer, ThemeTokens};

use self::{taskbar::Taskbar, window::DesktopWindow};
use crate::gesture::PointerPosition;

pub use crate::runtime_context::{
    use_desktop_runtime, use_window_actions, use_window_selectors, ContentRegistry,
    DesktopProvider, DesktopRuntimeContext, WindowActions, WindowSelectors,
};

#[component]
/// Renders the window layer, backdrop, and taskbar for the surrounding [`DesktopProvider`].
pub fn DesktopShell(
    /// Style tokens exposed to the shell CSS as custom properties.
    #[prop(optional)]
    theme: ThemeTokens,
    /// Decorative scene rendered behind the windows.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let selectors = runtime.selectors;
    let taskbar_height_px = runtime.config.with_value(|config| config.taskbar_height_px);

    // DOM order is insertion order; stacking comes from each frame's z-index.
    let window_ids = create_memo(move |_| {
        selectors
            .visible
            .with(|windows| windows.iter().map(|w| w.id.clone()).collect::<Vec<_>>())
    });

    view! {
        <DesktopRoot id="desktop-shell-root" style=theme.to_style()>
            <DesktopBackdrop camera_free=Signal::derive(move || !selectors.has_visible.get())>
                {children.map(|children| children())}
            </DesktopBackdrop>
            <DesktopWindowLayer style=format!("bottom:{taskbar_height_px}px;")>
                <For each=move || window_ids.get() key=|id| id.clone() let:id>
                    <DesktopWindow window_id=id />
                </For>
            </DesktopWindowLayer>
            <Taskbar />
        </DesktopRoot>
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Primary button for mice, primary contact for touch and pen.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}
