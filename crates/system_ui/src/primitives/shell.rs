use super::*;

#[component]
/// Desktop root. Theme tokens arrive through `style` as CSS custom properties.
pub fn DesktopRoot(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class="desktop-shell"
            style=move || style.get()
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
        >
            {children()}
        </div>
    }
}

#[component]
/// Decorative backdrop host. `camera_free` tells the background scene it may take free pointer
/// control because no window covers it.
pub fn DesktopBackdrop(
    #[prop(optional, into)] camera_free: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="desktop-backdrop"
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
            data-camera-free=move || bool_token(camera_free.get())
        >
            {children()}
        </div>
    }
}

#[component]
/// Positioned area the window frames are laid out in.
pub fn DesktopWindowLayer(
    #[prop(optional, into)] style: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-window-layer"
            style=move || style.get()
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Absolutely positioned frame of one window. Focus and maximize flags surface as
/// `data-ui-focused` / `data-ui-maximized` for the stylesheet.
pub fn WindowFrame(
    #[prop(into)] window_id: String,
    #[prop(into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class="ui-window-frame"
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-window-id=window_id
            data-ui-focused=move || bool_token(focused.get())
            data-ui-maximized=move || bool_token(maximized.get())
            on:pointerdown=move |ev| call_optional(on_pointerdown, ev)
        >
            {children()}
        </section>
    }
}

#[component]
/// Title bar. Drags start from its `pointerdown`.
pub fn WindowTitleBar(
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class="ui-window-titlebar"
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| call_optional(on_pointerdown, ev)
            on:click=move |ev| call_optional(on_click, ev)
            on:dblclick=move |ev| call_optional(on_dblclick, ev)
        >
            {children()}
        </header>
    }
}

#[component]
pub fn WindowTitle(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-title" data-ui-primitive="true" data-ui-kind="window-title">
            {children()}
        </div>
    }
}

#[component]
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-controls" data-ui-primitive="true" data-ui-kind="window-controls">
            {children()}
        </div>
    }
}

#[component]
/// Title bar button (minimize, maximize/restore, close).
///
/// Presses stop here so they never reach the title bar's drag, click, or double-click handlers.
pub fn WindowControlButton(
    ui_slot: &'static str,
    #[prop(into)] aria_label: MaybeSignal<String>,
    on_click: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-window-control"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-control"
            data-ui-slot=ui_slot
            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
            on:dblclick=move |ev: MouseEvent| ev.stop_propagation()
            on:click=move |ev: MouseEvent| {
                ev.stop_propagation();
                on_click.call(ev);
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Window content area. `node_ref` lets the window observe its rendered size.
pub fn WindowBody(node_ref: NodeRef<html::Div>, children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-window-body"
            data-ui-primitive="true"
            data-ui-kind="window-body"
            node_ref=node_ref
        >
            {children()}
        </div>
    }
}

#[component]
/// Edge or corner grip. `edge` is the direction token (`n`, `se`, ...).
pub fn ResizeHandle(
    edge: &'static str,
    on_pointerdown: Callback<web_sys::PointerEvent>,
) -> impl IntoView {
    view! {
        <div
            class="ui-resize-handle"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot=edge
            on:pointerdown=move |ev| on_pointerdown.call(ev)
        ></div>
    }
}

#[component]
pub fn Taskbar(
    #[prop(into)] aria_label: String,
    #[prop(optional, into)] style: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class="ui-taskbar"
            role="toolbar"
            aria-label=aria_label
            style=move || style.get()
            data-ui-primitive="true"
            data-ui-kind="taskbar"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Group of taskbar buttons, identified by `ui_slot`.
pub fn TaskbarSection(
    ui_slot: &'static str,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-taskbar-section"
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
pub fn TaskbarButton(
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] data_window: Option<String>,
    on_click: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-taskbar-button"
            aria-label=move || aria_label.get()
            title=move || title.get()
            data-ui-primitive="true"
            data-ui-kind="taskbar-button"
            data-ui-slot=ui_slot.unwrap_or("window")
            data-window=data_window
            on:click=move |ev| on_click.call(ev)
        >
            {children()}
        </button>
    }
}
