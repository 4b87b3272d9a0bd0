use desktop_window_contract::{
    provide_content_metrics, ContentBreakpoints, ContentMetrics, ContentMountContext,
};
use system_ui::{
    Icon, IconName, IconSize, ResizeHandle, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::*;
use crate::{
    gesture::{GestureEnvironment, ResizeEdge, WindowGestures},
    model::{WindowId, WindowRecord, WindowState},
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[cfg(target_arch = "wasm32")]
fn try_release_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            if element.has_pointer_capture(ev.pointer_id()) {
                let _ = element.release_pointer_capture(ev.pointer_id());
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_release_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window = runtime.window(window_id.clone());

    view! { <WindowChrome window_id=window_id window=window /> }
}

/// Frame of one visible window. The layer mounts it while the window is normal or maximized.
#[component]
fn WindowChrome(window_id: WindowId, window: Signal<Option<WindowRecord>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let actions = runtime.actions;
    let gestures = store_value(WindowGestures::new());
    let listeners = store_value(Vec::<Box<dyn FnOnce()>>::new());

    let state = Signal::derive(move || window.with(|w| w.as_ref().map(|w| w.state)));
    let is_focused = {
        let window_id = window_id.clone();
        Signal::derive(move || {
            runtime
                .selectors
                .focused
                .with(|id| id.as_ref() == Some(&window_id))
        })
    };
    let style = Signal::derive(move || {
        let viewport = runtime.viewport.get();
        window.with(|w| {
            w.as_ref()
                .map(|w| w.rect.to_pixels(viewport).css(w.z))
                .unwrap_or_default()
        })
    });
    let title = Signal::derive(move || {
        window
            .with(|w| w.as_ref().map(|w| w.title.clone()))
            .unwrap_or_default()
    });
    let icon = Signal::derive(move || {
        window.with(|w| {
            w.as_ref()
                .map(|w| IconName::from_token(&w.icon))
                .unwrap_or(IconName::Window)
        })
    });
    let can_resize = Signal::derive(move || {
        state.get() == Some(WindowState::Normal) && !runtime.is_mobile.get()
    });

    let teardown = move || {
        listeners.update_value(|handles| {
            for remove in handles.drain(..) {
                remove();
            }
        });
    };

    let install_listeners = move || {
        teardown();
        let on_move = window_event_listener(ev::pointermove, move |ev| {
            let pointer = pointer_from_pointer_event(&ev);
            let viewport = runtime.viewport.get_untracked();
            let command = gestures
                .try_update_value(|gestures| gestures.pointer_move(pointer, viewport))
                .flatten();
            if let Some((id, command)) = command {
                command.apply(&runtime.store.get_value(), &id);
            }
        });
        let on_up = window_event_listener(ev::pointerup, move |ev| {
            try_release_pointer_capture(&ev);
            gestures.update_value(|gestures| {
                gestures.end();
            });
            teardown();
        });
        let on_cancel = window_event_listener(ev::pointercancel, move |ev| {
            try_release_pointer_capture(&ev);
            gestures.update_value(WindowGestures::cancel);
            teardown();
        });
        listeners.update_value(|handles| {
            handles.push(Box::new(move || on_move.remove()));
            handles.push(Box::new(move || on_up.remove()));
            handles.push(Box::new(move || on_cancel.remove()));
        });
    };

    on_cleanup(move || {
        gestures.update_value(WindowGestures::cancel);
        teardown();
    });

    let focus_if_needed = {
        let window_id = window_id.clone();
        move || {
            if !is_focused.get_untracked() {
                actions.focus(window_id.clone());
            }
        }
    };

    let on_frame_pointerdown = {
        let focus_if_needed = focus_if_needed.clone();
        Callback::new(move |_: web_sys::PointerEvent| focus_if_needed())
    };
    let on_titlebar_click = Callback::new(move |_: web_sys::MouseEvent| focus_if_needed());
    let on_titlebar_dblclick = {
        let window_id = window_id.clone();
        Callback::new(move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            actions.toggle_maximize(window_id.clone());
        })
    };
    let begin_drag = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        let Some(record) = window.get_untracked() else {
            return;
        };
        let env = GestureEnvironment {
            is_mobile: runtime.is_mobile.get_untracked(),
        };
        let pointer = pointer_from_pointer_event(&ev);
        let started = gestures
            .try_update_value(|gestures| gestures.begin_drag(&record, pointer, env))
            .unwrap_or(false);
        if started {
            try_set_pointer_capture(&ev);
            ev.prevent_default();
            install_listeners();
        }
    });
    let begin_resize = move |edge: ResizeEdge| {
        Callback::new(move |ev: web_sys::PointerEvent| {
            if !is_primary_press(&ev) {
                return;
            }
            let Some(record) = window.get_untracked() else {
                return;
            };
            let env = GestureEnvironment {
                is_mobile: runtime.is_mobile.get_untracked(),
            };
            let pointer = pointer_from_pointer_event(&ev);
            let started = gestures
                .try_update_value(|gestures| gestures.begin_resize(&record, edge, pointer, env))
                .unwrap_or(false);
            if started {
                try_set_pointer_capture(&ev);
                ev.prevent_default();
                install_listeners();
            }
        })
    };

    let minimize = {
        let window_id = window_id.clone();
        Callback::new(move |_: web_sys::MouseEvent| actions.minimize(window_id.clone()))
    };
    let toggle_maximize = {
        let window_id = window_id.clone();
        Callback::new(move |_: web_sys::MouseEvent| actions.toggle_maximize(window_id.clone()))
    };
    let close = {
        let window_id = window_id.clone();
        Callback::new(move |_: web_sys::MouseEvent| actions.close(window_id.clone()))
    };
    let is_maximized = Signal::derive(move || state.get() == Some(WindowState::Maximized));

    view! {
        <WindowFrame
            window_id=window_id.to_string()
            style=style
            aria_label=title
            focused=is_focused
            maximized=is_maximized
            on_pointerdown=on_frame_pointerdown
        >
            <WindowTitleBar
                on_pointerdown=begin_drag
                on_click=on_titlebar_click
                on_dblclick=on_titlebar_dblclick
            >
                <WindowTitle>
                    <span data-ui-slot="window-icon">
                        {move || view! { <Icon icon=icon.get() size=IconSize::Sm /> }}
                    </span>
                    <span data-ui-slot="window-title-text">{move || title.get()}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        ui_slot="minimize"
                        aria_label="Minimize window"
                        on_click=minimize
                    >
                        <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                    </WindowControlButton>
                    <WindowControlButton
                        ui_slot="maximize"
                        aria_label=Signal::derive(move || {
                            if is_maximized.get() { "Restore window" } else { "Maximize window" }
                                .to_string()
                        })
                        on_click=toggle_maximize
                    >
                        {move || {
                            let icon = if is_maximized.get() {
                                IconName::WindowRestore
                            } else {
                                IconName::WindowMaximize
                            };
                            view! { <Icon icon=icon size=IconSize::Xs /> }
                        }}
                    </WindowControlButton>
                    <WindowControlButton ui_slot="close" aria_label="Close window" on_click=close>
                        <Icon icon=IconName::Dismiss size=IconSize::Xs />
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowContentHost window_id=window_id.clone() window=window />
            <Show when=move || can_resize.get() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| {
                        view! { <ResizeHandle edge=edge.token() on_pointerdown=begin_resize(edge) /> }
                    })
                    .collect_view()}
            </Show>
        </WindowFrame>
    }
}

/// Window body: renders the record's content payload and publishes advisory size metrics to it.
#[component]
fn WindowContentHost(window_id: WindowId, window: Signal<Option<WindowRecord>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let breakpoints = runtime
        .config
        .with_value(|config| config.interaction.content_breakpoints());
    let metrics = create_rw_signal(ContentMetrics::default());
    provide_content_metrics(metrics);

    let body_ref = create_node_ref::<html::Div>();
    observe_content_size(body_ref, breakpoints, metrics);

    let content = create_memo(move |_| window.with(|w| w.as_ref().and_then(|w| w.content.clone())));

    view! {
        <WindowBody node_ref=body_ref>
            {move || match content.get() {
                Some(content) => content.render(ContentMountContext {
                    window_id: window_id.to_string(),
                    metrics: metrics.into(),
                }),
                None => view! { <p data-ui-slot="window-empty">"Nothing to show here yet."</p> }
                    .into_view(),
            }}
        </WindowBody>
    }
}

#[cfg(target_arch = "wasm32")]
fn observe_content_size(
    body_ref: NodeRef<html::Div>,
    breakpoints: ContentBreakpoints,
    metrics: RwSignal<ContentMetrics>,
) {
    use wasm_bindgen::closure::Closure;

    body_ref.on_load(move |element| {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let Ok(entry) = entries.get(0).dyn_into::<web_sys::ResizeObserverEntry>() else {
                return;
            };
            let rect = entry.content_rect();
            let next = ContentMetrics::measure(rect.width(), rect.height(), breakpoints);
            if metrics.get_untracked() != next {
                metrics.set(next);
            }
        });
        let observer = match web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(err) => {
                logging::warn!("content size observer unavailable: {err:?}");
                return;
            }
        };
        observer.observe(&element);
        on_cleanup(move || {
            observer.disconnect();
            drop(callback);
        });
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn observe_content_size(
    _: NodeRef<html::Div>,
    _: ContentBreakpoints,
    _: RwSignal<ContentMetrics>,
) {
}
