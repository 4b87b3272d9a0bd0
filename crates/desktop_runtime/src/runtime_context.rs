//! Runtime provider and context wiring for the desktop shell.
//!
//! The provider owns one [`WindowStore`] and mirrors every snapshot it publishes into a reactive
//! signal, so views re-render exactly when the store says something changed. UI composition stays
//! in [`crate::components`].

use std::collections::HashMap;

use desktop_window_contract::WindowContent;
use leptos::*;

use crate::{
    config::DesktopConfig,
    host::DesktopHostContext,
    model::{
        InitialWindow, OpenWindowRequest, ViewportSize, WindowId, WindowMetaPatch, WindowRecord,
        WindowRect, WindowState,
    },
    store::{WindowStore, WindowsSnapshot},
};

#[derive(Clone, Default)]
/// Render payloads keyed by window id, attached when a window is seeded or opened from config.
pub struct ContentRegistry(HashMap<WindowId, WindowContent>);

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<WindowId>, content: WindowContent) -> Self {
        self.0.insert(id.into(), content);
        self
    }

    pub fn get(&self, id: &WindowId) -> Option<WindowContent> {
        self.0.get(id).cloned()
    }

    /// Fills in content for seeds that do not carry their own.
    pub fn attach(&self, seeds: Vec<InitialWindow>) -> Vec<InitialWindow> {
        seeds
            .into_iter()
            .map(|mut seed| {
                if seed.content.is_none() {
                    seed.content = self.get(&seed.id);
                }
                seed
            })
            .collect()
    }
}

#[derive(Clone, Copy)]
/// Store actions, bound once per provider.
pub struct WindowActions {
    store: StoredValue<WindowStore>,
}

impl WindowActions {
    fn store(&self) -> WindowStore {
        self.store.get_value()
    }

    pub fn open(&self, id: impl Into<WindowId>, request: Option<OpenWindowRequest>) {
        self.store().open(id, request);
    }

    pub fn close(&self, id: impl Into<WindowId>) {
        self.store().close(id);
    }

    pub fn minimize(&self, id: impl Into<WindowId>) {
        self.store().minimize(id);
    }

    pub fn maximize(&self, id: impl Into<WindowId>) {
        self.store().maximize(id);
    }

    pub fn restore(&self, id: impl Into<WindowId>) {
        self.store().restore(id);
    }

    /// Maximizes a normal window and restores any other.
    pub fn toggle_maximize(&self, id: impl Into<WindowId>) {
        let store = self.store();
        let id = id.into();
        match store.get_by_id(id.clone()).map(|w| w.state) {
            Some(WindowState::Maximized) => store.restore(id),
            Some(_) => store.maximize(id),
            None => {}
        }
    }

    pub fn focus(&self, id: impl Into<WindowId>) {
        self.store().focus(id);
    }

    pub fn move_by(&self, id: impl Into<WindowId>, dx: f64, dy: f64) {
        self.store().move_by(id, dx, dy);
    }

    pub fn resize_by(&self, id: impl Into<WindowId>, dw: f64, dh: f64) {
        self.store().resize_by(id, dw, dh);
    }

    pub fn set_rect(&self, id: impl Into<WindowId>, rect: WindowRect) {
        self.store().set_rect(id, rect);
    }

    pub fn update_meta(&self, id: impl Into<WindowId>, patch: WindowMetaPatch) {
        self.store().update_meta(id, patch);
    }

    pub fn remove(&self, id: impl Into<WindowId>) {
        self.store().remove(id);
    }
}

#[derive(Clone, Copy)]
/// Memoized selectors over the mirrored snapshot. Stacking order needs no memo: each frame's
/// `z-index` is its record's `z`.
pub struct WindowSelectors {
    pub visible: Memo<Vec<WindowRecord>>,
    pub minimized: Memo<Vec<WindowRecord>>,
    pub any_open: Memo<bool>,
    pub has_visible: Memo<bool>,
    pub focused: Memo<Option<WindowId>>,
}

impl WindowSelectors {
    fn new(snapshot: RwSignal<WindowsSnapshot>) -> Self {
        Self {
            visible: create_memo(move |_| snapshot.with(WindowsSnapshot::visible)),
            minimized: create_memo(move |_| snapshot.with(WindowsSnapshot::minimized)),
            any_open: create_memo(move |_| snapshot.with(WindowsSnapshot::is_any_open)),
            has_visible: create_memo(move |_| snapshot.with(WindowsSnapshot::has_visible_window)),
            focused: create_memo(move |_| snapshot.with(WindowsSnapshot::focused_window_id)),
        }
    }
}

#[derive(Clone, Copy)]
/// Leptos context for reading window state and calling window actions.
pub struct DesktopRuntimeContext {
    /// Shared store handle.
    pub store: StoredValue<WindowStore>,
    pub host: StoredValue<DesktopHostContext>,
    pub config: StoredValue<DesktopConfig>,
    pub contents: StoredValue<ContentRegistry>,
    /// Latest published snapshot.
    pub snapshot: RwSignal<WindowsSnapshot>,
    /// Pixel size of the window layer.
    pub viewport: RwSignal<ViewportSize>,
    /// Narrow viewport; gestures are disabled while set.
    pub is_mobile: RwSignal<bool>,
    pub actions: WindowActions,
    pub selectors: WindowSelectors,
}

impl DesktopRuntimeContext {
    /// Builds a store from `config` and binds it to fresh signals in the current reactive owner.
    ///
    /// The store subscription is released when the owner is cleaned up.
    pub fn new(config: DesktopConfig, contents: ContentRegistry) -> Self {
        let store = WindowStore::with_windows(contents.attach(config.initial_windows()));
        Self::with_store(store, config, contents)
    }

    /// Binds an existing store.
    pub fn with_store(
        store: WindowStore,
        config: DesktopConfig,
        contents: ContentRegistry,
    ) -> Self {
        let host = DesktopHostContext::new(&config);
        let snapshot = create_rw_signal(store.get_snapshot());
        let subscription = store.subscribe(move |next: &WindowsSnapshot| snapshot.set(next.clone()));
        on_cleanup(move || subscription.unsubscribe());

        let store = store_value(store);
        Self {
            store,
            host: store_value(host),
            config: store_value(config),
            contents: store_value(contents),
            snapshot,
            viewport: create_rw_signal(host.viewport_size()),
            is_mobile: create_rw_signal(host.is_mobile()),
            actions: WindowActions { store },
            selectors: WindowSelectors::new(snapshot),
        }
    }

    /// Re-reads the environment after a browser resize.
    pub fn refresh_viewport(&self) {
        let host = self.host.get_value();
        let viewport = host.viewport_size();
        if self.viewport.get_untracked() != viewport {
            self.viewport.set(viewport);
        }
        let is_mobile = host.is_mobile();
        if self.is_mobile.get_untracked() != is_mobile {
            self.is_mobile.set(is_mobile);
        }
    }

    /// Reactive lookup of one window record.
    pub fn window(&self, id: WindowId) -> Signal<Option<WindowRecord>> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.get_by_id(&id).cloned()))
    }

    /// Arguments for the taskbar call-to-action: a creation request only while the main window
    /// does not exist yet, so an existing (closed) main window is reopened as-is.
    pub fn main_window_open_args(&self) -> (WindowId, Option<OpenWindowRequest>) {
        let (id, request) = self.config.with_value(|config| {
            (
                config.main_window.window_id(),
                config.main_window.open_request(),
            )
        });
        let exists = self.snapshot.with_untracked(|s| s.get_by_id(&id).is_some());
        if exists {
            return (id, None);
        }
        let request = match self.contents.with_value(|contents| contents.get(&id)) {
            Some(content) => request.with_content(content),
            None => request,
        };
        (id, Some(request))
    }

    pub fn open_main_window(&self) {
        let (id, request) = self.main_window_open_args();
        self.actions.open(id, request);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Seeded windows, main-window call-to-action, and interaction thresholds.
    #[prop(optional)]
    config: DesktopConfig,
    /// Render payloads for seeded windows and the main window.
    #[prop(optional)]
    contents: ContentRegistry,
    children: Children,
) -> impl IntoView {
    let runtime = DesktopRuntimeContext::new(config, contents);
    provide_context(runtime);

    let resize_listener = window_event_listener(ev::resize, move |_| runtime.refresh_viewport());
    on_cleanup(move || resize_listener.remove());

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

pub fn use_window_actions() -> WindowActions {
    use_desktop_runtime().actions
}

pub fn use_window_selectors() -> WindowSelectors {
    use_desktop_runtime().selectors
}
