//! Window store: owns the window collection, publishes immutable snapshots, and notifies
//! subscribers after each mutation.
//!
//! Every store is an explicitly constructed instance. Clones of a [`WindowStore`] share the same
//! collection, so one desktop hands out as many handles as it needs while separate desktops (or
//! tests) stay fully independent.

use std::{
    cell::RefCell,
    fmt,
    panic::{catch_unwind, AssertUnwindSafe},
    rc::{Rc, Weak},
};

use leptos::logging;
use thiserror::Error;

use crate::{
    model::{
        InitialWindow, OpenWindowRequest, WindowId, WindowMetaPatch, WindowRecord, WindowRect,
        WindowsState,
    },
    reducer::{reduce_windows, ReducerError, WindowAction},
    selectors,
};

/// Immutable view of the window collection at one point in time.
///
/// Two snapshots taken without a mutation in between are the same allocation
/// ([`WindowsSnapshot::ptr_eq`]); every published mutation produces a new one.
#[derive(Clone)]
pub struct WindowsSnapshot(Rc<[WindowRecord]>);

impl WindowsSnapshot {
    fn new(windows: Vec<WindowRecord>) -> Self {
        Self(windows.into())
    }

    /// Raw collection in insertion order.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.0
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sorted(&self) -> Vec<WindowRecord> {
        selectors::windows_sorted(&self.0)
    }

    pub fn visible(&self) -> Vec<WindowRecord> {
        selectors::visible_windows(&self.0)
    }

    pub fn minimized(&self) -> Vec<WindowRecord> {
        selectors::minimized_windows(&self.0)
    }

    pub fn is_any_open(&self) -> bool {
        selectors::is_any_open(&self.0)
    }

    pub fn has_visible_window(&self) -> bool {
        selectors::has_visible_window(&self.0)
    }

    pub fn get_by_id(&self, id: &WindowId) -> Option<&WindowRecord> {
        selectors::window_by_id(&self.0, id)
    }

    pub fn focused_window_id(&self) -> Option<WindowId> {
        selectors::focused_window_id(&self.0)
    }
}

impl PartialEq for WindowsSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl fmt::Debug for WindowsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Failure reported by a store listener. Logged by the store; the remaining listeners still run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ListenerError(pub String);

impl ListenerError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

type Listener = Rc<dyn Fn(&WindowsSnapshot) -> Result<(), ListenerError>>;

struct StoreInner {
    state: WindowsState,
    snapshot: WindowsSnapshot,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

/// Handle returned by [`WindowStore::subscribe`].
///
/// Dropping the handle keeps the listener registered; call [`Subscription::unsubscribe`] to stop
/// receiving snapshots.
#[must_use = "keep the subscription to be able to unsubscribe"]
pub struct Subscription {
    id: u64,
    store: Weak<RefCell<StoreInner>>,
}

impl Subscription {
    /// Removes the listener. Does nothing if the store is gone.
    pub fn unsubscribe(self) {
        if let Some(store) = self.store.upgrade() {
            store
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[derive(Clone)]
pub struct WindowStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WindowStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("WindowStore")
            .field("windows", &inner.snapshot)
            .field("z_counter", &inner.state.z_counter)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl WindowStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::from_state(WindowsState::default())
    }

    /// Creates a store seeded with an initial layout, applying the same defaults as
    /// [`WindowStore::init_windows`].
    pub fn with_windows(initial: Vec<InitialWindow>) -> Self {
        Self::from_state(WindowsState::from_initial(initial))
    }

    fn from_state(state: WindowsState) -> Self {
        let snapshot = WindowsSnapshot::new(state.windows.clone());
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                state,
                snapshot,
                listeners: Vec::new(),
                next_listener_id: 1,
            })),
        }
    }

    /// Current snapshot. Stable until the next published mutation.
    pub fn get_snapshot(&self) -> WindowsSnapshot {
        self.inner.borrow().snapshot.clone()
    }

    /// Registers a listener called with each newly published snapshot.
    ///
    /// Listeners run synchronously in registration order, with no store borrow held, so a listener
    /// may call back into the store.
    pub fn subscribe(&self, listener: impl Fn(&WindowsSnapshot) + 'static) -> Subscription {
        self.try_subscribe(move |snapshot| {
            listener(snapshot);
            Ok(())
        })
    }

    /// Registers a listener that can report failure. An `Err` is logged and the remaining
    /// listeners still run.
    ///
    /// Panics are also caught on targets that unwind. `wasm32-unknown-unknown` aborts on panic,
    /// so listeners in the browser must report failures through the returned `Result`.
    pub fn try_subscribe(
        &self,
        listener: impl Fn(&WindowsSnapshot) -> Result<(), ListenerError> + 'static,
    ) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    /// Applies an action and publishes a new snapshot if the collection changed.
    ///
    /// Returns whether a snapshot was published. Actions on unknown windows are ignored; `open`
    /// without a usable target logs a warning.
    pub fn dispatch(&self, action: WindowAction) -> bool {
        let published = {
            let mut inner = self.inner.borrow_mut();
            let mut next = inner.state.clone();
            match reduce_windows(&mut next, action) {
                Ok(()) => {
                    let changed = next.windows != inner.state.windows;
                    if changed {
                        inner.snapshot = WindowsSnapshot::new(next.windows.clone());
                    }
                    inner.state = next;
                    changed.then(|| {
                        let listeners: Vec<Listener> =
                            inner.listeners.iter().map(|(_, l)| l.clone()).collect();
                        (inner.snapshot.clone(), listeners)
                    })
                }
                Err(ReducerError::WindowNotFound(_)) => None,
                Err(err @ ReducerError::MissingOpenConfig(_)) => {
                    logging::warn!("window store: {err}");
                    None
                }
            }
        };

        match published {
            Some((snapshot, listeners)) => {
                notify(&snapshot, &listeners);
                true
            }
            None => false,
        }
    }

    /// Replaces the whole collection; missing fields get their defaults and the z-order counter
    /// restarts from the highest z.
    pub fn init_windows(&self, initial: Vec<InitialWindow>) {
        self.dispatch(WindowAction::InitWindows(initial));
    }

    /// Shows a window and brings it to the front, creating it from `request` when it does not
    /// exist yet.
    pub fn open(&self, id: impl Into<WindowId>, request: Option<OpenWindowRequest>) {
        self.dispatch(WindowAction::Open {
            window_id: id.into(),
            request,
        });
    }

    pub fn close(&self, id: impl Into<WindowId>) {
        self.dispatch(WindowAction::Close {
            window_id: id.into(),
        });
    }

    pub fn minimize(&self, id: impl Into<WindowId>) {
        self.dispatch(WindowAction::Minimize {
            window_id: id.into(),
        });
    }

    pub fn maximize(&self, id: impl Into<WindowId>) {
        self.dispatch(WindowAction::Maximize {
            window_id: id.into(),
        });
    }

    pub fn restore(&self, id: impl Into<WindowId>) {
        self.dispatch(WindowAction::Restore {
            window_id: id.into(),
        });
    }

    pub fn focus(&self, id: impl Into<WindowId>) {
        self.dispatch(WindowAction::Focus {
            window_id: id.into(),
        });
    }

    /// Moves a window by a normalized delta. Used while dragging.
    pub fn move_by(&self, id: impl Into<WindowId>, dx: f64, dy: f64) {
        self.dispatch(WindowAction::MoveBy {
            window_id: id.into(),
            dx,
            dy,
        });
    }

    /// Grows a window by a normalized delta, anchored at its current origin.
    pub fn resize_by(&self, id: impl Into<WindowId>, dw: f64, dh: f64) {
        self.dispatch(WindowAction::ResizeBy {
            window_id: id.into(),
            dw,
            dh,
        });
    }

    /// Assigns position and size together, as edge resizing from the north or west needs.
    pub fn set_rect(&self, id: impl Into<WindowId>, rect: WindowRect) {
        self.dispatch(WindowAction::SetRect {
            window_id: id.into(),
            rect,
        });
    }

    pub fn update_meta(&self, id: impl Into<WindowId>, patch: WindowMetaPatch) {
        if patch.is_empty() {
            return;
        }
        self.dispatch(WindowAction::UpdateMeta {
            window_id: id.into(),
            patch,
        });
    }

    /// Deletes a window record outright, unlike [`WindowStore::close`].
    pub fn remove(&self, id: impl Into<WindowId>) {
        self.dispatch(WindowAction::Remove {
            window_id: id.into(),
        });
    }

    pub fn get_windows(&self) -> Vec<WindowRecord> {
        self.get_snapshot().windows().to_vec()
    }

    pub fn get_windows_sorted(&self) -> Vec<WindowRecord> {
        self.get_snapshot().sorted()
    }

    pub fn visible_windows(&self) -> Vec<WindowRecord> {
        self.get_snapshot().visible()
    }

    pub fn minimized_windows(&self) -> Vec<WindowRecord> {
        self.get_snapshot().minimized()
    }

    pub fn is_any_open(&self) -> bool {
        self.get_snapshot().is_any_open()
    }

    pub fn has_visible_window(&self) -> bool {
        self.get_snapshot().has_visible_window()
    }

    pub fn get_by_id(&self, id: impl Into<WindowId>) -> Option<WindowRecord> {
        self.get_snapshot().get_by_id(&id.into()).cloned()
    }
}

fn notify(snapshot: &WindowsSnapshot, listeners: &[Listener]) {
    for listener in listeners {
        match catch_unwind(AssertUnwindSafe(|| listener(snapshot))) {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logging::warn!("window store listener failed: {err}"),
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                logging::warn!("window store listener panicked: {reason}");
            }
        }
    }
}
