//! Window manager for the portfolio desktop: normalized window geometry, an explicitly
//! constructed window store with snapshot subscriptions, pointer gesture state machines, and the
//! Leptos window and taskbar views built on top of them.

pub mod components;
pub mod config;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod selectors;
pub mod store;

pub use components::{
    use_desktop_runtime, use_window_actions, use_window_selectors, ContentRegistry,
    DesktopProvider, DesktopRuntimeContext, DesktopShell, WindowActions, WindowSelectors,
};
pub use config::{ConfigError, DesktopConfig, InteractionConfig, MainWindowConfig, WindowSeed};
pub use geometry::{clamp_rect, FULL_RECT, MIN_WINDOW_SIZE};
pub use gesture::{GestureCommand, PointerPosition, PointerSession, ResizeEdge, WindowGestures};
pub use model::*;
pub use reducer::{reduce_windows, ReducerError, WindowAction};
pub use store::{ListenerError, Subscription, WindowStore, WindowsSnapshot};
