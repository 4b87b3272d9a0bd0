//! Pure derived views over a window collection.

use crate::model::{WindowId, WindowRecord, WindowState};

/// Open windows in back-to-front order. Equal z values keep collection order.
pub fn windows_sorted(windows: &[WindowRecord]) -> Vec<WindowRecord> {
    let mut sorted: Vec<WindowRecord> = windows
        .iter()
        .filter(|w| w.state.is_open())
        .cloned()
        .collect();
    sorted.sort_by_key(|w| w.z);
    sorted
}

/// Windows drawn on the desktop (normal or maximized).
pub fn visible_windows(windows: &[WindowRecord]) -> Vec<WindowRecord> {
    windows
        .iter()
        .filter(|w| w.state.is_visible())
        .cloned()
        .collect()
}

/// Windows parked in the taskbar.
pub fn minimized_windows(windows: &[WindowRecord]) -> Vec<WindowRecord> {
    windows
        .iter()
        .filter(|w| w.state == WindowState::Minimized)
        .cloned()
        .collect()
}

/// Any window not closed, minimized ones included.
pub fn is_any_open(windows: &[WindowRecord]) -> bool {
    windows.iter().any(|w| w.state.is_open())
}

/// Whether at least one window is drawn. The decorative scene only takes free camera input when
/// this is false.
pub fn has_visible_window(windows: &[WindowRecord]) -> bool {
    windows.iter().any(|w| w.state.is_visible())
}

pub fn window_by_id<'a>(windows: &'a [WindowRecord], id: &WindowId) -> Option<&'a WindowRecord> {
    windows.iter().find(|w| &w.id == id)
}

/// The visible window currently in front, rendered as focused.
pub fn focused_window_id(windows: &[WindowRecord]) -> Option<WindowId> {
    windows
        .iter()
        .filter(|w| w.state.is_visible())
        .max_by_key(|w| w.z)
        .map(|w| w.id.clone())
}
