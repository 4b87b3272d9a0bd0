//! Browser environment queries used by the window views.
//!
//! Only the view layer reads the environment; the store never sees pixel sizes. Native builds
//! report a fixed window size so gesture and layout math can run in plain unit tests.

use crate::{config::DesktopConfig, model::ViewportSize};

/// Window size reported when no browser window is available.
pub const FALLBACK_WINDOW_SIZE: ViewportSize = ViewportSize::new(1280.0, 800.0);
const MIN_VIEWPORT_WIDTH: f64 = 320.0;
const MIN_VIEWPORT_HEIGHT: f64 = 220.0;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Environment handle for one desktop. Holds the taskbar reservation so callers get the area
/// windows are actually laid out in.
pub struct DesktopHostContext {
    taskbar_height_px: f64,
    mobile_breakpoint_px: f64,
}

impl DesktopHostContext {
    pub fn new(config: &DesktopConfig) -> Self {
        Self {
            taskbar_height_px: config.taskbar_height_px.max(0.0),
            mobile_breakpoint_px: config.interaction.mobile_breakpoint_px,
        }
    }

    /// Size of the window layer: the browser window's inner size minus the taskbar.
    pub fn viewport_size(&self) -> ViewportSize {
        self.layout_area(window_inner_size())
    }

    /// Whether the current window is narrow enough to disable drag and resize.
    pub fn is_mobile(&self) -> bool {
        self.is_mobile_width(window_inner_size().width)
    }

    fn layout_area(&self, window: ViewportSize) -> ViewportSize {
        ViewportSize::new(
            window.width.max(MIN_VIEWPORT_WIDTH),
            (window.height - self.taskbar_height_px).max(MIN_VIEWPORT_HEIGHT),
        )
    }

    fn is_mobile_width(&self, width: f64) -> bool {
        width < self.mobile_breakpoint_px
    }
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(&DesktopConfig::default())
    }
}

fn window_inner_size() -> ViewportSize {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(FALLBACK_WINDOW_SIZE.width);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(FALLBACK_WINDOW_SIZE.height);
            return ViewportSize::new(width, height);
        }
    }

    FALLBACK_WINDOW_SIZE
}
