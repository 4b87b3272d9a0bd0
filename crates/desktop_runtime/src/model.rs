use desktop_window_contract::WindowContent;
use serde::{Deserialize, Serialize};

use crate::geometry::{clamp_rect, FULL_RECT};

/// Rect given to windows opened or seeded without one.
pub const DEFAULT_WINDOW_RECT: WindowRect = WindowRect {
    x: 0.1,
    y: 0.1,
    w: 0.6,
    h: 0.6,
};
/// Icon token given to windows created without one.
pub const DEFAULT_WINDOW_ICON: &str = "window";

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for WindowId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Window rectangle normalized to the viewport: every field is a fraction of the viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl WindowRect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Shifts the origin; the result is not clamped.
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Grows the size while keeping the origin; the result is not clamped.
    pub fn grown(self, dw: f64, dh: f64) -> Self {
        Self {
            w: self.w + dw,
            h: self.h + dh,
            ..self
        }
    }

    /// Converts to absolute pixel geometry for a viewport.
    pub fn to_pixels(self, viewport: ViewportSize) -> PixelRect {
        PixelRect {
            left: self.x * viewport.width,
            top: self.y * viewport.height,
            width: self.w * viewport.width,
            height: self.h * viewport.height,
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        DEFAULT_WINDOW_RECT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    /// Inline CSS positioning for an absolutely positioned window frame.
    pub fn css(&self, z: u32) -> String {
        format!(
            "left:{:.2}px;top:{:.2}px;width:{:.2}px;height:{:.2}px;z-index:{};",
            self.left, self.top, self.width, self.height, z
        )
    }
}

/// Pixel size of the area windows are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Converts a pixel delta to a normalized delta. Degenerate viewports yield no movement.
    pub fn normalize_delta(self, dx_px: f64, dy_px: f64) -> (f64, f64) {
        let dx = if self.width > 0.0 {
            dx_px / self.width
        } else {
            0.0
        };
        let dy = if self.height > 0.0 {
            dy_px / self.height
        } else {
            0.0
        };
        (dx, dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
    Closed,
}

impl WindowState {
    /// Rendered on the desktop (normal or maximized).
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Normal | Self::Maximized)
    }

    /// Anything other than closed, minimized windows included.
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Minimized => "minimized",
            Self::Maximized => "maximized",
            Self::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub rect: WindowRect,
    pub state: WindowState,
    pub z: u32,
    pub prev_rect: Option<WindowRect>,
    pub content: Option<WindowContent>,
}

/// Defaulting rules shared by bulk initialization and `open`.
pub struct WindowDefaults;

impl WindowDefaults {
    pub fn title(id: &WindowId, title: Option<String>) -> String {
        title.unwrap_or_else(|| id.0.clone())
    }

    pub fn icon(icon: Option<String>) -> String {
        icon.unwrap_or_else(|| DEFAULT_WINDOW_ICON.to_string())
    }

    pub fn rect(rect: Option<WindowRect>) -> WindowRect {
        clamp_rect(rect.unwrap_or(DEFAULT_WINDOW_RECT))
    }
}

/// Partial window record supplied when a desktop is (re)initialized.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InitialWindow {
    pub id: WindowId,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub rect: Option<WindowRect>,
    pub state: Option<WindowState>,
    pub z: Option<u32>,
    pub content: Option<WindowContent>,
}

impl InitialWindow {
    pub fn new(id: impl Into<WindowId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_rect(mut self, rect: WindowRect) -> Self {
        self.rect = Some(rect);
        self
    }

    pub fn with_state(mut self, state: WindowState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_z(mut self, z: u32) -> Self {
        self.z = Some(z);
        self
    }

    pub fn with_content(mut self, content: WindowContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Builds the full record. `index` is the position in the initial list and seeds `z` when
    /// none was supplied.
    ///
    /// Seeds that start minimized or maximized keep their clamped rect in `prev_rect`, the same
    /// as if they had been minimized or maximized after creation.
    pub fn into_record(self, index: usize) -> WindowRecord {
        let rect = WindowDefaults::rect(self.rect);
        let state = self.state.unwrap_or_default();
        let (rect, prev_rect) = match state {
            WindowState::Maximized => (FULL_RECT, Some(rect)),
            WindowState::Minimized => (rect, Some(rect)),
            WindowState::Normal | WindowState::Closed => (rect, None),
        };
        WindowRecord {
            title: WindowDefaults::title(&self.id, self.title),
            icon: WindowDefaults::icon(self.icon),
            id: self.id,
            rect,
            state,
            z: self.z.unwrap_or(index as u32 + 1),
            prev_rect,
            content: self.content,
        }
    }
}

/// Creation config for [`crate::store::WindowStore::open`] when the window does not exist yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OpenWindowRequest {
    pub title: Option<String>,
    pub icon: Option<String>,
    pub rect: Option<WindowRect>,
    pub content: Option<WindowContent>,
}

impl OpenWindowRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_rect(mut self, rect: WindowRect) -> Self {
        self.rect = Some(rect);
        self
    }

    pub fn with_content(mut self, content: WindowContent) -> Self {
        self.content = Some(content);
        self
    }

    pub(crate) fn into_record(self, id: WindowId, z: u32) -> WindowRecord {
        WindowRecord {
            title: WindowDefaults::title(&id, self.title),
            icon: WindowDefaults::icon(self.icon),
            id,
            rect: WindowDefaults::rect(self.rect),
            state: WindowState::Normal,
            z,
            prev_rect: None,
            content: self.content,
        }
    }
}

/// Shallow patch of a window's display metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowMetaPatch {
    pub title: Option<String>,
    pub icon: Option<String>,
    pub content: Option<WindowContent>,
}

impl WindowMetaPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.icon.is_none() && self.content.is_none()
    }
}

/// Reducer-owned window collection plus the shared z-order counter.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowsState {
    pub windows: Vec<WindowRecord>,
    pub z_counter: u32,
}

impl Default for WindowsState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            z_counter: 1,
        }
    }
}

impl WindowsState {
    pub fn from_initial(initial: Vec<InitialWindow>) -> Self {
        let windows: Vec<WindowRecord> = initial
            .into_iter()
            .enumerate()
            .map(|(index, seed)| seed.into_record(index))
            .collect();
        let z_counter = windows.iter().map(|w| w.z).max().unwrap_or(1).max(1);
        Self { windows, z_counter }
    }

    pub fn window(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == id)
    }

    /// Increments the shared counter and returns the new top value.
    pub(crate) fn next_z(&mut self) -> u32 {
        self.z_counter = self.z_counter.saturating_add(1);
        self.z_counter
    }
}
