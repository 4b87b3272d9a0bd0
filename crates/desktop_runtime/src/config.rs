//! Desktop configuration: seeded windows, the taskbar call-to-action window, and interaction
//! thresholds.

use std::collections::HashSet;

use desktop_window_contract::ContentBreakpoints;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{InitialWindow, OpenWindowRequest, WindowId, WindowRect, WindowState};

/// Taskbar height reserved below the window layer, in CSS pixels.
pub const DEFAULT_TASKBAR_HEIGHT_PX: f64 = 40.0;
/// Id of the window opened by the taskbar call-to-action.
pub const MAIN_WINDOW_ID: &str = "main";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse desktop config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("window id `{0}` is declared more than once")]
    DuplicateWindowId(String),
    #[error("window ids must not be empty")]
    EmptyWindowId,
}

/// Serialized form of one seeded window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSeed {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<WindowRect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<WindowState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<u32>,
}

impl WindowSeed {
    pub fn to_initial(&self) -> InitialWindow {
        InitialWindow {
            id: WindowId::new(self.id.clone()),
            title: self.title.clone(),
            icon: self.icon.clone(),
            rect: self.rect,
            state: self.state,
            z: self.z,
            content: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MainWindowConfig {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub rect: WindowRect,
}

impl Default for MainWindowConfig {
    fn default() -> Self {
        Self {
            id: MAIN_WINDOW_ID.to_string(),
            title: "Welcome".to_string(),
            icon: "home".to_string(),
            rect: WindowRect::new(0.15, 0.1, 0.7, 0.75),
        }
    }
}

impl MainWindowConfig {
    pub fn window_id(&self) -> WindowId {
        WindowId::new(self.id.clone())
    }

    /// Creation config used when the main window does not exist yet.
    pub fn open_request(&self) -> OpenWindowRequest {
        OpenWindowRequest::new()
            .with_title(self.title.clone())
            .with_icon(self.icon.clone())
            .with_rect(self.rect)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Viewports narrower than this disable drag and resize.
    pub mobile_breakpoint_px: f64,
    pub narrow_content_px: f64,
    pub short_content_px: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        let breakpoints = ContentBreakpoints::default();
        Self {
            mobile_breakpoint_px: 768.0,
            narrow_content_px: breakpoints.narrow_px,
            short_content_px: breakpoints.short_px,
        }
    }
}

impl InteractionConfig {
    pub fn content_breakpoints(&self) -> ContentBreakpoints {
        ContentBreakpoints {
            narrow_px: self.narrow_content_px,
            short_px: self.short_content_px,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub initial_windows: Vec<WindowSeed>,
    pub main_window: MainWindowConfig,
    pub interaction: InteractionConfig,
    pub taskbar_height_px: f64,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            initial_windows: Vec::new(),
            main_window: MainWindowConfig::default(),
            interaction: InteractionConfig::default(),
            taskbar_height_px: DEFAULT_TASKBAR_HEIGHT_PX,
        }
    }
}

impl DesktopConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for seed in &self.initial_windows {
            if seed.id.trim().is_empty() {
                return Err(ConfigError::EmptyWindowId);
            }
            if !seen.insert(seed.id.as_str()) {
                return Err(ConfigError::DuplicateWindowId(seed.id.clone()));
            }
        }
        if self.main_window.id.trim().is_empty() {
            return Err(ConfigError::EmptyWindowId);
        }
        Ok(())
    }

    pub fn initial_windows(&self) -> Vec<InitialWindow> {
        self.initial_windows
            .iter()
            .map(WindowSeed::to_initial)
            .collect()
    }
}
