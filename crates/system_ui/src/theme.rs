//! Theme tokens consumed by the shell primitives as CSS custom properties.
//!
//! The window manager never reads these; they only style the frame, title bar, and taskbar.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Opaque style tokens for the desktop shell.
pub struct ThemeTokens {
    /// Window corner radius, in pixels.
    pub window_radius_px: f64,
    /// Window frame background.
    pub window_background: String,
    /// Title bar background of the focused window.
    pub titlebar_active: String,
    /// Title bar background of unfocused windows.
    pub titlebar_inactive: String,
    /// Taskbar background.
    pub taskbar_background: String,
    /// Accent used for call-to-action buttons.
    pub accent: String,
    /// Primary text color.
    pub text: String,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            window_radius_px: 10.0,
            window_background: "#f7f5f0".to_string(),
            titlebar_active: "#2f3a4a".to_string(),
            titlebar_inactive: "#6b7380".to_string(),
            taskbar_background: "rgba(20, 24, 32, 0.82)".to_string(),
            accent: "#e0793a".to_string(),
            text: "#1b1f27".to_string(),
        }
    }
}

impl ThemeTokens {
    /// Custom property name/value pairs, in declaration order.
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--desktop-window-radius", format!("{}px", self.window_radius_px)),
            ("--desktop-window-bg", self.window_background.clone()),
            ("--desktop-titlebar-active", self.titlebar_active.clone()),
            ("--desktop-titlebar-inactive", self.titlebar_inactive.clone()),
            ("--desktop-taskbar-bg", self.taskbar_background.clone()),
            ("--desktop-accent", self.accent.clone()),
            ("--desktop-text", self.text.clone()),
        ]
    }

    /// Inline `style` value declaring every token.
    pub fn to_style(&self) -> String {
        self.css_variables()
            .into_iter()
            .map(|(name, value)| format!("{name}:{value};"))
            .collect()
    }
}
