//! Desktop layout embedded at build time from `desktop.layout.toml`.

use desktop_runtime::{ConfigError, DesktopConfig};
use leptos::logging;
use system_ui::ThemeTokens;

include!(concat!(env!("OUT_DIR"), "/layout_generated.rs"));

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteLayout {
    pub desktop: DesktopConfig,
    pub theme: ThemeTokens,
}

fn parse_layout(desktop_json: &str, theme_json: &str) -> Result<SiteLayout, ConfigError> {
    Ok(SiteLayout {
        desktop: DesktopConfig::from_json(desktop_json)?,
        theme: serde_json::from_str(theme_json)?,
    })
}

/// Loads the embedded layout. A layout that fails to parse falls back to an empty desktop so
/// the page still renders.
pub fn load_layout() -> SiteLayout {
    parse_layout(DESKTOP_CONFIG_JSON, THEME_JSON).unwrap_or_else(|err| {
        logging::warn!("desktop layout rejected, using defaults: {err}");
        SiteLayout::default()
    })
}
