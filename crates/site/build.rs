use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Rect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowSeed {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rect: Option<Rect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    z: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutManifest {
    schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    taskbar_height_px: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interaction: Option<toml::Table>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    main_window: Option<toml::Table>,
    #[serde(default)]
    windows: Vec<WindowSeed>,
    #[serde(default)]
    theme: toml::Table,
}

#[derive(Debug, Serialize)]
struct DesktopConfigJson<'a> {
    initial_windows: &'a [WindowSeed],
    #[serde(skip_serializing_if = "Option::is_none")]
    main_window: Option<&'a toml::Table>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interaction: Option<&'a toml::Table>,
    #[serde(skip_serializing_if = "Option::is_none")]
    taskbar_height_px: Option<f64>,
}

fn validate(manifest: &LayoutManifest, path: &str) {
    if manifest.schema_version != SCHEMA_VERSION {
        panic!(
            "layout schema mismatch in {path}: expected {SCHEMA_VERSION} found {}",
            manifest.schema_version
        );
    }
    let mut seen = BTreeSet::new();
    for seed in &manifest.windows {
        if seed.id.trim().is_empty() {
            panic!("empty window id in {path}");
        }
        if !seen.insert(seed.id.as_str()) {
            panic!("duplicate window id `{}` in {path}", seed.id);
        }
        if let Some(rect) = seed.rect {
            if ![rect.x, rect.y, rect.w, rect.h].iter().all(|v| v.is_finite()) {
                panic!("non-finite rect for window `{}` in {path}", seed.id);
            }
        }
        if let Some(state) = seed.state.as_deref() {
            if !matches!(state, "normal" | "minimized" | "maximized" | "closed") {
                panic!("unknown state `{state}` for window `{}` in {path}", seed.id);
            }
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.layout.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: LayoutManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&manifest, &path.display().to_string());

    let desktop = DesktopConfigJson {
        initial_windows: &manifest.windows,
        main_window: manifest.main_window.as_ref(),
        interaction: manifest.interaction.as_ref(),
        taskbar_height_px: manifest.taskbar_height_px,
    };
    let desktop_json = serde_json::to_string_pretty(&desktop).expect("serialize desktop layout");
    let theme_json = serde_json::to_string_pretty(&manifest.theme).expect("serialize theme");
    let generated = format!(
        "/// Build-time generated desktop configuration JSON.\n\
pub const DESKTOP_CONFIG_JSON: &str = r##\"{desktop_json}\"##;\n\
/// Build-time generated theme token JSON.\n\
pub const THEME_JSON: &str = r##\"{theme_json}\"##;\n"
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("layout_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
