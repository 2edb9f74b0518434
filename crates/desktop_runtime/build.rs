use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[path = "../desktop_app_contract/src/id_policy.rs"]
mod id_policy;

const CATALOG_SCHEMA_VERSION: u32 = 1;
const CATEGORIES: [&str; 5] = [
    "dashboards",
    "builders",
    "marketplaces",
    "communication",
    "utilities",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShellSection {
    stagger_origin_x: i32,
    stagger_origin_y: i32,
    stagger_step: i32,
    stagger_cycle: u32,
    #[serde(default)]
    report_ignored_actions: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppEntry {
    app_id: String,
    display_name: String,
    icon: String,
    color_theme: String,
    category: String,
    #[serde(default)]
    launcher_order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppCatalog {
    schema_version: u32,
    shell: ShellSection,
    apps: Vec<AppEntry>,
}

fn validate(catalog: &AppCatalog, path: &str) {
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        panic!(
            "catalog schema mismatch in {path}: expected {CATALOG_SCHEMA_VERSION} found {}",
            catalog.schema_version
        );
    }
    if catalog.shell.stagger_step < 0 {
        panic!("stagger_step in {path} must not be negative");
    }

    let mut seen = BTreeSet::new();
    for app in &catalog.apps {
        if !id_policy::is_valid_application_id(&app.app_id) {
            panic!("invalid app_id `{}` in {path}", app.app_id);
        }
        if !seen.insert(app.app_id.as_str()) {
            panic!("duplicate app_id `{}` in {path}", app.app_id);
        }
        if app.display_name.trim().is_empty() || app.icon.trim().is_empty() {
            panic!("app `{}` in {path} needs a display_name and icon", app.app_id);
        }
        if !CATEGORIES.contains(&app.category.as_str()) {
            panic!(
                "app `{}` in {path} has unknown category `{}`",
                app.app_id, app.category
            );
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("app_catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rerun-if-changed=../desktop_app_contract/src/id_policy.rs");

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let mut catalog: AppCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&catalog, &path.display().to_string());

    catalog.apps.sort_by(|a, b| a.app_id.cmp(&b.app_id));
    let apps_json = serde_json::to_string_pretty(&catalog.apps).expect("serialize app catalog");
    let shell_json = serde_json::to_string_pretty(&catalog.shell).expect("serialize shell config");
    let generated = format!(
        "/// Build-time generated app catalog JSON.\n\
pub const APP_CATALOG_JSON: &str = r##\"{apps_json}\"##;\n\
/// Build-time generated shell configuration JSON.\n\
pub const SHELL_CONFIG_JSON: &str = r##\"{shell_json}\"##;\n"
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
