//! Static application registry assembled from the build-time catalog and the panel render units.

use std::collections::HashSet;
use std::sync::OnceLock;

use desktop_app_contract::{AppCategory, AppManifestEntry, AppModule, ApplicationId};
use thiserror::Error;

use crate::config::APP_CATALOG_JSON;

/// Immutable catalog entry for one launchable application.
#[derive(Debug, Clone)]
pub struct AppDescriptor {
    pub app_id: ApplicationId,
    pub name: String,
    pub icon: String,
    pub color_theme: String,
    pub category: AppCategory,
    pub launcher_order: u32,
    pub render: AppModule,
}

impl AppDescriptor {
    pub fn from_manifest(entry: AppManifestEntry, render: AppModule) -> Self {
        Self {
            app_id: entry.app_id,
            name: entry.display_name,
            icon: entry.icon,
            color_theme: entry.color_theme,
            category: entry.category,
            launcher_order: entry.launcher_order,
            render,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a registry could not be assembled.
pub enum RegistryError {
    #[error("duplicate app id `{0}`")]
    DuplicateApp(ApplicationId),
    #[error("no render unit registered for `{0}`")]
    MissingRenderUnit(ApplicationId),
    #[error("invalid app catalog: {0}")]
    InvalidCatalog(String),
}

/// Lookup table of every application the shell can launch. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct AppRegistry {
    entries: Vec<AppDescriptor>,
}

impl AppRegistry {
    /// Builds a registry, rejecting repeated ids.
    pub fn new(entries: Vec<AppDescriptor>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.app_id.clone()) {
                return Err(RegistryError::DuplicateApp(entry.app_id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Builds a registry from catalog JSON, resolving each entry's render unit through `resolve`.
    pub fn from_catalog_json(
        raw: &str,
        resolve: impl Fn(&str) -> Option<AppModule>,
    ) -> Result<Self, RegistryError> {
        let manifests: Vec<AppManifestEntry> = serde_json::from_str(raw)
            .map_err(|err| RegistryError::InvalidCatalog(err.to_string()))?;
        let entries = manifests
            .into_iter()
            .map(|entry| {
                let render = resolve(entry.app_id.as_str())
                    .ok_or_else(|| RegistryError::MissingRenderUnit(entry.app_id.clone()))?;
                Ok(AppDescriptor::from_manifest(entry, render))
            })
            .collect::<Result<Vec<_>, RegistryError>>()?;
        Self::new(entries)
    }

    pub fn get(&self, app_id: &ApplicationId) -> Option<&AppDescriptor> {
        self.entries.iter().find(|entry| entry.app_id == *app_id)
    }

    pub fn contains(&self, app_id: &ApplicationId) -> bool {
        self.get(app_id).is_some()
    }

    pub fn entries(&self) -> &[AppDescriptor] {
        &self.entries
    }

    /// Groups entries for the launcher: categories in [`AppCategory::ALL`] order, empty groups
    /// omitted, entries sorted by `launcher_order` then name.
    pub fn launcher_groups(&self) -> Vec<(AppCategory, Vec<&AppDescriptor>)> {
        AppCategory::ALL
            .iter()
            .filter_map(|category| {
                let mut group: Vec<&AppDescriptor> = self
                    .entries
                    .iter()
                    .filter(|entry| entry.category == *category)
                    .collect();
                if group.is_empty() {
                    return None;
                }
                group.sort_by(|a, b| {
                    a.launcher_order
                        .cmp(&b.launcher_order)
                        .then_with(|| a.name.cmp(&b.name))
                });
                Some((*category, group))
            })
            .collect()
    }
}

/// Returns the built-in registry.
///
/// # Panics
///
/// Panics if the generated catalog references an app without a panel. The build-time catalog and
/// the panel crate are versioned together, so this only trips during development.
pub fn app_registry() -> &'static AppRegistry {
    static REGISTRY: OnceLock<AppRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        AppRegistry::from_catalog_json(APP_CATALOG_JSON, desktop_app_panels::panel_module)
            .expect("generated app catalog should resolve to panels")
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use desktop_app_contract::{AppCategory, AppModule, ApplicationId};
    use leptos::{IntoView, View};

    use super::{AppDescriptor, AppRegistry};

    fn render_nothing() -> View {
        ().into_view()
    }

    pub fn descriptor(raw_id: &str, category: AppCategory) -> AppDescriptor {
        AppDescriptor {
            app_id: ApplicationId::trusted(raw_id),
            name: raw_id.to_string(),
            icon: "app".to_string(),
            color_theme: "slate".to_string(),
            category,
            launcher_order: 0,
            render: AppModule::new(render_nothing),
        }
    }

    /// Registry with `test.a`, `test.b`, and `test.c`.
    pub fn registry() -> AppRegistry {
        AppRegistry::new(vec![
            descriptor("test.a", AppCategory::Dashboards),
            descriptor("test.b", AppCategory::Builders),
            descriptor("test.c", AppCategory::Communication),
        ])
        .expect("test registry")
    }
}
