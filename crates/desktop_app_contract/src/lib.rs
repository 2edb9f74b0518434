//! Shared contract types between the desktop window manager runtime and the application panels.
//!
//! Panels are zero-argument render units. The runtime keys every window by [`ApplicationId`] and
//! never looks inside the view a panel produces.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod id_policy;

use leptos::View;
use serde::{Deserialize, Serialize};

/// Stable identifier for a catalog application.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` conforms to the `segment.segment...` policy.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if id_policy::is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid application id `{raw}`; expected namespaced dotted segments"
            ))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for compile-time/runtime trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns a DOM-safe token derived from the id (`dao.builder` -> `dao-builder`).
    pub fn dom_token(&self) -> String {
        self.0.replace('.', "-")
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ApplicationId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ApplicationId> for String {
    fn from(value: ApplicationId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Launcher grouping for catalog entries.
///
/// Variant order is the order the launcher renders its groups in.
pub enum AppCategory {
    /// Read-mostly overview panels.
    Dashboards,
    /// Guided creation flows.
    Builders,
    /// Listing and trading surfaces.
    Marketplaces,
    /// Chat rooms and feeds.
    Communication,
    /// Small standalone tools.
    Utilities,
}

impl AppCategory {
    /// All categories in launcher order.
    pub const ALL: [Self; 5] = [
        Self::Dashboards,
        Self::Builders,
        Self::Marketplaces,
        Self::Communication,
        Self::Utilities,
    ];

    /// Heading shown above the category's launcher group.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboards => "Dashboards",
            Self::Builders => "Builders",
            Self::Marketplaces => "Marketplaces",
            Self::Communication => "Communication",
            Self::Utilities => "Utilities",
        }
    }
}

/// Zero-argument render function for an app's content area.
pub type AppRenderFn = fn() -> View;

#[derive(Clone, Copy)]
/// Render unit for one catalog application.
pub struct AppModule {
    render_fn: AppRenderFn,
}

impl AppModule {
    /// Creates a module from a render function.
    pub const fn new(render_fn: AppRenderFn) -> Self {
        Self { render_fn }
    }

    /// Renders the app content. The app owns whatever state it creates while mounted.
    pub fn render(self) -> View {
        (self.render_fn)()
    }
}

impl std::fmt::Debug for AppModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppModule").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Catalog metadata for one application, as declared in the build-time app catalog.
pub struct AppManifestEntry {
    /// Canonical app id.
    pub app_id: ApplicationId,
    /// Human-readable display name.
    pub display_name: String,
    /// Icon token rendered by the shell.
    pub icon: String,
    /// Color theme token applied to the launcher tile, dock indicator, and title bar.
    pub color_theme: String,
    /// Launcher grouping.
    pub category: AppCategory,
    /// Sort key within the category group.
    #[serde(default)]
    pub launcher_order: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_id_requires_dotted_namespaces() {
        assert!(ApplicationId::new("dao.builder").is_ok());
        assert!(ApplicationId::new("market.nft-gallery").is_ok());
        assert!(ApplicationId::new("builder").is_err());
        assert!(ApplicationId::new("Dao.builder").is_err());
        assert!(ApplicationId::new("dao..builder").is_err());
        assert!(ApplicationId::new("dao.builder-").is_err());
    }

    #[test]
    fn application_id_enforces_length_limits() {
        let segment = "a".repeat(32);
        assert!(ApplicationId::new(format!("{segment}.{segment}")).is_ok());
        assert!(ApplicationId::new(format!("{segment}a.app")).is_err());

        let long = vec!["abcdefghij"; 11].join(".");
        assert_eq!(long.len(), 120);
        assert!(ApplicationId::new(long.clone()).is_ok());
        assert!(ApplicationId::new(format!("{long}.x")).is_err());
    }

    #[test]
    fn manifest_entry_rejects_malformed_ids() {
        let ok = serde_json::from_str::<AppManifestEntry>(
            r#"{"app_id":"chat.community","display_name":"Community Chat","icon":"chat","color_theme":"violet","category":"communication"}"#,
        )
        .expect("valid entry");
        assert_eq!(ok.app_id.as_str(), "chat.community");
        assert_eq!(ok.category, AppCategory::Communication);
        assert_eq!(ok.launcher_order, 0);

        let bad = serde_json::from_str::<AppManifestEntry>(
            r#"{"app_id":"Chat","display_name":"x","icon":"x","color_theme":"x","category":"utilities"}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn dom_token_replaces_separators() {
        assert_eq!(
            ApplicationId::trusted("dashboard.treasury").dom_token(),
            "dashboard-treasury"
        );
    }

    #[test]
    fn categories_are_listed_in_launcher_order() {
        let mut sorted = AppCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, AppCategory::ALL);
    }
}
