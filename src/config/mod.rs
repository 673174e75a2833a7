//! Per-project configuration (`harukit.json`).
//!
//! The configuration file lives at the project root and records the style
//! variant, language and Tailwind settings, import aliases, registry
//! connection info, and three bookkeeping lists: installed components,
//! dependencies, and dev dependencies.
//!
//! Consumers must treat unknown or missing fields as defaulted, never as
//! fatal: every field carries a serde default, so a config written by an
//! older or newer CLI still loads. The three lists never contain
//! duplicates; all mutations are set-wise.
//!
//! Module layout follows the load/persist/mutate split:
//! - `mod.rs` - the [`ProjectConfig`] data model and [`ConfigStore`] handle
//! - [`io`] - load (tolerant) and save (fail-loud) operations
//! - [`mutations`] - set-wise list mutations that persist immediately
//!
//! # File Format
//!
//! ```json
//! {
//!   "$schema": "https://harukit.dev/schema.json",
//!   "style": "default",
//!   "typescript": true,
//!   "tailwind": {
//!     "config": "tailwind.config.js",
//!     "css": "src/index.css",
//!     "baseColor": "slate",
//!     "cssVariables": true,
//!     "prefix": ""
//!   },
//!   "aliases": { "components": "@/components", "utils": "@/lib/utils" },
//!   "registry": { "url": "https://registry.harukit.dev", "cache": true, "ttl": 3600 },
//!   "components": ["button"],
//!   "dependencies": ["clsx"],
//!   "devDependencies": []
//! }
//! ```

pub mod io;
pub mod mutations;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_FILE_NAME;

/// Style variant for installed component content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    /// The stock component styling.
    Default,
    /// The alternate "new-york" styling, applied as a substitution pass at
    /// install time.
    NewYork,
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::NewYork => write!(f, "new-york"),
        }
    }
}

/// Tailwind CSS sub-configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TailwindConfig {
    /// Path of the Tailwind config file, relative to the project root.
    pub config: String,
    /// Path of the CSS entry file, relative to the project root.
    pub css: String,
    /// Base color family for generated theming.
    pub base_color: String,
    /// Whether theming uses CSS variables.
    pub css_variables: bool,
    /// Class prefix applied by the project's Tailwind setup.
    pub prefix: String,
}

impl Default for TailwindConfig {
    fn default() -> Self {
        Self {
            config: "tailwind.config.js".to_string(),
            css: "src/index.css".to_string(),
            base_color: "slate".to_string(),
            css_variables: true,
            prefix: String::new(),
        }
    }
}

/// Import alias paths used when rewriting template imports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasConfig {
    /// Alias for the components directory.
    pub components: String,
    /// Alias for the shared utils module.
    pub utils: String,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self { components: "@/components".to_string(), utils: "@/lib/utils".to_string() }
    }
}

/// Registry connection info.
///
/// Documented extension point: the shipped CLI resolves components from its
/// local catalog and never dials these fields. They are parsed, persisted,
/// and shown by `harukit info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Remote registry URL.
    pub url: String,
    /// Whether responses may be cached.
    pub cache: bool,
    /// Cache time-to-live in seconds.
    pub ttl: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { url: "https://registry.harukit.dev".to_string(), cache: true, ttl: 3600 }
    }
}

/// The persisted per-project configuration.
///
/// Invariant: `components`, `dependencies`, and `dev_dependencies` contain
/// no duplicates. Use the [`ConfigStore`] mutation methods, which enforce
/// this and persist after every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Schema marker for editor tooling.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Style variant applied to installed content.
    pub style: Style,
    /// Whether the project uses TypeScript.
    pub typescript: bool,
    /// Tailwind settings.
    pub tailwind: TailwindConfig,
    /// Import aliases.
    pub aliases: AliasConfig,
    /// Registry connection info (inert; see [`RegistryConfig`]).
    pub registry: RegistryConfig,
    /// Names of installed components.
    pub components: Vec<String>,
    /// Packages installed on behalf of components.
    pub dependencies: Vec<String>,
    /// Dev packages installed on behalf of components.
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            schema: None,
            style: Style::Default,
            typescript: true,
            tailwind: TailwindConfig::default(),
            aliases: AliasConfig::default(),
            registry: RegistryConfig::default(),
            components: Vec::new(),
            dependencies: Vec::new(),
            dev_dependencies: Vec::new(),
        }
    }
}

/// Handle for loading, mutating, and persisting a project's configuration.
///
/// Binds to `<root>/harukit.json`. Holds the in-memory configuration
/// between operations; every mutation persists immediately. No locking
/// guards concurrent CLI invocations against the same project - an
/// accepted limitation.
pub struct ConfigStore {
    path: PathBuf,
    config: ProjectConfig,
}

impl ConfigStore {
    /// Create a store bound to the configuration file under `root`.
    ///
    /// The in-memory configuration starts at defaults; call
    /// [`load`](Self::load) to pick up persisted state.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self { path: root.as_ref().join(CONFIG_FILE_NAME), config: ProjectConfig::default() }
    }

    /// Whether the configuration file exists on disk.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Path of the configuration file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current in-memory configuration.
    #[must_use]
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Replace the in-memory configuration without persisting.
    ///
    /// Used by `init` to build the initial configuration before the first
    /// [`save`](Self::save).
    pub fn set(&mut self, config: ProjectConfig) {
        self.config = config;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = ProjectConfig::default();
        assert_eq!(config.style, Style::Default);
        assert!(config.typescript);
        assert_eq!(config.tailwind.base_color, "slate");
        assert_eq!(config.aliases.components, "@/components");
        assert_eq!(config.aliases.utils, "@/lib/utils");
        assert_eq!(config.registry.ttl, 3600);
        assert!(config.components.is_empty());
    }

    #[test]
    fn test_style_serialization_is_kebab_case() {
        assert_eq!(serde_json::to_string(&Style::NewYork).unwrap(), "\"new-york\"");
        assert_eq!(serde_json::from_str::<Style>("\"default\"").unwrap(), Style::Default);
    }

    #[test]
    fn test_serialized_field_names() {
        let mut config = ProjectConfig::default();
        config.schema = Some("https://harukit.dev/schema.json".to_string());
        config.dev_dependencies.push("typescript".to_string());

        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("$schema").is_some());
        assert!(json.get("devDependencies").is_some());
        assert!(json["tailwind"].get("baseColor").is_some());
        assert!(json["tailwind"].get("cssVariables").is_some());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ProjectConfig =
            serde_json::from_str(r#"{"style": "new-york", "tailwind": {"css": "app/globals.css"}}"#)
                .unwrap();
        assert_eq!(config.style, Style::NewYork);
        assert_eq!(config.tailwind.css, "app/globals.css");
        // Untouched nested fields come from defaults
        assert_eq!(config.tailwind.base_color, "slate");
        assert!(config.typescript);
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let config: ProjectConfig =
            serde_json::from_str(r#"{"rsc": true, "tsx": false, "style": "default"}"#).unwrap();
        assert_eq!(config.style, Style::Default);
    }
}
