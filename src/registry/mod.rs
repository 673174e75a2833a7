//! The component registry.
//!
//! An in-memory, statically seeded catalog of installable components and
//! their metadata. Lookups are pure reads over a fixed table; nothing here
//! mutates at runtime and nothing touches the network. The config's
//! `registry.url` field is a documented extension point, not a live
//! behavior.
//!
//! - `mod.rs` - metadata types and the [`Registry`] query surface
//! - [`catalog`] - the seeded component table

pub mod catalog;

use serde::Serialize;

/// Role of a file associated with a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// A component source file, installed under the components alias.
    Component,
    /// A shared helper module, installed under the utils alias.
    Utility,
    /// A stylesheet, installed under `src/styles`.
    Style,
    /// A project-level config file, installed at the project root.
    Config,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Component => write!(f, "component"),
            Self::Utility => write!(f, "utility"),
            Self::Style => write!(f, "style"),
            Self::Config => write!(f, "config"),
        }
    }
}

/// A template file belonging to a component.
///
/// `path` is relative to the templates root; the file content stays on
/// disk and is read through the template resolver at install time.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentFile {
    /// Destination file name.
    pub name: &'static str,
    /// Template path relative to the templates root.
    pub path: &'static str,
    /// How the installer resolves this file's destination.
    pub kind: FileKind,
}

/// Identity record for an installable component.
///
/// Immutable; sourced from the seeded table in [`catalog`], never mutated
/// at runtime.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentMeta {
    /// Unique component name (the key users type on the command line).
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Component version.
    pub version: &'static str,
    /// Category used for grouping (`Layout`, `Form`, `Feedback`).
    pub category: &'static str,
    /// Search tags.
    pub tags: &'static [&'static str],
    /// npm packages this component needs at runtime.
    pub dependencies: &'static [&'static str],
    /// npm packages this component needs at build time.
    pub dev_dependencies: &'static [&'static str],
    /// Template files installed for this component.
    pub files: &'static [ComponentFile],
    /// Author attribution.
    pub author: &'static str,
    /// License identifier.
    pub license: &'static str,
    /// Optional source repository URL.
    pub repository: Option<&'static str>,
    /// Optional documentation URL.
    pub documentation: Option<&'static str>,
}

/// Read-only query surface over the seeded component table.
pub struct Registry {
    components: &'static [ComponentMeta],
}

impl Registry {
    /// Create a registry over the seeded catalog.
    #[must_use]
    pub fn new() -> Self {
        Self { components: catalog::COMPONENTS }
    }

    /// Look up a component by exact, case-sensitive name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static ComponentMeta> {
        self.components.iter().find(|c| c.name == name)
    }

    /// All components in stable catalog order.
    #[must_use]
    pub fn all(&self) -> &'static [ComponentMeta] {
        self.components
    }

    /// Case-insensitive substring search across name, description, tags,
    /// and category.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&'static ComponentMeta> {
        let needle = query.to_lowercase();
        self.components
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.description.to_lowercase().contains(&needle)
                    || c.tags.iter().any(|t| t.to_lowercase().contains(&needle))
                    || c.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Components in the given category (exact match).
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&'static ComponentMeta> {
        self.components.iter().filter(|c| c.category == category).collect()
    }

    /// Deduplicated, sorted category list.
    #[must_use]
    pub fn categories(&self) -> Vec<&'static str> {
        let mut categories: Vec<&'static str> =
            self.components.iter().map(|c| c.category).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    /// The closest registered name to `input`, if any is close enough to be
    /// a plausible typo.
    #[must_use]
    pub fn closest_name(&self, input: &str) -> Option<&'static str> {
        self.components
            .iter()
            .map(|c| (c.name, strsim::jaro_winkler(input, c.name)))
            .filter(|(_, score)| *score > 0.8)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
