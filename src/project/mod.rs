//! Project detection.
//!
//! Inspects the target directory's `package.json` to infer the framework,
//! language and styling setup, and package manager in use. The result is
//! transient - computed fresh on each invocation and never persisted.

use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{NPM_LOCK_FILE, PNPM_LOCK_FILE, YARN_LOCK_FILE};
use crate::utils::fs::read_json_file;

/// Frameworks the detector can recognize, in inference precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    /// Next.js (implies React).
    NextJs,
    /// Plain React.
    React,
    /// Vue.
    Vue,
    /// Svelte.
    Svelte,
    /// No recognized framework dependency.
    Unknown,
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NextJs => write!(f, "Next.js"),
            Self::React => write!(f, "React"),
            Self::Vue => write!(f, "Vue"),
            Self::Svelte => write!(f, "Svelte"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Transient detection result for a target project.
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    /// Whether a manifest was found at all.
    pub valid: bool,
    /// Inferred framework.
    pub framework: Framework,
    /// TypeScript in use (config file or dependency).
    pub has_typescript: bool,
    /// Tailwind in use (config file or dependency).
    pub has_tailwind: bool,
    /// Package manager inferred from lock files.
    pub package_manager: &'static str,
    /// The inspected project root.
    pub root: PathBuf,
}

/// Inspects a project directory and reports what is in use.
pub struct ProjectDetector {
    root: PathBuf,
}

impl ProjectDetector {
    /// Create a detector for the given project root.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    /// Detect the project's framework, tooling, and package manager.
    ///
    /// A missing `package.json` yields `valid: false` rather than an error;
    /// the caller decides whether that is fatal for its command.
    pub fn detect(&self) -> ProjectInfo {
        let manifest_path = self.root.join("package.json");

        let Ok(manifest) = read_json_file::<Value>(&manifest_path) else {
            debug!("No readable package.json at {}", manifest_path.display());
            return ProjectInfo {
                valid: false,
                framework: Framework::Unknown,
                has_typescript: false,
                has_tailwind: false,
                package_manager: "npm",
                root: self.root.clone(),
            };
        };

        let framework = if has_dependency(&manifest, "next") {
            Framework::NextJs
        } else if has_dependency(&manifest, "react") {
            Framework::React
        } else if has_dependency(&manifest, "vue") {
            Framework::Vue
        } else if has_dependency(&manifest, "svelte") {
            Framework::Svelte
        } else {
            Framework::Unknown
        };

        ProjectInfo {
            valid: true,
            framework,
            has_typescript: self.has_typescript(&manifest),
            has_tailwind: self.has_tailwind(&manifest),
            package_manager: self.detect_package_manager(),
            root: self.root.clone(),
        }
    }

    fn has_typescript(&self, manifest: &Value) -> bool {
        self.root.join("tsconfig.json").exists() || has_dependency(manifest, "typescript")
    }

    fn has_tailwind(&self, manifest: &Value) -> bool {
        self.root.join("tailwind.config.js").exists()
            || self.root.join("tailwind.config.ts").exists()
            || has_dependency(manifest, "tailwindcss")
    }

    fn detect_package_manager(&self) -> &'static str {
        let lock_files =
            [("pnpm", PNPM_LOCK_FILE), ("yarn", YARN_LOCK_FILE), ("npm", NPM_LOCK_FILE)];

        for (manager, file) in lock_files {
            if self.root.join(file).exists() {
                return manager;
            }
        }

        "npm"
    }
}

/// Whether `name` appears in the manifest's dependencies or devDependencies.
fn has_dependency(manifest: &Value, name: &str) -> bool {
    ["dependencies", "devDependencies"]
        .iter()
        .filter_map(|section| manifest.get(section))
        .filter_map(Value::as_object)
        .any(|deps| deps.contains_key(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, content: &str) {
        std::fs::write(dir.join("package.json"), content).unwrap();
    }

    #[test]
    fn test_missing_manifest_is_invalid_not_fatal() {
        let temp = TempDir::new().unwrap();
        let info = ProjectDetector::new(temp.path()).detect();
        assert!(!info.valid);
        assert_eq!(info.framework, Framework::Unknown);
        assert_eq!(info.package_manager, "npm");
    }

    #[test]
    fn test_framework_precedence_next_over_react() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            r#"{"dependencies": {"next": "14.0.0", "react": "18.0.0"}}"#,
        );
        let info = ProjectDetector::new(temp.path()).detect();
        assert!(info.valid);
        assert_eq!(info.framework, Framework::NextJs);
    }

    #[test]
    fn test_framework_from_dev_dependencies() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), r#"{"devDependencies": {"svelte": "4.0.0"}}"#);
        let info = ProjectDetector::new(temp.path()).detect();
        assert_eq!(info.framework, Framework::Svelte);
    }

    #[test]
    fn test_typescript_via_config_file() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), r#"{"dependencies": {"react": "18.0.0"}}"#);
        std::fs::write(temp.path().join("tsconfig.json"), "{}").unwrap();
        let info = ProjectDetector::new(temp.path()).detect();
        assert!(info.has_typescript);
    }

    #[test]
    fn test_typescript_via_dependency_fallback() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), r#"{"devDependencies": {"typescript": "5.0.0"}}"#);
        let info = ProjectDetector::new(temp.path()).detect();
        assert!(info.has_typescript);
    }

    #[test]
    fn test_tailwind_via_ts_config_file() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "{}");
        std::fs::write(temp.path().join("tailwind.config.ts"), "export default {}").unwrap();
        let info = ProjectDetector::new(temp.path()).detect();
        assert!(info.has_tailwind);
    }

    #[test]
    fn test_lock_file_priority_pnpm_wins() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "{}");
        std::fs::write(temp.path().join("pnpm-lock.yaml"), "").unwrap();
        std::fs::write(temp.path().join("yarn.lock"), "").unwrap();
        std::fs::write(temp.path().join("package-lock.json"), "{}").unwrap();
        let info = ProjectDetector::new(temp.path()).detect();
        assert_eq!(info.package_manager, "pnpm");
    }

    #[test]
    fn test_lock_file_default_npm() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "{}");
        let info = ProjectDetector::new(temp.path()).detect();
        assert_eq!(info.package_manager, "npm");
    }
}
